//! # Domain Models
//!
//! This crate contains the static data the generator works from: configuration rows,
//! the field names templates may reference, and the pipeline catalog.
//! Keep it lean: no I/O and no formatting logic, just data and simple lookups.

pub mod catalog;
pub mod config;
pub mod pipeline;

pub use crate::catalog::{AppChannel, FieldSet};
pub use crate::pipeline::{CteSpec, PIPELINES, Pipeline, find_pipeline};

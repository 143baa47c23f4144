//! Kernel utilities shared across the generator apps.
//! Keep this crate lightweight; today it only owns configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use qgen_kernel::config::load_config;
//! use qgen_kernel::domain::config::QgenConfig;
//!
//! let cfg: QgenConfig = load_config(None::<&str>).unwrap_or_default();
//! ```
pub mod config;

pub use qgen_domain as domain;

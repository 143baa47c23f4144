//! # Assembler
//!
//! Turns the static pipeline catalog into SQL text.
//!
//! * [`load_template`] reads a template file, [`render`] fills its `{placeholders}`
//!   from one configuration row.
//! * [`assemble`] renders a template once per row, [`join_as_cte`] chains the results
//!   with `UNION ALL` and wraps them as a common table expression.
//! * [`build_pipeline`] does all of the above for every CTE of a [`Pipeline`].
//!
//! ## Example
//!
//! ```rust
//! use qgen_assembler::{Template, assemble, join_as_cte};
//! use qgen_domain::{AppChannel, FieldSet};
//!
//! let rows = [
//!     AppChannel::new("org_mozilla_fenix", "Firefox Preview", "beta"),
//!     AppChannel::new("org_mozilla_firefox", "Fenix", "release"),
//! ];
//! let template = Template::new("SELECT '{namespace}' AS app, '{channel}' AS chan");
//!
//! let fragments = assemble(&rows, &template, FieldSet::Full)?;
//! let sql = join_as_cte("x", &fragments, true, true);
//!
//! assert!(sql.starts_with("WITH x AS ("));
//! assert!(sql.contains("'org_mozilla_firefox' AS app, 'release' AS chan"));
//! # Ok::<(), qgen_assembler::AssembleError>(())
//! ```

mod cte;
mod error;
mod pipeline;
mod template;

pub use crate::cte::{UNION_ALL, assemble, join_as_cte};
pub use crate::error::{AssembleError, AssembleErrorExt, Result};
pub use crate::pipeline::{build_named, build_pipeline, template_dir};
pub use crate::template::{Fields, Segment, Segments, Template, load_template, render};
pub use qgen_domain::{AppChannel, CteSpec, FieldSet, Pipeline};

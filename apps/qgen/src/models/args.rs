//! # CLI Argument Definitions
//!
//! Command-line structure of the generator, built with `clap` derive.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "qgen")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Generates SQL CTE chains from templates and static app tables")]
pub(crate) struct Cli {
    /// Configuration file (defaults to `qgen.*` in the working directory, if present)
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// List known pipelines with the CTEs they emit
    List {},
    /// Render a pipeline and print the SQL to stdout
    Render {
        /// Pipeline name (see `qgen list`)
        pipeline: String,

        /// Directory the pipeline template paths are resolved against
        #[arg(short, long)]
        root: Option<PathBuf>,
    },
}

#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod handlers;
mod models;

use crate::handlers::{list, render};
use crate::models::args::{Cli, Commands};

use anyhow::{Context, Result};
use clap::Parser;
use qgen_kernel::config::load_config;
use qgen_kernel::domain::config::QgenConfig;
use qgen_logger::{Logger, parse_level};
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg: QgenConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg)?;
    debug!(templates_root = %cfg.templates_root.display(), "Configuration loaded");

    match cli.command {
        Commands::List {} => list::list_pipelines()?,
        Commands::Render { pipeline, root } => {
            let root = root.unwrap_or(cfg.templates_root);
            render::render_pipeline(&pipeline, &root)?;
        },
    }

    Ok(())
}

fn init_logger(cfg: &QgenConfig) -> Result<Logger> {
    let mut builder =
        Logger::builder().name(env!("CARGO_PKG_NAME")).level(parse_level(&cfg.log.level)?);

    if let Some(filter) = &cfg.log.filter {
        builder = builder.env_filter(filter);
    }
    if let Some(directory) = &cfg.log.directory {
        builder = builder.path(directory);
    }

    builder.init().context("Failed to initialize logging")
}

use anyhow::{Context, Result};
use qgen_assembler::build_named;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Builds `pipeline` from templates under `root` and prints the SQL to stdout.
///
/// Nothing is printed unless the whole pipeline renders.
///
/// # Errors
/// Returns an error if the pipeline is unknown, a template cannot be read or rendered,
/// or stdout cannot be written.
pub(crate) fn render_pipeline(pipeline: &str, root: &Path) -> Result<()> {
    info!(pipeline, root = %root.display(), "Rendering pipeline");

    let sql = build_named(root, pipeline)
        .with_context(|| format!("Failed to render pipeline '{pipeline}'"))?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{sql}").context("Failed to write SQL to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}

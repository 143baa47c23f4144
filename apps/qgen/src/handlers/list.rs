use anyhow::Result;
use qgen_domain::{PIPELINES, Pipeline};
use std::fmt::Write as FmtWrite;

/// Prints the pipeline catalog as a table.
///
/// # Errors
/// Returns an error if the table cannot be formatted.
pub(crate) fn list_pipelines() -> Result<()> {
    print!("{}", render_pipeline_table(&PIPELINES)?);
    Ok(())
}

fn render_pipeline_table(pipelines: &[Pipeline]) -> Result<String> {
    let mut w = String::new();
    writeln!(w, "\nPipelines:\n")?;
    writeln!(w, "{:<36} {:<36} {}", "Name", "CTEs", "Description")?;
    writeln!(w, "{:-<110}", "")?;

    for pipeline in pipelines {
        let ctes = pipeline.cte_names().collect::<Vec<_>>().join(", ");
        writeln!(w, "{:<36} {:<36} {}", pipeline.name, ctes, pipeline.description)?;
    }
    writeln!(w)?;

    Ok(w)
}

use crate::cte::{assemble, join_as_cte};
use crate::error::{AssembleError, AssembleErrorExt, Result};
use crate::template::{Template, load_template};
use fxhash::FxHashSet;
use qgen_domain::{CteSpec, Pipeline, find_pipeline};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Builds the full `WITH` chain of `pipeline`, reading templates under `root`.
///
/// Every template is loaded and rendered before anything is returned, so a failure in
/// a later CTE leaves no partial output behind. CTEs are separated by a newline.
///
/// # Errors
/// Returns [`AssembleError::Io`] for a missing template and the render errors of
/// [`crate::render`] with the template file, the CTE, the placeholders the template uses
/// and the fields it is allowed attached as context.
pub fn build_pipeline(root: impl AsRef<Path>, pipeline: &Pipeline) -> Result<String> {
    let dir = template_dir(root.as_ref(), pipeline);
    let last = pipeline.ctes.len().saturating_sub(1);

    let mut ctes = Vec::with_capacity(pipeline.ctes.len());
    for (idx, spec) in pipeline.ctes.iter().enumerate() {
        let template = load_template(dir.join(spec.template))?;
        let fragments = match assemble(pipeline.rows, &template, spec.fields) {
            Ok(fragments) => fragments,
            Err(e) => return Err(e).context(failure_context(&template, spec)),
        };

        debug!(cte = spec.name, fragments = fragments.len(), "Rendered CTE");
        ctes.push(join_as_cte(spec.name, &fragments, idx == 0, idx == last));
    }

    info!(pipeline = pipeline.name, ctes = ctes.len(), rows = pipeline.rows.len(), "Assembled pipeline");

    Ok(ctes.join("\n"))
}

// Falls back to the bare label when the template itself is malformed.
fn failure_context(template: &Template, spec: &CteSpec) -> String {
    let origin = format!("{} in {}", template.label(), spec.name);
    let Ok(mut used) = template.placeholders() else {
        return origin;
    };

    let mut seen = FxHashSet::default();
    used.retain(|name| seen.insert(*name));

    format!("{origin}; uses {}; allowed {}", used.join(", "), spec.fields.names().join(", "))
}

/// Looks up `name` in the catalog and builds it.
///
/// # Errors
/// Returns [`AssembleError::UnknownPipeline`] if no pipeline has that name, otherwise
/// the errors of [`build_pipeline`].
pub fn build_named(root: impl AsRef<Path>, name: &str) -> Result<String> {
    let pipeline =
        find_pipeline(name).ok_or_else(|| AssembleError::UnknownPipeline { name: name.to_owned() })?;
    build_pipeline(root, pipeline)
}

/// Directory holding the templates of `pipeline` under `root`.
#[must_use]
pub fn template_dir(root: &Path, pipeline: &Pipeline) -> PathBuf {
    root.join(pipeline.template_dir)
}

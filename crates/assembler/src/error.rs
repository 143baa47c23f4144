use std::borrow::Cow;
use std::path::PathBuf;

/// Errors raised while loading, rendering or assembling templates.
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    /// The template file is missing or unreadable.
    #[error("Failed to read template '{}'{}: {source}", path.display(), format_context(context))]
    Io { path: PathBuf, source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The template references a placeholder the row does not provide.
    #[error("Unknown placeholder '{{{name}}}'{}", format_context(context))]
    MissingPlaceholder { name: String, context: Option<Cow<'static, str>> },

    /// Brace syntax that is not a plain named placeholder.
    #[error("Malformed template at byte {offset}{}: {reason}", format_context(context))]
    Malformed { offset: usize, reason: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// No pipeline is registered under this name.
    #[error("Unknown pipeline '{name}'")]
    UnknownPipeline { name: String },
}

pub type Result<T, E = AssembleError> = std::result::Result<T, E>;

/// Adds `.context(...)` to assembler results.
pub trait AssembleErrorExt<T> {
    /// Attaches context to the error, if the variant carries any.
    ///
    /// # Errors
    /// Returns the original error with the context attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T> AssembleErrorExt<T> for Result<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                AssembleError::Io { context: c, .. }
                | AssembleError::MissingPlaceholder { context: c, .. }
                | AssembleError::Malformed { context: c, .. } => *c = Some(context.into()),
                AssembleError::UnknownPipeline { .. } => {},
            }
            e
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

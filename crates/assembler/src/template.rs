//! Brace-delimited named placeholders, in the dialect the SQL templates are written in.
//!
//! `{name}` is replaced by the field value, `{{` and `}}` are literal braces.
//! Anything else between braces (conversions, format specs, attribute or index access,
//! positional `{}`) is rejected as malformed rather than interpreted.

use crate::error::{AssembleError, Result};
use fxhash::FxHashMap;
use qgen_domain::{AppChannel, FieldSet};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Template text, optionally remembering the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
    path: Option<PathBuf>,
}

/// Values available to a template during rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields<'a> {
    values: FxHashMap<&'a str, &'a str>,
}

/// A piece of parsed template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// Reads a template file in full.
///
/// # Errors
/// Returns [`AssembleError::Io`] naming `path` if the file is missing, unreadable,
/// or not valid UTF-8.
pub fn load_template(path: impl AsRef<Path>) -> Result<Template> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| AssembleError::Io {
        path: path.to_path_buf(),
        source,
        context: None,
    })?;

    debug!(path = %path.display(), bytes = text.len(), "Loaded template");

    Ok(Template { text, path: Some(path.to_path_buf()) })
}

/// Substitutes every placeholder in `template` with the matching value from `fields`.
///
/// # Errors
/// Returns [`AssembleError::MissingPlaceholder`] for a name `fields` does not provide and
/// [`AssembleError::Malformed`] for invalid brace syntax. Nothing is returned on failure.
pub fn render(template: &Template, fields: &Fields<'_>) -> Result<String> {
    let mut out = String::with_capacity(template.text.len());

    for segment in template.segments() {
        match segment? {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(name) => {
                let value = fields.get(name).ok_or_else(|| AssembleError::MissingPlaceholder {
                    name: name.to_owned(),
                    context: None,
                })?;
                out.push_str(value);
            },
        }
    }

    Ok(out)
}

impl Template {
    /// Wraps in-memory text as a template.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), path: None }
    }

    /// Short label for diagnostics: the file name, or `<inline>`.
    #[must_use]
    pub fn label(&self) -> Cow<'static, str> {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map_or(Cow::Borrowed("<inline>"), |n| Cow::Owned(n.to_string_lossy().into_owned()))
    }

    /// Iterates over literal text and placeholders, in order.
    #[must_use]
    pub fn segments(&self) -> Segments<'_> {
        Segments { text: &self.text, pos: 0 }
    }

    /// Placeholder names in order of appearance, duplicates included.
    ///
    /// The pipeline build reports these next to the allowed field set when rendering fails.
    ///
    /// # Errors
    /// Returns [`AssembleError::Malformed`] on the first invalid brace sequence.
    pub fn placeholders(&self) -> Result<Vec<&str>> {
        self.segments()
            .filter_map(|s| match s {
                Ok(Segment::Placeholder(name)) => Some(Ok(name)),
                Ok(Segment::Literal(_)) => None,
                Err(e) => Some(Err(e)),
            })
            .collect()
    }
}

impl<'a> Fields<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a value.
    #[must_use]
    pub fn with(mut self, name: &'a str, value: &'a str) -> Self {
        self.values.insert(name, value);
        self
    }

    /// Exposes the fields of `row` allowed by `set`.
    #[must_use]
    pub fn project(row: &'a AppChannel, set: FieldSet) -> Self {
        let values =
            set.names().iter().filter_map(|&name| row.field(name).map(|v| (name, v))).collect();
        Self { values }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.values.get(name).copied()
    }
}

/// Iterator returned by [`Template::segments`]. Stops after the first error.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Segments<'a> {
    fn fail(&mut self, offset: usize, reason: &'static str) -> Option<Result<Segment<'a>>> {
        self.pos = self.text.len();
        Some(Err(AssembleError::Malformed { offset, reason: reason.into(), context: None }))
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Result<Segment<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let rest = self.text.get(start..)?;
        if rest.is_empty() {
            return None;
        }

        let Some(idx) = rest.find(['{', '}']) else {
            self.pos = self.text.len();
            return Some(Ok(Segment::Literal(rest)));
        };

        if idx > 0 {
            self.pos = start + idx;
            return Some(Ok(Segment::Literal(&rest[..idx])));
        }

        // `rest` starts with a brace.
        let bytes = rest.as_bytes();
        let brace = bytes[0];
        if bytes.get(1) == Some(&brace) {
            self.pos = start + 2;
            return Some(Ok(Segment::Literal(&rest[..1])));
        }
        if brace == b'}' {
            return self.fail(start, "single '}' encountered in format string");
        }

        let body = &rest[1..];
        let Some(end) = body.find('}') else {
            return self.fail(start, "expected '}' before end of string");
        };
        let name = &body[..end];

        if name.is_empty() {
            return self.fail(start, "positional placeholder '{}' has no field name");
        }
        if name.contains('{') {
            return self.fail(start, "unexpected '{' in field name");
        }
        if name.contains(['!', ':', '.', '[']) {
            return self.fail(
                start,
                "conversions, format specs and field access are valid brace-format syntax \
                 but not supported by this renderer",
            );
        }

        self.pos = start + end + 2;
        Some(Ok(Segment::Placeholder(name)))
    }
}

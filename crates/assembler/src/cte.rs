use crate::error::Result;
use crate::template::{Fields, Template, render};
use qgen_domain::{AppChannel, FieldSet};

/// Separator placed between rendered fragments inside one CTE body.
pub const UNION_ALL: &str = "\nUNION ALL\n";

/// Renders `template` once per row, preserving row order.
///
/// # Errors
/// Fails on the first row whose rendering fails. See [`render`].
pub fn assemble(rows: &[AppChannel], template: &Template, fields: FieldSet) -> Result<Vec<String>> {
    rows.iter().map(|row| render(template, &Fields::project(row, fields))).collect()
}

/// Joins `fragments` with [`UNION_ALL`] and wraps them as one link of a `WITH` chain.
///
/// `WITH ` is emitted only for the first CTE and the trailing comma is dropped only
/// for the last. The body is inserted as-is after a four-space indent.
#[must_use]
pub fn join_as_cte<S: AsRef<str>>(
    name: &str,
    fragments: &[S],
    is_first: bool,
    is_last: bool,
) -> String {
    let body = fragments.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(UNION_ALL);
    let with = if is_first { "WITH " } else { "" };
    let comma = if is_last { "" } else { "," };

    format!("{with}{name} AS (\n    {body}\n){comma}")
}

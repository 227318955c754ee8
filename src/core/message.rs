//! Message body rendering

use std::fmt::{self, Display, Write};

/// Concatenate `values` with no separator.
///
/// This is the single rendering used by every non-template write form;
/// template forms go through `format_args!` instead.
pub fn concat(values: &[&dyn Display]) -> String {
    let mut out = String::new();
    for value in values {
        // Writing into a String cannot fail
        let _ = write!(out, "{}", value);
    }
    out
}

/// Render `message` followed by a line terminator.
pub(crate) fn with_newline(message: impl Display) -> String {
    format!("{}\n", message)
}

/// Render a template with its arguments substituted.
pub(crate) fn from_args(args: fmt::Arguments<'_>) -> String {
    match args.as_str() {
        Some(literal) => literal.to_string(),
        None => fmt::format(args),
    }
}

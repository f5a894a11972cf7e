//! Failure-tolerant formatting entry point.

use crate::{markup, stylesheet};
use tracing::warn;
use trellis_core::FormatError;

/// Which formatter to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Markup,
    Stylesheet,
}

/// Canonicalize whitespace and indentation of generated output.
///
/// Idempotent: `format(format(x)) == format(x)`. On internal failure the
/// original text is returned unchanged; formatting is a cosmetic pass and
/// must never be load-bearing.
pub fn format(text: &str, kind: FormatKind) -> String {
    let result = match kind {
        FormatKind::Markup => markup::format_markup(text),
        FormatKind::Stylesheet => stylesheet::format_stylesheet(text),
    };

    match result {
        Ok(formatted) => formatted,
        Err(error) => {
            warn!(%error, "formatting failed, returning input unchanged");
            text.to_string()
        }
    }
}

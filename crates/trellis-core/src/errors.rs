//! Error types for the Trellis generator.
//!
//! Generation itself degrades gracefully and always returns a best-effort
//! result; only the export/archive step fails loudly. Formatter errors exist
//! so the formatter can fall back to its input, and never cross the public
//! API.

use thiserror::Error;

/// Errors while formatting generated markup or stylesheets.
///
/// These are recovered locally: the formatter logs and returns its input
/// unchanged. Formatting is cosmetic, never load-bearing.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Unterminated tag starting at byte {offset}")]
    UnterminatedTag { offset: usize },

    #[error("Unterminated comment starting at byte {offset}")]
    UnterminatedComment { offset: usize },

    #[error("Missing closing tag for <{element}>")]
    UnterminatedRawElement { element: String },

    #[error("Unbalanced braces in stylesheet: {open} unclosed at end of input")]
    UnbalancedBraces { open: usize },

    #[error("Unmatched closing brace at byte {offset}")]
    UnmatchedClosingBrace { offset: usize },
}

/// Errors during archive export.
///
/// The only fatal, caller-visible failure mode in the pipeline. The original
/// cause is preserved so callers can diagnose.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),
}

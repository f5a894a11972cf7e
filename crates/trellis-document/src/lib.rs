//! Document assembly and output formatting for Trellis.
//!
//! [`assemble`] merges the generated markup, stylesheet, optional script, and
//! optional head injection into one complete HTML document with a fixed
//! shape. [`format`] canonicalizes whitespace and indentation of generated
//! markup or stylesheets; it is idempotent and falls back to its input on any
//! internal failure, so it can never make output worse than unformatted.

mod assemble;
mod format;
mod markup;
mod stylesheet;

pub use assemble::assemble;
pub use format::{format, FormatKind};

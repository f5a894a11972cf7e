//! Generation pipeline and archive export.
//!
//! This crate is the join point of the generator: it runs the markup, style,
//! and script stages over one tree snapshot, assembles and formats the full
//! document, and optionally packages everything (plus project scaffolding)
//! into a downloadable zip archive.

mod archive;
mod pipeline;
mod scaffold;

pub use archive::{export_project, ProjectArchive};
pub use pipeline::{generate_site, GeneratedSite};

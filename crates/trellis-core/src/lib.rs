//! Core types and utilities for the Trellis site generator.
//!
//! This crate provides the foundational types used across all other trellis crates:
//! - Component tree node types (the editor-facing JSON model)
//! - Animation and custom-code attachments
//! - Generation and export option records
//! - Error types

pub mod animation;
pub mod component;
pub mod errors;
pub mod options;

pub use animation::*;
pub use component::*;
pub use errors::*;
pub use options::*;

//! Configuration parsing
//!
//! This module handles reading of elz.config.yml project files
//! through a loosely-typed YAML value tree.

pub mod project;
pub mod value;

// Re-export main types
pub use project::*;
pub use value::*;

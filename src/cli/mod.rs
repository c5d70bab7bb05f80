//! CLI interface
//!
//! This module handles top-level flags, command dispatch and help text.

pub mod app;
pub mod commands;
pub mod help;

// Re-export main types
pub use app::*;
pub use commands::Command;

//! Elz - A tool for managing Elizalina translations
//!
//! The command line is tokenized once into [`args::Args`], then every command
//! pulls the flags and values it expects. Whatever is left over is reported
//! as a usage error.

// Public modules
pub mod args;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

// Re-export commonly used types
pub use error::{ElzError, ExitReason, Result};

/// Current version of Elz
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

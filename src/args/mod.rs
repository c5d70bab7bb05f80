//! Command-line argument parsing
//!
//! Arguments are tokenized once, then pulled by the command handlers.

pub mod resolve;
pub mod token;

// Re-export main types
pub use resolve::*;
pub use token::*;

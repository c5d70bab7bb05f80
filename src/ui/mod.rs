//! Terminal output
//!
//! Help text and errors are wrapped to the terminal width before printing.

pub mod printer;
pub mod terminal;
pub mod wrap;

pub use printer::Printer;
pub use terminal::TerminalInfo;

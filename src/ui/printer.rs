//! Formatted console output

use crate::error::ElzError;
use crate::ui::terminal::TerminalInfo;
use crate::ui::wrap::{indentfs, indents, wrap};
use colored::Colorize;
use std::fmt::Display;

/// Indentation of error details and usage examples
const DETAIL_INDENT: usize = 3;

/// Console output settings shared by all commands
#[derive(Debug, Clone)]
pub struct Printer {
    /// Program name used in hints, e.g. `elz init`
    pub program: String,

    /// Whether colors may be used
    pub color: bool,
}

impl Printer {
    /// Create a printer for `program`
    pub fn new(program: impl Into<String>) -> Self {
        Printer {
            program: program.into(),
            color: true,
        }
    }

    /// Print wrapped text on the standard output
    pub fn show(&self, msg: &str) {
        for line in wrap(msg, TerminalInfo::stdout().width) {
            println!("{}", line);
        }
    }

    /// Print a description followed by usage examples
    pub fn show_usage(&self, explanation: &str, examples: &[&str]) {
        for line in render_usage(explanation, examples) {
            println!("{}", line);
        }
    }

    /// Print an option name with its wrapped description
    pub fn describe_option(&self, name: &str, description: &str) {
        for line in render_option(name, description, TerminalInfo::stdout().width) {
            println!("{}", line);
        }
    }

    /// Print an error message and its details on the standard error
    pub fn print_error<D: Display>(&self, msg: &str, details: &[D]) {
        let term = TerminalInfo::stderr();
        let styled = self.color && term.supports_color;

        for line in render_error(msg, details, term.width) {
            if styled {
                eprintln!("{}", line.as_str().bright_red());
            } else {
                eprintln!("{}", line);
            }
        }
    }

    /// Report an error that ends the program
    pub fn report(&self, err: &ElzError) {
        self.print_error(&err.to_string(), err.details());
        if let Some(hint) = self.hint(err) {
            eprintln!("{}", hint);
        }
    }

    /// Suggestion printed after usage errors
    pub fn hint(&self, err: &ElzError) -> Option<String> {
        match err {
            ElzError::Usage { .. } => Some(format!("run '{} --help' for usage", self.program)),
            _ => None,
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new("elz")
    }
}

/// Lines of an error message with its indented details
pub fn render_error<D: Display>(msg: &str, details: &[D], width: usize) -> Vec<String> {
    let mut lines = vec![format!("Error: {}", msg)];
    for detail in details {
        let wrapped = wrap(&detail.to_string(), width.saturating_sub(DETAIL_INDENT));
        lines.extend(indents(DETAIL_INDENT, &wrapped));
    }
    lines
}

/// Lines of a usage block
pub fn render_usage(explanation: &str, examples: &[&str]) -> Vec<String> {
    let mut lines = vec![explanation.to_string(), String::new(), "Usage:".to_string()];
    let examples: Vec<String> = examples.iter().map(|e| e.to_string()).collect();
    lines.extend(indents(DETAIL_INDENT, &examples));
    lines
}

/// Lines of an option description, aligned after the option name
pub fn render_option(name: &str, description: &str, width: usize) -> Vec<String> {
    let name = format!("   {}  ", name);
    let size = name.chars().count();
    indentfs(&name, size, &wrap(description, width.saturating_sub(size)))
}

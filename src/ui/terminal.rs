//! Terminal capabilities

use std::io::{self, IsTerminal};
use std::sync::OnceLock;

/// Width used when the output is not a terminal
pub const DEFAULT_WIDTH: usize = 80;

/// Terminal capabilities of an output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalInfo {
    pub is_tty: bool,
    pub supports_color: bool,
    pub width: usize,
}

impl TerminalInfo {
    /// Detect capabilities from whether the stream is a terminal
    pub fn detect(is_tty: bool) -> Self {
        let width = if is_tty {
            crossterm::terminal::size()
                .ok()
                .map(|(cols, _)| cols as usize)
                .filter(|&cols| cols > 0)
                .unwrap_or(DEFAULT_WIDTH)
        } else {
            DEFAULT_WIDTH
        };

        TerminalInfo {
            is_tty,
            supports_color: is_tty,
            width,
        }
    }

    /// Cached capabilities of the standard output
    pub fn stdout() -> Self {
        static INFO: OnceLock<TerminalInfo> = OnceLock::new();
        *INFO.get_or_init(|| Self::detect(io::stdout().is_terminal()))
    }

    /// Cached capabilities of the standard error
    pub fn stderr() -> Self {
        static INFO: OnceLock<TerminalInfo> = OnceLock::new();
        *INFO.get_or_init(|| Self::detect(io::stderr().is_terminal()))
    }
}

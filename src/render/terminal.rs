//! Read-only probes of the output terminal.

use std::io::{self, IsTerminal};

/// Columns assumed when the terminal width can't be determined.
pub const FALLBACK_COLUMNS: usize = 80;

/// Escape sequence that resets all text attributes.
pub const RESET: &str = "\x1b[0m";

/// Whether to emit colour escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Colour only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// From `--color` / `--no-color` style flags; neither means auto.
    pub fn from_flags(force_on: bool, force_off: bool) -> Self {
        match (force_on, force_off) {
            (true, _) => ColorChoice::Always,
            (false, true) => ColorChoice::Never,
            (false, false) => ColorChoice::Auto,
        }
    }

    /// Resolve against the actual stdout.
    pub fn enabled(self) -> bool {
        self.resolve(io::stdout().is_terminal())
    }

    /// Resolve given whether the destination is an interactive terminal.
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_terminal,
        }
    }
}

/// Usable terminal columns.
///
/// An explicit override wins, then a positive `COLUMNS` environment
/// variable, then the size reported by the terminal, then 80.
pub fn terminal_columns(override_columns: Option<usize>) -> usize {
    if let Some(columns) = override_columns.filter(|&c| c > 0) {
        return columns;
    }
    if let Some(columns) = columns_from_env(std::env::var("COLUMNS").ok().as_deref()) {
        return columns;
    }
    match crossterm::terminal::size() {
        Ok((columns, _)) if columns > 0 => columns as usize,
        _ => FALLBACK_COLUMNS,
    }
}

fn columns_from_env(value: Option<&str>) -> Option<usize> {
    value?.trim().parse::<usize>().ok().filter(|&c| c > 0)
}

/// Best-effort console setup so 24-bit escapes render. Failures are ignored.
pub fn init_console() {
    #[cfg(windows)]
    {
        let _ = crossterm::ansi_support::supports_ansi();
    }
}

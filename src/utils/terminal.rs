//! Terminal utilities for title setting and output styling

use std::io::{IsTerminal, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const MUTE: &str = "\x1b[2m";
const ITALIC: &str = "\x1b[3m";
const UNDERLINE: &str = "\x1b[4m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const BLUE_BG: &str = "\x1b[44m";

/// Sets the terminal title to the specified text
pub fn set_terminal_title(title: &str) {
    if std::io::stdout().is_terminal() {
        // ANSI escape sequence to set terminal title
        print!("\x1b]0;{}\x07", title);
    }
}

/// Sets the terminal title and ensures it's flushed to the terminal
pub fn set_terminal_title_and_flush(title: &str) {
    set_terminal_title(title);
    // Flush stdout - ignore errors as this is non-critical
    let _ = std::io::stdout().flush();
}

/// ANSI styling that collapses to plain text when disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    enabled: bool,
}

impl Style {
    /// Styled output only when stdout is a terminal
    pub fn detect() -> Self {
        Self {
            enabled: std::io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    #[cfg(test)]
    fn colored() -> Self {
        Self { enabled: true }
    }

    fn paint(&self, codes: &[&str], text: &str) -> String {
        if self.enabled {
            format!("{}{text}{RESET}", codes.concat())
        } else {
            text.to_string()
        }
    }

    pub fn failure(&self, text: &str) -> String {
        self.paint(&[BOLD, RED], text)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(&[BOLD, GREEN], text)
    }

    pub fn label(&self, text: &str) -> String {
        self.paint(&[UNDERLINE], text)
    }

    pub fn name(&self, text: &str) -> String {
        self.paint(&[BOLD, UNDERLINE, BLUE_BG], text)
    }

    pub fn code(&self, text: &str) -> String {
        self.paint(&[ITALIC, MUTE, GREEN], text)
    }

    pub fn rule(&self, width: usize) -> String {
        self.paint(&[MUTE], &"=".repeat(width))
    }
}

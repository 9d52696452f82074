//! Terminal colors for quickdocs output.

use std::io::IsTerminal;

use owo_colors::OwoColorize;

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    fn is_terminal(self) -> bool {
        match self {
            Self::Stdout => std::io::stdout().is_terminal(),
            Self::Stderr => std::io::stderr().is_terminal(),
        }
    }
}

/// Result lines such as "Panel saved".
pub fn success(text: impl AsRef<str>) -> String {
    let text = text.as_ref();
    if Stream::Stdout.is_terminal() {
        text.green().to_string()
    } else {
        text.to_string()
    }
}

pub fn warning(text: impl AsRef<str>) -> String {
    let text = text.as_ref();
    if Stream::Stdout.is_terminal() {
        text.yellow().to_string()
    } else {
        text.to_string()
    }
}

/// The final `Error:` line, printed to stderr.
pub fn error(text: impl AsRef<str>) -> String {
    let text = text.as_ref();
    if Stream::Stderr.is_terminal() {
        text.red().bold().to_string()
    } else {
        text.to_string()
    }
}

/// Category names and web view field labels.
pub fn accent(text: impl AsRef<str>) -> String {
    let text = text.as_ref();
    if Stream::Stdout.is_terminal() {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

//! ANSI color codes and terminal styling.

use std::fmt;
use std::io::{self, IsTerminal};

const ESC: &str = "\x1b[";
const RESET: &str = "\x1b[0m";

/// Check if stdout is a terminal that supports colors.
pub fn stdout_supports_color() -> bool {
    io::stdout().is_terminal() && !no_color_env()
}

/// Check if stderr is a terminal that supports colors.
pub fn stderr_supports_color() -> bool {
    io::stderr().is_terminal() && !no_color_env()
}

/// Check if the NO_COLOR environment variable is set.
fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Terminal colors used by the per-file report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
}

impl Color {
    fn fg_code(self) -> &'static str {
        match self {
            Color::Red => "31",
            Color::Green => "32",
            Color::Yellow => "33",
        }
    }
}

/// A string with an optional color and weight, rendered as ANSI only when
/// enabled.
#[derive(Debug, Clone)]
pub struct Styled {
    content: String,
    color: Option<Color>,
    bold: bool,
    dim: bool,
    enabled: bool,
}

impl Styled {
    /// Create a styled string with explicit color support setting.
    pub fn with_color_support(content: impl Into<String>, enabled: bool) -> Self {
        Self {
            content: content.into(),
            color: None,
            bold: false,
            dim: false,
            enabled,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn red(self) -> Self {
        self.color(Color::Red)
    }

    pub fn green(self) -> Self {
        self.color(Color::Green)
    }

    pub fn yellow(self) -> Self {
        self.color(Color::Yellow)
    }
}

impl fmt::Display for Styled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut codes = Vec::new();
        if self.bold {
            codes.push("1");
        }
        if self.dim {
            codes.push("2");
        }
        if let Some(color) = self.color {
            codes.push(color.fg_code());
        }

        if !self.enabled || codes.is_empty() {
            return f.write_str(&self.content);
        }
        write!(f, "{}{}m{}{}", ESC, codes.join(";"), self.content, RESET)
    }
}

/// Format a file size in human-readable form.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_no_formatting() {
        let s = Styled::with_color_support("hello", true);
        assert_eq!(s.to_string(), "hello");
    }

    #[test]
    fn test_styled_with_color_disabled() {
        let s = Styled::with_color_support("hello", false).red().bold();
        assert_eq!(s.to_string(), "hello");
    }

    #[test]
    fn test_styled_with_color_enabled() {
        let s = Styled::with_color_support("hello", true).yellow();
        assert_eq!(s.to_string(), "\x1b[33mhello\x1b[0m");
    }

    #[test]
    fn test_styled_bold_red() {
        let s = Styled::with_color_support("oops", true).bold().red();
        assert_eq!(s.to_string(), "\x1b[1;31moops\x1b[0m");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_size(2 * 1024 * 1024 * 1024), "2.0 GB");
    }
}

//! Terminal utilities for colored per-file output.

pub mod colors;
pub mod report;

pub use colors::{Color, Styled, format_size, stderr_supports_color, stdout_supports_color};
pub use report::{RunStats, print_failure, print_success, print_summary};

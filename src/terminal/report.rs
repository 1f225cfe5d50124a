//! Per-file result lines and the closing summary.

use super::colors::{Styled, format_size, stderr_supports_color, stdout_supports_color};
use std::path::Path;
use std::time::Duration;

/// Statistics for one run over a list of files.
#[derive(Debug, Default, Clone)]
pub struct RunStats {
    /// Files stripped and written.
    pub processed: usize,
    /// Files that failed.
    pub failed: usize,
    /// Total bytes removed across all processed files.
    pub bytes_removed: u64,
    /// Wall-clock time of the run.
    pub duration: Duration,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_success(&mut self, bytes_removed: u64) {
        self.processed += 1;
        self.bytes_removed += bytes_removed;
    }

    pub fn add_failure(&mut self) {
        self.failed += 1;
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Process exit status: the number of failed files, saturated to fit.
    pub fn exit_status(&self) -> u8 {
        u8::try_from(self.failed).unwrap_or(u8::MAX)
    }
}

/// `<input>: success (...)` line for a file that was written.
pub fn success_line(input: &Path, output: &Path, bytes_removed: u64, color: bool) -> String {
    let mut line = format!(
        "{}: {} (removed {}",
        Styled::with_color_support(input.display().to_string(), color).yellow(),
        Styled::with_color_support("success", color).green(),
        format_size(bytes_removed)
    );
    if output != input {
        let name = output.file_name().unwrap_or_default().to_string_lossy();
        line.push_str(&format!(
            " {} {}",
            Styled::with_color_support("\u{2192}", color).dim(),
            name
        ));
    }
    line.push(')');
    line
}

/// `<input>: <message>` line for a file that failed.
pub fn failure_line(input: &Path, message: &str, color: bool) -> String {
    format!(
        "{}: {}",
        Styled::with_color_support(input.display().to_string(), color).yellow(),
        Styled::with_color_support(message, color).red()
    )
}

/// Print a success line to stdout.
pub fn print_success(input: &Path, output: &Path, bytes_removed: u64) {
    println!(
        "{}",
        success_line(input, output, bytes_removed, stdout_supports_color())
    );
}

/// Print a failure line to stderr.
pub fn print_failure(input: &Path, message: &str) {
    eprintln!("{}", failure_line(input, message, stderr_supports_color()));
}

/// One-line summary of the run.
pub fn summary_line(stats: &RunStats, color: bool) -> String {
    let mut line = format!(
        "{} file(s) stripped, {} removed in {:.1}s",
        Styled::with_color_support(stats.processed.to_string(), color).bold(),
        format_size(stats.bytes_removed),
        stats.duration.as_secs_f64()
    );
    if stats.failed > 0 {
        line.push_str(&format!(
            ", {}",
            Styled::with_color_support(format!("{} failed", stats.failed), color)
                .red()
                .bold()
        ));
    }
    line
}

/// Print the run summary unless quiet.
pub fn print_summary(stats: &RunStats, quiet: bool) {
    if quiet {
        return;
    }
    println!();
    println!("{}", summary_line(stats, stdout_supports_color()));
}

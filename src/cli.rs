//! Command-line argument parsing for stripjpg.

use crate::error::Result;
use crate::jpeg::StripOptions;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Application name.
pub const NAME: &str = "stripjpg";

#[derive(Parser, Debug)]
#[command(name = NAME, version)]
#[command(about = "Strip all non-image data from JPEG files")]
#[command(long_about = "\
Strip all non-image data from JPEG files.

This includes ICC color profiles, EXIF, XMP, IPTC, comments and embedded
thumbnails. Only the quantization and Huffman tables, the frame header,
the restart interval and the scan data are kept, behind a fresh minimal
JFIF header.

By default a new file is created next to each input, adding '.stripped'
before the extension. If that file already exists, a number is appended
to make the name unique. Use -o to overwrite each input instead.

The exit status is 0 if all files were processed successfully, otherwise
the number of files with errors.")]
pub struct Cli {
    /// Overwrite each input file instead of writing a .stripped copy
    #[arg(short = 'o', long)]
    pub overwrite: bool,

    /// Do not insert a minimal JFIF APP0 header after SOI
    #[arg(long)]
    pub no_jfif: bool,

    /// Number of files processed in parallel (default: available cores)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: Option<u16>,

    /// Log every kept and dropped segment
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report files that failed
    #[arg(short, long)]
    pub quiet: bool,

    /// JPEG files to strip
    #[arg(value_name = "JPEG")]
    pub paths: Vec<PathBuf>,
}

/// Runtime configuration resolved from command-line arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input files.
    pub paths: Vec<PathBuf>,
    /// Replace each input instead of creating a `.stripped` copy.
    pub overwrite: bool,
    /// Insert a minimal JFIF header.
    pub jfif: bool,
    /// Number of parallel jobs; `None` uses the available parallelism.
    pub jobs: Option<usize>,
    /// Log segment decisions.
    pub verbose: bool,
    /// Suppress success lines and the summary.
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            overwrite: false,
            jfif: true,
            jobs: None,
            verbose: false,
            quiet: false,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            paths: cli.paths,
            overwrite: cli.overwrite,
            jfif: !cli.no_jfif,
            jobs: cli.jobs.map(usize::from),
            verbose: cli.verbose,
            quiet: cli.quiet,
        }
    }
}

impl Config {
    /// Parse configuration from command-line arguments, program name first.
    ///
    /// Rejected arguments, `--help` and `--version` come back as
    /// [`Error::Cli`](crate::Error::Cli).
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<std::ffi::OsString> + Clone,
    {
        Ok(Cli::try_parse_from(args)?.into())
    }

    /// Options for the rewriter.
    pub fn strip_options(&self) -> StripOptions {
        StripOptions { jfif: self.jfif }
    }
}

/// Full usage text, printed when no files are given.
pub fn help_message() -> String {
    Cli::command().render_long_help().to_string()
}

//! File processing pipeline.
//!
//! Each input is read, stripped and written independently. With more than
//! one job the files are spread over a rayon thread pool; results are always
//! reported in input order.

use crate::cli::Config;
use crate::error::{Error, Result};
use crate::jpeg;
use crate::output;
use crate::terminal::{RunStats, print_failure, print_success};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

/// A file that was stripped and written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    /// Where the cleaned JPEG was written.
    pub output: PathBuf,
    /// Number of bytes the file shrank by.
    pub bytes_removed: u64,
    /// Number of segments dropped.
    pub segments_removed: usize,
}

/// Result of processing a single file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<Stripped>,
}

/// Runs the pipeline over every configured path.
pub struct Processor {
    config: Config,
}

impl Processor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Process all files, reporting each one as it is handled.
    pub fn run(&self) -> RunStats {
        let start = Instant::now();
        let mut stats = RunStats::new();
        let jobs = self.jobs();

        if jobs > 1 && self.config.paths.len() > 1 {
            log::debug!(
                "processing {} files on {} threads",
                self.config.paths.len(),
                jobs
            );
            match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
                Ok(pool) => {
                    for outcome in pool.install(|| self.process_parallel()) {
                        self.handle_outcome(outcome, &mut stats);
                    }
                }
                Err(e) => {
                    log::warn!("thread pool unavailable ({e}), processing sequentially");
                    self.run_sequential(&mut stats);
                }
            }
        } else {
            self.run_sequential(&mut stats);
        }

        stats.set_duration(start.elapsed());
        stats
    }

    fn jobs(&self) -> usize {
        self.config.jobs.unwrap_or_else(|| {
            thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }

    fn run_sequential(&self, stats: &mut RunStats) {
        for path in &self.config.paths {
            let outcome = FileOutcome {
                path: path.clone(),
                result: process_file(path, &self.config),
            };
            self.handle_outcome(outcome, stats);
        }
    }

    fn process_parallel(&self) -> Vec<FileOutcome> {
        self.config
            .paths
            .par_iter()
            .map(|path| FileOutcome {
                path: path.clone(),
                result: process_file(path, &self.config),
            })
            .collect()
    }

    fn handle_outcome(&self, outcome: FileOutcome, stats: &mut RunStats) {
        match outcome.result {
            Ok(stripped) => {
                stats.add_success(stripped.bytes_removed);
                if !self.config.quiet {
                    print_success(&outcome.path, &stripped.output, stripped.bytes_removed);
                }
            }
            Err(e) => {
                stats.add_failure();
                print_failure(&outcome.path, &e.to_string());
            }
        }
    }
}

/// Read, strip and write one file.
///
/// Nothing is written unless the whole marker stream parsed.
pub fn process_file(path: &Path, config: &Config) -> Result<Stripped> {
    let data = fs::read(path).map_err(|e| Error::io_with_path(e, path))?;
    let result = jpeg::strip(data, config.strip_options())?;
    let output = output::write_stripped(path, &result.data, config.overwrite)?;

    log::debug!(
        "{}: dropped {} segment(s), {} bytes",
        path.display(),
        result.segments_removed,
        result.bytes_removed
    );

    Ok(Stripped {
        output,
        bytes_removed: result.bytes_removed,
        segments_removed: result.segments_removed,
    })
}

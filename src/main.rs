//! stripjpg - strip metadata from JPEG files.

use log::LevelFilter;
use std::process::ExitCode;
use stripjpg::Error;
use stripjpg::cli::{Config, help_message};
use stripjpg::processor::Processor;
use stripjpg::terminal::print_summary;

fn main() -> ExitCode {
    let config = match Config::parse(std::env::args_os()) {
        Ok(config) => config,
        Err(Error::Cli(e)) => e.exit(),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.verbose);

    if config.paths.is_empty() {
        println!("{}", help_message());
        return ExitCode::SUCCESS;
    }

    let stats = Processor::new(config.clone()).run();
    print_summary(&stats, config.quiet);

    ExitCode::from(stats.exit_status())
}

/// Warnings by default, debug with `--verbose`; `RUST_LOG` overrides both.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

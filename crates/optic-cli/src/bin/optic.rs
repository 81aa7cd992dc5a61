//! `optic` binary: check serialized source units and print diagnostics.

#![allow(clippy::print_stderr)]

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use optic_cli::args::CliArgs;
use optic_cli::{driver, reporter};

const EXIT_SUCCESS: u8 = 0;
const EXIT_DIAGNOSTICS: u8 = 1;
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    init_tracing();
    let args = CliArgs::parse();

    if args.list_files_only {
        return match driver::discover_units(&args.paths) {
            Ok(files) => {
                for file in files {
                    println!("{}", file.display());
                }
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(err) => report_failure(&err),
        };
    }

    match driver::run(&args.paths) {
        Ok(reports) => {
            let mut total = 0usize;
            for report in &reports {
                total += report.diagnostics.len();
                reporter::print_report(report);
            }
            if !args.quiet {
                println!("{}", reporter::summary(reports.len(), total));
            }
            if total > 0 {
                ExitCode::from(EXIT_DIAGNOSTICS)
            } else {
                ExitCode::from(EXIT_SUCCESS)
            }
        }
        Err(err) => report_failure(&err),
    }
}

fn report_failure(err: &anyhow::Error) -> ExitCode {
    eprintln!("{} {err:#}", "error:".red().bold());
    ExitCode::from(EXIT_FAILURE)
}

/// Initialize tracing if OPTIC_LOG or RUST_LOG is set (zero cost otherwise).
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = std::env::var("OPTIC_LOG").or_else(|_| std::env::var("RUST_LOG"));
    let Ok(filter) = filter else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

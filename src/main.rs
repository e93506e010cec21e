//! sharepkg - Shared package classifier CLI
//!
//! Reads `extra.shared-package` from composer.json and reports, for every
//! package in composer.lock, whether it would be installed as a shared package.

use clap::Parser;
use sharepkg::cli::CliArgs;
use sharepkg::orchestrator::Orchestrator;
use sharepkg::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides, `--verbose` raises the default to debug
fn init_logging(verbose: bool) {
    let default_level = if verbose { "sharepkg=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("sharepkg v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Config: {}", args.config_path().display());
        if !args.has_adhoc_packages() {
            eprintln!("Lock: {}", args.lock_path().display());
        }
    }

    let mut output_config =
        OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.shared_only);
    if args.no_color {
        output_config = output_config.without_color();
    }

    let orchestrator = Orchestrator::new(args)?;
    let summary = orchestrator.run()?;

    let formatter = create_formatter(output_config);
    let mut stdout = io::stdout().lock();
    formatter.format(&summary, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}

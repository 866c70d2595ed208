mod checker;
mod cli;
mod config;
mod decoder;
mod error;
mod jobs;
mod manifest;
mod report;
mod rules;
mod ui;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use checker::Checker;
use cli::{Cli, Format};
use config::CheckerConfig;
use ui::{ConsoleObserver, SilentObserver};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    init_tracing(cli.verbose)?;

    let config = CheckerConfig::load(&cli.root, cli.config.as_deref())?;
    let checker = Checker::new(&cli.root, config);

    let report = match cli.format {
        Format::Plain => {
            let report = checker.run(&mut ConsoleObserver::default())?;
            ui::print_summary(&report);
            report
        }
        Format::Json => {
            let report = checker.run(&mut SilentObserver)?;
            ui::print_json(&report)?;
            report
        }
    };

    Ok(ExitCode::from(report.exit_code()))
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    // A bad RUST_LOG must not change the exit status of the check.
    let filter = EnvFilter::builder()
        .with_default_directive(default.parse()?)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .without_time()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    Ok(())
}

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log_report::cli::{Cli, ReportKind};
use log_report::{logging, metrics, render};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // ── 1. Validate the filter before touching any file ─────────
    let date_filter = cli.date_filter()?;

    // ── 2. Aggregate ────────────────────────────────────────────
    let accumulator = metrics::aggregate(&cli.files, date_filter)?;

    // ── 3. Build & print the report ─────────────────────────────
    let report = match cli.report {
        ReportKind::Average => metrics::generate_report(accumulator),
    };
    let output = render::render(&report, cli.format).context("failed to render report")?;
    println!("{output}");

    Ok(())
}

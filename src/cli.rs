use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::ReportError;
use crate::render::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "log-report",
    about = "Per-endpoint request statistics from JSON Lines access logs",
    version
)]
pub struct Cli {
    /// Log file(s) to process, in order
    #[arg(long = "file", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Report type
    #[arg(long, value_enum, default_value_t = ReportKind::Average)]
    pub report: ReportKind,

    /// Only count records from this day (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Grid)]
    pub format: OutputFormat,

    /// Override log level (trace, debug, info, warn, error); defaults to RUST_LOG
    #[arg(short, long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Request count and mean response time per endpoint
    Average,
}

impl Cli {
    /// The `--date` value, checked to be a real calendar date.
    /// Records are matched against the string exactly as given.
    pub fn date_filter(&self) -> Result<Option<&str>, ReportError> {
        match self.date.as_deref() {
            None => Ok(None),
            Some(date) if validate_date(date) => Ok(Some(date)),
            Some(date) => Err(ReportError::InvalidDate(date.to_owned())),
        }
    }
}

pub fn validate_date(date: &str) -> bool {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

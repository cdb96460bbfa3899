use clap::ValueEnum;
use tabled::{settings::Style, Table, Tabled};

use crate::metrics::ReportRow;

// ─── Layout ──────────────────────────────────────────────────────

const ENDPOINT_WIDTH: usize = 30;
const REQUESTS_WIDTH: usize = 10;
const RULE_WIDTH: usize = 50;

/// How the finished report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered ASCII grid
    Grid,
    /// Fixed-width columns, no borders
    Plain,
    /// Pretty-printed JSON array
    Json,
}

#[derive(Tabled)]
struct GridRow {
    #[tabled(rename = "Endpoint")]
    endpoint: String,
    #[tabled(rename = "Requests")]
    requests: u64,
    #[tabled(rename = "Avg Response Time")]
    average: String,
}

impl From<&ReportRow> for GridRow {
    fn from(row: &ReportRow) -> Self {
        Self {
            endpoint: row.endpoint.clone(),
            requests: row.count,
            average: format_average(row.average),
        }
    }
}

// ─── Rendering ───────────────────────────────────────────────────

/// Render rows in the given format. The result has no trailing newline.
pub fn render(rows: &[ReportRow], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Grid => Ok(render_grid(rows)),
        OutputFormat::Plain => Ok(render_plain(rows)),
        OutputFormat::Json => serde_json::to_string_pretty(rows),
    }
}

fn render_grid(rows: &[ReportRow]) -> String {
    Table::new(rows.iter().map(GridRow::from))
        .with(Style::ascii())
        .to_string()
}

fn render_plain(rows: &[ReportRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!(
        "{:<ENDPOINT_WIDTH$}{:<REQUESTS_WIDTH$}{}",
        "Endpoint", "Requests", "Avg Response Time"
    ));
    lines.push("-".repeat(RULE_WIDTH));

    for row in rows {
        lines.push(format!(
            "{:<ENDPOINT_WIDTH$}{:<REQUESTS_WIDTH$}{}",
            row.endpoint,
            row.count,
            format_average(row.average)
        ));
    }

    lines.join("\n")
}

/// Shortest representation of the rounded value, always with a
/// fractional part: `125.0ms`, `0.333ms`.
fn format_average(average: f64) -> String {
    format!("{average:?}ms")
}

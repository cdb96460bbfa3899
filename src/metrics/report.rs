use serde::Serialize;

use super::collector::Accumulator;

/// Decimal places kept in the reported average.
const AVERAGE_PRECISION: usize = 3;

/// One finalized line of the `average` report.
/// Serialized straight into the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub endpoint: String,
    #[serde(rename = "requests")]
    pub count: u64,
    #[serde(rename = "avg_response_time_ms")]
    pub average: f64,
}

/// Turn the accumulator into rows sorted by endpoint (code-point order).
/// Entries without observations produce no row.
pub fn generate_report(accumulator: Accumulator) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = accumulator
        .into_iter()
        .filter_map(|(endpoint, stats)| {
            let average = stats.average()?;
            Some(ReportRow {
                endpoint,
                count: stats.count,
                average: round_half_even(average, AVERAGE_PRECISION),
            })
        })
        .collect();

    rows.sort_by(|a, b| a.endpoint.cmp(&b.endpoint));
    rows
}

/// Rounds the exact binary value, ties to even (same as float formatting).
fn round_half_even(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

use std::collections::hash_map;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use super::EndpointStats;
use crate::error::ReportError;
use crate::record::LogRecord;

// ─── Public types ────────────────────────────────────────────────

/// Per-endpoint totals for one aggregation pass.
/// Entries appear on first reference and are never removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulator {
    entries: HashMap<String, EndpointStats>,
}

/// Line tally for a single input, logged once the input is consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub lines: u64,
    pub accepted: u64,
    /// Parsed fine but excluded by the date filter
    pub filtered: u64,
    /// Unparseable or wrongly typed; blank lines are not counted
    pub skipped: u64,
}

enum LineOutcome {
    Blank,
    Accepted,
    Filtered,
    Skipped,
}

// ─── Entry point ─────────────────────────────────────────────────

/// Aggregate every file in order.
///
/// The first file that cannot be opened or read aborts the whole pass;
/// whatever was collected from earlier files is dropped with it.
pub fn aggregate<P: AsRef<Path>>(
    paths: &[P],
    date_filter: Option<&str>,
) -> Result<Accumulator, ReportError> {
    let mut accumulator = Accumulator::new();

    for path in paths {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ReportError::from_io(path, e))?;
        let stats = accumulator
            .ingest(BufReader::new(file), date_filter)
            .map_err(|e| ReportError::from_io(path, e))?;

        debug!(
            path = %path.display(),
            lines = stats.lines,
            accepted = stats.accepted,
            filtered = stats.filtered,
            skipped = stats.skipped,
            "ingested log file"
        );
    }

    info!(
        files = paths.len(),
        endpoints = accumulator.len(),
        requests = accumulator.total_requests(),
        "aggregation complete"
    );

    Ok(accumulator)
}

// ─── Accumulator impl ────────────────────────────────────────────

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stats for `endpoint`, inserting a zeroed entry on first use.
    pub fn entry(&mut self, endpoint: String) -> &mut EndpointStats {
        self.entries.entry(endpoint).or_default()
    }

    pub fn record(&mut self, endpoint: String, response_time: f64) {
        self.entry(endpoint).record(response_time);
    }

    pub fn get(&self, endpoint: &str) -> Option<&EndpointStats> {
        self.entries.get(endpoint)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_requests(&self) -> u64 {
        self.entries.values().map(|stats| stats.count).sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, EndpointStats> {
        self.entries.iter()
    }

    /// Consume a line-oriented reader. Only I/O failures (including
    /// invalid UTF-8) are returned; bad records are counted and dropped.
    pub fn ingest<R: BufRead>(
        &mut self,
        reader: R,
        date_filter: Option<&str>,
    ) -> io::Result<IngestStats> {
        let mut stats = IngestStats::default();

        for line in reader.lines() {
            let line = line?;
            stats.lines += 1;

            match self.ingest_line(&line, date_filter) {
                LineOutcome::Blank => {}
                LineOutcome::Accepted => stats.accepted += 1,
                LineOutcome::Filtered => stats.filtered += 1,
                LineOutcome::Skipped => stats.skipped += 1,
            }
        }

        Ok(stats)
    }

    fn ingest_line(&mut self, line: &str, date_filter: Option<&str>) -> LineOutcome {
        let line = line.trim();
        if line.is_empty() {
            return LineOutcome::Blank;
        }

        let Ok(record) = LogRecord::parse(line) else {
            return LineOutcome::Skipped;
        };

        if let Some(filter) = date_filter {
            match record.matches_date(filter) {
                Ok(true) => {}
                Ok(false) => return LineOutcome::Filtered,
                Err(_) => return LineOutcome::Skipped,
            }
        }

        self.record(record.endpoint, record.response_time);
        LineOutcome::Accepted
    }
}

impl FromIterator<(String, EndpointStats)> for Accumulator {
    fn from_iter<I: IntoIterator<Item = (String, EndpointStats)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Accumulator {
    type Item = (String, EndpointStats);
    type IntoIter = hash_map::IntoIter<String, EndpointStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

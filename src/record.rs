use serde_json::{Map, Value};
use thiserror::Error;

// ─── Field names ─────────────────────────────────────────────────

/// Endpoint assigned to records that carry no endpoint field.
pub const DEFAULT_ENDPOINT: &str = "/";

/// Looked up in order; the first non-null value wins.
const TIMESTAMP_FIELDS: &[&str] = &["@timestamp", "timestamp"];
const ENDPOINT_FIELDS: &[&str] = &["url", "endpoint"];
const RESPONSE_TIME_FIELD: &str = "response_time";

// ─── Public types ────────────────────────────────────────────────

/// Why a single log line was rejected. Never escapes the aggregator.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("field `{0}` has an unexpected type")]
    InvalidField(&'static str),
}

/// One parsed JSON Lines entry, reduced to the fields the report needs.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    timestamp: Timestamp,
    pub endpoint: String,
    pub response_time: f64,
}

/// The timestamp is only inspected under a date filter, so a wrongly
/// typed value is remembered instead of failing the parse.
#[derive(Debug, Clone, PartialEq)]
enum Timestamp {
    Missing,
    Text(String),
    Invalid,
}

// ─── LogRecord impl ──────────────────────────────────────────────

impl LogRecord {
    /// Parse one (already trimmed) line.
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let fields: Map<String, Value> = serde_json::from_str(line)?;

        let timestamp = match lookup(&fields, TIMESTAMP_FIELDS) {
            None => Timestamp::Missing,
            Some(Value::String(s)) if s.is_empty() => Timestamp::Missing,
            Some(Value::String(s)) => Timestamp::Text(s.clone()),
            Some(_) => Timestamp::Invalid,
        };

        let endpoint = match lookup(&fields, ENDPOINT_FIELDS) {
            None => DEFAULT_ENDPOINT.to_owned(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(RecordError::InvalidField("url")),
        };

        let response_time = match lookup(&fields, &[RESPONSE_TIME_FIELD]) {
            None => 0.0,
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or(RecordError::InvalidField(RESPONSE_TIME_FIELD))?,
            Some(_) => return Err(RecordError::InvalidField(RESPONSE_TIME_FIELD)),
        };

        Ok(Self {
            timestamp,
            endpoint,
            response_time,
        })
    }

    /// Calendar-date part of the timestamp: everything before the first
    /// `T`, or the whole string when there is none.
    pub fn date(&self) -> Result<Option<&str>, RecordError> {
        match &self.timestamp {
            Timestamp::Missing => Ok(None),
            Timestamp::Text(ts) => Ok(Some(date_prefix(ts))),
            Timestamp::Invalid => Err(RecordError::InvalidField(TIMESTAMP_FIELDS[0])),
        }
    }

    /// Records without a timestamp always pass; only an explicit
    /// mismatch excludes a record.
    pub fn matches_date(&self, filter: &str) -> Result<bool, RecordError> {
        Ok(self.date()?.map_or(true, |date| date == filter))
    }
}

// ─── Helpers ─────────────────────────────────────────────────────

/// First non-`null` value among `names`.
fn lookup<'a>(fields: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .find_map(|name| fields.get(*name).filter(|value| !value.is_null()))
}

fn date_prefix(timestamp: &str) -> &str {
    timestamp
        .split_once('T')
        .map_or(timestamp, |(date, _)| date)
}

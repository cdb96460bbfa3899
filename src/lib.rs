//! Aggregate JSON Lines access logs into a per-endpoint report of request
//! counts and average response time.

pub mod cli;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod record;
pub mod render;

pub use error::ReportError;
pub use metrics::{aggregate, generate_report, Accumulator, EndpointStats, ReportRow};

pub mod collector;
pub mod report;

pub use collector::{aggregate, Accumulator, IngestStats};
pub use report::{generate_report, ReportRow};

/// Running totals for one endpoint.
/// The collector adds to it for every accepted record; the report
/// divides it out at the very end.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EndpointStats {
    /// Number of accepted records
    pub count: u64,
    /// Unrounded sum of their response times
    pub total_time: f64,
}

impl EndpointStats {
    pub fn record(&mut self, response_time: f64) {
        self.count += 1;
        self.total_time += response_time;
    }

    /// Exact mean, or `None` before the first observation.
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total_time / self.count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_is_undefined_without_samples() {
        assert_eq!(EndpointStats::default().average(), None);
    }

    #[test]
    fn record_accumulates_additively() {
        let mut stats = EndpointStats::default();
        stats.record(100.0);
        stats.record(150.0);

        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_time, 250.0);
        assert_eq!(stats.average(), Some(125.0));
    }
}

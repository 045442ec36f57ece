use crate::record::Record;
use crate::stats::{AggregateSnapshot, LatencyStats, TimeRange};
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;

/// Running statistics over a record stream.
///
/// One mutation per incoming record, in source order; nothing here reorders
/// or buffers beyond the retained latency samples for the p95 order
/// statistic. `error_rate` and `avg` are derived at snapshot time, not
/// accumulated per record.
#[derive(Debug, Default)]
pub struct StatsAggregator {
    total: u64,
    by_severity: BTreeMap<String, u64>,
    by_service: BTreeMap<String, u64>,
    start_time: Option<DateTime<FixedOffset>>,
    end_time: Option<DateTime<FixedOffset>>,
    latency_sum: f64,
    latency_min: Option<f64>,
    latency_max: Option<f64>,
    latency_samples: Vec<f64>,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: &Record) {
        self.total += 1;

        *self
            .by_severity
            .entry(record.severity.to_lowercase())
            .or_insert(0) += 1;
        *self
            .by_service
            .entry(record.service.to_lowercase())
            .or_insert(0) += 1;

        self.start_time = Some(match self.start_time {
            Some(start) => start.min(record.timestamp),
            None => record.timestamp,
        });
        self.end_time = Some(match self.end_time {
            Some(end) => end.max(record.timestamp),
            None => record.timestamp,
        });

        if let Some(latency) = record.latency_ms {
            self.latency_sum += latency;
            self.latency_min = Some(self.latency_min.map_or(latency, |min| min.min(latency)));
            self.latency_max = Some(self.latency_max.map_or(latency, |max| max.max(latency)));
            self.latency_samples.push(latency);
        }
    }

    pub fn consume(&mut self, records: impl Iterator<Item = Record>) {
        for record in records {
            self.push(&record);
        }
    }

    pub fn snapshot(&self) -> AggregateSnapshot {
        let count = self.latency_samples.len() as u64;

        AggregateSnapshot {
            total: self.total,
            time_range: TimeRange {
                start: self.start_time,
                end: self.end_time,
            },
            error_rate: self
                .by_severity
                .get("error")
                .map(|errors| *errors as f64 / self.total as f64),
            service_counts: self.by_service.clone(),
            severity_counts: self.by_severity.clone(),
            latency_ms: LatencyStats {
                count,
                min: self.latency_min,
                max: self.latency_max,
                avg: (count > 0).then(|| self.latency_sum / count as f64),
                p95: percentile(&self.latency_samples, 0.95),
            },
        }
    }
}

/// Exact nearest-rank percentile; `None` when there are no samples.
fn percentile(samples: &[f64], pct: f64) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = ((sorted.len() as f64 * pct).ceil() as usize).max(1);
    Some(sorted[rank - 1])
}

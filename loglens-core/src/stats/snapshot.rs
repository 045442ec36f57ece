use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::collections::BTreeMap;

/// The complete statistics from one pass over a filtered record stream.
///
/// Undefined figures are `None`, never zero or NaN: an empty stream yields
/// `total = 0`, empty maps, and unset range/latency/rate fields.
/// Timestamps serialize as ISO-8601.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSnapshot {
    pub total: u64,
    pub time_range: TimeRange,
    pub error_rate: Option<f64>,
    pub service_counts: BTreeMap<String, u64>,
    pub severity_counts: BTreeMap<String, u64>,
    pub latency_ms: LatencyStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeRange {
    pub start: Option<DateTime<FixedOffset>>,
    pub end: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LatencyStats {
    pub count: u64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
    pub p95: Option<f64>,
}

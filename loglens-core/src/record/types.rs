use chrono::{DateTime, FixedOffset};

/// One validated log event.
///
/// The wire form is one JSON object per line with string fields `severity`,
/// `timestamp` (ISO-8601), `service`, `message` and an optional numeric
/// `latency_ms`. Validation normalizes `timestamp` into an absolute instant;
/// nothing mutates a record after that.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub severity: String,
    pub timestamp: DateTime<FixedOffset>,
    pub service: String,
    pub message: String,
    pub latency_ms: Option<f64>,
}

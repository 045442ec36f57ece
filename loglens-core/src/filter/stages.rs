use crate::filter::FilterCriteria;
use crate::record::Record;
use chrono::{DateTime, FixedOffset};
use std::collections::HashSet;

/// Pass records whose lowercased service is in `services`; an empty set
/// passes everything.
pub fn by_service(
    records: impl Iterator<Item = Record>,
    services: HashSet<String>,
) -> impl Iterator<Item = Record> {
    records.filter(move |r| services.is_empty() || services.contains(&r.service.to_lowercase()))
}

/// Pass records whose lowercased severity is in `severities`; an empty set
/// passes everything.
pub fn by_severity(
    records: impl Iterator<Item = Record>,
    severities: HashSet<String>,
) -> impl Iterator<Item = Record> {
    records.filter(move |r| severities.is_empty() || severities.contains(&r.severity.to_lowercase()))
}

/// Pass records with `timestamp >= since` (inclusive); `None` passes
/// everything.
pub fn since(
    records: impl Iterator<Item = Record>,
    since: Option<DateTime<FixedOffset>>,
) -> impl Iterator<Item = Record> {
    records.filter(move |r| since.is_none_or(|bound| r.timestamp >= bound))
}

/// Pass records with `timestamp <= until` (inclusive); `None` passes
/// everything.
pub fn until(
    records: impl Iterator<Item = Record>,
    until: Option<DateTime<FixedOffset>>,
) -> impl Iterator<Item = Record> {
    records.filter(move |r| until.is_none_or(|bound| r.timestamp <= bound))
}

/// Chain all four stages over a record stream.
pub fn apply(
    records: impl Iterator<Item = Record>,
    criteria: &FilterCriteria,
) -> impl Iterator<Item = Record> {
    let records = by_service(records, criteria.services.clone());
    let records = by_severity(records, criteria.severities.clone());
    let records = since(records, criteria.since);
    until(records, criteria.until)
}

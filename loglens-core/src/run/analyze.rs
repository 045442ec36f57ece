use crate::filter::{self, FilterCriteria};
use crate::source::{ErrorInfo, RecordSource, SourceError};
use crate::stats::{AggregateSnapshot, StatsAggregator};
use serde::Serialize;

/// A finished snapshot plus the source's error counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub snapshot: AggregateSnapshot,
    pub error_info: ErrorInfo,
}

/// Drive one full pass: source → filters → aggregator.
///
/// Always produces a report (possibly all-empty) unless the source itself
/// fails; rejected and filtered-out records are never counted in the
/// snapshot total.
pub fn analyze(mut source: RecordSource, criteria: &FilterCriteria) -> Result<Report, SourceError> {
    let mut aggregator = StatsAggregator::new();
    aggregator.consume(filter::apply(source.by_ref(), criteria));

    let error_info = source.finish()?;

    Ok(Report {
        snapshot: aggregator.snapshot(),
        error_info,
    })
}

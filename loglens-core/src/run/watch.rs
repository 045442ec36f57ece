use crate::alert::{Alert, WatchConfig, evaluate};
use crate::filter::FilterCriteria;
use crate::run::{Report, analyze};
use crate::source::{RecordSource, SourceError};
use chrono::{DateTime, Duration, FixedOffset};

/// The result of one watch-mode pass. Non-empty `alerts` means the process
/// should signal failure.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchOutcome {
    pub report: Report,
    pub alerts: Vec<Alert>,
}

impl WatchOutcome {
    pub fn is_ok(&self) -> bool {
        self.alerts.is_empty()
    }
}

/// Aggregate the trailing window `[now - window_minutes, now]` and evaluate
/// every rule against the snapshot. Recomputed fresh each invocation; no
/// state survives between runs.
pub fn watch(
    source: RecordSource,
    config: &WatchConfig,
    now: DateTime<FixedOffset>,
) -> Result<WatchOutcome, SourceError> {
    let criteria = FilterCriteria::new()
        .with_since(now - Duration::minutes(config.window_minutes))
        .with_until(now);

    let report = analyze(source, &criteria)?;
    let alerts = evaluate(&report.snapshot, config);

    Ok(WatchOutcome { report, alerts })
}

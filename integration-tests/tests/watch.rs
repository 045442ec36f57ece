use chrono::Utc;
use integration_tests::{record_line, write_jsonl, write_watch_config};
use loglens_core::alert::WatchConfig;
use loglens_core::run::watch;
use loglens_core::source::RecordSource;
use pretty_assertions::assert_eq;

#[test]
fn watch_fires_both_rules_on_hot_window() {
    let dir = tempfile::tempdir().unwrap();
    let now = Utc::now().fixed_offset();

    // 100 fresh error records at 101ms: error rate 1.0 >= 0.5 and
    // p95 101 > 100, so both configured rules fire.
    let lines: Vec<_> = (0..100)
        .map(|_| record_line("ERROR", "test-service", &now, Some(101.0)))
        .collect();
    let log = write_jsonl(dir.path(), "hot.jsonl", &lines);
    let config = WatchConfig::from_path(&write_watch_config(dir.path())).unwrap();

    let source = RecordSource::from_path(&log, false).unwrap();
    let outcome = watch(source, &config, now).unwrap();

    assert!(!outcome.is_ok());
    let fired: Vec<_> = outcome.alerts.iter().map(|a| a.rule_name.as_str()).collect();
    assert_eq!(fired, vec!["high_error_rate", "high_latency"]);
    assert!(outcome.alerts[0].to_string().starts_with("ALERT: [high_error_rate]"));
    assert!(outcome.alerts[1].to_string().starts_with("ALERT: [high_latency]"));
}

#[test]
fn watch_empty_input_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_jsonl(dir.path(), "blank.jsonl", &[]);
    let config = WatchConfig::from_path(&write_watch_config(dir.path())).unwrap();

    let source = RecordSource::from_path(&log, false).unwrap();
    let outcome = watch(source, &config, Utc::now().fixed_offset()).unwrap();

    // No data is not a breach: neither rule can fire.
    assert!(outcome.is_ok());
    assert_eq!(outcome.report.snapshot.total, 0);
}

#[test]
fn watch_stale_records_fall_outside_window() {
    let dir = tempfile::tempdir().unwrap();
    let now = Utc::now().fixed_offset();
    let stale = now - chrono::Duration::hours(2);

    let lines: Vec<_> = (0..10)
        .map(|_| record_line("ERROR", "api", &stale, Some(500.0)))
        .collect();
    let log = write_jsonl(dir.path(), "stale.jsonl", &lines);
    let config = WatchConfig::from_path(&write_watch_config(dir.path())).unwrap();

    let source = RecordSource::from_path(&log, false).unwrap();
    let outcome = watch(source, &config, now).unwrap();

    // Everything predates the 60 minute window, so there is no data to
    // evaluate and no alert fires.
    assert!(outcome.is_ok());
    assert_eq!(outcome.report.snapshot.total, 0);
}

#[test]
fn watch_threshold_edges() {
    let dir = tempfile::tempdir().unwrap();
    let now = Utc::now().fixed_offset();

    // Exactly half errors and p95 exactly at the threshold: the error-rate
    // rule fires (>=), the latency rule does not (>).
    let mut lines = Vec::new();
    for _ in 0..5 {
        lines.push(record_line("error", "api", &now, Some(100.0)));
        lines.push(record_line("info", "api", &now, Some(100.0)));
    }
    let log = write_jsonl(dir.path(), "edges.jsonl", &lines);
    let config = WatchConfig::from_path(&write_watch_config(dir.path())).unwrap();

    let source = RecordSource::from_path(&log, false).unwrap();
    let outcome = watch(source, &config, now).unwrap();

    let fired: Vec<_> = outcome.alerts.iter().map(|a| a.rule_name.as_str()).collect();
    assert_eq!(fired, vec!["high_error_rate"]);
}

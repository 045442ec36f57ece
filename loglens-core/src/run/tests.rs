use crate::alert::{AlertRule, RuleKind, WatchConfig};
use crate::filter::FilterCriteria;
use crate::run::{analyze, watch};
use crate::source::RecordSource;
use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use std::io::Cursor;

fn source_from(lines: String) -> RecordSource {
    RecordSource::from_reader(Box::new(Cursor::new(lines)), false, false)
}

fn line(severity: &str, service: &str, timestamp: &str) -> String {
    format!(
        r#"{{"severity":"{severity}","timestamp":"{timestamp}","service":"{service}","message":"m"}}"#
    )
}

#[test]
fn test_total_counts_only_surviving_records() {
    let input = [
        line("info", "api", "2025-06-01T10:00:00Z"),
        "not json".to_string(),
        line("error", "db", "2025-06-01T11:00:00Z"),
        r#"{"severity":"info"}"#.to_string(),
        line("info", "api", "2025-06-01T12:00:00Z"),
    ]
    .join("\n");

    let criteria = FilterCriteria::new().with_services(["api"]);
    let report = analyze(source_from(input), &criteria).unwrap();

    // Two api records survive; the parse error, the invalid record, and the
    // filtered-out db record do not count.
    assert_eq!(report.snapshot.total, 2);
    assert_eq!(report.error_info.parse_errors, 1);
    assert_eq!(report.error_info.invalid_records, 1);
}

#[test]
fn test_report_serializes_flat() {
    let report = analyze(source_from(String::new()), &FilterCriteria::new()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["total"], 0);
    assert_eq!(json["error_info"]["parse_errors"], 0);
    assert_eq!(json["error_info"]["invalid_records"], 0);
    assert_eq!(json["time_range"]["start"], serde_json::Value::Null);
}

#[test]
fn test_watch_trailing_window_excludes_old_records() {
    let now = DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z").unwrap();
    let input = [
        line("error", "api", "2025-06-01T11:30:00Z"), // inside the window
        line("error", "api", "2025-06-01T10:00:00Z"), // before it
        line("error", "api", "2025-06-01T12:30:00Z"), // after `now`
    ]
    .join("\n");

    let config = WatchConfig {
        window_minutes: 60,
        rules: vec![],
    };
    let outcome = watch(source_from(input), &config, now).unwrap();

    assert_eq!(outcome.report.snapshot.total, 1);
    assert!(outcome.is_ok());
}

#[test]
fn test_watch_window_bounds_inclusive() {
    let now = DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z").unwrap();
    let input = [
        line("info", "api", "2025-06-01T11:00:00Z"), // exactly now - 60m
        line("info", "api", "2025-06-01T12:00:00Z"), // exactly now
    ]
    .join("\n");

    let config = WatchConfig {
        window_minutes: 60,
        rules: vec![],
    };
    let outcome = watch(source_from(input), &config, now).unwrap();

    assert_eq!(outcome.report.snapshot.total, 2);
}

#[test]
fn test_watch_fires_rules_against_window() {
    let now = Utc::now().fixed_offset();
    let input = line("error", "api", &now.to_rfc3339());

    let config = WatchConfig {
        window_minutes: 60,
        rules: vec![AlertRule {
            name: "any_errors".into(),
            kind: RuleKind::ErrorRate,
            threshold: 0.5,
        }],
    };
    let outcome = watch(source_from(input), &config, now).unwrap();

    assert!(!outcome.is_ok());
    assert_eq!(outcome.alerts[0].rule_name, "any_errors");
}

//! Shared fixtures for the end-to-end tests.

use chrono::{DateTime, FixedOffset};
use std::io::Write;
use std::path::{Path, PathBuf};

/// One wire-format record line.
pub fn record_line(
    severity: &str,
    service: &str,
    timestamp: &DateTime<FixedOffset>,
    latency_ms: Option<f64>,
) -> String {
    let mut obj = serde_json::json!({
        "severity": severity,
        "timestamp": timestamp.to_rfc3339(),
        "service": service,
        "message": "integration fixture",
    });
    if let Some(ms) = latency_ms {
        obj["latency_ms"] = serde_json::json!(ms);
    }
    obj.to_string()
}

/// Write a `.jsonl` fixture file and return its path.
pub fn write_jsonl(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("failed to create fixture file");
    for line in lines {
        writeln!(file, "{line}").expect("failed to write fixture line");
    }
    path
}

/// Write the standard watch config used by the alerting scenarios.
pub fn write_watch_config(dir: &Path) -> PathBuf {
    let path = dir.join("watch.yml");
    std::fs::write(
        &path,
        r#"window_minutes: 60
alerts:
  - name: high_error_rate
    type: error_rate
    threshold: 0.5
  - name: high_latency
    type: p95_latency
    threshold: 100
"#,
    )
    .expect("failed to write watch config");
    path
}

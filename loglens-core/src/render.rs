//! Human-readable and JSON rendering of a finished report.

use crate::run::Report;
use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub fn render(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => render_table(report),
        OutputFormat::Json => render_json(report),
    }
}

pub fn render_json(report: &Report) -> String {
    serde_json::to_string_pretty(report).expect("failed to serialize report")
}

pub fn render_table(report: &Report) -> String {
    let snapshot = &report.snapshot;
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Summary:".bold()));
    out.push_str(&format!("  Total records: {}\n", snapshot.total));
    out.push_str(&format!(
        "  Time range: {} -> {}\n",
        fmt_instant(&snapshot.time_range.start),
        fmt_instant(&snapshot.time_range.end)
    ));
    out.push_str(&format!(
        "  Error rate: {}\n",
        match snapshot.error_rate {
            Some(rate) => format!("{:.1}%", rate * 100.0),
            None => "n/a".to_string(),
        }
    ));

    out.push_str(&format!("\n{}\n", "By severity:".bold()));
    if snapshot.severity_counts.is_empty() {
        out.push_str("  <none>\n");
    }
    for (severity, count) in &snapshot.severity_counts {
        out.push_str(&format!("  {}: {count}\n", severity.to_uppercase()));
    }

    out.push_str(&format!("\n{}\n", "By service:".bold()));
    if snapshot.service_counts.is_empty() {
        out.push_str("  <none>\n");
    }
    for (service, count) in &snapshot.service_counts {
        out.push_str(&format!("  {service}: {count}\n"));
    }

    let latency = &snapshot.latency_ms;
    out.push_str(&format!("\n{}\n", "Latency (ms):".bold()));
    out.push_str(&format!("  count: {}\n", latency.count));
    out.push_str(&format!("  min: {}\n", fmt_ms(latency.min)));
    out.push_str(&format!("  max: {}\n", fmt_ms(latency.max)));
    out.push_str(&format!("  avg: {}\n", fmt_ms(latency.avg)));
    out.push_str(&format!("  p95: {}\n", fmt_ms(latency.p95)));

    out.push_str(&format!("\n{}\n", "Errors:".bold()));
    out.push_str(&format!(
        "  Parse errors: {}\n",
        report.error_info.parse_errors
    ));
    out.push_str(&format!(
        "  Invalid records: {}\n",
        report.error_info.invalid_records
    ));

    out
}

fn fmt_instant(instant: &Option<chrono::DateTime<chrono::FixedOffset>>) -> String {
    match instant {
        Some(ts) => ts.to_rfc3339(),
        None => "n/a".to_string(),
    }
}

fn fmt_ms(value: Option<f64>) -> String {
    match value {
        Some(ms) => format!("{ms:.1}"),
        None => "n/a".to_string(),
    }
}

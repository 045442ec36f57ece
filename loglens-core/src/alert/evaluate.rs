use crate::alert::{RuleKind, WatchConfig};
use crate::stats::AggregateSnapshot;
use std::fmt;

/// One fired rule with its observed value.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub rule_name: String,
    pub message: String,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ALERT: [{}] {}", self.rule_name, self.message)
    }
}

/// Check every rule against a finished snapshot, in declaration order.
///
/// A rule whose input figure is undefined is skipped: no data is not a
/// breach. Error-rate rules fire at `>=` their threshold; p95 rules fire
/// strictly above theirs. The operator asymmetry is deliberate. Unknown
/// rule kinds are ignored.
pub fn evaluate(snapshot: &AggregateSnapshot, config: &WatchConfig) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for rule in &config.rules {
        match rule.kind {
            RuleKind::ErrorRate => {
                let Some(rate) = snapshot.error_rate else {
                    continue;
                };
                if rate >= rule.threshold {
                    alerts.push(Alert {
                        rule_name: rule.name.clone(),
                        message: format!(
                            "error rate {:.1}% >= threshold {:.1}%",
                            rate * 100.0,
                            rule.threshold * 100.0
                        ),
                    });
                }
            }
            RuleKind::P95Latency => {
                let Some(p95) = snapshot.latency_ms.p95 else {
                    continue;
                };
                if p95 > rule.threshold {
                    alerts.push(Alert {
                        rule_name: rule.name.clone(),
                        message: format!(
                            "p95 latency {p95:.1}ms > threshold {:.1}ms",
                            rule.threshold
                        ),
                    });
                }
            }
            RuleKind::Unknown => {}
        }
    }

    alerts
}

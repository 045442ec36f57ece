use serde::{Deserialize, Deserializer};

/// What a rule measures against its threshold.
///
/// Rule kinds added by later versions deserialize as `Unknown` and are
/// ignored by the evaluator rather than rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    ErrorRate,
    P95Latency,
    Unknown,
}

impl<'de> Deserialize<'de> for RuleKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let kind = String::deserialize(deserializer)?;
        Ok(match kind.as_str() {
            "error_rate" => RuleKind::ErrorRate,
            "p95_latency" => RuleKind::P95Latency,
            _ => RuleKind::Unknown,
        })
    }
}

/// A named threshold check evaluated against a finished snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlertRule {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RuleKind,
    pub threshold: f64,
}

/// Watch-mode configuration: the trailing window size and the rules to
/// evaluate, in declaration order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WatchConfig {
    pub window_minutes: i64,
    #[serde(rename = "alerts")]
    pub rules: Vec<AlertRule>,
}

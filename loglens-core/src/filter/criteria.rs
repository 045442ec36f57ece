use chrono::{DateTime, FixedOffset};
use std::collections::HashSet;

/// Optional constraints on a record stream.
///
/// Empty sets and unset bounds mean "no restriction", never "match
/// nothing". Service and severity matching is case-insensitive; the sets
/// hold lowercased values and records are lowercased at comparison time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub services: HashSet<String>,
    pub severities: HashSet<String>,
    pub since: Option<DateTime<FixedOffset>>,
    pub until: Option<DateTime<FixedOffset>>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.services = services
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();
        self
    }

    pub fn with_severities<I, S>(mut self, severities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.severities = severities
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();
        self
    }

    pub fn with_since(mut self, since: DateTime<FixedOffset>) -> Self {
        self.since = Some(since);
        self
    }

    pub fn with_until(mut self, until: DateTime<FixedOffset>) -> Self {
        self.until = Some(until);
        self
    }
}

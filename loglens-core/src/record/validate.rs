use crate::record::Record;
use chrono::DateTime;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

pub const REQUIRED_FIELDS: [&str; 4] = ["severity", "timestamp", "service", "message"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationFailure {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("invalid timestamp '{value}'")]
    InvalidTimestamp { value: String },
}

/// Every constraint one record violates, in schema field order. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailures(Vec<ValidationFailure>);

impl ValidationFailures {
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid record: ")?;
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailures {}

/// Check one decoded line against the record schema.
///
/// All violated constraints are collected in a single pass: a record missing
/// two fields with an unparseable timestamp reports three distinct failures,
/// never just the first. On success the raw timestamp string is replaced by
/// the parsed instant in the returned [`Record`].
///
/// A present but non-numeric `latency_ms` is treated as absent rather than a
/// failure; the field is optional on the wire.
pub fn validate(raw: &Value) -> Result<Record, ValidationFailures> {
    let Some(obj) = raw.as_object() else {
        return Err(ValidationFailures(vec![ValidationFailure::NotAnObject]));
    };

    let mut failures = Vec::new();

    for field in REQUIRED_FIELDS {
        if !obj.contains_key(field) {
            failures.push(ValidationFailure::MissingField { field });
        }
    }

    let timestamp = match obj.get("timestamp") {
        Some(value) => {
            let parsed = value
                .as_str()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok());
            if parsed.is_none() {
                failures.push(ValidationFailure::InvalidTimestamp {
                    value: stringify(value),
                });
            }
            parsed
        }
        None => None,
    };

    if !failures.is_empty() {
        return Err(ValidationFailures(failures));
    }

    // Past this point every required field is present and the timestamp
    // parsed.
    Ok(Record {
        severity: field_string(obj, "severity"),
        timestamp: timestamp.unwrap(),
        service: field_string(obj, "service"),
        message: field_string(obj, "message"),
        latency_ms: obj.get("latency_ms").and_then(Value::as_f64),
    })
}

fn field_string(obj: &serde_json::Map<String, Value>, field: &str) -> String {
    match &obj[field] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

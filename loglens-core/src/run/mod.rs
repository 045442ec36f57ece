//! Analyze and watch runners: wiring from source to snapshot.
//!
//! Control flow: raw lines → validation (error-tolerant, inside the
//! source) → filter stages → aggregator → one [`Report`]. Watch mode feeds
//! a trailing time window into the since/until filters and evaluates alert
//! rules against the finished snapshot. Per-record problems never interrupt
//! the pass; source-level failures abort it with no report.

mod analyze;
mod watch;

#[cfg(test)]
mod tests;

pub use analyze::*;
pub use watch::*;

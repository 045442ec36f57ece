//! Single-pass streaming aggregation.
//!
//! [`StatsAggregator`] consumes a record stream in source order and keeps
//! running counts, a time range, and latency figures; [`AggregateSnapshot`]
//! is the read-only result derived once at the end of the pass.
//!
//! The p95 latency is an exact nearest-rank order statistic over retained
//! samples, O(n) in the number of latency-carrying records. Each invocation
//! covers one bounded window (a file, or one trailing watch window), so the
//! exact figure is preferred over an approximate digest.

mod aggregate;
mod snapshot;


pub use aggregate::*;
pub use snapshot::*;

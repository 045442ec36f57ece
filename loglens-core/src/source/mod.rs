//! Record sources: JSONL files and live stdin streams.
//!
//! A [`RecordSource`] is a pull iterator of validated records over raw
//! lines. Per-line problems (bad JSON, schema violations) are absorbed: the
//! line is skipped, the owned [`ErrorInfo`] counters advance, and iteration
//! continues. Source-level problems (wrong extension, unopenable file,
//! mid-read I/O failure) are fatal and abort the run with no snapshot.

mod error;
mod reader;


pub use error::*;
pub use reader::*;

//! Lazy record filtering.
//!
//! Four independent stages (service, severity, since, until) over any
//! `Iterator<Item = Record>`. Each stage passes everything when its
//! criterion is absent, and none of them materializes its input, so the
//! chain runs over an unbounded stdin stream in constant memory. The stages
//! commute: any composition order keeps the same records in source order.

mod criteria;
mod stages;


pub use criteria::*;
pub use stages::*;

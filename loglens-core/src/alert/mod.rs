//! Alert rules, watch configuration, and threshold evaluation.

mod config;
mod evaluate;
mod rule;


pub use config::*;
pub use evaluate::*;
pub use rule::*;

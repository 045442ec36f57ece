//! Log record model and schema validation.
//!
//! Raw input lines arrive as `serde_json::Value`; a [`Record`] only exists
//! once [`validate`] has confirmed the required fields and parsed the
//! timestamp. Downstream stages (filters, aggregation) rely on that.

mod types;
mod validate;


pub use types::*;
pub use validate::*;

pub mod alert;
pub mod filter;
pub mod logging;
pub mod record;
pub mod render;
pub mod run;
pub mod source;
pub mod stats;

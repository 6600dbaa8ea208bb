//! Observability module
//!
//! Structured logging for `mapdocs` runs.

pub mod logging;

pub use logging::{ColorChoice, LogFormat, init_logging};

//! Domain layer: pure models and error types, no I/O.

pub mod error;
pub mod models;

pub use error::{ConfigError, Infeasible};

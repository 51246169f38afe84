//! Regroup - rotating small-group assignment generator.
//!
//! Regroup splits a fixed set of participants into groups of 3 or 4 over a
//! configured number of rounds, searching for a rotation where every pair
//! of participants meets as evenly as possible. The search is a randomized
//! constrained builder raced by a pool of workers that share one
//! best-result registry; it runs until the process receives SIGINT or
//! SIGTERM, then renders the best session found.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): pairing matrix, session model, errors
//! - **Service Layer** (`services`): group builder, quality evaluator,
//!   search workers, best-result registry, supervisor
//! - **Infrastructure Layer** (`infrastructure`): names and session files
//! - **CLI Layer** (`cli`): clap surface and output rendering

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::error::{ConfigError, Infeasible};
pub use domain::models::{BestResult, Group, PairMatrix, Roster, Round, Session};
pub use services::{
    pairing_deviation, BestResultRegistry, SearchConfig, SearchWorker, Supervisor, WORKER_COUNT,
};

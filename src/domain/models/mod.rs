//! Core domain models for group rotation search.

pub mod matrix;
pub mod roster;
pub mod session;

pub use matrix::{PairMatrix, SELF_SENTINEL};
pub use roster::Roster;
pub use session::{participant_count, BestResult, Group, Round, Session};

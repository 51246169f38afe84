//! Session data model: groups, rounds, and the best-found search result.
//!
//! A session is kept as plain nested vectors because that is exactly the
//! persisted JSON shape (`[[[0, 3, 5, 9], ...], ...]`); the `--input`
//! reformat path depends on it round-tripping verbatim.

use super::matrix::PairMatrix;

/// An unordered set of 2–4 distinct participant indices formed in one round.
pub type Group = Vec<usize>;

/// One full partition of all participants into groups.
pub type Round = Vec<Group>;

/// The ordered sequence of rounds produced by one search attempt.
pub type Session = Vec<Round>;

/// Number of participants covered by a session, taken from its first round.
pub fn participant_count(session: &Session) -> usize {
    session
        .first()
        .map(|round| round.iter().map(Vec::len).sum())
        .unwrap_or(0)
}

/// The best session observed so far across all search workers.
///
/// `rounds_completed` is the primary objective (how far into the configured
/// session length an attempt got); `deviation` breaks ties. The registry's
/// empty slot stands in for the "nothing found yet" sentinel.
#[derive(Debug, Clone)]
pub struct BestResult {
    /// Rounds successfully built before this snapshot was taken.
    pub rounds_completed: usize,
    /// The accumulated session, one entry per completed round.
    pub session: Session,
    /// Matrix state after the last completed round.
    pub matrix: PairMatrix,
    /// Population standard deviation of the pairing-count distribution.
    pub deviation: f64,
}

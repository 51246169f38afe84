//! Shared best-result registry.
//!
//! The one piece of mutable state the search workers share. Candidates are
//! compared and swapped in under a single lock, so the published quality is
//! monotonically non-decreasing no matter how workers interleave.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use crate::domain::models::BestResult;

/// Mutex-guarded cell holding the best session any worker has produced.
#[derive(Debug, Default)]
pub struct BestResultRegistry {
    slot: Mutex<Option<BestResult>>,
}

impl BestResultRegistry {
    /// Empty registry; nothing has been published yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a candidate. Replaces the current best and returns `true` when
    /// the candidate dominates: strictly more completed rounds, or the same
    /// number of rounds with strictly lower deviation.
    pub fn publish(&self, candidate: BestResult) -> bool {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.as_ref().is_some_and(|best| !dominates(&candidate, best)) {
            return false;
        }

        info!(
            rounds = candidate.rounds_completed,
            deviation = candidate.deviation,
            "new best session"
        );
        *slot = Some(candidate);
        true
    }

    /// Clone whatever is currently published. Called once, at shutdown.
    pub fn snapshot(&self) -> Option<BestResult> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn dominates(candidate: &BestResult, best: &BestResult) -> bool {
    candidate.rounds_completed > best.rounds_completed
        || (candidate.rounds_completed == best.rounds_completed
            && candidate.deviation < best.deviation)
}

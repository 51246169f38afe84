//! Builds a single round of groups under a repeat-tolerance threshold.
//!
//! Members are chosen lowest-threshold-first: the builder prefers
//! participants who have never met anyone in the forming group, and only
//! settles for repeats when it must, up to the caller's `max_repeat` cap.
//! When even the cap yields no candidate the whole session attempt is
//! infeasible and the failure propagates up as a typed value.

use rand::prelude::*;

use crate::domain::error::Infeasible;
use crate::domain::models::{PairMatrix, Round};

/// Preferred group size; rounds are planned as `ceil(n / 4)` groups.
pub const MAX_GROUP_SIZE: usize = 4;

/// Number of groups a round of `n` participants is split into.
pub fn group_count(n: usize) -> usize {
    n.div_ceil(MAX_GROUP_SIZE)
}

/// Group sizes for one round, largest first.
///
/// `n` is divided as evenly as possible across `group_count(n)` slots, so
/// sizes are 3 or 4 except when a remainder forces a single 2 (n = 2 or 5).
pub fn size_plan(n: usize) -> Vec<usize> {
    let total = group_count(n);
    if total == 0 {
        return Vec::new();
    }
    let base = n / total;
    let larger = n % total;
    (0..total)
        .map(|slot| if slot < larger { base + 1 } else { base })
        .collect()
}

/// Build one round from the current matrix state, recording every new pair.
///
/// Fails with [`Infeasible`] when some group cannot be filled even allowing
/// pairs that have already met `max_repeat - 1` times.
pub fn build_round(
    matrix: &mut PairMatrix,
    max_repeat: u32,
    rng: &mut impl Rng,
) -> Result<Round, Infeasible> {
    let n = matrix.size();
    let mut pool: Vec<usize> = (0..n).collect();
    let mut round = Round::new();

    for target_size in size_plan(n) {
        let seed = pool.swap_remove(rng.random_range(0..pool.len()));
        let mut group = vec![seed];

        for _ in 1..target_size {
            let member = pick_member(&pool, &group, matrix, max_repeat, rng)?;
            pool.retain(|&p| p != member);
            for &existing in &group {
                matrix.record_pair(existing, member);
            }
            group.push(member);
        }

        round.push(group);
    }

    Ok(round)
}

/// Pick the next group member at the lowest workable tolerance.
///
/// Candidates at tolerance `t` are unused participants who have met every
/// current member strictly fewer than `t` times; the first non-empty
/// tolerance wins and the member is drawn uniformly from it.
fn pick_member(
    pool: &[usize],
    group: &[usize],
    matrix: &PairMatrix,
    max_repeat: u32,
    rng: &mut impl Rng,
) -> Result<usize, Infeasible> {
    for tolerance in 1..=max_repeat {
        let candidates: Vec<usize> = pool
            .iter()
            .copied()
            .filter(|&candidate| {
                group
                    .iter()
                    .all(|&member| matrix.count_between(member, candidate) < tolerance)
            })
            .collect();

        if let Some(&member) = candidates.choose(rng) {
            return Ok(member);
        }
    }

    Err(Infeasible)
}

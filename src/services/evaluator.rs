//! Session quality scoring.
//!
//! Quality is the population standard deviation of the pairing-count
//! distribution: the more evenly meetings are spread across all possible
//! pairs, the lower the deviation and the better the session.

use crate::domain::models::PairMatrix;

/// Population standard deviation of repeat counts across all unordered
/// pairs, weighted by how many pairs hold each count.
///
/// A matrix with no pairs at all (fewer than two participants) scores 0.0
/// rather than failing on the empty distribution.
pub fn pairing_deviation(matrix: &PairMatrix) -> f64 {
    let distribution = matrix.distribution();
    let pair_total: usize = distribution.values().sum();
    if pair_total == 0 {
        return 0.0;
    }

    let pair_total = pair_total as f64;
    let mean = distribution
        .iter()
        .map(|(&count, &pairs)| f64::from(count) * pairs as f64)
        .sum::<f64>()
        / pair_total;

    let variance = distribution
        .iter()
        .map(|(&count, &pairs)| pairs as f64 * (f64::from(count) - mean).powi(2))
        .sum::<f64>()
        / pair_total;

    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_matrix_scores_zero() {
        assert_eq!(pairing_deviation(&PairMatrix::new(0)), 0.0);
        assert_eq!(pairing_deviation(&PairMatrix::new(1)), 0.0);
    }

    #[test]
    fn test_untouched_matrix_scores_zero() {
        // All counts are zero, so there is no spread.
        assert_eq!(pairing_deviation(&PairMatrix::new(8)), 0.0);
    }

    #[test]
    fn test_uniform_counts_score_zero() {
        let mut matrix = PairMatrix::new(3);
        matrix.record_pair(0, 1);
        matrix.record_pair(0, 2);
        matrix.record_pair(1, 2);
        assert_eq!(pairing_deviation(&matrix), 0.0);
    }

    #[test]
    fn test_weighted_deviation() {
        // 4 participants, distribution {0: 4 pairs, 1: 1 pair, 2: 1 pair}:
        // mean 0.5, variance 3.5/6.
        let mut matrix = PairMatrix::new(4);
        matrix.record_pair(0, 1);
        matrix.record_pair(0, 1);
        matrix.record_pair(2, 3);

        let expected = (3.5_f64 / 6.0).sqrt();
        assert!((pairing_deviation(&matrix) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_more_even_spread_scores_lower() {
        let mut lumpy = PairMatrix::new(4);
        lumpy.record_pair(0, 1);
        lumpy.record_pair(0, 1);
        lumpy.record_pair(0, 1);

        let mut even = PairMatrix::new(4);
        even.record_pair(0, 1);
        even.record_pair(2, 3);
        even.record_pair(0, 2);

        assert!(pairing_deviation(&even) < pairing_deviation(&lumpy));
    }
}

//! Consistency Checker - Consistency ratio of pairwise judgments.

use serde::{Deserialize, Serialize};

use super::{ComparisonMatrix, PriorityCalculator};
use crate::domain::foundation::Percentage;

/// Largest acceptable consistency ratio (conventional AHP threshold).
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Random consistency index for matrices of size 1 through 10.
pub const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Random index used for any size outside the table.
pub const FALLBACK_RANDOM_INDEX: f64 = 1.49;

/// Outcome of a consistency check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyResult {
    /// Consistency ratio `CI / RI(n)`.
    pub ratio: f64,
    /// `ratio <= CONSISTENCY_THRESHOLD`.
    pub is_consistent: bool,
}

impl ConsistencyResult {
    /// A perfectly consistent result (ratio zero).
    pub const PERFECT: Self = Self {
        ratio: 0.0,
        is_consistent: true,
    };

    /// Creates a result from a ratio, applying the acceptance threshold.
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            is_consistent: ratio <= CONSISTENCY_THRESHOLD,
        }
    }

    /// The ratio as a display percentage, clamped to 0-100%.
    pub fn percentage(&self) -> Percentage {
        Percentage::from_fraction(self.ratio)
    }
}

/// Consistency ratio computation.
pub struct ConsistencyChecker;

impl ConsistencyChecker {
    /// Computes the consistency ratio of the judgments over `items`.
    ///
    /// # Algorithm
    /// 1. `w = derive_weights(matrix, items)`
    /// 2. `λmax = mean_i( Σ_j value(i, j) * w_j / w_i )`
    /// 3. `CI = (λmax - n) / (n - 1)`, `CR = CI / RI(n)`
    ///
    /// # Edge Cases
    /// - Fewer than 3 items: always `CR = 0`, consistent
    /// - More than 10 items: `RI` falls back to [`FALLBACK_RANDOM_INDEX`]
    /// - A zero weight makes the ratio undefined (NaN or infinite)
    pub fn consistency_ratio<S: AsRef<str>>(
        matrix: &ComparisonMatrix,
        items: &[S],
    ) -> ConsistencyResult {
        let n = items.len();
        if n <= 2 {
            return ConsistencyResult::PERFECT;
        }

        let weights = PriorityCalculator::derive_weights(matrix, items);

        let eigen_sum: f64 = items
            .iter()
            .zip(&weights)
            .map(|(row, &row_weight)| {
                let weighted_sum: f64 = items
                    .iter()
                    .zip(&weights)
                    .map(|(col, &col_weight)| matrix.value(row.as_ref(), col.as_ref()) * col_weight)
                    .sum();
                weighted_sum / row_weight
            })
            .sum();

        let size = n as f64;
        let lambda_max = eigen_sum / size;
        let consistency_index = (lambda_max - size) / (size - 1.0);

        ConsistencyResult::from_ratio(consistency_index / Self::random_index(n))
    }

    /// Random consistency index for a matrix of `n` items.
    ///
    /// Sizes outside 1..=10 use the largest tabulated value.
    pub fn random_index(n: usize) -> f64 {
        match n {
            1..=10 => RANDOM_INDEX[n - 1],
            _ => FALLBACK_RANDOM_INDEX,
        }
    }
}

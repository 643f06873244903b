//! Priority Calculator - Geometric-mean approximation of the principal eigenvector.

use super::ComparisonMatrix;

/// Derives normalized priority weights from a comparison matrix.
pub struct PriorityCalculator;

impl PriorityCalculator {
    /// Derives one weight per item, in the order of `items`.
    ///
    /// # Algorithm
    /// 1. `gm_i = (Π_j value(i, j))^(1/n)` over every item `j`, missing entries read as 1
    /// 2. `weight_i = gm_i / Σ_k gm_k`
    ///
    /// # Edge Cases
    /// - No items: Returns empty Vec
    /// - Empty matrix: Returns the uniform vector `1/n`
    /// - A stored zero yields a zero weight for that row; all-zero rows divide by zero
    pub fn derive_weights<S: AsRef<str>>(matrix: &ComparisonMatrix, items: &[S]) -> Vec<f64> {
        let n = items.len();
        if n == 0 {
            return Vec::new();
        }

        let exponent = 1.0 / n as f64;
        let geometric_means: Vec<f64> = items
            .iter()
            .map(|row| {
                let product: f64 = items
                    .iter()
                    .map(|col| matrix.value(row.as_ref(), col.as_ref()))
                    .product();
                product.powf(exponent)
            })
            .collect();

        let total: f64 = geometric_means.iter().sum();
        geometric_means.into_iter().map(|gm| gm / total).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn derive_weights_no_items() {
        let matrix = ComparisonMatrix::builder().judgment("A", "B", 3.0).build();
        let items: [&str; 0] = [];
        assert!(PriorityCalculator::derive_weights(&matrix, &items).is_empty());
    }

    #[test]
    fn derive_weights_single_item() {
        let weights = PriorityCalculator::derive_weights(&ComparisonMatrix::empty(), &["A"]);
        assert_eq!(weights.len(), 1);
        assert_close(weights[0], 1.0);
    }

    #[test]
    fn derive_weights_empty_matrix_is_uniform() {
        let weights =
            PriorityCalculator::derive_weights(&ComparisonMatrix::empty(), &["A", "B", "C"]);
        for w in weights {
            assert_close(w, 1.0 / 3.0);
        }
    }

    #[test]
    fn derive_weights_follows_item_order() {
        let matrix = ComparisonMatrix::builder().judgment("A", "B", 4.0).build();

        let forward = PriorityCalculator::derive_weights(&matrix, &["A", "B"]);
        let reversed = PriorityCalculator::derive_weights(&matrix, &["B", "A"]);

        assert_close(forward[0], 0.8);
        assert_close(forward[1], 0.2);
        assert_close(reversed[0], 0.2);
        assert_close(reversed[1], 0.8);
    }

    #[test]
    fn derive_weights_reciprocal_pair_preserves_ratio() {
        let matrix = ComparisonMatrix::builder().judgment("A", "B", 7.0).build();
        let weights = PriorityCalculator::derive_weights(&matrix, &["A", "B"]);
        assert_close(weights[0] / weights[1], 7.0);
    }

    #[test]
    fn derive_weights_consistent_three_by_three() {
        let matrix = ComparisonMatrix::builder()
            .judgment("A", "B", 2.0)
            .judgment("B", "C", 2.0)
            .judgment("A", "C", 4.0)
            .build();

        let weights = PriorityCalculator::derive_weights(&matrix, &["A", "B", "C"]);
        assert_close(weights[0], 4.0 / 7.0);
        assert_close(weights[1], 2.0 / 7.0);
        assert_close(weights[2], 1.0 / 7.0);
    }

    #[test]
    fn derive_weights_ignores_entries_for_unlisted_items() {
        let matrix = ComparisonMatrix::builder()
            .judgment("A", "B", 3.0)
            .judgment("A", "Z", 9.0)
            .build();

        let weights = PriorityCalculator::derive_weights(&matrix, &["A", "B"]);
        assert_close(weights[0], 0.75);
        assert_close(weights[1], 0.25);
    }

    #[test]
    fn derive_weights_zero_judgment_propagates() {
        let matrix = ComparisonMatrix::builder().entry("A", "B", 0.0).build();
        let weights = PriorityCalculator::derive_weights(&matrix, &["A", "B"]);
        assert_close(weights[0], 0.0);
        assert_close(weights[1], 1.0);
    }

    #[test]
    fn derive_weights_accepts_off_scale_values() {
        let matrix = ComparisonMatrix::builder().judgment("A", "B", 2.25).build();
        let weights = PriorityCalculator::derive_weights(&matrix, &["A", "B"]);
        assert_close(weights[0] / weights[1], 2.25);
    }

    #[test]
    fn derive_weights_does_not_mutate_matrix() {
        let matrix = ComparisonMatrix::builder().judgment("A", "B", 5.0).build();
        let before = matrix.clone();
        let _ = PriorityCalculator::derive_weights(&matrix, &["A", "B", "C"]);
        assert_eq!(matrix, before);
    }
}

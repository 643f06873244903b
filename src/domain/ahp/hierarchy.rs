//! Hierarchy Aggregator - Goal-level synthesis of criteria and alternative priorities.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use super::{ComparisonMatrix, PriorityCalculator};
use crate::domain::foundation::Percentage;

/// An alternative's position in the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// 1-based rank, highest score first.
    pub rank: usize,
    pub alternative_id: String,
    pub score: f64,
}

impl RankedAlternative {
    /// The score as a display percentage.
    pub fn share(&self) -> Percentage {
        Percentage::from_fraction(self.score)
    }
}

/// Hierarchical weight aggregation functions.
pub struct HierarchyAggregator;

impl HierarchyAggregator {
    /// Computes the overall priority of each alternative.
    ///
    /// # Algorithm
    /// `overall[a] = Σ_c criteria_weight[c] * alternative_weight_c[a]`
    ///
    /// # Edge Cases
    /// - Criterion without a matrix: its alternatives are weighted uniformly
    /// - No criteria: every alternative scores 0
    /// - No alternatives: Returns empty HashMap
    pub fn aggregate_overall_weights<C, A>(
        criteria_matrix: &ComparisonMatrix,
        alternative_matrices: &HashMap<String, ComparisonMatrix>,
        criteria_ids: &[C],
        alternative_ids: &[A],
    ) -> HashMap<String, f64>
    where
        C: AsRef<str>,
        A: AsRef<str>,
    {
        let criteria_weights = PriorityCalculator::derive_weights(criteria_matrix, criteria_ids);
        let neutral = ComparisonMatrix::empty();

        let weights_by_criterion: Vec<Vec<f64>> = criteria_ids
            .iter()
            .map(|criterion| {
                let matrix = alternative_matrices
                    .get(criterion.as_ref())
                    .unwrap_or(&neutral);
                PriorityCalculator::derive_weights(matrix, alternative_ids)
            })
            .collect();

        alternative_ids
            .iter()
            .enumerate()
            .map(|(alt_index, alternative)| {
                let overall: f64 = criteria_weights
                    .iter()
                    .zip(&weights_by_criterion)
                    .map(|(criterion_weight, alt_weights)| criterion_weight * alt_weights[alt_index])
                    .sum();
                (alternative.as_ref().to_string(), overall)
            })
            .collect()
    }

    /// Orders alternatives by overall score, highest first.
    ///
    /// Ties keep the order of `alternative_ids`. Alternatives missing from
    /// `overall` score 0.
    pub fn rank<A: AsRef<str>>(
        overall: &HashMap<String, f64>,
        alternative_ids: &[A],
    ) -> Vec<RankedAlternative> {
        let mut scored: Vec<(&str, f64)> = alternative_ids
            .iter()
            .map(|id| (id.as_ref(), overall.get(id.as_ref()).copied().unwrap_or(0.0)))
            .collect();

        // Stable sort keeps input order among equal scores
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        scored
            .into_iter()
            .enumerate()
            .map(|(index, (id, score))| RankedAlternative {
                rank: index + 1,
                alternative_id: id.to_string(),
                score,
            })
            .collect()
    }
}

//! AHP Module - Pure domain services for the Analytic Hierarchy Process.
//!
//! This module contains stateless functions that turn pairwise comparison
//! judgments into priority weights, consistency ratios and a final ranking.
//!
//! # Components
//!
//! - `ComparisonMatrix` - Sparse pairwise judgments; missing pairs read as 1
//! - `JudgmentScale` - The 17-point reciprocal scale (1/9 … 9), labels and formatting
//! - `PriorityCalculator` - Geometric-mean weight derivation
//! - `ConsistencyChecker` - Consistency ratio against the random index table
//! - `HierarchyAggregator` - Weighted sum of alternative priorities over criteria, ranking
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects, no logging) and never mutate their
//! inputs. Invalid judgments are not rejected here; validation belongs to the
//! caller (see `domain::decision`).

mod comparison_matrix;
mod consistency;
mod events;
mod hierarchy;
mod judgment_scale;
mod priority_calculator;

pub use comparison_matrix::{ComparisonMatrix, ComparisonMatrixBuilder, NEUTRAL_JUDGMENT};
pub use consistency::{
    ConsistencyChecker, ConsistencyResult, CONSISTENCY_THRESHOLD, FALLBACK_RANDOM_INDEX,
    RANDOM_INDEX,
};
pub use events::PrioritiesComputed;
pub use hierarchy::{HierarchyAggregator, RankedAlternative};
pub use judgment_scale::{JudgmentScale, SCALE_VALUES};
pub use priority_calculator::PriorityCalculator;

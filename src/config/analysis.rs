//! Analysis configuration

use serde::Deserialize;

use super::ValidationError;
use crate::domain::ahp::RANDOM_INDEX;
use crate::domain::decision::DecisionLimits;

/// Largest matrix the random index table covers.
const MAX_SUPPORTED_ITEMS: usize = RANDOM_INDEX.len();

/// Limits applied when building decisions
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Most criteria per decision
    #[serde(default = "default_max_criteria")]
    pub max_criteria: usize,

    /// Most alternatives per decision
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: usize,

    /// Fewest criteria and alternatives needed to evaluate
    #[serde(default = "default_min_items")]
    pub min_items: usize,

    /// Only accept judgments on the 1/9 to 9 scale
    #[serde(default = "default_strict_scale")]
    pub strict_scale: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_criteria: default_max_criteria(),
            max_alternatives: default_max_alternatives(),
            min_items: default_min_items(),
            strict_scale: default_strict_scale(),
        }
    }
}

fn default_max_criteria() -> usize {
    7
}

fn default_max_alternatives() -> usize {
    5
}

fn default_min_items() -> usize {
    2
}

fn default_strict_scale() -> bool {
    true
}

impl AnalysisConfig {
    /// Validate analysis limits
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_items < 1 {
            return Err(ValidationError::MinItemsTooSmall);
        }

        for (field, value) in [
            ("max_criteria", self.max_criteria),
            ("max_alternatives", self.max_alternatives),
        ] {
            if value < self.min_items {
                return Err(ValidationError::MaximumBelowMinimum {
                    field,
                    value,
                    min_items: self.min_items,
                });
            }
            if value > MAX_SUPPORTED_ITEMS {
                return Err(ValidationError::MaximumTooLarge {
                    field,
                    value,
                    limit: MAX_SUPPORTED_ITEMS,
                });
            }
        }

        Ok(())
    }

    /// The limits to hand to the decision model
    pub fn limits(&self) -> DecisionLimits {
        DecisionLimits {
            max_criteria: self.max_criteria,
            max_alternatives: self.max_alternatives,
            min_items: self.min_items,
            strict_scale: self.strict_scale,
        }
    }
}

//! Decision workflow - The five guided steps and the rules for leaving each one.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::DecisionModel;
use crate::domain::ahp::ConsistencyChecker;
use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};

/// Steps a decision moves through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStep {
    SetGoal,
    SetCriteriaAndAlternatives,
    CriteriaComparison,
    AlternativesComparison,
    ReviewResults,
}

impl WorkflowStep {
    /// All steps in order.
    pub const ALL: [WorkflowStep; 5] = [
        WorkflowStep::SetGoal,
        WorkflowStep::SetCriteriaAndAlternatives,
        WorkflowStep::CriteriaComparison,
        WorkflowStep::AlternativesComparison,
        WorkflowStep::ReviewResults,
    ];

    /// Zero-based position of the step.
    pub fn index(&self) -> usize {
        match self {
            WorkflowStep::SetGoal => 0,
            WorkflowStep::SetCriteriaAndAlternatives => 1,
            WorkflowStep::CriteriaComparison => 2,
            WorkflowStep::AlternativesComparison => 3,
            WorkflowStep::ReviewResults => 4,
        }
    }

    pub fn next(&self) -> Option<WorkflowStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<WorkflowStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn title(&self) -> &'static str {
        match self {
            WorkflowStep::SetGoal => "Set Goal",
            WorkflowStep::SetCriteriaAndAlternatives => "Set Criteria & Alternatives",
            WorkflowStep::CriteriaComparison => "Criteria Comparison",
            WorkflowStep::AlternativesComparison => "Alternatives Comparison",
            WorkflowStep::ReviewResults => "Review Results",
        }
    }
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl StateMachine for WorkflowStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.previous().into_iter().chain(self.next()).collect()
    }
}

/// Decides whether a step's work is complete enough to move forward.
pub struct StepGate;

impl StepGate {
    /// True when `step` is complete for `model`.
    pub fn is_step_valid(model: &DecisionModel, step: WorkflowStep) -> bool {
        Self::check(model, step).is_ok()
    }

    /// Checks `step` against `model`, explaining the first problem found.
    ///
    /// # Rules
    /// - `SetGoal`: goal title is not blank
    /// - `SetCriteriaAndAlternatives`: at least `min_items` of each
    /// - `CriteriaComparison`: no judgments yet, or criteria CR within threshold
    /// - `AlternativesComparison`: every judged criterion's CR within threshold
    /// - `ReviewResults`: always complete
    pub fn check(model: &DecisionModel, step: WorkflowStep) -> Result<(), DomainError> {
        match step {
            WorkflowStep::SetGoal => {
                if model.goal().title.trim().is_empty() {
                    return Err(DomainError::validation(
                        "goal.title",
                        "A goal is required before continuing",
                    ));
                }
                Ok(())
            }
            WorkflowStep::SetCriteriaAndAlternatives => {
                let min = model.limits().min_items;
                if model.criteria().len() < min {
                    return Err(DomainError::validation(
                        "criteria",
                        format!("At least {} criteria are required", min),
                    ));
                }
                if model.alternatives().len() < min {
                    return Err(DomainError::validation(
                        "alternatives",
                        format!("At least {} alternatives are required", min),
                    ));
                }
                Ok(())
            }
            WorkflowStep::CriteriaComparison => {
                let matrix = model.criteria_comparisons();
                if matrix.is_empty() {
                    return Ok(());
                }
                let result = ConsistencyChecker::consistency_ratio(matrix, &model.criterion_ids());
                if result.is_consistent {
                    Ok(())
                } else {
                    Err(DomainError::new(
                        ErrorCode::InconsistentJudgments,
                        format!(
                            "Criteria judgments are inconsistent (CR {})",
                            result.percentage()
                        ),
                    )
                    .with_detail("consistency_ratio", result.ratio.to_string()))
                }
            }
            WorkflowStep::AlternativesComparison => {
                let alternatives = model.alternative_ids();
                for criterion in model.criteria() {
                    let Some(matrix) = model.alternative_comparisons_for(&criterion.id) else {
                        continue;
                    };
                    if matrix.is_empty() {
                        continue;
                    }
                    let result = ConsistencyChecker::consistency_ratio(matrix, &alternatives);
                    if !result.is_consistent {
                        return Err(DomainError::new(
                            ErrorCode::InconsistentJudgments,
                            format!(
                                "Judgments under '{}' are inconsistent (CR {})",
                                criterion.name,
                                result.percentage()
                            ),
                        )
                        .with_detail("criterion_id", criterion.id.clone())
                        .with_detail("consistency_ratio", result.ratio.to_string()));
                    }
                }
                Ok(())
            }
            WorkflowStep::ReviewResults => Ok(()),
        }
    }
}

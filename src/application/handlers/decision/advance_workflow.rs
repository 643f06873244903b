//! AdvanceWorkflowHandler - Moves a decision between workflow steps.

use crate::domain::decision::{DecisionModel, StepGate, WorkflowStep};
use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};

/// Handler for stepping forward and back through the decision workflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvanceWorkflowHandler;

impl AdvanceWorkflowHandler {
    pub fn new() -> Self {
        Self
    }

    /// Moves to the step after `current` once `current` is complete.
    ///
    /// # Errors
    /// - `VALIDATION_FAILED` or `INCONSISTENT_JUDGMENTS` when `current` is incomplete
    /// - `INVALID_STATE_TRANSITION` when `current` is the last step
    pub fn advance(
        &self,
        model: &DecisionModel,
        current: WorkflowStep,
    ) -> Result<WorkflowStep, DomainError> {
        if let Err(err) = StepGate::check(model, current) {
            tracing::warn!(
                decision_id = %model.id(),
                step = ?current,
                code = %err.code,
                "Workflow step blocked: {}",
                err.message
            );
            return Err(err.with_detail("step", format!("{:?}", current)));
        }

        let target = current.next().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("{} is the final step", current),
            )
        })?;
        let next = current.transition_to(target)?;

        tracing::info!(
            decision_id = %model.id(),
            from = ?current,
            to = ?next,
            "Workflow advanced"
        );
        Ok(next)
    }

    /// Moves to the step before `current`. Going back is never gated.
    pub fn back(&self, current: WorkflowStep) -> Result<WorkflowStep, DomainError> {
        let target = current.previous().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("{} is the first step", current),
            )
        })?;
        let previous = current.transition_to(target)?;
        tracing::debug!(from = ?current, to = ?previous, "Workflow moved back");
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::DecisionLimits;

    fn complete_model() -> DecisionModel {
        let mut model = DecisionModel::new(DecisionLimits::default());
        model.set_goal("Move city", "").unwrap();
        model.add_criterion("Rent", None).unwrap();
        model.add_criterion("Climate", None).unwrap();
        model.add_alternative("Lisbon", None).unwrap();
        model.add_alternative("Oslo", None).unwrap();
        model
    }

    #[test]
    fn advance_walks_through_every_step() {
        let handler = AdvanceWorkflowHandler::new();
        let model = complete_model();

        let mut step = WorkflowStep::SetGoal;
        for expected in &WorkflowStep::ALL[1..] {
            step = handler.advance(&model, step).unwrap();
            assert_eq!(step, *expected);
        }
    }

    #[test]
    fn advance_blocked_without_goal() {
        let handler = AdvanceWorkflowHandler::new();
        let model = DecisionModel::new(DecisionLimits::default());

        let err = handler.advance(&model, WorkflowStep::SetGoal).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("step"), Some(&"SetGoal".to_string()));
    }

    #[test]
    fn advance_blocked_by_inconsistent_criteria() {
        let handler = AdvanceWorkflowHandler::new();
        let mut model = complete_model();
        let extra = model.add_criterion("Jobs", None).unwrap();
        let ids: Vec<String> = model.criterion_ids().iter().map(|s| s.to_string()).collect();
        model.compare_criteria(&ids[0], &ids[1], 9.0).unwrap();
        model.compare_criteria(&ids[1], &extra, 9.0).unwrap();
        model.compare_criteria(&ids[0], &extra, 1.0 / 9.0).unwrap();

        let err = handler
            .advance(&model, WorkflowStep::CriteriaComparison)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InconsistentJudgments);
    }

    #[test]
    fn advance_past_last_step_fails() {
        let handler = AdvanceWorkflowHandler::new();
        let err = handler
            .advance(&complete_model(), WorkflowStep::ReviewResults)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn back_moves_one_step() {
        let handler = AdvanceWorkflowHandler::new();
        assert_eq!(
            handler.back(WorkflowStep::ReviewResults).unwrap(),
            WorkflowStep::AlternativesComparison
        );
        assert!(handler.back(WorkflowStep::SetGoal).is_err());
    }
}

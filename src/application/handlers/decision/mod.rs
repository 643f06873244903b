//! Decision handlers - Evaluation and workflow navigation.

mod advance_workflow;
mod evaluate_decision;

pub use advance_workflow::AdvanceWorkflowHandler;
pub use evaluate_decision::{
    CriterionConsistency, DecisionReport, EvaluateDecisionHandler, EvaluationOutcome,
    RankingEntry, WeightedItem,
};

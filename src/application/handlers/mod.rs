//! Command handlers for the application layer.

pub mod decision;

pub use decision::{
    AdvanceWorkflowHandler, CriterionConsistency, DecisionReport, EvaluateDecisionHandler,
    EvaluationOutcome, RankingEntry, WeightedItem,
};

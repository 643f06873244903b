//! Application layer - Handlers that orchestrate the domain.
//!
//! Handlers validate preconditions, run domain services, log what happened
//! and package results for adapters.

pub mod handlers;

pub use handlers::{
    AdvanceWorkflowHandler, CriterionConsistency, DecisionReport, EvaluateDecisionHandler,
    EvaluationOutcome, RankingEntry, WeightedItem,
};

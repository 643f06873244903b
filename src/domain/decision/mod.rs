//! Decision Module - The decision being built and the guided steps around it.
//!
//! `DecisionModel` owns the goal, the criteria and alternatives, and every
//! pairwise judgment, validating edits before they reach the AHP engine.
//! `WorkflowStep` and `StepGate` describe the guided flow from goal to results.

mod model;
mod workflow;

pub use model::{Alternative, Criterion, DecisionLimits, DecisionModel, Goal};
pub use workflow::{StepGate, WorkflowStep};

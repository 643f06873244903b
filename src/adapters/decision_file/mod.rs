//! Decision file adapter - Loads decisions from YAML or JSON files.

mod file_decision_loader;

pub use file_decision_loader::FileDecisionLoader;

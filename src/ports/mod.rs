//! Ports - Interfaces between the domain and the outside world.
//!
//! Adapters implement these traits; the application depends only on them.

mod decision_loader;

pub use decision_loader::{
    DecisionDocument, DecisionLoadError, DecisionLoader, DocumentGoal, DocumentItem,
    DocumentJudgment,
};

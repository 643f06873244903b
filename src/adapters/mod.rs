//! Adapters - Implementations of port interfaces.
//!
//! - `decision_file` - Filesystem loader for decision documents

pub mod decision_file;

pub use decision_file::FileDecisionLoader;

//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, events)
//! - `ahp` - Pure AHP services (weights, consistency, hierarchy aggregation)
//! - `decision` - Decision model editing and the guided workflow

pub mod ahp;
pub mod decision;
pub mod foundation;

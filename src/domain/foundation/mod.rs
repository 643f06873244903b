//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, events, and error types
//! that form the vocabulary of the AHP domain.

mod errors;
mod events;
mod ids;
mod percentage;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{domain_event, DomainEvent, EventEnvelope, EventId, SerializableDomainEvent};
pub use ids::{new_item_id, DecisionId};
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;

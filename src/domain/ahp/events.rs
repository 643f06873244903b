//! AHP domain events.
//!
//! Published when a decision's priorities have been computed, so that
//! consumers can render results or keep an audit trail of evaluations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{domain_event, DecisionId, EventId, Timestamp};

/// Published when criteria weights, consistency and overall ranking are computed.
///
/// Carries summarized results keyed by item id, not the raw matrices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioritiesComputed {
    /// Unique event identifier for deduplication.
    pub event_id: EventId,
    /// The decision this evaluation belongs to.
    pub decision_id: DecisionId,
    /// Map of criterion_id -> criterion weight.
    pub criteria_weights: HashMap<String, f64>,
    /// Map of alternative_id -> overall weight.
    pub overall_weights: HashMap<String, f64>,
    /// Highest-ranked alternative (None when there are no alternatives).
    pub top_alternative_id: Option<String>,
    /// Consistency ratio of the criteria judgments.
    pub criteria_consistency_ratio: f64,
    /// True when every judged matrix passed the consistency threshold.
    pub all_consistent: bool,
    /// When the priorities were computed.
    pub computed_at: Timestamp,
}

domain_event!(
    PrioritiesComputed,
    event_type = "ahp.priorities_computed.v1",
    schema_version = 1,
    aggregate_id = decision_id,
    aggregate_type = "Decision",
    occurred_at = computed_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, SerializableDomainEvent};

    fn sample_event() -> PrioritiesComputed {
        PrioritiesComputed {
            event_id: EventId::new(),
            decision_id: DecisionId::new(),
            criteria_weights: HashMap::from([("cost".to_string(), 0.6), ("speed".to_string(), 0.4)]),
            overall_weights: HashMap::from([("X".to_string(), 0.55), ("Y".to_string(), 0.45)]),
            top_alternative_id: Some("X".to_string()),
            criteria_consistency_ratio: 0.0,
            all_consistent: true,
            computed_at: Timestamp::now(),
        }
    }

    #[test]
    fn priorities_computed_event_metadata() {
        let event = sample_event();
        assert_eq!(event.event_type(), "ahp.priorities_computed.v1");
        assert_eq!(event.schema_version(), 1);
        assert_eq!(event.aggregate_type(), "Decision");
        assert_eq!(event.aggregate_id(), event.decision_id.to_string());
    }

    #[test]
    fn priorities_computed_envelope_carries_payload() {
        let event = sample_event();
        let envelope = event.to_envelope().unwrap();

        assert_eq!(envelope.schema_version, 1);
        assert_eq!(envelope.event_id, event.event_id);

        let restored: PrioritiesComputed = envelope.payload_as().unwrap();
        assert_eq!(restored.top_alternative_id.as_deref(), Some("X"));
        assert_eq!(restored.overall_weights.get("Y"), Some(&0.45));
    }
}

//! EvaluateDecisionHandler - Computes weights, consistency and ranking for a decision.

use serde::Serialize;

use crate::domain::ahp::{
    ConsistencyChecker, ConsistencyResult, HierarchyAggregator, PrioritiesComputed,
    PriorityCalculator,
};
use crate::domain::decision::DecisionModel;
use crate::domain::foundation::{
    DecisionId, DomainError, ErrorCode, EventEnvelope, EventId, Percentage,
    SerializableDomainEvent, Timestamp,
};

/// A criterion with its derived weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedItem {
    pub id: String,
    pub name: String,
    pub weight: f64,
    pub share: Percentage,
}

/// Consistency of the alternative judgments under one criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionConsistency {
    pub criterion_id: String,
    pub criterion_name: String,
    /// False when no alternative judgments were made for this criterion.
    pub judged: bool,
    pub result: ConsistencyResult,
}

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub rank: usize,
    pub alternative_id: String,
    pub name: String,
    pub score: f64,
    pub share: Percentage,
}

/// Everything a caller needs to present the results of a decision.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionReport {
    pub decision_id: DecisionId,
    pub goal: String,
    pub criteria: Vec<WeightedItem>,
    pub criteria_consistency: ConsistencyResult,
    pub alternative_consistency: Vec<CriterionConsistency>,
    pub ranking: Vec<RankingEntry>,
    pub all_consistent: bool,
}

/// Result of a successful evaluation.
#[derive(Debug, Clone)]
pub struct EvaluationOutcome {
    pub report: DecisionReport,
    pub event: PrioritiesComputed,
    pub envelope: EventEnvelope,
}

/// Handler that runs the AHP engine over a complete decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluateDecisionHandler;

impl EvaluateDecisionHandler {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates `model`.
    ///
    /// Inconsistent judgments do not fail the evaluation; they are reported
    /// through `all_consistent` and the per-matrix results.
    ///
    /// # Errors
    /// - `VALIDATION_FAILED` when fewer than `min_items` criteria or alternatives exist
    /// - `SERIALIZATION_FAILED` when the event cannot be wrapped in an envelope
    pub fn handle(&self, model: &DecisionModel) -> Result<EvaluationOutcome, DomainError> {
        let min = model.limits().min_items;
        if model.criteria().len() < min || model.alternatives().len() < min {
            tracing::warn!(
                decision_id = %model.id(),
                criteria = model.criteria().len(),
                alternatives = model.alternatives().len(),
                "Decision is too small to evaluate"
            );
            return Err(DomainError::validation(
                "decision",
                format!(
                    "At least {} criteria and {} alternatives are required",
                    min, min
                ),
            ));
        }

        let criterion_ids = model.criterion_ids();
        let alternative_ids = model.alternative_ids();

        tracing::debug!(
            decision_id = %model.id(),
            criteria = criterion_ids.len(),
            alternatives = alternative_ids.len(),
            "Evaluating decision"
        );

        // 1. Criteria weights and consistency
        let criteria_weights =
            PriorityCalculator::derive_weights(model.criteria_comparisons(), &criterion_ids);
        let criteria_consistency =
            ConsistencyChecker::consistency_ratio(model.criteria_comparisons(), &criterion_ids);

        let criteria: Vec<WeightedItem> = model
            .criteria()
            .iter()
            .zip(&criteria_weights)
            .map(|(criterion, &weight)| WeightedItem {
                id: criterion.id.clone(),
                name: criterion.name.clone(),
                weight,
                share: Percentage::from_fraction(weight),
            })
            .collect();

        // 2. Per-criterion alternative consistency
        let alternative_consistency: Vec<CriterionConsistency> = model
            .criteria()
            .iter()
            .map(|criterion| {
                let matrix = model
                    .alternative_comparisons_for(&criterion.id)
                    .filter(|m| !m.is_empty());
                CriterionConsistency {
                    criterion_id: criterion.id.clone(),
                    criterion_name: criterion.name.clone(),
                    judged: matrix.is_some(),
                    result: matrix
                        .map(|m| ConsistencyChecker::consistency_ratio(m, &alternative_ids))
                        .unwrap_or(ConsistencyResult::PERFECT),
                }
            })
            .collect();

        let all_consistent = criteria_consistency.is_consistent
            && alternative_consistency.iter().all(|c| c.result.is_consistent);

        if !all_consistent {
            tracing::warn!(
                decision_id = %model.id(),
                criteria_ratio = criteria_consistency.ratio,
                "Decision contains inconsistent judgments"
            );
        }

        // 3. Overall weights and ranking
        let overall = HierarchyAggregator::aggregate_overall_weights(
            model.criteria_comparisons(),
            model.alternative_comparisons(),
            &criterion_ids,
            &alternative_ids,
        );
        let ranked = HierarchyAggregator::rank(&overall, &alternative_ids);

        let ranking: Vec<RankingEntry> = ranked
            .iter()
            .map(|entry| RankingEntry {
                rank: entry.rank,
                alternative_id: entry.alternative_id.clone(),
                name: model
                    .alternative_name(&entry.alternative_id)
                    .unwrap_or_default()
                    .to_string(),
                score: entry.score,
                share: entry.share(),
            })
            .collect();

        // 4. Event
        let event = PrioritiesComputed {
            event_id: EventId::new(),
            decision_id: model.id(),
            criteria_weights: criteria
                .iter()
                .map(|c| (c.id.clone(), c.weight))
                .collect(),
            overall_weights: overall,
            top_alternative_id: ranking.first().map(|r| r.alternative_id.clone()),
            criteria_consistency_ratio: criteria_consistency.ratio,
            all_consistent,
            computed_at: Timestamp::now(),
        };

        let envelope = event.to_envelope().map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationFailed,
                format!("Failed to serialize event: {}", e),
            )
        })?;

        tracing::info!(
            decision_id = %model.id(),
            top_alternative = ?event.top_alternative_id,
            all_consistent,
            "Decision evaluated"
        );

        Ok(EvaluationOutcome {
            report: DecisionReport {
                decision_id: model.id(),
                goal: model.goal().title.clone(),
                criteria,
                criteria_consistency,
                alternative_consistency,
                ranking,
                all_consistent,
            },
            event,
            envelope,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::DecisionLimits;

    const TOLERANCE: f64 = 1e-9;

    /// Two criteria of equal weight, X preferred 4:1 on cost, Y preferred 7:3 on quality.
    fn vendor_decision() -> (DecisionModel, Vec<String>, Vec<String>) {
        let limits = DecisionLimits {
            strict_scale: false,
            ..DecisionLimits::default()
        };
        let mut model = DecisionModel::new(limits);
        model.set_goal("Pick a vendor", "").unwrap();
        let c = vec![
            model.add_criterion("Cost", None).unwrap(),
            model.add_criterion("Quality", None).unwrap(),
        ];
        let a = vec![
            model.add_alternative("X", None).unwrap(),
            model.add_alternative("Y", None).unwrap(),
        ];
        model.compare_alternatives(&c[0], &a[0], &a[1], 4.0).unwrap();
        model
            .compare_alternatives(&c[1], &a[0], &a[1], 3.0 / 7.0)
            .unwrap();
        (model, c, a)
    }

    #[test]
    fn evaluate_ranks_by_overall_weight() {
        let (model, _, a) = vendor_decision();
        let outcome = EvaluateDecisionHandler::new().handle(&model).unwrap();
        let report = &outcome.report;

        assert_eq!(report.ranking[0].alternative_id, a[0]);
        assert_eq!(report.ranking[0].name, "X");
        assert!((report.ranking[0].score - 0.55).abs() < TOLERANCE);
        assert!((report.ranking[1].score - 0.45).abs() < TOLERANCE);
        assert_eq!(report.ranking[0].share.to_string(), "55.0%");
    }

    #[test]
    fn evaluate_reports_uniform_criteria_without_judgments() {
        let (model, _, _) = vendor_decision();
        let outcome = EvaluateDecisionHandler::new().handle(&model).unwrap();

        for criterion in &outcome.report.criteria {
            assert!((criterion.weight - 0.5).abs() < TOLERANCE);
        }
        assert!(outcome.report.all_consistent);
    }

    #[test]
    fn evaluate_marks_unjudged_criteria() {
        let (mut model, c, _) = vendor_decision();
        let extra = model.add_criterion("Support", None).unwrap();
        let outcome = EvaluateDecisionHandler::new().handle(&model).unwrap();

        let support = outcome
            .report
            .alternative_consistency
            .iter()
            .find(|cc| cc.criterion_id == extra)
            .unwrap();
        assert!(!support.judged);
        assert_eq!(support.result, ConsistencyResult::PERFECT);
        assert!(outcome
            .report
            .alternative_consistency
            .iter()
            .any(|cc| cc.criterion_id == c[0] && cc.judged));
    }

    #[test]
    fn evaluate_flags_inconsistent_criteria() {
        let (mut model, _, _) = vendor_decision();
        let c3 = model.add_criterion("Speed", None).unwrap();
        let ids: Vec<String> = model.criterion_ids().iter().map(|s| s.to_string()).collect();
        model.compare_criteria(&ids[0], &ids[1], 9.0).unwrap();
        model.compare_criteria(&ids[1], &c3, 9.0).unwrap();
        model.compare_criteria(&ids[0], &c3, 1.0 / 9.0).unwrap();

        let outcome = EvaluateDecisionHandler::new().handle(&model).unwrap();
        assert!(!outcome.report.criteria_consistency.is_consistent);
        assert!(!outcome.report.all_consistent);
        assert!(!outcome.event.all_consistent);
    }

    #[test]
    fn evaluate_builds_event_and_envelope() {
        let (model, _, a) = vendor_decision();
        let outcome = EvaluateDecisionHandler::new().handle(&model).unwrap();

        assert_eq!(outcome.event.decision_id, model.id());
        assert_eq!(outcome.event.top_alternative_id.as_deref(), Some(a[0].as_str()));
        assert_eq!(outcome.envelope.event_type, "ahp.priorities_computed.v1");
        assert_eq!(outcome.envelope.aggregate_id, model.id().to_string());
    }

    #[test]
    fn evaluate_rejects_too_few_items() {
        let mut model = DecisionModel::new(DecisionLimits::default());
        model.add_criterion("Cost", None).unwrap();
        model.add_alternative("X", None).unwrap();
        model.add_alternative("Y", None).unwrap();

        let err = EvaluateDecisionHandler::new().handle(&model).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}

//! Decision Model - Goal, criteria, alternatives and their pairwise judgments.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::ahp::{ComparisonMatrix, JudgmentScale};
use crate::domain::foundation::{
    new_item_id, DecisionId, DomainError, ErrorCode, Timestamp, ValidationError,
};

/// The goal the decision is trying to achieve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A criterion alternatives are judged against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// One of the options being chosen between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// Size and scale rules applied when editing a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionLimits {
    /// Most criteria a decision may hold.
    pub max_criteria: usize,
    /// Most alternatives a decision may hold.
    pub max_alternatives: usize,
    /// Fewest criteria and alternatives needed before comparing.
    pub min_items: usize,
    /// Reject judgments that are not on the 17-point scale.
    pub strict_scale: bool,
}

impl Default for DecisionLimits {
    fn default() -> Self {
        Self {
            max_criteria: 7,
            max_alternatives: 5,
            min_items: 2,
            strict_scale: true,
        }
    }
}

/// A decision under construction: the inputs to the AHP engine plus labels.
///
/// Judgments are always stored with their reciprocal, so the matrices
/// handed to the engine satisfy `m[a][b] == 1 / m[b][a]`.
#[derive(Debug, Clone)]
pub struct DecisionModel {
    id: DecisionId,
    goal: Goal,
    criteria: Vec<Criterion>,
    alternatives: Vec<Alternative>,
    criteria_comparisons: ComparisonMatrix,
    alternative_comparisons: HashMap<String, ComparisonMatrix>,
    limits: DecisionLimits,
    created_at: Timestamp,
}

impl DecisionModel {
    /// Creates an empty decision with a fresh id.
    pub fn new(limits: DecisionLimits) -> Self {
        Self::with_id(DecisionId::new(), limits)
    }

    /// Creates an empty decision with a known id.
    pub fn with_id(id: DecisionId, limits: DecisionLimits) -> Self {
        Self {
            id,
            goal: Goal::default(),
            criteria: Vec::new(),
            alternatives: Vec::new(),
            criteria_comparisons: ComparisonMatrix::empty(),
            alternative_comparisons: HashMap::new(),
            limits,
            created_at: Timestamp::now(),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Accessors
    // ════════════════════════════════════════════════════════════════════════════

    pub fn id(&self) -> DecisionId {
        self.id
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn criteria_comparisons(&self) -> &ComparisonMatrix {
        &self.criteria_comparisons
    }

    /// Alternative judgments keyed by criterion id.
    pub fn alternative_comparisons(&self) -> &HashMap<String, ComparisonMatrix> {
        &self.alternative_comparisons
    }

    /// Alternative judgments under one criterion, if any were made.
    pub fn alternative_comparisons_for(&self, criterion_id: &str) -> Option<&ComparisonMatrix> {
        self.alternative_comparisons.get(criterion_id)
    }

    pub fn limits(&self) -> &DecisionLimits {
        &self.limits
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Criterion ids in insertion order.
    pub fn criterion_ids(&self) -> Vec<&str> {
        self.criteria.iter().map(|c| c.id.as_str()).collect()
    }

    /// Alternative ids in insertion order.
    pub fn alternative_ids(&self) -> Vec<&str> {
        self.alternatives.iter().map(|a| a.id.as_str()).collect()
    }

    /// Looks up a criterion name by id.
    pub fn criterion_name(&self, id: &str) -> Option<&str> {
        self.criteria
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    /// Looks up an alternative name by id.
    pub fn alternative_name(&self, id: &str) -> Option<&str> {
        self.alternatives
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.name.as_str())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Editing
    // ════════════════════════════════════════════════════════════════════════════

    /// Sets the goal. The title is trimmed and must not be empty.
    pub fn set_goal(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<(), DomainError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::empty_field("goal.title").into());
        }
        self.goal = Goal {
            title,
            description: description.into().trim().to_string(),
        };
        Ok(())
    }

    /// Adds a criterion and returns its generated id.
    ///
    /// # Errors
    /// - Empty name after trimming
    /// - Name already used (case-insensitive)
    /// - `max_criteria` already reached
    pub fn add_criterion(
        &mut self,
        name: &str,
        description: Option<String>,
    ) -> Result<String, DomainError> {
        let existing: Vec<&str> = self.criteria.iter().map(|c| c.name.as_str()).collect();
        let name = validate_new_name("criteria", name, &existing, self.limits.max_criteria)?;

        let id = new_item_id("c");
        self.criteria.push(Criterion {
            id: id.clone(),
            name,
            description,
        });
        Ok(id)
    }

    /// Adds an alternative and returns its generated id.
    ///
    /// # Errors
    /// - Empty name after trimming
    /// - Name already used (case-insensitive)
    /// - `max_alternatives` already reached
    pub fn add_alternative(
        &mut self,
        name: &str,
        description: Option<String>,
    ) -> Result<String, DomainError> {
        let existing: Vec<&str> = self.alternatives.iter().map(|a| a.name.as_str()).collect();
        let name = validate_new_name("alternatives", name, &existing, self.limits.max_alternatives)?;

        let id = new_item_id("a");
        self.alternatives.push(Alternative {
            id: id.clone(),
            name,
            description,
        });
        Ok(id)
    }

    /// Removes a criterion along with every judgment that refers to it.
    pub fn remove_criterion(&mut self, id: &str) -> Result<(), DomainError> {
        let index = self
            .criteria
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| criterion_not_found(id))?;

        self.criteria.remove(index);
        self.criteria_comparisons.remove_item(id);
        self.alternative_comparisons.remove(id);
        Ok(())
    }

    /// Removes an alternative from the decision and from every criterion's judgments.
    pub fn remove_alternative(&mut self, id: &str) -> Result<(), DomainError> {
        let index = self
            .alternatives
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| alternative_not_found(id))?;

        self.alternatives.remove(index);
        for matrix in self.alternative_comparisons.values_mut() {
            matrix.remove_item(id);
        }
        Ok(())
    }

    /// Records "criterion `a` is `value` times as important as criterion `b`".
    pub fn compare_criteria(&mut self, a: &str, b: &str, value: f64) -> Result<(), DomainError> {
        self.require_criterion(a)?;
        self.require_criterion(b)?;
        self.validate_judgment(a, b, value)?;

        self.criteria_comparisons.set_judgment(a, b, value);
        Ok(())
    }

    /// Records "under `criterion`, alternative `a` is `value` times as preferable as `b`".
    pub fn compare_alternatives(
        &mut self,
        criterion: &str,
        a: &str,
        b: &str,
        value: f64,
    ) -> Result<(), DomainError> {
        self.require_criterion(criterion)?;
        self.require_alternative(a)?;
        self.require_alternative(b)?;
        self.validate_judgment(a, b, value)?;

        self.alternative_comparisons
            .entry(criterion.to_string())
            .or_default()
            .set_judgment(a, b, value);
        Ok(())
    }

    fn require_criterion(&self, id: &str) -> Result<(), DomainError> {
        if self.criteria.iter().any(|c| c.id == id) {
            Ok(())
        } else {
            Err(criterion_not_found(id))
        }
    }

    fn require_alternative(&self, id: &str) -> Result<(), DomainError> {
        if self.alternatives.iter().any(|a| a.id == id) {
            Ok(())
        } else {
            Err(alternative_not_found(id))
        }
    }

    fn validate_judgment(&self, a: &str, b: &str, value: f64) -> Result<(), ValidationError> {
        if a == b {
            return Err(ValidationError::invalid_format(
                "judgment",
                "an item cannot be compared with itself",
            ));
        }
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::invalid_format(
                "judgment",
                format!("{} is not a positive finite ratio", value),
            ));
        }
        if self.limits.strict_scale && !JudgmentScale::contains(value) {
            return Err(ValidationError::invalid_format(
                "judgment",
                format!("{} is not on the 1/9 to 9 scale", value),
            ));
        }
        Ok(())
    }
}

/// Trims a new item name and checks it against existing names and the size limit.
fn validate_new_name(
    field: &str,
    name: &str,
    existing: &[&str],
    max: usize,
) -> Result<String, ValidationError> {
    if existing.len() >= max {
        return Err(ValidationError::limit_exceeded(field, max));
    }

    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }

    let lowered = trimmed.to_lowercase();
    if existing.iter().any(|n| n.to_lowercase() == lowered) {
        return Err(ValidationError::duplicate(field, trimmed));
    }

    Ok(trimmed.to_string())
}

fn criterion_not_found(id: &str) -> DomainError {
    DomainError::new(ErrorCode::CriterionNotFound, format!("Criterion '{}' not found", id))
        .with_detail("criterion_id", id)
}

fn alternative_not_found(id: &str) -> DomainError {
    DomainError::new(
        ErrorCode::AlternativeNotFound,
        format!("Alternative '{}' not found", id),
    )
    .with_detail("alternative_id", id)
}

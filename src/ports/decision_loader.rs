//! Decision Loader Port - Reading decisions from an external source.
//!
//! This port defines how a stored decision document becomes a validated
//! `DecisionModel`. Adapters (like FileDecisionLoader) handle the storage
//! format; replaying the document through the model is shared here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::domain::decision::{DecisionLimits, DecisionModel};
use crate::domain::foundation::{DecisionId, DomainError, ErrorCode};

/// Port for loading decisions.
///
/// # Contract
///
/// Implementations must:
/// - Reject sources they cannot read or parse with a `DecisionLoadError`
/// - Build the model through `DecisionDocument::into_model`, so every judgment
///   passes the same validation as an interactive edit
///
/// # Usage
///
/// ```rust,ignore
/// let loader: &dyn DecisionLoader = &FileDecisionLoader::new(limits);
/// let model = loader.load(Path::new("decision.yaml"))?;
/// ```
pub trait DecisionLoader: Send + Sync {
    /// Loads and validates the decision stored at `path`.
    fn load(&self, path: &Path) -> Result<DecisionModel, DecisionLoadError>;
}

/// Errors raised while loading a decision.
#[derive(Debug, Error)]
pub enum DecisionLoadError {
    #[error("Decision file not found: {0}")]
    NotFound(String),

    #[error("Failed to read decision file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported decision file format: {0}")]
    UnsupportedFormat(String),

    #[error("Decision file exceeds {max} bytes")]
    TooLarge { max: u64 },

    #[error("Failed to parse decision file: {0}")]
    Parse(String),

    #[error("Decision file is invalid: {0}")]
    Invalid(#[from] DomainError),
}

impl From<DecisionLoadError> for DomainError {
    fn from(err: DecisionLoadError) -> Self {
        match err {
            DecisionLoadError::Invalid(inner) => inner,
            other => DomainError::new(ErrorCode::DecisionLoadFailed, other.to_string()),
        }
    }
}

/// A named item in a decision document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// "`a` is `value` times as important (or preferable) as `b`", by item name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentJudgment {
    pub a: String,
    pub b: String,
    pub value: f64,
}

/// The goal section of a decision document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentGoal {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Serialized form of a decision.
///
/// Items are referred to by name, matched case-insensitively.
///
/// ```yaml
/// goal:
///   title: Pick a vendor
/// criteria:
///   - name: Cost
///   - name: Quality
/// alternatives:
///   - name: Acme
///   - name: Globex
/// criteria_comparisons:
///   - { a: Cost, b: Quality, value: 3 }
/// alternative_comparisons:
///   Cost:
///     - { a: Acme, b: Globex, value: 5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DecisionId>,
    pub goal: DocumentGoal,
    #[serde(default)]
    pub criteria: Vec<DocumentItem>,
    #[serde(default)]
    pub alternatives: Vec<DocumentItem>,
    #[serde(default)]
    pub criteria_comparisons: Vec<DocumentJudgment>,
    /// Judgments keyed by criterion name.
    #[serde(default)]
    pub alternative_comparisons: BTreeMap<String, Vec<DocumentJudgment>>,
}

impl DecisionDocument {
    /// Replays the document into a model, validating every step.
    pub fn into_model(self, limits: DecisionLimits) -> Result<DecisionModel, DomainError> {
        let mut model = match self.id {
            Some(id) => DecisionModel::with_id(id, limits),
            None => DecisionModel::new(limits),
        };

        model.set_goal(self.goal.title, self.goal.description)?;

        for item in self.criteria {
            model.add_criterion(&item.name, item.description)?;
        }
        for item in self.alternatives {
            model.add_alternative(&item.name, item.description)?;
        }

        for judgment in &self.criteria_comparisons {
            let a = criterion_id(&model, &judgment.a)?;
            let b = criterion_id(&model, &judgment.b)?;
            model.compare_criteria(&a, &b, judgment.value)?;
        }

        for (criterion_name, judgments) in &self.alternative_comparisons {
            let criterion = criterion_id(&model, criterion_name)?;
            for judgment in judgments {
                let a = alternative_id(&model, &judgment.a)?;
                let b = alternative_id(&model, &judgment.b)?;
                model.compare_alternatives(&criterion, &a, &b, judgment.value)?;
            }
        }

        Ok(model)
    }
}

fn criterion_id(model: &DecisionModel, name: &str) -> Result<String, DomainError> {
    let wanted = name.trim().to_lowercase();
    model
        .criteria()
        .iter()
        .find(|c| c.name.to_lowercase() == wanted)
        .map(|c| c.id.clone())
        .ok_or_else(|| {
            DomainError::new(
                ErrorCode::CriterionNotFound,
                format!("Criterion '{}' not found", name),
            )
            .with_detail("criterion", name)
        })
}

fn alternative_id(model: &DecisionModel, name: &str) -> Result<String, DomainError> {
    let wanted = name.trim().to_lowercase();
    model
        .alternatives()
        .iter()
        .find(|a| a.name.to_lowercase() == wanted)
        .map(|a| a.id.clone())
        .ok_or_else(|| {
            DomainError::new(
                ErrorCode::AlternativeNotFound,
                format!("Alternative '{}' not found", name),
            )
            .with_detail("alternative", name)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> DocumentItem {
        DocumentItem {
            name: name.to_string(),
            description: None,
        }
    }

    fn judgment(a: &str, b: &str, value: f64) -> DocumentJudgment {
        DocumentJudgment {
            a: a.to_string(),
            b: b.to_string(),
            value,
        }
    }

    fn sample_document() -> DecisionDocument {
        DecisionDocument {
            id: None,
            goal: DocumentGoal {
                title: "Pick a vendor".to_string(),
                description: String::new(),
            },
            criteria: vec![item("Cost"), item("Quality")],
            alternatives: vec![item("Acme"), item("Globex")],
            criteria_comparisons: vec![judgment("cost", "Quality", 3.0)],
            alternative_comparisons: BTreeMap::from([(
                "Quality".to_string(),
                vec![judgment("Acme", "Globex", 1.0 / 5.0)],
            )]),
        }
    }

    #[test]
    fn into_model_replays_items_and_judgments() {
        let model = sample_document().into_model(DecisionLimits::default()).unwrap();

        assert_eq!(model.goal().title, "Pick a vendor");
        assert_eq!(model.criteria().len(), 2);
        let ids = model.criterion_ids();
        assert_eq!(model.criteria_comparisons().value(ids[0], ids[1]), 3.0);

        let alts = model.alternative_ids();
        let quality = model.alternative_comparisons_for(ids[1]).unwrap();
        assert!((quality.value(alts[1], alts[0]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn into_model_keeps_document_id() {
        let id = DecisionId::new();
        let mut document = sample_document();
        document.id = Some(id);
        let model = document.into_model(DecisionLimits::default()).unwrap();
        assert_eq!(model.id(), id);
    }

    #[test]
    fn into_model_rejects_unknown_names() {
        let mut document = sample_document();
        document.criteria_comparisons.push(judgment("Cost", "Speed", 2.0));

        let err = document.into_model(DecisionLimits::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CriterionNotFound);
    }

    #[test]
    fn into_model_applies_scale_rules() {
        let mut document = sample_document();
        document.criteria_comparisons = vec![judgment("Cost", "Quality", 2.5)];

        let err = document.into_model(DecisionLimits::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn load_error_maps_to_domain_error() {
        let err: DomainError = DecisionLoadError::NotFound("x.yaml".to_string()).into();
        assert_eq!(err.code, ErrorCode::DecisionLoadFailed);

        let inner = DomainError::validation("goal.title", "missing");
        let err: DomainError = DecisionLoadError::Invalid(inner).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}

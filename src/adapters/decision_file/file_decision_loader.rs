//! File Decision Loader Adapter - Implementation of DecisionLoader.
//!
//! Reads decision documents from YAML (`.yaml`, `.yml`) or JSON (`.json`)
//! files and replays them into a validated `DecisionModel`.

use std::fs;
use std::path::Path;

use crate::domain::decision::{DecisionLimits, DecisionModel};
use crate::ports::{DecisionDocument, DecisionLoadError, DecisionLoader};

/// Maximum decision file size allowed (1 MB).
const MAX_FILE_SIZE_BYTES: u64 = 1024 * 1024;

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    fn from_path(path: &Path) -> Result<Self, DecisionLoadError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "json" => Ok(DocumentFormat::Json),
            _ => Err(DecisionLoadError::UnsupportedFormat(format!(
                "'{}' (expected .yaml, .yml or .json)",
                path.display()
            ))),
        }
    }

    fn parse(&self, content: &str) -> Result<DecisionDocument, DecisionLoadError> {
        match self {
            DocumentFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| DecisionLoadError::Parse(e.to_string()))
            }
            DocumentFormat::Json => {
                serde_json::from_str(content).map_err(|e| DecisionLoadError::Parse(e.to_string()))
            }
        }
    }
}

/// Loads decisions from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileDecisionLoader {
    limits: DecisionLimits,
}

impl FileDecisionLoader {
    /// Creates a loader that applies `limits` to every loaded decision.
    pub fn new(limits: DecisionLimits) -> Self {
        Self { limits }
    }
}

impl DecisionLoader for FileDecisionLoader {
    fn load(&self, path: &Path) -> Result<DecisionModel, DecisionLoadError> {
        let format = DocumentFormat::from_path(path)?;

        if !path.exists() {
            return Err(DecisionLoadError::NotFound(path.display().to_string()));
        }

        let metadata = fs::metadata(path)?;
        if metadata.len() > MAX_FILE_SIZE_BYTES {
            return Err(DecisionLoadError::TooLarge {
                max: MAX_FILE_SIZE_BYTES,
            });
        }

        let content = fs::read_to_string(path)?;
        let document = format.parse(&content)?;

        tracing::debug!(
            path = %path.display(),
            criteria = document.criteria.len(),
            alternatives = document.alternatives.len(),
            "Parsed decision document"
        );

        Ok(document.into_model(self.limits)?)
    }
}

//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the zayavka pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ZayavkaConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Training store configuration.
    pub store: StoreConfig,
}

/// Field extraction configuration.
///
/// The optional extractors exist because earlier deployments disagreed on
/// whether the construction year and insurance lines belong in the record;
/// both stay on by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Extract the construction year field.
    pub extract_year: bool,

    /// Extract insurance lines.
    pub extract_insurance: bool,

    /// Minimum token similarity for the fuzzy lender fallback (0.0 - 1.0).
    pub fuzzy_threshold: f64,

    /// Amounts below this are treated as noise (a stray percentage or
    /// year), not a loan.
    pub min_loan: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            extract_year: true,
            extract_insurance: true,
            fuzzy_threshold: 0.8,
            min_loan: 1000,
        }
    }
}

/// Training store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the append-only training log. Empty means the embedding
    /// application picks its own default location.
    pub path: PathBuf,
}

impl ZayavkaConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

//! Persisted training observations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::ExtractedRecord;

/// One persisted (input text, extraction result) observation.
///
/// Examples are append-only: never mutated or deleted once stored. The
/// field names match the `training_data` records the previous server
/// version wrote, so existing logs stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Original input text, unmodified.
    pub text: String,

    /// The record actually returned to the caller at the time.
    pub parsed: ExtractedRecord,

    /// Creation time.
    pub ts: DateTime<Utc>,
}

impl TrainingExample {
    /// Create an example stamped with the current time.
    pub fn new(text: impl Into<String>, parsed: ExtractedRecord) -> Self {
        Self {
            text: text.into(),
            parsed,
            ts: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_example_roundtrip() {
        let example = TrainingExample::new(
            "сбер 2 000 000",
            ExtractedRecord {
                bank: "SBER".to_string(),
                loan: Some(2_000_000),
                ..Default::default()
            },
        );

        let json = serde_json::to_string(&example).unwrap();
        let back: TrainingExample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, example);
    }

    #[test]
    fn test_example_keeps_raw_text() {
        let example = TrainingExample::new("Альфа\u{a0}Банк", ExtractedRecord::default());
        assert_eq!(example.text, "Альфа\u{a0}Банк");
    }
}

//! Heuristic request parser: composes the field extractors and the
//! self-learning lender lookup into one extraction run.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::error::ExtractionError;
use crate::models::{ExtractedRecord, ExtractionConfig, PropertyType, TrainingExample};
use crate::normalize::normalize;
use crate::store::TrainingStore;

use super::rules::{
    extract_birth_date, extract_construction_year, extract_gender, extract_insurance,
    extract_loan, extract_material, extract_property_type, extract_rate, infer_house_material,
    resolve_lender,
};
use super::Result;

/// Trait for request parsing.
pub trait RequestParser {
    /// Parse a structured record out of free-form request text.
    fn parse(&self, text: &str) -> Result<ExtractedRecord>;
}

/// Heuristic parser over normalized text, dictionary tables, and the
/// training store.
///
/// Extraction never fails for non-empty input: unparseable fields come
/// back absent, and a broken store degrades to dictionary-only lender
/// lookup. The one refusal is empty or whitespace-only input.
pub struct HeuristicRequestParser {
    store: Arc<dyn TrainingStore>,
    config: ExtractionConfig,
}

impl HeuristicRequestParser {
    /// Create a parser with default extraction settings.
    pub fn new(store: Arc<dyn TrainingStore>) -> Self {
        Self {
            store,
            config: ExtractionConfig::default(),
        }
    }

    /// Replace the whole extraction configuration.
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the fuzzy lender-match threshold.
    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.config.fuzzy_threshold = threshold;
        self
    }

    /// Enable or disable construction-year extraction.
    pub fn with_year_extraction(mut self, enabled: bool) -> Self {
        self.config.extract_year = enabled;
        self
    }

    /// Enable or disable insurance-line extraction.
    pub fn with_insurance_extraction(mut self, enabled: bool) -> Self {
        self.config.extract_insurance = enabled;
        self
    }

    /// Parse and also report elapsed wall time in milliseconds.
    pub fn parse_timed(&self, text: &str) -> Result<(ExtractedRecord, u64)> {
        let start = Instant::now();
        let record = self.parse(text)?;
        Ok((record, start.elapsed().as_millis() as u64))
    }
}

impl RequestParser for HeuristicRequestParser {
    fn parse(&self, text: &str) -> Result<ExtractedRecord> {
        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        debug!("parsing request from {} characters of text", text.len());
        let normalized = normalize(text);

        // Learned lender codes take precedence over the static dictionary;
        // an unreadable store only costs us that head start.
        let learned = match self.store.known_lenders() {
            Ok(codes) => codes,
            Err(e) => {
                warn!("training store unavailable, using static dictionary only: {e}");
                Vec::new()
            }
        };

        let bank = resolve_lender(&normalized, &learned, self.config.fuzzy_threshold);
        let loan = extract_loan(&normalized, self.config.min_loan);
        let rate = extract_rate(&normalized);
        let gender = extract_gender(&normalized);
        let birth = extract_birth_date(&normalized);
        let prop_type = extract_property_type(&normalized);

        let mut material = extract_material(&normalized);
        if material.is_none() && prop_type == Some(PropertyType::House) {
            material = infer_house_material(&normalized);
        }

        let year = if self.config.extract_year {
            extract_construction_year(&normalized)
        } else {
            None
        };
        let insurance = if self.config.extract_insurance {
            extract_insurance(&normalized)
        } else {
            Vec::new()
        };

        let record = ExtractedRecord {
            bank,
            loan,
            rate,
            gender,
            birth,
            prop_type,
            material,
            year,
            insurance,
        };

        // Every parse feeds the store, even an all-empty record: future
        // lender lookups read past extractions back.
        if let Err(e) = self
            .store
            .append(TrainingExample::new(text, record.clone()))
        {
            warn!("failed to persist training example: {e}");
        }

        debug!(
            "extracted bank={:?} loan={:?} rate={:?}",
            record.bank, record.loan, record.rate
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::models::{Gender, InsuranceLine, Material};
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn parser_with_store() -> (HeuristicRequestParser, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (HeuristicRequestParser::new(store.clone()), store)
    }

    #[test]
    fn test_empty_input_rejected_without_append() {
        let (parser, store) = parser_with_store();

        assert!(matches!(parser.parse(""), Err(ExtractionError::EmptyInput)));
        assert!(matches!(
            parser.parse("   \n\t"),
            Err(ExtractionError::EmptyInput)
        ));
        assert_eq!(store.len().unwrap(), 0);
    }

    #[test]
    fn test_every_parse_appends_exactly_one_example() {
        let (parser, store) = parser_with_store();

        parser.parse("сбер 2 000 000").unwrap();
        parser.parse("сбер 2 000 000").unwrap();
        // An all-empty extraction still appends.
        parser.parse("ничего полезного").unwrap();

        assert_eq!(store.len().unwrap(), 3);
        let examples = store.load_all().unwrap();
        assert!(examples[2].parsed.is_empty());
        assert_eq!(examples[2].text, "ничего полезного");
    }

    #[test]
    fn test_learned_lender_precedes_dictionary() {
        let (parser, store) = parser_with_store();

        // Seed the store as if an older request resolved a lender the
        // static dictionary does not know.
        store
            .append(TrainingExample::new(
                "ипотека росбанк",
                ExtractedRecord {
                    bank: "росбанк".to_string(),
                    ..Default::default()
                },
            ))
            .unwrap();

        let record = parser.parse("росбанк даёт лучше условия чем сбер").unwrap();
        assert_eq!(record.bank, "росбанк");
    }

    #[test]
    fn test_store_failure_still_returns_record() {
        struct BrokenStore;

        impl TrainingStore for BrokenStore {
            fn append(&self, _example: TrainingExample) -> std::result::Result<(), StoreError> {
                Err(StoreError::Io(std::io::Error::other("disk gone")))
            }

            fn load_all(&self) -> std::result::Result<Vec<TrainingExample>, StoreError> {
                Err(StoreError::Io(std::io::Error::other("disk gone")))
            }
        }

        let parser = HeuristicRequestParser::new(Arc::new(BrokenStore));
        let record = parser.parse("сбербанк, 3 588 000, 6%").unwrap();

        assert_eq!(record.bank, "SBER");
        assert_eq!(record.loan, Some(3_588_000));
        assert_eq!(record.rate, Some(6.0));
    }

    #[test]
    fn test_full_message_scenario() {
        let (parser, _) = parser_with_store();

        let record = parser
            .parse("Альфа-Банк, кредит 3 588 000, мужчина, 02.02.1989, квартира, кирпич, 6%")
            .unwrap();

        assert_eq!(record.bank, "ALFA");
        assert_eq!(record.loan, Some(3_588_000));
        assert_eq!(record.gender, Some(Gender::Male));
        assert_eq!(record.birth, "02.02.1989");
        assert_eq!(record.prop_type, Some(PropertyType::Apartment));
        assert_eq!(record.material, Some(Material::Stone));
        assert_eq!(record.rate, Some(6.0));
    }

    #[test]
    fn test_house_material_secondary_pass() {
        let (parser, _) = parser_with_store();

        let record = parser.parse("дом из бруса").unwrap();
        assert_eq!(record.prop_type, Some(PropertyType::House));
        assert_eq!(record.material, Some(Material::Wood));
    }

    #[test]
    fn test_insurance_lines_are_a_set() {
        let (parser, _) = parser_with_store();

        let record = parser.parse("страхование жизни и титул").unwrap();
        assert_eq!(
            record.insurance,
            vec![InsuranceLine::Life, InsuranceLine::Title]
        );
    }

    #[test]
    fn test_disabled_extractors() {
        let store = Arc::new(MemoryStore::new());
        let parser = HeuristicRequestParser::new(store)
            .with_year_extraction(false)
            .with_insurance_extraction(false);

        let record = parser.parse("дом 2005 года, страхование жизни").unwrap();
        assert_eq!(record.year, None);
        assert!(record.insurance.is_empty());
    }

    #[test]
    fn test_fuzzy_typo_resolves_then_learns() {
        let (parser, store) = parser_with_store();

        let record = parser.parse("ипотека сбирбанк, 2 500 000").unwrap();
        assert_eq!(record.bank, "SBER");

        // The resolved code is now part of the learned set.
        assert_eq!(store.known_lenders().unwrap(), vec!["sber"]);
    }

    #[test]
    fn test_parse_timed_reports_elapsed() {
        let (parser, _) = parser_with_store();
        let (record, _elapsed_ms) = parser.parse_timed("сбер 2 000 000").unwrap();
        assert_eq!(record.bank, "SBER");
    }
}

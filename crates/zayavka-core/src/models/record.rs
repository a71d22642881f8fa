//! Extracted request record and its closed field domains.
//!
//! Serde field names follow the JSON shape the calculator frontend already
//! consumes (`bank`, `loan`, `propType`, ...).

use serde::{Deserialize, Serialize};

/// The structured result of one extraction run.
///
/// Every field is independently optional: any non-empty input text produces
/// a structurally valid record, possibly with nothing populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// Canonical lender code, empty when unresolved.
    #[serde(default)]
    pub bank: String,

    /// Loan amount in rubles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan: Option<u64>,

    /// Interest rate, percent, in (0, 30].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,

    /// Applicant gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    /// Birth date as the literal matched substring (e.g. "02.02.1989").
    #[serde(default)]
    pub birth: String,

    /// Property type.
    #[serde(rename = "propType", skip_serializing_if = "Option::is_none")]
    pub prop_type: Option<PropertyType>,

    /// Construction material.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<Material>,

    /// Construction year, in [1900, current year].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Insurance lines requested, in keyword-table order, no duplicates.
    #[serde(default)]
    pub insurance: Vec<InsuranceLine>,
}

impl ExtractedRecord {
    /// Check whether no field was populated at all.
    pub fn is_empty(&self) -> bool {
        self.bank.is_empty()
            && self.loan.is_none()
            && self.rate.is_none()
            && self.gender.is_none()
            && self.birth.is_empty()
            && self.prop_type.is_none()
            && self.material.is_none()
            && self.year.is_none()
            && self.insurance.is_empty()
    }
}

/// Applicant gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Insured property type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    /// Flat or apartment unit (квартира, апартаменты).
    Apartment,
    /// Detached house, dacha, or cottage.
    House,
    /// Townhouse.
    Townhouse,
}

/// Construction material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    /// Brick, concrete, reinforced concrete (кирпич, бетон, жб).
    Stone,
    /// Timber, log, beam (дерево, бревно, брус).
    Wood,
    /// Foam or aerated block (пеноблок).
    Block,
}

/// Insurance line taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceLine {
    Life,
    Property,
    Title,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_record_serializes_sparse() {
        let record = ExtractedRecord::default();
        assert!(record.is_empty());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "bank": "", "birth": "", "insurance": [] })
        );
    }

    #[test]
    fn test_record_json_field_names() {
        let record = ExtractedRecord {
            bank: "ALFA".to_string(),
            loan: Some(3_588_000),
            rate: Some(6.0),
            gender: Some(Gender::Male),
            birth: "02.02.1989".to_string(),
            prop_type: Some(PropertyType::Apartment),
            material: Some(Material::Stone),
            year: Some(2015),
            insurance: vec![InsuranceLine::Life, InsuranceLine::Property],
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["propType"], "apartment");
        assert_eq!(json["material"], "stone");
        assert_eq!(json["gender"], "male");
        assert_eq!(json["insurance"], serde_json::json!(["life", "property"]));
    }

    #[test]
    fn test_record_roundtrip() {
        let record = ExtractedRecord {
            bank: "SBER".to_string(),
            loan: Some(2_000_000),
            prop_type: Some(PropertyType::House),
            material: Some(Material::Wood),
            ..Default::default()
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: ExtractedRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}

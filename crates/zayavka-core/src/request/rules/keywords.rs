//! Keyword-membership extractors: gender, property type, material,
//! insurance lines.

use crate::models::{Gender, InsuranceLine, Material, PropertyType};

use super::tables::{
    GENDER_KEYWORDS, HOUSE_STONE_HINTS, HOUSE_WOOD_HINTS, INSURANCE_KEYWORDS, MATERIAL_KEYWORDS,
    PROPERTY_KEYWORDS,
};

/// Extract the applicant gender; first keyword hit in table order wins.
pub fn extract_gender(text: &str) -> Option<Gender> {
    for (gender, keywords) in GENDER_KEYWORDS {
        if keywords.iter().any(|k| text.contains(k)) {
            return Some(*gender);
        }
    }
    None
}

/// Extract the property type; first keyword hit in table order wins.
pub fn extract_property_type(text: &str) -> Option<PropertyType> {
    PROPERTY_KEYWORDS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, prop)| *prop)
}

/// Extract the construction material from the primary keyword table.
pub fn extract_material(text: &str) -> Option<Material> {
    MATERIAL_KEYWORDS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, material)| *material)
}

/// Secondary material pass for houses.
///
/// When the property resolved to a house and the primary table missed,
/// broader wood and stone/concrete hints assign a material anyway. Recall
/// over precision, for this combination only.
pub fn infer_house_material(text: &str) -> Option<Material> {
    if HOUSE_WOOD_HINTS.iter().any(|k| text.contains(k)) {
        return Some(Material::Wood);
    }
    if HOUSE_STONE_HINTS.iter().any(|k| text.contains(k)) {
        return Some(Material::Stone);
    }
    None
}

/// Extract every insurance line with at least one keyword hit, in table
/// order. Lines are independent of each other.
pub fn extract_insurance(text: &str) -> Vec<InsuranceLine> {
    INSURANCE_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(line, _)| *line)
        .collect()
}

//! Static dictionary tables: lender aliases, keyword sets, canonical maps.
//!
//! Table order is significant everywhere: extractors take the first hit in
//! declaration order.

use crate::models::{Gender, InsuranceLine, Material, PropertyType};

/// Known lender aliases as business users type them.
pub const LENDER_ALIASES: &[&str] = &[
    "альфабанк",
    "альфа",
    "сбербанк",
    "сбер",
    "втб",
    "убрир",
    "юникредит",
    "тинькофф",
    "ренессанс",
    "газпром",
    "дом рф",
    "домрф",
    "абсолют",
];

/// Map a lender alias to its canonical code. Aliases without an entry pass
/// through uppercased.
pub fn canonical_lender(alias: &str) -> String {
    let code = match alias {
        "альфабанк" | "альфа" => "ALFA",
        "сбербанк" | "сбер" => "SBER",
        "втб" => "VTB",
        "убрир" => "UBRIR",
        "юникредит" => "UNICREDIT",
        "тинькофф" => "TINKOFF",
        "ренессанс" => "RENESSANS",
        "газпром" => "GAZPROM",
        "дом рф" | "домрф" => "DOMRF",
        "абсолют" => "ABSOLUT",
        other => return other.to_uppercase(),
    };
    code.to_string()
}

/// Property-type keywords mapped to canonical values.
pub const PROPERTY_KEYWORDS: &[(&str, PropertyType)] = &[
    ("квартира", PropertyType::Apartment),
    ("дом", PropertyType::House),
    ("апарт", PropertyType::Apartment),
    ("дача", PropertyType::House),
    ("коттедж", PropertyType::House),
    ("таунхаус", PropertyType::Townhouse),
];

/// Material keywords mapped to canonical values.
pub const MATERIAL_KEYWORDS: &[(&str, Material)] = &[
    ("кирпич", Material::Stone),
    ("жб", Material::Stone),
    ("бетон", Material::Stone),
    ("дерев", Material::Wood),
    ("бревно", Material::Wood),
    ("пеноблок", Material::Block),
];

/// Gender keyword sets; male is checked first.
pub const GENDER_KEYWORDS: &[(Gender, &[&str])] = &[
    (Gender::Male, &["муж", "мужч", "мужчина"]),
    (Gender::Female, &["жен", "жена", "женщ"]),
];

/// Insurance line keyword sets.
pub const INSURANCE_KEYWORDS: &[(InsuranceLine, &[&str])] = &[
    (InsuranceLine::Life, &["жизн", "страховка жизни", "жизнь"]),
    (
        InsuranceLine::Property,
        &[
            "имуще",
            "имущ",
            "квар",
            "дом",
            "страхование квартиры",
            "страхование имущества",
        ],
    ),
    (InsuranceLine::Title, &["титул", "title"]),
];

/// Wood hints for the house/material secondary pass.
pub const HOUSE_WOOD_HINTS: &[&str] = &["брус", "бревн", "дерев", "сруб"];

/// Stone/concrete hints for the house/material secondary pass.
pub const HOUSE_STONE_HINTS: &[&str] = &["кирпич", "камен", "бетон", "блок"];

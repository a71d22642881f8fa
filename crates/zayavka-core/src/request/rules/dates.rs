//! Birth date and construction year extraction.
//!
//! The two extractors are independent and may both fire on the same text
//! (a birth year and a construction year can coexist); no cross-field
//! disambiguation is attempted.

use chrono::{Datelike, Utc};

use super::patterns::{BIRTH_DATE, CONSTRUCTION_YEAR};

/// Extract the birth date as the literal matched substring, e.g.
/// "02.02.1989". No reformatting, no range validation of day or month.
/// Empty string when nothing matches.
pub fn extract_birth_date(text: &str) -> String {
    BIRTH_DATE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Extract the construction year: first 4-digit run starting 19 or 20,
/// rejected when above the current year.
pub fn extract_construction_year(text: &str) -> Option<i32> {
    let current = Utc::now().year();
    CONSTRUCTION_YEAR
        .find(text)
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .filter(|year| (1900..=current).contains(year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_birth_date_dots() {
        assert_eq!(extract_birth_date("родился 02.02.1989 в москве"), "02.02.1989");
    }

    #[test]
    fn test_birth_date_slash_and_dash() {
        assert_eq!(extract_birth_date("02/02/1989"), "02/02/1989");
        assert_eq!(extract_birth_date("02-02-1989"), "02-02-1989");
    }

    #[test]
    fn test_birth_date_absent() {
        assert_eq!(extract_birth_date("дом 2005 года"), "");
    }

    #[test]
    fn test_birth_date_is_literal_substring() {
        // Out-of-range day/month values are not validated.
        assert_eq!(extract_birth_date("40.13.1989"), "40.13.1989");
    }

    #[test]
    fn test_construction_year() {
        assert_eq!(extract_construction_year("дом 2005 года постройки"), Some(2005));
        assert_eq!(extract_construction_year("постройка 1967"), Some(1967));
    }

    #[test]
    fn test_construction_year_future_rejected() {
        assert_eq!(extract_construction_year("год 2099"), None);
    }

    #[test]
    fn test_construction_year_absent() {
        assert_eq!(extract_construction_year("квартира кирпич"), None);
        // Part of a longer digit run does not count.
        assert_eq!(extract_construction_year("3588000"), None);
    }

    #[test]
    fn test_both_fire_independently() {
        let text = "02.02.1989, дом 2005 года";
        assert_eq!(extract_birth_date(text), "02.02.1989");
        // First qualifying 4-digit run wins, which is the birth year here.
        assert_eq!(extract_construction_year(text), Some(1989));
    }
}

//! Lexical normalization for incoming request text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Contiguous runs of Cyrillic letters, ASCII letters, or ASCII digits.
    static ref TOKEN: Regex = Regex::new(r"[а-яёa-z0-9]+").unwrap();
}

/// Normalize raw request text: case-fold and replace non-breaking spaces
/// with ordinary spaces. No stemming, no punctuation stripping - the field
/// extractors apply their own character classes.
///
/// Idempotent: normalizing already-normalized text is a no-op.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace('\u{00a0}', " ")
}

/// Split normalized text into alphanumeric tokens for fuzzy matching.
///
/// Expects already-normalized (lowercase) input; uppercase characters do
/// not form tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_case_and_nbsp() {
        assert_eq!(normalize("Альфа-Банк\u{a0}3\u{a0}588"), "альфа-банк 3 588");
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize("Сбербанк, 6%\u{a0}ставка");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_tokenize_mixed_script() {
        let tokens = tokenize("альфа-банк, кредит 3588000 ubrir");
        assert_eq!(tokens, vec!["альфа", "банк", "кредит", "3588000", "ubrir"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }
}

//! Lender resolution: learned codes, static dictionary, fuzzy fallback.

use crate::normalize::tokenize;

use super::fuzzy::similarity;
use super::tables::{canonical_lender, LENDER_ALIASES};

/// Resolve a canonical lender code from normalized text, or return an
/// empty string when unresolved (the normal outcome, not an error).
///
/// Strict precedence, first success wins:
/// 1. `learned` codes (from the training store, lower-cased, first-seen
///    order) matched as verbatim substrings and returned as-is - learned
///    codes deliberately bypass the canonicalization map;
/// 2. static aliases in declaration order, canonicalized;
/// 3. fuzzy token match against the aliases above `threshold`,
///    canonicalized.
pub fn resolve_lender(text: &str, learned: &[String], threshold: f64) -> String {
    for code in learned {
        if !code.is_empty() && text.contains(code.as_str()) {
            return code.clone();
        }
    }

    for alias in LENDER_ALIASES {
        if text.contains(alias) {
            return canonical_lender(alias);
        }
    }

    for token in tokenize(text) {
        for alias in LENDER_ALIASES {
            if similarity(token, alias) > threshold {
                return canonical_lender(alias);
            }
        }
    }

    String::new()
}

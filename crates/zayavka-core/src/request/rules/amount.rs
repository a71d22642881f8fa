//! Loan amount extraction.

use super::patterns::{BARE_AMOUNT, GROUPED_AMOUNT, MILLION_AMOUNT};

/// Extract the loan amount in rubles from normalized text.
///
/// Rules are tried in order and the first success wins:
/// 1. grouped digits with a space/NBSP thousands separator ("3 588 000"),
/// 2. a bare run of 4+ digits ("3588000"),
/// 3. a decimal followed by the million marker ("3.5 млн").
///
/// Amounts below `min_loan` are noise (a stray percentage or year caught
/// by the digit rules) and reported as absent.
pub fn extract_loan(text: &str, min_loan: u64) -> Option<u64> {
    let amount = if let Some(m) = GROUPED_AMOUNT.find(text) {
        parse_grouped(m.as_str())
    } else if let Some(m) = BARE_AMOUNT.find(text) {
        m.as_str().parse::<u64>().ok()
    } else if let Some(caps) = MILLION_AMOUNT.captures(text) {
        parse_millions(&caps[1])
    } else {
        None
    };

    amount.filter(|&v| v >= min_loan)
}

/// Strip separators from a grouped-digit amount and parse it.
fn parse_grouped(s: &str) -> Option<u64> {
    let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Parse the numeric part of a "N млн" amount.
fn parse_millions(s: &str) -> Option<u64> {
    let value: f64 = s.replace(',', ".").parse().ok()?;
    Some((value * 1_000_000.0).round() as u64)
}

//! Interest rate extraction.

use super::patterns::{BARE_DECIMAL, PERCENT_RATE};

/// Upper plausibility bound for a mortgage rate, percent.
const MAX_RATE: f64 = 30.0;

/// Extract the interest rate from normalized text.
///
/// A percent-marked number has the highest priority. Failing that, a bare
/// decimal in (1, 30] is accepted on the assumption the percent sign was
/// dropped in transcription. Values outside (0, 30] are never returned.
pub fn extract_rate(text: &str) -> Option<f64> {
    if let Some(caps) = PERCENT_RATE.captures(text) {
        return parse_decimal(&caps[1]).filter(|&v| v > 0.0 && v <= MAX_RATE);
    }

    if let Some(caps) = BARE_DECIMAL.captures(text) {
        return parse_decimal(&caps[1]).filter(|&v| v > 1.0 && v <= MAX_RATE);
    }

    None
}

fn parse_decimal(s: &str) -> Option<f64> {
    s.replace(',', ".").parse().ok()
}

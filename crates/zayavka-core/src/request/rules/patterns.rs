//! Common regex patterns for request field extraction.
//!
//! All patterns expect normalized (lowercase, NBSP-free) text, except the
//! amount patterns which also tolerate a raw non-breaking space between
//! digit groups.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Grouped-digit amounts: "3 588 000", at least one separator.
    pub static ref GROUPED_AMOUNT: Regex = Regex::new(
        r"\d{1,3}(?:[ \u{00a0}]\d{3})+"
    ).unwrap();

    // Bare digit runs of 4+ digits: "3588000".
    pub static ref BARE_AMOUNT: Regex = Regex::new(
        r"\d{4,}"
    ).unwrap();

    // Million-marker amounts: "3.5 млн", "2,4млн".
    pub static ref MILLION_AMOUNT: Regex = Regex::new(
        r"(\d+[.,]?\d*)\s*млн"
    ).unwrap();

    // Percent-marked rate: "6%", "5,5 %".
    pub static ref PERCENT_RATE: Regex = Regex::new(
        r"(\d+(?:[.,]\d+)?)\s*%"
    ).unwrap();

    // Bare decimal used as a rate when the percent sign was dropped.
    pub static ref BARE_DECIMAL: Regex = Regex::new(
        r"\b(\d+[.,]\d+)\b"
    ).unwrap();

    // Birth date: dd.mm.yyyy with '.', '/', or '-' separators.
    pub static ref BIRTH_DATE: Regex = Regex::new(
        r"\d{2}[./-]\d{2}[./-]\d{4}"
    ).unwrap();

    // Construction year: 4-digit run starting 19 or 20.
    pub static ref CONSTRUCTION_YEAR: Regex = Regex::new(
        r"\b(?:19|20)\d{2}\b"
    ).unwrap();
}

//! Format checks for GST registration numbers (GSTIN) and PAN.
//!
//! Both validators fail closed: any wrong length, character class or case
//! yields `false`. Input is never trimmed or upper-cased first.

use regex::Regex;
use std::sync::OnceLock;

use crate::modules::identifiers::models::state_code::is_known_state_code;

/// 2 digits, 5 letters, 4 digits, 1 letter, 1 alphanumeric, `Z`, 1 alphanumeric
static GSTIN_REGEX: OnceLock<Regex> = OnceLock::new();

/// 5 letters, 4 digits, 1 letter
static PAN_REGEX: OnceLock<Regex> = OnceLock::new();

fn gstin_regex() -> &'static Regex {
    GSTIN_REGEX.get_or_init(|| {
        Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][0-9A-Z]Z[0-9A-Z]$")
            .expect("GSTIN pattern is a valid regex")
    })
}

fn pan_regex() -> &'static Regex {
    PAN_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("PAN pattern is a valid regex")
    })
}

/// Validates a 15-character GSTIN, including that its first two digits are a
/// known state code.
pub fn validate_tax_identifier(code: &str) -> bool {
    gstin_regex().is_match(code) && is_known_state_code(&code[..2])
}

/// Validates a 10-character PAN
pub fn validate_business_identifier(code: &str) -> bool {
    pan_regex().is_match(code)
}

/// Two-digit state prefix of an identifier, if it has one.
///
/// Does not validate the rest of the identifier.
pub fn jurisdiction_prefix(code: &str) -> Option<&str> {
    code.get(..2)
        .filter(|prefix| prefix.bytes().all(|b| b.is_ascii_digit()))
}

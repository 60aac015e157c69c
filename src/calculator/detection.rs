//! Operand parsing for the calculator form.
//!
//! Decides whether the raw text of an operand field is a number the
//! calculator should send, using the same grammar as an HTML number input.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Optional minus, digits with optional fraction (or a bare fraction),
    /// optional exponent.
    static ref NUMBER: Regex = Regex::new(
        r"^-?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$"
    ).unwrap();
}

/// Check if the operand text looks like a number.
///
/// Surrounding whitespace is ignored. Spellings that `f64::from_str`
/// would accept but a number field would not (`inf`, `NaN`, `+1`) are
/// rejected.
pub fn looks_like_number(input: &str) -> bool {
    NUMBER.is_match(input.trim())
}

/// Parse operand text into a finite `f64`.
///
/// Returns `None` for empty, non-numeric, or out-of-range input.
pub fn parse_operand(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if !looks_like_number(trimmed) {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

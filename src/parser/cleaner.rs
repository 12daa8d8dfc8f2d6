//! Cost field cleaning.
//!
//! Source files carry costs as plain numbers ("0.0123"), currency strings
//! ("$1,250.00") or placeholders ("N/A", ""). Anything that does not coerce
//! to a finite, non-negative number is rejected so the caller can drop the row.

use crate::utils::config::{COST_UNIT_SUFFIXES, CURRENCY_SYMBOL, THOUSANDS_SEPARATOR};

/// Coerce a raw cost field to USD
///
/// **Public** - used by the loader for every row
///
/// Only surrounding whitespace is ignored. A comma is accepted as a
/// thousands separator in the integer part and nowhere else, so a decimal
/// comma ("0,08") or a split number ("1 2") is rejected rather than misread.
///
/// # Returns
/// `Some(cost)` for a finite value >= 0, `None` otherwise
///
/// # Example
/// ```ignore
/// assert_eq!(clean_cost("$0.08"), Some(0.08));
/// assert_eq!(clean_cost("N/A"), None);
/// ```
pub fn clean_cost(raw: &str) -> Option<f64> {
    let mut text = raw.trim();

    for suffix in COST_UNIT_SUFFIXES {
        if let Some(stripped) = text.strip_suffix(suffix) {
            text = stripped.trim_end();
        }
    }

    if let Some(stripped) = text.strip_prefix(CURRENCY_SYMBOL) {
        text = stripped.trim_start();
    }

    if text.is_empty() {
        return None;
    }

    let value: f64 = remove_thousands_separators(text)?.parse().ok()?;

    if !value.is_finite() || value < 0.0 {
        return None;
    }

    // Normalize -0.0 so it never prints with a sign
    Some(if value == 0.0 { 0.0 } else { value })
}

/// Drop separators from "1,250.00"-style numbers
///
/// `None` when a separator sits anywhere a digit group of three is not
/// expected: in the fraction, at the start, or between groups of other sizes.
fn remove_thousands_separators(text: &str) -> Option<String> {
    if !text.contains(THOUSANDS_SEPARATOR) {
        return Some(text.to_string());
    }

    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text, None),
    };
    if fraction.is_some_and(|f| f.contains(THOUSANDS_SEPARATOR)) {
        return None;
    }

    let digits = integer.trim_start_matches(['-', '+']);
    let sign = &integer[..integer.len() - digits.len()];

    let mut groups = digits.split(THOUSANDS_SEPARATOR);
    let leading = groups.next()?;
    let leading_ok = (1..=3).contains(&leading.len()) && leading.chars().all(|c| c.is_ascii_digit());
    if !leading_ok || !groups.all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit())) {
        return None;
    }

    let mut cleaned = format!("{}{}", sign, digits.replace(THOUSANDS_SEPARATOR, ""));
    if let Some(fraction) = fraction {
        cleaned.push('.');
        cleaned.push_str(fraction);
    }
    Some(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number() {
        assert_eq!(clean_cost("0.0123"), Some(0.0123));
        assert_eq!(clean_cost("  42 "), Some(42.0));
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(clean_cost("$0.08"), Some(0.08));
        assert_eq!(clean_cost("$1,250.50"), Some(1250.5));
        assert_eq!(clean_cost("12.5 USD"), Some(12.5));
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(clean_cost("1,250"), Some(1250.0));
        assert_eq!(clean_cost("$12,345,678.9"), Some(12345678.9));
        assert_eq!(clean_cost("$ 3.5"), Some(3.5));
    }

    #[test]
    fn test_ambiguous_numbers_rejected() {
        // decimal comma
        assert_eq!(clean_cost("0,08"), None);
        assert_eq!(clean_cost("1,25"), None);
        assert_eq!(clean_cost("1.5,000"), None);
        assert_eq!(clean_cost(",500"), None);
        assert_eq!(clean_cost("1,2345"), None);
        // whitespace inside the number
        assert_eq!(clean_cost("1 2"), None);
        assert_eq!(clean_cost("1, 250"), None);
    }

    #[test]
    fn test_placeholders_rejected() {
        assert_eq!(clean_cost("N/A"), None);
        assert_eq!(clean_cost(""), None);
        assert_eq!(clean_cost("$"), None);
        assert_eq!(clean_cost("-"), None);
    }

    #[test]
    fn test_non_finite_and_negative_rejected() {
        assert_eq!(clean_cost("NaN"), None);
        assert_eq!(clean_cost("inf"), None);
        assert_eq!(clean_cost("-3.5"), None);
        assert_eq!(clean_cost("$-0.01"), None);
    }

    #[test]
    fn test_zero_is_kept() {
        assert_eq!(clean_cost("0"), Some(0.0));
        let negative_zero = clean_cost("-0.0").unwrap();
        assert!(negative_zero.is_sign_positive());
    }
}

//! Numeric parsing with an explicit fallback
//!
//! Pure functions for turning user-supplied strings into numbers.
//! [`parse_number`] is strict and reports why a string was rejected;
//! [`parse_or_zero`] is the total variant used by the array transformations,
//! substituting `0` for anything that is not a finite number.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Error type for strict numeric parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNumberError {
    #[error("Empty numeric string")]
    Empty,
    #[error("Not a number: {0:?}")]
    Invalid(String),
    #[error("Number is not finite: {0:?}")]
    NonFinite(String),
}

fn decimal_literal() -> &'static Regex {
    static RE_DECIMAL: OnceLock<Regex> = OnceLock::new();
    RE_DECIMAL.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap()
    })
}

/// Split a `0x`/`0o`/`0b` literal into its radix and digits
fn radix_literal(text: &str) -> Option<(u32, &str)> {
    let (prefix, digits) = text.split_at_checked(2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, digits))
}

/// Parse a string as a finite number
///
/// Surrounding whitespace is ignored. Accepts signed decimal literals with an
/// optional fraction and exponent (`"-2.5"`, `".5"`, `"1e3"`) and unsigned
/// `0x`, `0o` and `0b` integer literals (`"0x10"` is `16`).
///
/// # Returns
/// The parsed value, or a [`ParseNumberError`] describing the rejection
pub fn parse_number(text: &str) -> Result<f64, ParseNumberError> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(ParseNumberError::Empty);
    }

    let value = match radix_literal(trimmed) {
        Some((radix, digits)) => {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return Err(ParseNumberError::Invalid(text.to_string()));
            }
            digits
                .chars()
                .filter_map(|c| c.to_digit(radix))
                .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d))
        }
        None => {
            let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
            if unsigned == "Infinity" {
                return Err(ParseNumberError::NonFinite(text.to_string()));
            }

            if !decimal_literal().is_match(trimmed) {
                return Err(ParseNumberError::Invalid(text.to_string()));
            }

            trimmed
                .parse::<f64>()
                .map_err(|_| ParseNumberError::Invalid(text.to_string()))?
        }
    };

    // Applies to every literal form
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseNumberError::NonFinite(text.to_string()))
    }
}

/// Parse a string as a number, substituting `0` when it is not one
pub fn parse_or_zero(text: &str) -> f64 {
    parse_number(text).unwrap_or_else(|err| {
        log::debug!("substituting 0 for {text:?}: {err}");
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // parse_number tests
    // ============================================================================

    #[test]
    fn test_parse_number_integer() {
        assert_eq!(parse_number("42"), Ok(42.0));
    }

    #[test]
    fn test_parse_number_signed() {
        assert_eq!(parse_number("-7"), Ok(-7.0));
        assert_eq!(parse_number("+7"), Ok(7.0));
    }

    #[test]
    fn test_parse_number_fraction_forms() {
        assert_eq!(parse_number("2.5"), Ok(2.5));
        assert_eq!(parse_number(".5"), Ok(0.5));
        assert_eq!(parse_number("5."), Ok(5.0));
    }

    #[test]
    fn test_parse_number_exponent() {
        assert_eq!(parse_number("1e3"), Ok(1000.0));
        assert_eq!(parse_number("2.5E-1"), Ok(0.25));
    }

    #[test]
    fn test_parse_number_trims_whitespace() {
        assert_eq!(parse_number("  12\n"), Ok(12.0));
    }

    #[test]
    fn test_parse_number_radix_literals() {
        assert_eq!(parse_number("0x10"), Ok(16.0));
        assert_eq!(parse_number("0XfF"), Ok(255.0));
        assert_eq!(parse_number("0o17"), Ok(15.0));
        assert_eq!(parse_number("0b101"), Ok(5.0));
    }

    #[test]
    fn test_parse_number_bad_radix_digits() {
        assert_eq!(
            parse_number("0b102"),
            Err(ParseNumberError::Invalid("0b102".to_string()))
        );
        assert_eq!(
            parse_number("0x"),
            Err(ParseNumberError::Invalid("0x".to_string()))
        );
    }

    #[test]
    fn test_parse_number_radix_overflow() {
        let huge_hex = format!("0x{}", "f".repeat(300));
        assert_eq!(
            parse_number(&huge_hex),
            Err(ParseNumberError::NonFinite(huge_hex.clone()))
        );
        assert_eq!(parse_or_zero(&huge_hex), 0.0);
    }

    #[test]
    fn test_parse_number_signed_radix_rejected() {
        assert!(parse_number("-0x10").is_err());
    }

    #[test]
    fn test_parse_number_empty() {
        assert_eq!(parse_number(""), Err(ParseNumberError::Empty));
        assert_eq!(parse_number("   "), Err(ParseNumberError::Empty));
    }

    #[test]
    fn test_parse_number_garbage() {
        for text in ["x", "12px", "1,000", "1.2.3", "--1", "e5", "."] {
            assert_eq!(
                parse_number(text),
                Err(ParseNumberError::Invalid(text.to_string())),
                "expected {text:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_number_rejects_float_keywords() {
        // Rust's own float syntax is wider than a numeric literal
        for text in ["nan", "NaN", "inf", "infinity"] {
            assert!(parse_number(text).is_err(), "{text:?} should not parse");
        }
    }

    #[test]
    fn test_parse_number_non_finite() {
        assert_eq!(
            parse_number("Infinity"),
            Err(ParseNumberError::NonFinite("Infinity".to_string()))
        );
        assert_eq!(
            parse_number("-Infinity"),
            Err(ParseNumberError::NonFinite("-Infinity".to_string()))
        );
        assert_eq!(
            parse_number("1e999"),
            Err(ParseNumberError::NonFinite("1e999".to_string()))
        );
    }

    #[test]
    fn test_parse_number_error_messages() {
        assert_eq!(ParseNumberError::Empty.to_string(), "Empty numeric string");
        assert_eq!(
            ParseNumberError::Invalid("x".to_string()).to_string(),
            "Not a number: \"x\""
        );
    }

    // ============================================================================
    // parse_or_zero tests
    // ============================================================================

    #[test]
    fn test_parse_or_zero_valid() {
        assert_eq!(parse_or_zero("3"), 3.0);
        assert_eq!(parse_or_zero("-0.25"), -0.25);
    }

    #[test]
    fn test_parse_or_zero_fallback() {
        let _ = env_logger::builder().is_test(true).try_init();

        assert_eq!(parse_or_zero("x"), 0.0);
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("Infinity"), 0.0);
    }
}

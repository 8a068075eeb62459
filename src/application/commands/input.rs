// src/application/commands/input.rs
//
// Raw form input → typed values
//
// Numbers are read from the leading numeric prefix, the way the browser
// form reads them ("1.5 m" is 1.5, "5.0" is 5 pieces). Input with no
// numeric prefix becomes NaN so validation rejects it with the form's own
// message instead of a parse error.

use chrono::NaiveDate;

use crate::domain::DomainError;
use crate::error::AppResult;

/// Required number; blank or garbage is NaN
pub(crate) fn amount(raw: &str) -> f64 {
    decimal_prefix(raw.trim())
        .parse::<f64>()
        .unwrap_or(f64::NAN)
}

/// Optional number; blank is absent
pub(crate) fn optional_amount(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        None
    } else {
        Some(amount(raw))
    }
}

/// Number that defaults to 0 when blank
pub(crate) fn amount_or_zero(raw: &str) -> f64 {
    optional_amount(raw).unwrap_or(0.0)
}

/// Size quantity; blank, negative or garbage counts as 0
pub(crate) fn quantity(raw: &str) -> u32 {
    integer_prefix(raw.trim()).parse::<u32>().unwrap_or(0)
}

/// Longest prefix shaped like `[+-]digits`
fn integer_prefix(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    end += digits_from(bytes, end);
    &raw[..end]
}

/// Longest prefix shaped like `[+-]digits[.digits][e[+-]digits]`
fn decimal_prefix(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let whole = digits_from(bytes, end);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(bytes, end + 1);
        if whole > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }

    if whole == 0 && fraction == 0 {
        return &raw[..0];
    }

    // Exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(bytes, exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    &raw[..end]
}

fn digits_from(bytes: &[u8], start: usize) -> usize {
    bytes
        .iter()
        .skip(start)
        .take_while(|b| b.is_ascii_digit())
        .count()
}

pub(crate) fn optional_date(raw: &str) -> AppResult<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| {
            DomainError::Validation(format!("Purchase date '{}' is not YYYY-MM-DD", raw)).into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount() {
        assert_eq!(amount(" 12.5 "), 12.5);
        assert!(amount("").is_nan());
        assert!(amount("ten").is_nan());
    }

    #[test]
    fn test_amount_reads_leading_number() {
        assert_eq!(amount("1.5m"), 1.5);
        assert_eq!(amount("1.5 m"), 1.5);
        assert_eq!(amount("100INR"), 100.0);
        assert_eq!(amount(".5"), 0.5);
        assert_eq!(amount("5."), 5.0);
        assert_eq!(amount("2e3"), 2000.0);
        assert_eq!(amount("2e"), 2.0);
        assert_eq!(amount("-4"), -4.0);
        assert!(amount(".").is_nan());
        assert!(amount("m1.5").is_nan());
    }

    #[test]
    fn test_optional_amount() {
        assert_eq!(optional_amount("  "), None);
        assert_eq!(optional_amount("1.5"), Some(1.5));
        assert!(optional_amount("x").unwrap().is_nan());
    }

    #[test]
    fn test_amount_or_zero() {
        assert_eq!(amount_or_zero(""), 0.0);
        assert_eq!(amount_or_zero("200"), 200.0);
    }

    #[test]
    fn test_quantity() {
        assert_eq!(quantity("5"), 5);
        assert_eq!(quantity(""), 0);
        assert_eq!(quantity("-3"), 0);
        assert_eq!(quantity("two"), 0);
    }

    #[test]
    fn test_quantity_reads_leading_integer() {
        assert_eq!(quantity("5.0"), 5);
        assert_eq!(quantity("7abc"), 7);
        assert_eq!(quantity(" 3 pcs"), 3);
        assert_eq!(quantity("+2"), 2);
        assert_eq!(quantity("abc7"), 0);
    }

    #[test]
    fn test_optional_date() {
        assert_eq!(optional_date("").unwrap(), None);
        assert_eq!(
            optional_date("2023-12-24").unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 24)
        );
        assert!(optional_date("24/12/2023").is_err());
    }
}

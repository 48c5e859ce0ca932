//! Card scheme detection by prefix.
//!
//! The first digits of a card number identify the network that issued it.
//! Detection is a single ordered `match` on the leading bytes: arms are tried
//! top to bottom and the first one that matches wins.

use crate::CardScheme;

/// Detects the card scheme from the leading digits of `number`.
///
/// Works on any string, including numbers that would fail length validation
/// and the empty string. Never fails: anything unrecognised is
/// [`CardScheme::Unknown`]. The Luhn check plays no part in detection.
///
/// | Priority | Prefix | Scheme |
/// |----------|--------|--------|
/// | 1 | 4 | Visa |
/// | 2 | 51-55 | Mastercard |
/// | 3 | 34, 37 | Amex |
/// | 4 | 6 | Discover |
///
/// # Example
///
/// ```
/// use cardcheck::{detect_scheme, CardScheme};
///
/// assert_eq!(detect_scheme("4532015112830366"), CardScheme::Visa);
/// assert_eq!(detect_scheme("374245455400126"), CardScheme::Amex);
/// assert_eq!(detect_scheme("9999999999999999"), CardScheme::Unknown);
/// ```
#[inline]
pub fn detect_scheme(number: &str) -> CardScheme {
    match number.as_bytes() {
        [b'4', ..] => CardScheme::Visa,
        [b'5', b'1'..=b'5', ..] => CardScheme::Mastercard,
        [b'3', b'4' | b'7', ..] => CardScheme::Amex,
        [b'6', ..] => CardScheme::Discover,
        _ => CardScheme::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visa_detection() {
        assert_eq!(detect_scheme("4532015112830366"), CardScheme::Visa);
        assert_eq!(detect_scheme("4"), CardScheme::Visa);
        // Invalid checksum does not change the scheme
        assert_eq!(detect_scheme("4532015112830367"), CardScheme::Visa);
    }

    #[test]
    fn test_mastercard_detection() {
        assert_eq!(detect_scheme("5425233430109903"), CardScheme::Mastercard);
        assert_eq!(detect_scheme("5599233430109903"), CardScheme::Mastercard);
        for prefix in ["51", "52", "53", "54", "55"] {
            assert_eq!(detect_scheme(prefix), CardScheme::Mastercard, "{prefix}");
        }
        // 50 and 56 fall outside the range
        assert_eq!(detect_scheme("5000000000000000"), CardScheme::Unknown);
        assert_eq!(detect_scheme("5600000000000000"), CardScheme::Unknown);
        assert_eq!(detect_scheme("5"), CardScheme::Unknown);
    }

    #[test]
    fn test_amex_detection() {
        assert_eq!(detect_scheme("340000000000009"), CardScheme::Amex);
        assert_eq!(detect_scheme("374245455400126"), CardScheme::Amex);
        assert_eq!(detect_scheme("3530111333300000"), CardScheme::Unknown);
        assert_eq!(detect_scheme("3"), CardScheme::Unknown);
    }

    #[test]
    fn test_discover_detection() {
        assert_eq!(detect_scheme("6011000000000012"), CardScheme::Discover);
        assert_eq!(detect_scheme("6500000000000000"), CardScheme::Discover);
        assert_eq!(detect_scheme("6"), CardScheme::Discover);
    }

    #[test]
    fn test_unknown_scheme() {
        assert_eq!(detect_scheme("9999999999999999"), CardScheme::Unknown);
        assert_eq!(detect_scheme("0000000000000000"), CardScheme::Unknown);
        assert_eq!(detect_scheme("1234567890123"), CardScheme::Unknown);
    }

    #[test]
    fn test_short_and_empty_input() {
        assert_eq!(detect_scheme(""), CardScheme::Unknown);
        assert_eq!(detect_scheme("41"), CardScheme::Visa);
        assert_eq!(detect_scheme("37"), CardScheme::Amex);
    }
}

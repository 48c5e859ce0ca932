//! Core card types.
//!
//! This module provides the `CardScheme` enum for identifying card networks,
//! the `CardNumber` newtype for holding a structurally valid number securely,
//! and the `ValidationResult` record returned to callers.

use std::fmt;
use zeroize::Zeroize;

use crate::detect::detect_scheme;
use crate::luhn::luhn_check;
use crate::mask::mask_for_logging;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 12;

/// Message reported when the Luhn check passes.
pub const MESSAGE_OK: &str = "OK";

/// Message reported when the Luhn check fails.
pub const MESSAGE_INVALID: &str = "Invalid card number";

/// Card networks recognised by prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardScheme {
    /// Visa - prefix 4
    Visa,
    /// Mastercard - prefix 51-55
    Mastercard,
    /// American Express - prefix 34, 37
    Amex,
    /// Discover - prefix 6
    Discover,
    /// No known prefix matched.
    Unknown,
}

impl CardScheme {
    /// Every scheme, in detection priority order.
    pub const ALL: [CardScheme; 5] = [
        Self::Visa,
        Self::Mastercard,
        Self::Amex,
        Self::Discover,
        Self::Unknown,
    ];

    /// Returns the lowercase wire name used in API responses.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
            Self::Unknown => "unknown",
        }
    }

    /// Returns a human-readable name for the scheme.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating one card number.
///
/// Constructed once per request and handed straight back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationResult {
    /// Whether the number passed the Luhn check.
    #[cfg_attr(feature = "serde", serde(rename = "valid"))]
    pub is_valid: bool,
    /// Scheme detected from the prefix, reported whether or not Luhn passed.
    pub scheme: CardScheme,
    /// `"OK"` or `"Invalid card number"`.
    pub message: &'static str,
}

impl ValidationResult {
    /// Builds a result from the two independent checks.
    pub const fn new(is_valid: bool, scheme: CardScheme) -> Self {
        Self {
            is_valid,
            scheme,
            message: if is_valid { MESSAGE_OK } else { MESSAGE_INVALID },
        }
    }
}

/// A sanitized card number that passed the length and digit checks.
///
/// The digits are zeroed when the value is dropped, and `Debug`/`Display`
/// only ever show the masked form.
#[derive(Clone, PartialEq, Eq)]
pub struct CardNumber {
    digits: String,
}

impl CardNumber {
    /// Wraps already-checked digits. Use [`crate::parse_card_number`] from
    /// outside the crate.
    pub(crate) fn new(digits: String) -> Self {
        Self { digits }
    }

    /// Returns the full digit string.
    ///
    /// # Security
    ///
    /// Never log or display this value. Use [`CardNumber::masked`] instead.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Returns the number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false: a `CardNumber` holds at least 12 digits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns the scheme detected from the prefix.
    #[inline]
    pub fn scheme(&self) -> CardScheme {
        detect_scheme(&self.digits)
    }

    /// Returns true if the Luhn check passes.
    #[inline]
    pub fn passes_luhn(&self) -> bool {
        luhn_check(&self.digits)
    }

    /// Returns the log-safe form, e.g. `****0366`.
    #[inline]
    pub fn masked(&self) -> String {
        mask_for_logging(&self.digits)
    }

    /// Runs scheme detection and the Luhn check and assembles the result.
    pub fn evaluate(&self) -> ValidationResult {
        ValidationResult::new(self.passes_luhn(), self.scheme())
    }
}

impl Drop for CardNumber {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CardNumber").field(&self.masked()).finish()
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_wire_names() {
        let names: Vec<&str> = CardScheme::ALL.iter().map(CardScheme::as_str).collect();
        assert_eq!(names, ["visa", "mastercard", "amex", "discover", "unknown"]);
        assert_eq!(CardScheme::Amex.to_string(), "amex");
        assert_eq!(CardScheme::Amex.name(), "American Express");
    }

    #[test]
    fn test_result_message() {
        let ok = ValidationResult::new(true, CardScheme::Visa);
        assert_eq!(ok.message, "OK");

        let bad = ValidationResult::new(false, CardScheme::Visa);
        assert_eq!(bad.message, "Invalid card number");
        assert_eq!(bad.scheme, CardScheme::Visa);
    }

    #[test]
    fn test_card_number_evaluate() {
        let number = CardNumber::new("4532015112830366".to_string());
        assert_eq!(number.len(), 16);
        assert!(!number.is_empty());
        assert_eq!(
            number.evaluate(),
            ValidationResult::new(true, CardScheme::Visa)
        );

        let number = CardNumber::new("4532015112830367".to_string());
        let result = number.evaluate();
        assert!(!result.is_valid);
        assert_eq!(result.scheme, CardScheme::Visa);
    }

    #[test]
    fn test_debug_and_display_are_masked() {
        let number = CardNumber::new("4532015112830366".to_string());
        let debug = format!("{:?}", number);
        let display = number.to_string();

        assert!(!debug.contains("4532015112830366"));
        assert!(debug.contains("****0366"));
        assert_eq!(display, "****0366");
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardScheme>();
        assert_send_sync::<CardNumber>();
        assert_send_sync::<ValidationResult>();
    }
}

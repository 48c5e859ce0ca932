//! Validation pipeline for card numbers.
//!
//! The pipeline is: sanitize, check the length, check the digits, then run
//! scheme detection and the Luhn check independently. Structural problems are
//! returned as [`ValidationError`]s; a Luhn failure is a successful validation
//! whose result says `is_valid == false`.

use crate::card::{CardNumber, ValidationResult, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use crate::error::ValidationError;
use crate::sanitize::sanitize;

/// Checks that `number` has between 12 and 19 characters inclusive.
///
/// # Example
///
/// ```
/// use cardcheck::{validate_length, ValidationError};
///
/// assert!(validate_length("123456789012").is_ok());
/// assert_eq!(
///     validate_length("12345"),
///     Err(ValidationError::Length { length: 5 })
/// );
/// ```
pub fn validate_length(number: &str) -> Result<(), ValidationError> {
    let length = number.chars().count();
    if (MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&length) {
        Ok(())
    } else {
        Err(ValidationError::Length { length })
    }
}

/// Checks that `number` is non-empty and made only of ASCII digits.
///
/// Redundant after [`sanitize`], but callable on its own for values that
/// never went through sanitization.
///
/// # Example
///
/// ```
/// use cardcheck::{validate_digits, ValidationError};
///
/// assert!(validate_digits("1234567890").is_ok());
/// assert_eq!(validate_digits("1234-5678"), Err(ValidationError::Format));
/// ```
pub fn validate_digits(number: &str) -> Result<(), ValidationError> {
    if !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::Format)
    }
}

/// Sanitizes raw input and applies the structural checks.
///
/// Checks run length first, then digits; the first failure is returned.
///
/// # Example
///
/// ```
/// use cardcheck::parse_card_number;
///
/// let number = parse_card_number("4532-0151-1283-0366").unwrap();
/// assert_eq!(number.len(), 16);
/// assert_eq!(number.masked(), "****0366");
/// ```
pub fn parse_card_number(raw: &str) -> Result<CardNumber, ValidationError> {
    let number = CardNumber::new(sanitize(raw));
    validate_length(number.as_str())?;
    validate_digits(number.as_str())?;
    Ok(number)
}

/// Validates a raw card number string end to end.
///
/// # Returns
///
/// * `Ok(ValidationResult)` - The number is well formed. `is_valid` reports
///   the Luhn outcome; `scheme` is always filled in.
/// * `Err(ValidationError)` - The number is malformed.
///
/// # Example
///
/// ```
/// use cardcheck::{validate_card_number, CardScheme};
///
/// let result = validate_card_number("4532 0151 1283 0366").unwrap();
/// assert!(result.is_valid);
/// assert_eq!(result.scheme, CardScheme::Visa);
/// assert_eq!(result.message, "OK");
///
/// let result = validate_card_number("4532015112830367").unwrap();
/// assert!(!result.is_valid);
/// assert_eq!(result.message, "Invalid card number");
///
/// assert!(validate_card_number("12345").is_err());
/// ```
pub fn validate_card_number(raw: &str) -> Result<ValidationResult, ValidationError> {
    parse_card_number(raw).map(|number| number.evaluate())
}

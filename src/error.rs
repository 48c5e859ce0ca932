//! Error types for card number validation.
//!
//! Every variant is a recoverable, user-facing input problem. A number that is
//! well formed but fails the Luhn check is not an error: it produces a
//! [`ValidationResult`](crate::ValidationResult) with `is_valid == false`.

use std::fmt;

use crate::card::{MAX_CARD_DIGITS, MIN_CARD_DIGITS};

/// Errors that can occur while accepting a card number for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The sanitized number has fewer than 12 or more than 19 digits.
    Length {
        /// The number of digits actually provided.
        length: usize,
    },

    /// The number contains something other than decimal digits.
    Format,

    /// The `number` field was absent from the request.
    MissingField,

    /// The `number` field was explicitly `null`.
    Null,

    /// The `number` field was empty or only whitespace.
    Blank,

    /// The `number` field was present but neither a string nor a number.
    InvalidType,
}

impl ValidationError {
    /// Returns true if the length is the reason the number was rejected.
    pub const fn is_length(&self) -> bool {
        matches!(self, Self::Length { .. })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { .. } => write!(
                f,
                "Number must be between {} and {} digits.",
                MIN_CARD_DIGITS, MAX_CARD_DIGITS
            ),
            Self::Format => write!(f, "Number must contain only digits."),
            Self::MissingField => write!(f, "This field is required."),
            Self::Null => write!(f, "This field may not be null."),
            Self::Blank => write!(f, "This field may not be blank."),
            Self::InvalidType => write!(f, "Not a valid string."),
        }
    }
}

impl std::error::Error for ValidationError {}

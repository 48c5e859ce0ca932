//! # cardcheck
//!
//! Payment card number validation: sanitizing, length and digit checks, the
//! Luhn checksum, scheme detection and log-safe masking, plus an HTTP service
//! exposing them.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardcheck::{validate_card_number, CardScheme};
//!
//! let result = validate_card_number("4532 0151 1283 0366").unwrap();
//! assert!(result.is_valid);
//! assert_eq!(result.scheme, CardScheme::Visa);
//! assert_eq!(result.message, "OK");
//!
//! // A failed checksum is a result, not an error
//! let result = validate_card_number("4532015112830367").unwrap();
//! assert!(!result.is_valid);
//! assert_eq!(result.scheme, CardScheme::Visa);
//!
//! // Malformed input is an error
//! let err = validate_card_number("12345").unwrap_err();
//! assert_eq!(err.to_string(), "Number must be between 12 and 19 digits.");
//! ```
//!
//! ## Pipeline Steps
//!
//! Each step is usable on its own:
//!
//! ```rust
//! use cardcheck::{detect_scheme, luhn_check, mask_for_logging, sanitize};
//! use cardcheck::{validate_digits, validate_length, CardScheme};
//!
//! let number = sanitize("5425-2334-3010-9903");
//! assert_eq!(number, "5425233430109903");
//! assert!(validate_length(&number).is_ok());
//! assert!(validate_digits(&number).is_ok());
//! assert_eq!(detect_scheme(&number), CardScheme::Mastercard);
//! assert!(luhn_check(&number));
//! assert_eq!(mask_for_logging(&number), "****9903");
//! ```
//!
//! ## Supported Schemes
//!
//! | Scheme | Prefix |
//! |--------|--------|
//! | Visa | 4 |
//! | Mastercard | 51-55 |
//! | American Express | 34, 37 |
//! | Discover | 6 |
//!
//! Prefixes are tried in that order; anything else is `unknown`.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `server` | REST API with Swagger UI (default) |
//! | `cli` | Command-line tool |
//!
//! ## Security
//!
//! - `CardNumber` zeroizes its digits when dropped
//! - `Debug` and `Display` of `CardNumber` show the masked number only
//! - The server logs masked numbers only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod detect;
pub mod error;
pub mod luhn;
pub mod mask;
pub mod sanitize;
pub mod validate;

#[cfg(feature = "server")]
pub mod server;

// Re-export main types at crate root
pub use card::{
    CardNumber, CardScheme, ValidationResult, MAX_CARD_DIGITS, MESSAGE_INVALID, MESSAGE_OK,
    MIN_CARD_DIGITS,
};
pub use detect::detect_scheme;
pub use error::ValidationError;
pub use luhn::luhn_check;
pub use mask::mask_for_logging;
pub use sanitize::sanitize;
pub use validate::{parse_card_number, validate_card_number, validate_digits, validate_length};

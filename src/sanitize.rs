//! Input sanitization.
//!
//! Card numbers arrive with arbitrary formatting: spaces, dashes, dots,
//! surrounding whitespace. Sanitizing keeps only the ASCII digits, in their
//! original order.

/// Removes every character that is not an ASCII decimal digit.
///
/// Never fails. The result may be empty.
///
/// # Example
///
/// ```
/// use cardcheck::sanitize;
///
/// assert_eq!(sanitize("4532 0151-1283.0366"), "4532015112830366");
/// assert_eq!(sanitize("no digits"), "");
/// ```
#[inline]
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

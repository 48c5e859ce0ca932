//! Luhn algorithm implementation for card number validation.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used to validate credit card numbers and other identification numbers.
//!
//! # Performance
//!
//! This implementation uses a lookup table for the doubling operation,
//! making it a single O(n) pass with no allocation.

/// Lookup table for doubled digits: double the value, subtract 9 if > 9.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a card number using the Luhn algorithm.
///
/// `number` must be a non-empty string of ASCII digits, as produced by
/// [`crate::sanitize`]. Empty input, or input containing anything other than
/// digits, returns `false`.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// # Example
///
/// ```
/// use cardcheck::luhn::luhn_check;
///
/// assert!(luhn_check("4532015112830366"));
/// assert!(!luhn_check("4532015112830367"));
/// ```
#[inline]
pub fn luhn_check(number: &str) -> bool {
    matches!(luhn_sum(number), Some(sum) if sum % 10 == 0)
}

/// Computes the Luhn sum (not reduced modulo 10) of a digit string.
///
/// Returns `None` for empty input or when a non-digit character is present.
#[inline]
pub fn luhn_sum(number: &str) -> Option<u32> {
    if number.is_empty() {
        return None;
    }

    let mut sum: u32 = 0;

    // Position 0 is the rightmost digit and is not doubled
    for (position, byte) in number.bytes().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return None;
        }
        let digit = (byte - b'0') as usize;

        sum += if position % 2 == 1 {
            DOUBLE_TABLE[digit]
        } else {
            digit as u8
        } as u32;
    }

    Some(sum)
}

/// Computes the check digit for a partial number.
///
/// Given the digits without the check digit, returns the digit that makes the
/// full number pass [`luhn_check`]. Returns `None` if `partial` contains a
/// non-digit character.
///
/// # Example
///
/// ```
/// use cardcheck::luhn::{check_digit, luhn_check};
///
/// assert_eq!(check_digit("453201511283036"), Some(6));
/// assert!(luhn_check("4532015112830366"));
/// ```
pub fn check_digit(partial: &str) -> Option<u8> {
    let mut sum: u32 = 0;

    // Every digit shifts one place left once the check digit is appended,
    // so the rightmost digit here is doubled.
    for (position, byte) in partial.bytes().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return None;
        }
        let digit = (byte - b'0') as usize;

        sum += if position % 2 == 0 {
            DOUBLE_TABLE[digit]
        } else {
            digit as u8
        } as u32;
    }

    Some(((10 - (sum % 10)) % 10) as u8)
}

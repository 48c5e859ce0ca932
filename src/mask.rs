//! Log-safe masking of card numbers.
//!
//! Only the last four digits of a card number may appear in logs. Masked
//! values are for display only and are never fed back into validation.

/// Placeholder that replaces every digit except the last four.
pub const MASK: &str = "****";

/// Masks a card number for logging, keeping only the last 4 characters.
///
/// Inputs shorter than 4 characters are masked completely. The output is
/// always `****` followed by at most 4 characters, regardless of the input
/// length.
///
/// # Example
///
/// ```
/// use cardcheck::mask_for_logging;
///
/// assert_eq!(mask_for_logging("4532015112830366"), "****0366");
/// assert_eq!(mask_for_logging("123"), "****");
/// ```
pub fn mask_for_logging(number: &str) -> String {
    let count = number.chars().count();
    if count < 4 {
        return MASK.to_string();
    }

    let mut masked = String::with_capacity(MASK.len() + 4);
    masked.push_str(MASK);
    masked.extend(number.chars().skip(count - 4));
    masked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_full_number() {
        assert_eq!(mask_for_logging("4532015112830366"), "****0366");
        assert_eq!(mask_for_logging("374245455400126"), "****0126");
    }

    #[test]
    fn test_mask_short_number() {
        assert_eq!(mask_for_logging("123"), "****");
        assert_eq!(mask_for_logging(""), "****");
    }

    #[test]
    fn test_mask_exactly_four() {
        assert_eq!(mask_for_logging("1234"), "****1234");
    }

    #[test]
    fn test_mask_fixed_width() {
        // 19-digit number still yields 8 characters
        let masked = mask_for_logging("4111111111111111113");
        assert_eq!(masked, "****1113");
        assert_eq!(masked.len(), 8);
    }

    #[test]
    fn test_mask_multibyte_input() {
        assert_eq!(mask_for_logging("ab€1234"), "****1234");
        assert_eq!(mask_for_logging("€€€€"), "****€€€€");
    }
}

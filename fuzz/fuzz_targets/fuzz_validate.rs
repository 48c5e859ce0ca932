//! Fuzz target for card validation.
//!
//! Tests that the pipeline never panics on arbitrary input and that the
//! structural checks agree with the sanitized digit count.

#![no_main]

use cardcheck::{
    detect_scheme, mask_for_logging, sanitize, validate_card_number, validate_digits,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = detect_scheme(data);
    let _ = validate_digits(data);
    let _ = mask_for_logging(data);

    let digits = sanitize(data);
    let result = validate_card_number(data);
    assert_eq!(result.is_ok(), (12..=19).contains(&digits.len()));

    if let Ok(result) = result {
        assert_eq!(result.scheme, detect_scheme(&digits));
    }
});

//! # Address and Boundary Hex Tests
//!
//! Both boundary address forms (`"3F"` and `"0x3F"`) must normalize to the
//! same canonical value, and presentation must always be two-digit
//! uppercase hex.

use hx8_core::common::addr::{format_byte, parse_byte, Addr};
use hx8_core::Fault;

#[test]
fn test_addr_bare_and_prefixed_forms_normalize_identically() {
    assert_eq!(Addr::parse("3F").unwrap(), Addr::parse("0x3F").unwrap());
    assert_eq!(Addr::parse("3F").unwrap(), Addr::new(0x3F));
    assert_eq!(Addr::parse("0X3F").unwrap(), Addr::new(0x3F));
}

#[test]
fn test_addr_parse_is_case_insensitive_in_digits() {
    assert_eq!(Addr::parse("ab").unwrap(), Addr::new(0xAB));
    assert_eq!(Addr::parse("AB").unwrap(), Addr::new(0xAB));
}

#[test]
fn test_addr_display_is_two_digit_uppercase() {
    assert_eq!(Addr::new(0x0A).to_string(), "0A");
    assert_eq!(Addr::new(0xBF).to_string(), "BF");
    assert_eq!(Addr::new(0).to_string(), "00");
}

#[test]
fn test_addr_index_matches_raw_value() {
    assert_eq!(Addr::new(0x2A).index(), 0x2A);
}

#[test]
fn test_parse_byte_rejects_malformed_text() {
    for text in ["", "0x", "GG", "100", "0x100", "-1", " 3F"] {
        assert!(
            matches!(parse_byte(text), Err(Fault::BadHex { .. })),
            "{text:?} should be rejected"
        );
    }
}

#[test]
fn test_parse_byte_accepts_single_digit() {
    assert_eq!(parse_byte("7").unwrap(), 0x07);
    assert_eq!(parse_byte("0x7").unwrap(), 0x07);
}

#[test]
fn test_format_byte_round_trips() {
    for value in [0x00, 0x07, 0x3F, 0xBF, 0xFF] {
        assert_eq!(parse_byte(&format_byte(value)).unwrap(), value);
    }
}

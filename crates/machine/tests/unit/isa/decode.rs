//! # Opcode Decoding Tests
//!
//! Every byte in the documented table must decode with the documented
//! operand count; every byte outside it must fail to decode.

use rstest::rstest;

use hx8_core::isa::{sext8, Opcode};

/// Every valid opcode byte with its documented operand count.
const TABLE: [(u8, usize); 29] = [
    (0xA0, 2),
    (0xA1, 2),
    (0xA2, 2),
    (0xA3, 2),
    (0xA4, 1),
    (0xA5, 1),
    (0xA6, 2),
    (0xB0, 2),
    (0xB1, 2),
    (0xB2, 2),
    (0xB3, 2),
    (0xB6, 2),
    (0xC0, 1),
    (0xC1, 1),
    (0xC2, 1),
    (0xC3, 1),
    (0xC4, 1),
    (0xC5, 1),
    (0xC6, 1),
    (0xD0, 2),
    (0xD1, 2),
    (0xD2, 2),
    (0xD3, 2),
    (0xD4, 2),
    (0xDA, 2),
    (0xDB, 2),
    (0xDC, 2),
    (0xE0, 1),
    (0xE1, 1),
];

#[test]
fn test_every_table_byte_decodes_with_documented_arity() {
    for (byte, count) in TABLE {
        let op = Opcode::decode(byte)
            .unwrap_or_else(|| panic!("opcode {byte:#04X} should decode"));
        assert_eq!(op.operand_count(), count, "arity of {byte:#04X}");
    }
}

#[test]
fn test_halt_sentinel_takes_no_operands() {
    let op = Opcode::decode(0x00).unwrap();
    assert_eq!(op, Opcode::Halt);
    assert_eq!(op.operand_count(), 0);
}

#[rstest]
#[case(0xA7)]
#[case(0xB4)]
#[case(0xB5)]
#[case(0xB7)]
#[case(0xC7)]
#[case(0xD5)]
#[case(0xD9)]
#[case(0xDD)]
#[case(0xE2)]
#[case(0x01)]
#[case(0x4F)]
#[case(0xFF)]
fn test_bytes_outside_table_do_not_decode(#[case] byte: u8) {
    assert_eq!(Opcode::decode(byte), None);
}

#[test]
fn test_encode_round_trips_every_table_byte() {
    for byte in 0..=u8::MAX {
        if let Some(op) = Opcode::decode(byte) {
            assert_eq!(op.encode(), byte);
        }
    }
}

#[test]
fn test_exactly_thirty_bytes_decode() {
    let decodable = (0..=u8::MAX).filter(|&b| Opcode::decode(b).is_some()).count();
    // 29 table entries plus the halt sentinel.
    assert_eq!(decodable, TABLE.len() + 1);
}

#[test]
fn test_sext8_twos_complement_boundaries() {
    assert_eq!(sext8(0xFF), -1);
    assert_eq!(sext8(0x80), -128);
    assert_eq!(sext8(0x7F), 127);
    assert_eq!(sext8(0x00), 0);
    assert_eq!(sext8(0xFE), -2);
}

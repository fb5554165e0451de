//! # Register File Tests

use hx8_core::core::{RegId, RegisterFile};
use hx8_core::Fault;

#[test]
fn test_registers_initialize_to_zero() {
    let regs = RegisterFile::new();
    for id in 0..4 {
        assert_eq!(regs.read(RegId::new(id).unwrap()), 0);
    }
}

#[test]
fn test_write_then_read() {
    let mut regs = RegisterFile::new();
    let r2 = RegId::new(2).unwrap();
    regs.write(r2, 0xAB);
    assert_eq!(regs.read(r2), 0xAB);
}

#[test]
fn test_registers_are_independent() {
    let mut regs = RegisterFile::new();
    for id in 0..4u8 {
        regs.write(RegId::new(id).unwrap(), id + 10);
    }
    for id in 0..4u8 {
        assert_eq!(regs.read(RegId::new(id).unwrap()), id + 10);
    }
}

#[test]
fn test_reset_zeroes_all_registers() {
    let mut regs = RegisterFile::new();
    regs.write(RegId::new(1).unwrap(), 0xFF);
    regs.reset();
    assert_eq!(regs.read(RegId::new(1).unwrap()), 0);
}

#[test]
fn test_register_id_validates_range() {
    assert!(RegId::new(3).is_ok());
    assert_eq!(RegId::new(4).unwrap_err(), Fault::BadRegister { id: 4 });
    assert_eq!(RegId::new(0xFF).unwrap_err(), Fault::BadRegister { id: 0xFF });
}

#[test]
fn test_register_id_parses_canonical_strings() {
    for (text, index) in [("00", 0), ("01", 1), ("02", 2), ("03", 3)] {
        assert_eq!(RegId::parse(text).unwrap().index(), index);
    }
    assert!(RegId::parse("04").is_err());
    assert!(RegId::parse("xx").is_err());
}

#[test]
fn test_read_hex_is_boundary_form() {
    let mut regs = RegisterFile::new();
    let r0 = RegId::new(0).unwrap();
    regs.write(r0, 0x07);
    assert_eq!(regs.read_hex(r0), "07");
    regs.write(r0, 0xBF);
    assert_eq!(regs.read_hex(r0), "BF");
}

//! Operand token parsing.
//!
//! An operand token is one of four addressing forms:
//! - a register name (`AL`, `BL`, `CL`, `DL`);
//! - an immediate hex byte (`03` or `0x03`);
//! - a bracketed memory address (`[3F]`);
//! - a bracketed register (`[AL]`), the register-indirect store form.
//!
//! Jump offsets are parsed separately by [`parse_offset`]: signed decimal
//! (`-2`) or a raw hex byte already in two's-complement form (`FE`).

use crate::common::addr::parse_byte;
use crate::isa::instruction::sext8;

/// Register names for ids 0–3, in id order.
const REG_NAMES: [&str; 4] = ["AL", "BL", "CL", "DL"];

/// A parsed operand token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// A register id.
    Reg(u8),
    /// An immediate byte.
    Imm(u8),
    /// A direct memory address.
    Mem(u8),
    /// A register holding an indirect address.
    MemReg(u8),
}

impl Operand {
    /// Parses an operand token. The token must already be uppercased and
    /// trimmed.
    ///
    /// Returns `None` for text matching no addressing form.
    pub fn parse(token: &str) -> Option<Self> {
        if let Some(inner) = token.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            let inner = inner.trim();
            return match register_id(inner) {
                Some(r) => Some(Self::MemReg(r)),
                None => parse_byte(inner).ok().map(Self::Mem),
            };
        }
        if let Some(r) = register_id(token) {
            return Some(Self::Reg(r));
        }
        parse_byte(token).ok().map(Self::Imm)
    }
}

/// Maps a register name to its id.
fn register_id(token: &str) -> Option<u8> {
    REG_NAMES.iter().position(|&n| n == token).map(|i| i as u8)
}

/// Parses a jump offset token into its encoded byte.
///
/// A leading `+` or `-` selects signed decimal in `-128..=127`; anything
/// else is a raw hex byte taken as already two's-complement encoded, so
/// `FE` and `-2` produce the same encoding.
pub fn parse_offset(token: &str) -> Option<u8> {
    if token.starts_with('-') || token.starts_with('+') {
        let value: i16 = token.parse().ok()?;
        let encoded = u8::try_from(value & 0xFF).ok()?;
        if sext8(encoded) == value {
            return Some(encoded);
        }
        return None;
    }
    parse_byte(token).ok()
}

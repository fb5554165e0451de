//! Byte address type.
//!
//! This module defines a strong type for addresses into simulated memory to
//! keep raw operand bytes, register ids, and addresses from mixing. It
//! provides the following:
//! 1. **Type Safety:** Addresses are distinguished from plain bytes at
//!    compile time.
//! 2. **Boundary Normalization:** Hex-string forms `"3F"` and `"0x3F"`
//!    parse to the same canonical integer.
//! 3. **Presentation:** Addresses display as two-digit uppercase hex, the
//!    machine's external byte format.

use std::fmt;

use super::error::Fault;

/// A byte address into simulated memory.
///
/// The address space is a single byte wide; whether the address is actually
/// within the memory's bounds is checked by [`crate::mem::Memory`] on
/// access, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Addr(pub u8);

impl Addr {
    /// Creates a new address from a raw byte.
    #[inline(always)]
    pub fn new(addr: u8) -> Self {
        Self(addr)
    }

    /// Returns the address as a memory index.
    #[inline(always)]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Parses an address from boundary hex text.
    ///
    /// Accepts bare hex digits (`"3F"`) or a `0x`-prefixed form (`"0x3F"`);
    /// both normalize identically.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::BadHex`] if the text is not a valid hex byte.
    pub fn parse(text: &str) -> Result<Self, Fault> {
        parse_byte(text).map(Self)
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

/// Parses a single byte from boundary hex text.
///
/// Accepts `"3F"`, `"0x3F"`, or `"0X3F"`. This is the canonical decoder for
/// every hex-string value crossing the external interface: addresses,
/// register ids, and memory image bytes.
///
/// # Errors
///
/// Returns [`Fault::BadHex`] if the text is empty, contains non-hex digits,
/// or encodes a value above `0xFF`.
pub fn parse_byte(text: &str) -> Result<u8, Fault> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    if digits.is_empty() || digits.len() > 2 {
        return Err(Fault::BadHex {
            text: text.to_string(),
        });
    }

    u8::from_str_radix(digits, 16).map_err(|_| Fault::BadHex {
        text: text.to_string(),
    })
}

/// Formats a byte in the machine's external form: two uppercase hex digits.
pub fn format_byte(value: u8) -> String {
    format!("{value:02X}")
}

//! General-purpose register file.
//!
//! This module implements the HX8's four-register file. It performs the
//! following:
//! 1. **Storage:** Registers hold raw unsigned bytes; hexadecimal text
//!    exists only at the external boundary.
//! 2. **Checked Addressing:** Register ids are validated once, at
//!    [`RegId`] construction, so reads and writes cannot go out of range.
//! 3. **Debugging:** A dump of the complete register state.

use std::fmt;

use crate::common::addr::parse_byte;
use crate::common::constants::REGISTER_COUNT;
use crate::common::error::Fault;

/// A validated register index.
///
/// Canonical external ids are the two-digit strings `"00".."03"`; there is
/// no aliasing or indirect register naming.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegId(u8);

impl RegId {
    /// Validates a raw operand byte as a register id.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::BadRegister`] for ids at or beyond the register
    /// count.
    pub fn new(id: u8) -> Result<Self, Fault> {
        if usize::from(id) < REGISTER_COUNT {
            Ok(Self(id))
        } else {
            Err(Fault::BadRegister { id })
        }
    }

    /// Parses a canonical id string (`"00".."03"`, bare or `0x`-prefixed).
    ///
    /// # Errors
    ///
    /// Returns [`Fault::BadHex`] for malformed text or
    /// [`Fault::BadRegister`] for an out-of-range id.
    pub fn parse(text: &str) -> Result<Self, Fault> {
        Self::new(parse_byte(text)?)
    }

    /// Returns the register index.
    #[inline(always)]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for RegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

/// The general-purpose register file.
///
/// Uninitialized registers read as zero.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    regs: [u8; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a register file with all registers zeroed.
    pub fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
        }
    }

    /// Reads a register value.
    #[inline]
    pub fn read(&self, id: RegId) -> u8 {
        self.regs[id.index()]
    }

    /// Writes a register value.
    #[inline]
    pub fn write(&mut self, id: RegId, value: u8) {
        self.regs[id.index()] = value;
    }

    /// Resets all registers to zero.
    pub fn reset(&mut self) {
        self.regs = [0; REGISTER_COUNT];
    }

    /// Returns a register value in the boundary hex form.
    pub fn read_hex(&self, id: RegId) -> String {
        format!("{:02X}", self.read(id))
    }

    /// Dumps the register file to stdout.
    pub fn dump(&self) {
        for (i, value) in self.regs.iter().enumerate() {
            println!("R{i:02X}={value:02X}");
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

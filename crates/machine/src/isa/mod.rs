//! HX8 instruction set.
//!
//! This module defines the machine's opcode space and decoding logic. It
//! includes:
//! 1. **Opcode Bytes:** Named constants for every encoding, grouped by
//!    family nibble.
//! 2. **Decoding:** The [`Opcode`] tagged enum mapping each byte to its
//!    addressing mode and operand arity.
//! 3. **Disassembly:** Mnemonic rendering for trace output and test
//!    diagnostics.

/// Opcode byte constants.
pub mod opcodes;

/// Opcode decoding and operand arities.
pub mod instruction;

/// Instruction disassembler.
pub mod disasm;

pub use instruction::{AluOp, CmpMode, JumpCond, MovMode, Opcode, sext8};

//! Assembler error types.
//!
//! Errors are line-numbered where a source line is at fault; assembly
//! stops at the first error.

use thiserror::Error;

use crate::common::error::Fault;

/// An assembly or image-parsing error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AsmError {
    /// A mnemonic outside the instruction set.
    #[error("line {line}: unknown mnemonic {mnemonic:?}")]
    UnknownMnemonic {
        /// One-based source line.
        line: usize,
        /// The rejected mnemonic.
        mnemonic: String,
    },

    /// An operand that does not parse, or an addressing mode the mnemonic
    /// does not support.
    #[error("line {line}: bad operand: {text}")]
    BadOperand {
        /// One-based source line.
        line: usize,
        /// The rejected operand text or a mode description.
        text: String,
    },

    /// Wrong number of operands for the mnemonic.
    #[error("line {line}: expected {expected} operand(s), found {found}")]
    OperandCount {
        /// One-based source line.
        line: usize,
        /// Operands the mnemonic takes.
        expected: usize,
        /// Operands found on the line.
        found: usize,
    },

    /// The program never terminates with `END`/`HLT`.
    ///
    /// The loader contract requires an explicit end-of-program marker; a
    /// program without one would run off into uninitialized memory.
    #[error("program has no END marker")]
    MissingEnd,

    /// The assembled image exceeds the simulated memory.
    #[error("program of {len} bytes exceeds memory")]
    TooLarge {
        /// Length of the rejected image.
        len: usize,
    },

    /// A hex-image token that does not encode a byte.
    #[error("invalid image byte {text:?}")]
    BadImageByte {
        /// The rejected token.
        text: String,
    },

    /// A machine fault raised while installing the image.
    #[error("image installation failed: {0}")]
    Image(#[from] Fault),
}

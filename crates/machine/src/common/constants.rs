//! Global machine constants.
//!
//! This module defines the fixed geometry of the simulated HX8 machine.
//! The memory size and stack base are architectural constants, not
//! configuration: programs address memory with a single byte and the
//! address space never grows.

/// Total size of simulated memory in bytes.
pub const MEMORY_SIZE: usize = 0xC0;

/// Initial stack pointer value; the stack grows downward from here.
pub const STACK_BASE: usize = 0xBF;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 4;

/// Width of a machine word in bits.
pub const WORD_BITS: u32 = 8;

/// Flag bit index for the sign (negative) condition.
pub const FLAG_SIGN: usize = 4;

/// Flag bit index for the overflow condition.
pub const FLAG_OVERFLOW: usize = 5;

/// Flag bit index for the zero condition.
pub const FLAG_ZERO: usize = 6;

/// Number of flag bits in the status register.
pub const FLAG_COUNT: usize = 8;

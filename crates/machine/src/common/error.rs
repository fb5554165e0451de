//! Fault definitions.
//!
//! This module defines the fatal fault taxonomy for the simulator. Every
//! fault aborts the current run; there is no retry or partial-failure
//! recovery. The machine's last consistent pre-fault state remains
//! inspectable through the CPU's read-only accessors. It provides:
//! 1. **Decode Faults:** Unknown opcodes and truncated instructions.
//! 2. **Access Faults:** Out-of-range memory addresses and register ids.
//! 3. **Arithmetic Faults:** Results outside the 8-bit range and division
//!    by zero, surfaced fail-fast rather than silently wrapped.
//! 4. **Stack and Control Faults:** Stack bound violations, out-of-range
//!    jump targets, and the optional step ceiling.

use thiserror::Error;

/// A fatal machine fault.
///
/// Each variant carries the values needed to diagnose the fault without
/// access to the machine state that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// The byte at IP is not in the opcode table.
    #[error("unknown opcode {opcode:#04X} at IP={ip:#04X}")]
    Decode {
        /// The unrecognized opcode byte.
        opcode: u8,
        /// IP at the time of the fetch.
        ip: usize,
    },

    /// An instruction's operand bytes run past the end of memory.
    #[error("truncated instruction at IP={ip:#04X}: {expected} operand byte(s) expected")]
    Truncated {
        /// IP of the opcode whose operands are missing.
        ip: usize,
        /// Operand bytes the opcode requires.
        expected: usize,
    },

    /// A memory access outside the simulated address space.
    #[error("address {addr:#04X} out of range (memory is {size:#04X} bytes)")]
    AddressOutOfRange {
        /// The faulting address.
        addr: usize,
        /// Size of the simulated memory.
        size: usize,
    },

    /// An operand named a register id outside `00..=03`.
    #[error("register id {id:#04X} out of range")]
    BadRegister {
        /// The faulting register id byte.
        id: u8,
    },

    /// An arithmetic result left the representable 8-bit range.
    ///
    /// The original machine performed no masking here; the missing
    /// truncation is surfaced as a fault instead of silent wraparound.
    #[error("arithmetic result {value} outside 8-bit range at IP={ip:#04X}")]
    ArithmeticRange {
        /// The out-of-range result.
        value: i32,
        /// IP of the faulting instruction.
        ip: usize,
    },

    /// Integer division or modulo by zero.
    #[error("division by zero at IP={ip:#04X}")]
    DivideByZero {
        /// IP of the faulting instruction.
        ip: usize,
    },

    /// A push would move SP below the bottom of the address space.
    #[error("stack overflow: push at SP={sp:#04X}")]
    StackOverflow {
        /// SP at the time of the push.
        sp: usize,
    },

    /// A pop would move SP above the stack base.
    #[error("stack underflow: pop at SP={sp:#04X}")]
    StackUnderflow {
        /// SP at the time of the pop.
        sp: usize,
    },

    /// A jump computed a negative instruction pointer.
    #[error("jump from IP={ip:#04X} with offset {offset} leaves the address space")]
    JumpOutOfRange {
        /// IP of the jump instruction.
        ip: usize,
        /// The decoded signed offset.
        offset: i16,
    },

    /// The configured step ceiling was reached without a halt.
    #[error("step ceiling of {limit} instructions exceeded")]
    StepLimit {
        /// The configured ceiling.
        limit: u64,
    },

    /// A memory image larger than the simulated memory.
    #[error("program image of {len} bytes exceeds memory ({size} bytes)")]
    ImageTooLarge {
        /// Length of the rejected image.
        len: usize,
        /// Size of the simulated memory.
        size: usize,
    },

    /// Boundary text that does not encode a hex byte.
    #[error("invalid hex byte {text:?}")]
    BadHex {
        /// The rejected text.
        text: String,
    },
}

//! HX8 instruction-set simulator library.
//!
//! This crate implements a simulator for the HX8 fictional 8-bit trainer
//! processor with the following:
//! 1. **Core:** Register file, condition flags, instruction pointer, stack
//!    pointer, and the fetch-decode-execute loop.
//! 2. **Memory:** A fixed 192-byte linear memory with bounds-checked access.
//! 3. **ISA:** Opcode decoding, operand arities, and a disassembler for
//!    trace output.
//! 4. **Assembler:** A line-oriented mnemonic assembler and a hex-image
//!    parser producing memory images.
//! 5. **Simulation:** Configuration, fault reporting, and run statistics.

/// Common types and constants (addresses, faults, machine geometry).
pub mod common;
/// Simulator configuration (defaults, structure, JSON deserialization).
pub mod config;
/// CPU core (registers, flags, execution loop).
pub mod core;
/// Instruction set (opcode bytes, decoding, disassembly).
pub mod isa;
/// Linear byte-addressable memory.
pub mod mem;
/// Run statistics collection and reporting.
pub mod stats;

/// Mnemonic assembler and hex-image parser.
pub mod asm;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; owns registers, flags, memory, and the execution loop.
pub use crate::core::Cpu;
/// Fatal machine faults (decode, address, arithmetic, stack).
pub use crate::common::Fault;
/// Assembler errors (unknown mnemonic, bad operand, missing end marker).
pub use crate::asm::AsmError;
/// Fixed-size simulated memory; construct with `Memory::new`.
pub use crate::mem::Memory;

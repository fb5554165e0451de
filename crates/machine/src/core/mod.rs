//! HX8 CPU core.
//!
//! This module contains the architectural state and the execution engine:
//! 1. **Registers:** The four-entry general-purpose register file.
//! 2. **Flags:** The additive-set condition flag vector.
//! 3. **CPU:** Machine state, program loading, and snapshot accessors.
//! 4. **Execution:** The fetch-decode-execute loop.

/// Condition flag vector.
pub mod flags;

/// General-purpose register file.
pub mod regs;

/// CPU state, loading, and accessors.
pub mod cpu;

/// Fetch-decode-execute loop.
pub mod execution;

pub use cpu::Cpu;
pub use execution::StepOutcome;
pub use flags::Flags;
pub use regs::{RegId, RegisterFile};

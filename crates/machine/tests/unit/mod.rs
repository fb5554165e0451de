//! # Unit Tests
//!
//! Fine-grained tests for the individual components of the simulator,
//! organized to mirror the `src/` module tree.


/// Unit tests for configuration defaults and JSON deserialization.
pub mod config;

/// Unit tests for the CPU core: registers, flags, execution, jumps, and
/// the stack.
pub mod core;

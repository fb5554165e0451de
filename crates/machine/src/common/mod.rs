//! Common utilities and types used throughout the HX8 simulator.
//!
//! This module provides fundamental building blocks shared across all
//! components of the simulator. It includes:
//! 1. **Address Type:** A strong type for byte addresses with boundary
//!    hex-string normalization.
//! 2. **Constants:** Machine geometry (memory size, stack base, register
//!    count) and flag bit indices.
//! 3. **Fault Handling:** The fatal fault taxonomy for decode, address,
//!    arithmetic, and stack errors.

/// Byte address type and boundary hex parsing.
pub mod addr;

/// Machine geometry constants.
pub mod constants;

/// Fault types.
pub mod error;

pub use addr::Addr;
pub use constants::{MEMORY_SIZE, REGISTER_COUNT, STACK_BASE};
pub use error::Fault;

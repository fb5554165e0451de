//! # CPU Core Tests
//!
//! Tests for the architectural state and the execution engine.

/// Register file and register-id validation.
pub mod regs;


/// Fetch-decode-execute: arithmetic, moves, compares, faults.
pub mod execution;

//! Condition flag vector.
//!
//! The HX8 status register is eight boolean condition bits; current opcodes
//! define only sign (index 4), overflow (index 5), and zero (index 6).
//! Flags are additive: compare instructions set bits and nothing clears
//! them until the next run's reset. This no-auto-clear behavior is a
//! deliberate legacy quirk of the machine, preserved as specified.

use std::cmp::Ordering;

use crate::common::constants::{FLAG_COUNT, FLAG_OVERFLOW, FLAG_SIGN, FLAG_ZERO};

/// The condition flag vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flags {
    bits: [bool; FLAG_COUNT],
}

impl Flags {
    /// Creates a flag vector with all bits clear.
    pub fn new() -> Self {
        Self {
            bits: [false; FLAG_COUNT],
        }
    }

    /// Returns the flag bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the eight-bit vector; flag indices are
    /// compile-time constants, never operand data.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Sets the flag bit at `index`.
    #[inline]
    pub fn set(&mut self, index: usize) {
        self.bits[index] = true;
    }

    /// Returns the sign (negative) flag.
    pub fn sign(&self) -> bool {
        self.bits[FLAG_SIGN]
    }

    /// Returns the overflow flag.
    pub fn overflow(&self) -> bool {
        self.bits[FLAG_OVERFLOW]
    }

    /// Returns the zero flag.
    pub fn zero(&self) -> bool {
        self.bits[FLAG_ZERO]
    }

    /// Records a three-way compare result.
    ///
    /// `a < b` sets the sign flag; `a == b` sets the zero flag; `a > b`
    /// sets neither (the machine has no "greater" flag). Previously set
    /// bits are left alone.
    pub fn record_compare(&mut self, a: u8, b: u8) {
        match a.cmp(&b) {
            Ordering::Less => self.set(FLAG_SIGN),
            Ordering::Equal => self.set(FLAG_ZERO),
            Ordering::Greater => {}
        }
    }

    /// Clears all flag bits.
    pub fn reset(&mut self) {
        self.bits = [false; FLAG_COUNT];
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

//! Configuration system for the HX8 simulator.
//!
//! This module defines the configuration structure used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline simulation constants.
//! 2. **Structure:** A flat config for tracing, the step ceiling, and
//!    post-run dumping.
//!
//! Configuration is supplied as JSON (see [`Config::from_json`]) or use
//! `Config::default()` for the CLI. Machine geometry (memory size, stack
//! base) is architectural and deliberately not configurable; see
//! [`crate::common::constants`].

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    /// Step ceiling applied when none is configured.
    ///
    /// The HX8 has no watchdog: a missing halt sentinel or a tight jump
    /// loop never terminates on its own. The ceiling exists for harness
    /// use; raise or disable it for long-running programs.
    pub const MAX_STEPS: u64 = 1_000_000;

    /// Whether executed instructions are traced by default.
    pub const TRACE: bool = false;

    /// Whether memory is dumped after a run by default.
    pub const DUMP_MEMORY: bool = false;
}

/// Simulator configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Emit a trace event for every executed instruction.
    pub trace: bool,
    /// Abort the run with [`crate::Fault::StepLimit`] after this many
    /// instructions. `None` disables the ceiling.
    pub max_steps: Option<u64>,
    /// Dump the memory grid after the run completes.
    pub dump_memory: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace: defaults::TRACE,
            max_steps: Some(defaults::MAX_STEPS),
            dump_memory: defaults::DUMP_MEMORY,
        }
    }
}

impl Config {
    /// Deserializes a configuration from JSON text.
    ///
    /// Missing fields take their defaults, so a partial document such as
    /// `{"trace": true}` is valid.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed documents.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

//! Run statistics collection and reporting.
//!
//! Counters accumulated by the execution loop over a single run; reset
//! together with the rest of the machine state at the start of `run()`.

/// Counters for a single run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Instructions retired, including the halt sentinel.
    pub instructions: u64,
    /// Jumps whose condition held (unconditional jumps always count).
    pub jumps_taken: u64,
    /// Stack pushes executed.
    pub pushes: u64,
    /// Stack pops executed.
    pub pops: u64,
}

impl Stats {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints a one-run summary to stdout.
    pub fn report(&self) {
        println!(
            "instructions: {} | jumps taken: {} | pushes: {} | pops: {}",
            self.instructions, self.jumps_taken, self.pushes, self.pops
        );
    }
}

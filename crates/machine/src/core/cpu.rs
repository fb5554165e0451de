//! CPU state and program loading.
//!
//! This module defines the [`Cpu`] struct owning the full machine state:
//! register file, flags, instruction pointer, stack pointer, memory, run
//! statistics, and configuration. The execution loop itself lives in
//! [`crate::core::execution`].

use crate::asm;
use crate::common::constants::STACK_BASE;
use crate::config::Config;
use crate::core::flags::Flags;
use crate::core::regs::RegisterFile;
use crate::mem::Memory;
use crate::stats::Stats;
use crate::{AsmError, Fault};

/// The HX8 processor.
///
/// A single `Cpu` is the only shared mutable state in the simulator;
/// execution is fully synchronous and strictly sequential.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Condition flags.
    pub flags: Flags,
    pub(crate) ip: usize,
    pub(crate) sp: usize,
    pub(crate) mem: Memory,
    pub(crate) stats: Stats,
    pub(crate) halted: bool,
    pub(crate) config: Config,
}

impl Cpu {
    /// Creates a CPU with zeroed state and empty memory.
    pub fn new(config: Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            flags: Flags::new(),
            ip: 0,
            sp: STACK_BASE,
            mem: Memory::new(),
            stats: Stats::new(),
            halted: false,
            config,
        }
    }

    /// Installs a pre-encoded memory image.
    ///
    /// The byte at offset 0 is the first opcode [`run`](Self::run) will
    /// fetch.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::ImageTooLarge`] if the image exceeds memory.
    pub fn load(&mut self, image: &[u8]) -> Result<(), Fault> {
        self.mem.load_image(image)
    }

    /// Assembles mnemonic source lines and installs the resulting image.
    ///
    /// # Errors
    ///
    /// Returns [`AsmError`] for malformed source; image installation
    /// faults are folded into [`AsmError::Image`].
    pub fn load_source(&mut self, source: &str) -> Result<(), AsmError> {
        let image = asm::assemble(source)?;
        self.mem.load_image(&image).map_err(AsmError::Image)
    }

    /// Resets registers, flags, IP, SP, and run state to initial values.
    ///
    /// Memory is left as loaded.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.flags.reset();
        self.ip = 0;
        self.sp = STACK_BASE;
        self.stats = Stats::new();
        self.halted = false;
    }

    /// Returns the instruction pointer.
    pub fn ip(&self) -> usize {
        self.ip
    }

    /// Returns the stack pointer.
    pub fn sp(&self) -> usize {
        self.sp
    }

    /// Returns true once the halt sentinel has been executed.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Returns a read-only view of memory.
    pub fn memory(&self) -> &Memory {
        &self.mem
    }

    /// Returns the run statistics.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Dumps registers, flags, IP, and SP to stdout.
    pub fn dump(&self) {
        self.regs.dump();
        println!(
            "IP={:02X} SP={:02X} flags: sign={} overflow={} zero={}",
            self.ip,
            self.sp,
            u8::from(self.flags.sign()),
            u8::from(self.flags.overflow()),
            u8::from(self.flags.zero()),
        );
    }
}

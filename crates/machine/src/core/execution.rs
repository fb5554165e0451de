//! Main execution loop.
//!
//! This module implements the fetch-decode-execute cycle of the CPU. It
//! performs the following:
//! 1. **Fetch:** Reads the opcode at IP, decodes it, and reads its operand
//!    bytes.
//! 2. **Dispatch:** Executes by opcode family through a single `match`.
//! 3. **Advance:** Moves IP by `1 + operand_count`, except where a jump
//!    has already repositioned it.
//! 4. **Observability:** Emits a trace event per executed instruction when
//!    tracing is enabled.
//!
//! # Jump-offset convention
//!
//! The offset arithmetic is asymmetric, carried over verbatim from the
//! machine's original definition:
//! - `JMP` repositions IP to `IP + sext8(off) + 1` and skips the flat
//!   advance, so the next fetch lands exactly there.
//! - Taken conditional jumps bias IP by `sext8(off)` and then take the
//!   normal `1 + operand_count` advance, so the next fetch lands at
//!   `IP + sext8(off) + 2`.

use tracing::trace;

use super::Cpu;
use crate::common::addr::Addr;
use crate::common::constants::STACK_BASE;
use crate::common::error::Fault;
use crate::core::regs::RegId;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::{AluOp, CmpMode, JumpCond, MovMode, Opcode, sext8};

/// Result of a single execution step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The instruction executed; the machine is ready for the next fetch.
    Continue,
    /// The halt sentinel was executed.
    Halted,
}

/// A fetched instruction: decoded opcode plus raw operand bytes.
struct Fetched {
    op: Opcode,
    operands: [u8; 2],
    count: usize,
}

impl Fetched {
    fn operands(&self) -> &[u8] {
        &self.operands[..self.count]
    }
}

impl Cpu {
    /// Resets the machine and executes until halt or fault.
    ///
    /// Registers, flags, IP, and SP return to their initial values before
    /// the first fetch; the loaded memory image is kept. On fault the
    /// pre-fault state remains inspectable through the accessors.
    ///
    /// # Errors
    ///
    /// Returns the first [`Fault`] raised by a fetch or an instruction, or
    /// [`Fault::StepLimit`] if the configured ceiling is reached.
    pub fn run(&mut self) -> Result<(), Fault> {
        self.reset();
        loop {
            if let Some(limit) = self.config.max_steps {
                if self.stats.instructions >= limit {
                    return Err(Fault::StepLimit { limit });
                }
            }
            if self.step()? == StepOutcome::Halted {
                return Ok(());
            }
        }
    }

    /// Executes a single fetch-decode-execute cycle.
    ///
    /// Public for test harnesses and single-stepping frontends;
    /// [`Self::run`] is the normal entry point.
    ///
    /// # Errors
    ///
    /// Returns a [`Fault`] on decode, access, arithmetic, or stack errors.
    pub fn step(&mut self) -> Result<StepOutcome, Fault> {
        let fetched = self.fetch()?;

        if self.config.trace {
            trace!(
                target: "hx8",
                ip = format_args!("{:#04X}", self.ip),
                "{}",
                disassemble(fetched.op, fetched.operands())
            );
        }

        self.stats.instructions += 1;
        let args = fetched.operands;

        match fetched.op {
            Opcode::Halt => {
                self.halted = true;
                return Ok(StepOutcome::Halted);
            }
            Opcode::Alu { op, imm } => self.exec_alu(op, imm, args)?,
            Opcode::Mov(mode) => self.exec_mov(mode, args)?,
            Opcode::Cmp(mode) => self.exec_cmp(mode, args)?,
            Opcode::Push => self.exec_push(args[0])?,
            Opcode::Pop => self.exec_pop(args[0])?,
            Opcode::Jump(cond) => {
                // Jumps compute the next IP themselves; see the module
                // docs for the offset convention.
                self.exec_jump(cond, args[0], fetched.count)?;
                return Ok(StepOutcome::Continue);
            }
        }

        self.ip += 1 + fetched.count;
        Ok(StepOutcome::Continue)
    }

    /// Fetches and decodes the instruction at IP.
    fn fetch(&self) -> Result<Fetched, Fault> {
        let opcode_byte = self.read_code(self.ip)?;
        let op = Opcode::decode(opcode_byte).ok_or(Fault::Decode {
            opcode: opcode_byte,
            ip: self.ip,
        })?;

        let count = op.operand_count();
        let mut operands = [0u8; 2];
        for (i, slot) in operands.iter_mut().take(count).enumerate() {
            *slot = self
                .read_code(self.ip + 1 + i)
                .map_err(|_| Fault::Truncated {
                    ip: self.ip,
                    expected: count,
                })?;
        }

        Ok(Fetched { op, operands, count })
    }

    /// Reads a code byte at an absolute offset.
    fn read_code(&self, offset: usize) -> Result<u8, Fault> {
        let addr = u8::try_from(offset).map_err(|_| Fault::AddressOutOfRange {
            addr: offset,
            size: crate::common::constants::MEMORY_SIZE,
        })?;
        self.mem.read(Addr::new(addr))
    }

    /// Executes the `A*`/`B*` arithmetic families.
    ///
    /// The first operand names the destination register, which is also the
    /// left-hand source. Results outside `0..=255` fault rather than wrap.
    fn exec_alu(&mut self, op: AluOp, imm: bool, args: [u8; 2]) -> Result<(), Fault> {
        let dst = RegId::new(args[0])?;
        let a = i32::from(self.regs.read(dst));

        let result = if op.is_unary() {
            match op {
                AluOp::Inc => a + 1,
                AluOp::Dec => a - 1,
                _ => unreachable!("unary arithmetic is INC or DEC"),
            }
        } else {
            let b = if imm {
                i32::from(args[1])
            } else {
                i32::from(self.regs.read(RegId::new(args[1])?))
            };
            match op {
                AluOp::Add => a + b,
                AluOp::Sub => a - b,
                AluOp::Mul => a * b,
                AluOp::Div | AluOp::Mod => {
                    if b == 0 {
                        return Err(Fault::DivideByZero { ip: self.ip });
                    }
                    if op == AluOp::Div { a / b } else { a % b }
                }
                AluOp::Inc | AluOp::Dec => unreachable!("handled as unary"),
            }
        };

        let value = u8::try_from(result).map_err(|_| Fault::ArithmeticRange {
            value: result,
            ip: self.ip,
        })?;
        self.regs.write(dst, value);
        Ok(())
    }

    /// Executes the `D0`–`D4` move variants.
    fn exec_mov(&mut self, mode: MovMode, args: [u8; 2]) -> Result<(), Fault> {
        match mode {
            MovMode::RegImm => {
                let dst = RegId::new(args[0])?;
                self.regs.write(dst, args[1]);
            }
            MovMode::RegMem => {
                let dst = RegId::new(args[0])?;
                let value = self.mem.read(Addr::new(args[1]))?;
                self.regs.write(dst, value);
            }
            MovMode::MemImm => {
                self.mem.write(Addr::new(args[0]), args[1])?;
            }
            MovMode::PtrReg => {
                // Double indirection, preserved from the machine's
                // original definition: the first register holds the
                // address of a cell whose contents address the store.
                let ptr = self.regs.read(RegId::new(args[0])?);
                let addr = self.mem.read(Addr::new(ptr))?;
                let value = self.regs.read(RegId::new(args[1])?);
                self.mem.write(Addr::new(addr), value)?;
            }
            MovMode::RegReg => {
                let dst = RegId::new(args[0])?;
                let value = self.regs.read(RegId::new(args[1])?);
                self.regs.write(dst, value);
            }
        }
        Ok(())
    }

    /// Executes the `DA`–`DC` compare variants.
    fn exec_cmp(&mut self, mode: CmpMode, args: [u8; 2]) -> Result<(), Fault> {
        let a = self.regs.read(RegId::new(args[0])?);
        let b = match mode {
            CmpMode::RegReg => self.regs.read(RegId::new(args[1])?),
            CmpMode::RegImm => args[1],
            CmpMode::RegMem => self.mem.read(Addr::new(args[1]))?,
        };
        self.flags.record_compare(a, b);
        Ok(())
    }

    /// Executes the `C*` jumps; on return IP already points at the next
    /// fetch.
    fn exec_jump(&mut self, cond: JumpCond, offset_byte: u8, count: usize) -> Result<(), Fault> {
        let offset = sext8(offset_byte);
        let taken = match cond {
            JumpCond::Always => true,
            JumpCond::Zero => self.flags.zero(),
            JumpCond::NotZero => !self.flags.zero(),
            JumpCond::Sign => self.flags.sign(),
            JumpCond::NotSign => !self.flags.sign(),
            JumpCond::Overflow => self.flags.overflow(),
            JumpCond::NotOverflow => !self.flags.overflow(),
        };

        let advance = 1 + count as i64;
        let next = match (cond, taken) {
            (JumpCond::Always, _) => self.ip as i64 + i64::from(offset) + 1,
            (_, true) => self.ip as i64 + i64::from(offset) + advance,
            (_, false) => self.ip as i64 + advance,
        };

        if taken {
            self.stats.jumps_taken += 1;
        }

        self.ip = usize::try_from(next).map_err(|_| Fault::JumpOutOfRange {
            ip: self.ip,
            offset,
        })?;
        Ok(())
    }

    /// Executes `PUSH r`: writes the register's value at SP, then moves SP
    /// down.
    fn exec_push(&mut self, reg_byte: u8) -> Result<(), Fault> {
        let value = self.regs.read(RegId::new(reg_byte)?);
        let addr = u8::try_from(self.sp).map_err(|_| Fault::StackOverflow { sp: self.sp })?;
        self.mem.write(Addr::new(addr), value)?;
        self.sp = self
            .sp
            .checked_sub(1)
            .ok_or(Fault::StackOverflow { sp: self.sp })?;
        self.stats.pushes += 1;
        Ok(())
    }

    /// Executes `POP r`: moves SP up, then reads the cell there into the
    /// register.
    ///
    /// The increment happens before the read so that a pop returns the
    /// value the preceding push stored and restores SP exactly.
    fn exec_pop(&mut self, reg_byte: u8) -> Result<(), Fault> {
        let dst = RegId::new(reg_byte)?;
        if self.sp >= STACK_BASE {
            return Err(Fault::StackUnderflow { sp: self.sp });
        }
        self.sp += 1;
        let addr = u8::try_from(self.sp).map_err(|_| Fault::StackUnderflow { sp: self.sp })?;
        let value = self.mem.read(Addr::new(addr))?;
        self.regs.write(dst, value);
        self.stats.pops += 1;
        Ok(())
    }
}

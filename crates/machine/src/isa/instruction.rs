//! Opcode decoding.
//!
//! This module maps each opcode byte to a structured [`Opcode`] value
//! carrying its addressing mode, and derives the operand arity from that
//! structure. Decoding is a pure function over the byte; the table is fixed
//! at compile time and dispatch happens through a single `match` in the
//! execution engine rather than through stored operation references.

use crate::isa::opcodes;

/// Arithmetic operation kind for the `A*` and `B*` families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Integer division.
    Div,
    /// Modulo.
    Mod,
    /// Unary increment.
    Inc,
    /// Unary decrement.
    Dec,
}

impl AluOp {
    /// Returns true for the unary operations (`INC`, `DEC`).
    pub fn is_unary(self) -> bool {
        matches!(self, Self::Inc | Self::Dec)
    }
}

/// Jump condition for the `C*` family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpCond {
    /// Unconditional.
    Always,
    /// Zero flag set.
    Zero,
    /// Zero flag clear.
    NotZero,
    /// Sign flag set.
    Sign,
    /// Sign flag clear.
    NotSign,
    /// Overflow flag set.
    Overflow,
    /// Overflow flag clear.
    NotOverflow,
}

/// Addressing mode for the `D0`–`D4` move variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovMode {
    /// Register from immediate (`D0`).
    RegImm,
    /// Register from memory (`D1`).
    RegMem,
    /// Memory from immediate (`D2`).
    MemImm,
    /// Memory cell addressed through the first register, from the second
    /// register (`D3`).
    PtrReg,
    /// Register from register (`D4`).
    RegReg,
}

/// Operand sources for the `DA`–`DC` compare variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmpMode {
    /// Register against register (`DA`).
    RegReg,
    /// Register against immediate (`DB`).
    RegImm,
    /// Register against memory (`DC`).
    RegMem,
}

/// A decoded HX8 opcode.
///
/// Each variant carries the addressing mode needed to execute it; the
/// operand arity is derived, not stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opcode {
    /// `A*`/`B*` arithmetic. `imm` selects the immediate (`B*`) form for
    /// the second operand.
    Alu {
        /// The operation.
        op: AluOp,
        /// Second operand is an immediate literal rather than a register.
        imm: bool,
    },
    /// `C*` relative jump.
    Jump(JumpCond),
    /// `D0`–`D4` data movement.
    Mov(MovMode),
    /// `DA`–`DC` three-way compare.
    Cmp(CmpMode),
    /// `E0` stack push.
    Push,
    /// `E1` stack pop.
    Pop,
    /// `00` halt sentinel.
    Halt,
}

impl Opcode {
    /// Decodes an opcode byte.
    ///
    /// Returns `None` for bytes outside the table; the execution engine
    /// converts that into a decode fault with IP context.
    pub fn decode(byte: u8) -> Option<Self> {
        let op = match byte {
            opcodes::ADD => Self::Alu { op: AluOp::Add, imm: false },
            opcodes::SUB => Self::Alu { op: AluOp::Sub, imm: false },
            opcodes::MUL => Self::Alu { op: AluOp::Mul, imm: false },
            opcodes::DIV => Self::Alu { op: AluOp::Div, imm: false },
            opcodes::INC => Self::Alu { op: AluOp::Inc, imm: false },
            opcodes::DEC => Self::Alu { op: AluOp::Dec, imm: false },
            opcodes::MOD => Self::Alu { op: AluOp::Mod, imm: false },

            opcodes::ADDI => Self::Alu { op: AluOp::Add, imm: true },
            opcodes::SUBI => Self::Alu { op: AluOp::Sub, imm: true },
            opcodes::MULI => Self::Alu { op: AluOp::Mul, imm: true },
            opcodes::DIVI => Self::Alu { op: AluOp::Div, imm: true },
            opcodes::MODI => Self::Alu { op: AluOp::Mod, imm: true },

            opcodes::JMP => Self::Jump(JumpCond::Always),
            opcodes::JZ => Self::Jump(JumpCond::Zero),
            opcodes::JNZ => Self::Jump(JumpCond::NotZero),
            opcodes::JS => Self::Jump(JumpCond::Sign),
            opcodes::JNS => Self::Jump(JumpCond::NotSign),
            opcodes::JO => Self::Jump(JumpCond::Overflow),
            opcodes::JNO => Self::Jump(JumpCond::NotOverflow),

            opcodes::MOV_RI => Self::Mov(MovMode::RegImm),
            opcodes::MOV_RM => Self::Mov(MovMode::RegMem),
            opcodes::MOV_MI => Self::Mov(MovMode::MemImm),
            opcodes::MOV_PR => Self::Mov(MovMode::PtrReg),
            opcodes::MOV_RR => Self::Mov(MovMode::RegReg),

            opcodes::CMP_RR => Self::Cmp(CmpMode::RegReg),
            opcodes::CMP_RI => Self::Cmp(CmpMode::RegImm),
            opcodes::CMP_RM => Self::Cmp(CmpMode::RegMem),

            opcodes::PUSH => Self::Push,
            opcodes::POP => Self::Pop,
            opcodes::HALT => Self::Halt,
            _ => return None,
        };
        Some(op)
    }

    /// Returns the number of operand bytes following the opcode.
    pub fn operand_count(self) -> usize {
        match self {
            Self::Halt => 0,
            Self::Jump(_) | Self::Push | Self::Pop => 1,
            Self::Alu { op, .. } if op.is_unary() => 1,
            Self::Alu { .. } | Self::Mov(_) | Self::Cmp(_) => 2,
        }
    }

    /// Returns the encoding byte for this opcode.
    pub fn encode(self) -> u8 {
        match self {
            Self::Alu { op: AluOp::Add, imm: false } => opcodes::ADD,
            Self::Alu { op: AluOp::Sub, imm: false } => opcodes::SUB,
            Self::Alu { op: AluOp::Mul, imm: false } => opcodes::MUL,
            Self::Alu { op: AluOp::Div, imm: false } => opcodes::DIV,
            Self::Alu { op: AluOp::Inc, .. } => opcodes::INC,
            Self::Alu { op: AluOp::Dec, .. } => opcodes::DEC,
            Self::Alu { op: AluOp::Mod, imm: false } => opcodes::MOD,
            Self::Alu { op: AluOp::Add, imm: true } => opcodes::ADDI,
            Self::Alu { op: AluOp::Sub, imm: true } => opcodes::SUBI,
            Self::Alu { op: AluOp::Mul, imm: true } => opcodes::MULI,
            Self::Alu { op: AluOp::Div, imm: true } => opcodes::DIVI,
            Self::Alu { op: AluOp::Mod, imm: true } => opcodes::MODI,
            Self::Jump(JumpCond::Always) => opcodes::JMP,
            Self::Jump(JumpCond::Zero) => opcodes::JZ,
            Self::Jump(JumpCond::NotZero) => opcodes::JNZ,
            Self::Jump(JumpCond::Sign) => opcodes::JS,
            Self::Jump(JumpCond::NotSign) => opcodes::JNS,
            Self::Jump(JumpCond::Overflow) => opcodes::JO,
            Self::Jump(JumpCond::NotOverflow) => opcodes::JNO,
            Self::Mov(MovMode::RegImm) => opcodes::MOV_RI,
            Self::Mov(MovMode::RegMem) => opcodes::MOV_RM,
            Self::Mov(MovMode::MemImm) => opcodes::MOV_MI,
            Self::Mov(MovMode::PtrReg) => opcodes::MOV_PR,
            Self::Mov(MovMode::RegReg) => opcodes::MOV_RR,
            Self::Cmp(CmpMode::RegReg) => opcodes::CMP_RR,
            Self::Cmp(CmpMode::RegImm) => opcodes::CMP_RI,
            Self::Cmp(CmpMode::RegMem) => opcodes::CMP_RM,
            Self::Push => opcodes::PUSH,
            Self::Pop => opcodes::POP,
            Self::Halt => opcodes::HALT,
        }
    }
}

/// Decodes an unsigned byte as a signed 8-bit two's-complement value.
///
/// `sext8(0xFF) == -1`, `sext8(0x80) == -128`, `sext8(0x7F) == 127`.
/// Used for relative jump offsets.
#[inline]
pub fn sext8(byte: u8) -> i16 {
    i16::from(byte as i8)
}

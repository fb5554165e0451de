//! Instruction disassembler for the HX8.
//!
//! Converts a decoded opcode and its operand bytes into a human-readable
//! mnemonic string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```ignore
//! use hx8_core::isa::{disasm::disassemble, Opcode};
//!
//! let op = Opcode::decode(0xA0).unwrap();
//! assert_eq!(disassemble(op, &[0x00, 0x01]), "ADD AL, BL");
//! ```

use crate::isa::instruction::{AluOp, CmpMode, JumpCond, MovMode, Opcode, sext8};

/// Register mnemonics for ids 0–3.
const REG_NAMES: [&str; 4] = ["AL", "BL", "CL", "DL"];

/// Returns the mnemonic for a register id byte.
#[inline]
fn reg(id: u8) -> &'static str {
    REG_NAMES.get(usize::from(id)).copied().unwrap_or("R??")
}

/// Returns the mnemonic stem for an arithmetic operation.
fn alu_name(op: AluOp) -> &'static str {
    match op {
        AluOp::Add => "ADD",
        AluOp::Sub => "SUB",
        AluOp::Mul => "MUL",
        AluOp::Div => "DIV",
        AluOp::Mod => "MOD",
        AluOp::Inc => "INC",
        AluOp::Dec => "DEC",
    }
}

/// Returns the mnemonic for a jump condition.
fn jump_name(cond: JumpCond) -> &'static str {
    match cond {
        JumpCond::Always => "JMP",
        JumpCond::Zero => "JZ",
        JumpCond::NotZero => "JNZ",
        JumpCond::Sign => "JS",
        JumpCond::NotSign => "JNS",
        JumpCond::Overflow => "JO",
        JumpCond::NotOverflow => "JNO",
    }
}

/// Disassembles a decoded opcode and its operand bytes.
///
/// `operands` must hold at least `op.operand_count()` bytes; extra bytes
/// are ignored. Missing operands render as `??`.
pub fn disassemble(op: Opcode, operands: &[u8]) -> String {
    let a = operands.first().copied();
    let b = operands.get(1).copied();
    let hex = |v: Option<u8>| v.map_or_else(|| "??".to_string(), |v| format!("{v:02X}"));

    match op {
        Opcode::Alu { op, .. } if op.is_unary() => {
            format!("{} {}", alu_name(op), a.map_or("R??", reg))
        }
        Opcode::Alu { op, imm: false } => format!(
            "{} {}, {}",
            alu_name(op),
            a.map_or("R??", reg),
            b.map_or("R??", reg)
        ),
        Opcode::Alu { op, imm: true } => {
            format!("{} {}, {}", alu_name(op), a.map_or("R??", reg), hex(b))
        }
        Opcode::Jump(cond) => {
            let off = a.map_or_else(|| "??".to_string(), |v| sext8(v).to_string());
            format!("{} {}", jump_name(cond), off)
        }
        Opcode::Mov(MovMode::RegImm) => format!("MOV {}, {}", a.map_or("R??", reg), hex(b)),
        Opcode::Mov(MovMode::RegMem) => format!("MOV {}, [{}]", a.map_or("R??", reg), hex(b)),
        Opcode::Mov(MovMode::MemImm) => format!("MOV [{}], {}", hex(a), hex(b)),
        Opcode::Mov(MovMode::PtrReg) => {
            format!("MOV [{}], {}", a.map_or("R??", reg), b.map_or("R??", reg))
        }
        Opcode::Mov(MovMode::RegReg) => {
            format!("MOV {}, {}", a.map_or("R??", reg), b.map_or("R??", reg))
        }
        Opcode::Cmp(CmpMode::RegReg) => {
            format!("CMP {}, {}", a.map_or("R??", reg), b.map_or("R??", reg))
        }
        Opcode::Cmp(CmpMode::RegImm) => format!("CMP {}, {}", a.map_or("R??", reg), hex(b)),
        Opcode::Cmp(CmpMode::RegMem) => format!("CMP {}, [{}]", a.map_or("R??", reg), hex(b)),
        Opcode::Push => format!("PUSH {}", a.map_or("R??", reg)),
        Opcode::Pop => format!("POP {}", a.map_or("R??", reg)),
        Opcode::Halt => "HLT".to_string(),
    }
}

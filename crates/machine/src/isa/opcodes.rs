//! Opcode byte constants.
//!
//! One named constant per encoding, grouped by family nibble:
//! `A*` register arithmetic, `B*` immediate arithmetic, `C*` control flow,
//! `D*` data movement and comparison, `E*` stack, and the `00` halt
//! sentinel.

/// ADD r,r — register addition.
pub const ADD: u8 = 0xA0;
/// SUB r,r — register subtraction.
pub const SUB: u8 = 0xA1;
/// MUL r,r — register multiplication.
pub const MUL: u8 = 0xA2;
/// DIV r,r — register integer division.
pub const DIV: u8 = 0xA3;
/// INC r — register increment.
pub const INC: u8 = 0xA4;
/// DEC r — register decrement.
pub const DEC: u8 = 0xA5;
/// MOD r,r — register modulo.
pub const MOD: u8 = 0xA6;

/// ADD r,imm — immediate addition.
pub const ADDI: u8 = 0xB0;
/// SUB r,imm — immediate subtraction.
pub const SUBI: u8 = 0xB1;
/// MUL r,imm — immediate multiplication.
pub const MULI: u8 = 0xB2;
/// DIV r,imm — immediate integer division.
pub const DIVI: u8 = 0xB3;
/// MOD r,imm — immediate modulo.
pub const MODI: u8 = 0xB6;

/// JMP off — unconditional relative jump.
pub const JMP: u8 = 0xC0;
/// JZ off — jump if the zero flag is set.
pub const JZ: u8 = 0xC1;
/// JNZ off — jump if the zero flag is clear.
pub const JNZ: u8 = 0xC2;
/// JS off — jump if the sign flag is set.
pub const JS: u8 = 0xC3;
/// JNS off — jump if the sign flag is clear.
pub const JNS: u8 = 0xC4;
/// JO off — jump if the overflow flag is set.
pub const JO: u8 = 0xC5;
/// JNO off — jump if the overflow flag is clear.
pub const JNO: u8 = 0xC6;

/// MOV r,imm — register from immediate.
pub const MOV_RI: u8 = 0xD0;
/// MOV r,[addr] — register from memory.
pub const MOV_RM: u8 = 0xD1;
/// MOV [addr],imm — memory from immediate.
pub const MOV_MI: u8 = 0xD2;
/// MOV [r],r — memory cell addressed through a register, from a register.
pub const MOV_PR: u8 = 0xD3;
/// MOV r,r — register from register.
pub const MOV_RR: u8 = 0xD4;

/// CMP r,r — register-register compare.
pub const CMP_RR: u8 = 0xDA;
/// CMP r,imm — register-immediate compare.
pub const CMP_RI: u8 = 0xDB;
/// CMP r,[addr] — register-memory compare.
pub const CMP_RM: u8 = 0xDC;

/// PUSH r — push a register's value.
pub const PUSH: u8 = 0xE0;
/// POP r — pop into a register.
pub const POP: u8 = 0xE1;

/// HLT — halt sentinel; terminates execution.
pub const HALT: u8 = 0x00;

//! HX8 mnemonic assembler and hex-image parser.
//!
//! This module turns textual program source into the flat byte images the
//! CPU consumes. It provides:
//! 1. **Assembly:** [`assemble`] maps mnemonic lines (`MOV AL,03`,
//!    `ADD AL,BL`, `JNZ -4`, `END`) to opcode and operand bytes, selecting
//!    the encoding from the operand addressing modes.
//! 2. **Image Parsing:** [`parse_image`] reads a pre-encoded image of
//!    two-hex-digit byte tokens.
//! 3. **Errors:** Line-numbered [`AsmError`] values for malformed source.
//!
//! Programs must end with an explicit `END` (or `HLT`) marker, which
//! encodes the halt sentinel. Jump operands are literal relative offsets
//! (signed decimal or a raw hex byte); there is no label resolution.

/// Assembler error types.
pub mod error;

/// Operand token parsing.
pub mod operand;

pub use error::AsmError;
pub use operand::Operand;

use crate::common::addr::parse_byte;
use crate::common::constants::MEMORY_SIZE;
use crate::isa::opcodes;

/// Assembles mnemonic source into a memory image.
///
/// Lines are independent; `;` starts a comment and blank lines are
/// skipped. Mnemonics and register names are case-insensitive. The byte at
/// offset 0 of the returned image is the first opcode to fetch.
///
/// # Errors
///
/// Returns an [`AsmError`] naming the offending line for unknown
/// mnemonics, malformed or mismatched operands, a missing `END` marker, or
/// a program larger than the simulated memory.
pub fn assemble(source: &str) -> Result<Vec<u8>, AsmError> {
    let mut image = Vec::new();
    let mut ended = false;

    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let text = raw.split(';').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let upper = text.to_ascii_uppercase();
        let mut parts = upper.splitn(2, char::is_whitespace);
        let mnemonic = parts.next().unwrap_or("");
        let rest = parts.next().unwrap_or("").trim();

        match mnemonic {
            "END" | "HLT" => {
                expect_operands(line, rest, 0)?;
                image.push(opcodes::HALT);
                ended = true;
            }
            "ADD" | "SUB" | "MUL" | "DIV" | "MOD" => {
                let (a, b) = two_operands(line, rest)?;
                encode_arith(&mut image, line, mnemonic, a, b)?;
            }
            "INC" | "DEC" => {
                let r = one_register(line, rest)?;
                image.push(if mnemonic == "INC" {
                    opcodes::INC
                } else {
                    opcodes::DEC
                });
                image.push(r);
            }
            "JMP" | "JZ" | "JNZ" | "JS" | "JNS" | "JO" | "JNO" => {
                expect_nonempty(line, rest)?;
                let off = operand::parse_offset(rest).ok_or_else(|| AsmError::BadOperand {
                    line,
                    text: rest.to_string(),
                })?;
                image.push(match mnemonic {
                    "JMP" => opcodes::JMP,
                    "JZ" => opcodes::JZ,
                    "JNZ" => opcodes::JNZ,
                    "JS" => opcodes::JS,
                    "JNS" => opcodes::JNS,
                    "JO" => opcodes::JO,
                    _ => opcodes::JNO,
                });
                image.push(off);
            }
            "MOV" => {
                let (a, b) = two_operands(line, rest)?;
                encode_mov(&mut image, line, a, b)?;
            }
            "CMP" => {
                let (a, b) = two_operands(line, rest)?;
                encode_cmp(&mut image, line, a, b)?;
            }
            "PUSH" | "POP" => {
                let r = one_register(line, rest)?;
                image.push(if mnemonic == "PUSH" {
                    opcodes::PUSH
                } else {
                    opcodes::POP
                });
                image.push(r);
            }
            _ => {
                return Err(AsmError::UnknownMnemonic {
                    line,
                    mnemonic: mnemonic.to_string(),
                });
            }
        }

        if image.len() > MEMORY_SIZE {
            return Err(AsmError::TooLarge { len: image.len() });
        }
    }

    if !ended {
        return Err(AsmError::MissingEnd);
    }
    Ok(image)
}

/// Parses a pre-encoded memory image of hex byte tokens.
///
/// Tokens are whitespace-separated two-hex-digit values, bare or
/// `0x`-prefixed; both address forms normalize identically.
///
/// # Errors
///
/// Returns [`AsmError::BadImageByte`] for a malformed token or
/// [`AsmError::TooLarge`] for an oversized image.
pub fn parse_image(text: &str) -> Result<Vec<u8>, AsmError> {
    let mut image = Vec::new();
    for token in text.split_whitespace() {
        let byte = parse_byte(token).map_err(|_| AsmError::BadImageByte {
            text: token.to_string(),
        })?;
        image.push(byte);
    }
    if image.len() > MEMORY_SIZE {
        return Err(AsmError::TooLarge { len: image.len() });
    }
    Ok(image)
}

/// Splits an operand field into exactly two parsed operands.
fn two_operands(line: usize, rest: &str) -> Result<(Operand, Operand), AsmError> {
    let fields: Vec<&str> = rest.split(',').map(str::trim).collect();
    if fields.len() != 2 || fields.iter().any(|f| f.is_empty()) {
        return Err(AsmError::OperandCount {
            line,
            expected: 2,
            found: fields.iter().filter(|f| !f.is_empty()).count(),
        });
    }
    let a = Operand::parse(fields[0]).ok_or_else(|| AsmError::BadOperand {
        line,
        text: fields[0].to_string(),
    })?;
    let b = Operand::parse(fields[1]).ok_or_else(|| AsmError::BadOperand {
        line,
        text: fields[1].to_string(),
    })?;
    Ok((a, b))
}

/// Parses a single register operand field.
fn one_register(line: usize, rest: &str) -> Result<u8, AsmError> {
    expect_nonempty(line, rest)?;
    match Operand::parse(rest) {
        Some(Operand::Reg(r)) => Ok(r),
        _ => Err(AsmError::BadOperand {
            line,
            text: rest.to_string(),
        }),
    }
}

/// Rejects trailing operand text on operand-less mnemonics.
fn expect_operands(line: usize, rest: &str, expected: usize) -> Result<(), AsmError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(AsmError::OperandCount {
            line,
            expected,
            found: rest.split(',').count(),
        })
    }
}

/// Rejects an empty operand field.
fn expect_nonempty(line: usize, rest: &str) -> Result<(), AsmError> {
    if rest.is_empty() {
        Err(AsmError::OperandCount {
            line,
            expected: 1,
            found: 0,
        })
    } else {
        Ok(())
    }
}

/// Encodes the arithmetic families, choosing `A*` or `B*` from the second
/// operand's mode.
fn encode_arith(
    image: &mut Vec<u8>,
    line: usize,
    mnemonic: &str,
    a: Operand,
    b: Operand,
) -> Result<(), AsmError> {
    let Operand::Reg(dst) = a else {
        return Err(AsmError::BadOperand {
            line,
            text: format!("{mnemonic} destination must be a register"),
        });
    };
    let (reg_op, imm_op) = match mnemonic {
        "ADD" => (opcodes::ADD, opcodes::ADDI),
        "SUB" => (opcodes::SUB, opcodes::SUBI),
        "MUL" => (opcodes::MUL, opcodes::MULI),
        "DIV" => (opcodes::DIV, opcodes::DIVI),
        _ => (opcodes::MOD, opcodes::MODI),
    };
    match b {
        Operand::Reg(src) => image.extend_from_slice(&[reg_op, dst, src]),
        Operand::Imm(v) => image.extend_from_slice(&[imm_op, dst, v]),
        _ => {
            return Err(AsmError::BadOperand {
                line,
                text: format!("{mnemonic} source must be a register or immediate"),
            });
        }
    }
    Ok(())
}

/// Encodes the five `MOV` addressing-mode variants.
fn encode_mov(image: &mut Vec<u8>, line: usize, a: Operand, b: Operand) -> Result<(), AsmError> {
    let bytes = match (a, b) {
        (Operand::Reg(r), Operand::Imm(v)) => [opcodes::MOV_RI, r, v],
        (Operand::Reg(r), Operand::Mem(addr)) => [opcodes::MOV_RM, r, addr],
        (Operand::Mem(addr), Operand::Imm(v)) => [opcodes::MOV_MI, addr, v],
        (Operand::MemReg(p), Operand::Reg(r)) => [opcodes::MOV_PR, p, r],
        (Operand::Reg(dst), Operand::Reg(src)) => [opcodes::MOV_RR, dst, src],
        _ => {
            return Err(AsmError::BadOperand {
                line,
                text: "unsupported MOV addressing mode".to_string(),
            });
        }
    };
    image.extend_from_slice(&bytes);
    Ok(())
}

/// Encodes the three `CMP` addressing-mode variants.
fn encode_cmp(image: &mut Vec<u8>, line: usize, a: Operand, b: Operand) -> Result<(), AsmError> {
    let Operand::Reg(r) = a else {
        return Err(AsmError::BadOperand {
            line,
            text: "CMP first operand must be a register".to_string(),
        });
    };
    let bytes = match b {
        Operand::Reg(src) => [opcodes::CMP_RR, r, src],
        Operand::Imm(v) => [opcodes::CMP_RI, r, v],
        Operand::Mem(addr) => [opcodes::CMP_RM, r, addr],
        Operand::MemReg(_) => {
            return Err(AsmError::BadOperand {
                line,
                text: "CMP has no register-indirect form".to_string(),
            });
        }
    };
    image.extend_from_slice(&bytes);
    Ok(())
}

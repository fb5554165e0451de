//! # Execution Engine Tests
//!
//! Arithmetic write-back, the move and compare addressing modes, fault
//! behavior, and the end-to-end assembly scenario.

use pretty_assertions::assert_eq;

use hx8_core::{Config, Cpu, Fault};

use crate::common::{cpu_with_image, reg, run_image, run_image_err, run_source};

#[test]
fn test_add_leaves_sum_in_destination() {
    // MOV AL,03; MOV BL,04; ADD AL,BL; HLT
    let cpu = run_image(&[0xD0, 0x00, 0x03, 0xD0, 0x01, 0x04, 0xA0, 0x00, 0x01, 0x00]);
    assert_eq!(reg(&cpu, 0), 0x07);
    assert_eq!(reg(&cpu, 1), 0x04);
    assert!(cpu.halted());
}

#[test]
fn test_end_to_end_assembly_scenario() {
    let cpu = run_source("MOV AL,03\nMOV BL,04\nADD AL,BL\nEND\n");
    assert_eq!(reg(&cpu, 0), 0x07);
    assert!(cpu.halted());
}

#[test]
fn test_immediate_arithmetic() {
    // MOV AL,0A; SUB AL,03; HLT
    let cpu = run_image(&[0xD0, 0x00, 0x0A, 0xB1, 0x00, 0x03, 0x00]);
    assert_eq!(reg(&cpu, 0), 0x07);
}

#[test]
fn test_mul_div_mod() {
    // MOV AL,07; MUL AL,06; HLT  -> 42
    let cpu = run_image(&[0xD0, 0x00, 0x07, 0xB2, 0x00, 0x06, 0x00]);
    assert_eq!(reg(&cpu, 0), 42);

    // MOV AL,2B; DIV AL,04; HLT  -> 43 / 4 = 10
    let cpu = run_image(&[0xD0, 0x00, 0x2B, 0xB3, 0x00, 0x04, 0x00]);
    assert_eq!(reg(&cpu, 0), 10);

    // MOV AL,2B; MOD AL,04; HLT  -> 43 % 4 = 3
    let cpu = run_image(&[0xD0, 0x00, 0x2B, 0xB6, 0x00, 0x04, 0x00]);
    assert_eq!(reg(&cpu, 0), 3);
}

#[test]
fn test_inc_dec() {
    // MOV AL,09; INC AL; INC AL; DEC AL; HLT
    let cpu = run_image(&[0xD0, 0x00, 0x09, 0xA4, 0x00, 0xA4, 0x00, 0xA5, 0x00, 0x00]);
    assert_eq!(reg(&cpu, 0), 0x0A);
}

#[test]
fn test_uninitialized_registers_read_as_zero() {
    // ADD AL,BL with both untouched; HLT
    let cpu = run_image(&[0xA0, 0x00, 0x01, 0x00]);
    assert_eq!(reg(&cpu, 0), 0);
}

#[test]
fn test_arithmetic_overflow_is_fail_fast() {
    // MOV AL,FF; ADD AL,01 -> 256 is out of range
    let (cpu, fault) = run_image_err(&[0xD0, 0x00, 0xFF, 0xB0, 0x00, 0x01, 0x00]);
    assert_eq!(fault, Fault::ArithmeticRange { value: 256, ip: 3 });
    // Pre-fault state stays inspectable.
    assert_eq!(reg(&cpu, 0), 0xFF);
    assert!(!cpu.halted());
}

#[test]
fn test_arithmetic_underflow_is_fail_fast() {
    // DEC AL with AL == 0
    let (_, fault) = run_image_err(&[0xA5, 0x00, 0x00]);
    assert_eq!(fault, Fault::ArithmeticRange { value: -1, ip: 0 });
}

#[test]
fn test_divide_by_zero_faults() {
    let (_, fault) = run_image_err(&[0xD0, 0x00, 0x08, 0xB3, 0x00, 0x00, 0x00]);
    assert_eq!(fault, Fault::DivideByZero { ip: 3 });

    let (_, fault) = run_image_err(&[0xD0, 0x00, 0x08, 0xB6, 0x00, 0x00, 0x00]);
    assert_eq!(fault, Fault::DivideByZero { ip: 3 });
}

#[test]
fn test_mov_memory_round_trip() {
    // MOV [20],2A; MOV AL,[20]; HLT
    let cpu = run_image(&[0xD2, 0x20, 0x2A, 0xD1, 0x00, 0x20, 0x00]);
    assert_eq!(reg(&cpu, 0), 0x2A);
    assert_eq!(cpu.memory().as_slice()[0x20], 0x2A);
}

#[test]
fn test_mov_register_indirect_store() {
    // AL holds a pointer to a cell whose contents address the store.
    // MOV AL,20; MOV [20],30; MOV BL,55; MOV [AL],BL; HLT
    let cpu = run_image(&[
        0xD0, 0x00, 0x20, 0xD2, 0x20, 0x30, 0xD0, 0x01, 0x55, 0xD3, 0x00, 0x01, 0x00,
    ]);
    assert_eq!(cpu.memory().as_slice()[0x30], 0x55);
}

#[test]
fn test_mov_register_to_register() {
    // MOV BL,11; MOV AL,BL; HLT
    let cpu = run_image(&[0xD0, 0x01, 0x11, 0xD4, 0x00, 0x01, 0x00]);
    assert_eq!(reg(&cpu, 0), 0x11);
}

#[test]
fn test_cmp_variants_set_flags() {
    // MOV AL,03; CMP AL,05 -> sign
    let cpu = run_image(&[0xD0, 0x00, 0x03, 0xDB, 0x00, 0x05, 0x00]);
    assert!(cpu.flags.sign());
    assert!(!cpu.flags.zero());

    // MOV AL,05; MOV BL,05; CMP AL,BL -> zero
    let cpu = run_image(&[0xD0, 0x00, 0x05, 0xD0, 0x01, 0x05, 0xDA, 0x00, 0x01, 0x00]);
    assert!(cpu.flags.zero());

    // MOV [20],01; MOV AL,07; CMP AL,[20] -> greater: neither
    let cpu = run_image(&[0xD2, 0x20, 0x01, 0xD0, 0x00, 0x07, 0xDC, 0x00, 0x20, 0x00]);
    assert!(!cpu.flags.sign());
    assert!(!cpu.flags.zero());
}

#[test]
fn test_unknown_opcode_is_decode_fault() {
    let (_, fault) = run_image_err(&[0x4F]);
    assert_eq!(
        fault,
        Fault::Decode {
            opcode: 0x4F,
            ip: 0
        }
    );
}

#[test]
fn test_bad_register_operand_faults() {
    let (_, fault) = run_image_err(&[0xA0, 0x09, 0x01, 0x00]);
    assert_eq!(fault, Fault::BadRegister { id: 9 });
}

#[test]
fn test_operands_truncated_at_end_of_memory() {
    // Jump twice to land an ADD opcode on the last memory cell.
    let mut image = vec![0u8; 0xC0];
    image[0x00] = 0xC0; // JMP +127 -> next fetch at 0x80
    image[0x01] = 0x7F;
    image[0x80] = 0xC0; // JMP +62 -> next fetch at 0xBF
    image[0x81] = 0x3E;
    image[0xBF] = 0xA0; // ADD needs two operand bytes that do not exist
    let (_, fault) = run_image_err(&image);
    assert_eq!(
        fault,
        Fault::Truncated {
            ip: 0xBF,
            expected: 2
        }
    );
}

#[test]
fn test_step_ceiling_aborts_runaway_program() {
    // JMP -1 re-fetches itself forever: 0 + (-1) + 1 = 0.
    let mut cpu = Cpu::new(Config {
        max_steps: Some(100),
        ..Config::default()
    });
    cpu.load(&[0xC0, 0xFF]).unwrap();
    assert_eq!(cpu.run().unwrap_err(), Fault::StepLimit { limit: 100 });
}

#[test]
fn test_run_resets_state_between_runs() {
    let mut cpu = cpu_with_image(&[0xD0, 0x00, 0x03, 0xB0, 0x00, 0x01, 0x00]);
    cpu.run().unwrap();
    assert_eq!(reg(&cpu, 0), 0x04);
    // Second run starts from zeroed registers, not 0x04.
    cpu.run().unwrap();
    assert_eq!(reg(&cpu, 0), 0x04);
    assert_eq!(cpu.stats().instructions, 3);
}

#[test]
fn test_stats_count_instructions() {
    let cpu = run_image(&[0xD0, 0x00, 0x03, 0xD0, 0x01, 0x04, 0xA0, 0x00, 0x01, 0x00]);
    assert_eq!(cpu.stats().instructions, 4);
    assert_eq!(cpu.stats().jumps_taken, 0);
}

#[test]
fn test_image_too_large_is_rejected() {
    let mut cpu = Cpu::new(Config::default());
    let image = vec![0u8; 0xC1];
    assert_eq!(
        cpu.load(&image).unwrap_err(),
        Fault::ImageTooLarge {
            len: 0xC1,
            size: 0xC0
        }
    );
}

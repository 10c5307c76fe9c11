//! # Execution Loop Tests
//!
//! Cycle-by-cycle checks of reset, the one-cycle branch delay between decode
//! and the branch unit, memory access, and flag handling.

use pretty_assertions::assert_eq;
use simplecpu_core::config::{Config, StoreSource};
use simplecpu_core::core::arch::mode::RunState;
use simplecpu_core::core::signals::{AluOp, ControlSignals};

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

#[test]
fn first_cycle_resets_pc_regardless_of_prior_state() {
    let mut ctx = TestContext::new().load_program(0, &[alu_imm(AluOp::Add, 1, 0, 5)]);
    ctx.cpu_mut().regs.pc = 0x55;
    ctx.cpu_mut().latched = ControlSignals {
        pl: true,
        jb: true,
        aa: 2,
        ..ControlSignals::default()
    };
    ctx.set_reg(2, 0x100);

    ctx.step(1);

    assert_eq!(ctx.pc(), 0);
    assert_eq!(ctx.cpu().regs.ir, alu_imm(AluOp::Add, 1, 0, 5));
    assert_eq!(ctx.get_reg(1), 5);
    assert_eq!(ctx.cpu().state, RunState::Running);
}

#[test]
fn reset_fires_once() {
    let mut ctx = TestContext::new();
    ctx.step(3);
    assert_eq!(ctx.pc(), 2);
}

#[test]
fn jump_takes_effect_next_cycle() {
    let mut ctx = TestContext::new().load_program(0, &[jump(1)]);
    ctx.set_reg(1, 0x0010);

    ctx.step(1);
    assert_eq!(ctx.pc(), 0, "jump executes at 0, pc not yet redirected");

    ctx.step(1);
    assert_eq!(ctx.pc(), 0x0010);
}

#[test]
fn jump_target_is_read_when_branch_unit_runs() {
    // The write to R1 at address 1 is never reached; the target is R1 as of
    // the start of cycle 2.
    let mut ctx = TestContext::new().load_program(0, &[jump(1), alu_imm(AluOp::Add, 1, 0, 7)]);
    ctx.set_reg(1, 0x20);
    ctx.step(2);
    assert_eq!(ctx.pc(), 0x20);
}

#[test]
fn branch_on_zero_taken_advances_by_offset() {
    let mut ctx = TestContext::new().load_program(0, &[alu(AluOp::MovA, 1, 0, 0), branch_zero(1, 3)]);
    ctx.step(3);
    assert_eq!(ctx.pc(), 1 + 3);
}

#[test]
fn branch_on_zero_not_taken_advances_by_one() {
    let mut ctx = TestContext::new().load_program(0, &[branch_zero(1, 3)]);
    ctx.set_reg(1, 9);
    ctx.step(2);
    assert_eq!(ctx.pc(), 1);
}

#[test]
fn branch_condition_uses_flags_from_branch_instruction() {
    // R2 is zero, so the branch's own MovA sets Z even though the previous
    // instruction left Z clear.
    let mut ctx = TestContext::new().load_program(
        0,
        &[alu_imm(AluOp::Add, 1, 0, 1), branch_zero(2, 5)],
    );
    ctx.step(3);
    assert_eq!(ctx.pc(), 6);
}

#[test]
fn negative_branch_goes_backwards() {
    let mut ctx = TestContext::new().load_program(0, &[jump(2)]).load_program(30, &[
        branch_negative(1, -24),
        alu_imm(AluOp::Add, 5, 0, 1),
    ]);
    ctx.set_reg(2, 30);
    ctx.set_reg(1, 0xFFFF);

    ctx.step(3);
    assert_eq!(ctx.pc(), 6);
    assert_eq!(ctx.get_reg(5), 0);
}

#[test]
fn store_writes_field_by_default() {
    let mut ctx = TestContext::new().load_program(0, &[store(1, 5)]);
    ctx.set_reg(1, 0x40);
    ctx.set_reg(5, 0xBEEF);
    ctx.step(1);
    assert_eq!(ctx.dmem(0x40), 5);
    assert_eq!(ctx.get_reg(0), 0, "store does not write a register");
}

#[test]
fn store_writes_register_when_configured() {
    let mut config = Config::default();
    config.execution.store_source = StoreSource::Register;
    let mut ctx = TestContext::with_config(config).load_program(0, &[store(1, 5)]);
    ctx.set_reg(1, 0x40);
    ctx.set_reg(5, 0xBEEF);
    ctx.step(1);
    assert_eq!(ctx.dmem(0x40), 0xBEEF);
}

#[test]
fn load_reads_memory_and_keeps_flags() {
    let mut ctx = TestContext::new()
        .load_program(0, &[alu(AluOp::MovA, 7, 0, 0), load(2, 1)])
        .with_data(&[0, 0, 0, 0x8123]);
    ctx.set_reg(1, 3);

    ctx.step(1);
    let before = ctx.cpu().regs.status;
    assert!(before.zero());

    ctx.step(1);
    assert_eq!(ctx.get_reg(2), 0x8123);
    assert_eq!(ctx.cpu().regs.status, before);
}

#[test]
fn immediate_operand_is_the_raw_field() {
    let mut ctx = TestContext::new().load_program(0, &[alu_imm(AluOp::Add, 3, 1, 6)]);
    ctx.set_reg(1, 10);
    ctx.set_reg(6, 0x1000);
    ctx.step(1);
    assert_eq!(ctx.get_reg(3), 16);
}

#[test]
fn register_operand_reads_register() {
    let mut ctx = TestContext::new().load_program(0, &[alu(AluOp::Add, 3, 1, 6)]);
    ctx.set_reg(1, 10);
    ctx.set_reg(6, 0x1000);
    ctx.step(1);
    assert_eq!(ctx.get_reg(3), 0x100A);
}

#[test]
fn flags_overwritten_every_alu_cycle() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[alu(AluOp::Dec, 1, 0, 0), alu_imm(AluOp::Add, 2, 0, 1)],
    );
    ctx.step(1);
    assert!(ctx.cpu().regs.status.negative());
    ctx.step(1);
    assert!(!ctx.cpu().regs.status.negative());
    assert!(!ctx.cpu().regs.status.zero());
}

#[test]
fn halt_stops_and_ignores_further_ticks() {
    let mut ctx = TestContext::new().load_program(0, &[HALT, alu_imm(AluOp::Add, 1, 0, 1)]);
    ctx.step(1);
    assert!(ctx.cpu().is_halted());
    ctx.step(5);
    assert_eq!(ctx.pc(), 0);
    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.cpu().stats.cycles, 1);
}

#[test]
fn latched_signals_are_last_decode() {
    let word = alu(AluOp::Xor, 1, 2, 3);
    let mut ctx = TestContext::new().load_program(0, &[word]);
    ctx.step(1);
    assert_eq!(ctx.cpu().latched, simplecpu_core::isa::decode::decode(word));
}

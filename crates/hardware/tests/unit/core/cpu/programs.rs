//! # Program Tests
//!
//! Short programs run to halt, checking final state and run statistics.

use pretty_assertions::assert_eq;
use simplecpu_core::core::signals::AluOp;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

/// Counts R1 down from 3 while counting R3 up, looping through a jump.
fn countdown_program() -> Vec<u16> {
    vec![
        alu_imm(AluOp::Add, 1, 0, 3), // 0: R1 <- 3
        alu_imm(AluOp::Add, 2, 0, 2), // 1: R2 <- loop address
        alu(AluOp::Dec, 1, 1, 0),     // 2: loop: R1 <- R1 - 1
        alu(AluOp::Inc, 3, 3, 0),     // 3: R3 <- R3 + 1
        branch_zero(1, 2),            // 4: exit when R1 == 0
        jump(2),                      // 5: back to loop
        HALT,                         // 6
    ]
}

#[test]
fn countdown_loop_final_state() {
    let mut ctx = TestContext::new().load_program(0, &countdown_program());
    let cycles = ctx.run();

    assert_eq!(cycles, 14);
    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.get_reg(2), 2);
    assert_eq!(ctx.get_reg(3), 3);
    assert_eq!(ctx.pc(), 6);
}

#[test]
fn countdown_loop_statistics() {
    let mut ctx = TestContext::new().load_program(0, &countdown_program());
    let _ = ctx.run();

    let stats = &ctx.cpu().stats;
    assert_eq!(stats.cycles, 14);
    assert_eq!(stats.instructions_retired, 14);
    assert_eq!(stats.inst_jump, 2);
    assert_eq!(stats.inst_branch, 3);
    assert_eq!(stats.inst_alu, 9);
    assert_eq!(stats.inst_load, 0);
    assert_eq!(stats.inst_store, 0);
    assert_eq!(stats.branches_taken, 1);
    assert_eq!(stats.branches_not_taken, 2);
}

#[test]
fn loads_feed_a_store_address() {
    // Sum two data words and use the sum as a store address.
    let mut ctx = TestContext::new()
        .load_program(
            0,
            &[
                alu_imm(AluOp::Add, 1, 0, 2), // R1 <- 2
                load(2, 1),                   // R2 <- M[2]
                alu_imm(AluOp::Add, 1, 1, 1), // R1 <- 3
                load(3, 1),                   // R3 <- M[3]
                alu(AluOp::Add, 4, 2, 3),     // R4 <- R2 + R3
                store(4, 7),                  // M[R4] <- 7
                HALT,
            ],
        )
        .with_data(&[0, 0, 0x0010, 0x0020]);

    assert_eq!(ctx.run(), 7);
    assert_eq!(ctx.get_reg(4), 0x0030);
    assert_eq!(ctx.dmem(0x0030), 7);
    assert_eq!(ctx.cpu().stats.inst_load, 2);
    assert_eq!(ctx.cpu().stats.inst_store, 1);
}

#[test]
fn halt_with_nonzero_operand_writes_destination() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[alu_imm(AluOp::Add, 1, 0, 5), alu(AluOp::Halt, 6, 1, 0)],
    );
    assert_eq!(ctx.run(), 2);
    assert_eq!(ctx.get_reg(6), 5);
}

#[test]
fn dump_hooks_render_final_state() {
    let mut ctx = TestContext::new()
        .load_program(0, &[alu_imm(AluOp::Add, 2, 0, 7), HALT])
        .with_data(&[0xAB, 0x1]);
    let _ = ctx.run();

    assert_eq!(
        ctx.cpu().memory_dump(3),
        "Printing 3 locations in memory...\n0x0:\t0xab\n0x1:\t0x1\n0x2:\t0x0\n\n"
    );

    let regs = ctx.cpu().register_dump();
    assert!(regs.starts_with("Printing registers...\n"));
    assert!(regs.contains("R2:\t0x7\n"));
    assert!(regs.contains("R7:\t0x0\n"));
    assert_eq!(regs.lines().count(), 10);
}

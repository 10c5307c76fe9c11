//! ALU arithmetic operations.
//!
//! Increment, add, complement-add, subtract, and decrement on 16-bit words.
//! Everything wraps modulo 2^16; there is no overflow trap and the carry and
//! overflow flags are never produced.

use crate::core::signals::AluOp;

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - Operand A.
/// * `b`  - Operand B (already resolved to the immediate when MB is set).
///
/// # Returns
///
/// The wrapped 16-bit result. Non-arithmetic opcodes return `a`.
pub fn execute(op: AluOp, a: u16, b: u16) -> u16 {
    match op {
        AluOp::Inc => a.wrapping_add(1),
        AluOp::Add => a.wrapping_add(b),
        AluOp::AddInc => a.wrapping_add(b).wrapping_add(1),
        AluOp::AddNot => a.wrapping_add(!b),
        AluOp::Sub => a.wrapping_add(!b).wrapping_add(1),
        AluOp::Dec => a.wrapping_sub(1),
        _ => a,
    }
}

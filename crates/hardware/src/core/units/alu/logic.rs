//! ALU logical operations.
//!
//! Bitwise AND, OR, XOR on both operands and complement of operand A.

use crate::core::signals::AluOp;

/// Executes a logical operation. Non-logic opcodes return `a`.
pub fn execute(op: AluOp, a: u16, b: u16) -> u16 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Not => !a,
        _ => a,
    }
}

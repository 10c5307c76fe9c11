//! ALU transfer and shift operations on operand B.
//!
//! Shifts move by exactly one position and are logical in both directions:
//! the vacated bit is always zero.

use crate::core::signals::AluOp;

/// Executes a B-side transfer or shift. Other opcodes return `a`.
pub fn execute(op: AluOp, a: u16, b: u16) -> u16 {
    match op {
        AluOp::MovB => b,
        AluOp::Shr => b >> 1,
        AluOp::Shl => b << 1,
        _ => a,
    }
}

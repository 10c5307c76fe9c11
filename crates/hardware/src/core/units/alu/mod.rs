//! Function Unit (ALU).
//!
//! This module implements the 16-bit function unit used by the execution loop.
//! Every invocation produces a result word and a freshly computed flag set;
//! previous flags never leak into the new ones.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Inc, Add, AddInc, AddNot, Sub, Dec
//! - [`logic`]:      And, Or, Xor, Not
//! - [`shifts`]:     MovB, Shr, Shl

/// Integer arithmetic operations.
pub mod arithmetic;

/// Bitwise logical operations.
pub mod logic;

/// Transfer and shift operations on operand B.
pub mod shifts;

use crate::core::arch::status::StatusFlags;
use crate::core::signals::AluOp;

/// Output of one function-unit invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluOutput {
    /// 16-bit result.
    pub value: u16,
    /// Flags computed from `value`.
    pub flags: StatusFlags,
    /// Set when the operation was [`AluOp::Halt`].
    pub halt: bool,
}

/// Function unit for the 16 fixed operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes a function-unit operation.
    ///
    /// `Halt` passes operand A through unchanged and raises `halt`; the
    /// caller is responsible for stopping the run loop.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplecpu_core::core::units::alu::Alu;
    /// use simplecpu_core::core::signals::AluOp;
    ///
    /// let out = Alu::execute(AluOp::Sub, 5, 5);
    /// assert_eq!(out.value, 0);
    /// assert!(out.flags.zero());
    ///
    /// let out = Alu::execute(AluOp::Dec, 0, 0);
    /// assert_eq!(out.value, 0xFFFF);
    /// assert!(out.flags.negative());
    /// ```
    pub fn execute(op: AluOp, a: u16, b: u16) -> AluOutput {
        let value = match op {
            AluOp::MovA | AluOp::MovAAlt | AluOp::Halt => a,

            AluOp::Inc
            | AluOp::Add
            | AluOp::AddInc
            | AluOp::AddNot
            | AluOp::Sub
            | AluOp::Dec => arithmetic::execute(op, a, b),

            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Not => logic::execute(op, a, b),

            AluOp::MovB | AluOp::Shr | AluOp::Shl => shifts::execute(op, a, b),
        };

        AluOutput {
            value,
            flags: StatusFlags::from_result(value),
            halt: op == AluOp::Halt,
        }
    }
}

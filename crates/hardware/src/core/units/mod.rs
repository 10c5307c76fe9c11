//! Execution units.
//!
//! The function unit (ALU) producing results and flags, and the branch
//! resolution unit producing the next program counter.

/// Function unit for the sixteen 16-bit operations.
pub mod alu;

/// Branch resolution unit.
pub mod bru;

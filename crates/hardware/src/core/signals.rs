//! Control signals and operation types.
//!
//! This module defines the per-cycle control bundle produced by the decoder. It covers:
//! 1. **Operation Classification:** The sixteen function-unit operations.
//! 2. **Operand Routing:** Register address fields and the constant-B select.
//! 3. **Destination Control:** Register write, memory write, and memory-destination selects.
//! 4. **Sequencing:** Program-counter load, jump-vs-branch, and branch-condition selects.

use std::fmt;

/// Function-unit operations, one per function-select code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `0`: A.
    #[default]
    MovA,
    /// `1`: A + 1.
    Inc,
    /// `2`: A + B.
    Add,
    /// `3`: A + B + 1.
    AddInc,
    /// `4`: A + !B (one's-complement subtract).
    AddNot,
    /// `5`: A + !B + 1 (two's-complement subtract).
    Sub,
    /// `6`: A - 1.
    Dec,
    /// `7`: A, an alias of code 0.
    MovAAlt,
    /// `8`: A & B.
    And,
    /// `9`: A | B.
    Or,
    /// `10`: A ^ B.
    Xor,
    /// `11`: !A.
    Not,
    /// `12`: B.
    MovB,
    /// `13`: B >> 1 (logical).
    Shr,
    /// `14`: B << 1.
    Shl,
    /// `15`: halt the machine; result is A.
    Halt,
}

impl AluOp {
    /// All operations in function-select order.
    pub const ALL: [Self; 16] = [
        Self::MovA,
        Self::Inc,
        Self::Add,
        Self::AddInc,
        Self::AddNot,
        Self::Sub,
        Self::Dec,
        Self::MovAAlt,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Not,
        Self::MovB,
        Self::Shr,
        Self::Shl,
        Self::Halt,
    ];

    /// Maps a function-select code to its operation. Only the low four bits
    /// are significant.
    #[inline]
    pub const fn from_fs(fs: u8) -> Self {
        Self::ALL[(fs & 0xF) as usize]
    }

    /// Function-select code of this operation.
    #[inline]
    pub const fn fs(self) -> u8 {
        self as u8
    }

    /// Lower-case mnemonic used by traces and the disassembler.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::MovA | Self::MovAAlt => "mova",
            Self::Inc => "inc",
            Self::Add => "add",
            Self::AddInc => "addinc",
            Self::AddNot => "addnot",
            Self::Sub => "sub",
            Self::Dec => "dec",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Not => "not",
            Self::MovB => "movb",
            Self::Shr => "shr",
            Self::Shl => "shl",
            Self::Halt => "halt",
        }
    }
}

/// Control-signal bundle for one cycle.
///
/// Recomputed from scratch by the decoder every cycle. The CPU latches the
/// bundle so the branch unit can consume it at the start of the following
/// cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Destination register address.
    pub da: u8,
    /// Operand-A register address.
    pub aa: u8,
    /// Operand-B register address, or immediate when `mb` is set.
    pub ba: u8,
    /// Function-select code (low bit cleared when `pl` is set).
    pub fs: u8,
    /// Operation selected by `fs`.
    pub op: AluOp,
    /// Constant-operand-B select.
    pub mb: bool,
    /// Memory-destination select: result comes from data memory.
    pub md: bool,
    /// Register-write enable.
    pub rw: bool,
    /// Memory-write enable.
    pub mw: bool,
    /// Program-counter load select: this is a jump or branch.
    pub pl: bool,
    /// Jump (set) versus conditional branch (clear).
    pub jb: bool,
    /// Branch on negative (set) versus branch on zero (clear).
    pub bc: bool,
}

impl fmt::Display for ControlSignals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DA: {}, AA: {}, BA: {}", self.da, self.aa, self.ba)?;
        writeln!(
            f,
            "MB: {}, MD: {}, RW: {}, MW: {}, PL: {}, JB: {}, BC: {}",
            u8::from(self.mb),
            u8::from(self.md),
            u8::from(self.rw),
            u8::from(self.mw),
            u8::from(self.pl),
            u8::from(self.jb),
            u8::from(self.bc)
        )?;
        write!(f, "FS: {}", self.fs)
    }
}

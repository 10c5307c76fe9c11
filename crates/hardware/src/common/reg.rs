//! Unified Register File.
//!
//! This module provides the `RegisterFile` struct, which gathers every
//! architectural register in one place:
//! 1. **General-purpose registers:** `R0`-`R7`.
//! 2. **Dedicated registers:** program counter, instruction register, status.
//! 3. **Observability:** Debugging utilities for dumping register state.

use crate::core::arch::gpr::Gpr;
use crate::core::arch::status::StatusFlags;

/// Architectural register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
    /// Program counter: address of the word in `ir`.
    pub pc: u16,
    /// Instruction register: the word being executed this cycle.
    pub ir: u16,
    /// Status register holding the condition flags.
    pub status: StatusFlags,
}

impl RegisterFile {
    /// Creates a register file with every register cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register.
    #[inline]
    pub fn read(&self, idx: usize) -> u16 {
        self.gpr.read(idx)
    }

    /// Writes a general-purpose register.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u16) {
        self.gpr.write(idx, val);
    }

    /// Returns the general-purpose register values, `R0` first.
    pub fn gprs(&self) -> [u16; crate::common::constants::GPR_COUNT] {
        self.gpr.snapshot()
    }

    /// Renders the general-purpose registers for the debug dump.
    pub fn dump(&self) -> String {
        self.gpr.dump()
    }
}

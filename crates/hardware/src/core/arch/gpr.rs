//! General-Purpose Register File.
//!
//! This module implements the eight general-purpose registers. It performs the following:
//! 1. **Storage:** Maintains 16-bit registers `R0`-`R7`.
//! 2. **Addressing:** Accepts the 3-bit register fields straight from the decoder.
//! 3. **Debugging:** Provides a textual dump of the register contents.

use std::fmt::Write;

use crate::common::constants::GPR_COUNT;

/// General-Purpose Register file.
///
/// No register is hardwired: `R0` is an ordinary register.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u16; GPR_COUNT],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// Only the low three bits of `idx` are used, matching the width of the
    /// address fields that feed the register file.
    #[inline]
    pub fn read(&self, idx: usize) -> u16 {
        self.regs[idx % GPR_COUNT]
    }

    /// Writes a value to a general-purpose register.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u16) {
        self.regs[idx % GPR_COUNT] = val;
    }

    /// Returns a copy of all register values, `R0` first.
    pub fn snapshot(&self) -> [u16; GPR_COUNT] {
        self.regs
    }

    /// Renders the register file as `R{i}:\t0x{value}` lines.
    pub fn dump(&self) -> String {
        let mut out = String::from("Printing registers...\n");
        for (i, val) in self.regs.iter().enumerate() {
            let _ = writeln!(out, "R{i}:\t{val:#x}");
        }
        out.push('\n');
        out
    }
}

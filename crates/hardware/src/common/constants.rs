//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Word Constants:** Width of the data path and the most-significant bit.
//! 2. **Memory Constants:** Size of the instruction and data word memories.
//! 3. **Register Constants:** Number of general-purpose registers.
//! 4. **Status Constants:** Bit positions of the condition flags in the status register.

/// Width of every register, memory word, and instruction in bits.
pub const WORD_BITS: u32 = 16;

/// Mask selecting the sign (most-significant) bit of a word.
pub const SIGN_BIT: u16 = 1 << (WORD_BITS - 1);

/// Number of words in each memory (a full 16-bit address space).
pub const MEMORY_WORDS: usize = 1 << WORD_BITS;

/// Number of general-purpose registers (`R0`-`R7`).
pub const GPR_COUNT: usize = 8;

/// Negative flag: set when bit 15 of the last function-unit result is 1.
pub const FL_N: u16 = 1 << 0;

/// Carry flag. Reserved; no operation asserts it.
pub const FL_C: u16 = 1 << 1;

/// Zero flag: set when the last function-unit result was exactly zero.
pub const FL_Z: u16 = 1 << 2;

/// Overflow flag. Reserved; no operation asserts it.
pub const FL_V: u16 = 1 << 3;

/// Default number of data-memory words printed by the halt dump.
pub const DEFAULT_DUMP_WORDS: u16 = 16;

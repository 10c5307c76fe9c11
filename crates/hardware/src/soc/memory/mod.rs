//! Word-addressed memories.
//!
//! This module implements the flat memories of the machine. It provides:
//! 1. **Buffer:** Backing storage covering the whole 16-bit address space.
//! 2. **Memory:** Read/write access plus image loading and debug dumps.

/// Word buffer implementation.
pub mod buffer;

use std::fmt::Write;

use self::buffer::WordBuffer;
use crate::common::constants::MEMORY_WORDS;
use crate::common::{Result, SimError};

/// A flat memory of 65536 16-bit words with no protection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memory {
    buffer: WordBuffer,
}

impl Memory {
    /// Creates a zero-filled memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the word at `addr`.
    #[inline]
    pub fn read(&self, addr: u16) -> u16 {
        self.buffer[addr]
    }

    /// Writes `val` to `addr`.
    #[inline]
    pub fn write(&mut self, addr: u16, val: u16) {
        self.buffer[addr] = val;
    }

    /// Copies `words` into memory starting at address 0.
    ///
    /// Words beyond `words.len()` are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`] if `words` does not fit; memory is
    /// not modified in that case.
    pub fn load_words(&mut self, words: &[u16]) -> Result<()> {
        if words.len() > MEMORY_WORDS {
            return Err(SimError::ImageTooLarge {
                path: "<memory>".into(),
                words: words.len(),
                capacity: MEMORY_WORDS,
            });
        }
        self.buffer.as_mut_slice()[..words.len()].copy_from_slice(words);
        Ok(())
    }

    /// Returns the whole memory as a slice, address 0 first.
    pub fn as_slice(&self) -> &[u16] {
        self.buffer.as_slice()
    }

    /// Renders the first `count` words as `0x{addr}:\t0x{word}` lines.
    pub fn dump(&self, count: u16) -> String {
        let mut out = format!("Printing {count} locations in memory...\n");
        for (addr, word) in self.buffer.as_slice().iter().take(count as usize).enumerate() {
            let _ = writeln!(out, "{addr:#x}:\t{word:#x}");
        }
        out.push('\n');
        out
    }
}

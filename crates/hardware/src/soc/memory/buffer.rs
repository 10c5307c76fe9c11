//! Word Buffer Implementation.
//!
//! Backing storage for a memory: a heap-allocated array of exactly 65536
//! 16-bit words. Indexing takes a `u16`, so every address is in range by
//! construction and no bounds check can fail.

use std::ops::{Index, IndexMut};

use crate::common::constants::MEMORY_WORDS;

/// Fixed-size word storage spanning the full 16-bit address space.
#[derive(Clone, PartialEq, Eq)]
pub struct WordBuffer {
    words: Box<[u16]>,
}

impl WordBuffer {
    /// Creates a zero-filled buffer.
    pub fn new() -> Self {
        Self {
            words: vec![0; MEMORY_WORDS].into_boxed_slice(),
        }
    }

    /// Returns the size of the buffer in words.
    pub const fn len(&self) -> usize {
        MEMORY_WORDS
    }

    /// Always false; the buffer spans the whole address space.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the buffer contents as a slice.
    pub fn as_slice(&self) -> &[u16] {
        &self.words
    }

    /// Returns the buffer contents as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [u16] {
        &mut self.words
    }
}

impl Default for WordBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WordBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
        f.debug_struct("WordBuffer")
            .field("len", &MEMORY_WORDS)
            .field("used", &used)
            .finish()
    }
}

impl Index<u16> for WordBuffer {
    type Output = u16;

    #[inline(always)]
    fn index(&self, addr: u16) -> &u16 {
        &self.words[addr as usize]
    }
}

impl IndexMut<u16> for WordBuffer {
    #[inline(always)]
    fn index_mut(&mut self, addr: u16) -> &mut u16 {
        &mut self.words[addr as usize]
    }
}

//! Top-level `System` type.
//!
//! The machine has a Harvard organisation: one memory holds instructions and
//! is only written at load time, the other holds data and is read and written
//! during execution. Both are owned here and handed to the CPU.

use crate::common::Result;
use crate::soc::memory::Memory;

/// The pair of memories the CPU executes against.
#[derive(Clone, Debug, Default)]
pub struct System {
    /// Instruction memory; read-only once execution starts.
    pub imem: Memory,
    /// Data memory.
    pub dmem: Memory,
}

impl System {
    /// Builds a system with both memories cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a system from already-parsed instruction and data images.
    ///
    /// # Errors
    ///
    /// Fails if either image exceeds the address space.
    pub fn with_images(instructions: &[u16], data: &[u16]) -> Result<Self> {
        let mut system = Self::new();
        system.imem.load_words(instructions)?;
        system.dmem.load_words(data)?;
        Ok(system)
    }
}

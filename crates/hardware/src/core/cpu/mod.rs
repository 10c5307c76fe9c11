//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire
//! machine state. It coordinates the following:
//! 1. **State Management:** Registers, program counter, status flags, and run state.
//! 2. **Signal Latching:** The control bundle carried from one decode to the next branch decision.
//! 3. **Memory:** The instruction and data memories.
//! 4. **Diagnostics:** Memory and register dumps for hosts and tests.

/// Fetch-decode-execute cycle.
pub mod execution;

use crate::common::{RegisterFile, Result};
use crate::config::{Config, StoreSource};
use crate::core::arch::mode::RunState;
use crate::core::signals::ControlSignals;
use crate::soc::System;
use crate::stats::SimStats;

/// Main CPU structure containing all architectural state.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose, program counter, instruction, and status registers.
    pub regs: RegisterFile,
    /// Instruction and data memories.
    pub bus: System,
    /// Where the machine is in its reset/run/halt lifecycle.
    pub state: RunState,
    /// Control signals decoded in the previous cycle, consumed by the branch
    /// unit at the start of the next one.
    pub latched: ControlSignals,

    /// Enable per-cycle trace events.
    pub trace: bool,
    /// What memory-write instructions store.
    pub store_source: StoreSource,
    /// Run statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU in its power-on state over the given memories.
    pub fn new(system: System, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            bus: system,
            state: RunState::AwaitingReset,
            latched: ControlSignals::default(),
            trace: config.general.trace_instructions,
            store_source: config.execution.store_source,
            stats: SimStats::default(),
        }
    }

    /// Creates a CPU with the given instruction and data images loaded at address 0.
    ///
    /// # Errors
    ///
    /// Fails if either image exceeds the address space.
    pub fn with_images(instructions: &[u16], data: &[u16], config: &Config) -> Result<Self> {
        Ok(Self::new(System::with_images(instructions, data)?, config))
    }

    /// Returns true once the halt operation has executed.
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Renders the first `count` words of data memory.
    pub fn memory_dump(&self, count: u16) -> String {
        self.bus.dmem.dump(count)
    }

    /// Renders the general-purpose registers.
    pub fn register_dump(&self) -> String {
        self.regs.dump()
    }

    /// Prints the first `count` data-memory words and the registers to stdout.
    pub fn dump_state(&self, count: u16) {
        print!("{}{}", self.memory_dump(count), self.register_dump());
    }
}

//! Simulator: owns the CPU and drives it until it halts.
//!
//! The run loop has no timeout of its own. A program that never executes the
//! halt operation runs forever unless `general.max_cycles` is configured.

use std::path::Path;

use tracing::debug;

use crate::common::Result;
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::loader::load_hex_image;

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The halt operation executed.
    Halted {
        /// Cycles executed, including the reset cycle.
        cycles: u64,
    },
    /// The configured cycle budget ran out first.
    CycleLimit {
        /// Cycles executed.
        cycles: u64,
    },
}

/// Top-level simulator: CPU plus run configuration.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state.
    pub cpu: Cpu,
    /// Run configuration.
    pub config: Config,
}

impl Simulator {
    /// Creates a simulator around an already-built CPU.
    pub const fn new(cpu: Cpu, config: Config) -> Self {
        Self { cpu, config }
    }

    /// Creates a simulator from parsed instruction and data images.
    ///
    /// # Errors
    ///
    /// Fails if either image exceeds the address space.
    pub fn from_images(instructions: &[u16], data: &[u16], config: Config) -> Result<Self> {
        let cpu = Cpu::with_images(instructions, data, &config)?;
        Ok(Self::new(cpu, config))
    }

    /// Loads the instruction and data image files and builds a simulator.
    ///
    /// Both files are read before execution can begin; a failure in either
    /// leaves no simulator behind.
    ///
    /// # Errors
    ///
    /// Any loader error for either file.
    pub fn from_files(
        instr_path: impl AsRef<Path>,
        data_path: impl AsRef<Path>,
        config: Config,
    ) -> Result<Self> {
        let instructions = load_hex_image(instr_path)?;
        let data = load_hex_image(data_path)?;
        Self::from_images(&instructions, &data, config)
    }

    /// Advances the simulator by one cycle.
    pub fn tick(&mut self) {
        self.cpu.tick();
    }

    /// Runs until the CPU halts or the configured cycle budget is spent.
    pub fn run(&mut self) -> RunOutcome {
        let limit = self.config.general.max_cycles;
        debug!(?limit, "run start");

        while !self.cpu.is_halted() {
            if limit.is_some_and(|max| self.cpu.stats.cycles >= max) {
                debug!(cycles = self.cpu.stats.cycles, "cycle limit reached");
                return RunOutcome::CycleLimit {
                    cycles: self.cpu.stats.cycles,
                };
            }
            self.cpu.tick();
        }

        RunOutcome::Halted {
            cycles: self.cpu.stats.cycles,
        }
    }
}

//! Run states of the execution loop.
//!
//! The machine powers up waiting for its one-shot reset, runs until the halt
//! operation retires, and then stays halted.

use std::fmt;

/// Lifecycle state of the CPU.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// Power-on state. The next cycle forces the program counter to zero
    /// instead of consulting the branch unit.
    #[default]
    AwaitingReset,

    /// Normal execution.
    Running,

    /// The halt operation has executed; further ticks are ignored.
    Halted,
}

impl RunState {
    /// Returns true while cycles may still be executed.
    pub const fn is_running(self) -> bool {
        !matches!(self, Self::Halted)
    }

    /// Returns the human-readable name of the state.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AwaitingReset => "awaiting-reset",
            Self::Running => "running",
            Self::Halted => "halted",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

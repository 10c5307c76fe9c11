//! Core processor implementation.
//!
//! This module contains the CPU, its architectural state, the control-signal
//! bundle, and the execution units wired together by the execution loop.

/// Architectural state components (GPRs, status flags, run state).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Control signals and function-unit operation codes.
pub mod signals;

/// Execution units (function unit, branch resolution unit).
pub mod units;

pub use self::cpu::Cpu;

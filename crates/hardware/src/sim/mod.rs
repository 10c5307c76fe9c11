//! Simulation utilities and program loading.
//!
//! Provides the hex image loader and the top-level simulator that drives the
//! CPU until it halts.

/// Hex memory image loading.
pub mod loader;

/// Top-level simulator and run loop.
pub mod simulator;

pub use simulator::{RunOutcome, Simulator};

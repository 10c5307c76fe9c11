//! Architectural state components.
//!
//! This module contains the programmer-visible pieces of machine state:
//! 1. **GPRs:** The eight general-purpose registers.
//! 2. **Modes:** The run-state machine (awaiting reset, running, halted).
//! 3. **Status:** The packed condition-flag register.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Run-state definitions.
pub mod mode;

/// Status register and condition flags.
pub mod status;

//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** Word width, memory size, register count, and flag bits.
//! 2. **Error Handling:** The host-side error type and result alias.
//! 3. **Register Management:** The unified architectural register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{Result, SimError};
pub use reg::RegisterFile;

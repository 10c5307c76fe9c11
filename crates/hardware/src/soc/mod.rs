//! System components.
//!
//! This module organizes the storage the CPU executes against: the word
//! memories and the `System` that owns the instruction and data memories.

/// System construction.
pub mod builder;

/// Word-addressed memory implementation.
pub mod memory;

pub use builder::System;

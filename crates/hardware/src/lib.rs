//! Simple computer simulator library.
//!
//! This crate implements a cycle-level simulator for a small 16-bit CPU with
//! eight registers and separate instruction and data memories:
//! 1. **Core:** Register file, status flags, run state, and the execution loop.
//! 2. **Units:** Function unit (ALU) and branch resolution unit.
//! 3. **ISA:** Bit-field decoding into control signals, and a disassembler.
//! 4. **Memory:** Two flat 65536-word memories.
//! 5. **Simulation:** Hex image loader, configuration, and statistics.
//!
//! Execution is strictly sequential: one instruction is fetched, decoded, and
//! executed per cycle, with no overlap between cycles.

/// Common types and constants (word width, flags, errors, registers).
pub mod common;
/// Simulator configuration.
pub mod config;
/// CPU core (arch state, signals, execution units, execution loop).
pub mod core;
/// Instruction set (field layout, decoder, disassembler).
pub mod isa;
/// Image loader and top-level simulator.
pub mod sim;
/// Instruction and data memories.
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds registers, memories, and stats.
pub use crate::core::Cpu;
/// Top-level simulator driving the CPU until halt.
pub use crate::sim::Simulator;
/// Instruction and data memory pair.
pub use crate::soc::System;

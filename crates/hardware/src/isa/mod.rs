//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the instruction word layout, the decoder that turns a word into
//! control signals, and a disassembler for traces.

/// Instruction decoding logic.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding layout and bit extraction utilities.
pub mod instruction;

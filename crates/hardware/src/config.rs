//! Configuration system for the simulator.
//!
//! This module defines the structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline settings matching the bare machine.
//! 2. **Structures:** General run control and execution-semantics settings.
//! 3. **Enums:** Selectable data path choices.
//!
//! Configuration is supplied as JSON (`--config` on the command line) or taken
//! from `Config::default()`. Every field is optional in the JSON document.

use serde::Deserialize;

use crate::common::Result;
use crate::common::constants::DEFAULT_DUMP_WORDS;

/// Default configuration constants for the simulator.
mod defaults {
    /// Dump data memory and registers after the run ends.
    pub const DUMP_ON_HALT: bool = true;
}

/// Source of the word written to data memory by a memory-write instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum StoreSource {
    /// The raw 3-bit operand-B address field.
    #[default]
    Field,
    /// The contents of the register named by the operand-B address field.
    Register,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use simplecpu_core::config::{Config, StoreSource};
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_cycles": 1000 },
///     "execution": { "store_source": "Register" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, Some(1000));
/// assert_eq!(config.general.dump_words, 16);
/// assert_eq!(config.execution.store_source, StoreSource::Register);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General run settings.
    pub general: GeneralConfig,
    /// Execution semantics.
    pub execution: ExecutionConfig,
}

impl Config {
    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::SimError::Config`] if the document is malformed
    /// or names an unknown enum variant.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a trace event for every cycle.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop after this many cycles. `None` runs until the halt instruction,
    /// forever if the program never halts.
    #[serde(default)]
    pub max_cycles: Option<u64>,

    /// Print the memory and register dump once the run ends.
    #[serde(default = "GeneralConfig::default_dump_on_halt")]
    pub dump_on_halt: bool,

    /// Number of data-memory words included in the dump.
    #[serde(default = "GeneralConfig::default_dump_words")]
    pub dump_words: u16,
}

impl GeneralConfig {
    fn default_dump_on_halt() -> bool {
        defaults::DUMP_ON_HALT
    }

    fn default_dump_words() -> u16 {
        DEFAULT_DUMP_WORDS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_cycles: None,
            dump_on_halt: defaults::DUMP_ON_HALT,
            dump_words: DEFAULT_DUMP_WORDS,
        }
    }
}

/// Execution-semantics settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecutionConfig {
    /// What a memory-write instruction stores.
    #[serde(default)]
    pub store_source: StoreSource,
}

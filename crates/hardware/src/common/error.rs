//! Simulator error definitions.
//!
//! The instruction set itself cannot fault: every 16-bit word decodes and every
//! 16-bit address is in range. The only failures are therefore host-side:
//! 1. **Image loading:** unreadable files, non-hex lines, or oversized images.
//! 2. **Configuration:** malformed JSON configuration documents.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// The file could not be opened or read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path of the file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line of a memory image is not a hexadecimal literal.
    #[error("{}:{line}: '{text}' is not a hexadecimal word", path.display())]
    InvalidHex {
        /// Path of the image (or `<memory>` for in-memory sources).
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Offending line, trimmed.
        text: String,
    },

    /// A memory image holds more words than the address space.
    #[error("{}: image holds {words} words, memory has {capacity}", path.display())]
    ImageTooLarge {
        /// Path of the image.
        path: PathBuf,
        /// Number of words found.
        words: usize,
        /// Memory capacity in words.
        capacity: usize,
    },

    /// The configuration document is not valid.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used across the simulator.
pub type Result<T> = std::result::Result<T, SimError>;

//! Memory Image Loader.
//!
//! Images are plain text with one hexadecimal word per line, optionally
//! prefixed with `0x`. Line `n` fills word `n - 1` starting at address 0.
//! It performs:
//! 1. **Parsing:** The whole image is parsed before anything is written, so a
//!    bad line leaves memory untouched.
//! 2. **Validation:** Non-hex lines, blank lines before the last word, and
//!    images larger than memory are errors.
//! 3. **Truncation:** Literals wider than 16 bits keep their low 16 bits, with a warning.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::common::constants::MEMORY_WORDS;
use crate::common::{Result, SimError};

/// Parses the text of a memory image.
///
/// Blank lines are accepted only after the last word, so every word stays at
/// the address of its line. `path` is only used for error reporting.
///
/// # Errors
///
/// [`SimError::InvalidHex`] for a line that is not a hex literal or for a
/// blank line followed by another word, and
/// [`SimError::ImageTooLarge`] when the image holds more than 65536 words.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use simplecpu_core::sim::loader::parse_hex_image;
///
/// let words = parse_hex_image("2200\n0x1E00\n", Path::new("prog.txt")).unwrap();
/// assert_eq!(words, vec![0x2200, 0x1E00]);
/// ```
pub fn parse_hex_image(text: &str, path: &Path) -> Result<Vec<u16>> {
    let mut words = Vec::new();
    let mut first_blank = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            if first_blank.is_none() {
                first_blank = Some(idx + 1);
            }
            continue;
        }
        if let Some(blank) = first_blank {
            return Err(SimError::InvalidHex {
                path: path.to_path_buf(),
                line: blank,
                text: String::new(),
            });
        }

        let digits = line
            .strip_prefix("0x")
            .or_else(|| line.strip_prefix("0X"))
            .unwrap_or(line);
        let invalid = || SimError::InvalidHex {
            path: path.to_path_buf(),
            line: idx + 1,
            text: line.to_string(),
        };
        if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;

        if value > u32::from(u16::MAX) {
            warn!(
                path = %path.display(),
                line = idx + 1,
                value,
                "literal wider than 16 bits, keeping the low word"
            );
        }

        if words.len() == MEMORY_WORDS {
            return Err(SimError::ImageTooLarge {
                path: path.to_path_buf(),
                words: words.len() + 1,
                capacity: MEMORY_WORDS,
            });
        }
        words.push(value as u16);
    }

    Ok(words)
}

/// Reads and parses a memory image from disk.
///
/// # Errors
///
/// [`SimError::Io`] if the file cannot be read, otherwise the errors of
/// [`parse_hex_image`].
pub fn load_hex_image(path: impl AsRef<Path>) -> Result<Vec<u16>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_hex_image(&text, path)?;
    debug!(path = %path.display(), words = words.len(), "loaded image");
    Ok(words)
}

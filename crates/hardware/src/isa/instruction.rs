//! Instruction encoding and bit extraction utilities.
//!
//! Every instruction is one 16-bit word:
//!
//! ```text
//!  15  14  13  12 11 10  9   8  7  6   5  4  3   2  1  0
//! | MB| b14| MD|    FS[3:0]   |  DA[2:0] |  AA[2:0] |  BA[2:0] |
//! ```
//!
//! Bit 9 doubles as the branch-condition select. The helpers here only slice
//! fields; turning them into control signals is the decoder's job.

/// Bit mask for a 3-bit register address field.
pub const REG_FIELD_MASK: u16 = 0b111;

/// Bit position of the destination address field (bits 6-8).
pub const DA_SHIFT: u32 = 6;

/// Bit position of the operand-A address field (bits 3-5).
pub const AA_SHIFT: u32 = 3;

/// Bit position of the operand-B address field (bits 0-2).
pub const BA_SHIFT: u32 = 0;

/// Bit position of the function-select field (bits 9-12).
pub const FS_SHIFT: u32 = 9;

/// Bit mask for the 4-bit function-select field.
pub const FS_MASK: u16 = 0b1111;

/// Bit carrying the branch-condition select.
pub const BC_BIT: u32 = 9;

/// Bit carrying the memory-destination select (jump select when PL is set).
pub const MD_BIT: u32 = 13;

/// Bit combined with MB to derive RW, MW, and PL.
pub const MODE_BIT: u32 = 14;

/// Bit carrying the constant-operand-B select.
pub const MB_BIT: u32 = 15;

/// Returns true when bit `bit` of `word` is set.
#[inline(always)]
pub const fn bit(word: u16, bit: u32) -> bool {
    (word >> bit) & 1 != 0
}

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Destination register address (bits 6-8).
    fn da(&self) -> u8;

    /// Operand-A register address (bits 3-5).
    fn aa(&self) -> u8;

    /// Operand-B register address or 3-bit immediate (bits 0-2).
    fn ba(&self) -> u8;

    /// Raw function-select field (bits 9-12), before any PL masking.
    fn fs(&self) -> u8;

    /// Single-bit accessor.
    fn bit(&self, n: u32) -> bool;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn da(&self) -> u8 {
        ((self >> DA_SHIFT) & REG_FIELD_MASK) as u8
    }

    #[inline(always)]
    fn aa(&self) -> u8 {
        ((self >> AA_SHIFT) & REG_FIELD_MASK) as u8
    }

    #[inline(always)]
    fn ba(&self) -> u8 {
        ((self >> BA_SHIFT) & REG_FIELD_MASK) as u8
    }

    #[inline(always)]
    fn fs(&self) -> u8 {
        ((self >> FS_SHIFT) & FS_MASK) as u8
    }

    #[inline(always)]
    fn bit(&self, n: u32) -> bool {
        bit(*self, n)
    }
}

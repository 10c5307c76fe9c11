//! Status Register.
//!
//! Condition flags are packed into a single 16-bit status register. Only the
//! negative and zero bits are ever asserted; carry and overflow are reserved.
//! The whole register is recomputed from each function-unit result, never
//! updated bit by bit.

use std::fmt;

use crate::common::constants::{FL_C, FL_N, FL_V, FL_Z, SIGN_BIT};

/// Packed condition flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusFlags(u16);

impl StatusFlags {
    /// Flags describing `result`: negative from bit 15, zero when the word is 0.
    #[inline]
    pub const fn from_result(result: u16) -> Self {
        let mut bits = 0;
        if result & SIGN_BIT != 0 {
            bits |= FL_N;
        }
        if result == 0 {
            bits |= FL_Z;
        }
        Self(bits)
    }

    /// Builds flags from raw status-register bits.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Raw status-register bits.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Negative flag.
    #[inline]
    pub const fn negative(self) -> bool {
        self.0 & FL_N != 0
    }

    /// Zero flag.
    #[inline]
    pub const fn zero(self) -> bool {
        self.0 & FL_Z != 0
    }

    /// Carry flag (reserved).
    pub const fn carry(self) -> bool {
        self.0 & FL_C != 0
    }

    /// Overflow flag (reserved).
    pub const fn overflow(self) -> bool {
        self.0 & FL_V != 0
    }
}

impl fmt::Display for StatusFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}{}",
            bit(self.overflow(), 'V'),
            bit(self.zero(), 'Z'),
            bit(self.carry(), 'C'),
            bit(self.negative(), 'N')
        )
    }
}

//! Branch resolution unit (BRU).
//!
//! Computes the next program counter from a latched control bundle, the
//! current status flags, and the current program counter. Precedence:
//! 1. **Jump:** PL and JB set; PC becomes the operand-A register.
//! 2. **Branch on negative:** PL set, JB clear, BC set.
//! 3. **Branch on zero:** PL set, JB clear, BC clear.
//! 4. **Fall-through:** PC + 1.
//!
//! The one-shot reset that precedes all of these is owned by the CPU run state.

use crate::core::arch::status::StatusFlags;
use crate::core::signals::ControlSignals;

/// Bits forced on when sign-extending the branch displacement.
const SIGN_EXTEND_MASK: u8 = 0b1110_0000;

/// Largest destination-address field that still yields a forward displacement.
const MAX_FORWARD_DA: u8 = 0b100;

/// How the next program counter was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchOutcome {
    /// Unconditional jump to a register value.
    Jump,
    /// Conditional branch whose condition held.
    Taken,
    /// Conditional branch whose condition failed.
    NotTaken,
    /// Not a control-transfer instruction.
    FallThrough,
}

/// Builds the signed branch displacement from the DA and BA fields.
///
/// The fields are concatenated as `DA:BA` and sign-extended whenever DA is
/// greater than 4.
///
/// # Examples
///
/// ```
/// use simplecpu_core::core::units::bru::branch_offset;
///
/// assert_eq!(branch_offset(0, 3), 3);
/// assert_eq!(branch_offset(5, 0), -24);
/// assert_eq!(branch_offset(7, 7), -1);
/// ```
#[inline]
pub const fn branch_offset(da: u8, ba: u8) -> i8 {
    let mut raw = ((da & 0b111) << 3) | (ba & 0b111);
    if da > MAX_FORWARD_DA {
        raw |= SIGN_EXTEND_MASK;
    }
    raw as i8
}

/// Branch resolution unit.
#[derive(Debug)]
pub struct BranchUnit;

impl BranchUnit {
    /// Resolves the next program counter.
    ///
    /// # Arguments
    ///
    /// * `ctl`    - Control bundle latched from the previous decode.
    /// * `flags`  - Current status flags.
    /// * `pc`     - Current program counter.
    /// * `target` - Contents of the register named by `ctl.aa`.
    pub fn next_pc(
        ctl: &ControlSignals,
        flags: StatusFlags,
        pc: u16,
        target: u16,
    ) -> (u16, BranchOutcome) {
        if !ctl.pl {
            return (pc.wrapping_add(1), BranchOutcome::FallThrough);
        }
        if ctl.jb {
            return (target, BranchOutcome::Jump);
        }

        let condition = if ctl.bc { flags.negative() } else { flags.zero() };
        if condition {
            let offset = branch_offset(ctl.da, ctl.ba);
            (pc.wrapping_add_signed(offset as i16), BranchOutcome::Taken)
        } else {
            (pc.wrapping_add(1), BranchOutcome::NotTaken)
        }
    }
}

//! Instruction Decoder.
//!
//! Maps a 16-bit instruction word to its control-signal bundle. Decoding is
//! total: every word yields a valid bundle, so there is no illegal-instruction
//! path.

use crate::core::signals::{AluOp, ControlSignals};
use crate::isa::instruction::{BC_BIT, InstructionBits, MB_BIT, MD_BIT, MODE_BIT};

/// Decodes a 16-bit instruction word into control signals.
///
/// # Examples
///
/// ```
/// use simplecpu_core::isa::decode::decode;
/// use simplecpu_core::core::signals::AluOp;
///
/// // R1 <- R2 + R3
/// let ctl = decode(0x0453);
/// assert_eq!((ctl.da, ctl.aa, ctl.ba), (1, 2, 3));
/// assert_eq!(ctl.op, AluOp::Add);
/// assert!(ctl.rw && !ctl.mw && !ctl.pl);
/// ```
pub fn decode(inst: u16) -> ControlSignals {
    let mb = inst.bit(MB_BIT);
    let md = inst.bit(MD_BIT);
    let mode = inst.bit(MODE_BIT);
    let pl = mb && mode;

    // PL repurposes bit 9 as the branch condition; keep it out of the ALU.
    let fs = if pl { inst.fs() & !1 } else { inst.fs() };

    ControlSignals {
        da: inst.da(),
        aa: inst.aa(),
        ba: inst.ba(),
        fs,
        op: AluOp::from_fs(fs),
        mb,
        md,
        rw: !mode,
        mw: !mb && mode,
        pl,
        jb: md,
        bc: inst.bit(BC_BIT),
    }
}

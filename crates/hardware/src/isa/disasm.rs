//! Instruction Disassembler.
//!
//! Converts a 16-bit instruction word into a human-readable mnemonic for
//! debug tracing and test diagnostics. The rendering is derived from the
//! decoded control signals, so it describes exactly what the CPU will do.
//!
//! ```
//! use simplecpu_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x0453), "add r1, r2, r3");
//! assert_eq!(disassemble(0x1E00), "halt");
//! ```

use crate::core::signals::AluOp;
use crate::core::units::bru::branch_offset;
use crate::isa::decode::decode;

/// Disassembles a 16-bit instruction word.
pub fn disassemble(inst: u16) -> String {
    let ctl = decode(inst);

    if ctl.pl {
        return if ctl.jb {
            format!("jmp r{}", ctl.aa)
        } else {
            let cond = if ctl.bc { "bn" } else { "bz" };
            format!("{cond} r{}, {:+}", ctl.aa, branch_offset(ctl.da, ctl.ba))
        };
    }
    if ctl.mw {
        return format!("st [r{}], {}", ctl.aa, ctl.ba);
    }
    if ctl.md {
        return format!("ld r{}, [r{}]", ctl.da, ctl.aa);
    }

    let b = if ctl.mb {
        format!("#{}", ctl.ba)
    } else {
        format!("r{}", ctl.ba)
    };
    match ctl.op {
        AluOp::Halt => "halt".to_string(),
        AluOp::MovA | AluOp::MovAAlt | AluOp::Inc | AluOp::Dec | AluOp::Not => {
            format!("{} r{}, r{}", ctl.op.mnemonic(), ctl.da, ctl.aa)
        }
        AluOp::MovB | AluOp::Shr | AluOp::Shl => {
            format!("{} r{}, {b}", ctl.op.mnemonic(), ctl.da)
        }
        _ => format!("{} r{}, r{}, {b}", ctl.op.mnemonic(), ctl.da, ctl.aa),
    }
}

//! Main Execution Loop.
//!
//! This module implements one machine cycle. In order:
//! 1. **Sequencing:** Reset, or let the branch unit pick the PC from last cycle's signals.
//! 2. **Fetch:** Load the instruction register from instruction memory.
//! 3. **Decode:** Produce this cycle's control signals.
//! 4. **Execute:** Store, load, or run the function unit, then write back.
//!
//! There is no overlap between cycles and no fault path.

use tracing::{debug, trace};

use super::Cpu;
use crate::config::StoreSource;
use crate::core::arch::mode::RunState;
use crate::core::units::alu::Alu;
use crate::core::units::bru::{BranchOutcome, BranchUnit};
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;

impl Cpu {
    /// Executes one fetch-decode-execute cycle.
    ///
    /// Does nothing once the CPU has halted.
    pub fn tick(&mut self) {
        if self.state == RunState::Halted {
            return;
        }

        let outcome = self.sequence();

        self.regs.ir = self.bus.imem.read(self.regs.pc);
        let ctl = decode(self.regs.ir);

        let a = self.regs.read(ctl.aa as usize);
        let b = if ctl.mb {
            u16::from(ctl.ba)
        } else {
            self.regs.read(ctl.ba as usize)
        };

        if ctl.mw {
            let val = match self.store_source {
                StoreSource::Field => u16::from(ctl.ba),
                StoreSource::Register => self.regs.read(ctl.ba as usize),
            };
            self.bus.dmem.write(a, val);
        }

        let mut halt = false;
        let result = if ctl.md {
            self.bus.dmem.read(a)
        } else {
            let out = Alu::execute(ctl.op, a, b);
            self.regs.status = out.flags;
            halt = out.halt;
            out.value
        };

        if ctl.rw {
            self.regs.write(ctl.da as usize, result);
        }

        if self.trace {
            trace!(
                pc = self.regs.pc,
                ir = self.regs.ir,
                asm = %disassemble(self.regs.ir),
                ?outcome,
                result,
                flags = %self.regs.status,
                "cycle"
            );
        }

        self.stats.cycles += 1;
        self.stats.instructions_retired += 1;
        if ctl.pl && ctl.jb {
            self.stats.inst_jump += 1;
        } else if ctl.pl {
            self.stats.inst_branch += 1;
        } else if ctl.mw {
            self.stats.inst_store += 1;
        } else if ctl.md {
            self.stats.inst_load += 1;
        } else {
            self.stats.inst_alu += 1;
        }

        self.latched = ctl;

        if halt {
            debug!(pc = self.regs.pc, cycles = self.stats.cycles, "halt");
            self.state = RunState::Halted;
        }
    }

    /// Picks the program counter for this cycle's fetch.
    ///
    /// The first cycle after power-on forces PC to zero. Afterwards the branch
    /// unit decides from the signals latched by the previous decode.
    fn sequence(&mut self) -> Option<BranchOutcome> {
        if self.state == RunState::AwaitingReset {
            self.regs.pc = 0;
            self.state = RunState::Running;
            debug!("reset: pc <- 0");
            return None;
        }

        let target = self.regs.read(self.latched.aa as usize);
        let (pc, outcome) =
            BranchUnit::next_pc(&self.latched, self.regs.status, self.regs.pc, target);
        self.regs.pc = pc;
        self.stats.record_branch(outcome);
        Some(outcome)
    }
}

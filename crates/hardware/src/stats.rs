//! Simulation statistics collection and reporting.
//!
//! This module tracks what the program did during a run. It provides:
//! 1. **Cycle counts:** Total cycles and retired instructions.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, jump, branch).
//! 3. **Branches:** Conditional branches taken and not taken.

use std::time::Instant;

use crate::core::units::bru::BranchOutcome;

/// Simulation statistics structure.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total cycles elapsed, including the reset cycle.
    pub cycles: u64,
    /// Number of instructions executed.
    pub instructions_retired: u64,

    /// Function-unit instructions writing a register.
    pub inst_alu: u64,
    /// Memory-destination (load) instructions.
    pub inst_load: u64,
    /// Memory-write (store) instructions.
    pub inst_store: u64,
    /// Unconditional jumps.
    pub inst_jump: u64,
    /// Conditional branches.
    pub inst_branch: u64,

    /// Conditional branches whose condition held.
    pub branches_taken: u64,
    /// Conditional branches whose condition failed.
    pub branches_not_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_jump: 0,
            inst_branch: 0,
            branches_taken: 0,
            branches_not_taken: 0,
        }
    }
}

/// Section names for selective stats output.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "branch"];

impl SimStats {
    /// Records the branch unit's decision for the cycle.
    pub const fn record_branch(&mut self, outcome: BranchOutcome) {
        match outcome {
            BranchOutcome::Taken => self.branches_taken += 1,
            BranchOutcome::NotTaken => self.branches_not_taken += 1,
            BranchOutcome::Jump | BranchOutcome::FallThrough => {}
        }
    }

    /// Renders the requested sections. An empty slice renders all of them.
    pub fn report_sections(&self, sections: &[&str]) -> String {
        use std::fmt::Write;

        let want = |s: &str| sections.is_empty() || sections.contains(&s);
        let seconds = self.start_time.elapsed().as_secs_f64().max(f64::EPSILON);
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;
        let mut out = String::new();

        if want("summary") {
            let khz = (self.cycles as f64 / seconds) / 1000.0;
            let _ = writeln!(out, "==========================================================");
            let _ = writeln!(out, "SIMPLE COMPUTER SIMULATION STATISTICS");
            let _ = writeln!(out, "==========================================================");
            let _ = writeln!(out, "host_seconds             {seconds:.4} s");
            let _ = writeln!(out, "sim_cycles               {}", self.cycles);
            let _ = writeln!(out, "sim_freq                 {khz:.2} kHz");
            let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            for (name, n) in [
                ("op.alu", self.inst_alu),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.jump", self.inst_jump),
                ("op.branch", self.inst_branch),
            ] {
                let _ = writeln!(out, "  {name:<22} {n} ({:.2}%)", pct(n));
            }
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("branch") {
            let total = (self.branches_taken + self.branches_not_taken).max(1) as f64;
            let _ = writeln!(out, "BRANCHES");
            let _ = writeln!(
                out,
                "  branch.taken           {} ({:.2}%)",
                self.branches_taken,
                self.branches_taken as f64 / total * 100.0
            );
            let _ = writeln!(out, "  branch.not_taken       {}", self.branches_not_taken);
            let _ = writeln!(out, "==========================================================");
        }
        out
    }

    /// Prints every section to stdout.
    pub fn print(&self) {
        print!("{}", self.report_sections(&[]));
    }
}

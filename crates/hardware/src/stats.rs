//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived CPI/IPC.
//! 2. **Instruction mix:** Counts by category (ALU, jump, NOP).
//! 3. **Hazards:** Operand forwards, squashed slots and stall cycles.

use std::fmt::Write as _;

use serde::Serialize;

use crate::core::pipeline::stages::execute::RetireKind;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total simulated cycles.
    pub cycles: u64,
    /// Instructions that completed Execute, excluding NOPs and bubbles.
    pub instructions_retired: u64,
    /// Count of ALU instructions retired.
    pub inst_alu: u64,
    /// Count of jumps retired.
    pub inst_jump: u64,
    /// Count of explicit NOP instructions that passed through Execute.
    pub inst_nop: u64,
    /// Fetch slots replaced by a bubble because a jump redirected the PC.
    pub squashed: u64,
    /// Cycles in which the external stall input was asserted.
    pub stall_cycles: u64,
    /// Operands bypassed from Execute to Decode.
    pub forwards: u64,
    /// Reserved opcodes converted to NOPs.
    pub illegal_as_nop: u64,
}

impl SimStats {
    /// Records one instruction leaving Execute.
    pub const fn record_retire(&mut self, kind: RetireKind) {
        match kind {
            RetireKind::Alu => {
                self.inst_alu += 1;
                self.instructions_retired += 1;
            }
            RetireKind::Jump => {
                self.inst_jump += 1;
                self.instructions_retired += 1;
            }
            RetireKind::Nop => self.inst_nop += 1,
        }
    }

    /// Instructions retired per cycle, `0.0` before the first cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Renders a short human-readable report.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "cycles              {:>10}", self.cycles);
        let _ = writeln!(
            out,
            "retired             {:>10}  (IPC {:.3})",
            self.instructions_retired,
            self.ipc()
        );
        let _ = writeln!(out, "  alu               {:>10}", self.inst_alu);
        let _ = writeln!(out, "  jump              {:>10}", self.inst_jump);
        let _ = writeln!(out, "  nop               {:>10}", self.inst_nop);
        let _ = writeln!(out, "forwards            {:>10}", self.forwards);
        let _ = writeln!(out, "squashed            {:>10}", self.squashed);
        let _ = writeln!(out, "stall cycles        {:>10}", self.stall_cycles);
        if self.illegal_as_nop > 0 {
            let _ = writeln!(out, "illegal -> nop      {:>10}", self.illegal_as_nop);
        }
        out
    }
}

//! Execute / Write-back (EX) Stage.
//!
//! This module implements the last stage of the pipeline. It performs the following:
//! 1. **Arithmetic Execution:** Applies the ALU operation to the resolved operand pair.
//! 2. **Branch Resolution:** Jumps are always taken; their target comes out of the same adder.
//! 3. **Write-back Request:** Reports the destination register and value to commit.
//!
//! The stage is purely combinational: it reads the ID/EX latch and produces an
//! [`ExecuteOutput`] that Decode (forwarding) and Fetch (redirect, squash) consume
//! in the same cycle. The register write itself is committed by the CPU once
//! every stage of the cycle has been evaluated.

use tracing::trace;

use crate::core::pipeline::latches::IdEx;
use crate::core::units::alu::Alu;

/// Class of an instruction leaving the pipeline, for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetireKind {
    /// Register-register ALU operation.
    Alu,
    /// Unconditional jump.
    Jump,
    /// Explicit `NOP` instruction.
    Nop,
}

/// Combinational outputs of the Execute stage for one cycle.
///
/// The default value is what a bubble produces: no write and no branch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecuteOutput {
    /// Destination register written this cycle, if any.
    pub rd: Option<u8>,
    /// ALU result (the register value, or the jump target).
    pub alu_result: u16,
    /// A jump is redirecting the PC this cycle.
    pub branch_taken: bool,
    /// Redirect target; meaningful only when `branch_taken`.
    pub branch_target: u16,
    /// Instruction that completed this cycle, `None` for a bubble.
    pub retired: Option<RetireKind>,
}

/// Executes the instruction held in the ID/EX latch.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch as it stands at the start of the cycle.
/// * `trace` - Emit a trace event for the executed instruction.
///
/// # Returns
///
/// The stage outputs. A bubble yields [`ExecuteOutput::default`].
pub fn execute_stage(id_ex: &IdEx, trace: bool) -> ExecuteOutput {
    let Some(id) = id_ex.entry else {
        if trace {
            trace!("EX  (bubble)");
        }
        return ExecuteOutput::default();
    };

    let alu_result = Alu::execute(id.ctrl.alu, id.in1, id.in2);

    let out = if id.ctrl.is_branch {
        ExecuteOutput {
            rd: None,
            alu_result,
            branch_taken: true,
            branch_target: alu_result,
            retired: Some(RetireKind::Jump),
        }
    } else if id.ctrl.reg_write {
        ExecuteOutput {
            rd: id.rd,
            alu_result,
            branch_taken: false,
            branch_target: 0,
            retired: Some(RetireKind::Alu),
        }
    } else {
        ExecuteOutput {
            retired: Some(RetireKind::Nop),
            ..ExecuteOutput::default()
        }
    };

    if trace {
        trace!(
            "EX  pc={:#06x} inst={:#06x} {:?}({:#06x}, {:#06x}) = {:#06x}{}",
            id.pc,
            id.inst,
            id.ctrl.alu,
            id.in1,
            id.in2,
            alu_result,
            if out.branch_taken { " -> redirect" } else { "" }
        );
    }

    out
}

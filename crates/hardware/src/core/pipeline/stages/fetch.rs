//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline.
//! It is responsible for reading instruction memory at the current Program
//! Counter (PC), squashing the fetched word when Execute redirects control
//! flow, and choosing the next PC.

use tracing::{debug, trace};

use crate::common::error::SimError;
use crate::core::arch::InstructionMemory;
use crate::core::pipeline::latches::{IfId, IfIdEntry};
use crate::core::pipeline::stages::execute::ExecuteOutput;

/// How the PC changes at the end of a cycle. Exactly one applies per cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PcUpdate {
    /// `stall` was asserted: the PC holds.
    Hold,
    /// A jump in Execute redirected the PC to its target.
    Jump,
    /// Sequential advance by one word.
    Increment,
}

/// Result of the fetch stage for one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchOutput {
    /// PC for the next cycle.
    pub next_pc: u16,
    /// Which PC update was applied.
    pub update: PcUpdate,
    /// Next value of the IF/ID latch.
    pub if_id: IfId,
    /// The slot was squashed by a taken branch.
    pub squashed: bool,
}

/// Executes the instruction fetch stage.
///
/// The IF/ID latch receives the word at `pc` unless the slot is squashed by a
/// taken branch or the pipeline is stalled; in both cases it receives a bubble.
/// A stalled slot is refetched once the stall is released, so no instruction
/// is ever delivered twice.
///
/// The PC update follows a fixed priority: `stall` holds the PC, otherwise a
/// taken branch loads `branch_target`, otherwise the PC increments (mod 2^16).
/// Squash and redirect are driven by the same `branch_taken` signal.
///
/// # Arguments
///
/// * `pc` - Current program counter.
/// * `imem` - Instruction memory.
/// * `ex` - This cycle's Execute outputs (branch flag and target).
/// * `stall` - External stall input.
/// * `trace` - Emit trace events.
///
/// # Errors
///
/// Returns [`SimError::OutOfRangeAddress`] if an instruction that would be
/// latched lies beyond instruction memory. Words that are squashed or
/// stalled are never read.
pub fn fetch_stage(
    pc: u16,
    imem: &InstructionMemory,
    ex: &ExecuteOutput,
    stall: bool,
    trace: bool,
) -> Result<FetchOutput, SimError> {
    let squashed = ex.branch_taken;

    let if_id = if squashed || stall {
        IfId { entry: None }
    } else {
        let inst = imem.read(pc)?;
        if trace {
            trace!("IF  pc={pc:#06x} inst={inst:#06x}");
        }
        IfId {
            entry: Some(IfIdEntry { pc, inst }),
        }
    };

    let (next_pc, update) = if stall {
        (pc, PcUpdate::Hold)
    } else if ex.branch_taken {
        (ex.branch_target, PcUpdate::Jump)
    } else {
        (pc.wrapping_add(1), PcUpdate::Increment)
    };

    if trace {
        if squashed {
            debug!("IF  pc={pc:#06x} squashed, redirect to {:#06x}", ex.branch_target);
        }
        if stall {
            debug!("IF  pc={pc:#06x} stalled");
        }
    }

    Ok(FetchOutput {
        next_pc,
        update,
        if_id,
        squashed,
    })
}

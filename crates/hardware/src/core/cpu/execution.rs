//! Main Execution Cycle.
//!
//! This module implements one clock cycle of the CPU in two phases:
//! 1. **Evaluate:** Every stage is computed from the state latched at the start of
//!    the cycle. Execute runs first because its outputs (write-back value, branch
//!    flag and target) feed Decode and Fetch combinationally in the same cycle.
//! 2. **Commit:** The register write, the new PC and both latches are applied
//!    together, the software analogue of a synchronous register update.
//!
//! If any stage fails, nothing is committed and the CPU is left exactly as it
//! was before the cycle.

use tracing::trace;

use super::Cpu;
use crate::common::error::SimError;
use crate::core::pipeline::stages::decode::DecodeOutput;
use crate::core::pipeline::stages::execute::ExecuteOutput;
use crate::core::pipeline::stages::fetch::FetchOutput;
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage};
use crate::core::pipeline::traits::PipelineLatch;

/// Everything a cycle computes before anything is latched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleOutputs {
    /// Execute / write-back outputs.
    pub execute: ExecuteOutput,
    /// Decode outputs (next ID/EX latch).
    pub decode: DecodeOutput,
    /// Fetch outputs (next IF/ID latch and PC).
    pub fetch: FetchOutput,
}

impl Cpu {
    /// Evaluates all stages for the current cycle without changing any state.
    ///
    /// # Errors
    ///
    /// Propagates [`SimError::Decode`] from Decode and
    /// [`SimError::OutOfRangeAddress`] from Fetch.
    pub fn evaluate(&self) -> Result<CycleOutputs, SimError> {
        let execute = execute_stage(&self.id_ex, self.trace);
        let decode = decode_stage(
            &self.if_id,
            &self.arch.gpr,
            &execute,
            self.illegal_opcode,
            self.trace,
        )?;
        let fetch = fetch_stage(
            self.arch.pc,
            &self.arch.imem,
            &execute,
            self.stall,
            self.trace,
        )?;
        Ok(CycleOutputs {
            execute,
            decode,
            fetch,
        })
    }

    /// Latches the results of [`Cpu::evaluate`] and updates statistics.
    pub fn commit(&mut self, out: &CycleOutputs) {
        if let Some(rd) = out.execute.rd {
            self.arch.gpr.write(rd as usize, out.execute.alu_result);
        }
        self.arch.pc = out.fetch.next_pc;
        self.if_id = out.fetch.if_id;
        self.id_ex = out.decode.id_ex;

        self.stats.cycles += 1;
        if let Some(kind) = out.execute.retired {
            self.stats.record_retire(kind);
        }
        self.stats.forwards += u64::from(out.decode.forwards);
        if out.decode.illegal_as_nop {
            self.stats.illegal_as_nop += 1;
        }
        if out.fetch.squashed {
            self.stats.squashed += 1;
        }
        if self.stall {
            self.stats.stall_cycles += 1;
        }

        if self.trace {
            let slot = |empty: bool| if empty { "bubble" } else { "valid" };
            trace!(
                "[Cycle {:>6}] next pc={:#06x} ({:?}) IF/ID={} ID/EX={}",
                self.stats.cycles,
                self.arch.pc,
                out.fetch.update,
                slot(self.if_id.is_empty()),
                slot(self.id_ex.is_empty())
            );
        }
    }

    /// Advances the whole pipeline by one clock cycle.
    ///
    /// # Errors
    ///
    /// Returns the first stage error; the CPU state is unchanged in that case.
    pub fn tick(&mut self) -> Result<CycleOutputs, SimError> {
        let out = self.evaluate()?;
        self.commit(&out);
        Ok(out)
    }
}

//! Data Hazard Forwarding.
//!
//! This module resolves Read-After-Write (RAW) hazards between the instruction
//! in Decode and the instruction in Execute. It provides:
//! 1. **Operand Forwarding:** Bypasses the register file with the ALU result
//!    Execute is producing in the same cycle.
//! 2. **Source Reporting:** Tells the caller where each operand came from, for
//!    statistics and trace output.
//!
//! Execute writes back in the same cycle it computes, so the instruction in
//! Execute is the only producer whose result can still be uncommitted. A
//! single bypass level is therefore complete; there is no load-use stall.

use crate::core::arch::Gpr;
use crate::core::pipeline::stages::execute::ExecuteOutput;

/// Where a resolved operand value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandSource {
    /// Read from the committed register file.
    RegFile,
    /// Bypassed from this cycle's Execute result.
    Execute,
}

/// Resolves the value of source register `src` for the instruction in Decode.
///
/// # Arguments
///
/// * `src` - Source register index.
/// * `regs` - Register file as committed at the start of the cycle.
/// * `ex` - Combinational outputs of the Execute stage in this cycle.
///
/// # Returns
///
/// The operand value and the source it was taken from.
///
/// # Examples
///
/// ```
/// use pipe3_core::core::arch::Gpr;
/// use pipe3_core::core::pipeline::hazards::{forward_operand, OperandSource};
/// use pipe3_core::core::pipeline::stages::execute::ExecuteOutput;
///
/// let regs = Gpr::with_values(&[0, 5], false);
/// let ex = ExecuteOutput { rd: Some(1), alu_result: 42, ..Default::default() };
/// assert_eq!(forward_operand(1, &regs, &ex), (42, OperandSource::Execute));
/// assert_eq!(forward_operand(0, &regs, &ex), (0, OperandSource::RegFile));
/// ```
pub fn forward_operand(src: u8, regs: &Gpr, ex: &ExecuteOutput) -> (u16, OperandSource) {
    let reserved = regs.hardwired_zero() && src == 0;
    match ex.rd {
        Some(rd) if rd == src && !reserved => (ex.alu_result, OperandSource::Execute),
        _ => (regs.read(src as usize), OperandSource::RegFile),
    }
}

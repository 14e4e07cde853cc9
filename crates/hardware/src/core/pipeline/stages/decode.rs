//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Decoding:** Converts the raw 16-bit word into a structured instruction.
//! 2. **Control Generation:** Derives `is_branch`, `reg_write`, the destination and the ALU op.
//! 3. **Operand Resolution:** Reads `rs1`/`rs2`, bypassing the register file with
//!    the result Execute produces in the same cycle.
//! 4. **Jump Setup:** Routes the instruction's own fetch PC and immediate to the
//!    adder so Execute computes the jump target.
//!
//! Decode resolves a jump one cycle before its target is known, and Fetch only
//! squashes the slot it is filling when Execute redirects. The instruction that
//! follows a jump is therefore already in Decode when the jump executes and
//! always runs: a one-instruction branch delay slot.

use tracing::{debug, trace};

use crate::common::error::SimError;
use crate::config::IllegalOpcodePolicy;
use crate::core::arch::Gpr;
use crate::core::pipeline::hazards::{OperandSource, forward_operand};
use crate::core::pipeline::latches::{IdEx, IdExEntry, IfId};
use crate::core::pipeline::signals::{ControlSignals, OpASrc, OpBSrc};
use crate::core::pipeline::stages::execute::ExecuteOutput;
use crate::isa::decode::decode as instruction_decode;
use crate::isa::instruction::Instruction;

/// Result of the decode stage for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeOutput {
    /// Next value of the ID/EX latch.
    pub id_ex: IdEx,
    /// Number of operands bypassed from Execute (0-2).
    pub forwards: u8,
    /// The word had a reserved opcode and was converted to a NOP.
    pub illegal_as_nop: bool,
}

/// Executes the instruction decode stage.
///
/// # Arguments
///
/// * `if_id` - The IF/ID latch as it stands at the start of the cycle.
/// * `regs` - The register file before this cycle's write-back.
/// * `ex` - This cycle's Execute outputs, used for forwarding.
/// * `policy` - Handling of reserved opcodes.
/// * `trace` - Emit trace events.
///
/// # Errors
///
/// Returns [`SimError::Decode`] if the latched word has a reserved opcode and
/// `policy` is [`IllegalOpcodePolicy::Fault`].
pub fn decode_stage(
    if_id: &IfId,
    regs: &Gpr,
    ex: &ExecuteOutput,
    policy: IllegalOpcodePolicy,
    trace: bool,
) -> Result<DecodeOutput, SimError> {
    let Some(entry) = if_id.entry else {
        if trace {
            trace!("ID  (bubble)");
        }
        return Ok(DecodeOutput::default());
    };

    let mut illegal_as_nop = false;
    let inst = match instruction_decode(entry.inst) {
        Ok(inst) => inst,
        Err(source) => match policy {
            IllegalOpcodePolicy::Fault => {
                return Err(SimError::Decode {
                    pc: entry.pc,
                    source,
                });
            }
            IllegalOpcodePolicy::Nop => {
                debug!(pc = entry.pc, %source, "illegal opcode treated as NOP");
                illegal_as_nop = true;
                Instruction::Nop
            }
        },
    };

    let ctrl = ControlSignals::for_instruction(&inst);
    let (rs1, rs2, imm) = match inst {
        Instruction::RegOp { rs1, rs2, .. } => (rs1, rs2, 0),
        Instruction::Jump { imm } => (0, 0, imm),
        Instruction::Nop => (0, 0, 0),
    };

    let mut forwards = 0;
    let mut read_reg = |name: &str, reg: u8| {
        let (val, src) = forward_operand(reg, regs, ex);
        if src == OperandSource::Execute {
            forwards += 1;
            if trace {
                debug!(
                    "[Forward] pc={:#06x} {name}=r{reg} val={val:#06x} source=EX",
                    entry.pc
                );
            }
        }
        val
    };

    let in1 = match ctrl.a_src {
        OpASrc::Reg1 => read_reg("rs1", rs1),
        OpASrc::Pc => entry.pc,
        OpASrc::Zero => 0,
    };
    let in2 = match ctrl.b_src {
        OpBSrc::Reg2 => read_reg("rs2", rs2),
        OpBSrc::Imm => imm as u16,
        OpBSrc::Zero => 0,
    };

    if trace {
        trace!("ID  pc={:#06x} inst={:#06x} {inst}", entry.pc, entry.inst);
    }

    Ok(DecodeOutput {
        id_ex: IdEx {
            entry: Some(IdExEntry {
                pc: entry.pc,
                inst: entry.inst,
                rd: inst.dest(),
                in1,
                in2,
                ctrl,
            }),
        },
        forwards,
        illegal_as_nop,
    })
}

//! Instruction Decoder.
//!
//! This module maps a raw 16-bit instruction word onto the structured
//! [`Instruction`] type. Decoding is a pure function of the word: the same
//! word always yields the same result, and nothing outside the word is read.

use crate::common::error::DecodeError;
use crate::core::pipeline::signals::AluOp;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::opcodes;

/// Decodes a 16-bit instruction word.
///
/// Register fields are extracted verbatim; the `JUMP` immediate is
/// sign-extended from 12 bits. Any bits not used by the selected format
/// (the low 12 bits of a `NOP`) are ignored.
///
/// # Arguments
///
/// * `inst` - The 16-bit instruction encoding to decode
///
/// # Errors
///
/// Returns [`DecodeError::UnrecognizedOpcode`] for the reserved opcodes
/// `0x7`-`0xF`.
pub fn decode(inst: u16) -> Result<Instruction, DecodeError> {
    let opcode = inst.opcode();

    if opcode == opcodes::OP_NOP {
        return Ok(Instruction::Nop);
    }
    if opcode == opcodes::OP_JUMP {
        return Ok(Instruction::Jump { imm: inst.imm12() });
    }

    let op = AluOp::from_opcode(opcode)
        .ok_or(DecodeError::UnrecognizedOpcode { opcode, word: inst })?;

    Ok(Instruction::RegOp {
        op,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
    })
}

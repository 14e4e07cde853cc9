//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the 16-bit instruction word and the structured
//! [`Instruction`] type produced by the decoder.
//!
//! Layout: `op[15:12] | rd[11:8] | rs2[7:4] | rs1[3:0]` for register operations,
//! `op[15:12] | imm[11:0]` for `JUMP`.

use crate::common::constants::{
    IMM_BITS, IMM_MASK, OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT, REG_MASK, RS1_SHIFT, RS2_SHIFT,
};
use crate::core::pipeline::signals::AluOp;
use crate::isa::opcodes;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the 4-bit opcode field (bits 12-15).
    fn opcode(&self) -> u8;

    /// Extracts the destination register field (bits 8-11).
    fn rd(&self) -> u8;

    /// Extracts the second source register field (bits 4-7).
    fn rs2(&self) -> u8;

    /// Extracts the first source register field (bits 0-3).
    fn rs1(&self) -> u8;

    /// Extracts the 12-bit jump immediate (bits 0-11) and sign-extends it to 16 bits.
    fn imm12(&self) -> i16;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        ((self >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn rd(&self) -> u8 {
        ((self >> RD_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rs2(&self) -> u8 {
        ((self >> RS2_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rs1(&self) -> u8 {
        ((self >> RS1_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn imm12(&self) -> i16 {
        // Shift the 12-bit field to the top, then arithmetic-shift back down.
        let unused = 16 - IMM_BITS;
        (((self & IMM_MASK) << unused) as i16) >> unused
    }
}

/// A decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// No architectural effect.
    Nop,
    /// Register-register ALU operation: `rd <- rs1 op rs2`.
    RegOp {
        /// ALU operation.
        op: AluOp,
        /// Destination register.
        rd: u8,
        /// First source register.
        rs1: u8,
        /// Second source register.
        rs2: u8,
    },
    /// Unconditional jump: `pc <- fetch_pc + imm`.
    Jump {
        /// Sign-extended 12-bit offset.
        imm: i16,
    },
}

impl Instruction {
    /// Encodes the instruction back into its 16-bit word.
    ///
    /// Register fields are truncated to 4 bits and the jump immediate to 12
    /// bits, so `decode(encode(i)) == i` whenever every field is in range.
    pub fn encode(&self) -> u16 {
        match *self {
            Self::Nop => u16::from(opcodes::OP_NOP) << OPCODE_SHIFT,
            Self::RegOp { op, rd, rs1, rs2 } => {
                u16::from(op.opcode()) << OPCODE_SHIFT
                    | (u16::from(rd) & REG_MASK) << RD_SHIFT
                    | (u16::from(rs2) & REG_MASK) << RS2_SHIFT
                    | (u16::from(rs1) & REG_MASK) << RS1_SHIFT
            }
            Self::Jump { imm } => {
                u16::from(opcodes::OP_JUMP) << OPCODE_SHIFT | (imm as u16 & IMM_MASK)
            }
        }
    }

    /// True for control-transfer instructions.
    pub const fn is_branch(&self) -> bool {
        matches!(self, Self::Jump { .. })
    }

    /// True if the instruction writes the register file.
    pub const fn writes_register(&self) -> bool {
        matches!(self, Self::RegOp { .. })
    }

    /// Destination register, if the instruction writes one.
    pub const fn dest(&self) -> Option<u8> {
        match self {
            Self::RegOp { rd, .. } => Some(*rd),
            Self::Nop | Self::Jump { .. } => None,
        }
    }
}

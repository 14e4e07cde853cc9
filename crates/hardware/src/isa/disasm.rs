//! Instruction Disassembler.
//!
//! Converts a 16-bit instruction encoding into a human-readable mnemonic
//! string for trace logging, CLI listings and test diagnostics. The operand
//! order is `rd, rs1, rs2`.
//!
//! # Usage
//!
//! ```
//! use pipe3_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x1312), "ADD r3, r2, r1");
//! assert_eq!(disassemble(0x6ffe), "JUMP -2");
//! ```

use std::fmt;

use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;

/// Disassembles a 16-bit instruction into a human-readable string.
///
/// Returns `"unknown (0x....)"` for words with a reserved opcode.
pub fn disassemble(inst: u16) -> String {
    decode(inst).map_or_else(|_| format!("unknown ({inst:#06x})"), |d| d.to_string())
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nop => f.write_str("NOP"),
            Self::RegOp { op, rd, rs1, rs2 } => {
                write!(f, "{} r{rd}, r{rs1}, r{rs2}", op.mnemonic())
            }
            Self::Jump { imm } => write!(f, "JUMP {imm:+}"),
        }
    }
}

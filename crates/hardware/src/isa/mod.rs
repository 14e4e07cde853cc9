//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, the structured instruction type, the decoder and
//! a disassembler for the 16-bit ALU instruction set (`ADD`, `SUB`, `XOR`,
//! `AND`, `OR`, `JUMP` and `NOP`).

/// Instruction decoding logic.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Major opcode values.
pub mod opcodes;

pub use decode::decode;
pub use instruction::{Instruction, InstructionBits};

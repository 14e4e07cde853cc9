//! Global Core Constants.
//!
//! This module defines constants shared across the core. It includes:
//! 1. **Datapath Constants:** Word width and register file geometry.
//! 2. **Instruction Constants:** Field masks and shifts for the 16-bit encoding.
//! 3. **Memory Constants:** Instruction memory sizing.

/// Width of the datapath, the PC and every instruction word, in bits.
pub const WORD_BITS: u32 = 16;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 16;

/// Default instruction memory size in words (the full 16-bit address space).
pub const IMEM_WORDS: usize = 1 << WORD_BITS;

/// Bit position shift for the opcode field.
pub const OPCODE_SHIFT: u16 = 12;

/// Bit mask for the 4-bit opcode field (after shifting).
pub const OPCODE_MASK: u16 = 0xF;

/// Bit position shift for the destination register (rd) field.
pub const RD_SHIFT: u16 = 8;

/// Bit position shift for the second source register (rs2) field.
pub const RS2_SHIFT: u16 = 4;

/// Bit position shift for the first source register (rs1) field.
pub const RS1_SHIFT: u16 = 0;

/// Bit mask for any 4-bit register index field (after shifting).
pub const REG_MASK: u16 = 0xF;

/// Bit mask for the 12-bit JUMP immediate.
pub const IMM_MASK: u16 = 0x0FFF;

/// Width of the JUMP immediate before sign extension.
pub const IMM_BITS: u32 = 12;

/// Canonical NOP encoding.
pub const INSTRUCTION_NOP: u16 = 0x0000;

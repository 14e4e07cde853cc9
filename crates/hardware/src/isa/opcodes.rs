//! Major opcodes (bits 15-12) of the 16-bit instruction encoding.

/// No operation.
pub const OP_NOP: u8 = 0x0;

/// `rd <- rs1 + rs2` (wrapping).
pub const OP_ADD: u8 = 0x1;

/// `rd <- rs1 - rs2` (wrapping).
pub const OP_SUB: u8 = 0x2;

/// `rd <- rs1 ^ rs2`.
pub const OP_XOR: u8 = 0x3;

/// `rd <- rs1 & rs2`.
pub const OP_AND: u8 = 0x4;

/// `rd <- rs1 | rs2`.
pub const OP_OR: u8 = 0x5;

/// Unconditional PC-relative jump: `pc <- pc + sext(imm12)`.
pub const OP_JUMP: u8 = 0x6;

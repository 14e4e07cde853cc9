//! ALU logical operations.
//!
//! Implements bitwise XOR, AND and OR on the full 16-bit word.

use crate::core::pipeline::signals::AluOp;

/// Executes a logical operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The 16-bit result. Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: u16, b: u16) -> u16 {
    match op {
        AluOp::Xor => a ^ b,
        AluOp::And => a & b,
        AluOp::Or => a | b,
        _ => 0,
    }
}

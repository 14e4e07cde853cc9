//! ALU arithmetic operations.
//!
//! Addition and subtraction wrap modulo 2^16; overflow is never a fault.

use crate::core::pipeline::signals::AluOp;

/// Executes an arithmetic operation.
///
/// Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: u16, b: u16) -> u16 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}

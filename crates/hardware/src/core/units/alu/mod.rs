//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 16-bit ALU used in the Execute stage. Branch
//! targets are computed on the same adder as `ADD`, so both share one
//! wraparound rule.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Xor, And, Or

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical operations (xor, and, or).
pub mod logic;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for 16-bit integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand
    ///
    /// # Returns
    ///
    /// The 16-bit result, modulo 2^16 for arithmetic operations.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipe3_core::core::units::alu::Alu;
    /// use pipe3_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 40, 2), 42);
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF, 0xFFFF), 0xFFFE);
    /// assert_eq!(Alu::execute(AluOp::Sub, 0, 1), 0xFFFF);
    /// assert_eq!(Alu::execute(AluOp::Xor, 0b1100, 0b1010), 0b0110);
    /// ```
    pub const fn execute(op: AluOp, a: u16, b: u16) -> u16 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Xor | AluOp::And | AluOp::Or => logic::execute(op, a, b),
        }
    }
}

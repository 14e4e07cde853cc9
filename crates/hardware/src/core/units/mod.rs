//! Execution units and functional components.
//!
//! The core has a single functional unit: the 16-bit ALU, shared by register
//! operations and jump-target computation.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

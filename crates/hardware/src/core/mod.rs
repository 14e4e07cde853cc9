//! Core processor implementation.
//!
//! This module contains the main CPU implementation including the instruction
//! pipeline, the ALU, and the architectural state.

/// Architectural state (PC, register file, instruction memory).
pub mod arch;

/// CPU core implementation and cycle evaluation.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, signals).
pub mod pipeline;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;

//! Architectural state.
//!
//! This module contains the programmer-visible state of the core:
//! 1. **GPRs:** The 16-entry, 16-bit general-purpose register file.
//! 2. **Instruction Memory:** The word-addressed program store.
//! 3. **`ArchState`:** The bundle of PC, register file and instruction memory
//!    owned by the CPU and threaded explicitly through every cycle.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Instruction memory implementation.
pub mod imem;

pub use gpr::Gpr;
pub use imem::InstructionMemory;

use crate::config::Config;

/// Program counter, register file and instruction memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchState {
    /// Address of the next instruction to fetch.
    pub pc: u16,
    /// General-purpose registers.
    pub gpr: Gpr,
    /// Program store, addressed by `pc`.
    pub imem: InstructionMemory,
}

impl ArchState {
    /// Builds the reset state described by `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            pc: config.general.start_pc,
            gpr: Gpr::with_values(&config.registers.initial, config.pipeline.hardwired_zero),
            imem: InstructionMemory::new(config.memory.imem_size),
        }
    }
}

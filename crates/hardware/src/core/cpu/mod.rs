//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It holds:
//! 1. **Architectural State:** PC, register file and instruction memory.
//! 2. **Pipeline State:** The IF/ID and ID/EX latches.
//! 3. **Inputs:** The externally driven stall signal.
//! 4. **Observability:** Trace flag and performance statistics.

/// Cycle evaluation and commit.
pub mod execution;

use crate::config::{Config, IllegalOpcodePolicy};
use crate::core::arch::ArchState;
use crate::core::pipeline::latches::{IdEx, IfId};
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// PC, register file and instruction memory.
    pub arch: ArchState,
    /// IF/ID Latch.
    pub if_id: IfId,
    /// ID/EX Latch.
    pub id_ex: IdEx,
    /// External stall input, sampled on every cycle.
    pub stall: bool,
    /// Reserved-opcode handling in Decode.
    pub illegal_opcode: IllegalOpcodePolicy,
    /// Enable per-stage trace events.
    pub trace: bool,
    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU in its reset state: PC at `start_pc`, both latches empty.
    pub fn new(config: &Config) -> Self {
        Self {
            arch: ArchState::new(config),
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            stall: false,
            illegal_opcode: config.pipeline.illegal_opcode,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
        }
    }
}

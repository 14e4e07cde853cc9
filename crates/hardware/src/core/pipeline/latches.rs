//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the two pipeline registers of the core:
//! Fetch → (IF/ID) → Decode → (ID/EX) → Execute/Write-back.
//!
//! 1. **Instruction Flow:** Each latch holds at most one instruction.
//! 2. **Bubbles:** An empty latch is a NOP; squashed and stalled slots are empty.

use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::traits::PipelineLatch;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// PC the instruction was fetched from.
    pub pc: u16,
    /// Raw 16-bit instruction encoding.
    pub inst: u16,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
///
/// Operands are fully resolved: forwarding already happened in Decode, so
/// Execute never looks at the register file.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Fetch-time PC of the instruction.
    pub pc: u16,
    /// Raw 16-bit instruction encoding.
    pub inst: u16,
    /// Destination register, `None` for instructions that write nothing.
    pub rd: Option<u8>,
    /// Resolved ALU operand A.
    pub in1: u16,
    /// Resolved ALU operand B.
    pub in2: u16,
    /// Control signals for the Execute stage.
    pub ctrl: ControlSignals,
}

/// IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfId {
    /// The fetched instruction, or `None` for a bubble.
    pub entry: Option<IfIdEntry>,
}

/// ID/EX pipeline latch (Decode to Execute stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdEx {
    /// The decoded instruction, or `None` for a bubble.
    pub entry: Option<IdExEntry>,
}

impl PipelineLatch for IfId {
    fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}

impl PipelineLatch for IdEx {
    fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}

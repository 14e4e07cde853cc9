//! Instruction Memory.
//!
//! Read-only (from the core's point of view) word-addressed storage for the
//! program. Contents are supplied by the driver through [`InstructionMemory::load`];
//! unwritten words hold the canonical NOP encoding.

use crate::common::constants::{IMEM_WORDS, INSTRUCTION_NOP};
use crate::common::error::SimError;

/// Word-addressed instruction memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionMemory {
    words: Vec<u16>,
}

impl InstructionMemory {
    /// Creates an instruction memory of `size` words filled with NOPs.
    ///
    /// `size` is clamped to the 16-bit address space.
    pub fn new(size: usize) -> Self {
        Self {
            words: vec![INSTRUCTION_NOP; size.min(IMEM_WORDS)],
        }
    }

    /// Size of the memory in words.
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the memory holds no words at all.
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Loads a program starting at address 0.
    ///
    /// Words beyond the program keep their previous contents. The memory is left
    /// untouched if the program does not fit.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRangeAddress`] naming the first address past the
    /// end of memory when `program` is longer than the memory.
    pub fn load(&mut self, program: &[u16]) -> Result<(), SimError> {
        if program.len() > self.words.len() {
            return Err(SimError::OutOfRangeAddress {
                addr: self.words.len(),
                size: self.words.len(),
            });
        }
        self.words[..program.len()].copy_from_slice(program);
        Ok(())
    }

    /// Reads the word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRangeAddress`] if `addr` is beyond the memory.
    pub fn read(&self, addr: u16) -> Result<u16, SimError> {
        self.words
            .get(addr as usize)
            .copied()
            .ok_or(SimError::OutOfRangeAddress {
                addr: addr as usize,
                size: self.words.len(),
            })
    }
}

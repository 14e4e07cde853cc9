//! Error definitions.
//!
//! This module defines the error types reported by the core. It provides:
//! 1. **Decode Errors:** Words whose opcode field names no operation.
//! 2. **Simulation Errors:** Fatal integration errors surfaced through the driver interface.
//!
//! There is no architectural exception mechanism: every error here aborts the
//! current `step()` and is reported to whoever owns the clock. Register indices
//! outside the register file are construction bugs and panic instead.

use thiserror::Error;

/// Failure to decode a 16-bit instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The opcode field holds a reserved value.
    #[error("unrecognized opcode {opcode:#x} in instruction word {word:#06x}")]
    UnrecognizedOpcode {
        /// The 4-bit opcode field.
        opcode: u8,
        /// The complete instruction word.
        word: u16,
    },
}

/// Fatal errors reported by the driver interface.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// The decode stage met an unrecognized opcode under the `Fault` policy.
    #[error("decode error at pc {pc:#06x}: {source}")]
    Decode {
        /// Fetch-time PC of the offending instruction.
        pc: u16,
        /// Underlying decoder failure.
        #[source]
        source: DecodeError,
    },

    /// A fetch or program load touched an address beyond instruction memory.
    #[error("address {addr:#x} is outside instruction memory ({size} words)")]
    OutOfRangeAddress {
        /// The offending word address.
        addr: usize,
        /// Configured instruction memory size in words.
        size: usize,
    },

    /// The configuration is internally inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

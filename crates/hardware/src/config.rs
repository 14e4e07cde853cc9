//! Configuration system for the pipeline model.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the core. It provides:
//! 1. **Defaults:** Baseline constants (reset PC, memory size, register policy).
//! 2. **Structures:** Hierarchical config for general, memory, pipeline and register settings.
//! 3. **Enums:** The policy applied to unrecognized opcodes.
//!
//! Configuration is supplied as JSON (see [`Config::from_json`]) or built with `Config::default()`.

use serde::Deserialize;

use crate::common::constants::{IMEM_WORDS, NUM_REGS};
use crate::common::error::SimError;

/// Default configuration constants for the core.
mod defaults {
    /// PC value after reset.
    pub const START_PC: u16 = 0;

    /// Instruction memory size in words (the full 16-bit address space).
    pub const IMEM_SIZE: usize = crate::common::constants::IMEM_WORDS;
}

/// What the decode stage does with a word whose opcode is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum IllegalOpcodePolicy {
    /// Abort the cycle and report a decode error to the driver (default).
    #[default]
    Fault,
    /// Treat the word as an architectural NOP.
    Nop,
}

/// Root configuration structure.
///
/// Every section may be omitted from the JSON input; missing sections and
/// fields take their defaults.
///
/// # Examples
///
/// ```
/// use pipe3_core::config::{Config, IllegalOpcodePolicy};
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "memory": { "imem_size": 256 },
///     "pipeline": { "hardwired_zero": true, "illegal_opcode": "Nop" },
///     "registers": { "initial": [0, 1, 2, 3] }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.memory.imem_size, 256);
/// assert_eq!(config.pipeline.illegal_opcode, IllegalOpcodePolicy::Nop);
/// assert_eq!(config.registers.initial[3], 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation settings.
    pub general: GeneralConfig,
    /// Instruction memory configuration.
    pub memory: MemoryConfig,
    /// Pipeline behavior configuration.
    pub pipeline: PipelineConfig,
    /// Register file reset values.
    pub registers: RegisterConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if the text is not valid JSON for
    /// this structure or fails [`Config::validate`].
    pub fn from_json(text: &str) -> Result<Self, SimError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| SimError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if the instruction memory size is
    /// zero or exceeds the 16-bit address space, if more than sixteen initial
    /// register values are given, or if the start PC lies outside memory.
    pub fn validate(&self) -> Result<(), SimError> {
        let size = self.memory.imem_size;
        if size == 0 || size > IMEM_WORDS {
            return Err(SimError::InvalidConfig(format!(
                "imem_size must be in 1..={IMEM_WORDS}, got {size}"
            )));
        }
        if self.registers.initial.len() > NUM_REGS {
            return Err(SimError::InvalidConfig(format!(
                "at most {NUM_REGS} initial register values, got {}",
                self.registers.initial.len()
            )));
        }
        if self.general.start_pc as usize >= size {
            return Err(SimError::InvalidConfig(format!(
                "start_pc {:#06x} is outside instruction memory ({size} words)",
                self.general.start_pc
            )));
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit per-stage trace events through `tracing`.
    #[serde(default)]
    pub trace_instructions: bool,

    /// PC value after reset.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u16,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u16 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
        }
    }
}

/// Instruction memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Instruction memory size in words.
    #[serde(default = "MemoryConfig::default_imem_size")]
    pub imem_size: usize,
}

impl MemoryConfig {
    /// Returns the default instruction memory size.
    const fn default_imem_size() -> usize {
        defaults::IMEM_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            imem_size: defaults::IMEM_SIZE,
        }
    }
}

/// Pipeline behavior configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    /// Reserve `r0` as a constant zero (reads 0, ignores writes, never forwarded).
    #[serde(default)]
    pub hardwired_zero: bool,

    /// Handling of reserved opcodes in the decode stage.
    #[serde(default)]
    pub illegal_opcode: IllegalOpcodePolicy,
}

/// Register file reset values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterConfig {
    /// Values for `r0`, `r1`, ... in order; unspecified registers reset to zero.
    #[serde(default)]
    pub initial: Vec<u16>,
}

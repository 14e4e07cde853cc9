//! Simulator: the driver-facing wrapper around the CPU.
//!
//! The clock is owned by an external collaborator (a test, the CLI, a script).
//! It loads a program, injects the stall signal, advances the core one cycle at
//! a time, and inspects registers and the PC.

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::execution::CycleOutputs;
use crate::stats::SimStats;

/// Top-level simulator.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural and pipeline state.
    pub cpu: Cpu,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Simulator {
    /// Creates a simulator in its reset state.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
        }
    }

    /// Creates a simulator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if [`Config::validate`] fails.
    pub fn try_new(config: &Config) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Loads `words` into instruction memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRangeAddress`] if the program does not fit.
    pub fn load_program(&mut self, words: &[u16]) -> Result<(), SimError> {
        self.cpu.arch.imem.load(words)
    }

    /// Advances all stages by one clock cycle.
    ///
    /// # Errors
    ///
    /// Returns the first stage error. The processor state is left unchanged
    /// and the same error recurs on the next call.
    pub fn step(&mut self) -> Result<(), SimError> {
        self.cpu.tick().map(|_| ())
    }

    /// Advances one cycle and returns the combinational outputs of every stage.
    ///
    /// # Errors
    ///
    /// Same as [`Simulator::step`].
    pub fn step_traced(&mut self) -> Result<CycleOutputs, SimError> {
        self.cpu.tick()
    }

    /// Runs `cycles` cycles, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Same as [`Simulator::step`].
    pub fn run(&mut self, cycles: u64) -> Result<(), SimError> {
        for _ in 0..cycles {
            self.step()?;
        }
        Ok(())
    }

    /// Reads a register.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 16 or more.
    pub fn read_register(&self, index: usize) -> u16 {
        self.cpu.arch.gpr.read(index)
    }

    /// Reads the program counter (the address of the next fetch).
    pub const fn read_pc(&self) -> u16 {
        self.cpu.arch.pc
    }

    /// Drives the external stall input for subsequent cycles.
    pub const fn set_stall(&mut self, stall: bool) {
        self.cpu.stall = stall;
    }

    /// Enables or disables per-stage trace events.
    pub const fn set_trace(&mut self, trace: bool) {
        self.cpu.trace = trace;
    }

    /// Performance statistics gathered so far.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Renders the register file, four registers per line.
    pub fn dump_registers(&self) -> String {
        self.cpu.arch.gpr.to_string()
    }
}

//! Cycle-accurate model of a 3-stage pipelined 16-bit ALU core.
//!
//! This crate implements the following:
//! 1. **Core:** Fetch, Decode (with same-cycle forwarding) and Execute/Write-back stages,
//!    the register file, PC and instruction memory.
//! 2. **ISA:** Decoding, encoding and disassembly of the 16-bit instruction set
//!    (`ADD`, `SUB`, `XOR`, `AND`, `OR`, `JUMP`, `NOP`).
//! 3. **Simulation:** The clock-owner interface, configuration and statistics.
//!
//! Every `JUMP` has one delay slot: the instruction after it always executes.

/// Common types and constants (errors, field layout).
pub mod common;
/// Simulator configuration (defaults, policies, JSON loading).
pub mod config;
/// CPU core (pipeline, architectural state, ALU).
pub mod core;
/// Instruction set (decode, encode, disassembly).
pub mod isa;
/// Driver interface.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or [`Config::from_json`].
pub use crate::config::Config;
/// Main CPU type; holds architectural state, latches and stats.
pub use crate::core::Cpu;
/// Driver-facing simulator wrapping a [`Cpu`].
pub use crate::sim::Simulator;

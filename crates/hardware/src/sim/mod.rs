//! Simulation driver.
//!
//! Provides the interface consumed by whoever owns the clock: program loading,
//! cycle stepping, stall injection and state inspection.

/// Driver-facing simulator.
pub mod simulator;

pub use simulator::Simulator;

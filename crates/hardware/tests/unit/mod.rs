//! # Unit Components
//!
//! This module serves as the central hub for the tests of the core's building
//! blocks: shared types, configuration, the processor core, the ISA layer,
//! the simulator driver and statistics.

//! Common utilities and types used throughout the pipeline model.
//!
//! This module provides fundamental building blocks that are shared across all
//! components of the core. It includes:
//! 1. **Constants:** Datapath width, register count and instruction field layout.
//! 2. **Error Handling:** Decode and simulation error types.

/// Common constants used throughout the core.
pub mod constants;

/// Error types.
pub mod error;

pub use error::{DecodeError, SimError};

//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the three-stage instruction pipeline.
//! It includes the following components:
//! 1. **Hazards:** Same-cycle operand forwarding from Execute to Decode.
//! 2. **Latches:** Inter-stage buffers (IF/ID, ID/EX).
//! 3. **Signals:** Control signals generated during instruction decoding.
//! 4. **Stages:** Implementation of Fetch, Decode and Execute/Write-back.
//! 5. **Traits:** Common interface for pipeline latches.

/// Pipeline operand forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute).
pub mod stages;

/// Traits for pipeline components.
pub mod traits;

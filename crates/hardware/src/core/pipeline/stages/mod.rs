//! Pipeline stage implementations.
//!
//! This module contains the three stages of the instruction pipeline. Each is
//! a pure function from the current latch contents (plus same-cycle Execute
//! outputs) to that stage's next-state contribution:
//! 1. **Fetch:** Reads instruction memory at the PC, squashes on redirect, updates the PC.
//! 2. **Decode:** Decodes, generates control signals and resolves operands with forwarding.
//! 3. **Execute:** Performs the ALU operation, resolves jumps and requests the write-back.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute / write-back stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;

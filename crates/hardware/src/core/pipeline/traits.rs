//! Pipeline Latch Interface.
//!
//! Common behavior of the inter-stage buffers.

/// Represents a pipeline latch (inter-stage buffer).
///
/// Latches hold the state of instructions as they move between stages. An
/// empty latch behaves as a NOP in the stage that reads it.
pub trait PipelineLatch {
    /// Checks if the latch is empty.
    ///
    /// # Returns
    ///
    /// `true` if there is no valid instruction in the latch, `false` otherwise.
    fn is_empty(&self) -> bool;
}

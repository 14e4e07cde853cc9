

/// Fetch stage and PC update.
pub mod fetch;

/// Shared value types: canvas constants, frame timing, colors, seeded randomness.
pub mod core;
/// Error taxonomy.
pub mod error;
pub(crate) mod math;

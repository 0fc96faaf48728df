/// Font loading, shaping and width measurement.
pub mod layout;
/// Greedy word wrap.
pub mod wrap;

/// Sigil and design generator seams with default implementations.
pub mod collaborators;
/// Normalized path data consumed by the renderers.
pub mod model;

//! Parametric shapes and back-pattern tilings, emitted as draw ops.

/// Back-pattern motifs.
pub mod patterns;
/// Stars, hearts, circles and coordinate mappings.
pub mod shapes;

//! Card composition and rasterization.
//!
//! The face, back and placeholder passes build [`plan::CardScene`] display lists; the CPU
//! rasterizer turns a scene into a premultiplied [`backend::FrameRGBA`].

/// Face-down composition.
pub mod back;
/// Frame buffer and raster settings.
pub mod backend;
/// Gaussian blur used for glows.
pub mod blur;
/// Premultiplied pixel compositing.
pub mod composite;
/// `vello_cpu` rasterizer.
pub mod cpu;
/// Face-up composition.
pub mod face;
/// Placeholder substitution for failed passes.
pub mod guard;
/// Backend-agnostic draw operations.
pub mod plan;

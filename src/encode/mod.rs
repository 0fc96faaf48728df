//! Output for finished cards and overlay animations.
//!
//! Sinks consume frames in increasing index order.

/// MP4 output through a system `ffmpeg`.
pub mod ffmpeg;
/// Still-image PNG export.
pub mod png;
/// Frame sink contract and simple sinks.
pub mod sink;

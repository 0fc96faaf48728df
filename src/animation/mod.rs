//! Animated particle overlay.

/// Particle kinematics and the four mystical effects.
pub mod particles;
/// Session state machine, offline frame rendering and the background task.
pub mod session;

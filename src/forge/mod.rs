//! Card generation.

/// Image oracle seam and prompt composition.
pub mod oracle;
/// Card drawing, sigil generation and fallback handling.
pub mod summon;

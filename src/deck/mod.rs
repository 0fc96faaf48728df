//! Static tarot reference data and color resolution.

/// Major arcana, minor suits and card descriptors.
pub mod card;
/// Historical deck variants.
pub mod catalog;
/// Card color triples.
pub mod colors;

use std::path::PathBuf;

use anyhow::Context as _;

use crate::assets::face_image::FaceImage;
use crate::deck::card::CardDescriptor;
use crate::deck::catalog::DeckVariant;
use crate::foundation::error::TarotResult;

/// Text-to-image collaborator. Failures are recovered by the caller with "no face image".
pub trait ImageOracle: Send + Sync {
    /// Start producing an illustration for `prompt`.
    fn conjure(&self, prompt: &str) -> TarotResult<FaceImage>;
}

/// Serves one local image file for every prompt, decoding it off the calling thread.
#[derive(Clone, Debug)]
pub struct FileOracle {
    path: PathBuf,
}

impl FileOracle {
    /// Oracle reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageOracle for FileOracle {
    fn conjure(&self, prompt: &str) -> TarotResult<FaceImage> {
        tracing::debug!(path = %self.path.display(), prompt, "conjuring face image from file");
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("read face image '{}'", self.path.display()))?;
        Ok(FaceImage::decode_in_background(bytes))
    }
}

/// Prompt handed to the oracle for `card`.
pub fn compose_prompt(card: &CardDescriptor, deck: &DeckVariant, intention: &str) -> String {
    let symbolism = card
        .symbolism
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("mystical symbolism");
    format!(
        "A mystical tarot card image for {}, inspired by {}, with {symbolism}, imbued with the \
         intention: \"{intention}\", ethereal, magical, detailed",
        card.name, deck.name
    )
}

#[cfg(test)]
#[path = "../../tests/unit/forge/oracle.rs"]
mod tests;

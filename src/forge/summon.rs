use std::time::Duration;

use crate::assets::face_image::FaceImage;
use crate::config::ForgeConfig;
use crate::deck::card::{CardDescriptor, MAJOR_ARCANA, MINOR_RANKS, Suit, the_fool};
use crate::deck::colors::{CardColors, resolve_colors};
use crate::forge::oracle::{ImageOracle, compose_prompt};
use crate::foundation::core::Rng64;
use crate::foundation::error::{TarotError, TarotResult};
use crate::sigil::collaborators::{
    CardDesigner, OrnamentDesigner, SeededSigilGenerator, SigilGenerator,
};
use crate::sigil::model::{QualityTier, SigilData};

/// Longest intention kept, in characters.
pub const MAX_INTENTION_CHARS: usize = 200;

const DEFAULT_CATEGORY: &str = "general";
const FALLBACK_CATEGORY: &str = "journey";

/// Which part of the deck to draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArcanaChoice {
    /// One of the 22 major cards.
    Major,
    /// A rank of the given suit.
    Minor(Suit),
}

/// One summon action.
#[derive(Clone, Debug, PartialEq)]
pub struct SummonRequest {
    /// Free-text intention; must be non-empty after trimming.
    pub intention: String,
    /// Arcana to draw from.
    pub arcana: ArcanaChoice,
    /// Deck key; unknown keys render with the default deck.
    pub deck: String,
}

/// How a summon ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummonState {
    /// The requested draw succeeded.
    Complete,
    /// Generation failed and the fallback card was substituted.
    Fallback,
}

/// A finished card with everything needed to render it.
#[derive(Clone, Debug)]
pub struct Summoned {
    /// Drawn card.
    pub card: CardDescriptor,
    /// Sigil derived from the intention.
    pub sigil: SigilData,
    /// Resolved colors.
    pub colors: CardColors,
    /// Face illustration, possibly still decoding.
    pub face_image: Option<FaceImage>,
    /// Outcome.
    pub state: SummonState,
}

/// Card generator tying the catalog to the sigil, design and image collaborators.
pub struct Forge {
    sigils: Box<dyn SigilGenerator>,
    designer: Box<dyn CardDesigner>,
    oracle: Option<Box<dyn ImageOracle>>,
    delay: Duration,
    rng: Rng64,
}

impl std::fmt::Debug for Forge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Forge")
            .field("has_oracle", &self.oracle.is_some())
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

impl Forge {
    /// Forge with the default collaborators, no oracle, and the configured delay and seed.
    pub fn new(cfg: &ForgeConfig) -> Self {
        Self {
            sigils: Box::new(SeededSigilGenerator),
            designer: Box::new(OrnamentDesigner),
            oracle: None,
            delay: Duration::from_millis(cfg.generation_delay_ms),
            rng: cfg.seed.map_or_else(Rng64::from_time, Rng64::new),
        }
    }

    /// Replace the sigil generator.
    pub fn with_sigil_generator(mut self, sigils: impl SigilGenerator + 'static) -> Self {
        self.sigils = Box::new(sigils);
        self
    }

    /// Replace the designer.
    pub fn with_designer(mut self, designer: impl CardDesigner + 'static) -> Self {
        self.designer = Box::new(designer);
        self
    }

    /// Attach an image oracle.
    pub fn with_oracle(mut self, oracle: impl ImageOracle + 'static) -> Self {
        self.oracle = Some(Box::new(oracle));
        self
    }

    /// Override the generation delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Designer used for colors, imagery and ornaments.
    pub fn designer(&self) -> &dyn CardDesigner {
        self.designer.as_ref()
    }

    /// Draw a card for `req`.
    ///
    /// Nothing is published until the delay has elapsed; the result is either the complete card
    /// or the fallback card, never a partial one.
    #[tracing::instrument(skip(self, req), fields(deck = %req.deck, arcana = ?req.arcana))]
    pub fn summon(&mut self, req: &SummonRequest) -> TarotResult<Summoned> {
        let intention = normalize_intention(&req.intention)?;
        std::thread::sleep(self.delay);

        let timestamp_ms = unix_ms();
        let card = self.draw(req.arcana, &req.deck, &intention, timestamp_ms);
        let category = if card.sigil_category.is_empty() {
            DEFAULT_CATEGORY
        } else {
            card.sigil_category.as_str()
        };

        let sigil = match self.sigils.generate(&intention, category, QualityTier::High) {
            Ok(sigil) => sigil,
            Err(e) => {
                tracing::warn!(error = %e, card = %card.name, "sigil generation failed; using fallback card");
                return self.fallback(&req.deck, &intention, timestamp_ms);
            }
        };

        let face_image = self.conjure(&card, &intention);
        let colors = resolve_colors(Some(&card), self.designer.as_ref());
        tracing::info!(card = %card.name, "card summoned");
        Ok(Summoned {
            card,
            sigil,
            colors,
            face_image,
            state: SummonState::Complete,
        })
    }

    fn draw(
        &mut self,
        arcana: ArcanaChoice,
        deck: &str,
        intention: &str,
        timestamp_ms: u64,
    ) -> CardDescriptor {
        match arcana {
            ArcanaChoice::Major => {
                let arcanum = &MAJOR_ARCANA[self.rng.index(MAJOR_ARCANA.len())];
                CardDescriptor::major(arcanum, deck, intention, timestamp_ms)
            }
            ArcanaChoice::Minor(suit) => {
                let rank = MINOR_RANKS[self.rng.index(MINOR_RANKS.len())];
                CardDescriptor::minor(suit, rank, deck, intention, timestamp_ms)
            }
        }
    }

    fn fallback(
        &self,
        deck: &str,
        intention: &str,
        timestamp_ms: u64,
    ) -> TarotResult<Summoned> {
        let card = CardDescriptor::major(the_fool(), deck, intention, timestamp_ms);
        let sigil = self
            .sigils
            .generate(intention, FALLBACK_CATEGORY, QualityTier::Medium)?;
        let colors = resolve_colors(Some(&card), self.designer.as_ref());
        Ok(Summoned {
            card,
            sigil,
            colors,
            face_image: None,
            state: SummonState::Fallback,
        })
    }

    fn conjure(&self, card: &CardDescriptor, intention: &str) -> Option<FaceImage> {
        let oracle = self.oracle.as_ref()?;
        let prompt = compose_prompt(card, card.deck(), intention);
        match oracle.conjure(&prompt) {
            Ok(img) => Some(img),
            Err(e) => {
                tracing::warn!(error = %e, "image oracle failed; continuing without face image");
                None
            }
        }
    }
}

/// Trim and cap an intention; empty input is rejected.
pub fn normalize_intention(raw: &str) -> TarotResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TarotError::validation("intention must not be empty"));
    }
    Ok(trimmed.chars().take(MAX_INTENTION_CHARS).collect())
}

/// Example intentions offered for an arcana choice.
pub fn sample_intentions(arcana: ArcanaChoice) -> &'static [&'static str] {
    match arcana {
        ArcanaChoice::Major => &[
            "Guide me through this major life transition",
            "Show me the spiritual lesson I need to learn",
            "Reveal the deeper meaning behind recent events",
            "Help me understand my soul's journey",
            "What transformation awaits me?",
        ],
        ArcanaChoice::Minor(Suit::Wands) => &[
            "Ignite my creative passion",
            "Show me my spiritual purpose",
            "Guide my ambitious endeavors",
            "Fuel my inner fire",
        ],
        ArcanaChoice::Minor(Suit::Cups) => &[
            "Heal my emotional wounds",
            "Open my heart to love",
            "Deepen my intuitive abilities",
            "Bring harmony to relationships",
        ],
        ArcanaChoice::Minor(Suit::Swords) => &[
            "Cut through mental confusion",
            "Speak my truth with clarity",
            "Resolve this conflict wisely",
            "Find mental breakthrough",
        ],
        ArcanaChoice::Minor(Suit::Pentacles) => &[
            "Manifest material abundance",
            "Ground my spiritual practice",
            "Build lasting prosperity",
            "Achieve practical success",
        ],
    }
}

/// Milliseconds since the unix epoch, 0 if the clock is before it.
pub fn unix_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/unit/forge/summon.rs"]
mod tests;

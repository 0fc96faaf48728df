//! Seams to the sigil and design generators.
//!
//! The renderers only consume normalized path data and colors; how a generator arrives at them
//! is its own business. The default implementations here derive everything from an FNV-1a hash
//! of their inputs, so repeated calls with the same arguments are stable.

use crate::deck::card::CardDescriptor;
use crate::deck::catalog::DeckVariant;
use crate::deck::colors::CardColors;
use crate::foundation::core::{Point, Rng64};
use crate::foundation::error::{TarotError, TarotResult};
use crate::foundation::math::Fnv1a64;
use crate::sigil::model::{CardDesign, NormalizedPath, PathSet, QualityTier, SigilData};

/// Produces a sigil from free text.
pub trait SigilGenerator: Send + Sync {
    /// Generate normalized strokes for `intention` within `category` at `tier`.
    fn generate(
        &self,
        intention: &str,
        category: &str,
        tier: QualityTier,
    ) -> TarotResult<SigilData>;
}

/// Supplies colors, imagery text and decorations for a card.
pub trait CardDesigner: Send + Sync {
    /// Color triple for `card` drawn from `deck`.
    fn colors_for(&self, card: &CardDescriptor, deck: &DeckVariant) -> CardColors;

    /// Descriptive phrase printed under the imagery panel.
    fn imagery_for(&self, card: &CardDescriptor) -> String;

    /// Decorations in normalized full-card space.
    fn design_for(
        &self,
        card: &CardDescriptor,
        intention: &str,
        sigil: Option<&SigilData>,
        variant: &str,
    ) -> CardDesign;
}

/// Deterministic hash-seeded sigil generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeededSigilGenerator;

impl SeededSigilGenerator {
    fn stroke_count(tier: QualityTier) -> usize {
        match tier {
            QualityTier::Low => 2,
            QualityTier::Medium => 3,
            QualityTier::High => 5,
        }
    }
}

impl SigilGenerator for SeededSigilGenerator {
    fn generate(
        &self,
        intention: &str,
        category: &str,
        tier: QualityTier,
    ) -> TarotResult<SigilData> {
        let intention = intention.trim();
        if intention.is_empty() {
            return Err(TarotError::validation("sigil intention must not be empty"));
        }

        let mut h = Fnv1a64::new_default();
        h.write_str(&intention.to_lowercase());
        h.write_str(category);
        h.write_str(tier.as_str());
        let mut rng = Rng64::new(h.finish());

        let paths = (0..Self::stroke_count(tier))
            .map(|_| {
                let points = 3 + rng.index(4);
                (0..points)
                    .map(|_| Point::new(rng.range_f64(0.1, 0.9), rng.range_f64(0.1, 0.9)))
                    .collect::<NormalizedPath>()
            })
            .collect();

        Ok(SigilData::from_paths(paths, tier.as_str()))
    }
}

/// Default designer: deck palette colors, symbolism-based imagery and seeded ornaments.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrnamentDesigner;

impl CardDesigner for OrnamentDesigner {
    fn colors_for(&self, _card: &CardDescriptor, deck: &DeckVariant) -> CardColors {
        CardColors {
            primary: deck.colors[0],
            secondary: deck.colors[1],
            accent: deck.colors[2],
        }
    }

    fn imagery_for(&self, card: &CardDescriptor) -> String {
        match (card.symbolism.as_deref(), card.element.as_deref()) {
            (Some(sym), Some(el)) => format!("{sym}, beneath the sign of {el}"),
            (Some(sym), None) => sym.to_owned(),
            (None, Some(el)) => format!("Mysteries beneath the sign of {el}"),
            (None, None) => "Mysteries veiled beyond the reach of words".to_owned(),
        }
    }

    fn design_for(
        &self,
        card: &CardDescriptor,
        intention: &str,
        sigil: Option<&SigilData>,
        variant: &str,
    ) -> CardDesign {
        let mut h = Fnv1a64::new_default();
        h.write_str(&card.name);
        h.write_str(intention);
        h.write_str(variant);
        h.write_u8(sigil.map_or(0, |s| s.paths.len().min(255) as u8));
        let mut rng = Rng64::new(h.finish());

        // Faint constellation lines inside the imagery panel.
        let background = PathSet {
            paths: (0..6)
                .map(|_| {
                    vec![
                        Point::new(rng.range_f64(0.12, 0.88), rng.range_f64(0.16, 0.76)),
                        Point::new(rng.range_f64(0.12, 0.88), rng.range_f64(0.16, 0.76)),
                    ]
                })
                .collect(),
        };

        // Four diamonds around the sigil.
        let sigil_center = Point::new(0.5, 325.0 / 700.0);
        let symbols = [(-0.36, 0.0), (0.36, 0.0), (0.0, -0.2), (0.0, 0.2)]
            .into_iter()
            .map(|(dx, dy)| {
                let c = Point::new(sigil_center.x + dx, sigil_center.y + dy);
                let s = 0.025 + rng.range_f64(0.0, 0.01);
                PathSet {
                    paths: vec![vec![
                        Point::new(c.x, c.y - s),
                        Point::new(c.x + s, c.y),
                        Point::new(c.x, c.y + s),
                        Point::new(c.x - s, c.y),
                        Point::new(c.x, c.y - s),
                    ]],
                }
            })
            .collect();

        let (ix, iy, arm_x, arm_y) = (0.05, 0.03, 0.08, 0.045);
        let corners = [
            (ix, iy, 1.0, 1.0),
            (1.0 - ix, iy, -1.0, 1.0),
            (ix, 1.0 - iy, 1.0, -1.0),
            (1.0 - ix, 1.0 - iy, -1.0, -1.0),
        ]
        .into_iter()
        .map(|(x, y, sx, sy)| PathSet {
            paths: vec![vec![
                Point::new(x, y + sy * arm_y),
                Point::new(x, y),
                Point::new(x + sx * arm_x, y),
            ]],
        })
        .collect();

        CardDesign {
            background,
            symbols,
            corners,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sigil/collaborators.rs"]
mod tests;

use crate::foundation::core::Rgba8;

/// Closed set of historical deck styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeckKey {
    /// Rider-Waite-Smith, 1909.
    RiderWaite,
    /// Tarot de Marseille, 1650.
    Marseilles,
    /// Thoth Tarot, 1944.
    Thoth,
    /// Visconti-Sforza, 1450.
    Visconti,
}

impl DeckKey {
    /// All deck keys in catalog order.
    pub const ALL: [DeckKey; 4] = [
        DeckKey::RiderWaite,
        DeckKey::Marseilles,
        DeckKey::Thoth,
        DeckKey::Visconti,
    ];

    /// Parse a kebab-case deck key; unknown keys yield `None`.
    pub fn parse(key: &str) -> Option<Self> {
        match key.trim() {
            "rider-waite" => Some(Self::RiderWaite),
            "marseilles" => Some(Self::Marseilles),
            "thoth" => Some(Self::Thoth),
            "visconti" => Some(Self::Visconti),
            _ => None,
        }
    }

    /// Kebab-case key as used in card descriptors.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RiderWaite => "rider-waite",
            Self::Marseilles => "marseilles",
            Self::Thoth => "thoth",
            Self::Visconti => "visconti",
        }
    }

    /// Static catalog entry for this key.
    pub fn variant(self) -> &'static DeckVariant {
        match self {
            Self::RiderWaite => &DECKS[0],
            Self::Marseilles => &DECKS[1],
            Self::Thoth => &DECKS[2],
            Self::Visconti => &DECKS[3],
        }
    }
}

/// Decorative motif drawn when a card is face-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackPattern {
    /// Line grid with diagonal dots.
    CelestialGrid,
    /// Tiled five-point stars.
    Heraldic,
    /// Ring of twelve circles.
    Astrological,
    /// Ring of eight hearts.
    GoldLeaf,
}

impl BackPattern {
    /// Parse a kebab-case pattern name; unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "celestial-grid" => Some(Self::CelestialGrid),
            "heraldic" => Some(Self::Heraldic),
            "astrological" => Some(Self::Astrological),
            "gold-leaf" => Some(Self::GoldLeaf),
            _ => None,
        }
    }
}

/// Per-deck particle force/alpha rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MysticalEffect {
    /// Gravity drift with wrap-around at the bottom edge.
    Starfall,
    /// Radius oscillation.
    AuraPulse,
    /// Radial acceleration around the card center.
    CosmicSwirl,
    /// Alpha oscillation.
    GoldenMist,
}

impl MysticalEffect {
    /// Parse a kebab-case effect name; unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "starfall" => Some(Self::Starfall),
            "aura-pulse" => Some(Self::AuraPulse),
            "cosmic-swirl" => Some(Self::CosmicSwirl),
            "golden-mist" => Some(Self::GoldenMist),
            _ => None,
        }
    }
}

/// A named historical deck style.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckVariant {
    /// Catalog key.
    pub key: DeckKey,
    /// Display name.
    pub name: &'static str,
    /// Year of the historical deck.
    pub year: i32,
    /// One-line description.
    pub description: &'static str,
    /// Visual style tag.
    pub style: &'static str,
    /// Ordered palette, at least four entries.
    pub colors: [Rgba8; 4],
    /// Face-down motif.
    pub back_pattern: BackPattern,
    /// Overlay particle rule.
    pub mystical_effect: MysticalEffect,
}

/// The fixed deck catalog.
pub static DECKS: [DeckVariant; 4] = [
    DeckVariant {
        key: DeckKey::RiderWaite,
        name: "Rider-Waite-Smith",
        year: 1909,
        description: "The most influential modern tarot deck",
        style: "symbolic-pictorial",
        colors: [
            Rgba8::rgb(0x8B, 0x45, 0x13),
            Rgba8::rgb(0xDA, 0xA5, 0x20),
            Rgba8::rgb(0x46, 0x82, 0xB4),
            Rgba8::rgb(0x22, 0x8B, 0x22),
        ],
        back_pattern: BackPattern::CelestialGrid,
        mystical_effect: MysticalEffect::Starfall,
    },
    DeckVariant {
        key: DeckKey::Marseilles,
        name: "Tarot de Marseille",
        year: 1650,
        description: "Classic European tarot tradition",
        style: "medieval-geometric",
        colors: [
            Rgba8::rgb(0xDC, 0x14, 0x3C),
            Rgba8::rgb(0xFF, 0xD7, 0x00),
            Rgba8::rgb(0x41, 0x69, 0xE1),
            Rgba8::rgb(0x22, 0x8B, 0x22),
        ],
        back_pattern: BackPattern::Heraldic,
        mystical_effect: MysticalEffect::AuraPulse,
    },
    DeckVariant {
        key: DeckKey::Thoth,
        name: "Thoth Tarot",
        year: 1944,
        description: "Aleister Crowley's esoteric masterpiece",
        style: "occult-artistic",
        colors: [
            Rgba8::rgb(0x8A, 0x2B, 0xE2),
            Rgba8::rgb(0xFF, 0x63, 0x47),
            Rgba8::rgb(0x40, 0xE0, 0xD0),
            Rgba8::rgb(0x32, 0xCD, 0x32),
        ],
        back_pattern: BackPattern::Astrological,
        mystical_effect: MysticalEffect::CosmicSwirl,
    },
    DeckVariant {
        key: DeckKey::Visconti,
        name: "Visconti-Sforza",
        year: 1450,
        description: "Earliest surviving tarot cards",
        style: "renaissance-court",
        colors: [
            Rgba8::rgb(0xB8, 0x86, 0x0B),
            Rgba8::rgb(0xCD, 0x85, 0x3F),
            Rgba8::rgb(0x46, 0x82, 0xB4),
            Rgba8::rgb(0x80, 0x00, 0x80),
        ],
        back_pattern: BackPattern::GoldLeaf,
        mystical_effect: MysticalEffect::GoldenMist,
    },
];

/// Resolve a deck key string, substituting rider-waite for unknown keys.
pub fn deck_or_default(key: &str) -> &'static DeckVariant {
    DeckKey::parse(key)
        .unwrap_or(DeckKey::RiderWaite)
        .variant()
}

#[cfg(test)]
#[path = "../../tests/unit/deck/catalog.rs"]
mod tests;

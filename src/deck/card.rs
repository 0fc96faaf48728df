use crate::deck::catalog::{DeckKey, DeckVariant, deck_or_default};
use crate::foundation::core::Rgba8;

/// The four suits of the minor arcana.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Fire.
    Wands,
    /// Water.
    Cups,
    /// Air.
    Swords,
    /// Earth.
    Pentacles,
}

impl Suit {
    /// All suits in catalog order.
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    /// Parse a lowercase suit key.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wands" => Some(Self::Wands),
            "cups" => Some(Self::Cups),
            "swords" => Some(Self::Swords),
            "pentacles" => Some(Self::Pentacles),
            _ => None,
        }
    }

    /// Lowercase key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Wands => "wands",
            Self::Cups => "cups",
            Self::Swords => "swords",
            Self::Pentacles => "pentacles",
        }
    }

    /// Capitalized display form.
    pub fn title(self) -> &'static str {
        match self {
            Self::Wands => "Wands",
            Self::Cups => "Cups",
            Self::Swords => "Swords",
            Self::Pentacles => "Pentacles",
        }
    }

    /// Static suit correspondences.
    pub fn info(self) -> &'static SuitInfo {
        match self {
            Self::Wands => &MINOR_SUITS[0],
            Self::Cups => &MINOR_SUITS[1],
            Self::Swords => &MINOR_SUITS[2],
            Self::Pentacles => &MINOR_SUITS[3],
        }
    }
}

/// Which grouping a card belongs to. A suit exists exactly when the card is minor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "suit", rename_all = "lowercase")]
pub enum Arcana {
    /// One of the 22 trumps.
    Major,
    /// A suited card.
    Minor(Suit),
}

/// Card number: an arcanum index for major cards or a rank label for minor ones.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum CardNumber {
    /// Major arcanum `0..=21`.
    Arcanum(u8),
    /// Minor rank such as `Ace`, `7` or `Queen`.
    Rank(String),
}

impl std::fmt::Display for CardNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arcanum(n) => write!(f, "{n}"),
            Self::Rank(r) => f.write_str(r),
        }
    }
}

/// Identifies the card being rendered. Built once per summon and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardDescriptor {
    /// Display name.
    pub name: String,
    /// Arcanum index or rank label.
    pub number: CardNumber,
    /// Major or minor (with suit).
    pub arcana: Arcana,
    /// Elemental / astrological label.
    #[serde(default)]
    pub element: Option<String>,
    /// Comma-separated keyword phrase.
    pub keywords: String,
    /// Descriptive phrase.
    #[serde(default)]
    pub symbolism: Option<String>,
    /// Key handed to the sigil generator.
    pub sigil_category: String,
    /// Deck key; unknown keys render with the default deck.
    pub variant: String,
    /// User intention, at most 200 characters.
    pub intention: String,
    /// Creation instant in unix milliseconds.
    pub timestamp_ms: u64,
}

impl CardDescriptor {
    /// Build a major arcana card.
    pub fn major(
        arcanum: &MajorArcanum,
        variant: impl Into<String>,
        intention: impl Into<String>,
        timestamp_ms: u64,
    ) -> Self {
        Self {
            name: arcanum.name.to_owned(),
            number: CardNumber::Arcanum(arcanum.number),
            arcana: Arcana::Major,
            element: Some(arcanum.element.to_owned()),
            keywords: arcanum.keywords.to_owned(),
            symbolism: Some(arcanum.symbolism.to_owned()),
            sigil_category: arcanum.sigil_category.to_owned(),
            variant: variant.into(),
            intention: intention.into(),
            timestamp_ms,
        }
    }

    /// Build a minor arcana card of `rank` in `suit`.
    pub fn minor(
        suit: Suit,
        rank: &str,
        variant: impl Into<String>,
        intention: impl Into<String>,
        timestamp_ms: u64,
    ) -> Self {
        let info = suit.info();
        Self {
            name: format!("{rank} of {}", suit.title()),
            number: CardNumber::Rank(rank.to_owned()),
            arcana: Arcana::Minor(suit),
            element: Some(info.element.to_owned()),
            keywords: info.keywords.to_owned(),
            symbolism: Some(format!("{} - {rank}", info.symbolism)),
            sigil_category: info.sigil_category.to_owned(),
            variant: variant.into(),
            intention: intention.into(),
            timestamp_ms,
        }
    }

    /// Suit of a minor card.
    pub fn suit(&self) -> Option<Suit> {
        match self.arcana {
            Arcana::Major => None,
            Arcana::Minor(s) => Some(s),
        }
    }

    /// Parsed deck key, `None` when the variant string is unknown.
    pub fn deck_key(&self) -> Option<DeckKey> {
        DeckKey::parse(&self.variant)
    }

    /// Deck used for rendering, with the default substituted for unknown keys.
    pub fn deck(&self) -> &'static DeckVariant {
        deck_or_default(&self.variant)
    }

    /// Second title line: `Arcanum N` or `N of Suit`.
    pub fn subtitle(&self) -> String {
        match self.arcana {
            Arcana::Major => format!("Arcanum {}", self.number),
            Arcana::Minor(suit) => format!("{} of {}", self.number, suit.title()),
        }
    }

    /// Trimmed, non-empty keywords in declaration order.
    pub fn keyword_list(&self) -> Vec<&str> {
        self.keywords
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .collect()
    }
}

/// Static description of one major arcanum.
#[derive(Clone, Debug, PartialEq)]
pub struct MajorArcanum {
    /// Index `0..=21`.
    pub number: u8,
    /// Card name.
    pub name: &'static str,
    /// Comma-separated keywords.
    pub keywords: &'static str,
    /// Element or planetary/zodiacal correspondence.
    pub element: &'static str,
    /// Descriptive phrase.
    pub symbolism: &'static str,
    /// Emblem key.
    pub symbol: &'static str,
    /// Sigil generator category.
    pub sigil_category: &'static str,
}

/// Static description of one minor suit.
#[derive(Clone, Debug, PartialEq)]
pub struct SuitInfo {
    /// Suit.
    pub suit: Suit,
    /// Classical element.
    pub element: &'static str,
    /// Comma-separated keywords.
    pub keywords: &'static str,
    /// Signature color.
    pub color: Rgba8,
    /// Descriptive phrase.
    pub symbolism: &'static str,
    /// Sigil generator category.
    pub sigil_category: &'static str,
}

/// Ranks of every minor suit, in order.
pub const MINOR_RANKS: [&str; 14] = [
    "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Page", "Knight", "Queen", "King",
];

macro_rules! arcanum {
    ($n:expr, $name:expr, $kw:expr, $el:expr, $sym:expr, $symbol:expr, $cat:expr) => {
        MajorArcanum {
            number: $n,
            name: $name,
            keywords: $kw,
            element: $el,
            symbolism: $sym,
            symbol: $symbol,
            sigil_category: $cat,
        }
    };
}

/// The 22 major arcana in order.
pub static MAJOR_ARCANA: [MajorArcanum; 22] = [
    arcanum!(0, "The Fool", "new beginnings, innocence, spontaneity", "air",
        "The eternal child, divine madness, leap of faith", "fool", "journey"),
    arcanum!(1, "The Magician", "manifestation, resourcefulness, power", "mercury",
        "Will made manifest, as above so below, divine creativity", "infinity", "creation"),
    arcanum!(2, "The High Priestess", "intuition, sacred knowledge, divine feminine", "moon",
        "Hidden wisdom, the veil between worlds, lunar mysteries", "pillars", "wisdom"),
    arcanum!(3, "The Empress", "femininity, beauty, nature, nurturing", "venus",
        "Mother Earth, fertility, creative abundance", "venus", "abundance"),
    arcanum!(4, "The Emperor", "authority, establishment, structure", "aries",
        "Earthly power, paternal authority, cosmic order", "throne", "authority"),
    arcanum!(5, "The Hierophant", "spiritual wisdom, conformity, tradition", "taurus",
        "Sacred tradition, spiritual teaching, religious authority", "keys", "tradition"),
    arcanum!(6, "The Lovers", "love, harmony, relationships, values", "gemini",
        "Divine union, choice and consequence, Adam and Eve", "heart", "love"),
    arcanum!(7, "The Chariot", "control, willpower, success, determination", "cancer",
        "Spiritual triumph, mastery of opposites, victory through will", "chariot", "will"),
    arcanum!(8, "Strength", "strength, courage, patience, control", "leo",
        "Inner strength, taming the beast within, divine courage", "lion", "courage"),
    arcanum!(9, "The Hermit", "soul searching, seeking inner guidance", "virgo",
        "Inner light, spiritual quest, divine guidance", "lantern", "wisdom"),
    arcanum!(10, "Wheel of Fortune", "good luck, karma, life cycles", "jupiter",
        "Cosmic cycles, fate and fortune, eternal return", "wheel", "fate"),
    arcanum!(11, "Justice", "justice, fairness, truth, karma", "libra",
        "Divine justice, karmic balance, cosmic law", "scales", "justice"),
    arcanum!(12, "The Hanged Man", "suspension, restriction, letting go", "water",
        "Sacrifice, new perspective, spiritual surrender", "hanged", "surrender"),
    arcanum!(13, "Death", "endings, beginnings, change, transformation", "scorpio",
        "Transformation, rebirth, the great mystery", "scythe", "transformation"),
    arcanum!(14, "Temperance", "balance, moderation, patience, purpose", "sagittarius",
        "Divine alchemy, moderation, angelic guidance", "angel", "balance"),
    arcanum!(15, "The Devil", "bondage, addiction, sexuality, materialism", "capricorn",
        "Material bondage, shadow self, illusion of limitation", "devil", "temptation"),
    arcanum!(16, "The Tower", "sudden change, upheaval, chaos, revelation", "mars",
        "Divine lightning, false structures falling, revelation", "tower", "revelation"),
    arcanum!(17, "The Star", "hope, faith, purpose, renewal, spirituality", "aquarius",
        "Divine hope, cosmic guidance, spiritual renewal", "star", "hope"),
    arcanum!(18, "The Moon", "illusion, fear, anxiety, subconscious, intuition", "pisces",
        "Lunar mysteries, unconscious fears, psychic realm", "moon", "intuition"),
    arcanum!(19, "The Sun", "positivity, fun, warmth, success, vitality", "sun",
        "Solar consciousness, divine joy, enlightenment", "sun", "vitality"),
    arcanum!(20, "Judgement", "judgement, rebirth, inner calling, absolution", "fire",
        "Final judgment, spiritual awakening, resurrection", "trumpet", "awakening"),
    arcanum!(21, "The World", "completion, accomplishment, travel, fulfillment", "saturn",
        "Cosmic completion, unity, the great work finished", "wreath", "completion"),
];

/// Elemental correspondences of the four suits.
pub static MINOR_SUITS: [SuitInfo; 4] = [
    SuitInfo {
        suit: Suit::Wands,
        element: "fire",
        keywords: "creativity, spirituality, determination, ambition, passion",
        color: Rgba8::rgb(0xFF, 0x6B, 0x47),
        symbolism: "Divine will, creative force, spiritual energy",
        sigil_category: "passion",
    },
    SuitInfo {
        suit: Suit::Cups,
        element: "water",
        keywords: "emotion, intuition, relationships, spirituality, love",
        color: Rgba8::rgb(0x4E, 0xCD, 0xC4),
        symbolism: "Emotional realm, intuition, the heart's wisdom",
        sigil_category: "love",
    },
    SuitInfo {
        suit: Suit::Swords,
        element: "air",
        keywords: "thought, communication, conflict, intellect, truth",
        color: Rgba8::rgb(0xA8, 0xE6, 0xCF),
        symbolism: "Mental realm, communication, the sword of truth",
        sigil_category: "truth",
    },
    SuitInfo {
        suit: Suit::Pentacles,
        element: "earth",
        keywords: "material world, career, money, achievement, manifestation",
        color: Rgba8::rgb(0xFF, 0xD9, 0x3D),
        symbolism: "Material realm, earthly manifestation, practical wisdom",
        sigil_category: "prosperity",
    },
];

/// The Fool, used as the fallback card when generation fails.
pub fn the_fool() -> &'static MajorArcanum {
    &MAJOR_ARCANA[0]
}

#[cfg(test)]
#[path = "../../tests/unit/deck/card.rs"]
mod tests;

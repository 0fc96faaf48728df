use crate::foundation::core::Point;
use crate::foundation::error::{TarotError, TarotResult};

/// One stroke of normalized points.
pub type NormalizedPath = Vec<Point>;

/// Generator detail level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    /// Few strokes.
    Low,
    /// Used by the fallback path.
    Medium,
    /// Default for summoned cards.
    High,
}

impl QualityTier {
    /// Parse a lowercase tier name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Lowercase tier name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Advisory, display-only metadata.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SigilMetadata {
    /// Number of strokes reported by the generator.
    pub path_count: usize,
    /// Free-form complexity label.
    pub complexity: String,
}

/// Vector drawing derived from an intention; coordinates live in `[0, 1]`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SigilData {
    /// Ordered strokes.
    pub paths: Vec<NormalizedPath>,
    /// Advisory metadata.
    #[serde(default)]
    pub metadata: SigilMetadata,
}

impl SigilData {
    /// Sigil with metadata derived from the paths.
    pub fn from_paths(paths: Vec<NormalizedPath>, complexity: impl Into<String>) -> Self {
        let path_count = paths.len();
        Self {
            paths,
            metadata: SigilMetadata {
                path_count,
                complexity: complexity.into(),
            },
        }
    }

    /// Check that every stroke has at least one point and all coordinates are finite.
    pub fn validate(&self) -> TarotResult<()> {
        validate_paths(&self.paths, "sigil")
    }
}

/// A collection of normalized paths, as produced by the design collaborator.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathSet {
    /// Ordered strokes.
    pub paths: Vec<NormalizedPath>,
}

/// Decorations in normalized full-card space (`x*400`, `y*700`).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardDesign {
    /// Faint background strokes.
    pub background: PathSet,
    /// Symbolic elements, stroked and filled in the primary color.
    pub symbols: Vec<PathSet>,
    /// Corner flourishes, stroked and filled in the accent color.
    pub corners: Vec<PathSet>,
}

impl CardDesign {
    /// Validate every path in the design.
    pub fn validate(&self) -> TarotResult<()> {
        validate_paths(&self.background.paths, "design background")?;
        for set in self.symbols.iter().chain(self.corners.iter()) {
            validate_paths(&set.paths, "design element")?;
        }
        Ok(())
    }
}

fn validate_paths(paths: &[NormalizedPath], what: &str) -> TarotResult<()> {
    for (i, path) in paths.iter().enumerate() {
        if path.is_empty() {
            return Err(TarotError::render(format!("{what} path {i} has no points")));
        }
        if path.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(TarotError::render(format!(
                "{what} path {i} has a non-finite coordinate"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/sigil/model.rs"]
mod tests;

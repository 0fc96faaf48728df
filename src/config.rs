use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::core::Fps;
use crate::foundation::error::{TarotError, TarotResult};

/// Environment variable overriding [`ForgeConfig::device_pixel_ratio`].
pub const DPR_ENV: &str = "TAROT_FORGE_DPR";

/// Font files used to set card text. Unset roles borrow from the others.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontsConfig {
    /// Title and emblem face.
    pub display: Option<PathBuf>,
    /// Subtitle, keywords and footer face.
    pub body: Option<PathBuf>,
    /// Imagery description face.
    pub italic: Option<PathBuf>,
}

/// Runtime settings, loaded from JSON. Every field has a default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForgeConfig {
    /// Raster pixels per logical unit.
    pub device_pixel_ratio: f64,
    /// Font files.
    pub fonts: FontsConfig,
    /// Particle overlay frame rate.
    pub fps: Fps,
    /// Artificial latency before a summoned card is published.
    pub generation_delay_ms: u64,
    /// Seed for card selection and particles; time-derived when absent.
    pub seed: Option<u64>,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            device_pixel_ratio: 1.0,
            fonts: FontsConfig::default(),
            fps: Fps::default(),
            generation_delay_ms: 1500,
            seed: None,
        }
    }
}

impl ForgeConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json_str(s: &str) -> TarotResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| TarotError::validation(format!("invalid config json: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read a JSON config file, then apply environment overrides.
    pub fn load(path: &Path) -> TarotResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg = Self::from_json_str(&text)?;
        cfg.with_env_overrides()
    }

    /// Defaults plus environment overrides.
    pub fn from_env() -> TarotResult<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply `TAROT_FORGE_DPR` if set.
    pub fn with_env_overrides(self) -> TarotResult<Self> {
        self.with_dpr_override(std::env::var(DPR_ENV).ok().as_deref())
    }

    fn with_dpr_override(mut self, raw: Option<&str>) -> TarotResult<Self> {
        if let Some(raw) = raw {
            let dpr = raw.trim().parse::<f64>().map_err(|_| {
                TarotError::validation(format!("{DPR_ENV} must be a number, got '{raw}'"))
            })?;
            self.device_pixel_ratio = dpr;
            self.validate()?;
        }
        Ok(self)
    }

    /// Check value ranges.
    pub fn validate(&self) -> TarotResult<()> {
        if !self.device_pixel_ratio.is_finite() || self.device_pixel_ratio <= 0.0 {
            return Err(TarotError::validation(
                "device_pixel_ratio must be finite and > 0",
            ));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;

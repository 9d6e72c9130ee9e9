//! Configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{HudiniError, Result};
use crate::shadow::Shadow;

/// What to do with an alignment string that names no known mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignPolicy {
    /// Fall back to `center` and log a warning.
    #[default]
    Coerce,
    /// Reject with [`HudiniError::InvalidAlign`].
    Strict,
}

/// Layout behaviour knobs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub align_policy: AlignPolicy,
    /// Gap used by containers that do not state one.
    pub default_gap: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            align_policy: AlignPolicy::Coerce,
            default_gap: 0.0,
        }
    }
}

/// Per-token replacements for the stock design-token scales.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub spacing: BTreeMap<String, f32>,
    pub radius: BTreeMap<String, f32>,
    pub font_size: BTreeMap<String, f32>,
    pub shadow: BTreeMap<String, Shadow>,
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HudiniConfig {
    pub layout: LayoutConfig,
    pub theme: ThemeOverrides,
}

impl HudiniConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&text)
    }

    fn validate(&mut self) -> Result<()> {
        if !self.layout.default_gap.is_finite() {
            return Err(HudiniError::Config(format!(
                "default_gap must be finite, got {}",
                self.layout.default_gap
            )));
        }
        if self.layout.default_gap < 0.0 {
            log::warn!(
                "default_gap {} is negative -- clamping to 0",
                self.layout.default_gap
            );
            self.layout.default_gap = 0.0;
        }
        Ok(())
    }
}

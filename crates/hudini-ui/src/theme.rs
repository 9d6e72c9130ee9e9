//! Design tokens: named spacing, radius, font-size and shadow scales.
//!
//! Scene files and hosts refer to sizes by token (`"md"`, `"2xl"`) so a
//! single theme change restyles everything. Overrides from config replace or
//! add individual entries.

use std::collections::BTreeMap;

use serde::Deserialize;

use hudini_types::config::ThemeOverrides;
use hudini_types::error::{HudiniError, Result};
use hudini_types::shadow::Shadow;

/// A length given either in pixels or as a token of some scale.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Px(f32),
    Token(String),
}

impl From<f32> for Dimension {
    fn from(px: f32) -> Self {
        Self::Px(px)
    }
}

impl From<&str> for Dimension {
    fn from(token: &str) -> Self {
        Self::Token(token.to_string())
    }
}

/// Token tables for the UI toolkit.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub spacing: BTreeMap<String, f32>,
    pub radius: BTreeMap<String, f32>,
    pub font_size: BTreeMap<String, f32>,
    pub shadow: BTreeMap<String, Shadow>,
}

fn scale(entries: &[(&str, f32)]) -> BTreeMap<String, f32> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            spacing: scale(&[
                ("none", 0.0),
                ("xs", 4.0),
                ("sm", 8.0),
                ("md", 16.0),
                ("lg", 24.0),
                ("xl", 32.0),
                ("2xl", 48.0),
            ]),
            radius: scale(&[
                ("none", 0.0),
                ("sm", 2.0),
                ("md", 6.0),
                ("lg", 8.0),
                ("xl", 12.0),
                ("full", 9999.0),
            ]),
            font_size: scale(&[
                ("xs", 12.0),
                ("sm", 14.0),
                ("base", 16.0),
                ("lg", 18.0),
                ("xl", 20.0),
                ("2xl", 24.0),
                ("3xl", 30.0),
            ]),
            shadow: [
                ("none", 0u8),
                ("sm", 1),
                ("md", 2),
                ("lg", 3),
                ("xl", 4),
            ]
            .into_iter()
            .map(|(k, level)| (k.to_string(), Shadow::elevation(level)))
            .collect(),
        }
    }
}

impl Theme {
    /// Stock tables with `overrides` applied on top.
    pub fn with_overrides(overrides: &ThemeOverrides) -> Self {
        let mut theme = Self::default();
        theme.apply(overrides);
        theme
    }

    pub fn apply(&mut self, overrides: &ThemeOverrides) {
        self.spacing
            .extend(overrides.spacing.iter().map(|(k, v)| (k.clone(), *v)));
        self.radius
            .extend(overrides.radius.iter().map(|(k, v)| (k.clone(), *v)));
        self.font_size
            .extend(overrides.font_size.iter().map(|(k, v)| (k.clone(), *v)));
        self.shadow
            .extend(overrides.shadow.iter().map(|(k, v)| (k.clone(), *v)));
    }

    pub fn spacing(&self, token: &str) -> Option<f32> {
        self.spacing.get(token).copied()
    }

    pub fn radius(&self, token: &str) -> Option<f32> {
        self.radius.get(token).copied()
    }

    pub fn font_size(&self, token: &str) -> Option<f32> {
        self.font_size.get(token).copied()
    }

    pub fn shadow(&self, token: &str) -> Option<Shadow> {
        self.shadow.get(token).copied()
    }

    /// Resolve a gap or padding against the spacing scale.
    pub fn resolve_spacing(&self, dim: &Dimension) -> Result<f32> {
        resolve(dim, "spacing", |t| self.spacing(t))
    }

    /// Resolve a text size against the font-size scale.
    pub fn resolve_font_size(&self, dim: &Dimension) -> Result<f32> {
        resolve(dim, "font size", |t| self.font_size(t))
    }

    pub fn resolve_radius(&self, dim: &Dimension) -> Result<f32> {
        resolve(dim, "radius", |t| self.radius(t))
    }
}

fn resolve(dim: &Dimension, scale: &str, lookup: impl Fn(&str) -> Option<f32>) -> Result<f32> {
    match dim {
        Dimension::Px(px) => Ok(*px),
        Dimension::Token(token) => lookup(token)
            .ok_or_else(|| HudiniError::Config(format!("unknown {scale} token '{token}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_scales_are_monotonic() {
        let theme = Theme::default();
        let spacing: Vec<f32> = ["none", "xs", "sm", "md", "lg", "xl", "2xl"]
            .iter()
            .map(|t| theme.spacing(t).unwrap())
            .collect();
        assert!(spacing.windows(2).all(|w| w[0] < w[1]));

        let fonts: Vec<f32> = ["xs", "sm", "base", "lg", "xl", "2xl", "3xl"]
            .iter()
            .map(|t| theme.font_size(t).unwrap())
            .collect();
        assert!(fonts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn shadow_tokens_follow_elevation() {
        let theme = Theme::default();
        assert_eq!(theme.shadow("none"), Some(Shadow::NONE));
        assert_eq!(theme.shadow("lg"), Some(Shadow::elevation(3)));
        assert_eq!(theme.shadow("huge"), None);
    }

    #[test]
    fn overrides_replace_and_extend() {
        let mut overrides = ThemeOverrides::default();
        overrides.spacing.insert("md".into(), 20.0);
        overrides.spacing.insert("3xl".into(), 64.0);
        let theme = Theme::with_overrides(&overrides);
        assert_eq!(theme.spacing("md"), Some(20.0));
        assert_eq!(theme.spacing("3xl"), Some(64.0));
        assert_eq!(theme.spacing("sm"), Some(8.0));
    }

    #[test]
    fn resolve_px_and_token() {
        let theme = Theme::default();
        assert_eq!(theme.resolve_spacing(&Dimension::Px(7.0)).unwrap(), 7.0);
        assert_eq!(theme.resolve_spacing(&"lg".into()).unwrap(), 24.0);
        assert_eq!(theme.resolve_radius(&"full".into()).unwrap(), 9999.0);
        assert_eq!(theme.resolve_font_size(&"base".into()).unwrap(), 16.0);
    }

    #[test]
    fn unknown_token_is_config_error() {
        let err = Theme::default()
            .resolve_spacing(&"huge".into())
            .unwrap_err();
        assert!(matches!(err, HudiniError::Config(msg) if msg.contains("huge")));
    }

    #[test]
    fn dimension_deserializes_number_or_token() {
        #[derive(Deserialize)]
        struct Wrap {
            a: Dimension,
            b: Dimension,
        }
        let w: Wrap = toml::from_str("a = 12\nb = \"md\"").unwrap();
        assert_eq!(w.a, Dimension::Px(12.0));
        assert_eq!(w.b, Dimension::Token("md".into()));
    }
}

//! Drop shadow description used by the shadow token scale.

use serde::{Deserialize, Serialize};

/// A drop shadow: offset, blur radius and opacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    #[serde(default)]
    pub offset_x: f32,
    #[serde(default)]
    pub offset_y: f32,
    #[serde(default)]
    pub blur: f32,
    /// Opacity in `0.0..=1.0`.
    #[serde(default)]
    pub alpha: f32,
}

impl Shadow {
    /// No shadow.
    pub const NONE: Self = Self {
        offset_x: 0.0,
        offset_y: 0.0,
        blur: 0.0,
        alpha: 0.0,
    };

    /// Shadow for an elevation level (0 = flat). Levels above 4 saturate.
    pub fn elevation(level: u8) -> Self {
        match level.min(4) {
            0 => Self::NONE,
            1 => Self {
                offset_x: 0.0,
                offset_y: 1.0,
                blur: 2.0,
                alpha: 0.15,
            },
            2 => Self {
                offset_x: 0.0,
                offset_y: 2.0,
                blur: 6.0,
                alpha: 0.2,
            },
            3 => Self {
                offset_x: 0.0,
                offset_y: 4.0,
                blur: 12.0,
                alpha: 0.25,
            },
            _ => Self {
                offset_x: 0.0,
                offset_y: 8.0,
                blur: 24.0,
                alpha: 0.3,
            },
        }
    }

    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0
    }
}

//! Cross-axis alignment modes and their string forms.

use hudini_types::config::AlignPolicy;
use hudini_types::error::{HudiniError, Result};

/// Horizontal alignment (cross axis of a column).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HAlign {
    /// Align to the left edge.
    Left,
    /// Align to the center.
    #[default]
    Center,
    /// Align to the right edge.
    Right,
}

/// Vertical alignment (cross axis of a row).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VAlign {
    /// Align to the top edge.
    Top,
    /// Align to the center.
    #[default]
    Center,
    /// Align to the bottom edge.
    Bottom,
}

/// Direction-free view of an alignment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossAlign {
    Start,
    Center,
    End,
}

/// An alignment mode that can be named in config and scene files.
pub trait AlignMode: Copy + Default + PartialEq + std::fmt::Debug {
    /// Container kind the mode belongs to, used in error messages.
    const CONTAINER: &'static str;

    /// Parse an exact, case-insensitive mode name.
    fn from_name(name: &str) -> Option<Self>;

    /// Canonical name of this mode.
    fn name(self) -> &'static str;

    fn cross(self) -> CrossAlign;

    /// Parse `name`, applying `policy` when it names no known mode.
    fn parse(name: &str, policy: AlignPolicy) -> Result<Self> {
        if let Some(mode) = Self::from_name(name) {
            return Ok(mode);
        }
        match policy {
            AlignPolicy::Coerce => {
                log::warn!(
                    "Unknown {} alignment '{name}' -- using center",
                    Self::CONTAINER
                );
                Ok(Self::default())
            },
            AlignPolicy::Strict => Err(HudiniError::InvalidAlign {
                axis: Self::CONTAINER,
                value: name.to_string(),
            }),
        }
    }
}

impl AlignMode for VAlign {
    const CONTAINER: &'static str = "row";

    fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "top" => Some(Self::Top),
            "center" => Some(Self::Center),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }

    fn cross(self) -> CrossAlign {
        match self {
            Self::Top => CrossAlign::Start,
            Self::Center => CrossAlign::Center,
            Self::Bottom => CrossAlign::End,
        }
    }
}

impl AlignMode for HAlign {
    const CONTAINER: &'static str = "column";

    fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    fn cross(self) -> CrossAlign {
        match self {
            Self::Left => CrossAlign::Start,
            Self::Center => CrossAlign::Center,
            Self::Right => CrossAlign::End,
        }
    }
}

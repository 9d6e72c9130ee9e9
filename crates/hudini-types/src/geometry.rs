//! Geometry primitives and the optional hints visual elements expose.
//!
//! Hints are per-axis `Option<f32>` so an element can state its width while
//! leaving its height to a later fallback.

use serde::{Deserialize, Serialize};

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// X / width.
    Horizontal,
    /// Y / height.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A position in the host's coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component along `axis`.
    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Build a point from a main-axis and cross-axis coordinate.
    pub fn from_axes(main_axis: Axis, main: f32, cross: f32) -> Self {
        match main_axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A resolved width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent along `axis`.
    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Build a size from a main-axis and cross-axis extent.
    pub fn from_axes(main_axis: Axis, main: f32, cross: f32) -> Self {
        match main_axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }
}

/// Optional width and height, as read off an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeHint {
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
}

impl SizeHint {
    /// Neither axis is known.
    pub const NONE: Self = Self {
        width: None,
        height: None,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    pub fn get(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// The component along `axis`, only if it is a usable (finite, > 0) size.
    ///
    /// Zero and negative sizes count as unset so a momentarily empty element
    /// does not lock in a wrong measurement.
    pub fn positive(&self, axis: Axis) -> Option<f32> {
        self.get(axis).filter(|v| v.is_finite() && *v > 0.0)
    }

    /// Multiply both components by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            width: self.width.map(|w| w * factor),
            height: self.height.map(|h| h * factor),
        }
    }
}

impl From<Size> for SizeHint {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Optional anchor on each axis.
///
/// Used both for fractional origins (`0.0..=1.0` of the element's box) and for
/// pixel display origins; the reader decides which.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginHint {
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: Option<f32>,
}

impl OriginHint {
    pub const NONE: Self = Self { x: None, y: None };

    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn get(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

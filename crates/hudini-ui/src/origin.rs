//! Origin normalization: where an element's anchor sits inside its own box.

use hudini_types::error::Result;
use hudini_types::geometry::Axis;

use crate::element::VisualElement;
use crate::measure::resolve_extent;

/// Anchor used when an element states none.
pub const DEFAULT_ORIGIN: f32 = 0.5;

/// An anchor as a fraction of the element's box.
///
/// Values are usually in `0.0..=1.0` but are not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub x: f32,
    pub y: f32,
}

impl Origin {
    pub const CENTER: Self = Self {
        x: DEFAULT_ORIGIN,
        y: DEFAULT_ORIGIN,
    };

    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

impl Default for Origin {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Resolve the anchor fraction along one axis.
///
/// A fractional origin wins; otherwise a pixel display origin is divided by
/// the resolved size, provided that size is positive.
pub fn resolve_origin_axis(element: &dyn VisualElement, axis: Axis) -> Result<f32> {
    if let Some(fraction) = element.origin().get(axis).filter(|v| v.is_finite()) {
        return Ok(fraction);
    }
    if let Some(pixels) = element.display_origin().get(axis).filter(|v| v.is_finite()) {
        let extent = resolve_extent(element, axis)?;
        if extent > 0.0 {
            return Ok(pixels / extent);
        }
    }
    Ok(DEFAULT_ORIGIN)
}

pub fn resolve_origin(element: &dyn VisualElement) -> Result<Origin> {
    Ok(Origin {
        x: resolve_origin_axis(element, Axis::Horizontal)?,
        y: resolve_origin_axis(element, Axis::Vertical)?,
    })
}

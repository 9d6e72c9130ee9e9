//! Size resolution: how wide and tall an element is.
//!
//! Each axis is resolved independently by walking an ordered chain of
//! strategies; the first one that produces a value wins, and an exhausted
//! chain yields `0.0`. Composites (elements exposing children) and leaves use
//! different chains:
//!
//! | Composite                           | Leaf                    |
//! |-------------------------------------|-------------------------|
//! | display size (> 0)                  | display size (> 0)      |
//! | explicit size (> 0), divided by a positive scale | explicit size (> 0) |
//! | largest child on that axis          | bounds provider         |
//!
//! Composite children are treated as overlaid, never stacked: the fallback
//! takes the maximum child extent, not the sum.

use hudini_types::error::Result;
use hudini_types::geometry::{Axis, Size};

use crate::element::{ElementKind, VisualElement};

type Resolver = fn(&dyn VisualElement, Axis) -> Result<Option<f32>>;

const COMPOSITE_CHAIN: &[Resolver] = &[display_extent, unscaled_explicit_extent, largest_child];
const LEAF_CHAIN: &[Resolver] = &[display_extent, explicit_extent, bounds_extent];

fn display_extent(element: &dyn VisualElement, axis: Axis) -> Result<Option<f32>> {
    Ok(element.display_size().positive(axis))
}

fn explicit_extent(element: &dyn VisualElement, axis: Axis) -> Result<Option<f32>> {
    Ok(element.explicit_size().positive(axis))
}

// Scale is assumed uniform; a non-uniform host scale is not modelled.
fn unscaled_explicit_extent(element: &dyn VisualElement, axis: Axis) -> Result<Option<f32>> {
    let Some(size) = element.explicit_size().positive(axis) else {
        return Ok(None);
    };
    match element.scale() {
        Some(scale) if scale.is_finite() && scale > 0.0 => Ok(Some(size / scale)),
        _ => Ok(Some(size)),
    }
}

fn largest_child(element: &dyn VisualElement, axis: Axis) -> Result<Option<f32>> {
    let ElementKind::Composite(children) = element.kind() else {
        return Ok(None);
    };
    let mut largest: Option<f32> = None;
    for child in children {
        let extent = resolve_extent(child, axis)?;
        largest = Some(largest.map_or(extent, |l| l.max(extent)));
    }
    Ok(largest)
}

fn bounds_extent(element: &dyn VisualElement, axis: Axis) -> Result<Option<f32>> {
    Ok(element
        .bounds()?
        .map(|b| b.get(axis))
        .filter(|v| v.is_finite())
        .map(|v| v.max(0.0)))
}

/// Resolve an element's extent along one axis.
///
/// Only fails if a bounds provider reached by the chain fails; the error is
/// passed through untouched.
pub fn resolve_extent(element: &dyn VisualElement, axis: Axis) -> Result<f32> {
    let chain = if element.kind().is_composite() {
        COMPOSITE_CHAIN
    } else {
        LEAF_CHAIN
    };
    for resolver in chain {
        if let Some(extent) = resolver(element, axis)? {
            return Ok(extent);
        }
    }
    Ok(0.0)
}

pub fn resolve_width(element: &dyn VisualElement) -> Result<f32> {
    resolve_extent(element, Axis::Horizontal)
}

pub fn resolve_height(element: &dyn VisualElement) -> Result<f32> {
    resolve_extent(element, Axis::Vertical)
}

pub fn resolve_size(element: &dyn VisualElement) -> Result<Size> {
    Ok(Size::new(resolve_width(element)?, resolve_height(element)?))
}

//! The adapter interface between the layout code and a host scene graph.
//!
//! Hosts implement [`VisualElement`] for their own display objects. Every
//! capability beyond position is optional and defaults to "not provided", so
//! a bare positionable only needs the two position methods.

use hudini_types::error::Result;
use hudini_types::geometry::{OriginHint, Point, Size, SizeHint};

/// Whether an element is measured from itself or from its children.
pub enum ElementKind<'a> {
    Leaf,
    /// Ordered children; the element's size falls back to the largest child.
    Composite(Vec<&'a dyn VisualElement>),
}

impl ElementKind<'_> {
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite(_))
    }
}

/// A positionable, optionally sizeable thing in the host scene.
pub trait VisualElement {
    fn position(&self) -> Point;

    fn set_position(&mut self, position: Point);

    /// Logical (unscaled) size.
    fn explicit_size(&self) -> SizeHint {
        SizeHint::NONE
    }

    /// Rendered size after scale and transforms.
    fn display_size(&self) -> SizeHint {
        SizeHint::NONE
    }

    /// Uniform scale factor.
    fn scale(&self) -> Option<f32> {
        None
    }

    /// Anchor as a fraction of the element's own box.
    fn origin(&self) -> OriginHint {
        OriginHint::NONE
    }

    /// Anchor in pixels.
    fn display_origin(&self) -> OriginHint {
        OriginHint::NONE
    }

    fn kind(&self) -> ElementKind<'_> {
        ElementKind::Leaf
    }

    /// Geometry query for elements whose size is only known on demand
    /// (text metrics, for instance). `Ok(None)` means no provider.
    fn bounds(&self) -> Result<Option<Size>> {
        Ok(None)
    }
}

impl<T: VisualElement + ?Sized> VisualElement for Box<T> {
    fn position(&self) -> Point {
        (**self).position()
    }

    fn set_position(&mut self, position: Point) {
        (**self).set_position(position)
    }

    fn explicit_size(&self) -> SizeHint {
        (**self).explicit_size()
    }

    fn display_size(&self) -> SizeHint {
        (**self).display_size()
    }

    fn scale(&self) -> Option<f32> {
        (**self).scale()
    }

    fn origin(&self) -> OriginHint {
        (**self).origin()
    }

    fn display_origin(&self) -> OriginHint {
        (**self).display_origin()
    }

    fn kind(&self) -> ElementKind<'_> {
        (**self).kind()
    }

    fn bounds(&self) -> Result<Option<Size>> {
        (**self).bounds()
    }
}

/// Move an element by a delta, keeping whatever anchor it uses.
pub fn translate(element: &mut dyn VisualElement, dx: f32, dy: f32) {
    let moved = element.position().offset(dx, dy);
    element.set_position(moved);
}

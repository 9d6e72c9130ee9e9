//! Shared test utilities for hudini-ui tests.
//!
//! Provides a [`MockElement`] whose every capability is configurable and
//! which records each position it is given.

use hudini_types::error::{HudiniError, Result};
use hudini_types::geometry::{OriginHint, Point, Size, SizeHint};

use crate::element::{ElementKind, VisualElement};

/// What the mock's bounds provider does when queried.
#[derive(Debug, Clone)]
pub enum MockBounds {
    Absent,
    Fixed(Size),
    Fail,
}

/// A configurable element for layout assertions.
#[derive(Debug, Clone)]
pub struct MockElement {
    pub position: Point,
    pub explicit: SizeHint,
    pub display: SizeHint,
    pub scale: Option<f32>,
    pub origin: OriginHint,
    pub display_origin: OriginHint,
    pub children: Option<Vec<MockElement>>,
    pub bounds: MockBounds,
    /// Every position passed to `set_position`, in order.
    pub moves: Vec<Point>,
}

impl MockElement {
    /// A leaf that knows nothing about itself.
    pub fn leaf() -> Self {
        Self {
            position: Point::ZERO,
            explicit: SizeHint::NONE,
            display: SizeHint::NONE,
            scale: None,
            origin: OriginHint::NONE,
            display_origin: OriginHint::NONE,
            children: None,
            bounds: MockBounds::Absent,
            moves: Vec::new(),
        }
    }

    /// A leaf with an explicit size.
    pub fn sized(width: f32, height: f32) -> Self {
        Self::leaf().with_explicit(width, height)
    }

    /// A composite with the given children and no size of its own.
    pub fn composite(children: Vec<MockElement>) -> Self {
        Self {
            children: Some(children),
            ..Self::leaf()
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Point::new(x, y);
        self
    }

    pub fn with_explicit(self, width: f32, height: f32) -> Self {
        self.with_explicit_hint(SizeHint::new(width, height))
    }

    pub fn with_explicit_hint(mut self, hint: SizeHint) -> Self {
        self.explicit = hint;
        self
    }

    pub fn with_display(self, width: f32, height: f32) -> Self {
        self.with_display_hint(SizeHint::new(width, height))
    }

    pub fn with_display_hint(mut self, hint: SizeHint) -> Self {
        self.display = hint;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_origin(self, x: f32, y: f32) -> Self {
        self.with_origin_hint(OriginHint::new(x, y))
    }

    pub fn with_origin_hint(mut self, hint: OriginHint) -> Self {
        self.origin = hint;
        self
    }

    pub fn with_display_origin(mut self, x: f32, y: f32) -> Self {
        self.display_origin = OriginHint::new(x, y);
        self
    }

    pub fn with_bounds(mut self, width: f32, height: f32) -> Self {
        self.bounds = MockBounds::Fixed(Size::new(width, height));
        self
    }

    pub fn with_failing_bounds(mut self) -> Self {
        self.bounds = MockBounds::Fail;
        self
    }
}

impl VisualElement for MockElement {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
        self.moves.push(position);
    }

    fn explicit_size(&self) -> SizeHint {
        self.explicit
    }

    fn display_size(&self) -> SizeHint {
        self.display
    }

    fn scale(&self) -> Option<f32> {
        self.scale
    }

    fn origin(&self) -> OriginHint {
        self.origin
    }

    fn display_origin(&self) -> OriginHint {
        self.display_origin
    }

    fn kind(&self) -> ElementKind<'_> {
        match &self.children {
            Some(children) => ElementKind::Composite(
                children.iter().map(|c| c as &dyn VisualElement).collect(),
            ),
            None => ElementKind::Leaf,
        }
    }

    fn bounds(&self) -> Result<Option<Size>> {
        match &self.bounds {
            MockBounds::Absent => Ok(None),
            MockBounds::Fixed(size) => Ok(Some(*size)),
            MockBounds::Fail => Err(HudiniError::Bounds("mock bounds failure".into())),
        }
    }
}

//! Row and column auto-layout.
//!
//! A linear container arranges its children along a main axis, centered on
//! the container's own position, and aligns them on the cross axis. Layout is
//! a full recomputation run on demand: mutators never re-layout by
//! themselves, so several changes can be batched before one `layout()` call.

use std::fmt;
use std::marker::PhantomData;

use hudini_types::config::AlignPolicy;
use hudini_types::error::Result;
use hudini_types::geometry::{Axis, Point, Size, SizeHint};

use crate::element::{ElementKind, VisualElement, translate};
use crate::layout::{AlignMode, CrossAlign, HAlign, VAlign};
use crate::measure::resolve_size;
use crate::origin::resolve_origin;

/// Main-axis direction of a linear container.
pub trait Orientation {
    const MAIN_AXIS: Axis;
    /// Cross-axis alignment modes valid for this direction.
    type Align: AlignMode;
}

/// Children flow left to right.
#[derive(Debug, Clone, Copy)]
pub enum Horizontal {}

/// Children flow top to bottom.
#[derive(Debug, Clone, Copy)]
pub enum Vertical {}

impl Orientation for Horizontal {
    const MAIN_AXIS: Axis = Axis::Horizontal;
    type Align = VAlign;
}

impl Orientation for Vertical {
    const MAIN_AXIS: Axis = Axis::Vertical;
    type Align = HAlign;
}

/// A horizontal container, aligned with [`VAlign`].
pub type Row<E = Box<dyn VisualElement>> = LinearContainer<Horizontal, E>;

/// A vertical container, aligned with [`HAlign`].
pub type Column<E = Box<dyn VisualElement>> = LinearContainer<Vertical, E>;

/// An ordered list of children laid out along one axis.
pub struct LinearContainer<O: Orientation, E> {
    position: Point,
    children: Vec<E>,
    gap: f32,
    align: O::Align,
    /// Arranged extent from the last layout pass.
    extent: Option<Size>,
    _orientation: PhantomData<O>,
}

fn sanitize_gap(gap: f32) -> f32 {
    if gap.is_finite() { gap.max(0.0) } else { 0.0 }
}

impl<O: Orientation, E: VisualElement> LinearContainer<O, E> {
    /// Create a container at the origin. Negative gaps are clamped to zero.
    pub fn new(children: Vec<E>, gap: f32, align: O::Align) -> Self {
        Self {
            position: Point::ZERO,
            children,
            gap: sanitize_gap(gap),
            align,
            extent: None,
            _orientation: PhantomData,
        }
    }

    /// Create a container from an alignment name, applying `policy` to
    /// names that are not valid for this direction.
    pub fn with_align_name(
        children: Vec<E>,
        gap: f32,
        align: &str,
        policy: AlignPolicy,
    ) -> Result<Self> {
        Ok(Self::new(children, gap, <O::Align as AlignMode>::parse(align, policy)?))
    }

    /// Place the container without moving any children.
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Point::new(x, y);
        self
    }

    /// Space between adjacent children.
    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Cross-axis alignment mode.
    pub fn align(&self) -> O::Align {
        self.align
    }

    /// Children in layout order.
    pub fn children(&self) -> &[E] {
        &self.children
    }

    /// Mutable access to the children. Forgets the last extent, since the
    /// caller may resize them.
    pub fn children_mut(&mut self) -> &mut [E] {
        self.extent = None;
        &mut self.children
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the container has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Consume the container, returning its children in order.
    pub fn into_children(self) -> Vec<E> {
        self.children
    }

    /// Arranged size from the last `layout()`, if nothing changed since.
    pub fn extent(&self) -> Option<Size> {
        self.extent
    }

    /// Append one child. Takes effect on the next `layout()`.
    pub fn add_child(&mut self, child: E) {
        self.extent = None;
        self.children.push(child);
    }

    /// Append children in order. Takes effect on the next `layout()`.
    pub fn add_children(&mut self, children: impl IntoIterator<Item = E>) {
        self.extent = None;
        self.children.extend(children);
    }

    /// Replace every child, keeping the new order. Returns the old children.
    pub fn set_children(&mut self, children: Vec<E>) -> Vec<E> {
        self.extent = None;
        std::mem::replace(&mut self.children, children)
    }

    /// Set the gap; negative and non-finite values become zero.
    pub fn set_gap(&mut self, gap: f32) {
        self.extent = None;
        self.gap = sanitize_gap(gap);
    }

    /// Set the cross-axis alignment.
    pub fn set_align(&mut self, align: O::Align) {
        self.align = align;
    }

    /// Set the alignment by name, applying `policy` to unknown names.
    pub fn set_align_name(&mut self, align: &str, policy: AlignPolicy) -> Result<()> {
        self.align = <O::Align as AlignMode>::parse(align, policy)?;
        Ok(())
    }

    /// Recompute and apply every child's position.
    ///
    /// Children are centered on the container's position along the main
    /// axis. A failing bounds provider aborts the pass before any child is
    /// moved.
    pub fn layout(&mut self) -> Result<()> {
        let main_axis = O::MAIN_AXIS;
        let cross_axis = main_axis.cross();

        let mut measured = Vec::with_capacity(self.children.len());
        for child in &self.children {
            let size = resolve_size(child)?;
            let origin = resolve_origin(child)?;
            log::trace!("measured child: {size:?}, origin {origin:?}");
            measured.push((size, origin));
        }

        let gaps = self.gap * self.children.len().saturating_sub(1) as f32;
        let total: f32 = measured.iter().map(|(s, _)| s.get(main_axis)).sum::<f32>() + gaps;
        let max_cross = measured
            .iter()
            .map(|(s, _)| s.get(cross_axis))
            .fold(0.0f32, f32::max);

        let anchor_main = self.position.get(main_axis);
        let anchor_cross = self.position.get(cross_axis);
        let mut cursor = anchor_main - total / 2.0;

        for (child, (size, origin)) in self.children.iter_mut().zip(&measured) {
            let main_size = size.get(main_axis);
            let cross_size = size.get(cross_axis);
            let cross_origin = origin.get(cross_axis);

            let main = cursor + main_size * origin.get(main_axis);
            cursor += main_size + self.gap;

            let cross = match self.align.cross() {
                CrossAlign::Center => anchor_cross,
                CrossAlign::Start => anchor_cross - max_cross / 2.0 + cross_size * cross_origin,
                CrossAlign::End => {
                    anchor_cross + max_cross / 2.0 - cross_size * (1.0 - cross_origin)
                },
            };

            child.set_position(Point::from_axes(main_axis, main, cross));
        }

        self.extent = Some(Size::from_axes(main_axis, total, max_cross));
        log::debug!(
            "Laid out {} children along {:?}: extent {total} x {max_cross}, align {}",
            self.children.len(),
            main_axis,
            self.align.name(),
        );
        Ok(())
    }
}

impl<O: Orientation, E: VisualElement> VisualElement for LinearContainer<O, E> {
    fn position(&self) -> Point {
        self.position
    }

    /// Moves the container and carries its children along with it.
    fn set_position(&mut self, position: Point) {
        let dx = position.x - self.position.x;
        let dy = position.y - self.position.y;
        for child in &mut self.children {
            translate(child, dx, dy);
        }
        self.position = position;
    }

    fn explicit_size(&self) -> SizeHint {
        self.extent.map(SizeHint::from).unwrap_or(SizeHint::NONE)
    }

    fn kind(&self) -> ElementKind<'_> {
        ElementKind::Composite(
            self.children
                .iter()
                .map(|c| c as &dyn VisualElement)
                .collect(),
        )
    }
}

impl<O: Orientation, E: fmt::Debug> fmt::Debug for LinearContainer<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearContainer")
            .field("main_axis", &O::MAIN_AXIS)
            .field("position", &self.position)
            .field("gap", &self.gap)
            .field("align", &self.align)
            .field("extent", &self.extent)
            .field("children", &self.children)
            .finish()
    }
}

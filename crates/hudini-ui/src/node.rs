//! Concrete scene nodes.
//!
//! [`Node`] is a ready-made element tree for hosts that do not bring their
//! own display objects (and for the `hudini-layout` tool). Each variant
//! implements [`VisualElement`] through the same adapter trait a host would.

use serde::Serialize;

use hudini_types::error::{HudiniError, Result};
use hudini_types::geometry::{OriginHint, Point, Size, SizeHint};

use crate::element::{ElementKind, VisualElement, translate};
use crate::linear::{Column, Row};
use crate::measure::resolve_size;

/// Estimated text metrics, proportional to the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Glyph advance as a fraction of the font size.
    pub advance: f32,
    /// Line height as a fraction of the font size.
    pub line_height: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            advance: 0.5,
            line_height: 1.25,
        }
    }
}

impl TextMetrics {
    /// Size of `text` set at `font_size`, one line per `\n`.
    pub fn measure(&self, text: &str, font_size: f32) -> Result<Size> {
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(HudiniError::Bounds(format!(
                "font size must be positive, got {font_size}"
            )));
        }
        if text.is_empty() {
            return Ok(Size::ZERO);
        }
        let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let lines = text.lines().count().max(1);
        Ok(Size::new(
            longest as f32 * font_size * self.advance,
            lines as f32 * font_size * self.line_height,
        ))
    }
}

/// A filled box with a stated size.
#[derive(Debug, Clone, PartialEq)]
pub struct RectNode {
    pub position: Point,
    pub width: f32,
    pub height: f32,
    pub scale: f32,
    pub origin: OriginHint,
}

impl RectNode {
    /// An unscaled rect at the origin, anchored at its center.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            position: Point::ZERO,
            width,
            height,
            scale: 1.0,
            origin: OriginHint::NONE,
        }
    }

    /// Uniform render scale; the display size is the stated size times this.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Fractional anchor.
    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = OriginHint::new(x, y);
        self
    }
}

impl VisualElement for RectNode {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn explicit_size(&self) -> SizeHint {
        SizeHint::new(self.width, self.height)
    }

    fn display_size(&self) -> SizeHint {
        self.explicit_size().scaled(self.scale)
    }

    fn scale(&self) -> Option<f32> {
        Some(self.scale)
    }

    fn origin(&self) -> OriginHint {
        self.origin
    }
}

/// A run of text whose size is only known through its metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub position: Point,
    pub text: String,
    pub font_size: f32,
    pub origin: OriginHint,
    pub metrics: TextMetrics,
}

impl TextNode {
    /// Text at the origin, measured with the default metrics.
    pub fn new(text: impl Into<String>, font_size: f32) -> Self {
        Self {
            position: Point::ZERO,
            text: text.into(),
            font_size,
            origin: OriginHint::NONE,
            metrics: TextMetrics::default(),
        }
    }
}

impl VisualElement for TextNode {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn origin(&self) -> OriginHint {
        self.origin
    }

    fn bounds(&self) -> Result<Option<Size>> {
        self.metrics.measure(&self.text, self.font_size).map(Some)
    }
}

/// A free-form composite. Moving it carries its children along.
#[derive(Debug)]
pub struct Group {
    pub position: Point,
    pub size: SizeHint,
    pub scale: Option<f32>,
    pub children: Vec<Node>,
}

impl Group {
    /// A group at the origin with no size of its own.
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            position: Point::ZERO,
            size: SizeHint::NONE,
            scale: None,
            children,
        }
    }
}

impl VisualElement for Group {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        let dx = position.x - self.position.x;
        let dy = position.y - self.position.y;
        for child in &mut self.children {
            translate(child, dx, dy);
        }
        self.position = position;
    }

    fn explicit_size(&self) -> SizeHint {
        self.size
    }

    fn scale(&self) -> Option<f32> {
        self.scale
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

/// Any node of a scene tree.
#[derive(Debug)]
pub enum Node {
    Rect(RectNode),
    Text(TextNode),
    Group(Group),
    Row(Row<Node>),
    Column(Column<Node>),
}

/// Where a node ended up after layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    /// Child indices from the root, joined with `/` (the root is `""`).
    pub path: String,
    pub kind: &'static str,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Node {
    /// Lowercase variant name, as used in scene files.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Rect(_) => "rect",
            Self::Text(_) => "text",
            Self::Group(_) => "group",
            Self::Row(_) => "row",
            Self::Column(_) => "column",
        }
    }

    fn element(&self) -> &dyn VisualElement {
        match self {
            Self::Rect(n) => n,
            Self::Text(n) => n,
            Self::Group(n) => n,
            Self::Row(n) => n,
            Self::Column(n) => n,
        }
    }

    fn element_mut(&mut self) -> &mut dyn VisualElement {
        match self {
            Self::Rect(n) => n,
            Self::Text(n) => n,
            Self::Group(n) => n,
            Self::Row(n) => n,
            Self::Column(n) => n,
        }
    }

    fn child_nodes(&self) -> &[Node] {
        match self {
            Self::Rect(_) | Self::Text(_) => &[],
            Self::Group(g) => &g.children,
            Self::Row(r) => r.children(),
            Self::Column(c) => c.children(),
        }
    }

    fn child_nodes_mut(&mut self) -> &mut [Node] {
        match self {
            Self::Rect(_) | Self::Text(_) => &mut [],
            Self::Group(g) => &mut g.children,
            Self::Row(r) => r.children_mut(),
            Self::Column(c) => c.children_mut(),
        }
    }

    /// Lay out every container in the tree, innermost first.
    ///
    /// Inner containers are arranged around their current position so their
    /// extent is known when the enclosing container measures them; when the
    /// outer container then moves them, their children follow.
    pub fn layout_tree(&mut self) -> Result<()> {
        for child in self.child_nodes_mut() {
            child.layout_tree()?;
        }
        match self {
            Self::Row(r) => r.layout(),
            Self::Column(c) => c.layout(),
            Self::Rect(_) | Self::Text(_) | Self::Group(_) => Ok(()),
        }
    }

    /// Every node's final position and resolved size, depth first.
    pub fn placements(&self) -> Result<Vec<Placement>> {
        let mut out = Vec::new();
        self.collect_placements(String::new(), &mut out)?;
        Ok(out)
    }

    /// [`Node::placements`] as pretty-printed JSON.
    pub fn placements_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.placements()?)?)
    }

    fn collect_placements(&self, path: String, out: &mut Vec<Placement>) -> Result<()> {
        let size = resolve_size(self)?;
        let position = self.position();
        out.push(Placement {
            path: path.clone(),
            kind: self.kind_name(),
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        });
        for (i, child) in self.child_nodes().iter().enumerate() {
            let child_path = if path.is_empty() {
                i.to_string()
            } else {
                format!("{path}/{i}")
            };
            child.collect_placements(child_path, out)?;
        }
        Ok(())
    }
}

impl VisualElement for Node {
    fn position(&self) -> Point {
        self.element().position()
    }

    fn set_position(&mut self, position: Point) {
        self.element_mut().set_position(position)
    }

    fn explicit_size(&self) -> SizeHint {
        self.element().explicit_size()
    }

    fn display_size(&self) -> SizeHint {
        self.element().display_size()
    }

    fn scale(&self) -> Option<f32> {
        self.element().scale()
    }

    fn origin(&self) -> OriginHint {
        self.element().origin()
    }

    fn display_origin(&self) -> OriginHint {
        self.element().display_origin()
    }

    fn kind(&self) -> ElementKind<'_> {
        self.element().kind()
    }

    fn bounds(&self) -> Result<Option<Size>> {
        self.element().bounds()
    }
}

//! hudini-ui: measurement and auto-layout for scene-graph UIs.
//!
//! Hosts adapt their display objects through [`VisualElement`]. On top of
//! that this crate resolves element sizes and anchors, arranges children in
//! [`Row`]s and [`Column`]s, and translates design tokens into pixels. It
//! never renders anything.

pub mod element;
pub mod layout;
pub mod linear;
pub mod measure;
pub mod node;
pub mod origin;
pub mod scene;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_utils;

pub use element::{ElementKind, VisualElement};
pub use layout::{AlignMode, HAlign, VAlign};
pub use linear::{Column, LinearContainer, Row};
pub use measure::{resolve_height, resolve_size, resolve_width};
pub use node::Node;
pub use origin::{Origin, resolve_origin};
pub use scene::SceneSpec;
pub use theme::Theme;

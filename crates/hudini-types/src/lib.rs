//! Foundation types for hudini.
//!
//! This crate contains the host-agnostic types shared by all hudini crates:
//! geometry, the optional size/origin hints read from visual elements,
//! configuration, and error types.

pub mod config;
pub mod error;
pub mod geometry;
pub mod shadow;

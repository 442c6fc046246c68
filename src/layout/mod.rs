//! Detail screen layout engine (pure).
//!
//! Turns a module and a surface size into a [`SceneDescription`]: an
//! immutable tree of positioned nodes that any renderer can draw. Nothing
//! here draws, performs I/O, or keeps state between calls.

pub mod constants;
mod compose;
pub mod geometry;
pub mod scene;

pub use compose::{compose, compose_by_id};
pub use geometry::{clamp_width, LayoutGeometry, Size};
pub use scene::{ContentMode, Frame, HorizontalAlignment, NodeKind, SceneDescription, SceneNode};

//! Module Detail
//!
//! Composes the detail screen for one of a closed set of content modules
//! (globe, orbit, solar system): a text panel beside a visual panel, sized
//! from the available surface, with an optional themed background and an
//! optional settings affordance.
//!
//! The crate follows a Pure Core / Impure Shell split. [`model`],
//! [`registry`], [`layout`] and [`state`] are pure and never touch the
//! terminal or filesystem; [`config`], [`logging`] and [`view`] are the shell.

pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod registry;
pub mod state;
pub mod view;

pub use layout::{compose, compose_by_id, LayoutGeometry, SceneDescription};
pub use model::{DetailError, LayoutError, ModuleVariant, RegistryError, ViewHandle};
pub use registry::{resolve, ModuleBinding};

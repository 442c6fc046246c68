//! Error types for detail screen composition.
//!
//! # Error Hierarchy
//!
//! - [`DetailError`] - Top-level error for callers that start from untrusted input
//!   - [`RegistryError`] - An identifier outside the closed set of modules
//!   - [`LayoutError`] - A surface size that cannot be laid out
//!
//! Every error is returned to the immediate caller. Composition is pure and
//! deterministic, so nothing here is retried and no fallback layout is ever
//! produced in place of an error.

use std::fmt;
use thiserror::Error;

/// Top-level error encompassing every way a composition request can fail.
///
/// Both domain errors convert via `From`, so `?` works from either layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DetailError {
    /// The requested module is not one of the known variants.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The surface size was rejected.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Errors resolving a module identifier.
///
/// Only reachable when the type system is bypassed, e.g. when an identifier
/// comes from a config file, an environment variable or the command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The value does not name any module variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use module_detail::model::{ModuleVariant, RegistryError};
    ///
    /// let err = "jupiter".parse::<ModuleVariant>().unwrap_err();
    /// assert!(matches!(err, RegistryError::InvalidVariant { .. }));
    /// assert!(err.to_string().contains("jupiter"));
    /// ```
    #[error("Unknown module {value:?} (expected one of: globe, orbit, solar)")]
    InvalidVariant {
        /// The rejected input, verbatim.
        value: String,
    },
}

/// Which side of the surface a [`LayoutError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Horizontal extent.
    Width,
    /// Vertical extent.
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Width => f.write_str("width"),
            Dimension::Height => f.write_str("height"),
        }
    }
}

/// Errors rejecting a surface size before any geometry is computed.
///
/// A zero-sized or broken container is a caller-side bug; it is surfaced
/// here rather than clamped to some minimum.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LayoutError {
    /// Width or height is zero or negative.
    #[error("Surface {dimension} must be positive, got {value}")]
    NonPositiveSurfaceDimension {
        /// The offending side.
        dimension: Dimension,
        /// The value that was supplied.
        value: f64,
    },

    /// Width or height is NaN or infinite.
    #[error("Surface {dimension} must be a finite number, got {value}")]
    NonFiniteSurfaceDimension {
        /// The offending side.
        dimension: Dimension,
        /// The value that was supplied.
        value: f64,
    },
}

impl LayoutError {
    /// The side of the surface that was rejected.
    pub fn dimension(&self) -> Dimension {
        match self {
            LayoutError::NonPositiveSurfaceDimension { dimension, .. }
            | LayoutError::NonFiniteSurfaceDimension { dimension, .. } => *dimension,
        }
    }
}

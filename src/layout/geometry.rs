//! Panel width allocation for a given surface size.

use crate::layout::constants::{
    TEXT_PANEL_MAX_WIDTH, TEXT_PANEL_MIN_WIDTH, TEXT_PANEL_WIDTH_FRACTION, VISUAL_PANEL_MAX_WIDTH,
    VISUAL_PANEL_MIN_WIDTH,
};
use crate::model::{Dimension, LayoutError};
use serde::Serialize;

/// A validated surface size: both sides finite and strictly positive.
///
/// Only [`Size::new`] builds one, so every `Size` has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Validate a surface size.
    ///
    /// Width is checked before height, and finiteness before sign.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::NonFiniteSurfaceDimension`] for NaN or infinite input
    /// - [`LayoutError::NonPositiveSurfaceDimension`] for zero or negative input
    pub fn new(width: f64, height: f64) -> Result<Self, LayoutError> {
        validate(Dimension::Width, width)?;
        validate(Dimension::Height, height)?;
        Ok(Self { width, height })
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.height
    }
}

fn validate(dimension: Dimension, value: f64) -> Result<(), LayoutError> {
    if !value.is_finite() {
        return Err(LayoutError::NonFiniteSurfaceDimension { dimension, value });
    }
    if value <= 0.0 {
        return Err(LayoutError::NonPositiveSurfaceDimension { dimension, value });
    }
    Ok(())
}

/// Clamp `value` into `[min, max]`.
///
/// Applies the lower bound first, then the upper bound, so with
/// `min > max` the result is `max`.
pub fn clamp_width(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Panel widths for one layout pass.
///
/// Recomputed whenever the surface changes; never persisted.
///
/// The visual panel is clamped from what is left after the text panel, not
/// from the surface, so the two widths need not add up to the surface width
/// on very narrow or very wide surfaces. The surrounding container absorbs
/// the difference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutGeometry {
    /// The surface the widths were computed for.
    pub surface: Size,
    /// Width of the heading/overview/toggle column.
    pub text_panel_width: f64,
    /// Width of the module's visual content.
    pub visual_panel_width: f64,
}

impl LayoutGeometry {
    /// Compute panel widths for a surface.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if either dimension is non-finite or not positive.
    pub fn compute(surface_width: f64, surface_height: f64) -> Result<Self, LayoutError> {
        let surface = Size::new(surface_width, surface_height)?;
        Ok(Self::for_surface(surface))
    }

    /// Compute panel widths for an already validated surface.
    pub fn for_surface(surface: Size) -> Self {
        let text_panel_width = clamp_width(
            surface.width() * TEXT_PANEL_WIDTH_FRACTION,
            TEXT_PANEL_MIN_WIDTH,
            TEXT_PANEL_MAX_WIDTH,
        );
        let visual_panel_width = clamp_width(
            surface.width() - text_panel_width,
            VISUAL_PANEL_MIN_WIDTH,
            VISUAL_PANEL_MAX_WIDTH,
        );

        Self {
            surface,
            text_panel_width,
            visual_panel_width,
        }
    }

    /// Surface width minus both panel widths.
    ///
    /// Negative when the panels overflow the surface.
    pub fn unallocated_width(&self) -> f64 {
        self.surface.width() - self.text_panel_width - self.visual_panel_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn geometry(width: f64) -> LayoutGeometry {
        LayoutGeometry::compute(width, 800.0).unwrap()
    }

    #[test]
    fn text_panel_lower_clamp() {
        assert_close(geometry(100.0).text_panel_width, 300.0);
    }

    #[test]
    fn text_panel_upper_clamp() {
        assert_close(geometry(2000.0).text_panel_width, 500.0);
    }

    #[test]
    fn text_panel_unclamped_is_forty_percent() {
        assert_close(geometry(1000.0).text_panel_width, 400.0);
    }

    #[test]
    fn visual_panel_unclamped_takes_remainder() {
        assert_close(geometry(1000.0).visual_panel_width, 600.0);
    }

    #[test]
    fn visual_panel_upper_clamp() {
        assert_close(geometry(3000.0).visual_panel_width, 700.0);
    }

    #[test]
    fn visual_panel_lower_clamp_on_narrow_surface() {
        // 100 - 300 = -200, clamped up to the minimum
        assert_close(geometry(100.0).visual_panel_width, 300.0);
    }

    #[test]
    fn visual_panel_clamps_after_subtraction() {
        // 1200 * 0.4 = 480, 1200 - 480 = 720 -> 700
        let g = geometry(1200.0);
        assert_close(g.text_panel_width, 480.0);
        assert_close(g.visual_panel_width, 700.0);
    }

    #[test]
    fn widths_do_not_sum_to_surface_at_extremes() {
        assert_close(geometry(100.0).unallocated_width(), -500.0);
        assert_close(geometry(3000.0).unallocated_width(), 1800.0);
    }

    #[test]
    fn widths_sum_to_surface_in_the_unclamped_band() {
        assert_close(geometry(1000.0).unallocated_width(), 0.0);
    }

    #[test]
    fn height_does_not_affect_widths() {
        let short = LayoutGeometry::compute(1000.0, 10.0).unwrap();
        let tall = LayoutGeometry::compute(1000.0, 10_000.0).unwrap();
        assert_eq!(short.text_panel_width, tall.text_panel_width);
        assert_eq!(short.visual_panel_width, tall.visual_panel_width);
    }

    #[test]
    fn rejects_zero_width() {
        let err = LayoutGeometry::compute(0.0, 100.0).unwrap_err();
        assert_eq!(
            err,
            LayoutError::NonPositiveSurfaceDimension {
                dimension: Dimension::Width,
                value: 0.0
            }
        );
    }

    #[test]
    fn rejects_negative_height() {
        let err = LayoutGeometry::compute(100.0, -5.0).unwrap_err();
        assert_eq!(
            err,
            LayoutError::NonPositiveSurfaceDimension {
                dimension: Dimension::Height,
                value: -5.0
            }
        );
    }

    #[test]
    fn rejects_nan_width() {
        let err = LayoutGeometry::compute(f64::NAN, 100.0).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::NonFiniteSurfaceDimension {
                dimension: Dimension::Width,
                ..
            }
        ));
    }

    #[test]
    fn rejects_infinite_height() {
        let err = LayoutGeometry::compute(100.0, f64::INFINITY).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::NonFiniteSurfaceDimension {
                dimension: Dimension::Height,
                ..
            }
        ));
    }

    #[test]
    fn width_is_checked_before_height() {
        let err = LayoutGeometry::compute(-1.0, -1.0).unwrap_err();
        assert_eq!(err.dimension(), Dimension::Width);
    }

    #[test]
    fn clamp_width_applies_min_then_max() {
        assert_eq!(clamp_width(50.0, 100.0, 200.0), 100.0);
        assert_eq!(clamp_width(250.0, 100.0, 200.0), 200.0);
        assert_eq!(clamp_width(150.0, 100.0, 200.0), 150.0);
        assert_eq!(clamp_width(150.0, 300.0, 200.0), 200.0);
    }

    #[test]
    fn size_exposes_validated_dimensions() {
        let size = Size::new(640.0, 480.0).unwrap();
        assert_eq!(size.width(), 640.0);
        assert_eq!(size.height(), 480.0);
    }

    #[test]
    fn size_new_is_the_only_way_past_validation() {
        assert!(Size::new(-5.0, 100.0).is_err());
        assert!(Size::new(100.0, f64::NAN).is_err());
    }

    #[test]
    fn for_surface_matches_compute() {
        let size = Size::new(1200.0, 800.0).unwrap();
        assert_eq!(
            LayoutGeometry::for_surface(size),
            LayoutGeometry::compute(1200.0, 800.0).unwrap()
        );
    }

    #[test]
    fn size_serializes_both_dimensions() {
        let json = serde_json::to_value(Size::new(300.0, 200.0).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "width": 300.0, "height": 200.0 }));
    }
}

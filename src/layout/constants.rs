//! Presentation constants for the detail screen.
//!
//! Centralized location for every fixed number the layout uses. All values
//! are in layout points (the same unit as the surface size).

/// Share of the surface width targeted by the text panel.
pub const TEXT_PANEL_WIDTH_FRACTION: f64 = 0.4;

/// Narrowest the text panel may become.
pub const TEXT_PANEL_MIN_WIDTH: f64 = 300.0;

/// Widest the text panel may become.
pub const TEXT_PANEL_MAX_WIDTH: f64 = 500.0;

/// Narrowest the visual panel may become.
pub const VISUAL_PANEL_MIN_WIDTH: f64 = 300.0;

/// Widest the visual panel may become.
pub const VISUAL_PANEL_MAX_WIDTH: f64 = 700.0;

/// Horizontal gap between the text panel and the visual panel.
pub const PANEL_SPACING: f64 = 60.0;

/// Vertical shift applied to the whole two-panel arrangement.
///
/// Negative moves the arrangement up.
pub const ARRANGEMENT_OFFSET_Y: f64 = -30.0;

/// Margin applied on every side of the composed scene.
pub const OUTER_MARGIN: f64 = 70.0;

/// Font size of the heading.
pub const HEADING_FONT_SIZE: f64 = 50.0;

/// Height reserved for the heading line.
pub const HEADING_LINE_HEIGHT: f64 = 60.0;

/// Space below the heading.
pub const HEADING_PADDING_BOTTOM: f64 = 15.0;

/// Space below the overview text.
pub const OVERVIEW_PADDING_BOTTOM: f64 = 30.0;

/// Height of the toggle control.
pub const TOGGLE_CONTROL_HEIGHT: f64 = 44.0;

/// Side length of the square settings trigger.
pub const SETTINGS_TRIGGER_SIZE: f64 = 44.0;

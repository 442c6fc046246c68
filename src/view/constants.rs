//! Layout dimension constants for terminal rendering.

/// Height of the status bar in lines.
///
/// Single line at the bottom of the screen for the module name and
/// keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

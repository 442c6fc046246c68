//! Domain-level keyboard actions independent of key bindings.

use crate::model::ModuleVariant;

/// Domain-level actions for the interactive preview.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Show a specific module. Default: 1/2/3
    SelectModule(ModuleVariant),
    /// Show the next module, wrapping. Default: Tab/l/→
    NextModule,
    /// Show the previous module, wrapping. Default: Shift+Tab/h/←
    PrevModule,
    /// Flip the current module's toggle control. Default: t/Space
    FlipToggle,
    /// Show or hide the settings affordance. Default: s
    ToggleSettings,
    /// Exit the preview. Default: q/Esc/Ctrl+C
    Quit,
}

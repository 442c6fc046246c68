//! Application state and transitions.
//!
//! AppState holds everything the preview needs to recompose the detail
//! screen. Transitions are driven by [`KeyAction`]s and never touch the
//! terminal.

use crate::layout::{compose, SceneDescription};
use crate::model::{KeyAction, LayoutError, ModuleVariant};
use crate::registry;
use std::collections::HashSet;

/// Preview state. Pure data, no side effects.
///
/// The settings affordance flag is owned here and passed explicitly into
/// [`compose`] on every frame; composition itself reads no shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Module currently shown.
    pub module: ModuleVariant,

    /// Whether the settings affordance is overlaid.
    pub show_settings: bool,

    /// Modules whose toggle control is switched on.
    ///
    /// Each module keeps its own toggle state while another module is shown.
    active_toggles: HashSet<ModuleVariant>,

    /// Set once the user asks to quit.
    pub should_quit: bool,
}

impl AppState {
    /// Create state showing `module`.
    pub fn new(module: ModuleVariant, show_settings: bool) -> Self {
        Self {
            module,
            show_settings,
            active_toggles: HashSet::new(),
            should_quit: false,
        }
    }

    /// Whether `module`'s toggle control is switched on.
    pub fn is_toggle_active(&self, module: ModuleVariant) -> bool {
        self.active_toggles.contains(&module)
    }

    /// Label for the current module's toggle control.
    pub fn toggle_label(&self) -> &'static str {
        registry::resolve(self.module).toggle_label(self.is_toggle_active(self.module))
    }

    /// Flip the current module's toggle control.
    pub fn flip_toggle(&mut self) {
        if !self.active_toggles.remove(&self.module) {
            self.active_toggles.insert(self.module);
        }
    }

    /// Apply a user action.
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::SelectModule(module) => self.module = module,
            KeyAction::NextModule => self.module = self.module.next(),
            KeyAction::PrevModule => self.module = self.module.prev(),
            KeyAction::FlipToggle => self.flip_toggle(),
            KeyAction::ToggleSettings => self.show_settings = !self.show_settings,
            KeyAction::Quit => self.should_quit = true,
        }
    }

    /// Compose the detail screen for the current state on a surface.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the surface size is rejected.
    pub fn scene(
        &self,
        surface_width: f64,
        surface_height: f64,
    ) -> Result<SceneDescription, LayoutError> {
        compose(
            self.module,
            surface_width,
            surface_height,
            self.show_settings,
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ModuleVariant::Globe, false)
    }
}

//! Per-module dispatch of toggle control, content view and background.
//!
//! This is the single place that decides which collaborator renderables a
//! module uses. The mapping is a total function over [`ModuleVariant`]: each
//! decision is an exhaustive `match`, so a new variant cannot be added
//! without also deciding its bindings here.

use crate::model::{ModuleVariant, RegistryError, ViewHandle};
use serde::Serialize;

/// The renderables a module contributes to the detail screen.
///
/// Derived on demand by [`resolve`]; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ModuleBinding {
    /// The module this binding was resolved for.
    pub variant: ModuleVariant,
    /// Interactive control shown at the bottom of the text panel.
    pub toggle_control: ViewHandle,
    /// Primary visual content shown in the visual panel.
    pub content_view: ViewHandle,
    /// Full-bleed background drawn beneath everything, if the module has one.
    pub background: Option<ViewHandle>,
}

impl ModuleBinding {
    /// Label for the toggle control in its current state.
    ///
    /// `active` is true while the module's immersive content is shown.
    pub fn toggle_label(&self, active: bool) -> &'static str {
        match (self.variant, active) {
            (ModuleVariant::Globe, false) => "View Globe",
            (ModuleVariant::Globe, true) => "Hide Globe",
            (ModuleVariant::Orbit, false) => "View Orbits",
            (ModuleVariant::Orbit, true) => "Hide Orbits",
            (ModuleVariant::Solar, false) => "View Outer Space",
            (ModuleVariant::Solar, true) => "Exit the Solar System",
        }
    }
}

/// Resolve the bindings for a module.
///
/// Pure; never fails for a typed variant.
pub fn resolve(variant: ModuleVariant) -> ModuleBinding {
    let (toggle_control, content_view) = match variant {
        ModuleVariant::Globe => (ViewHandle::GLOBE_TOGGLE, ViewHandle::GLOBE_MODULE),
        ModuleVariant::Orbit => (ViewHandle::ORBIT_TOGGLE, ViewHandle::ORBIT_MODULE),
        ModuleVariant::Solar => (
            ViewHandle::SOLAR_SYSTEM_TOGGLE,
            ViewHandle::SOLAR_SYSTEM_MODULE,
        ),
    };

    ModuleBinding {
        variant,
        toggle_control,
        content_view,
        background: background_for(variant),
    }
}

/// Resolve the bindings for an untrusted module identifier.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidVariant`] if `id` names no module. No
/// partial or default binding is produced in that case.
pub fn resolve_id(id: &str) -> Result<ModuleBinding, RegistryError> {
    let variant: ModuleVariant = id.parse()?;
    Ok(resolve(variant))
}

fn background_for(variant: ModuleVariant) -> Option<ViewHandle> {
    match variant {
        ModuleVariant::Solar => Some(ViewHandle::SOLAR_BACKGROUND),
        ModuleVariant::Globe | ModuleVariant::Orbit => None,
    }
}

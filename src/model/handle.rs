//! Opaque handles to renderables supplied by the module-content collaborator.

use serde::Serialize;
use std::fmt;

/// Names a renderable (a control, a visual module, or an image asset) that
/// lives outside this crate.
///
/// Handles compare by key. The layout only places them; drawing is up to
/// whoever consumes the [`SceneDescription`](crate::layout::SceneDescription).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ViewHandle(&'static str);

impl ViewHandle {
    /// Globe toggle shown in the text panel.
    pub const GLOBE_TOGGLE: ViewHandle = ViewHandle("globe-toggle");
    /// Orbit toggle shown in the text panel.
    pub const ORBIT_TOGGLE: ViewHandle = ViewHandle("orbit-toggle");
    /// Solar system toggle shown in the text panel.
    pub const SOLAR_SYSTEM_TOGGLE: ViewHandle = ViewHandle("solar-system-toggle");
    /// Globe visual module.
    pub const GLOBE_MODULE: ViewHandle = ViewHandle("globe-module");
    /// Orbit visual module.
    pub const ORBIT_MODULE: ViewHandle = ViewHandle("orbit-module");
    /// Solar system visual module.
    pub const SOLAR_SYSTEM_MODULE: ViewHandle = ViewHandle("solar-system-module");
    /// Themed full-bleed background image asset.
    pub const SOLAR_BACKGROUND: ViewHandle = ViewHandle("SolarBackground");

    /// The collaborator-facing key.
    pub fn key(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_compare_by_key() {
        assert_eq!(ViewHandle::GLOBE_TOGGLE, ViewHandle::GLOBE_TOGGLE);
        assert_ne!(ViewHandle::GLOBE_TOGGLE, ViewHandle::GLOBE_MODULE);
    }

    #[test]
    fn serializes_as_bare_key() {
        let json = serde_json::to_string(&ViewHandle::SOLAR_BACKGROUND).unwrap();
        assert_eq!(json, "\"SolarBackground\"");
    }
}

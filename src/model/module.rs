//! The closed set of content modules shown on the detail screen.

use crate::model::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the interactive content modules the detail screen can present.
///
/// The set is closed: every consumer matches on it exhaustively, so adding a
/// variant is a compile error everywhere a per-variant decision is made.
///
/// Serializes as its stable identifier (`"globe"`, `"orbit"`, `"solar"`).
/// Deserialization accepts only those identifiers; anything else is rejected
/// with [`RegistryError::InvalidVariant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ModuleVariant {
    /// Earth as a rotating globe.
    Globe,
    /// Satellites and the Moon in orbit around Earth.
    Orbit,
    /// The Sun, Earth and Moon in outer space.
    Solar,
}

impl ModuleVariant {
    /// Every variant, in declaration order.
    pub const ALL: [ModuleVariant; 3] = [Self::Globe, Self::Orbit, Self::Solar];

    /// Iterate over every variant in declaration order.
    pub fn iter() -> impl Iterator<Item = ModuleVariant> {
        Self::ALL.into_iter()
    }

    /// Stable lowercase identifier used in config files, the CLI and JSON.
    pub fn id(self) -> &'static str {
        match self {
            Self::Globe => "globe",
            Self::Orbit => "orbit",
            Self::Solar => "solar",
        }
    }

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Globe => "Globe",
            Self::Orbit => "Orbit",
            Self::Solar => "Solar System",
        }
    }

    /// Title shown at the top of the text panel. Never empty.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Globe => "Planet Earth",
            Self::Orbit => "Objects in Orbit",
            Self::Solar => "The Solar System",
        }
    }

    /// Body text shown beneath the heading. Never empty.
    pub fn overview(self) -> &'static str {
        match self {
            Self::Globe => {
                "You can't feel it, but Earth is always in motion. It spins on a tilted \
                 axis once a day and circles the Sun once a year, and those two movements \
                 shape our days, nights, and seasons."
            }
            Self::Orbit => {
                "Thousands of objects circle our planet, from the Moon to satellites and \
                 space stations. Each one follows a path set by its speed and by the pull \
                 of Earth's gravity."
            }
            Self::Solar => {
                "Eight planets travel around the Sun, along with moons, asteroids, and \
                 comets. Step outside the atmosphere to see how the Sun lights the Earth \
                 and the Moon."
            }
        }
    }

    /// The variant after this one, wrapping around.
    pub fn next(self) -> ModuleVariant {
        match self {
            Self::Globe => Self::Orbit,
            Self::Orbit => Self::Solar,
            Self::Solar => Self::Globe,
        }
    }

    /// The variant before this one, wrapping around.
    pub fn prev(self) -> ModuleVariant {
        match self {
            Self::Globe => Self::Solar,
            Self::Orbit => Self::Globe,
            Self::Solar => Self::Orbit,
        }
    }
}

impl fmt::Display for ModuleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ModuleVariant {
    type Err = RegistryError;

    /// Parse an identifier, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::iter()
            .find(|variant| variant.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RegistryError::InvalidVariant {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for ModuleVariant {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ModuleVariant> for &'static str {
    fn from(variant: ModuleVariant) -> Self {
        variant.id()
    }
}

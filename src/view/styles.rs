//! Scene node styling configuration.
//!
//! Provides distinct styles for the heading, body text, toggle control,
//! content frame, background and settings trigger.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== SceneStyles =====

/// Styles for each kind of scene node.
///
/// Bold and reversed modifiers survive with colors disabled so the heading
/// and an active toggle stay distinguishable on monochrome terminals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneStyles {
    heading: Style,
    overview: Style,
    toggle: Style,
    toggle_active: Style,
    content_border: Style,
    background: Style,
    settings_trigger: Style,
}

impl SceneStyles {
    /// Create styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if !config.colors_enabled() {
            return Self::plain();
        }

        Self {
            heading: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            overview: Style::default().fg(Color::Gray),
            toggle: Style::default().fg(Color::Cyan),
            toggle_active: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            content_border: Style::default().fg(Color::Blue),
            background: Style::default().bg(Color::Rgb(10, 12, 40)),
            settings_trigger: Style::default().fg(Color::Yellow),
        }
    }

    /// Styles with no colors at all.
    pub fn plain() -> Self {
        Self {
            heading: Style::default().add_modifier(Modifier::BOLD),
            overview: Style::default(),
            toggle: Style::default(),
            toggle_active: Style::default().add_modifier(Modifier::REVERSED),
            content_border: Style::default(),
            background: Style::default(),
            settings_trigger: Style::default(),
        }
    }

    /// Heading text.
    pub fn heading(&self) -> Style {
        self.heading
    }

    /// Overview body text.
    pub fn overview(&self) -> Style {
        self.overview
    }

    /// Toggle control, depending on whether it is switched on.
    pub fn toggle(&self, active: bool) -> Style {
        if active {
            self.toggle_active
        } else {
            self.toggle
        }
    }

    /// Border around the content view stand-in.
    pub fn content_border(&self) -> Style {
        self.content_border
    }

    /// Full-bleed background fill.
    pub fn background(&self) -> Style {
        self.background
    }

    /// Settings trigger.
    pub fn settings_trigger(&self) -> Style {
        self.settings_trigger
    }
}

impl Default for SceneStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

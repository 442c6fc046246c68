//! Terminal rendering of a [`SceneDescription`].
//!
//! Projects layout points onto terminal cells and draws each node with a
//! stand-in widget: text nodes as text, collaborator handles as labeled
//! boxes. Nodes are drawn in tree order, so later siblings land on top.

use crate::layout::{Frame, NodeKind, SceneDescription};
use crate::view::styles::SceneStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthChar;

/// Layout points per terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellScale {
    /// Points covered by one column.
    pub points_per_column: f64,
    /// Points covered by one row.
    pub points_per_row: f64,
}

impl CellScale {
    /// Create a scale.
    ///
    /// Performs no checks. Factors read from a config file have already been
    /// rejected by [`load_config_file`](crate::config::load_config_file)
    /// unless they are finite and positive, and the defaults are positive.
    pub fn new(points_per_column: f64, points_per_row: f64) -> Self {
        Self {
            points_per_column,
            points_per_row,
        }
    }

    /// Surface size, in points, for an area of terminal cells.
    pub fn surface_of(&self, area: Rect) -> (f64, f64) {
        (
            f64::from(area.width) * self.points_per_column,
            f64::from(area.height) * self.points_per_row,
        )
    }

    /// Cells covered by `frame`, clipped to `area`.
    ///
    /// Returns `None` when nothing of the frame is visible.
    pub fn project(&self, frame: &Frame, area: Rect) -> Option<Rect> {
        let clip = |points: f64, per_cell: f64, max: u16| -> u16 {
            // Clamped into 0..=max before the cast, so it cannot truncate
            (points / per_cell).round().clamp(0.0, f64::from(max)) as u16
        };

        let left = clip(frame.x, self.points_per_column, area.width);
        let right = clip(frame.max_x(), self.points_per_column, area.width);
        let top = clip(frame.y, self.points_per_row, area.height);
        let bottom = clip(frame.max_y(), self.points_per_row, area.height);

        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(
            area.x + left,
            area.y + top,
            right - left,
            bottom - top,
        ))
    }
}

impl Default for CellScale {
    fn default() -> Self {
        Self::new(10.0, 20.0)
    }
}

/// Draws a composed scene into a terminal area.
pub struct SceneWidget<'a> {
    scene: &'a SceneDescription,
    scale: CellScale,
    toggle_label: &'a str,
    toggle_active: bool,
    styles: &'a SceneStyles,
}

impl<'a> SceneWidget<'a> {
    /// Create a widget for `scene`.
    ///
    /// `toggle_label` and `toggle_active` describe the toggle control's
    /// current state, which lives outside the scene.
    pub fn new(
        scene: &'a SceneDescription,
        scale: CellScale,
        toggle_label: &'a str,
        toggle_active: bool,
        styles: &'a SceneStyles,
    ) -> Self {
        Self {
            scene,
            scale,
            toggle_label,
            toggle_active,
            styles,
        }
    }
}

impl Widget for SceneWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (_, node) in self.scene.nodes() {
            let Some(rect) = self.scale.project(&node.frame, area) else {
                continue;
            };

            match &node.kind {
                NodeKind::Root
                | NodeKind::Arrangement { .. }
                | NodeKind::TextPanel { .. }
                | NodeKind::VisualPanel { .. } => {}
                NodeKind::Background { .. } => {
                    Block::default()
                        .style(self.styles.background())
                        .render(rect, buf);
                }
                NodeKind::Heading { text, .. } => {
                    Paragraph::new(truncate_to_width(text, rect.width))
                        .style(self.styles.heading())
                        .render(rect, buf);
                }
                NodeKind::Overview { text } => {
                    Paragraph::new(*text)
                        .style(self.styles.overview())
                        .wrap(Wrap { trim: true })
                        .render(rect, buf);
                }
                NodeKind::ToggleControl { .. } => {
                    let label = format!("[ {} ]", self.toggle_label);
                    Paragraph::new(truncate_to_width(&label, rect.width))
                        .style(self.styles.toggle(self.toggle_active))
                        .render(rect, buf);
                }
                NodeKind::ContentView { handle } => {
                    let block = Block::default()
                        .borders(Borders::ALL)
                        .border_style(self.styles.content_border())
                        .title(truncate_to_width(
                            handle.key(),
                            rect.width.saturating_sub(2),
                        ));
                    let inner = block.inner(rect);
                    block.render(rect, buf);
                    if inner.height > 0 {
                        let name = self.scene.variant.name();
                        let middle = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
                        Paragraph::new(Line::from(truncate_to_width(name, inner.width)))
                            .alignment(Alignment::Center)
                            .render(middle, buf);
                    }
                }
                NodeKind::SettingsTrigger { .. } => {
                    Paragraph::new(truncate_to_width("[⚙]", rect.width))
                        .style(self.styles.settings_trigger())
                        .alignment(Alignment::Center)
                        .render(rect, buf);
                }
            }
        }
    }
}

/// Cut `text` to at most `max_width` terminal columns.
pub fn truncate_to_width(text: &str, max_width: u16) -> String {
    let max_width = usize::from(max_width);
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compose;
    use crate::model::ModuleVariant;
    use crate::registry;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    /// Cell symbols row by row, trailing spaces and blank rows dropped.
    fn buffer_to_string(buf: &Buffer) -> String {
        let area = buf.area;
        let mut lines = Vec::new();
        for y in area.top()..area.bottom() {
            let mut line = String::new();
            for x in area.left()..area.right() {
                line.push_str(buf[(x, y)].symbol());
            }
            let trimmed = line.trim_end();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }
        lines.join("\n")
    }

    fn draw_scene_sized(variant: ModuleVariant, settings: bool, width: u16, height: u16) -> String {
        let scale = CellScale::default();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let styles = SceneStyles::plain();
        let toggle_label = registry::resolve(variant).toggle_label(false);

        terminal
            .draw(|frame| {
                let area = frame.area();
                let (w, h) = scale.surface_of(area);
                let scene = compose(variant, w, h, settings).unwrap();
                frame.render_widget(
                    SceneWidget::new(&scene, scale, toggle_label, false, &styles),
                    area,
                );
            })
            .unwrap();

        buffer_to_string(terminal.backend().buffer())
    }

    /// 80x24 cells is an 800x480 point surface at the default scale.
    fn draw_scene(variant: ModuleVariant, settings: bool) -> String {
        draw_scene_sized(variant, settings, 80, 24)
    }

    #[test]
    fn project_scales_and_rounds() {
        let scale = CellScale::new(10.0, 20.0);
        let area = Rect::new(0, 0, 100, 50);
        let rect = scale.project(&Frame::new(100.0, 40.0, 200.0, 100.0), area);
        assert_eq!(rect, Some(Rect::new(10, 2, 20, 5)));
    }

    #[test]
    fn project_clips_negative_origin() {
        let scale = CellScale::new(10.0, 20.0);
        let area = Rect::new(0, 0, 100, 50);
        let rect = scale.project(&Frame::new(-50.0, -40.0, 100.0, 100.0), area);
        assert_eq!(rect, Some(Rect::new(0, 0, 5, 3)));
    }

    #[test]
    fn project_clips_to_area_and_offsets() {
        let scale = CellScale::new(10.0, 20.0);
        let area = Rect::new(2, 1, 10, 5);
        let rect = scale.project(&Frame::new(50.0, 0.0, 500.0, 500.0), area);
        assert_eq!(rect, Some(Rect::new(7, 1, 5, 5)));
    }

    #[test]
    fn project_returns_none_outside_area() {
        let scale = CellScale::new(10.0, 20.0);
        let area = Rect::new(0, 0, 10, 5);
        assert_eq!(scale.project(&Frame::new(200.0, 0.0, 50.0, 50.0), area), None);
        assert_eq!(scale.project(&Frame::new(0.0, 0.0, 0.0, 50.0), area), None);
    }

    #[test]
    fn surface_of_multiplies_cells_by_scale() {
        let scale = CellScale::new(10.0, 20.0);
        assert_eq!(scale.surface_of(Rect::new(0, 0, 120, 40)), (1200.0, 800.0));
    }

    #[test]
    fn renders_on_tiny_area_without_panicking() {
        let _ = draw_scene_sized(ModuleVariant::Solar, true, 3, 2);
    }

    #[test]
    fn truncate_respects_wide_characters() {
        assert_eq!(truncate_to_width("abcdef", 3), "abc");
        assert_eq!(truncate_to_width("日本語", 5), "日本");
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    // ===== Snapshots =====

    #[test]
    fn snapshot_globe_without_settings() {
        insta::assert_snapshot!(draw_scene(ModuleVariant::Globe, false), @r"
        Planet Earth                       ┌globe-module───────────────────────────────┐
                                           │                                           │
                                           │                                           │
                                           │                                           │
        You can't feel it, but Earth       │                                           │
        is always in motion. It spins      │                                           │
        on a tilted axis once a day        │                                           │
        and circles the Sun once a         │                                           │
        year, and those two movements      │                   Globe                   │
        shape our days, nights, and        │                                           │
        seasons.                           │                                           │
                                           │                                           │
                                           │                                           │
                                           │                                           │
                                           │                                           │
        [ View Globe ]                     │                                           │
                                           └───────────────────────────────────────────┘
        ");
    }

    #[test]
    fn snapshot_globe_with_settings() {
        insta::assert_snapshot!(draw_scene(ModuleVariant::Globe, true), @r"
        Planet Earth                       ┌globe-module───────────────────────────────┐
                                           │                                           │
                                           │                                           │
                                           │                                           │
        You can't feel it, but Earth       │                                           │
        is always in motion. It spins      │                                           │
        on a tilted axis once a day        │                                           │
        and circles the Sun once a         │                                           │
        year, and those two movements      │                   Globe                   │
        shape our days, nights, and        │                                           │
        seasons.                           │                                           │
                                           │                                           │
                                           │                                           │
                                           │                                           │
                                           │                                           │
        [ View Globe ]                     │                                           │
                                           └───────────────────────────────────────────┘
                                               [⚙]
        ");
    }

    #[test]
    fn snapshot_orbit_without_settings() {
        insta::assert_snapshot!(draw_scene(ModuleVariant::Orbit, false), @r"
        Objects in Orbit                   ┌orbit-module───────────────────────────────┐
                                           │                                           │
                                           │                                           │
                                           │                                           │
        Thousands of objects circle        │                                           │
        our planet, from the Moon to       │                                           │
        satellites and space               │                                           │
        stations. Each one follows a       │                                           │
        path set by its speed and by       │                   Orbit                   │
        the pull of Earth's gravity.       │                                           │
                                           │                                           │
                                           │                                           │
                                           │                                           │
                                           │                                           │
                                           │                                           │
        [ View Orbits ]                    │                                           │
                                           └───────────────────────────────────────────┘
        ");
    }

    #[test]
    fn snapshot_orbit_with_settings() {
        insta::assert_snapshot!(draw_scene(ModuleVariant::Orbit, true), @r"
        Objects in Orbit                   ┌orbit-module───────────────────────────────┐
                                           │                                           │
                                           │                                           │
                                           │                                           │
        Thousands of objects circle        │                                           │
        our planet, from the Moon to       │                                           │
        satellites and space               │                                           │
        stations. Each one follows a       │                                           │
        path set by its speed and by       │                   Orbit                   │
        the pull of Earth's gravity.       │                                           │
                                           │                                           │
                                           │                                           │
                                           │                                           │
                                           │                                           │
                                           │                                           │
        [ View Orbits ]                    │                                           │
                                           └───────────────────────────────────────────┘
                                               [⚙]
        ");
    }

    #[test]
    fn snapshot_solar_without_settings() {
        insta::assert_snapshot!(draw_scene(ModuleVariant::Solar, false), @r"
        The Solar System                   ┌solar-system-module────────────────────────┐
                                           │                                           │
                                           │                                           │
                                           │                                           │
        Eight planets travel around        │                                           │
        the Sun, along with moons,         │                                           │
        asteroids, and comets. Step        │                                           │
        outside the atmosphere to see      │                                           │
        how the Sun lights the Earth       │               Solar System                │
        and the Moon.                      │                                           │
                                           │                                           │
                                           │                                           │
                                           │                                           │
                                           │                                           │
                                           │                                           │
        [ View Outer Space ]               │                                           │
                                           └───────────────────────────────────────────┘
        ");
    }

    #[test]
    fn snapshot_solar_with_settings() {
        insta::assert_snapshot!(draw_scene(ModuleVariant::Solar, true), @r"
        The Solar System                   ┌solar-system-module────────────────────────┐
                                           │                                           │
                                           │                                           │
                                           │                                           │
        Eight planets travel around        │                                           │
        the Sun, along with moons,         │                                           │
        asteroids, and comets. Step        │                                           │
        outside the atmosphere to see      │                                           │
        how the Sun lights the Earth       │               Solar System                │
        and the Moon.                      │                                           │
                                           │                                           │
                                           │                                           │
                                           │                                           │
                                           │                                           │
                                           │                                           │
        [ View Outer Space ]               │                                           │
                                           └───────────────────────────────────────────┘
                                               [⚙]
        ");
    }
}

//! Scene composition for the detail screen.

use crate::layout::constants::{
    ARRANGEMENT_OFFSET_Y, HEADING_FONT_SIZE, HEADING_LINE_HEIGHT, HEADING_PADDING_BOTTOM,
    OUTER_MARGIN, OVERVIEW_PADDING_BOTTOM, PANEL_SPACING, SETTINGS_TRIGGER_SIZE,
    TOGGLE_CONTROL_HEIGHT,
};
use crate::layout::geometry::LayoutGeometry;
use crate::layout::scene::{
    ContentMode, Frame, HorizontalAlignment, NodeKind, SceneDescription, SceneNode,
};
use crate::model::{DetailError, LayoutError, ModuleVariant, ViewHandle};
use crate::registry::{self, ModuleBinding};
use tracing::{debug, warn};

/// Compose the detail screen for `variant` on a surface of the given size.
///
/// Root children, back to front:
/// 1. the module's background, stretched over the whole surface (Solar only)
/// 2. the text panel / visual panel arrangement, inside the outer margin
/// 3. the settings trigger, only when `show_settings_affordance` is set
///
/// Pure: identical inputs always yield an identical scene.
///
/// # Errors
///
/// Returns [`LayoutError`] if either dimension is non-finite or not positive.
pub fn compose(
    variant: ModuleVariant,
    surface_width: f64,
    surface_height: f64,
    show_settings_affordance: bool,
) -> Result<SceneDescription, LayoutError> {
    let geometry = LayoutGeometry::compute(surface_width, surface_height).inspect_err(|err| {
        warn!(%variant, surface_width, surface_height, error = %err, "Rejected surface size");
    })?;
    let binding = registry::resolve(variant);

    let surface = Frame::new(0.0, 0.0, surface_width, surface_height);
    let content = surface.inset(OUTER_MARGIN);

    let mut children = Vec::with_capacity(3);
    if let Some(background) = binding.background {
        children.push(background_node(background, surface));
    }
    children.push(arrangement_node(&binding, &geometry, content));
    if show_settings_affordance {
        children.push(settings_trigger_node(variant, surface));
    }

    debug!(
        %variant,
        surface_width,
        surface_height,
        text_panel_width = geometry.text_panel_width,
        visual_panel_width = geometry.visual_panel_width,
        show_settings_affordance,
        "Composed detail scene"
    );

    Ok(SceneDescription {
        variant,
        geometry,
        root: SceneNode::with_children(NodeKind::Root, surface, children),
    })
}

/// Compose the detail screen for an untrusted module identifier.
///
/// # Errors
///
/// - [`DetailError::Registry`] if `module_id` names no module
/// - [`DetailError::Layout`] if the surface size is rejected
pub fn compose_by_id(
    module_id: &str,
    surface_width: f64,
    surface_height: f64,
    show_settings_affordance: bool,
) -> Result<SceneDescription, DetailError> {
    let variant = module_id.parse::<ModuleVariant>().inspect_err(|err| {
        warn!(module_id, error = %err, "Rejected module identifier");
    })?;
    Ok(compose(
        variant,
        surface_width,
        surface_height,
        show_settings_affordance,
    )?)
}

fn background_node(handle: ViewHandle, surface: Frame) -> SceneNode {
    SceneNode::leaf(
        NodeKind::Background {
            handle,
            content_mode: ContentMode::Fill,
        },
        surface,
    )
}

/// Text panel and visual panel side by side, centered horizontally in
/// `content` and shifted by the arrangement offset.
fn arrangement_node(binding: &ModuleBinding, geometry: &LayoutGeometry, content: Frame) -> SceneNode {
    let width = geometry.text_panel_width + PANEL_SPACING + geometry.visual_panel_width;
    let height = content.height;
    // May go negative when the panels overflow the content area
    let x = content.x + (content.width - width) / 2.0;
    let y = content.y + ARRANGEMENT_OFFSET_Y;

    let text_frame = Frame::new(x, y, geometry.text_panel_width, height);
    let visual_frame = Frame::new(
        text_frame.max_x() + PANEL_SPACING,
        y,
        geometry.visual_panel_width,
        height,
    );

    SceneNode::with_children(
        NodeKind::Arrangement {
            spacing: PANEL_SPACING,
        },
        Frame::new(x, y, width, height),
        vec![
            text_panel_node(binding, text_frame),
            visual_panel_node(binding, visual_frame),
        ],
    )
}

/// Heading, overview and toggle stacked top-down. The overview takes
/// whatever height the fixed-size rows leave over.
fn text_panel_node(binding: &ModuleBinding, panel: Frame) -> SceneNode {
    let variant = binding.variant;

    let heading = Frame::new(panel.x, panel.y, panel.width, HEADING_LINE_HEIGHT);

    let overview_y = heading.max_y() + HEADING_PADDING_BOTTOM;
    let overview_height = panel.height
        - HEADING_LINE_HEIGHT
        - HEADING_PADDING_BOTTOM
        - OVERVIEW_PADDING_BOTTOM
        - TOGGLE_CONTROL_HEIGHT;
    let overview = Frame::new(panel.x, overview_y, panel.width, overview_height);

    let toggle = Frame::new(
        panel.x,
        overview.max_y() + OVERVIEW_PADDING_BOTTOM,
        panel.width,
        TOGGLE_CONTROL_HEIGHT,
    );

    SceneNode::with_children(
        NodeKind::TextPanel {
            alignment: HorizontalAlignment::Leading,
        },
        panel,
        vec![
            SceneNode::leaf(
                NodeKind::Heading {
                    text: variant.heading(),
                    font_size: HEADING_FONT_SIZE,
                    bold: true,
                },
                heading,
            ),
            SceneNode::leaf(
                NodeKind::Overview {
                    text: variant.overview(),
                },
                overview,
            ),
            SceneNode::leaf(
                NodeKind::ToggleControl {
                    handle: binding.toggle_control,
                },
                toggle,
            ),
        ],
    )
}

fn visual_panel_node(binding: &ModuleBinding, panel: Frame) -> SceneNode {
    SceneNode::with_children(
        NodeKind::VisualPanel {
            alignment: HorizontalAlignment::Center,
        },
        panel,
        vec![SceneNode::leaf(
            NodeKind::ContentView {
                handle: binding.content_view,
            },
            panel,
        )],
    )
}

/// Centered in the bottom margin band, below the content area.
fn settings_trigger_node(variant: ModuleVariant, surface: Frame) -> SceneNode {
    let x = surface.x + (surface.width - SETTINGS_TRIGGER_SIZE) / 2.0;
    let y = surface.max_y() - (OUTER_MARGIN + SETTINGS_TRIGGER_SIZE) / 2.0;
    SceneNode::leaf(
        NodeKind::SettingsTrigger { module: variant },
        Frame::new(x, y, SETTINGS_TRIGGER_SIZE, SETTINGS_TRIGGER_SIZE),
    )
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;

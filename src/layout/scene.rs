//! Immutable scene tree produced by composition.
//!
//! A [`SceneDescription`] is an ordered tree: earlier siblings are drawn
//! beneath later ones. Every node carries a resolved [`Frame`] in surface
//! coordinates (origin at the top-left, y growing downward).

use crate::layout::geometry::LayoutGeometry;
use crate::model::{ModuleVariant, ViewHandle};
use serde::Serialize;
use std::fmt;

/// A positioned rectangle in surface coordinates.
///
/// Positions may be negative when content overflows the surface; sizes are
/// never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent, `>= 0`.
    pub width: f64,
    /// Vertical extent, `>= 0`.
    pub height: f64,
}

impl Frame {
    /// Create a frame, flooring negative sizes at zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Shrink by `margin` on every side. Sizes floor at zero.
    pub fn inset(&self, margin: f64) -> Self {
        Self::new(
            self.x + margin,
            self.y + margin,
            self.width - 2.0 * margin,
            self.height - 2.0 * margin,
        )
    }

    /// Whether two frames share any area.
    pub fn intersects(&self, other: &Frame) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }
}

/// How an image is scaled into its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMode {
    /// Preserve aspect ratio and cover the frame, cropping overflow.
    Fill,
    /// Preserve aspect ratio and fit inside the frame, letterboxing.
    Fit,
}

/// Horizontal placement of children inside a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    /// Against the leading edge.
    Leading,
    /// Centered.
    Center,
}

/// What a [`SceneNode`] represents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    /// The whole surface. Always the tree's root.
    Root,
    /// Full-bleed image beneath the arrangement.
    Background {
        /// Image asset to draw.
        handle: ViewHandle,
        /// Scaling behavior.
        content_mode: ContentMode,
    },
    /// Horizontal row holding the text panel and the visual panel.
    Arrangement {
        /// Gap between the two panels.
        spacing: f64,
    },
    /// Column with heading, overview and toggle.
    TextPanel {
        /// Placement of the column's children.
        alignment: HorizontalAlignment,
    },
    /// Title text.
    Heading {
        /// The text to draw.
        text: &'static str,
        /// Font size in points.
        font_size: f64,
        /// Whether the heading is bold.
        bold: bool,
    },
    /// Body text.
    Overview {
        /// The text to draw.
        text: &'static str,
    },
    /// The module's interactive control.
    ToggleControl {
        /// Control to draw.
        handle: ViewHandle,
    },
    /// Container for the module's visual content.
    VisualPanel {
        /// Placement of the content.
        alignment: HorizontalAlignment,
    },
    /// The module's visual content.
    ContentView {
        /// Renderable to draw.
        handle: ViewHandle,
    },
    /// Trigger that opens the module's settings.
    SettingsTrigger {
        /// Module whose settings it opens.
        module: ModuleVariant,
    },
}

impl NodeKind {
    /// Short lowercase label for outlines and logs.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Background { .. } => "background",
            NodeKind::Arrangement { .. } => "arrangement",
            NodeKind::TextPanel { .. } => "text_panel",
            NodeKind::Heading { .. } => "heading",
            NodeKind::Overview { .. } => "overview",
            NodeKind::ToggleControl { .. } => "toggle_control",
            NodeKind::VisualPanel { .. } => "visual_panel",
            NodeKind::ContentView { .. } => "content_view",
            NodeKind::SettingsTrigger { .. } => "settings_trigger",
        }
    }
}

/// One node in the scene tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNode {
    /// What the node represents.
    #[serde(flatten)]
    pub kind: NodeKind,
    /// Where the node is drawn.
    pub frame: Frame,
    /// Child nodes, back to front.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// A node with no children.
    pub fn leaf(kind: NodeKind, frame: Frame) -> Self {
        Self {
            kind,
            frame,
            children: Vec::new(),
        }
    }

    /// A node with children.
    pub fn with_children(kind: NodeKind, frame: Frame, children: Vec<SceneNode>) -> Self {
        Self {
            kind,
            frame,
            children,
        }
    }
}

/// The composed detail screen, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneDescription {
    /// Module the scene was composed for.
    pub variant: ModuleVariant,
    /// Panel widths used for the composition.
    pub geometry: LayoutGeometry,
    /// Root of the tree, framed to the whole surface.
    pub root: SceneNode,
}

impl SceneDescription {
    /// Depth-first, pre-order traversal of every node, root included.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            stack: vec![(0, &self.root)],
        }
    }

    /// Number of nodes matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&NodeKind) -> bool) -> usize {
        self.nodes().filter(|(_, node)| predicate(&node.kind)).count()
    }

    /// First node, in traversal order, matching `predicate`.
    pub fn find(&self, predicate: impl Fn(&NodeKind) -> bool) -> Option<&SceneNode> {
        self.nodes()
            .map(|(_, node)| node)
            .find(|node| predicate(&node.kind))
    }

    /// The background layer, if the module has one.
    pub fn background(&self) -> Option<&SceneNode> {
        self.find(|kind| matches!(kind, NodeKind::Background { .. }))
    }

    /// The settings trigger, if it was requested.
    pub fn settings_trigger(&self) -> Option<&SceneNode> {
        self.find(|kind| matches!(kind, NodeKind::SettingsTrigger { .. }))
    }

    /// The heading/overview/toggle column.
    pub fn text_panel(&self) -> Option<&SceneNode> {
        self.find(|kind| matches!(kind, NodeKind::TextPanel { .. }))
    }

    /// The visual content column.
    pub fn visual_panel(&self) -> Option<&SceneNode> {
        self.find(|kind| matches!(kind, NodeKind::VisualPanel { .. }))
    }

    /// Handle of the toggle control placed in the text panel.
    pub fn toggle_control(&self) -> Option<ViewHandle> {
        self.nodes().find_map(|(_, node)| match node.kind {
            NodeKind::ToggleControl { handle } => Some(handle),
            _ => None,
        })
    }

    /// Handle of the content view placed in the visual panel.
    pub fn content_view(&self) -> Option<ViewHandle> {
        self.nodes().find_map(|(_, node)| match node.kind {
            NodeKind::ContentView { handle } => Some(handle),
            _ => None,
        })
    }
}

/// Iterator returned by [`SceneDescription::nodes`].
///
/// Yields `(depth, node)` pairs, the root at depth 0.
pub struct Nodes<'a> {
    stack: Vec<(usize, &'a SceneNode)>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = (usize, &'a SceneNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Reversed so the first child is visited first
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

impl fmt::Display for SceneDescription {
    /// Indented outline, one node per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}x{} text={} visual={}",
            self.variant,
            self.geometry.surface.width(),
            self.geometry.surface.height(),
            self.geometry.text_panel_width,
            self.geometry.visual_panel_width,
        )?;
        for (depth, node) in self.nodes() {
            let Frame {
                x,
                y,
                width,
                height,
            } = node.frame;
            write!(
                f,
                "{:indent$}{} [{x}, {y}, {width}x{height}]",
                "",
                node.kind.label(),
                indent = depth * 2
            )?;
            match &node.kind {
                NodeKind::Background { handle, .. }
                | NodeKind::ToggleControl { handle }
                | NodeKind::ContentView { handle } => write!(f, " {handle}")?,
                NodeKind::Heading { text, .. } => write!(f, " {text:?}")?,
                NodeKind::SettingsTrigger { module } => write!(f, " {module}")?,
                _ => {}
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Scene nodes - the output tree of markup conversion.

use serde::{Deserialize, Serialize};

use crate::paint::Paint;

/// The visual kind of a scene node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    /// A container with optional auto-layout.
    Frame,
    /// A text run.
    Text,
    /// A rectangle shape.
    Rectangle,
    /// A positioned grouping of children.
    Group,
    /// A polygonal shape.
    Polygon,
}

/// Stacking axis of a frame's auto-layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    /// No auto-layout; children are absolutely positioned.
    #[default]
    None,
    /// Children stack left to right.
    Horizontal,
    /// Children stack top to bottom.
    Vertical,
}

/// Child alignment along an auto-layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisAlign {
    /// Pack toward the axis start.
    Min,
    /// Center along the axis.
    Center,
    /// Pack toward the axis end.
    Max,
    /// Distribute free space between children (primary axis only).
    SpaceBetween,
    /// Stretch children across the axis (counter axis only).
    Stretch,
    /// Align text baselines (counter axis only).
    Baseline,
}

/// How a node sizes itself along one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutSizing {
    /// Explicit width/height.
    Fixed,
    /// Shrink to content.
    Hug,
    /// Grow to fill the parent.
    Fill,
}

/// One node of the output scene graph.
///
/// Owned exclusively by its parent; `children` preserves source-document
/// order. Optional fields are omitted from serialized output when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    /// Visual kind.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Human-readable node name, derived from tag/id/class.
    pub name: String,
    /// X position, set only when positioning is meaningful.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    /// Y position, set only when positioning is meaningful.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    /// Width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Fill paints, bottom-most first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Paint>>,
    /// Stroke paints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<Paint>>,
    /// Stroke thickness in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f32>,
    /// Corner radius in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,
    /// Auto-layout stacking axis.
    #[serde(default, skip_serializing_if = "is_layout_none")]
    pub layout_mode: LayoutMode,
    /// Alignment along the stacking axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_align_items: Option<AxisAlign>,
    /// Alignment across the stacking axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_align_items: Option<AxisAlign>,
    /// Top padding in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f32>,
    /// Right padding in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f32>,
    /// Bottom padding in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f32>,
    /// Left padding in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f32>,
    /// Gap between auto-layout children in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f32>,
    /// Horizontal sizing behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_sizing_horizontal: Option<LayoutSizing>,
    /// Vertical sizing behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_sizing_vertical: Option<LayoutSizing>,
    /// Text content (TEXT nodes only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    /// Font size in pixels (TEXT nodes only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Child nodes in source-document order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SceneNode>>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_layout_none(mode: &LayoutMode) -> bool {
    *mode == LayoutMode::None
}

impl SceneNode {
    /// Create a node of the given kind with all optional fields unset.
    #[must_use]
    pub fn new(node_type: NodeType, name: impl Into<String>) -> Self {
        Self {
            node_type,
            name: name.into(),
            x: None,
            y: None,
            width: None,
            height: None,
            fills: None,
            strokes: None,
            stroke_weight: None,
            corner_radius: None,
            layout_mode: LayoutMode::None,
            primary_axis_align_items: None,
            counter_axis_align_items: None,
            padding_top: None,
            padding_right: None,
            padding_bottom: None,
            padding_left: None,
            item_spacing: None,
            layout_sizing_horizontal: None,
            layout_sizing_vertical: None,
            characters: None,
            font_size: None,
            children: None,
        }
    }

    /// Create a frame node.
    #[must_use]
    pub fn frame(name: impl Into<String>) -> Self {
        Self::new(NodeType::Frame, name)
    }

    /// Create a text node with the given content.
    #[must_use]
    pub fn text(name: impl Into<String>, characters: impl Into<String>) -> Self {
        let mut node = Self::new(NodeType::Text, name);
        node.characters = Some(characters.into());
        node
    }

    /// Create a rectangle node.
    #[must_use]
    pub fn rectangle(name: impl Into<String>) -> Self {
        Self::new(NodeType::Rectangle, name)
    }

    /// Create a group node.
    #[must_use]
    pub fn group(name: impl Into<String>) -> Self {
        Self::new(NodeType::Group, name)
    }

    /// Create a polygon node.
    #[must_use]
    pub fn polygon(name: impl Into<String>) -> Self {
        Self::new(NodeType::Polygon, name)
    }

    /// Set width and height.
    #[must_use]
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set x and y.
    #[must_use]
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Set the fill paints.
    #[must_use]
    pub fn with_fills(mut self, fills: Vec<Paint>) -> Self {
        self.fills = Some(fills);
        self
    }

    /// Set the child list.
    #[must_use]
    pub fn with_children(mut self, children: Vec<SceneNode>) -> Self {
        self.children = Some(children);
        self
    }

    /// Number of direct children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.as_ref().map_or(0, Vec::len)
    }
}

//! Mapping CSS box-model and flexbox semantics onto the target layout model.
//!
//! The target model's auto-layout is the analogue of CSS flexbox: a stacking
//! axis, per-axis alignment, padding, item spacing and sizing modes. Every
//! function here is a pure field mapping - it sets target fields from the
//! supplied options and touches nothing else.

use sceneforge_scene::{AxisAlign, LayoutMode, LayoutSizing, Paint, SceneNode};

use crate::dom::DomNode;
use crate::style::{BorderOptions, FlexboxOptions, Padding, SizeOptions};

/// The one block-level tag that defaults to a plain container with no
/// stacking axis.
const PLAIN_CONTAINER_TAG: &str = "div";

/// Derive a deterministic node name from tag, `id` and `class`.
///
/// `id` wins over class: `tag#id`, or bare `#id` for the plain-container
/// tag. Otherwise the first class token: `tag.class` or bare `.class`.
/// Otherwise the tag name unchanged.
#[must_use]
pub fn node_name(tag: &str, id: Option<&str>, class: Option<&str>) -> String {
    let prefix = if tag == PLAIN_CONTAINER_TAG { "" } else { tag };
    if let Some(id) = id.filter(|id| !id.is_empty()) {
        return format!("{prefix}#{id}");
    }
    if let Some(class) = class.and_then(|c| c.split_whitespace().next()) {
        return format!("{prefix}.{class}");
    }
    tag.to_string()
}

/// Apply per-tag defaults for a block-level HTML element.
///
/// Sets the derived node name. The plain-container tag (`div`) gets no
/// stacking axis; every other block-level tag defaults to vertical stacking
/// with full-width sizing.
pub fn apply_html_element_defaults(node: &mut SceneNode, tag: &str, source: &DomNode) {
    node.name = node_name(tag, source.attr_str("id"), source.attr_str("class"));
    if tag != PLAIN_CONTAINER_TAG {
        node.layout_mode = LayoutMode::Vertical;
        node.layout_sizing_horizontal = Some(LayoutSizing::Fill);
    }
}

/// Apply flexbox properties to a node's auto-layout fields.
///
/// A no-op unless `display` is exactly `flex`. `flex-direction: column`
/// selects vertical stacking, anything else horizontal. Alignment keywords
/// map onto the target axis alignments; unrecognized or absent keywords
/// default to `MIN`.
pub fn apply_flexbox_styles(node: &mut SceneNode, options: &FlexboxOptions) {
    if options.display.as_deref() != Some("flex") {
        return;
    }

    node.layout_mode = if options.flex_direction.as_deref() == Some("column") {
        LayoutMode::Vertical
    } else {
        LayoutMode::Horizontal
    };

    node.counter_axis_align_items = Some(match options.align_items.as_deref() {
        Some("center") => AxisAlign::Center,
        Some("flex-end") => AxisAlign::Max,
        Some("stretch") => AxisAlign::Stretch,
        _ => AxisAlign::Min,
    });

    node.primary_axis_align_items = Some(match options.justify_content.as_deref() {
        Some("center") => AxisAlign::Center,
        Some("flex-end") => AxisAlign::Max,
        Some("space-between") => AxisAlign::SpaceBetween,
        _ => AxisAlign::Min,
    });

    if let Some(gap) = options.gap {
        node.item_spacing = Some(gap);
    }
}

/// Apply padding to all four sides.
///
/// A uniform value broadcasts. For per-side padding, each side is set to its
/// declared value or **zero** when absent - a padding declaration replaces
/// the whole box, never merging with prior values.
pub fn apply_padding_styles(node: &mut SceneNode, padding: Padding) {
    let (top, right, bottom, left) = match padding {
        Padding::Uniform(v) => (v, v, v, v),
        Padding::PerSide {
            top,
            right,
            bottom,
            left,
        } => (
            top.unwrap_or(0.0),
            right.unwrap_or(0.0),
            bottom.unwrap_or(0.0),
            left.unwrap_or(0.0),
        ),
    };
    node.padding_top = Some(top);
    node.padding_right = Some(right);
    node.padding_bottom = Some(bottom);
    node.padding_left = Some(left);
}

/// Apply border properties, setting only the fields that were supplied.
pub fn apply_border_styles(node: &mut SceneNode, options: &BorderOptions) {
    if let Some(border) = options.border {
        node.strokes = Some(vec![
            Paint::solid(border.color.rgb()).with_opacity(border.color.a),
        ]);
        node.stroke_weight = Some(border.width);
    }
    if let Some(radius) = options.radius {
        node.corner_radius = Some(radius);
    }
}

/// Apply explicit size properties, setting only the fields that were
/// supplied.
pub fn apply_size_styles(node: &mut SceneNode, options: &SizeOptions) {
    if let Some(width) = options.width {
        node.width = Some(width);
        node.layout_sizing_horizontal = Some(LayoutSizing::Fixed);
    }
    if let Some(height) = options.height {
        node.height = Some(height);
        node.layout_sizing_vertical = Some(LayoutSizing::Fixed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleMap;

    #[test]
    fn test_node_name_precedence() {
        assert_eq!(node_name("section", Some("hero"), Some("wide")), "section#hero");
        assert_eq!(node_name("section", None, Some("wide tall")), "section.wide");
        assert_eq!(node_name("section", None, None), "section");
    }

    #[test]
    fn test_plain_container_names_are_bare() {
        assert_eq!(node_name("div", Some("hero"), None), "#hero");
        assert_eq!(node_name("div", None, Some("wide")), ".wide");
        assert_eq!(node_name("div", None, None), "div");
    }

    #[test]
    fn test_div_defaults_to_no_stacking_axis() {
        let mut node = SceneNode::frame("div");
        apply_html_element_defaults(&mut node, "div", &DomNode::element("div"));
        assert_eq!(node.layout_mode, LayoutMode::None);
        assert!(node.layout_sizing_horizontal.is_none());
    }

    #[test]
    fn test_block_tags_default_to_vertical_fill() {
        let mut node = SceneNode::frame("section");
        apply_html_element_defaults(&mut node, "section", &DomNode::element("section"));
        assert_eq!(node.layout_mode, LayoutMode::Vertical);
        assert_eq!(node.layout_sizing_horizontal, Some(LayoutSizing::Fill));
    }

    #[test]
    fn test_flexbox_noop_for_non_flex_display() {
        let mut node = SceneNode::frame("div");
        apply_flexbox_styles(&mut node, &StyleMap::parse("display: block").flexbox_options());
        assert_eq!(node.layout_mode, LayoutMode::None);
        assert!(node.primary_axis_align_items.is_none());
    }

    #[test]
    fn test_flexbox_row_and_column() {
        let mut node = SceneNode::frame("div");
        apply_flexbox_styles(&mut node, &StyleMap::parse("display: flex").flexbox_options());
        assert_eq!(node.layout_mode, LayoutMode::Horizontal);

        let mut node = SceneNode::frame("div");
        apply_flexbox_styles(
            &mut node,
            &StyleMap::parse("display: flex; flex-direction: column").flexbox_options(),
        );
        assert_eq!(node.layout_mode, LayoutMode::Vertical);
    }

    #[test]
    fn test_flexbox_alignment_mapping() {
        let mut node = SceneNode::frame("div");
        apply_flexbox_styles(
            &mut node,
            &StyleMap::parse(
                "display: flex; align-items: stretch; justify-content: space-between",
            )
            .flexbox_options(),
        );
        assert_eq!(node.counter_axis_align_items, Some(AxisAlign::Stretch));
        assert_eq!(node.primary_axis_align_items, Some(AxisAlign::SpaceBetween));
    }

    #[test]
    fn test_flexbox_unrecognized_alignment_defaults_to_min() {
        let mut node = SceneNode::frame("div");
        apply_flexbox_styles(
            &mut node,
            &StyleMap::parse("display: flex; align-items: sideways; justify-content: evenly")
                .flexbox_options(),
        );
        assert_eq!(node.counter_axis_align_items, Some(AxisAlign::Min));
        assert_eq!(node.primary_axis_align_items, Some(AxisAlign::Min));
    }

    #[test]
    fn test_flexbox_gap_maps_to_item_spacing() {
        let mut node = SceneNode::frame("div");
        apply_flexbox_styles(
            &mut node,
            &StyleMap::parse("display: flex; gap: 12px").flexbox_options(),
        );
        assert_eq!(node.item_spacing, Some(12.0));
    }

    #[test]
    fn test_uniform_padding_broadcasts() {
        let mut node = SceneNode::frame("div");
        apply_padding_styles(&mut node, Padding::Uniform(10.0));
        assert_eq!(node.padding_top, Some(10.0));
        assert_eq!(node.padding_right, Some(10.0));
        assert_eq!(node.padding_bottom, Some(10.0));
        assert_eq!(node.padding_left, Some(10.0));
    }

    #[test]
    fn test_partial_padding_zeroes_unspecified_sides() {
        let mut node = SceneNode::frame("div");
        node.padding_right = Some(99.0); // prior value must not survive
        apply_padding_styles(
            &mut node,
            Padding::PerSide {
                top: Some(10.0),
                right: None,
                bottom: None,
                left: None,
            },
        );
        assert_eq!(node.padding_top, Some(10.0));
        assert_eq!(node.padding_right, Some(0.0));
        assert_eq!(node.padding_bottom, Some(0.0));
        assert_eq!(node.padding_left, Some(0.0));
    }

    #[test]
    fn test_border_styles_set_only_supplied_fields() {
        let mut node = SceneNode::frame("div");
        apply_border_styles(
            &mut node,
            &StyleMap::parse("border-radius: 8px").border_options(),
        );
        assert_eq!(node.corner_radius, Some(8.0));
        assert!(node.strokes.is_none());
        assert!(node.stroke_weight.is_none());

        let mut node = SceneNode::frame("div");
        apply_border_styles(
            &mut node,
            &StyleMap::parse("border: 2px solid red").border_options(),
        );
        assert_eq!(node.stroke_weight, Some(2.0));
        assert_eq!(node.strokes.as_ref().map(Vec::len), Some(1));
        assert!(node.corner_radius.is_none());
    }

    #[test]
    fn test_size_styles_set_only_supplied_fields() {
        let mut node = SceneNode::frame("div");
        apply_size_styles(
            &mut node,
            &StyleMap::parse("width: 320px").size_options(),
        );
        assert_eq!(node.width, Some(320.0));
        assert_eq!(node.layout_sizing_horizontal, Some(LayoutSizing::Fixed));
        assert!(node.height.is_none());
        assert!(node.layout_sizing_vertical.is_none());
    }
}

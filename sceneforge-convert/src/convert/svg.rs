//! Per-tag SVG element converters.
//!
//! SVG geometry flows through the transform algebra: each shape builds its
//! attribute bounds, folds the element's `transform` commands over them, and
//! reports any ignored transform input through the conversion warnings.

use sceneforge_scene::{Paint, Rgba, SceneNode};

use crate::convert::{
    set_position, ConvertContext, ConverterRegistry, ElementConverter, DEFAULT_HEIGHT,
    DEFAULT_WIDTH,
};
use crate::dom::DomNode;
use crate::layout::node_name;
use crate::style::{parse_color, parse_length, StyleMap};
use crate::svg_transform::{
    extract_translation, parse_transform, transformed_bounds, Bounds, TransformCommand,
};

/// Default SVG text size in pixels.
const SVG_FONT_SIZE: f32 = 16.0;

pub(super) fn register(registry: &mut ConverterRegistry) {
    registry.register("svg", Box::new(SvgRootConverter));
    registry.register("g", Box::new(GroupConverter));
    registry.register("rect", Box::new(RectConverter));
    registry.register("circle", Box::new(CircleConverter));
    registry.register("ellipse", Box::new(EllipseConverter));
    registry.register("line", Box::new(LineConverter));
    registry.register("polygon", Box::new(PolygonConverter));
    registry.register("polyline", Box::new(PolygonConverter));
    registry.register("path", Box::new(PathConverter));
    registry.register("text", Box::new(TextConverter));
}

/// A numeric presentation attribute, accepting bare numbers and `px`/`pt`
/// lengths.
fn attr_len(node: &DomNode, name: &str) -> Option<f32> {
    node.attr_f32(name)
        .or_else(|| node.attr_str(name).and_then(parse_length))
}

/// Parse the element's `transform` attribute, surfacing ignored input as
/// warnings.
fn transform_commands(node: &DomNode, tag: &str, ctx: &mut ConvertContext) -> Vec<TransformCommand> {
    let parsed = node
        .attr_str("transform")
        .map(parse_transform)
        .unwrap_or_default();
    for token in parsed.ignored {
        ctx.warn(format!("ignored transform input on <{tag}>: {token}"));
    }
    parsed.commands
}

fn solid_from_rgba(color: Rgba) -> Paint {
    Paint::solid(color.rgb()).with_opacity(color.a)
}

/// The `fill` presentation attribute. Absent or unparsable values fall back
/// to SVG's default black fill; `none` removes the fill entirely.
fn fill_paints(node: &DomNode) -> Option<Vec<Paint>> {
    match node.attr_str("fill") {
        Some("none") => None,
        value => {
            let color = value
                .and_then(parse_color)
                .unwrap_or_else(|| Rgba::new(0.0, 0.0, 0.0, 1.0));
            Some(vec![solid_from_rgba(color)])
        }
    }
}

/// The `stroke`/`stroke-width` presentation attributes, if a stroke color
/// is declared and parsable.
fn stroke_paints(node: &DomNode) -> Option<(Vec<Paint>, f32)> {
    let color = node
        .attr_str("stroke")
        .filter(|value| *value != "none")
        .and_then(parse_color)?;
    let width = attr_len(node, "stroke-width").unwrap_or(1.0);
    Some((vec![solid_from_rgba(color)], width))
}

fn named(node: &DomNode, tag: &str) -> String {
    node_name(tag, node.attr_str("id"), node.attr_str("class"))
}

/// Apply folded bounds onto a shape node, honoring the position invariant.
fn apply_bounds(out: &mut SceneNode, bounds: Bounds) {
    set_position(out, bounds.x, bounds.y);
    out.width = Some(bounds.width);
    out.height = Some(bounds.height);
}

/// Apply fill and stroke presentation attributes onto a shape node.
fn apply_shape_paints(out: &mut SceneNode, node: &DomNode) {
    out.fills = fill_paints(node);
    if let Some((strokes, width)) = stroke_paints(node) {
        out.strokes = Some(strokes);
        out.stroke_weight = Some(width);
    }
}

/// The `<svg>` root: a frame sized from its attributes.
struct SvgRootConverter;

impl ElementConverter for SvgRootConverter {
    fn convert(
        &self,
        node: &DomNode,
        registry: &ConverterRegistry,
        ctx: &mut ConvertContext,
    ) -> Option<SceneNode> {
        let tag = node.tag()?;
        let mut out = SceneNode::frame(named(node, &tag));
        out.width = Some(attr_len(node, "width").unwrap_or(DEFAULT_WIDTH));
        out.height = Some(attr_len(node, "height").unwrap_or(DEFAULT_HEIGHT));

        let children = registry.convert_children(node, ctx);
        if !children.is_empty() {
            out.children = Some(children);
        }
        Some(out)
    }
}

/// `<g>`: a group positioned by the sum of its translate commands.
///
/// Summing translations is a cheap position approximation for nested groups;
/// rotation and skew are not composed into group positions.
struct GroupConverter;

impl ElementConverter for GroupConverter {
    fn convert(
        &self,
        node: &DomNode,
        registry: &ConverterRegistry,
        ctx: &mut ConvertContext,
    ) -> Option<SceneNode> {
        let tag = node.tag()?;
        let commands = transform_commands(node, &tag, ctx);
        let translation = extract_translation(&commands);

        let mut out = SceneNode::group(named(node, &tag));
        set_position(&mut out, translation.x, translation.y);

        let children = registry.convert_children(node, ctx);
        if !children.is_empty() {
            out.children = Some(children);
        }
        Some(out)
    }
}

/// `<rect>`: a rectangle from `x`/`y`/`width`/`height`/`rx`.
struct RectConverter;

impl ElementConverter for RectConverter {
    fn convert(
        &self,
        node: &DomNode,
        _registry: &ConverterRegistry,
        ctx: &mut ConvertContext,
    ) -> Option<SceneNode> {
        let tag = node.tag()?;
        let bounds = Bounds::new(
            attr_len(node, "x").unwrap_or(0.0),
            attr_len(node, "y").unwrap_or(0.0),
            attr_len(node, "width").unwrap_or(DEFAULT_WIDTH),
            attr_len(node, "height").unwrap_or(DEFAULT_HEIGHT),
        );
        let commands = transform_commands(node, &tag, ctx);

        let mut out = SceneNode::rectangle(named(node, &tag));
        apply_bounds(&mut out, transformed_bounds(bounds, &commands));
        apply_shape_paints(&mut out, node);
        if let Some(rx) = attr_len(node, "rx") {
            out.corner_radius = Some(rx);
        }
        Some(out)
    }
}

/// `<circle>`: a rectangle with full corner radius.
struct CircleConverter;

impl ElementConverter for CircleConverter {
    fn convert(
        &self,
        node: &DomNode,
        _registry: &ConverterRegistry,
        ctx: &mut ConvertContext,
    ) -> Option<SceneNode> {
        let tag = node.tag()?;
        let r = attr_len(node, "r").unwrap_or(DEFAULT_HEIGHT / 2.0);
        let cx = attr_len(node, "cx").unwrap_or(0.0);
        let cy = attr_len(node, "cy").unwrap_or(0.0);
        let bounds = Bounds::new(cx - r, cy - r, 2.0 * r, 2.0 * r);
        let commands = transform_commands(node, &tag, ctx);
        let folded = transformed_bounds(bounds, &commands);

        let mut out = SceneNode::rectangle(named(node, &tag));
        apply_bounds(&mut out, folded);
        apply_shape_paints(&mut out, node);
        out.corner_radius = Some(folded.width.max(folded.height) / 2.0);
        Some(out)
    }
}

/// `<ellipse>`: a rectangle with full corner radius from `rx`/`ry`.
struct EllipseConverter;

impl ElementConverter for EllipseConverter {
    fn convert(
        &self,
        node: &DomNode,
        _registry: &ConverterRegistry,
        ctx: &mut ConvertContext,
    ) -> Option<SceneNode> {
        let tag = node.tag()?;
        let rx = attr_len(node, "rx").unwrap_or(DEFAULT_WIDTH / 2.0);
        let ry = attr_len(node, "ry").unwrap_or(DEFAULT_HEIGHT / 2.0);
        let cx = attr_len(node, "cx").unwrap_or(0.0);
        let cy = attr_len(node, "cy").unwrap_or(0.0);
        let bounds = Bounds::new(cx - rx, cy - ry, 2.0 * rx, 2.0 * ry);
        let commands = transform_commands(node, &tag, ctx);
        let folded = transformed_bounds(bounds, &commands);

        let mut out = SceneNode::rectangle(named(node, &tag));
        apply_bounds(&mut out, folded);
        apply_shape_paints(&mut out, node);
        out.corner_radius = Some(folded.width.max(folded.height) / 2.0);
        Some(out)
    }
}

/// `<line>`: a thin rectangle along the segment's axis-aligned extent,
/// filled with the stroke color.
struct LineConverter;

impl ElementConverter for LineConverter {
    fn convert(
        &self,
        node: &DomNode,
        _registry: &ConverterRegistry,
        ctx: &mut ConvertContext,
    ) -> Option<SceneNode> {
        let tag = node.tag()?;
        let x1 = attr_len(node, "x1").unwrap_or(0.0);
        let y1 = attr_len(node, "y1").unwrap_or(0.0);
        let x2 = attr_len(node, "x2").unwrap_or(0.0);
        let y2 = attr_len(node, "y2").unwrap_or(0.0);
        let thickness = attr_len(node, "stroke-width").unwrap_or(1.0);

        let bounds = Bounds::new(
            x1.min(x2),
            y1.min(y2),
            (x2 - x1).abs().max(thickness),
            (y2 - y1).abs().max(thickness),
        );
        let commands = transform_commands(node, &tag, ctx);

        let mut out = SceneNode::rectangle(named(node, &tag));
        apply_bounds(&mut out, transformed_bounds(bounds, &commands));
        let color = node
            .attr_str("stroke")
            .and_then(parse_color)
            .unwrap_or_else(|| Rgba::new(0.0, 0.0, 0.0, 1.0));
        out.fills = Some(vec![solid_from_rgba(color)]);
        Some(out)
    }
}

/// `<polygon>`/`<polyline>`: a polygon node spanning the points' extent.
struct PolygonConverter;

impl ElementConverter for PolygonConverter {
    fn convert(
        &self,
        node: &DomNode,
        _registry: &ConverterRegistry,
        ctx: &mut ConvertContext,
    ) -> Option<SceneNode> {
        let tag = node.tag()?;
        let bounds = points_bounds(node.attr_str("points").unwrap_or(""))
            .unwrap_or_else(|| Bounds::new(0.0, 0.0, DEFAULT_WIDTH, DEFAULT_HEIGHT));
        let commands = transform_commands(node, &tag, ctx);

        let mut out = SceneNode::polygon(named(node, &tag));
        apply_bounds(&mut out, transformed_bounds(bounds, &commands));
        apply_shape_paints(&mut out, node);
        Some(out)
    }
}

/// Axis-aligned extent of a `points` attribute, leniently parsed.
fn points_bounds(points: &str) -> Option<Bounds> {
    let values: Vec<f32> = points
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse().ok())
        .collect();
    let pairs: Vec<(f32, f32)> = values.chunks_exact(2).map(|xy| (xy[0], xy[1])).collect();
    let (first, rest) = pairs.split_first()?;

    let mut min = *first;
    let mut max = *first;
    for (x, y) in rest {
        min.0 = min.0.min(*x);
        min.1 = min.1.min(*y);
        max.0 = max.0.max(*x);
        max.1 = max.1.max(*y);
    }
    Some(Bounds::new(min.0, min.1, max.0 - min.0, max.1 - min.1))
}

/// `<path>`: a polygon with fallback geometry.
///
/// Path data is not parsed; the node gets the embedded-content default box.
struct PathConverter;

impl ElementConverter for PathConverter {
    fn convert(
        &self,
        node: &DomNode,
        _registry: &ConverterRegistry,
        ctx: &mut ConvertContext,
    ) -> Option<SceneNode> {
        let tag = node.tag()?;
        let bounds = Bounds::new(0.0, 0.0, DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let commands = transform_commands(node, &tag, ctx);

        let mut out = SceneNode::polygon(named(node, &tag));
        apply_bounds(&mut out, transformed_bounds(bounds, &commands));
        apply_shape_paints(&mut out, node);
        Some(out)
    }
}

/// SVG `<text>`: a text node positioned by its `x`/`y` attributes.
struct TextConverter;

impl ElementConverter for TextConverter {
    fn convert(
        &self,
        node: &DomNode,
        _registry: &ConverterRegistry,
        _ctx: &mut ConvertContext,
    ) -> Option<SceneNode> {
        let tag = node.tag()?;
        let style = StyleMap::of(node);

        let mut out = SceneNode::text(named(node, &tag), node.text_content());
        set_position(
            &mut out,
            attr_len(node, "x").unwrap_or(0.0),
            attr_len(node, "y").unwrap_or(0.0),
        );
        out.font_size = Some(
            style
                .font_size()
                .or_else(|| attr_len(node, "font-size"))
                .unwrap_or(SVG_FONT_SIZE),
        );
        out.fills = fill_paints(node);
        Some(out)
    }
}

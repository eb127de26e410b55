//! Per-tag HTML element converters.
//!
//! Thin callers of the generic primitives: each converter resolves inline
//! style, maps box/flexbox semantics and adds only fixed per-tag defaults.

use sceneforge_scene::{AxisAlign, LayoutMode, Paint, Rgb, Rgba, SceneNode};

use crate::convert::{ConvertContext, ConverterRegistry, ElementConverter, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::dom::DomNode;
use crate::layout;
use crate::style::StyleMap;

/// Default font size for body text, in pixels.
pub(super) const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Default button background (`#EFEFEF`).
const BUTTON_BACKGROUND: Rgb = Rgb {
    r: 239.0 / 255.0,
    g: 239.0 / 255.0,
    b: 239.0 / 255.0,
};

/// Default placeholder text color (`#767676`).
const PLACEHOLDER_COLOR: Rgb = Rgb {
    r: 118.0 / 255.0,
    g: 118.0 / 255.0,
    b: 118.0 / 255.0,
};

const BLOCK_TAGS: &[&str] = &[
    "div", "section", "header", "footer", "nav", "main", "article", "aside", "ul", "ol",
];

/// Heading font sizes, largest first.
const HEADING_SIZES: &[(&str, f32)] = &[
    ("h1", 32.0),
    ("h2", 24.0),
    ("h3", 19.0),
    ("h4", 16.0),
    ("h5", 13.0),
    ("h6", 11.0),
];

pub(super) fn register(registry: &mut ConverterRegistry) {
    for &tag in BLOCK_TAGS {
        registry.register(tag, Box::new(BlockConverter));
    }
    for &(tag, font_size) in HEADING_SIZES {
        registry.register(tag, Box::new(TextTagConverter { font_size }));
    }
    for tag in ["p", "span", "a"] {
        registry.register(
            tag,
            Box::new(TextTagConverter {
                font_size: DEFAULT_FONT_SIZE,
            }),
        );
    }
    registry.register("li", Box::new(ListItemConverter));
    registry.register("button", Box::new(ButtonConverter));
    registry.register("input", Box::new(InputConverter));
    registry.register("img", Box::new(ImgConverter));
}

/// Resolve inline style onto a frame: flexbox, padding, border, size and
/// background fill.
fn apply_frame_styles(node: &mut SceneNode, style: &StyleMap) {
    layout::apply_flexbox_styles(node, &style.flexbox_options());
    if let Some(padding) = style.padding() {
        layout::apply_padding_styles(node, padding);
    }
    layout::apply_border_styles(node, &style.border_options());
    layout::apply_size_styles(node, &style.size_options());
    if let Some(background) = style.background_color() {
        node.fills = Some(vec![solid_from_rgba(background)]);
    }
}

fn solid_from_rgba(color: Rgba) -> Paint {
    Paint::solid(color.rgb()).with_opacity(color.a)
}

/// Block-level containers: frames with per-tag stacking defaults.
struct BlockConverter;

impl ElementConverter for BlockConverter {
    fn convert(
        &self,
        node: &DomNode,
        registry: &ConverterRegistry,
        ctx: &mut ConvertContext,
    ) -> Option<SceneNode> {
        let tag = node.tag()?;
        let mut out = SceneNode::frame(tag.as_str());
        layout::apply_html_element_defaults(&mut out, &tag, node);
        apply_frame_styles(&mut out, &StyleMap::of(node));

        let children = registry.convert_children(node, ctx);
        if !children.is_empty() {
            out.children = Some(children);
        }
        Some(out)
    }
}

/// Text-bearing tags: headings, paragraphs, inline text.
struct TextTagConverter {
    font_size: f32,
}

impl ElementConverter for TextTagConverter {
    fn convert(
        &self,
        node: &DomNode,
        _registry: &ConverterRegistry,
        _ctx: &mut ConvertContext,
    ) -> Option<SceneNode> {
        let tag = node.tag()?;
        let style = StyleMap::of(node);
        let name = layout::node_name(&tag, node.attr_str("id"), node.attr_str("class"));

        let mut out = SceneNode::text(name, node.text_content());
        out.font_size = Some(style.font_size().unwrap_or(self.font_size));
        let color = style.text_color().unwrap_or_else(|| Rgb::BLACK.with_alpha(1.0));
        out.fills = Some(vec![solid_from_rgba(color)]);
        Some(out)
    }
}

/// List items: text with a bullet prefix.
struct ListItemConverter;

impl ElementConverter for ListItemConverter {
    fn convert(
        &self,
        node: &DomNode,
        _registry: &ConverterRegistry,
        _ctx: &mut ConvertContext,
    ) -> Option<SceneNode> {
        let tag = node.tag()?;
        let style = StyleMap::of(node);
        let name = layout::node_name(&tag, node.attr_str("id"), node.attr_str("class"));

        let mut out = SceneNode::text(name, format!("\u{2022} {}", node.text_content()));
        out.font_size = Some(style.font_size().unwrap_or(DEFAULT_FONT_SIZE));
        let color = style.text_color().unwrap_or_else(|| Rgb::BLACK.with_alpha(1.0));
        out.fills = Some(vec![solid_from_rgba(color)]);
        Some(out)
    }
}

/// Buttons: centered horizontal frames with a text child.
struct ButtonConverter;

impl ElementConverter for ButtonConverter {
    fn convert(
        &self,
        node: &DomNode,
        _registry: &ConverterRegistry,
        _ctx: &mut ConvertContext,
    ) -> Option<SceneNode> {
        let tag = node.tag()?;
        let style = StyleMap::of(node);

        let mut out = SceneNode::frame(layout::node_name(&tag, node.attr_str("id"), node.attr_str("class")));
        out.layout_mode = LayoutMode::Horizontal;
        out.primary_axis_align_items = Some(AxisAlign::Center);
        out.counter_axis_align_items = Some(AxisAlign::Center);
        out.padding_top = Some(12.0);
        out.padding_bottom = Some(12.0);
        out.padding_left = Some(24.0);
        out.padding_right = Some(24.0);
        out.fills = Some(vec![Paint::solid(BUTTON_BACKGROUND)]);
        apply_frame_styles(&mut out, &style);

        let label = node.text_content();
        if !label.is_empty() {
            let mut text = SceneNode::text("label", label);
            text.font_size = Some(style.font_size().unwrap_or(DEFAULT_FONT_SIZE));
            let color = style.text_color().unwrap_or_else(|| Rgb::BLACK.with_alpha(1.0));
            text.fills = Some(vec![solid_from_rgba(color)]);
            out.children = Some(vec![text]);
        }
        Some(out)
    }
}

/// Text inputs: frames with a placeholder text child.
struct InputConverter;

impl ElementConverter for InputConverter {
    fn convert(
        &self,
        node: &DomNode,
        _registry: &ConverterRegistry,
        _ctx: &mut ConvertContext,
    ) -> Option<SceneNode> {
        let tag = node.tag()?;
        let style = StyleMap::of(node);

        let mut out = SceneNode::frame(layout::node_name(&tag, node.attr_str("id"), node.attr_str("class")));
        out.layout_mode = LayoutMode::Horizontal;
        out.counter_axis_align_items = Some(AxisAlign::Center);
        out.padding_top = Some(8.0);
        out.padding_bottom = Some(8.0);
        out.padding_left = Some(12.0);
        out.padding_right = Some(12.0);
        out.fills = Some(vec![Paint::solid(Rgb::WHITE)]);
        apply_frame_styles(&mut out, &style);

        let placeholder = node
            .attr_str("value")
            .filter(|value| !value.is_empty())
            .or_else(|| node.attr_str("placeholder"))
            .unwrap_or("")
            .to_string();
        if !placeholder.is_empty() {
            let mut text = SceneNode::text("placeholder", placeholder);
            text.font_size = Some(style.font_size().unwrap_or(DEFAULT_FONT_SIZE));
            let color = style
                .text_color()
                .unwrap_or_else(|| PLACEHOLDER_COLOR.with_alpha(1.0));
            text.fills = Some(vec![solid_from_rgba(color)]);
            out.children = Some(vec![text]);
        }
        Some(out)
    }
}

/// Images: rectangles with an image fill and embedded-content default size.
struct ImgConverter;

impl ElementConverter for ImgConverter {
    fn convert(
        &self,
        node: &DomNode,
        _registry: &ConverterRegistry,
        _ctx: &mut ConvertContext,
    ) -> Option<SceneNode> {
        let tag = node.tag()?;
        let style = StyleMap::of(node);

        let mut out = SceneNode::rectangle(layout::node_name(&tag, node.attr_str("id"), node.attr_str("class")));
        out.width = Some(
            style
                .width()
                .or_else(|| node.attr_f32("width"))
                .unwrap_or(DEFAULT_WIDTH),
        );
        out.height = Some(
            style
                .height()
                .or_else(|| node.attr_f32("height"))
                .unwrap_or(DEFAULT_HEIGHT),
        );
        if let Some(src) = node.attr_str("src").filter(|src| !src.is_empty()) {
            out.fills = Some(vec![Paint::image(src)]);
        }
        if let Some(radius) = style.border_radius() {
            out.corner_radius = Some(radius);
        }
        Some(out)
    }
}

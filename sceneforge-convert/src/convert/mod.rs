//! Scene graph assembly: per-tag dispatch, recursive tree walk, and the
//! top-level conversion entry points.
//!
//! Dispatch is a registry keyed by lower-cased tag name. Tag names are
//! mutually exclusive, so a direct hash lookup replaces any first-match
//! converter chain and removes ordering ambiguity. Each converter keeps a
//! structural guard ([`ElementConverter::matches`]) on top of the tag key and
//! is pure and total for any node its guard accepts.
//!
//! Unrecognized children are filtered out of the output tree rather than
//! erroring; every drop is recorded in the conversion's warning list.

mod html;
mod svg;

use std::collections::HashMap;

use sceneforge_scene::SceneNode;

use crate::dom::DomNode;
use crate::error::ConvertResult;

/// Fallback width for absent or unparsable geometry, matching the embedded
/// content sizing convention (`300x150`).
pub const DEFAULT_WIDTH: f32 = 300.0;
/// Fallback height for absent or unparsable geometry.
pub const DEFAULT_HEIGHT: f32 = 150.0;

/// Per-conversion state threaded through the tree walk.
///
/// Carries only the warning list; conversion itself holds no hidden counters
/// or randomness, so identical input always yields identical output.
#[derive(Debug, Default)]
pub struct ConvertContext {
    warnings: Vec<String>,
}

impl ConvertContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning about dropped or ignored input.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(warning = %message, "conversion warning");
        self.warnings.push(message);
    }

    /// Warnings recorded so far.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// A per-tag element converter.
///
/// The registry guarantees the tag key matched before calling; `matches` is
/// the remaining structural guard. `convert` returns `None` when the guard
/// fails or the element has no scene representation.
pub trait ElementConverter {
    /// Structural guard beyond the tag-name key.
    fn matches(&self, node: &DomNode) -> bool {
        node.is_element()
    }

    /// Convert a guard-accepted element into a scene node.
    ///
    /// Converters with children recurse through
    /// [`ConverterRegistry::convert_children`] on the supplied registry.
    fn convert(
        &self,
        node: &DomNode,
        registry: &ConverterRegistry,
        ctx: &mut ConvertContext,
    ) -> Option<SceneNode>;
}

/// The result of one top-level conversion call.
#[derive(Debug)]
pub struct Conversion {
    /// The converted root node, or `None` when the root is unrecognized.
    pub node: Option<SceneNode>,
    /// Input that was dropped or ignored during conversion.
    pub warnings: Vec<String>,
}

/// Tag-keyed converter registry.
pub struct ConverterRegistry {
    converters: HashMap<&'static str, Box<dyn ElementConverter>>,
}

impl ConverterRegistry {
    /// Create a registry with the full default converter set (HTML block,
    /// text, list, form and media tags plus the SVG shape tags).
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        html::register(&mut registry);
        svg::register(&mut registry);
        registry
    }

    /// Create a registry with no converters.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            converters: HashMap::new(),
        }
    }

    /// Register a converter for a tag, replacing any existing one.
    pub fn register(&mut self, tag: &'static str, converter: Box<dyn ElementConverter>) {
        self.converters.insert(tag, converter);
    }

    /// Whether a tag has a registered converter.
    #[must_use]
    pub fn supports(&self, tag: &str) -> bool {
        self.converters.contains_key(tag)
    }

    /// Convert a single source node.
    ///
    /// Text nodes become TEXT scene nodes (whitespace-only runs are skipped).
    /// Elements dispatch through the registry; an unregistered tag or a
    /// failed structural guard yields `None` and a warning. Comments and
    /// other node kinds are skipped silently.
    pub fn convert_node(&self, node: &DomNode, ctx: &mut ConvertContext) -> Option<SceneNode> {
        if node.is_text() {
            return text_node(node);
        }
        if !node.is_element() {
            return None;
        }
        let tag = node.tag()?;
        let Some(converter) = self.converters.get(tag.as_str()) else {
            ctx.warn(format!("dropped unrecognized element <{tag}>"));
            return None;
        };
        if !converter.matches(node) {
            ctx.warn(format!("dropped structurally invalid element <{tag}>"));
            return None;
        }
        converter.convert(node, self, ctx)
    }

    /// Convert an element's children, preserving source order and filtering
    /// out nodes with no scene representation.
    ///
    /// Recursion depth is bounded only by the depth of the source document;
    /// there is no explicit depth guard.
    pub fn convert_children(&self, node: &DomNode, ctx: &mut ConvertContext) -> Vec<SceneNode> {
        node.children
            .iter()
            .filter_map(|child| self.convert_node(child, ctx))
            .collect()
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a bare text run into a TEXT scene node.
fn text_node(node: &DomNode) -> Option<SceneNode> {
    let content = node.text_content();
    if content.is_empty() {
        return None;
    }
    let mut out = SceneNode::text("text", content);
    out.font_size = Some(html::DEFAULT_FONT_SIZE);
    Some(out)
}

/// Set a node's position only when at least one coordinate is non-zero.
///
/// Nodes at the origin stay position-free so auto-layout parents can place
/// them.
#[allow(clippy::float_cmp)] // exact zero means "unpositioned"
pub(crate) fn set_position(node: &mut SceneNode, x: f32, y: f32) {
    if x != 0.0 || y != 0.0 {
        node.x = Some(x);
        node.y = Some(y);
    }
}

/// Convert a source tree with the default registry.
#[must_use]
pub fn convert_tree(root: &DomNode) -> Conversion {
    let registry = ConverterRegistry::new();
    let mut ctx = ConvertContext::new();
    let node = registry.convert_node(root, &mut ctx);
    Conversion {
        node,
        warnings: ctx.warnings,
    }
}

/// Parse a JSON source tree and convert it with the default registry.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or does not match the source
/// tree shape. Conversion itself never errors; malformed markup degrades to
/// defaults and warnings.
pub fn convert_html(json: &str) -> ConvertResult<Conversion> {
    let root = DomNode::from_json(json)?;
    Ok(convert_tree(&root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sceneforge_scene::NodeType;

    #[test]
    fn test_unrecognized_root_yields_none_with_warning() {
        let conversion = convert_tree(&DomNode::element("marquee"));
        assert!(conversion.node.is_none());
        assert_eq!(
            conversion.warnings,
            vec!["dropped unrecognized element <marquee>".to_string()]
        );
    }

    #[test]
    fn test_unrecognized_children_filtered_in_order() {
        let root = DomNode::element("div").with_children(vec![
            DomNode::element("p").with_children(vec![DomNode::text("first")]),
            DomNode::element("blink"),
            DomNode::element("p").with_children(vec![DomNode::text("second")]),
        ]);
        let conversion = convert_tree(&root);
        let node = conversion.node.expect("should convert");
        let children = node.children.expect("should have children");
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].characters.as_deref(), Some("first"));
        assert_eq!(children[1].characters.as_deref(), Some("second"));
        assert_eq!(conversion.warnings.len(), 1);
    }

    #[test]
    fn test_whitespace_text_runs_skipped_silently() {
        let root = DomNode::element("div").with_children(vec![
            DomNode::text("   \n  "),
            DomNode::text("kept"),
        ]);
        let conversion = convert_tree(&root);
        let node = conversion.node.expect("should convert");
        assert_eq!(node.child_count(), 1);
        assert!(conversion.warnings.is_empty());
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let root = DomNode::element("section")
            .with_attr("style", "display: flex; gap: 4px")
            .with_children(vec![DomNode::element("p").with_children(vec![
                DomNode::text("stable"),
            ])]);
        let first = convert_tree(&root);
        let second = convert_tree(&root);
        assert_eq!(first.node, second.node);
        assert_eq!(first.warnings, second.warnings);
    }

    #[test]
    fn test_set_position_skips_origin() {
        let mut node = SceneNode::rectangle("rect");
        set_position(&mut node, 0.0, 0.0);
        assert!(node.x.is_none());
        set_position(&mut node, 0.0, 5.0);
        assert_eq!(node.x, Some(0.0));
        assert_eq!(node.y, Some(5.0));
    }

    #[test]
    fn test_empty_registry_converts_nothing_but_text() {
        let registry = ConverterRegistry::empty();
        let mut ctx = ConvertContext::new();
        assert!(registry
            .convert_node(&DomNode::element("div"), &mut ctx)
            .is_none());
        let text = registry
            .convert_node(&DomNode::text("hi"), &mut ctx)
            .expect("text always converts");
        assert_eq!(text.node_type, NodeType::Text);
    }
}

//! The pre-parsed input element tree.
//!
//! Parsing raw markup into this tree is out of scope; the engine consumes a
//! tree shaped as `{ type, tagName, attributes, children }`, typically
//! deserialized from JSON via [`DomNode::from_json`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ConvertResult;

/// The kind of a source-tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// An element with a tag name, attributes and children.
    Element,
    /// A text run.
    Text,
    /// A comment (ignored by conversion).
    Comment,
    /// Any other node kind (doctype, CDATA, processing instruction, ...).
    #[serde(other)]
    Other,
}

/// An attribute value as produced by the upstream markup parser.
///
/// Markup parsers emit strings for ordinary attributes, booleans for bare
/// attributes (`disabled`), numbers for pre-coerced values, and null for
/// attributes that were present but valueless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// A string value.
    Str(String),
    /// A numeric value.
    Num(f64),
    /// A boolean value.
    Bool(bool),
    /// A valueless attribute.
    Null,
}

impl AttrValue {
    /// The value as a string slice, if it is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The value as an `f32`: numeric values directly, string values via
    /// lenient numeric parsing. Booleans and null yield `None`.
    #[must_use]
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            #[allow(clippy::cast_possible_truncation)]
            Self::Num(n) => Some(*n as f32),
            Self::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// One node of the pre-parsed source tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomNode {
    /// Node kind discriminant (`"element"`, `"text"`, ...).
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Tag name (elements only). Case is preserved as parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    /// Attribute map. Values keep the upstream parser's loose typing.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, AttrValue>,
    /// Child nodes in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DomNode>,
    /// Text content (text nodes only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl DomNode {
    /// Create an element node with the given tag.
    #[must_use]
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Element,
            tag_name: Some(tag.into()),
            attributes: HashMap::new(),
            children: Vec::new(),
            value: None,
        }
    }

    /// Create a text node.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            tag_name: None,
            attributes: HashMap::new(),
            children: Vec::new(),
            value: Some(value.into()),
        }
    }

    /// Set a string attribute (builder style).
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(name.into(), AttrValue::Str(value.into()));
        self
    }

    /// Set the child list (builder style).
    #[must_use]
    pub fn with_children(mut self, children: Vec<DomNode>) -> Self {
        self.children = children;
        self
    }

    /// Parse a source tree from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or does not match the source
    /// tree shape.
    pub fn from_json(json: &str) -> ConvertResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether this is an element node.
    #[must_use]
    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    /// Whether this is a text node.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    /// The lower-cased tag name, for elements.
    #[must_use]
    pub fn tag(&self) -> Option<String> {
        self.tag_name.as_deref().map(str::to_lowercase)
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Look up a string attribute.
    #[must_use]
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(AttrValue::as_str)
    }

    /// Look up a numeric attribute (numbers directly, strings leniently).
    #[must_use]
    pub fn attr_f32(&self, name: &str) -> Option<f32> {
        self.attributes.get(name).and_then(AttrValue::as_f32)
    }

    /// The inline `style` attribute text, if present.
    #[must_use]
    pub fn style_text(&self) -> Option<&str> {
        self.attr_str("style")
    }

    /// Collect the text content of this subtree, in document order, with
    /// whitespace runs collapsed to single spaces and the result trimmed.
    #[must_use]
    pub fn text_content(&self) -> String {
        fn walk(node: &DomNode, out: &mut String) {
            if let Some(value) = &node.value {
                out.push_str(value);
                out.push(' ');
            }
            for child in &node.children {
                walk(child, out);
            }
        }

        let mut raw = String::new();
        walk(self, &mut raw);
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

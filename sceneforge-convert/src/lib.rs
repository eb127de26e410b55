//! # Sceneforge Convert
//!
//! The markup-to-scene-graph conversion engine: takes a pre-parsed HTML/SVG
//! element tree plus inline CSS text and produces a tree of design-tool scene
//! nodes with geometry, paint and layout properties.
//!
//! The engine is a total, side-effect-free, recursive tree transform. No
//! function here errors on malformed markup; every failure mode is a
//! documented default or null substitution, and silently-dropped input is
//! surfaced through warning lists so callers can observe the loss. The only
//! fallible surface is JSON ingestion of the input tree.
//!
//! ## Pipeline
//!
//! ```text
//! parsed element tree + inline style text
//!       │
//!       ▼
//! CSS Style Resolver ──► Box/Layout Mapper ─┐
//!       │                                   │
//! SVG Transform Algebra ──► Paint Model ────┤
//!                                           ▼
//!                            Scene Graph Assembler ──► SceneNode tree
//! ```
//!
//! Every component is pure and synchronous; concurrent callers may invoke the
//! engine from multiple threads on independent inputs without locks.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod convert;
pub mod dom;
pub mod error;
pub mod layout;
pub mod style;
pub mod svg_transform;

pub use convert::{
    convert_html, convert_tree, Conversion, ConvertContext, ConverterRegistry, ElementConverter,
    DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
pub use dom::{AttrValue, DomNode};
pub use error::{ConvertError, ConvertResult};
pub use style::{Border, BorderOptions, FlexboxOptions, Padding, SizeOptions, StyleMap};
pub use svg_transform::{Bounds, ParsedTransform, TransformCommand, Translation};

/// Conversion engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! # Sceneforge Scene Model
//!
//! The target data model for markup-to-scene-graph conversion: scene nodes
//! (frames, text, rectangles, groups, polygons), paints (solid colors,
//! gradients, images, emoji), color values and 2D affine transforms.
//!
//! All values are plain serde-serializable data. Color channels are floats in
//! `[0, 1]`, not `0-255`; callers bridging from display values must convert
//! before constructing paints.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              sceneforge-scene               │
//! ├─────────────────────────────────────────────┤
//! │  Scene Nodes     │  Paint Model             │
//! │  - Node types    │  - Solid / gradients     │
//! │  - Auto layout   │  - Image / emoji         │
//! │  - Geometry      │  - Pure mutators         │
//! ├─────────────────────────────────────────────┤
//! │  Color Values    │  Affine Transforms       │
//! │  - Rgb / Rgba    │  - Identity / rotation   │
//! │  - Color stops   │  - Component builder     │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod node;
pub mod paint;
pub mod transform;

pub use color::{Rgb, Rgba};
pub use node::{AxisAlign, LayoutMode, LayoutSizing, NodeType, SceneNode};
pub use paint::{BlendMode, ColorStop, Paint, ScaleMode};
pub use transform::AffineTransform;

/// Scene model version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

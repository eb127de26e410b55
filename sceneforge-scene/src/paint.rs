//! Paints - fill and stroke descriptions for scene nodes.
//!
//! A [`Paint`] is a tagged union: solid color, one of four gradient kinds, an
//! image reference, or an emoji. Paints are immutable values; the `with_*`
//! mutators return a new paint and leave the receiver unchanged.

use serde::{Deserialize, Serialize};

use crate::color::{Rgb, Rgba};
use crate::transform::AffineTransform;

/// Blend mode applied when compositing a paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlendMode {
    /// Source-over compositing.
    #[default]
    Normal,
    /// Multiply channels.
    Multiply,
    /// Inverse multiply.
    Screen,
    /// Multiply or screen depending on backdrop.
    Overlay,
    /// Per-channel minimum.
    Darken,
    /// Per-channel maximum.
    Lighten,
}

/// How an image paint is fitted to its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScaleMode {
    /// Scale to fill the node, cropping overflow.
    #[default]
    Fill,
    /// Scale to fit inside the node, letterboxing.
    Fit,
    /// Crop to the node's bounds.
    Crop,
    /// Tile at natural size.
    Tile,
}

/// One `(position, color)` sample along a gradient's axis.
///
/// `position` is clamped into `[0, 1]` at construction time and never
/// re-validated downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Position along the gradient axis in `[0, 1]`.
    pub position: f32,
    /// Sample color with alpha.
    pub color: Rgba,
}

impl ColorStop {
    /// Create a stop, clamping `position` into `[0, 1]`.
    ///
    /// If `color` already carries an alpha channel it is kept unless an
    /// explicit `opacity` overrides it; an [`Rgb`] input gets alpha 1.
    #[must_use]
    pub fn new(position: f32, color: impl Into<Rgba>, opacity: Option<f32>) -> Self {
        let mut color = color.into();
        if let Some(opacity) = opacity {
            color.a = opacity;
        }
        Self {
            position: clamp_unit(position),
            color,
        }
    }
}

/// Clamp into `[0, 1]` via ordered comparisons.
///
/// `NaN` fails both comparisons and passes through unclamped; `+inf` clamps to
/// 1 and `-inf` to 0. This matches the engine's documented construction-time
/// clamp semantics, so `f32::clamp` (which panics on a NaN bound and
/// normalizes NaN input differently) is deliberately not used.
fn clamp_unit(x: f32) -> f32 {
    if x > 1.0 {
        1.0
    } else if x < 0.0 {
        0.0
    } else {
        x
    }
}

/// A fill or stroke description.
///
/// Serialized with a `type` discriminant matching the target scene API
/// (`SOLID`, `GRADIENT_LINEAR`, ..., `IMAGE`, `EMOJI`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Paint {
    /// A solid color fill.
    #[serde(rename = "SOLID", rename_all = "camelCase")]
    Solid {
        /// Fill color.
        color: Rgb,
        /// Paint opacity in `[0, 1]`.
        opacity: f32,
        /// Whether the paint is rendered.
        visible: bool,
        /// Compositing mode.
        blend_mode: BlendMode,
    },

    /// A linear gradient.
    #[serde(rename = "GRADIENT_LINEAR", rename_all = "camelCase")]
    GradientLinear {
        /// Stops in caller-supplied order (never sorted by the engine).
        gradient_stops: Vec<ColorStop>,
        /// Optional gradient-space transform.
        #[serde(skip_serializing_if = "Option::is_none")]
        gradient_transform: Option<AffineTransform>,
        /// Paint opacity in `[0, 1]`.
        opacity: f32,
        /// Whether the paint is rendered.
        visible: bool,
        /// Compositing mode.
        blend_mode: BlendMode,
    },

    /// A radial gradient.
    #[serde(rename = "GRADIENT_RADIAL", rename_all = "camelCase")]
    GradientRadial {
        /// Stops in caller-supplied order (never sorted by the engine).
        gradient_stops: Vec<ColorStop>,
        /// Optional gradient-space transform.
        #[serde(skip_serializing_if = "Option::is_none")]
        gradient_transform: Option<AffineTransform>,
        /// Paint opacity in `[0, 1]`.
        opacity: f32,
        /// Whether the paint is rendered.
        visible: bool,
        /// Compositing mode.
        blend_mode: BlendMode,
    },

    /// An angular (conic) gradient.
    #[serde(rename = "GRADIENT_ANGULAR", rename_all = "camelCase")]
    GradientAngular {
        /// Stops in caller-supplied order (never sorted by the engine).
        gradient_stops: Vec<ColorStop>,
        /// Optional gradient-space transform.
        #[serde(skip_serializing_if = "Option::is_none")]
        gradient_transform: Option<AffineTransform>,
        /// Paint opacity in `[0, 1]`.
        opacity: f32,
        /// Whether the paint is rendered.
        visible: bool,
        /// Compositing mode.
        blend_mode: BlendMode,
    },

    /// A diamond gradient.
    #[serde(rename = "GRADIENT_DIAMOND", rename_all = "camelCase")]
    GradientDiamond {
        /// Stops in caller-supplied order (never sorted by the engine).
        gradient_stops: Vec<ColorStop>,
        /// Optional gradient-space transform.
        #[serde(skip_serializing_if = "Option::is_none")]
        gradient_transform: Option<AffineTransform>,
        /// Paint opacity in `[0, 1]`.
        opacity: f32,
        /// Whether the paint is rendered.
        visible: bool,
        /// Compositing mode.
        blend_mode: BlendMode,
    },

    /// An image fill referencing either a URL or an opaque content hash.
    ///
    /// Exactly one of `image_url`/`image_hash` is populated by the factory.
    #[serde(rename = "IMAGE", rename_all = "camelCase")]
    Image {
        /// How the image fits its node.
        scale_mode: ScaleMode,
        /// Source URL, when the factory classified the input as a URL.
        #[serde(skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
        /// Opaque content hash, when the input was not URL-shaped.
        #[serde(skip_serializing_if = "Option::is_none")]
        image_hash: Option<String>,
        /// Optional image-space transform.
        #[serde(skip_serializing_if = "Option::is_none")]
        image_transform: Option<AffineTransform>,
        /// Optional rotation in degrees.
        #[serde(skip_serializing_if = "Option::is_none")]
        rotation: Option<f32>,
        /// Paint opacity in `[0, 1]`.
        opacity: f32,
        /// Whether the paint is rendered.
        visible: bool,
        /// Compositing mode.
        blend_mode: BlendMode,
    },

    /// An emoji glyph used as a fill.
    #[serde(rename = "EMOJI", rename_all = "camelCase")]
    Emoji {
        /// The emoji character(s).
        emoji: String,
        /// Whether the paint is rendered.
        visible: bool,
    },
}

impl Paint {
    /// Create a fully opaque solid paint.
    #[must_use]
    pub fn solid(color: Rgb) -> Self {
        Self::Solid {
            color,
            opacity: 1.0,
            visible: true,
            blend_mode: BlendMode::Normal,
        }
    }

    /// Create a linear gradient. Stops are stored verbatim, in caller order.
    #[must_use]
    pub fn linear_gradient(stops: Vec<ColorStop>, transform: Option<AffineTransform>) -> Self {
        Self::GradientLinear {
            gradient_stops: stops,
            gradient_transform: transform,
            opacity: 1.0,
            visible: true,
            blend_mode: BlendMode::Normal,
        }
    }

    /// Create a radial gradient. Stops are stored verbatim, in caller order.
    #[must_use]
    pub fn radial_gradient(stops: Vec<ColorStop>, transform: Option<AffineTransform>) -> Self {
        Self::GradientRadial {
            gradient_stops: stops,
            gradient_transform: transform,
            opacity: 1.0,
            visible: true,
            blend_mode: BlendMode::Normal,
        }
    }

    /// Create an angular gradient. Stops are stored verbatim, in caller order.
    #[must_use]
    pub fn angular_gradient(stops: Vec<ColorStop>, transform: Option<AffineTransform>) -> Self {
        Self::GradientAngular {
            gradient_stops: stops,
            gradient_transform: transform,
            opacity: 1.0,
            visible: true,
            blend_mode: BlendMode::Normal,
        }
    }

    /// Create a diamond gradient. Stops are stored verbatim, in caller order.
    #[must_use]
    pub fn diamond_gradient(stops: Vec<ColorStop>, transform: Option<AffineTransform>) -> Self {
        Self::GradientDiamond {
            gradient_stops: stops,
            gradient_transform: transform,
            opacity: 1.0,
            visible: true,
            blend_mode: BlendMode::Normal,
        }
    }

    /// Create an image paint with [`ScaleMode::Fill`].
    ///
    /// The single string input is disambiguated into a URL or an opaque hash:
    /// it is treated as a URL if it starts with `http`, `data:` or `/`, or
    /// contains a `.`; otherwise as a hash. The heuristic is known-lossy
    /// (a hash containing a literal `.` is misclassified as a URL) and is
    /// preserved for compatibility with existing callers.
    #[must_use]
    pub fn image(url_or_hash: impl Into<String>) -> Self {
        Self::image_scaled(url_or_hash, ScaleMode::Fill)
    }

    /// Create an image paint with an explicit scale mode.
    #[must_use]
    pub fn image_scaled(url_or_hash: impl Into<String>, scale_mode: ScaleMode) -> Self {
        let source = url_or_hash.into();
        let (image_url, image_hash) = if looks_like_url(&source) {
            (Some(source), None)
        } else {
            (None, Some(source))
        };
        Self::Image {
            scale_mode,
            image_url,
            image_hash,
            image_transform: None,
            rotation: None,
            opacity: 1.0,
            visible: true,
            blend_mode: BlendMode::Normal,
        }
    }

    /// Create an emoji paint.
    #[must_use]
    pub fn emoji(emoji: impl Into<String>) -> Self {
        Self::Emoji {
            emoji: emoji.into(),
            visible: true,
        }
    }

    /// Return a copy with the given opacity, clamped into `[0, 1]`.
    ///
    /// The clamp is comparison-based: `NaN` passes through unclamped while
    /// `+inf`/`-inf` clamp to 1/0. Emoji paints have no opacity; they are
    /// returned unchanged.
    #[must_use]
    pub fn with_opacity(mut self, value: f32) -> Self {
        match &mut self {
            Self::Solid { opacity, .. }
            | Self::GradientLinear { opacity, .. }
            | Self::GradientRadial { opacity, .. }
            | Self::GradientAngular { opacity, .. }
            | Self::GradientDiamond { opacity, .. }
            | Self::Image { opacity, .. } => *opacity = clamp_unit(value),
            Self::Emoji { .. } => {}
        }
        self
    }

    /// Return a copy with the given blend mode. Emoji paints are unchanged.
    #[must_use]
    pub fn with_blend_mode(mut self, mode: BlendMode) -> Self {
        match &mut self {
            Self::Solid { blend_mode, .. }
            | Self::GradientLinear { blend_mode, .. }
            | Self::GradientRadial { blend_mode, .. }
            | Self::GradientAngular { blend_mode, .. }
            | Self::GradientDiamond { blend_mode, .. }
            | Self::Image { blend_mode, .. } => *blend_mode = mode,
            Self::Emoji { .. } => {}
        }
        self
    }

    /// Return a copy with the given visibility.
    #[must_use]
    pub fn with_visible(mut self, value: bool) -> Self {
        match &mut self {
            Self::Solid { visible, .. }
            | Self::GradientLinear { visible, .. }
            | Self::GradientRadial { visible, .. }
            | Self::GradientAngular { visible, .. }
            | Self::GradientDiamond { visible, .. }
            | Self::Image { visible, .. }
            | Self::Emoji { visible, .. } => *visible = value,
        }
        self
    }
}

fn looks_like_url(source: &str) -> bool {
    source.starts_with("http")
        || source.starts_with("data:")
        || source.starts_with('/')
        || source.contains('.')
}

//! Inline CSS style resolution.
//!
//! Only inline `style` text is handled - no selectors, no cascade, no
//! inheritance. A [`StyleMap`] is created for one element's declaration block
//! and discarded; maps are never merged across elements.
//!
//! Every getter is total: a missing property, or one that fails to parse as
//! the expected shape, yields `None` (or an all-`None` options struct).
//! Callers always supply their own fallback; the resolver never errors.

use std::collections::HashMap;

use sceneforge_scene::Rgba;

use crate::dom::DomNode;

/// Pixels per point, for `pt` length conversion.
const PX_PER_PT: f32 = 96.0 / 72.0;

/// A parsed inline declaration block: lower-cased property name to its
/// last-declared raw value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    props: HashMap<String, String>,
}

/// A parsed `border` shorthand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    /// Border width in pixels.
    pub width: f32,
    /// Border color.
    pub color: Rgba,
}

/// Border-related properties extracted for the layout mapper.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BorderOptions {
    /// Parsed `border` shorthand, if declared and parsable.
    pub border: Option<Border>,
    /// Parsed `border-radius`, if declared and parsable.
    pub radius: Option<f32>,
}

/// Flexbox-related properties extracted for the layout mapper.
///
/// Keyword values are carried as raw strings; mapping them onto the target
/// layout model (and defaulting unrecognized keywords) is the mapper's job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlexboxOptions {
    /// Raw `display` value.
    pub display: Option<String>,
    /// Raw `flex-direction` value.
    pub flex_direction: Option<String>,
    /// `gap` in pixels.
    pub gap: Option<f32>,
    /// Raw `align-items` value.
    pub align_items: Option<String>,
    /// Raw `justify-content` value.
    pub justify_content: Option<String>,
}

/// Explicit size properties extracted for the layout mapper.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizeOptions {
    /// `width` in pixels.
    pub width: Option<f32>,
    /// `height` in pixels.
    pub height: Option<f32>,
}

/// Padding for the layout mapper.
///
/// `PerSide` values of `None` mean "not declared"; the mapper substitutes
/// zero for them, never a prior value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Padding {
    /// One value broadcast to all four sides.
    Uniform(f32),
    /// Individually declared sides.
    PerSide {
        /// Top padding, if declared.
        top: Option<f32>,
        /// Right padding, if declared.
        right: Option<f32>,
        /// Bottom padding, if declared.
        bottom: Option<f32>,
        /// Left padding, if declared.
        left: Option<f32>,
    },
}

impl StyleMap {
    /// Parse one inline declaration block.
    ///
    /// Declarations split on `;`, each on its *first* `:`. Property names are
    /// trimmed and lower-cased; when a property repeats, the later
    /// declaration wins. Fragments without a `:` are dropped.
    #[must_use]
    pub fn parse(style_text: &str) -> Self {
        let mut props = HashMap::new();
        for declaration in style_text.split(';') {
            let Some((name, value)) = declaration.split_once(':') else {
                continue;
            };
            let name = name.trim().to_lowercase();
            let value = value.trim().to_string();
            if name.is_empty() || value.is_empty() {
                continue;
            }
            props.insert(name, value);
        }
        Self { props }
    }

    /// Parse the inline style of a source node (empty map when absent).
    #[must_use]
    pub fn of(node: &DomNode) -> Self {
        Self::parse(node.style_text().unwrap_or(""))
    }

    /// Raw value of a property, if declared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    /// Whether no declarations were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// A property parsed as a pixel length.
    #[must_use]
    pub fn length(&self, name: &str) -> Option<f32> {
        self.get(name).and_then(parse_length)
    }

    /// A property parsed as a color.
    #[must_use]
    pub fn color_value(&self, name: &str) -> Option<Rgba> {
        self.get(name).and_then(parse_color)
    }

    /// `width` in pixels.
    #[must_use]
    pub fn width(&self) -> Option<f32> {
        self.length("width")
    }

    /// `height` in pixels.
    #[must_use]
    pub fn height(&self) -> Option<f32> {
        self.length("height")
    }

    /// `background-color` (or the color head of `background`).
    #[must_use]
    pub fn background_color(&self) -> Option<Rgba> {
        self.color_value("background-color")
            .or_else(|| self.color_value("background"))
    }

    /// `color` (text color).
    #[must_use]
    pub fn text_color(&self) -> Option<Rgba> {
        self.color_value("color")
    }

    /// `font-size` in pixels.
    #[must_use]
    pub fn font_size(&self) -> Option<f32> {
        self.length("font-size")
    }

    /// `border-radius` in pixels.
    #[must_use]
    pub fn border_radius(&self) -> Option<f32> {
        self.length("border-radius")
    }

    /// The `border` shorthand, parsed as `<width> <style> <color>` with the
    /// width and color tokens recognized positionally-independently.
    #[must_use]
    pub fn border(&self) -> Option<Border> {
        let value = self.get("border")?;
        let mut width = None;
        let mut color = None;
        for token in value.split_whitespace() {
            if width.is_none() {
                if let Some(w) = parse_length(token) {
                    width = Some(w);
                    continue;
                }
            }
            if color.is_none() {
                if let Some(c) = parse_color(token) {
                    color = Some(c);
                }
            }
        }
        Some(Border {
            width: width?,
            color: color.unwrap_or_else(|| Rgba::new(0.0, 0.0, 0.0, 1.0)),
        })
    }

    /// Padding from the `padding` shorthand plus per-side longhands.
    ///
    /// The shorthand accepts one to four values with the CSS broadcast rules;
    /// longhands override their side. `None` when no padding property parses.
    #[must_use]
    pub fn padding(&self) -> Option<Padding> {
        let shorthand = self.get("padding").map(|value| {
            let lengths: Vec<Option<f32>> =
                value.split_whitespace().map(parse_length).collect();
            match lengths.as_slice() {
                [Some(all)] => (Some(*all), Some(*all), Some(*all), Some(*all)),
                [v, h] => (*v, *h, *v, *h),
                [t, h, b] => (*t, *h, *b, *h),
                [t, r, b, l] => (*t, *r, *b, *l),
                _ => (None, None, None, None),
            }
        });

        let (mut top, mut right, mut bottom, mut left) =
            shorthand.unwrap_or((None, None, None, None));
        top = self.length("padding-top").or(top);
        right = self.length("padding-right").or(right);
        bottom = self.length("padding-bottom").or(bottom);
        left = self.length("padding-left").or(left);

        if top.is_none() && right.is_none() && bottom.is_none() && left.is_none() {
            return None;
        }
        if let (Some(t), Some(r), Some(b), Some(l)) = (top, right, bottom, left) {
            if (t - r).abs() < f32::EPSILON
                && (t - b).abs() < f32::EPSILON
                && (t - l).abs() < f32::EPSILON
            {
                return Some(Padding::Uniform(t));
            }
        }
        Some(Padding::PerSide {
            top,
            right,
            bottom,
            left,
        })
    }

    /// Flexbox properties for the layout mapper.
    #[must_use]
    pub fn flexbox_options(&self) -> FlexboxOptions {
        FlexboxOptions {
            display: self.get("display").map(str::to_string),
            flex_direction: self.get("flex-direction").map(str::to_string),
            gap: self.length("gap"),
            align_items: self.get("align-items").map(str::to_string),
            justify_content: self.get("justify-content").map(str::to_string),
        }
    }

    /// Border properties for the layout mapper.
    #[must_use]
    pub fn border_options(&self) -> BorderOptions {
        BorderOptions {
            border: self.border(),
            radius: self.border_radius(),
        }
    }

    /// Size properties for the layout mapper.
    #[must_use]
    pub fn size_options(&self) -> SizeOptions {
        SizeOptions {
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Parse a CSS length into pixels.
///
/// Bare numbers and `px` are pixels; `pt` converts at 96/72. Unit suffixes
/// match case-insensitively. Every other unit (including percentages) is
/// rejected as absent.
#[must_use]
pub fn parse_length(value: &str) -> Option<f32> {
    let value = value.trim().to_ascii_lowercase();
    if let Some(px) = value.strip_suffix("px") {
        return px.trim().parse().ok();
    }
    if let Some(pt) = value.strip_suffix("pt") {
        return pt.trim().parse::<f32>().ok().map(|v| v * PX_PER_PT);
    }
    value.parse().ok()
}

/// Parse a CSS color value.
///
/// Supports `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb()`/`rgba()` with 0-255
/// channels, `transparent`, and a small named-color table. Channels in the
/// result are floats in `[0, 1]`.
#[must_use]
pub fn parse_color(value: &str) -> Option<Rgba> {
    let value = value.trim().to_lowercase();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex_color(hex);
    }
    if let Some(args) = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))
    {
        return parse_rgb_function(args.strip_suffix(')')?);
    }
    named_color(&value)
}

fn parse_hex_color(hex: &str) -> Option<Rgba> {
    // Byte-indexed slicing below requires every char to be one byte wide.
    if !hex.is_ascii() {
        return None;
    }
    let byte = |s: &str| u8::from_str_radix(s, 16).ok();
    let nibble = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v * 17);
    let unit = |v: u8| f32::from(v) / 255.0;

    match hex.len() {
        3 => {
            let r = nibble(&hex[0..1])?;
            let g = nibble(&hex[1..2])?;
            let b = nibble(&hex[2..3])?;
            Some(Rgba::new(unit(r), unit(g), unit(b), 1.0))
        }
        6 | 8 => {
            let r = byte(&hex[0..2])?;
            let g = byte(&hex[2..4])?;
            let b = byte(&hex[4..6])?;
            let a = if hex.len() == 8 {
                unit(byte(&hex[6..8])?)
            } else {
                1.0
            };
            Some(Rgba::new(unit(r), unit(g), unit(b), a))
        }
        _ => None,
    }
}

fn parse_rgb_function(args: &str) -> Option<Rgba> {
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c.is_whitespace() || c == '/')
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let channel = |s: &str| s.trim().parse::<f32>().ok().map(|v| (v / 255.0).clamp(0.0, 1.0));
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if parts.len() == 4 {
        parts[3].trim().parse::<f32>().ok()?.clamp(0.0, 1.0)
    } else {
        1.0
    };
    Some(Rgba::new(r, g, b, a))
}

fn named_color(name: &str) -> Option<Rgba> {
    let (r, g, b, a) = match name {
        "transparent" => (0, 0, 0, 0.0),
        "black" => (0, 0, 0, 1.0),
        "white" => (255, 255, 255, 1.0),
        "red" => (255, 0, 0, 1.0),
        "green" => (0, 128, 0, 1.0),
        "blue" => (0, 0, 255, 1.0),
        "yellow" => (255, 255, 0, 1.0),
        "orange" => (255, 165, 0, 1.0),
        "purple" => (128, 0, 128, 1.0),
        "pink" => (255, 192, 203, 1.0),
        "gray" | "grey" => (128, 128, 128, 1.0),
        "silver" => (192, 192, 192, 1.0),
        "maroon" => (128, 0, 0, 1.0),
        "navy" => (0, 0, 128, 1.0),
        "teal" => (0, 128, 128, 1.0),
        "olive" => (128, 128, 0, 1.0),
        "aqua" | "cyan" => (0, 255, 255, 1.0),
        "magenta" | "fuchsia" => (255, 0, 255, 1.0),
        "lime" => (0, 255, 0, 1.0),
        "brown" => (165, 42, 42, 1.0),
        _ => return None,
    };
    let unit = |v: i32| {
        #[allow(clippy::cast_precision_loss)]
        let v = v as f32;
        v / 255.0
    };
    Some(Rgba::new(unit(r), unit(g), unit(b), a))
}

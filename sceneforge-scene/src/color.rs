//! Color values with `[0, 1]` float channels.

use serde::{Deserialize, Serialize};

/// An opaque RGB color. Channels are floats in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel in `[0, 1]`.
    pub r: f32,
    /// Green channel in `[0, 1]`.
    pub g: f32,
    /// Blue channel in `[0, 1]`.
    pub b: f32,
}

impl Rgb {
    /// Create a color from `[0, 1]` channel values.
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Pure black.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Pure white.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Attach an alpha channel.
    #[must_use]
    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

/// An RGB color with an alpha channel. All channels are floats in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel in `[0, 1]`.
    pub r: f32,
    /// Green channel in `[0, 1]`.
    pub g: f32,
    /// Blue channel in `[0, 1]`.
    pub b: f32,
    /// Alpha channel in `[0, 1]`.
    pub a: f32,
}

impl Rgba {
    /// Create a color from `[0, 1]` channel values.
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Drop the alpha channel.
    #[must_use]
    pub fn rgb(self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

impl From<Rgb> for Rgba {
    fn from(c: Rgb) -> Self {
        c.with_alpha(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_rgba_defaults_opaque() {
        let c: Rgba = Rgb::new(0.2, 0.4, 0.6).into();
        assert!((c.a - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_with_alpha_preserves_channels() {
        let c = Rgb::new(0.1, 0.5, 0.9).with_alpha(0.5);
        assert!((c.r - 0.1).abs() < f32::EPSILON);
        assert!((c.g - 0.5).abs() < f32::EPSILON);
        assert!((c.b - 0.9).abs() < f32::EPSILON);
        assert!((c.a - 0.5).abs() < f32::EPSILON);
    }
}

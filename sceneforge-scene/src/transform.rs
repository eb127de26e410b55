//! 2D affine transforms for gradient and image paints.

use serde::{Deserialize, Serialize};

/// A 2D affine transform matrix.
///
/// Scale, skew and rotation are encoded in `a`, `b`, `c`, `d`; translation in
/// `tx`, `ty`. The identity is `{1, 0, 0, 1, 0, 0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    /// X-axis scale component.
    pub a: f32,
    /// Y-axis shear component.
    pub b: f32,
    /// X-axis shear component.
    pub c: f32,
    /// Y-axis scale component.
    pub d: f32,
    /// X translation.
    pub tx: f32,
    /// Y translation.
    pub ty: f32,
}

impl AffineTransform {
    /// Build a transform from scale, skew and translation components.
    #[must_use]
    pub fn new(sx: f32, sy: f32, skew_x: f32, skew_y: f32, tx: f32, ty: f32) -> Self {
        Self {
            a: sx,
            b: skew_y,
            c: skew_x,
            d: sy,
            tx,
            ty,
        }
    }

    /// The identity transform `{1, 0, 0, 1, 0, 0}`.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(1.0, 1.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Build a rotation about the point `(cx, cy)`.
    ///
    /// The angle is in degrees and the result is periodic in 360: rotating by
    /// 0, 360 or 720 degrees all yield (numerically) the identity.
    #[must_use]
    pub fn rotation(degrees: f32, cx: f32, cy: f32) -> Self {
        let radians = degrees * std::f32::consts::PI / 180.0;
        let cos = radians.cos();
        let sin = radians.sin();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: cy.mul_add(sin, cx - cx * cos),
            ty: cy.mul_add(-cos, cy - cx * sin),
        }
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

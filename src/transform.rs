// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright © 2023 Adrian <adrian.eddy at gmail>

/// 2D affine transform applied to the rendered texture, in view coordinates.
///
/// ```text
/// | scale_x  skew_x   translate_x |
/// | skew_y   scale_y  translate_y |
/// |   0        0          1       |
/// ```
///
/// Equality is exact, component by component, so two transforms built from the
/// same inputs always compare equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale_x: f32,
    pub skew_x: f32,
    pub translate_x: f32,
    pub skew_y: f32,
    pub scale_y: f32,
    pub translate_y: f32,
}

impl Default for Transform {
    fn default() -> Self { Self::identity() }
}

/// Axis-aligned rectangle, `left`/`top` inclusive and `right`/`bottom` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

impl Transform {
    pub const fn identity() -> Self {
        Self {
            scale_x: 1.0, skew_x: 0.0, translate_x: 0.0,
            skew_y: 0.0, scale_y: 1.0, translate_y: 0.0,
        }
    }

    /// Scale by (`sx`, `sy`) keeping the pivot (`px`, `py`) fixed.
    pub fn scale(sx: f32, sy: f32, px: f32, py: f32) -> Self {
        Self {
            scale_x: sx, skew_x: 0.0, translate_x: px - sx * px,
            skew_y: 0.0, scale_y: sy, translate_y: py - sy * py,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    pub fn map_point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.scale_x * x + self.skew_x * y + self.translate_x,
            self.skew_y * x + self.scale_y * y + self.translate_y,
        )
    }

    /// Bounding box of `rect` after the transform.
    pub fn map_rect(&self, rect: Rect) -> Rect {
        let corners = [
            self.map_point(rect.left, rect.top),
            self.map_point(rect.right, rect.top),
            self.map_point(rect.left, rect.bottom),
            self.map_point(rect.right, rect.bottom),
        ];
        let mut out = Rect { left: f32::MAX, top: f32::MAX, right: f32::MIN, bottom: f32::MIN };
        for (x, y) in corners {
            out.left = out.left.min(x);
            out.top = out.top.min(y);
            out.right = out.right.max(x);
            out.bottom = out.bottom.max(y);
        }
        out
    }
}

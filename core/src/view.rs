//! Mapping world coordinates to the screen.
//!
//! World space is laid out so that the square `[-1, 1]²` is the largest
//! square that fits on the screen. The longer screen axis therefore shows
//! more than `[-1, 1]`; [`Aspect::bounds`] tells how much. Normalized device
//! coordinates (NDC) span `[-1, 1]` on both axes regardless of screen shape,
//! with +y up.

use crate::geom::Bbox;
use crate::math::{Point2, Vec2, pt2, vec2};

/// Screen width and height in pixels.
pub type Dims = (u32, u32);

/// Per-axis world-to-NDC scale factors that make world space square.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aspect {
    pub x_scale: f32,
    pub y_scale: f32,
}

/// A per-axis scale followed by a translation, from world space to NDC.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewTransform {
    pub scale: Vec2,
    pub offset: Vec2,
}

impl Aspect {
    /// Returns the aspect of a screen of size `dims`.
    ///
    /// The shorter axis gets scale 1, the longer `short / long`.
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn from_dims((w, h): Dims) -> Self {
        assert!(w > 0 && h > 0, "empty screen {w}x{h}");
        let (w, h) = (w as f32, h as f32);
        if w < h {
            Self { x_scale: 1.0, y_scale: w / h }
        } else {
            Self { x_scale: h / w, y_scale: 1.0 }
        }
    }

    /// Returns the half-extents of the world region visible on screen.
    pub fn bounds(&self) -> Vec2 {
        vec2(1.0 / self.x_scale, 1.0 / self.y_scale)
    }

    /// Returns the view transform that only corrects for aspect.
    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            scale: vec2(self.x_scale, self.y_scale),
            offset: Vec2::ZERO,
        }
    }
}

impl ViewTransform {
    pub const IDENTITY: Self =
        Self { scale: vec2(1.0, 1.0), offset: Vec2::ZERO };

    /// Returns a transform that fits `bbox`, padded by 2% on each side,
    /// to the screen.
    ///
    /// The padded box keeps the proportions given by `aspect`. Its longer
    /// extent on screen spans exactly `[-1, 1]` in NDC and the shorter one
    /// is centered. Returns `None` if the box has no extent on either axis
    /// or is not finite.
    pub fn fit(aspect: Aspect, bbox: Bbox) -> Option<Self> {
        let Aspect { x_scale: xs, y_scale: ys } = aspect;
        let bb = bbox.pad(0.02);
        let (w, h) = (bb.width(), bb.height());
        let (x_ratio, y_ratio) = (w * xs, h * ys);
        if !(x_ratio.is_finite() && y_ratio.is_finite())
            || (x_ratio <= 0.0 && y_ratio <= 0.0)
        {
            return None;
        }
        let (min_x, min_y) = (bb.min.x(), bb.min.y());
        let (ratio, x_off, y_off);
        if x_ratio > y_ratio {
            ratio = 2.0 / x_ratio;
            x_off = -1.0 - min_x * ratio * xs;
            let slack = 2.0 - h * ratio * ys;
            y_off = -1.0 - min_y * ratio * ys + slack / 2.0;
        } else {
            ratio = 2.0 / y_ratio;
            y_off = -1.0 - min_y * ratio * ys;
            let slack = 2.0 - w * ratio * xs;
            x_off = -1.0 - min_x * ratio * xs + slack / 2.0;
        }
        Some(Self {
            scale: vec2(ratio * xs, ratio * ys),
            offset: vec2(x_off, y_off),
        })
    }

    /// Maps a world-space point to NDC.
    #[inline]
    pub fn apply(&self, p: Point2) -> Point2 {
        pt2(
            p.x() * self.scale.x() + self.offset.x(),
            p.y() * self.scale.y() + self.offset.y(),
        )
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

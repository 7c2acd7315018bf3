//! Translation of triangles into discrete pixels.
//!
//! A pixel is covered by a triangle if its center is inside the triangle
//! or on one of its edges. Coverage is tested with edge functions over the
//! triangle's bounding box clipped to the screen; the barycentric weights
//! that fall out of the test are used to interpolate vertex attributes.

use crate::geom::{ColorCoord, Vertex};
use crate::math::{Point2, pt2};
use crate::view::Dims;

use super::stats::Throughput;

/// A single covered pixel and the interpolated attribute at its center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frag {
    pub x: usize,
    pub y: usize,
    pub var: ColorCoord,
}

/// A vertex in screen space: pixel coordinates, +y down.
pub type ScreenVert = Vertex<Point2, ColorCoord>;

/// Maps a point in normalized device coordinates to pixel coordinates.
///
/// NDC (-1, 1) maps to the top left corner of the screen and (1, -1) to the
/// bottom right corner.
#[inline]
pub fn ndc_to_screen(p: Point2, (w, h): Dims) -> Point2 {
    pt2((p.x() + 1.0) * 0.5 * w as f32, (1.0 - p.y()) * 0.5 * h as f32)
}

/// Rasterizes a triangle, calling `frag_fn` for each covered pixel.
///
/// Both windings are filled. Zero-area and non-finite triangles are
/// skipped. Returns the counts of pixels tested and covered.
pub fn tri_fill(
    [a, b, c]: [ScreenVert; 3],
    (w, h): Dims,
    mut frag_fn: impl FnMut(Frag),
) -> Throughput {
    let mut io = Throughput::default();
    let area = (b.pos - a.pos).cross(&(c.pos - a.pos));
    if area == 0.0 || !area.is_finite() {
        return io;
    }
    let xs = [a.pos.x(), b.pos.x(), c.pos.x()];
    let ys = [a.pos.y(), b.pos.y(), c.pos.y()];
    let x0 = xs.into_iter().fold(f32::INFINITY, f32::min).max(0.0) as usize;
    let y0 = ys.into_iter().fold(f32::INFINITY, f32::min).max(0.0) as usize;
    let x1 = (xs.into_iter().fold(f32::NEG_INFINITY, f32::max) + 1.0)
        .clamp(0.0, w as f32) as usize;
    let y1 = (ys.into_iter().fold(f32::NEG_INFINITY, f32::max) + 1.0)
        .clamp(0.0, h as f32) as usize;

    let inv = 1.0 / area;
    for y in y0..y1 {
        for x in x0..x1 {
            io.i += 1;
            let p = pt2(x as f32 + 0.5, y as f32 + 0.5);
            // Normalized so that all are nonnegative inside either winding
            let wa = (c.pos - b.pos).cross(&(p - b.pos)) * inv;
            let wb = (a.pos - c.pos).cross(&(p - c.pos)) * inv;
            let wc = (b.pos - a.pos).cross(&(p - a.pos)) * inv;
            if wa < 0.0 || wb < 0.0 || wc < 0.0 {
                continue;
            }
            let lerp = |f: fn(&ColorCoord) -> f32| {
                wa * f(&a.attrib) + wb * f(&b.attrib) + wc * f(&c.attrib)
            };
            let var = ColorCoord {
                index: lerp(|c| c.index),
                alpha: lerp(|c| c.alpha),
            };
            io.o += 1;
            frag_fn(Frag { x, y, var });
        }
    }
    io
}

//! Render targets.

use alloc::vec::Vec;

use crate::geom::{LineVertex, Tri, vertex};
use crate::math::Color3f;
use crate::view::Dims;

use super::raster::{ndc_to_screen, tri_fill};
use super::stats::Stats;
use super::DrawParams;

/// Trait for types that triangle meshes can be drawn into.
pub trait Target {
    /// Returns the width and height of `self` in pixels.
    fn dims(&self) -> Dims;

    /// Draws the triangles `tris` indexing into `verts`.
    ///
    /// Vertex positions are mapped to NDC by `params.view`. Colors come
    /// from the palette coordinates of the vertices, scaled by the vertex
    /// alphas and `params.alpha`, and are blended additively.
    ///
    /// # Panics
    /// If any index in `tris` is out of bounds of `verts`.
    fn draw(
        &mut self,
        verts: &[LineVertex],
        tris: &[Tri<u32>],
        params: &DrawParams,
    ) -> Stats;
}

/// A software framebuffer accumulating additive color in `f32` channels.
///
/// Channels may grow past 1.0 when many translucent layers overlap; the
/// excess saturates when converted to pixels with [`to_argb`][Self::to_argb].
#[derive(Clone, Debug)]
pub struct Framebuf {
    dims: Dims,
    buf: Vec<Color3f>,
}

impl Framebuf {
    /// Creates a black framebuffer of size `dims`.
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn new(dims: Dims) -> Self {
        let (w, h) = dims;
        assert!(w > 0 && h > 0, "empty framebuffer {w}x{h}");
        Self {
            dims,
            buf: alloc::vec![Color3f::BLACK; w as usize * h as usize],
        }
    }

    /// Clears `self` to black.
    pub fn clear(&mut self) {
        self.buf.fill(Color3f::BLACK);
    }

    /// Returns the accumulated color at (x, y).
    ///
    /// # Panics
    /// If (x, y) is out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Color3f {
        let w = self.dims.0 as usize;
        assert!(x < w, "x = {x} out of bounds");
        self.buf[y * w + x]
    }

    /// Returns the pixels in row-major order.
    pub fn pixels(&self) -> &[Color3f] {
        &self.buf
    }

    /// Writes `self` to `out` as `0x00_RR_GG_BB` pixels, saturating
    /// channels to 1.0.
    ///
    /// # Panics
    /// If `out` has a different number of pixels than `self`.
    pub fn to_argb(&self, out: &mut [u32]) {
        assert_eq!(out.len(), self.buf.len(), "pixel count");
        for (o, c) in out.iter_mut().zip(&self.buf) {
            *o = c.to_color3().to_rgb_u32();
        }
    }
}

impl Target for Framebuf {
    fn dims(&self) -> Dims {
        self.dims
    }

    fn draw(
        &mut self,
        verts: &[LineVertex],
        tris: &[Tri<u32>],
        params: &DrawParams,
    ) -> Stats {
        let dims = self.dims;
        let w = dims.0 as usize;
        let DrawParams { view, alpha, palette } = *params;
        let mut stats = Stats::new();
        stats.calls = 1.0;
        stats.prims.i = tris.len();
        if alpha <= 0.0 {
            return stats;
        }
        for tri in tris {
            let vs = tri.resolve(verts).map(|v| {
                vertex(ndc_to_screen(view.apply(v.pos), dims), v.attrib)
            });
            let buf = &mut self.buf;
            let io = tri_fill(vs, dims, |f| {
                let a = f.var.alpha * alpha;
                if a > 0.0 {
                    buf[f.y * w + f.x] += palette.sample(f.var.index) * a;
                }
            });
            if io.o > 0 {
                stats.prims.o += 1;
            }
            stats.frags += io;
        }
        stats
    }
}

//! Turning meshes into pixels.
//!
//! Mesh objects submit their vertex and index buffers to a [`Target`]
//! together with [`DrawParams`]. The built-in target is [`Framebuf`], an
//! additive software [rasterizer][raster]; a GPU backend would implement the
//! same trait by uploading the buffers.

pub use {
    stats::{Stats, Throughput},
    target::{Framebuf, Target},
};

pub mod raster;
pub mod stats;
pub mod target;

use crate::palette::Palette;
use crate::view::ViewTransform;

/// Per-draw state shared by all vertices of a mesh.
#[derive(Copy, Clone, Debug)]
pub struct DrawParams<'a> {
    /// Maps vertex positions to normalized device coordinates.
    pub view: ViewTransform,
    /// Opacity multiplier, such as the age-based alpha of a trail slot.
    pub alpha: f32,
    /// Resolves vertex color coordinates.
    pub palette: &'a Palette,
}

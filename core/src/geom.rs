//! Meshes built from point sequences.
//!
//! A point sequence is an ordered list of 2D positions, each paired with a
//! palette color coordinate and an alpha. The [strip] meshers turn such a
//! sequence into thick triangle meshes; [`PointArena`] packs several
//! sequences into one backing store; [`Bbox`] bounds them for view fitting.

pub use {
    arena::{PointArena, Span},
    bbox::Bbox,
    strip::{Strip, Topology},
};

pub mod arena;
pub mod bbox;
pub mod strip;

use crate::math::Point2;

/// Vertex with a position and arbitrary other attributes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vertex<P, A> {
    pub pos: P,
    pub attrib: A,
}

/// Triangle, defined by three vertices or vertex indices.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub struct Tri<V>(pub [V; 3]);

/// Palette coordinate and opacity of a vertex.
///
/// `index` is fractional so that it can be interpolated across a triangle;
/// the render target resolves it with [`Palette::sample`][crate::palette::Palette::sample].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ColorCoord {
    pub index: f32,
    pub alpha: f32,
}

/// The vertex type emitted by the line meshers.
pub type LineVertex = Vertex<Point2, ColorCoord>;

/// Creates a `Vertex` with the given position and attribute values.
pub const fn vertex<P, A>(pos: P, attrib: A) -> Vertex<P, A> {
    Vertex { pos, attrib }
}

/// Creates a `Tri` with the given vertices.
pub const fn tri<V>(a: V, b: V, c: V) -> Tri<V> {
    Tri([a, b, c])
}

/// Returns the color coordinate for palette index `index` and `alpha`.
pub const fn color_coord(index: i32, alpha: f32) -> ColorCoord {
    ColorCoord { index: index as f32, alpha }
}

impl Tri<u32> {
    /// Returns the vertices of `verts` that `self` refers to.
    ///
    /// # Panics
    /// If any index of `self` is out of bounds.
    #[inline]
    pub fn resolve<V: Copy>(&self, verts: &[V]) -> [V; 3] {
        self.0.map(|i| verts[i as usize])
    }
}

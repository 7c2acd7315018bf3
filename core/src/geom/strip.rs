//! Thick line strips.
//!
//! A line segment from `P` to `Q` becomes a quad by offsetting both ends
//! half the line thickness along the segment's left normal `h`, in both
//! directions:
//! ```text
//!  P+h +-----------+ Q+h
//!      |           |
//!    P +-----------+ Q
//!      |           |
//!  P-h +-----------+ Q-h
//! ```
//! That is enough for independent segments, but consecutive segments of a
//! strip that turn leave a wedge-shaped gap on the outside of the turn and
//! an overlap on the inside. The [`Topology::Mitred`] layout keeps the
//! centerline points as vertices, fills the outer gap with two "bezel"
//! triangles fanned from the shared centerline point to the previous
//! segment's rail ends, and pulls the two inner rail ends towards each
//! other so that they meet.

use alloc::vec::Vec;
use core::f32::consts::PI;

use crate::math::{Point2, Vec2, float::f32 as fp, sharpness, turn_angle};

use super::{ColorCoord, LineVertex, Tri, tri};

/// Vertex and triangle layout of each segment of a strip.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Topology {
    /// Four vertices and two triangles per segment, no joint handling.
    /// ```text
    ///  0 +--------+ 1
    ///    |      / |
    ///    |    /   |
    ///    |  /     |
    ///  2 +--------+ 3
    /// ```
    #[default]
    Quads,
    /// Six vertices and six triangles per segment. Vertices 0 and 1 are
    /// the centerline ends, 2/3 the plus-normal rail, 4/5 the minus-normal
    /// rail. Two of the six triangles are bezels connecting vertex 0 to the
    /// previous segment's vertices 3 and 5.
    /// ```text
    ///  2 +--------+ 3
    ///    | \      |
    ///  0 +--------+ 1
    ///    |      \ |
    ///  4 +--------+ 5
    /// ```
    Mitred,
}

/// A line strip mesher: a topology, a thickness, and the index buffer,
/// which only depends on the point count and is built once.
#[derive(Clone, Debug)]
pub struct Strip {
    topology: Topology,
    half: f32,
    points: usize,
    indices: Vec<Tri<u32>>,
}

impl Topology {
    /// Returns the number of vertices emitted per segment.
    pub const fn verts_per_segment(self) -> usize {
        match self {
            Self::Quads => 4,
            Self::Mitred => 6,
        }
    }

    /// Returns the number of triangles emitted per segment.
    pub const fn tris_per_segment(self) -> usize {
        match self {
            Self::Quads => 2,
            Self::Mitred => 6,
        }
    }

    /// Returns the index buffer for a strip of `segments` segments.
    pub fn indices(self, segments: usize) -> Vec<Tri<u32>> {
        let mut tris = Vec::with_capacity(segments * self.tris_per_segment());
        match self {
            Self::Quads => {
                for s in 0..segments {
                    let v = 4 * s as u32;
                    tris.push(tri(v, v + 1, v + 3));
                    tris.push(tri(v + 3, v + 2, v));
                }
            }
            Self::Mitred => {
                // The first segment's bezels degenerate onto vertex 0
                let (mut prev3, mut prev5) = (0, 0);
                for s in 0..segments {
                    let v = 6 * s as u32;
                    tris.extend([
                        // Bezels
                        tri(prev3, v + 2, v),
                        tri(prev5, v, v + 4),
                        // Plus rail
                        tri(v, v + 2, v + 3),
                        tri(v + 3, v + 1, v),
                        // Minus rail
                        tri(v + 4, v, v + 1),
                        tri(v + 1, v + 5, v + 4),
                    ]);
                    prev3 = v + 3;
                    prev5 = v + 5;
                }
            }
        }
        tris
    }
}

impl Strip {
    /// Creates a mesher for strips of `points` points, that is,
    /// `points - 1` segments.
    ///
    /// # Panics
    /// If `points` is zero or `thickness` is negative.
    pub fn new(topology: Topology, points: usize, thickness: f32) -> Self {
        assert!(points > 0, "a strip needs at least one point");
        assert!(thickness >= 0.0, "negative thickness {thickness}");
        let indices = topology.indices(points - 1);
        Self { topology, half: thickness / 2.0, points, indices }
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }
    /// Returns the number of points of the strips meshed by `self`.
    pub fn points(&self) -> usize {
        self.points
    }
    pub fn segments(&self) -> usize {
        self.points - 1
    }
    /// Returns the number of vertices in each mesh.
    pub fn vertex_count(&self) -> usize {
        self.segments() * self.topology.verts_per_segment()
    }
    /// Returns the index buffer shared by every mesh of `self`.
    pub fn indices(&self) -> &[Tri<u32>] {
        &self.indices
    }

    /// Returns a zeroed vertex buffer of the right size.
    pub fn vertex_buffer(&self) -> Vec<LineVertex> {
        alloc::vec![LineVertex::default(); self.vertex_count()]
    }

    /// Meshes the strip through `points`, writing the vertices into `out`.
    ///
    /// # Panics
    /// If the lengths of `points`, `colors`, and `alphas` differ from the
    /// point count of `self`, or if `out` is not exactly
    /// [`vertex_count`][Self::vertex_count] long.
    pub fn update(
        &self,
        points: &[Point2],
        colors: &[i32],
        alphas: &[f32],
        out: &mut [LineVertex],
    ) {
        assert_eq!(points.len(), self.points, "point count");
        assert_eq!(colors.len(), self.points, "color count");
        assert_eq!(alphas.len(), self.points, "alpha count");
        assert_eq!(out.len(), self.vertex_count(), "vertex buffer size");
        match self.topology {
            Topology::Quads => quads(points, colors, alphas, self.half, out),
            Topology::Mitred => mitred(points, colors, alphas, self.half, out),
        }
    }
}

#[inline]
fn coord(colors: &[i32], alphas: &[f32], i: usize) -> ColorCoord {
    ColorCoord { index: colors[i] as f32, alpha: alphas[i] }
}

/// Returns the rail offset of the segment `delta`: its left normal scaled
/// to length `half`, or `None` if the segment has zero length.
#[inline]
fn rail_offset(delta: Vec2, half: f32) -> Option<Vec2> {
    let len = delta.len();
    (len > 0.0).then(|| delta.perp() * (half / len))
}

/// Meshes a chained strip with the [`Topology::Quads`] layout.
///
/// Zero-length segments collapse onto their start point. Their colors are
/// left as they were since a zero-area quad is never visible.
pub fn quads(
    points: &[Point2],
    colors: &[i32],
    alphas: &[f32],
    half: f32,
    out: &mut [LineVertex],
) {
    for (i, (pq, vs)) in points.windows(2).zip(out.chunks_exact_mut(4)).enumerate()
    {
        quad(pq[0], pq[1], coord(colors, alphas, i), coord(colors, alphas, i + 1), half, vs);
    }
}

/// Meshes independent segments `points[2k]..points[2k + 1]`, each with the
/// [`Topology::Quads`] layout.
pub fn pairs(
    points: &[Point2],
    colors: &[i32],
    alphas: &[f32],
    half: f32,
    out: &mut [LineVertex],
) {
    for (k, vs) in out.chunks_exact_mut(4).enumerate() {
        let (i, j) = (2 * k, 2 * k + 1);
        let (c0, c1) = (coord(colors, alphas, i), coord(colors, alphas, j));
        quad(points[i], points[j], c0, c1, half, vs);
    }
}

#[inline]
fn quad(
    p: Point2,
    q: Point2,
    pc: ColorCoord,
    qc: ColorCoord,
    half: f32,
    vs: &mut [LineVertex],
) {
    let Some(h) = rail_offset(q - p, half) else {
        vs.iter_mut().for_each(|v| v.pos = p);
        return;
    };
    let pos = [p + h, q + h, p - h, q - h];
    let cols = [pc, qc, pc, qc];
    for ((v, pos), attrib) in vs.iter_mut().zip(pos).zip(cols) {
        v.pos = pos;
        v.attrib = attrib;
    }
}

/// Meshes a chained strip with the [`Topology::Mitred`] layout.
///
/// At each joint, with `dt` the counterclockwise turn from the previous
/// segment's direction into this one's, the two rail ends on the inside of
/// the turn (the plus rail if `dt < π`, the minus rail otherwise) are pulled
/// back along their own segments by `half * tan(sharp / 2)`, where `sharp`
/// is the [sharpness] of the turn. For turns up to a right angle this makes
/// the inner rails meet exactly; sharper turns are pulled in less so that
/// the rails do not overshoot. Straight and reversing joints are left as
/// is, as are joints next to zero-length segments.
pub fn mitred(
    points: &[Point2],
    colors: &[i32],
    alphas: &[f32],
    half: f32,
    out: &mut [LineVertex],
) {
    // Direction and rail offset of the previous non-degenerate segment
    let mut prev_seg: Option<(Vec2, Vec2)> = None;

    for i in 0..points.len().saturating_sub(1) {
        let (p, q) = (points[i], points[i + 1]);
        let (pc, qc) = (coord(colors, alphas, i), coord(colors, alphas, i + 1));
        let vx = 6 * i;
        let delta = q - p;

        let Some(h) = rail_offset(delta, half) else {
            out[vx..vx + 6].iter_mut().for_each(|v| v.pos = p);
            prev_seg = None;
            continue;
        };

        let pos = [p, q, p + h, q + h, p - h, q - h];
        let cols = [pc, qc, pc, qc, pc, qc];
        for ((v, pos), attrib) in out[vx..vx + 6].iter_mut().zip(pos).zip(cols)
        {
            v.pos = pos;
            v.attrib = attrib;
        }

        if let Some((prev_delta, prev_h)) = prev_seg {
            let dt = turn_angle(prev_delta, delta);
            let sharp = sharpness(dt);
            if sharp > 0.0 {
                let scale = fp::tan(sharp / 2.0);
                // The rail offsets rotated back a quarter turn point along
                // their segments, with length `half`.
                let back = -prev_h.perp() * scale;
                let fwd = -h.perp() * scale;
                let (prev_v, this_v) = if dt < PI {
                    (vx - 6 + 3, vx + 2)
                } else {
                    (vx - 6 + 5, vx + 4)
                };
                out[prev_v].pos = out[prev_v].pos - back;
                out[this_v].pos = out[this_v].pos + fwd;
            }
        }
        prev_seg = Some((delta, h));
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::assert_approx_eq;
    use crate::math::pt2;

    const HALF: f32 = 0.05;

    fn mesh(topology: Topology, points: &[Point2]) -> Vec<LineVertex> {
        let n = points.len();
        let strip = Strip::new(topology, n, 2.0 * HALF);
        let mut out = strip.vertex_buffer();
        strip.update(points, &vec![3; n], &vec![1.0; n], &mut out);
        out
    }

    #[test]
    fn buffer_sizes() {
        let s = Strip::new(Topology::Quads, 5, 0.1);
        assert_eq!(s.vertex_count(), 16);
        assert_eq!(s.indices().len() * 3, 24);

        let m = Strip::new(Topology::Mitred, 5, 0.1);
        assert_eq!(m.vertex_count(), 24);
        assert_eq!(m.indices().len() * 3, 72);
    }

    #[test]
    fn indices_are_in_bounds() {
        for topo in [Topology::Quads, Topology::Mitred] {
            let s = Strip::new(topo, 9, 0.1);
            let n = s.vertex_count() as u32;
            assert!(s.indices().iter().all(|t| t.0.iter().all(|&i| i < n)));
        }
    }

    #[test]
    fn mitred_bezels_refer_to_previous_segment() {
        let tris = Topology::Mitred.indices(2);
        assert_eq!(tris[0], tri(0, 2, 0));
        assert_eq!(tris[1], tri(0, 0, 4));
        assert_eq!(tris[6], tri(3, 8, 6));
        assert_eq!(tris[7], tri(5, 6, 10));
    }

    #[test]
    fn single_point_strip_is_empty() {
        for topo in [Topology::Quads, Topology::Mitred] {
            let s = Strip::new(topo, 1, 0.1);
            assert_eq!(s.vertex_count(), 0);
            assert!(s.indices().is_empty());
            let mut out = s.vertex_buffer();
            s.update(&[pt2(1.0, 1.0)], &[0], &[1.0], &mut out);
            assert!(out.is_empty());
        }
    }

    #[test]
    fn quad_corners() {
        let out = mesh(Topology::Quads, &[pt2(0.0, 0.0), pt2(2.0, 0.0)]);
        let pos: Vec<_> = out.iter().map(|v| v.pos).collect();
        assert_eq!(
            pos,
            [pt2(0.0, HALF), pt2(2.0, HALF), pt2(0.0, -HALF), pt2(2.0, -HALF)]
        );
        assert!(out.iter().all(|v| v.attrib == ColorCoord { index: 3.0, alpha: 1.0 }));
    }

    #[test]
    fn degenerate_segment_collapses_without_nan() {
        let p = pt2(0.5, -0.25);
        for topo in [Topology::Quads, Topology::Mitred] {
            let out = mesh(topo, &[p, p]);
            assert_eq!(out.len(), topo.verts_per_segment());
            assert!(out.iter().all(|v| v.pos == p && v.pos.is_finite()));
        }
    }

    #[test]
    fn degenerate_segment_keeps_colors() {
        let p = pt2(1.0, 1.0);
        let s = Strip::new(Topology::Quads, 2, 0.1);
        let mut out = s.vertex_buffer();
        let marker = ColorCoord { index: 42.0, alpha: 0.5 };
        out.iter_mut().for_each(|v| v.attrib = marker);
        s.update(&[p, p], &[1, 2], &[1.0, 1.0], &mut out);
        assert!(out.iter().all(|v| v.attrib == marker));
    }

    #[test]
    fn straight_joint_is_not_adjusted() {
        let pts = [pt2(0.0, 0.0), pt2(1.0, 0.0), pt2(2.0, 0.0)];
        let out = mesh(Topology::Mitred, &pts);
        assert_eq!(out[3].pos, pt2(1.0, HALF));
        assert_eq!(out[5].pos, pt2(1.0, -HALF));
        assert_eq!(out[6 + 2].pos, pt2(1.0, HALF));
        assert_eq!(out[6 + 4].pos, pt2(1.0, -HALF));
    }

    #[test]
    fn right_angle_counterclockwise_inner_rails_meet() {
        let pts = [pt2(0.0, 0.0), pt2(1.0, 0.0), pt2(1.0, 1.0)];
        let out = mesh(Topology::Mitred, &pts);
        // Turning counterclockwise, the plus rail is on the inside
        let corner = pt2(1.0 - HALF, HALF);
        assert_approx_eq!(out[3].pos, corner);
        assert_approx_eq!(out[6 + 2].pos, corner);
        // The outer rail is untouched; the bezel covers the gap
        assert_eq!(out[5].pos, pt2(1.0, -HALF));
        assert_approx_eq!(out[6 + 4].pos, pt2(1.0 + HALF, 0.0));
    }

    #[test]
    fn right_angle_clockwise_inner_rails_meet() {
        let pts = [pt2(0.0, 0.0), pt2(1.0, 0.0), pt2(1.0, -1.0)];
        let out = mesh(Topology::Mitred, &pts);
        let corner = pt2(1.0 - HALF, -HALF);
        assert_approx_eq!(out[5].pos, corner);
        assert_approx_eq!(out[6 + 4].pos, corner);
        assert_eq!(out[3].pos, pt2(1.0, HALF));
    }

    #[test]
    fn shallow_turn_pulls_inner_rails_together() {
        let pts = [pt2(0.0, 0.0), pt2(1.0, 0.0), pt2(2.0, 0.5)];
        let out = mesh(Topology::Mitred, &pts);
        let unadjusted = pt2(1.0, HALF);
        assert!(out[3].pos.x() < unadjusted.x());
        assert_eq!(out[3].pos.y(), HALF);
        // The pulled-back ends lie on the intersection of the inner rails
        assert_approx_eq!(out[3].pos, out[6 + 2].pos, eps = 1e-5);
    }

    #[test]
    fn joint_after_degenerate_segment_is_not_adjusted() {
        let pts = [pt2(0.0, 0.0), pt2(0.0, 0.0), pt2(0.0, 1.0)];
        let out = mesh(Topology::Mitred, &pts);
        assert!(out[..6].iter().all(|v| v.pos == pt2(0.0, 0.0)));
        assert_eq!(out[6 + 2].pos, pt2(-HALF, 0.0));
        assert_eq!(out[6 + 4].pos, pt2(HALF, 0.0));
    }

    #[test]
    fn pairs_are_independent() {
        let pts = [pt2(0.0, 0.0), pt2(1.0, 0.0), pt2(5.0, 5.0), pt2(5.0, 6.0)];
        let mut out = vec![LineVertex::default(); 8];
        pairs(&pts, &[0, 1, 2, 3], &[1.0; 4], HALF, &mut out);
        assert_eq!(out[0].pos, pt2(0.0, HALF));
        assert_eq!(out[4].pos, pt2(5.0 - HALF, 5.0));
        assert_eq!(out[7].attrib.index, 3.0);
    }

    #[test]
    #[should_panic]
    fn mismatched_lengths_panic() {
        let s = Strip::new(Topology::Quads, 3, 0.1);
        let mut out = s.vertex_buffer();
        s.update(&[pt2(0.0, 0.0); 3], &[0; 2], &[1.0; 3], &mut out);
    }
}

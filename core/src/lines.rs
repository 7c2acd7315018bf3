//! Mesh objects: point sequences wired to a mesher, a trail, and a view.
//!
//! Each type owns its point, color, and alpha arrays. Point generators
//! write into those every frame, call `update` to mesh them, and `draw` to
//! submit the meshes to a render [`Target`].

use alloc::vec::Vec;
use core::ops::Range;

use log::{debug, warn};

use crate::geom::{
    Bbox, LineVertex, PointArena, Span, Strip, Topology, Tri, arena,
    strip,
};
use crate::math::{Point2, pt2};
use crate::palette::Palette;
use crate::render::{DrawParams, Stats, Target};
use crate::trail::Trail;
use crate::view::{Aspect, ViewTransform};

/// A chained strip of mitred segments with a motion trail.
#[derive(Clone, Debug)]
pub struct Polyline {
    pub points: Vec<Point2>,
    pub colors: Vec<i32>,
    pub alphas: Vec<f32>,
    strip: Strip,
    trail: Trail<Vec<LineVertex>>,
    view: ViewTransform,
}

/// Independent two-point segments with a motion trail.
///
/// Segment `k` runs from `points[2k]` to `points[2k + 1]`.
#[derive(Clone, Debug)]
pub struct Multiline {
    pub points: Vec<Point2>,
    pub colors: Vec<i32>,
    pub alphas: Vec<f32>,
    half: f32,
    indices: Vec<Tri<u32>>,
    trail: Trail<Vec<LineVertex>>,
    view: ViewTransform,
}

/// Several chained strips of plain quads, one per depth, sharing one
/// [`PointArena`] and one vertex buffer.
///
/// Each depth has its own thickness. There is no trail; instead the view
/// can follow the meshed points, zooming to fit them on screen.
#[derive(Clone, Debug)]
pub struct Fastline {
    pub arena: PointArena,
    spans: Vec<Span>,
    halves: Vec<f32>,
    verts: Vec<LineVertex>,
    indices: Vec<Tri<u32>>,
    drawn: usize,
    aspect: Aspect,
    view: ViewTransform,
}

impl Polyline {
    /// Creates a polyline of `points` points, with a trail drawing
    /// `trails` meshes one every `trail_frames` frames.
    ///
    /// Points start at the origin with color 0 and alpha 1.
    ///
    /// # Panics
    /// If `points`, `trails`, or `trail_frames` is zero.
    pub fn new(
        points: usize,
        thickness: f32,
        trails: usize,
        trail_frames: usize,
        aspect: Aspect,
    ) -> Self {
        let strip = Strip::new(Topology::Mitred, points, thickness);
        let trail = Trail::new(trails, trail_frames, || strip.vertex_buffer());
        debug!(
            "polyline: {points} points, {} vertices x {} trail slots",
            strip.vertex_count(),
            trail.capacity()
        );
        Self {
            points: alloc::vec![Point2::ORIGIN; points],
            colors: alloc::vec![0; points],
            alphas: alloc::vec![1.0; points],
            strip,
            trail,
            view: aspect.transform(),
        }
    }

    /// Meshes the current points into the next trail slot.
    pub fn update(&mut self) {
        let Self { points, colors, alphas, strip, trail, .. } = self;
        trail.write_with(|buf| strip.update(points, colors, alphas, buf));
    }

    /// Draws the visible trail meshes, oldest first.
    pub fn draw(&self, target: &mut impl Target, palette: &Palette) -> Stats {
        let mut stats = Stats::new();
        for (verts, alpha) in self.trail.visible() {
            let params = DrawParams { view: self.view, alpha, palette };
            stats += target.draw(verts, self.strip.indices(), &params);
        }
        stats
    }

    pub fn trail(&self) -> &Trail<Vec<LineVertex>> {
        &self.trail
    }
    pub fn strip(&self) -> &Strip {
        &self.strip
    }
}

impl Multiline {
    /// Creates a multiline of `segments` segments, with a trail drawing
    /// `trails` meshes one every `trail_frames` frames.
    ///
    /// # Panics
    /// If `trails` or `trail_frames` is zero, or `thickness` is negative.
    pub fn new(
        segments: usize,
        thickness: f32,
        trails: usize,
        trail_frames: usize,
        aspect: Aspect,
    ) -> Self {
        assert!(thickness >= 0.0, "negative thickness {thickness}");
        let n = 2 * segments;
        let verts = segments * Topology::Quads.verts_per_segment();
        let trail = Trail::new(trails, trail_frames, || {
            alloc::vec![LineVertex::default(); verts]
        });
        debug!(
            "multiline: {segments} segments x {} trail slots",
            trail.capacity()
        );
        Self {
            points: alloc::vec![Point2::ORIGIN; n],
            colors: alloc::vec![0; n],
            alphas: alloc::vec![1.0; n],
            half: thickness / 2.0,
            indices: Topology::Quads.indices(segments),
            trail,
            view: aspect.transform(),
        }
    }

    pub fn segments(&self) -> usize {
        self.points.len() / 2
    }
    pub fn trail(&self) -> &Trail<Vec<LineVertex>> {
        &self.trail
    }

    /// Meshes the current segments into the next trail slot.
    pub fn update(&mut self) {
        let Self { points, colors, alphas, half, trail, .. } = self;
        trail.write_with(|buf| strip::pairs(points, colors, alphas, *half, buf));
    }

    /// Draws the visible trail meshes, oldest first.
    pub fn draw(&self, target: &mut impl Target, palette: &Palette) -> Stats {
        let mut stats = Stats::new();
        for (verts, alpha) in self.trail.visible() {
            let params = DrawParams { view: self.view, alpha, palette };
            stats += target.draw(verts, &self.indices, &params);
        }
        stats
    }
}

impl Fastline {
    /// Creates a fastline with `counts[d]` points at depth `d`, meshed
    /// `thickness[d]` thick.
    ///
    /// All points start at the origin except that the second point, if
    /// any, is at (1, 0).
    ///
    /// # Panics
    /// If `counts` and `thickness` have different lengths or if any count
    /// is zero.
    pub fn new(counts: &[usize], thickness: &[f32], aspect: Aspect) -> Self {
        assert_eq!(counts.len(), thickness.len(), "one thickness per depth");
        assert!(counts.iter().all(|&c| c > 0), "empty depth in {counts:?}");

        let spans = arena::spans_from_counts(counts);
        let total = spans.last().map_or(0, Span::end);
        let segments: usize = counts.iter().map(|c| c - 1).sum();

        let mut arena = PointArena::new(total);
        if total > 1 {
            arena.points[1] = pt2(1.0, 0.0);
        }
        debug!(
            "fastline: {} depths, {total} points, {segments} segments",
            counts.len()
        );
        Self {
            arena,
            spans,
            halves: thickness.iter().map(|t| t / 2.0).collect(),
            verts: alloc::vec![LineVertex::default(); 4 * segments],
            indices: Topology::Quads.indices(segments),
            drawn: 0,
            aspect,
            view: aspect.transform(),
        }
    }

    /// Returns the number of depths.
    pub fn depths(&self) -> usize {
        self.spans.len()
    }
    /// Returns the span of depth `depth` in the arena.
    ///
    /// # Panics
    /// If `depth` is out of bounds.
    pub fn span(&self, depth: usize) -> Span {
        self.spans[depth]
    }
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }
    /// Returns the number of vertices meshed by the last update.
    pub fn vertex_count(&self) -> usize {
        self.drawn
    }
    pub fn vertices(&self) -> &[LineVertex] {
        &self.verts[..self.drawn]
    }
    pub fn view(&self) -> ViewTransform {
        self.view
    }

    /// Meshes the depths in `depths`, packed from the start of the vertex
    /// buffer. Depths past the last one are ignored.
    ///
    /// If `adapt_view` is true, the view is refitted to the bounding box of
    /// the meshed points. A degenerate box keeps the previous view.
    pub fn update(&mut self, depths: Range<usize>, adapt_view: bool) {
        let end = depths.end.min(self.spans.len());
        let depths = depths.start..end.max(depths.start);

        let mut vx = 0;
        for d in depths.clone() {
            let span = self.spans[d];
            let n = 4 * (span.len - 1);
            let seq = self.arena.get(span);
            strip::quads(
                seq.points,
                seq.colors,
                seq.alphas,
                self.halves[d],
                &mut self.verts[vx..vx + n],
            );
            vx += n;
        }
        self.drawn = vx;

        if adapt_view && !depths.is_empty() {
            let first = self.spans[depths.start].start;
            let last = self.spans[depths.end - 1].end();
            let fit = Bbox::of(&self.arena.points[first..last])
                .and_then(|bb| ViewTransform::fit(self.aspect, bb));
            match fit {
                Some(v) => self.view = v,
                None => warn!("fastline: cannot fit depths {depths:?}"),
            }
        }
    }

    /// Draws the vertices meshed by the last update.
    pub fn draw(&self, target: &mut impl Target, palette: &Palette) -> Stats {
        let tris = &self.indices[..self.drawn / 2];
        let params = DrawParams { view: self.view, alpha: 1.0, palette };
        target.draw(self.vertices(), tris, &params)
    }
}

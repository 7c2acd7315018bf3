//! Point sequences packed into one backing store.
//!
//! Several logical sequences (such as the depth levels of a fractal) live
//! in the same three arrays, one after another. Each owner only keeps a
//! [`Span`] into the arena, never a reference, so the arena can be borrowed
//! mutably for one sequence while another is read.
//! ```text
//!          span 0   span 1           span 2
//!         +-------+-----------+---------------------+
//! points  | p p   | p p p p p | p p p p p p p p ... |
//! colors  | c c   | c c c c c | c c c c c c c c ... |
//! alphas  | a a   | a a a a a | a a a a a a a a ... |
//!         +-------+-----------+---------------------+
//! ```

use alloc::vec::Vec;
use core::ops::Range;

use crate::math::Point2;

/// A range of sequence elements in a [`PointArena`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

/// Storage for point sequences: positions, palette color coordinates, and
/// alphas, co-indexed.
#[derive(Clone, Debug, Default)]
pub struct PointArena {
    pub points: Vec<Point2>,
    pub colors: Vec<i32>,
    pub alphas: Vec<f32>,
}

/// A borrowed point sequence.
#[derive(Copy, Clone, Debug)]
pub struct Seq<'a> {
    pub points: &'a [Point2],
    pub colors: &'a [i32],
    pub alphas: &'a [f32],
}

/// A mutably borrowed point sequence.
#[derive(Debug)]
pub struct SeqMut<'a> {
    pub points: &'a mut [Point2],
    pub colors: &'a mut [i32],
    pub alphas: &'a mut [f32],
}

impl Span {
    pub const fn end(&self) -> usize {
        self.start + self.len
    }
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Returns consecutive spans with the given lengths, starting at zero.
///
/// # Examples
/// ```
/// use modus_core::geom::arena::{Span, spans_from_counts};
///
/// let spans = spans_from_counts(&[2, 5, 17]);
/// assert_eq!(spans[1], Span { start: 2, len: 5 });
/// assert_eq!(spans[2].end(), 24);
/// ```
pub fn spans_from_counts(counts: &[usize]) -> Vec<Span> {
    let mut start = 0;
    counts
        .iter()
        .map(|&len| {
            let s = Span { start, len };
            start += len;
            s
        })
        .collect()
}

impl PointArena {
    /// Creates an arena of `len` points at the origin, with color 0 and
    /// alpha 1.
    pub fn new(len: usize) -> Self {
        Self {
            points: alloc::vec![Point2::ORIGIN; len],
            colors: alloc::vec![0; len],
            alphas: alloc::vec![1.0; len],
        }
    }

    /// Returns the total number of points in `self`.
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the sequence in `span`.
    ///
    /// # Panics
    /// If `span` is out of bounds.
    pub fn get(&self, span: Span) -> Seq<'_> {
        let r = span.range();
        Seq {
            points: &self.points[r.clone()],
            colors: &self.colors[r.clone()],
            alphas: &self.alphas[r],
        }
    }

    /// Returns the sequence in `span` mutably.
    ///
    /// # Panics
    /// If `span` is out of bounds.
    pub fn get_mut(&mut self, span: Span) -> SeqMut<'_> {
        let r = span.range();
        SeqMut {
            points: &mut self.points[r.clone()],
            colors: &mut self.colors[r.clone()],
            alphas: &mut self.alphas[r],
        }
    }

    /// Borrows the sequence `src` for reading and `dst` for writing at the
    /// same time.
    ///
    /// # Panics
    /// If `src` does not end before `dst` starts, or if `dst` is out of
    /// bounds.
    pub fn split(&mut self, src: Span, dst: Span) -> (Seq<'_>, SeqMut<'_>) {
        assert!(
            src.end() <= dst.start,
            "source {src:?} must precede destination {dst:?}"
        );
        let at = dst.start;
        let (ps, pd) = self.points.split_at_mut(at);
        let (cs, cd) = self.colors.split_at_mut(at);
        let (as_, ad) = self.alphas.split_at_mut(at);
        let s = src.range();
        let d = 0..dst.len;
        (
            Seq {
                points: &ps[s.clone()],
                colors: &cs[s.clone()],
                alphas: &as_[s],
            },
            SeqMut {
                points: &mut pd[d.clone()],
                colors: &mut cd[d.clone()],
                alphas: &mut ad[d],
            },
        )
    }
}

impl Seq<'_> {
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

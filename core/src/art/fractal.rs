//! Line fractals by iterated function systems.
//!
//! A [`Pattern`] is a polyline from (0, 0) to (1, 0). Replacing every
//! segment of a line with a copy of the pattern, stretched and rotated to
//! fit the segment, gives the next depth level of the fractal:
//! ```text
//!                      /\              _/\_/\_
//!  ______   -->   ___/  \___   -->   _/      \_
//! ```
//! The end colors of the pattern must match, so that consecutive copies
//! share their joint point and a line of `L` points becomes exactly
//! `(L - 1) * (k - 1) + 1` points for a `k`-point pattern.

use alloc::vec::Vec;
use core::ops::Range;

use log::debug;

use crate::config::FractalsConfig;
use crate::error::ConfigError;
use crate::geom::arena::Seq;
use crate::lines::Fastline;
use crate::math::{Affine2, Point2, float::f32 as fp, pt2, vec2};
use crate::palette::Palette;
use crate::render::{Stats, Target};
use crate::view::Aspect;

/// The polyline each segment is replaced with.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    points: Vec<Point2>,
    colors: Vec<i32>,
    rest: Vec<Point2>,
}

/// A stack of fractal depth levels meshed together.
///
/// Depth 0 is the seed line from (0, 0) to (1, 0) and never changes. Every
/// other depth is regenerated from its parent on each update, while the
/// pattern slowly wobbles.
#[derive(Clone, Debug)]
pub struct Fractals {
    line: Fastline,
    pattern: Pattern,
    theta: f32,
}

/// Amplitude of the control point wobble.
const WOBBLE: f32 = 0.05;

impl Pattern {
    /// Creates a pattern with the given points and palette offsets.
    ///
    /// # Panics
    /// If the pattern is invalid; see [`try_new`][Self::try_new].
    pub fn new(points: Vec<Point2>, colors: Vec<i32>) -> Self {
        match Self::try_new(points, colors) {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates a pattern, checking that it has as many colors as points and
    /// at least two of each, that it starts at exactly (0, 0) and ends at
    /// exactly (1, 0), and that its first and last colors are equal.
    pub fn try_new(
        points: Vec<Point2>,
        colors: Vec<i32>,
    ) -> Result<Self, ConfigError> {
        if points.len() != colors.len() {
            return Err(ConfigError::PatternLengths {
                points: points.len(),
                colors: colors.len(),
            });
        }
        if points.len() < 2 {
            return Err(ConfigError::TooFew {
                what: "pattern points",
                min: 2,
                got: points.len(),
            });
        }
        let n = points.len();
        if points[0] != pt2(0.0, 0.0) || points[n - 1] != pt2(1.0, 0.0) {
            return Err(ConfigError::PatternEndpoints);
        }
        if colors[0] != colors[n - 1] {
            return Err(ConfigError::PatternColors {
                first: colors[0],
                last: colors[n - 1],
            });
        }
        let rest = points.clone();
        Ok(Self { points, colors, rest })
    }

    /// Returns the number of points in `self`.
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn points(&self) -> &[Point2] {
        &self.points
    }
    pub fn colors(&self) -> &[i32] {
        &self.colors
    }

    /// Moves the first and last interior points around small circles
    /// centered at their initial positions, to angle `theta`.
    pub fn wobble(&mut self, theta: f32) {
        let n = self.points.len();
        if n < 3 {
            return;
        }
        let (s, c) = fp::sin_cos(theta);
        let d = vec2(c, s) * WOBBLE;
        for i in [1, n - 2] {
            self.points[i] = self.rest[i] + d;
        }
    }
}

impl Default for Pattern {
    /// A flattened "S" with bright ends.
    fn default() -> Self {
        Self::new(
            [(0.0, 0.0), (0.03, 0.15), (0.97, -0.15), (1.0, 0.0)]
                .map(|(x, y)| pt2(x, y))
                .to_vec(),
            alloc::vec![4, 1, 1, 4],
        )
    }
}

/// Returns the point counts of `depths` levels expanded by a pattern of
/// `pattern_len` points, or `None` on overflow.
///
/// # Examples
/// ```
/// use modus_core::art::fractal::depth_counts;
///
/// assert_eq!(depth_counts(3, 3), Some(vec![2, 3, 5]));
/// assert_eq!(depth_counts(4, 4), Some(vec![2, 4, 10, 28]));
/// ```
pub fn depth_counts(depths: usize, pattern_len: usize) -> Option<Vec<usize>> {
    let k = pattern_len.checked_sub(1)?;
    let mut counts = Vec::with_capacity(depths);
    let mut per_line = 2usize;
    for _ in 0..depths {
        counts.push(per_line);
        per_line = (per_line - 1).checked_mul(k)?.checked_add(1)?;
    }
    Some(counts)
}

impl Fractals {
    /// Creates a fractal of `cfg.depths` levels, with depth `d` meshed
    /// `cfg.thickness * 0.9^d` thick.
    ///
    /// # Panics
    /// If `cfg.depths` is zero or the point counts overflow.
    pub fn new(cfg: &FractalsConfig, aspect: Aspect) -> Self {
        let pattern = cfg.pattern.clone();
        assert!(cfg.depths > 0, "fractal needs at least one depth");
        let counts = depth_counts(cfg.depths, pattern.len())
            .unwrap_or_else(|| panic!("{} depths overflow", cfg.depths));
        let thickness: Vec<f32> = (0..cfg.depths)
            .scan(cfg.thickness, |t, _| {
                let this = *t;
                *t *= 0.9;
                Some(this)
            })
            .collect();
        debug!("fractals: depth point counts {counts:?}");

        let mut res = Self {
            line: Fastline::new(&counts, &thickness, aspect),
            pattern,
            theta: 0.0,
        };
        res.reset();
        res
    }

    /// Returns the number of depth levels.
    pub fn depths(&self) -> usize {
        self.line.depths()
    }
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
    pub fn line(&self) -> &Fastline {
        &self.line
    }

    /// Returns the points of depth `depth`.
    ///
    /// # Panics
    /// If `depth` is out of bounds.
    pub fn level(&self, depth: usize) -> Seq<'_> {
        self.line.arena.get(self.line.span(depth))
    }

    /// Resets depth 0 to the seed line from (0, 0) to (1, 0), color 1.
    pub fn reset(&mut self) {
        let span = self.line.span(0);
        let seed = self.line.arena.get_mut(span);
        seed.points[0] = pt2(0.0, 0.0);
        seed.colors[0] = 1;
        if seed.points.len() > 1 {
            seed.points[1] = pt2(1.0, 0.0);
            seed.colors[1] = 1;
        }
    }

    /// Regenerates depth `depth` from depth `depth - 1`.
    ///
    /// Each parent segment is replaced by the pattern mapped onto it, and
    /// each new point's color is the color of the parent's segment end
    /// point plus the pattern's color. The first point is the parent's
    /// first point.
    ///
    /// # Panics
    /// If `depth` is zero or out of bounds.
    pub fn expand(&mut self, depth: usize) {
        assert!(depth > 0, "depth 0 has no parent");
        let (src, dst) = (self.line.span(depth - 1), self.line.span(depth));
        let (parent, child) = self.line.arena.split(src, dst);
        let Pattern { points: pat_pts, colors: pat_cols, .. } = &self.pattern;

        child.points[0] = parent.points[0];
        child.colors[0] = parent.colors[0] + pat_cols[0];
        let mut n = 1;
        for (seg, &color) in parent.points.windows(2).zip(&parent.colors[1..]) {
            let m = Affine2::from_segment(seg[0], seg[1]);
            for (&p, &c) in pat_pts[1..].iter().zip(&pat_cols[1..]) {
                child.points[n] = m.apply(p);
                child.colors[n] = color + c;
                n += 1;
            }
        }
        debug_assert_eq!(n, child.points.len());
    }

    /// Advances the wobble, regenerates every depth but the seed, and
    /// meshes them with the view fitted to the result.
    pub fn update(&mut self) {
        self.theta += 0.02;
        self.pattern.wobble(self.theta);
        let derived: Range<usize> = 1..self.depths();
        for d in derived.clone() {
            self.expand(d);
        }
        self.line.update(derived, true);
    }

    /// Draws the depths meshed by the last update.
    pub fn draw(&self, target: &mut impl Target, palette: &Palette) -> Stats {
        self.line.draw(target, palette)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::assert_approx_eq;

    fn aspect() -> Aspect {
        Aspect::from_dims((320, 240))
    }

    fn config(depths: usize, pattern: Pattern) -> FractalsConfig {
        FractalsConfig { depths, pattern, ..FractalsConfig::default() }
    }

    fn tent() -> Pattern {
        Pattern::new(
            vec![pt2(0.0, 0.0), pt2(0.5, 0.5), pt2(1.0, 0.0)],
            vec![2, 5, 2],
        )
    }

    #[test]
    fn pattern_validation() {
        let pts = || vec![pt2(0.0, 0.0), pt2(0.5, 0.1), pt2(1.0, 0.0)];
        assert!(Pattern::try_new(pts(), vec![1, 2, 1]).is_ok());
        assert_eq!(
            Pattern::try_new(pts(), vec![1, 2, 3]),
            Err(ConfigError::PatternColors { first: 1, last: 3 })
        );
        assert_eq!(
            Pattern::try_new(pts(), vec![1, 1]),
            Err(ConfigError::PatternLengths { points: 3, colors: 2 })
        );
        let bad_end = vec![pt2(0.0, 0.0), pt2(1.0, 0.1)];
        assert_eq!(
            Pattern::try_new(bad_end, vec![1, 1]),
            Err(ConfigError::PatternEndpoints)
        );
    }

    #[test]
    #[should_panic]
    fn pattern_new_panics_on_color_mismatch() {
        let _ = Pattern::new(vec![pt2(0.0, 0.0), pt2(1.0, 0.0)], vec![4, 8]);
    }

    #[test]
    fn wobble_moves_interior_points_only() {
        let mut p = Pattern::default();
        p.wobble(0.0);
        assert_approx_eq!(p.points()[1], pt2(0.08, 0.15));
        assert_approx_eq!(p.points()[2], pt2(1.02, -0.15));
        assert_eq!(p.points()[0], pt2(0.0, 0.0));
        assert_eq!(p.points()[3], pt2(1.0, 0.0));
        // Not cumulative
        p.wobble(0.0);
        assert_approx_eq!(p.points()[1], pt2(0.08, 0.15));
    }

    #[test]
    fn length_law() {
        assert_eq!(depth_counts(3, 3), Some(vec![2, 3, 5]));
        assert_eq!(depth_counts(0, 3), Some(vec![]));
        assert_eq!(depth_counts(200, 4), None);

        let mut fr = Fractals::new(&config(4, tent()), aspect());
        fr.update();
        let lens: Vec<_> = (0..4).map(|d| fr.level(d).len()).collect();
        assert_eq!(lens, [2, 3, 5, 9]);
        // (L - 1) * (k - 1) + 1 for parent length 5, k = 3
        assert_eq!(fr.level(3).len(), 4 * 2 + 1);
    }

    #[test]
    fn expansion_maps_pattern_onto_segments() {
        let mut fr = Fractals::new(&config(3, tent()), aspect());
        fr.expand(1);
        let l1 = fr.level(1);
        assert_eq!(l1.points, [pt2(0.0, 0.0), pt2(0.5, 0.5), pt2(1.0, 0.0)]);
        // Parent colors are 1; pattern colors are added
        assert_eq!(l1.colors, [3, 6, 3]);

        fr.expand(2);
        let l2 = fr.level(2);
        assert_approx_eq!(l2.points[1], pt2(0.0, 0.5));
        assert_approx_eq!(l2.points[2], pt2(0.5, 0.5));
        assert_approx_eq!(l2.points[3], pt2(1.0, 0.5));
        assert_approx_eq!(l2.points[4], pt2(1.0, 0.0));
        assert_eq!(l2.colors, [5, 11, 8, 8, 5]);
    }

    #[test]
    fn first_point_is_anchored_exactly() {
        let mut fr = Fractals::new(&config(5, Pattern::default()), aspect());
        for _ in 0..10 {
            fr.update();
            for d in 1..fr.depths() {
                assert_eq!(fr.level(d).points[0], fr.level(d - 1).points[0]);
            }
        }
    }

    #[test]
    fn seed_is_never_updated() {
        let mut fr = Fractals::new(&config(3, Pattern::default()), aspect());
        for _ in 0..5 {
            fr.update();
        }
        let seed = fr.level(0);
        assert_eq!(seed.points, [pt2(0.0, 0.0), pt2(1.0, 0.0)]);
        assert_eq!(seed.colors, [1, 1]);
    }

    #[test]
    fn update_meshes_derived_depths() {
        let mut fr = Fractals::new(&config(3, Pattern::default()), aspect());
        fr.update();
        // Depths 1 and 2 have 4 and 10 points
        assert_eq!(fr.line().vertex_count(), 4 * (3 + 9));
        assert!(fr.line().vertices().iter().all(|v| v.pos.is_finite()));
    }
}

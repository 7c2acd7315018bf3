//! Rotating, rippling spirals.
//!
//! A spiral winds from its center out to a target point that drifts around
//! the screen. Points further in rotate faster, so the arms curl up as the
//! target moves. Whenever the target bounces off the screen edge, a ripple
//! starts at the outer end and travels inward, displacing points radially.

use alloc::vec::Vec;
use core::f32::consts::PI;

use log::{debug, trace};

use crate::config::SpiralsConfig;
use crate::lines::Polyline;
use crate::math::{Point2, Vec2, Xorshift64, float::f32 as fp, pt2, vec2};
use crate::palette::Palette;
use crate::render::{Stats, Target};
use crate::view::Aspect;

/// The radial displacement applied around a ripple, outermost first.
const RIPPLE: [i32; 9] = [-1, -2, 0, 2, 1, 0, -1, 0, 1];

/// A point disturbed by a ripple in the current update.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Notice {
    /// World position of the point.
    pub pos: Point2,
    /// Displacement of the point since the previous update.
    pub velocity: Vec2,
    /// Ripple strength, weighted towards the outer end of the spiral.
    pub intensity: f32,
    /// Palette index of the point.
    pub color: i32,
}

/// A single spiral meshed as a [`Polyline`] with a trail.
#[derive(Clone, Debug)]
pub struct Spiral {
    pub center: Point2,
    pub target: Point2,
    pub velocity: Vec2,
    /// Palette index of the outermost point.
    pub color: i32,
    spin: f32,
    bounds: Vec2,
    palette_size: i32,
    /// Each ripple is both its position along the spiral and its energy.
    ripples: Vec<i32>,
    offsets: Vec<i32>,
    line: Polyline,
}

/// Several spirals sharing a center.
#[derive(Clone, Debug)]
pub struct Spirals {
    spirals: Vec<Spiral>,
}

impl Spiral {
    /// Creates a spiral from the origin to the origin, not moving.
    ///
    /// The target bounces off the edges of the world region visible with
    /// `aspect`. Colors wrap around at `palette_size`.
    ///
    /// # Panics
    /// If `cfg.points < 2`, `palette_size` is zero, or the trail parameters
    /// are zero.
    pub fn new(cfg: &SpiralsConfig, aspect: Aspect, palette_size: usize) -> Self {
        assert!(cfg.points >= 2, "spiral needs at least two points");
        assert!(palette_size > 0, "empty palette");
        let line = Polyline::new(
            cfg.points,
            cfg.thickness,
            cfg.trails,
            cfg.trail_frames,
            aspect,
        );
        Self {
            center: Point2::ORIGIN,
            target: Point2::ORIGIN,
            velocity: Vec2::ZERO,
            color: 0,
            spin: cfg.spin,
            bounds: aspect.bounds(),
            palette_size: palette_size as i32,
            ripples: Vec::new(),
            offsets: alloc::vec![0; cfg.points],
            line,
        }
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.line.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.line.points.is_empty()
    }
    pub fn line(&self) -> &Polyline {
        &self.line
    }

    /// Returns the active ripples.
    pub fn ripples(&self) -> &[i32] {
        &self.ripples
    }

    /// Starts a ripple at the outer end of the spiral.
    pub fn ripple(&mut self) {
        self.ripples.push(self.len() as i32 - 1);
    }

    /// Advances the spiral by one frame and meshes it.
    ///
    /// Every point displaced by a ripple is reported to `notice`. If the
    /// target sits exactly on the center, all points collapse onto the
    /// center and the target, velocity and mesh are left as they are.
    pub fn update(&mut self, mut notice: impl FnMut(Notice)) {
        let n = self.len();
        self.spread_ripples();
        self.color = (self.color + 1) % self.palette_size;

        let delta = self.target - self.center;
        if delta.is_zero() {
            // No direction to wind towards
            self.line.points.fill(self.center);
            return;
        }
        self.wind(delta, &mut notice);

        self.target += self.velocity;
        if self.bounce() {
            trace!("spiral: bounce at {:?}", self.target);
            self.ripple();
        }
        debug_assert_eq!(self.line.points.len(), n);
        self.line.update();
    }

    /// Draws the spiral and its trail.
    pub fn draw(&self, target: &mut impl Target, palette: &Palette) -> Stats {
        self.line.draw(target, palette)
    }

    /// Sums the ripple kernels into the per-point offsets, then moves
    /// every ripple inward, dropping those that reach the center.
    fn spread_ripples(&mut self) {
        let decay = self.len() as i32 / 200 + 1;
        self.offsets.fill(0);
        for r in &mut self.ripples {
            let start = *r as usize;
            for (o, k) in self.offsets[..=start].iter_mut().rev().zip(RIPPLE) {
                *o += k;
            }
            *r -= decay;
        }
        self.ripples.retain(|&r| r > 0);
    }

    /// Places the points along the spiral from the outermost inward.
    fn wind(&mut self, delta: Vec2, notice: &mut impl FnMut(Notice)) {
        let n = self.len();
        let theta_per_seg = 4.0 * PI / n as f32;
        let full_r = delta.len();
        let part_r = full_r / n as f32;
        let mut theta = delta.angle();
        let mut color = self.color;

        let Polyline { points, colors, alphas, .. } = &mut self.line;
        for i in (0..n).rev() {
            let ripple = self.offsets[i];
            let r = part_r * i as f32;
            let rippled = r * (40 + ripple) as f32 / 40.0;
            let (sin, cos) = fp::sin_cos(theta);

            let prev = points[i];
            points[i] = self.center + vec2(cos, sin) * rippled;
            colors[i] = color + ripple * n as i32 / 5;
            alphas[i] = 1.0;
            if ripple != 0 {
                notice(Notice {
                    pos: points[i],
                    velocity: points[i] - prev,
                    intensity: fp::sqrt(r / full_r) * ripple.abs() as f32,
                    color: colors[i],
                });
            }
            color = (color + 1) % self.palette_size;
            if r > 0.0 {
                theta += self.spin * theta_per_seg * fp::sqrt(full_r / r);
            }
        }
    }

    /// Mirrors the target back inside the bounds, reversing the velocity
    /// on each axis crossed. Returns whether any axis was crossed.
    fn bounce(&mut self) -> bool {
        let mut bounced = false;
        for axis in 0..2 {
            let b = self.bounds.0[axis];
            let t = &mut self.target.0[axis];
            if fp::abs(*t) > b {
                *t = if *t > 0.0 { 2.0 * b - *t } else { -2.0 * b - *t };
                self.velocity.0[axis] = -self.velocity.0[axis];
                bounced = true;
            }
        }
        bounced
    }
}

impl Spirals {
    /// Creates `cfg.count` spirals centered at the origin, with random
    /// targets in the unit square and random diagonal velocities, and
    /// colors spread evenly over the palette.
    pub fn new(
        cfg: &SpiralsConfig,
        aspect: Aspect,
        palette_size: usize,
        rng: &mut Xorshift64,
    ) -> Self {
        let spirals = (0..cfg.count)
            .map(|i| {
                let mut s = Spiral::new(cfg, aspect, palette_size);
                s.target = pt2(rng.unit_f32(), rng.unit_f32());
                s.velocity = vec2(velocity(rng), velocity(rng));
                s.color = (i * palette_size / cfg.count) as i32;
                s
            })
            .collect();
        debug!("spirals: {} x {} points", cfg.count, cfg.points);
        Self { spirals }
    }

    pub fn spirals(&self) -> &[Spiral] {
        &self.spirals
    }
    pub fn spirals_mut(&mut self) -> &mut [Spiral] {
        &mut self.spirals
    }

    /// Advances every spiral by one frame.
    pub fn update(&mut self, mut notice: impl FnMut(Notice)) {
        for s in &mut self.spirals {
            s.update(&mut notice);
        }
    }

    /// Draws every spiral.
    pub fn draw(&self, target: &mut impl Target, palette: &Palette) -> Stats {
        let mut stats = Stats::new();
        for s in &self.spirals {
            stats += s.draw(target, palette);
        }
        stats
    }
}

/// Returns a speed of 1/192 to 1/96 per frame in a random direction.
fn velocity(rng: &mut Xorshift64) -> f32 {
    let sign = if rng.coin() { 0.5 } else { -0.5 };
    sign * (rng.unit_f32() + 1.0) / 96.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    fn aspect() -> Aspect {
        Aspect::from_dims((400, 400))
    }

    fn config(points: usize) -> SpiralsConfig {
        SpiralsConfig {
            points,
            trails: 1,
            trail_frames: 1,
            ..SpiralsConfig::default()
        }
    }

    fn spiral(points: usize) -> Spiral {
        let mut s = Spiral::new(&config(points), aspect(), 60);
        s.target = pt2(0.5, 0.0);
        s
    }

    #[test]
    fn winds_from_target_to_center() {
        let mut s = spiral(10);
        s.update(|_| panic!("no ripples"));
        let pts = &s.line().points;
        // Outermost point is one step short of the target
        assert_approx_eq!(pts[9], pt2(0.45, 0.0));
        assert_eq!(pts[0], s.center);
        for (i, p) in pts.iter().enumerate() {
            assert_approx_eq!((*p - s.center).len(), 0.05 * i as f32, eps = 1e-5);
        }
    }

    #[test]
    fn inner_points_turn_faster() {
        let mut s = spiral(100);
        s.update(|_| {});
        let pts = &s.line().points;
        let angle = |i: usize, j: usize| {
            let (a, b) = (pts[i].to_vec(), pts[j].to_vec());
            fp::abs(fp::atan2(a.cross(&b), a.dot(&b)))
        };
        assert!(angle(10, 11) > angle(90, 91));
    }

    #[test]
    fn colors_cycle() {
        let mut s = spiral(4);
        s.color = 58;
        s.update(|_| {});
        // Incremented before winding, then once per point from the outside
        assert_eq!(s.line().colors, [2, 1, 0, 59]);
    }

    #[test]
    fn bounce_mirrors_target() {
        let mut s = spiral(10);
        s.target = pt2(0.99, -0.5);
        s.velocity = vec2(0.03, -0.01);
        s.update(|_| {});
        assert_approx_eq!(s.target, pt2(0.98, -0.51));
        assert_approx_eq!(s.velocity, vec2(-0.03, -0.01));
        assert_eq!(s.ripples(), [9]);

        s.target = pt2(-0.5, -0.995);
        s.velocity = vec2(0.0, -0.01);
        s.update(|_| {});
        assert_approx_eq!(s.target, pt2(-0.5, -0.995));
        assert_approx_eq!(s.velocity, vec2(0.0, 0.01));
    }

    #[test]
    fn ripples_travel_inward_and_die() {
        let mut s = spiral(10);
        s.ripple();
        let mut seen = Vec::new();
        for _ in 0..12 {
            s.update(|_| {});
            seen.push(s.ripples().first().copied());
        }
        assert_eq!(&seen[..3], [Some(8), Some(7), Some(6)]);
        assert!(s.ripples().is_empty());
    }

    #[test]
    fn ripples_notify_displaced_points() {
        let mut s = spiral(20);
        s.ripple();
        let mut notices = Vec::new();
        s.update(|n| notices.push(n));
        // Six of the nine kernel entries are nonzero
        assert_eq!(notices.len(), 6);
        assert!(notices.iter().all(|n| n.intensity > 0.0));
        // Outermost point is pulled in by the first kernel entry
        assert_approx_eq!(s.line().points[19].x(), 0.475 * 39.0 / 40.0);
    }

    #[test]
    fn target_at_center_collapses() {
        let mut s = spiral(5);
        s.target = s.center;
        s.velocity = vec2(0.1, 0.0);
        s.update(|_| {});
        assert!(s.line().points.iter().all(|&p| p == s.center));
        assert_eq!(s.target, s.center);
        assert_eq!(s.velocity, vec2(0.1, 0.0));
        assert_eq!(s.line().trail().cursor(), 0);

        // Stays put until the target is moved from outside
        s.update(|_| {});
        assert_eq!(s.target, s.center);
        assert_eq!(s.line().trail().cursor(), 0);
    }

    #[test]
    fn spirals_spread_colors() {
        let mut rng = Xorshift64::from_seed(7);
        let ss = Spirals::new(&config(10), aspect(), 60, &mut rng);
        let colors: Vec<_> = ss.spirals().iter().map(|s| s.color).collect();
        assert_eq!(colors, [0, 20, 40]);
        for s in ss.spirals() {
            let v = s.velocity;
            assert!((1.0 / 192.0..=1.0 / 96.0).contains(&fp::abs(v.x())));
            assert!((0.0..1.0).contains(&s.target.x()));
        }
    }
}

//! Line art on a three-by-three grid.
//!
//! Each figure has two anchor points and a target, all on cells of a grid
//! spanning the screen. Every frame one more segment is drawn between the
//! anchors as they slide towards their next positions, leaving a fan of
//! lines behind:
//! ```text
//!  move both:  p1 --> p3, p2 --> p1     pivot:  p1 --> p3, p2 fixed
//! ```
//! When a move completes the anchors take their new places and the mode
//! flips. A new target is only picked once advancing is enabled.

use alloc::vec::Vec;

use log::{debug, trace};

use crate::config::LineartsConfig;
use crate::lines::Multiline;
use crate::math::{Point2, Xorshift64, pt2};
use crate::palette::Palette;
use crate::render::{Stats, Target};
use crate::view::Aspect;

/// Cells of the grid, numbered row by row.
type Grid = [[Point2; 3]; 3];

/// One figure drawing segments into a [`Multiline`].
#[derive(Clone, Debug)]
pub struct Lineart {
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
    pub color: i32,
    pub move_both: bool,
    step: usize,
    palette_size: i32,
    line: Multiline,
}

/// Several line art figures taking turns.
#[derive(Clone, Debug)]
pub struct Linearts {
    figures: Vec<Lineart>,
    grid: Grid,
    rng: Xorshift64,
    current: usize,
    advance: bool,
}

impl Lineart {
    /// Creates a figure drawing `cfg.lines` segments per move.
    ///
    /// # Panics
    /// If `cfg.lines` or `palette_size` is zero, or the trail parameters
    /// are zero.
    pub fn new(cfg: &LineartsConfig, aspect: Aspect, palette_size: usize) -> Self {
        assert!(cfg.lines > 0, "lineart needs at least one line");
        assert!(palette_size > 0, "empty palette");
        Self {
            p1: Point2::ORIGIN,
            p2: Point2::ORIGIN,
            p3: Point2::ORIGIN,
            color: 0,
            move_both: true,
            step: 0,
            palette_size: palette_size as i32,
            line: Multiline::new(
                cfg.lines,
                cfg.thickness,
                cfg.trails,
                cfg.trail_frames,
                aspect,
            ),
        }
    }

    /// Returns the number of segments drawn per move.
    pub fn lines(&self) -> usize {
        self.line.segments()
    }
    pub fn line(&self) -> &Multiline {
        &self.line
    }

    /// Returns whether the current move is complete.
    pub fn is_done(&self) -> bool {
        self.step >= self.lines()
    }

    /// Starts a new move towards `p`.
    pub fn new_target(&mut self, p: Point2) {
        self.step = 0;
        self.p3 = p;
    }

    /// Draws the next segment of the current move and meshes the figure.
    ///
    /// Returns whether the move is complete. A complete move does nothing
    /// until [`new_target`][Self::new_target] is called.
    pub fn update(&mut self) -> bool {
        let lines = self.lines();
        if self.is_done() {
            return true;
        }
        let t = self.step as f32 / lines as f32;
        let a = self.p1.lerp(&self.p3, t);
        let b = if self.move_both {
            self.p2.lerp(&self.p1, t)
        } else {
            self.p2
        };

        let i = 2 * self.step;
        let Multiline { points, colors, alphas, .. } = &mut self.line;
        points[i] = a;
        points[i + 1] = b;
        colors[i] = self.color;
        self.color = (self.color + 5) % self.palette_size;
        colors[i + 1] = self.color + self.palette_size / 6;
        alphas[i] = 1.0;
        alphas[i + 1] = 1.0;
        self.line.update();

        self.step += 1;
        if self.step == lines {
            if self.move_both {
                self.p2 = self.p1;
                self.p1 = self.p3;
            } else {
                self.p1 = self.p2;
                self.p2 = self.p3;
            }
            self.move_both = !self.move_both;
        }
        self.is_done()
    }

    pub fn draw(&self, target: &mut impl Target, palette: &Palette) -> Stats {
        self.line.draw(target, palette)
    }
}

impl Linearts {
    /// Creates `cfg.count` figures with random non-collinear anchors and
    /// targets on a grid spanning the screen.
    pub fn new(
        cfg: &LineartsConfig,
        aspect: Aspect,
        palette_size: usize,
        mut rng: Xorshift64,
    ) -> Self {
        let grid = grid(aspect);
        let figures = (0..cfg.count)
            .map(|i| {
                let c1 = random_cell(&mut rng);
                let c2 = loop {
                    let c = random_cell(&mut rng);
                    if c != c1 {
                        break c;
                    }
                };
                let c3 = loop {
                    let c = random_cell(&mut rng);
                    if !is_boring_cells(c1, c2, c) {
                        break c;
                    }
                };
                let mut fig = Lineart::new(cfg, aspect, palette_size);
                fig.p1 = cell(&grid, c1);
                fig.p2 = cell(&grid, c2);
                fig.new_target(cell(&grid, c3));
                fig.color = (i * palette_size / cfg.count) as i32;
                fig.move_both = i % 2 == 0;
                fig
            })
            .collect();
        debug!("linearts: {} x {} lines", cfg.count, cfg.lines);
        Self {
            figures,
            grid,
            rng,
            current: 0,
            advance: false,
        }
    }

    pub fn figures(&self) -> &[Lineart] {
        &self.figures
    }

    /// Returns the grid cell positions, row by row.
    pub fn grid(&self) -> &[[Point2; 3]; 3] {
        &self.grid
    }

    /// Lets figures pick new targets after completing a move. Stays on
    /// once set.
    pub fn advance(&mut self) {
        self.advance = true;
    }
    pub fn is_advancing(&self) -> bool {
        self.advance
    }

    /// Draws the next segment of the current figure. When its move
    /// completes, the next figure takes over, and the finished one gets a
    /// new target if advancing is enabled.
    pub fn update(&mut self) {
        let i = self.current;
        if !self.figures[i].update() {
            return;
        }
        self.current = (i + 1) % self.figures.len();
        if self.advance {
            let fig = &self.figures[i];
            let c = pick_target(&self.grid, fig.p1, fig.p2, &mut self.rng);
            trace!("lineart {i}: new target cell {c}");
            self.figures[i].new_target(cell(&self.grid, c));
        }
    }

    pub fn draw(&self, target: &mut impl Target, palette: &Palette) -> Stats {
        let mut stats = Stats::new();
        for fig in &self.figures {
            stats += fig.draw(target, palette);
        }
        stats
    }
}

/// Returns a grid whose corners are the corners of the visible region.
fn grid(aspect: Aspect) -> Grid {
    let b = aspect.bounds();
    let at = |i: usize, s: f32| (i as f32 - 1.0) * s;
    core::array::from_fn(|r| {
        core::array::from_fn(|c| pt2(at(r, b.x()), at(c, b.y())))
    })
}

fn cell(grid: &Grid, c: usize) -> Point2 {
    grid[c / 3][c % 3]
}

/// Returns a random cell other than the center.
fn random_cell(rng: &mut Xorshift64) -> usize {
    let c = rng.below(8);
    if c >= 4 { c + 1 } else { c }
}

/// Returns whether three cells coincide or lie on one row or column.
fn is_boring_cells(a: usize, b: usize, c: usize) -> bool {
    a == b
        || a == c
        || b == c
        || (a / 3 == b / 3 && b / 3 == c / 3)
        || (a % 3 == b % 3 && b % 3 == c % 3)
}

/// Returns whether three points coincide or lie on one axis-parallel line.
fn is_boring_points(a: Point2, b: Point2, c: Point2) -> bool {
    a == b
        || a == c
        || b == c
        || (a.x() == b.x() && b.x() == c.x())
        || (a.y() == b.y() && b.y() == c.y())
}

/// Picks a cell that makes an interesting triangle with `p1` and `p2`.
///
/// Tries random cells first, then the first suitable cell in order, then
/// gives up and returns cell 0.
fn pick_target(
    grid: &Grid,
    p1: Point2,
    p2: Point2,
    rng: &mut Xorshift64,
) -> usize {
    let ok = |c: usize| !is_boring_points(p1, p2, cell(grid, c));
    (0..8)
        .map(|_| random_cell(rng))
        .find(|&c| ok(c))
        .or_else(|| (0..9).find(|&c| ok(c)))
        .unwrap_or(0)
}

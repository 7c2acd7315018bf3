//! A grid of pulsing squares.
//!
//! The screen is tiled with square cells of a whole number of pixels. Cells
//! light up and grow when something [notices][Squares::notice] them, then
//! slowly fade and shrink back.

use alloc::vec::Vec;

use log::debug;

use crate::art::spiral::Notice;
use crate::config::SquaresConfig;
use crate::geom::{LineVertex, Topology, Tri, color_coord, vertex};
use crate::math::{Point2, float::f32 as fp, pt2};
use crate::palette::Palette;
use crate::render::{DrawParams, Stats, Target};
use crate::view::{Aspect, Dims, ViewTransform};

/// The largest number of cells in a grid.
pub const MAX_CELLS: usize = 8191;

/// Cells dimmer than this are not meshed.
const MIN_ALPHA: f32 = 1.0 / 512.0;

/// The state of one square.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Cell {
    /// Brightness; may exceed 1 but is drawn saturated.
    pub alpha: f32,
    /// Side length relative to the cell size, at most 1.
    pub scale: f32,
    /// Palette index.
    pub color: i32,
}

#[derive(Clone, Debug)]
pub struct Squares {
    dims: Dims,
    aspect: Aspect,
    cols: usize,
    rows: usize,
    size: u32,
    offset: (u32, u32),
    cells: Vec<Cell>,
    verts: Vec<LineVertex>,
    indices: Vec<Tri<u32>>,
    drawn: usize,
}

impl Squares {
    /// Creates a dark grid covering a screen of size `dims`.
    ///
    /// The longer screen axis gets `cfg.columns` cells, or fewer if the
    /// grid would otherwise have more than [`MAX_CELLS`] cells or cells
    /// smaller than a pixel. The grid is centered on screen.
    ///
    /// # Panics
    /// If either dimension or `cfg.columns` is zero.
    pub fn new(dims: Dims, cfg: &SquaresConfig) -> Self {
        assert!(cfg.columns > 0, "square grid needs at least one column");
        let aspect = Aspect::from_dims(dims);
        let (w, h) = (dims.0 as usize, dims.1 as usize);

        let (mut cols, mut rows, mut size);
        if w < h {
            rows = cfg.columns;
            size = (h / rows).max(1);
            cols = w / size;
        } else {
            cols = cfg.columns;
            size = (w / cols).max(1);
            rows = h / size;
        }
        while cols * rows > MAX_CELLS && cols > 1 {
            cols -= 1;
            size = (w / cols).max(1);
            rows = h / size;
        }
        // One pixel per cell at most
        cols = cols.min(w);
        rows = rows.min(h);
        let offset = ((w - cols * size) / 2, (h - rows * size) / 2);
        let n = cols * rows;
        debug!("squares: {cols}x{rows} cells of {size} px, offset {offset:?}");

        Self {
            dims,
            aspect,
            cols,
            rows,
            size: size as u32,
            offset: (offset.0 as u32, offset.1 as u32),
            cells: alloc::vec![Cell::default(); n],
            verts: alloc::vec![LineVertex::default(); 4 * n],
            indices: Topology::Quads.indices(n),
            drawn: 0,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    /// Returns the side length of a cell in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }
    /// Returns the pixel offset of the top left corner of the grid.
    pub fn offset(&self) -> (u32, u32) {
        self.offset
    }
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at `row` and `col`.
    ///
    /// # Panics
    /// If `row` or `col` is out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        assert!(col < self.cols, "column {col} out of bounds");
        &self.cells[row * self.cols + col]
    }
    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        assert!(col < self.cols, "column {col} out of bounds");
        &mut self.cells[row * self.cols + col]
    }

    /// Returns the row and column of the cell under world position `pos`,
    /// or `None` if `pos` is outside the grid.
    pub fn square_at(&self, pos: Point2) -> Option<(usize, usize)> {
        let (w, h) = (self.dims.0 as f32, self.dims.1 as f32);
        let ndc = self.aspect.transform().apply(pos);
        let px = (ndc.x() + 1.0) / 2.0 * w - self.offset.0 as f32;
        let py = (1.0 - ndc.y()) / 2.0 * h - self.offset.1 as f32;
        if !(px >= 0.0 && py >= 0.0) {
            return None;
        }
        let size = self.size as f32;
        let (col, row) = (fp::floor(px / size), fp::floor(py / size));
        let (col, row) = (col as usize, row as usize);
        (col < self.cols && row < self.rows).then_some((row, col))
    }

    /// Lights up the cell under `n.pos` in the color of `n`, brightening
    /// and growing it in proportion to `n.intensity`.
    pub fn notice(&mut self, n: &Notice) {
        if let Some((row, col)) = self.square_at(n.pos) {
            let c = self.cell_mut(row, col);
            c.color = n.color;
            c.alpha += 0.1 * n.intensity;
            c.scale = (c.scale + 0.1 * n.intensity).min(1.0);
        }
    }

    /// Fades every cell, and shrinks those larger than half size.
    pub fn decay(&mut self) {
        for c in &mut self.cells {
            c.alpha *= 0.995;
            if c.scale > 0.5 {
                c.scale *= 0.999;
            }
        }
    }

    /// Meshes the visible cells, centered in their grid squares.
    pub fn update(&mut self) {
        let (w, h) = (self.dims.0 as f32, self.dims.1 as f32);
        let to_ndc = |x: f32, y: f32| pt2(x / w * 2.0 - 1.0, 1.0 - y / h * 2.0);
        let size = self.size as f32;
        let (ox, oy) = (self.offset.0 as f32, self.offset.1 as f32);

        let mut vx = 0;
        for (i, c) in self.cells.iter().enumerate() {
            if c.alpha < MIN_ALPHA {
                continue;
            }
            let (row, col) = (i / self.cols, i % self.cols);
            let cx = ox + (col as f32 + 0.5) * size;
            let cy = oy + (row as f32 + 0.5) * size;
            let r = size * c.scale / 2.0;
            let cc = color_coord(c.color, c.alpha.min(1.0));
            let corners = [(-r, -r), (r, -r), (-r, r), (r, r)];
            for (v, (dx, dy)) in self.verts[vx..vx + 4].iter_mut().zip(corners) {
                *v = vertex(to_ndc(cx + dx, cy + dy), cc);
            }
            vx += 4;
        }
        self.drawn = vx;
    }

    /// Returns the vertices meshed by the last update.
    pub fn vertices(&self) -> &[LineVertex] {
        &self.verts[..self.drawn]
    }

    /// Draws the cells meshed by the last update.
    pub fn draw(&self, target: &mut impl Target, palette: &Palette) -> Stats {
        let params = DrawParams {
            view: ViewTransform::IDENTITY,
            alpha: 1.0,
            palette,
        };
        target.draw(self.vertices(), &self.indices[..self.drawn / 2], &params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use crate::math::{Color3f, vec2};
    use crate::render::{Framebuf, Throughput};

    fn squares(dims: Dims, columns: usize) -> Squares {
        Squares::new(dims, &SquaresConfig { columns })
    }

    fn notice(pos: Point2, intensity: f32) -> Notice {
        Notice { pos, velocity: vec2(0.0, 0.0), intensity, color: 7 }
    }

    #[test]
    fn landscape_sizing() {
        let sq = squares((1200, 900), 60);
        assert_eq!((sq.cols(), sq.rows(), sq.size()), (60, 45, 20));
        assert_eq!(sq.offset(), (0, 0));
        assert_eq!(sq.cells().len(), 2700);

        let sq = squares((1210, 900), 60);
        assert_eq!(sq.offset(), (5, 0));
    }

    #[test]
    fn tiny_window_sizing() {
        let sq = Squares::new((40, 30), &SquaresConfig::default());
        assert_eq!((sq.cols(), sq.rows(), sq.size()), (40, 30, 1));
        assert_eq!(sq.offset(), (0, 0));
        assert_eq!(sq.cells().len(), 1200);

        let sq = squares((5, 8), 60);
        assert_eq!((sq.cols(), sq.rows(), sq.size()), (5, 8, 1));
    }

    #[test]
    fn portrait_sizing() {
        let sq = squares((300, 500), 10);
        assert_eq!((sq.cols(), sq.rows(), sq.size()), (6, 10, 50));
    }

    #[test]
    fn shrinks_to_fit() {
        let sq = squares((1000, 1000), 200);
        assert_eq!((sq.cols(), sq.rows(), sq.size()), (90, 90, 11));
        assert_eq!(sq.offset(), (5, 5));
        assert!(sq.cells().len() <= MAX_CELLS);
    }

    #[test]
    fn square_at_maps_world_to_cells() {
        let sq = squares((400, 400), 4);
        assert_eq!(sq.square_at(pt2(0.0, 0.0)), Some((2, 2)));
        assert_eq!(sq.square_at(pt2(-0.99, 0.99)), Some((0, 0)));
        assert_eq!(sq.square_at(pt2(0.99, -0.99)), Some((3, 3)));
        assert_eq!(sq.square_at(pt2(1.5, 0.0)), None);
        assert_eq!(sq.square_at(pt2(0.0, -1.01)), None);
        assert_eq!(sq.square_at(pt2(f32::NAN, 0.0)), None);
    }

    #[test]
    fn notice_brightens_and_grows() {
        let mut sq = squares((400, 400), 4);
        sq.notice(&notice(pt2(0.1, 0.1), 5.0));
        let c = *sq.cell(1, 2);
        assert_eq!(c.color, 7);
        assert_approx_eq!(c.alpha, 0.5);
        assert_approx_eq!(c.scale, 0.5);

        sq.notice(&notice(pt2(0.1, 0.1), 10.0));
        let c = *sq.cell(1, 2);
        assert_approx_eq!(c.alpha, 1.5);
        assert_eq!(c.scale, 1.0);
    }

    #[test]
    fn decay_fades_and_shrinks() {
        let mut sq = squares((400, 400), 4);
        *sq.cell_mut(0, 0) = Cell { alpha: 1.0, scale: 1.0, color: 0 };
        *sq.cell_mut(0, 1) = Cell { alpha: 1.0, scale: 0.4, color: 0 };
        sq.decay();
        assert_approx_eq!(sq.cell(0, 0).alpha, 0.995);
        assert_approx_eq!(sq.cell(0, 0).scale, 0.999);
        assert_eq!(sq.cell(0, 1).scale, 0.4);
        assert_eq!(sq.cell(3, 3).alpha, 0.0);
    }

    #[test]
    fn meshes_visible_cells_only() {
        let mut sq = squares((400, 400), 4);
        sq.update();
        assert!(sq.vertices().is_empty());

        *sq.cell_mut(2, 2) = Cell { alpha: 2.0, scale: 0.5, color: 3 };
        sq.update();
        let vs = sq.vertices();
        assert_eq!(vs.len(), 4);
        assert_approx_eq!(vs[0].pos, pt2(0.125, -0.125));
        assert_approx_eq!(vs[3].pos, pt2(0.375, -0.375));
        assert_eq!(vs[0].attrib, color_coord(3, 1.0));
    }

    #[test]
    fn draws_lit_cells() {
        let mut sq = squares((40, 40), 4);
        *sq.cell_mut(0, 0) = Cell { alpha: 1.0, scale: 1.0, color: 0 };
        sq.update();
        let mut fb = Framebuf::new((40, 40));
        let stats = sq.draw(&mut fb, &Palette::new(1));
        assert_eq!(stats.prims, Throughput { i: 2, o: 2 });
        assert!(stats.frags.o >= 100);
        assert_ne!(fb.pixel(5, 4), Color3f::BLACK);
        assert_eq!(fb.pixel(15, 15), Color3f::BLACK);
    }
}

//! Affine transforms of the plane.

use core::fmt::{self, Debug, Formatter};

use super::vec::{Point2, pt2};

/// A 2D affine map stored as the top two rows of a 3×3 matrix:
/// ```text
/// / a  b  c \
/// \ d  e  f /
/// ```
/// A point `(x, y)` maps to `(a·x + b·y + c, d·x + e·y + f)`.
#[derive(Copy, Clone, PartialEq)]
pub struct Affine2(pub [[f32; 3]; 2]);

impl Affine2 {
    pub const IDENTITY: Self = Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);

    /// Returns the similarity transform taking the unit segment
    /// `(0, 0)..(1, 0)` onto the segment `p0..p1`.
    ///
    /// The first column is the segment's delta and the second column its
    /// counterclockwise perpendicular, so no trigonometry is involved. A
    /// degenerate segment yields a map that collapses everything to `p0`.
    ///
    /// # Examples
    /// ```
    /// use modus_core::math::{Affine2, pt2};
    ///
    /// let m = Affine2::from_segment(pt2(1.0, 1.0), pt2(1.0, 3.0));
    /// assert_eq!(m.apply(pt2(0.0, 0.0)), pt2(1.0, 1.0));
    /// assert_eq!(m.apply(pt2(1.0, 0.0)), pt2(1.0, 3.0));
    /// assert_eq!(m.apply(pt2(0.5, 0.5)), pt2(0.0, 2.0));
    /// ```
    #[inline]
    pub fn from_segment(p0: Point2, p1: Point2) -> Self {
        let [dx, dy] = (p1 - p0).0;
        Self([[dx, -dy, p0.x()], [dy, dx, p0.y()]])
    }

    /// Maps the point `p`.
    #[inline]
    pub fn apply(&self, p: Point2) -> Point2 {
        let [[a, b, c], [d, e, f]] = self.0;
        let [x, y] = p.0;
        pt2(a * x + b * y + c, d * x + e * y + f)
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Debug for Affine2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r0, r1] = &self.0;
        write!(f, "Affine2[{r0:?}, {r1:?}]")
    }
}

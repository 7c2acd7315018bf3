//! Two-dimensional vectors and points.
//!
//! Positions and displacements are kept apart: a [`Point2`] is a location,
//! a [`Vec2`] is the difference of two locations. Subtracting two points
//! yields a vector, and a vector can be added to a point, but two points
//! cannot be added together.

use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use super::approx::ApproxEq;
use super::float::f32 as fp;

/// A 2-vector with `f32` components.
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Vec2(pub [f32; 2]);

/// A 2-point with `f32` components.
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Point2(pub [f32; 2]);

/// Returns a vector with components `x` and `y`.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2([x, y])
}

/// Returns a point with components `x` and `y`.
#[inline]
pub const fn pt2(x: f32, y: f32) -> Point2 {
    Point2([x, y])
}

impl Vec2 {
    pub const ZERO: Self = vec2(0.0, 0.0);

    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }

    /// Returns the Euclidean length of `self`.
    #[inline]
    pub fn len(&self) -> f32 {
        fp::sqrt(self.len_sqr())
    }
    /// Returns the squared length of `self`. Cheaper than [`len`][Self::len].
    #[inline]
    pub fn len_sqr(&self) -> f32 {
        self.dot(self)
    }
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y()
    }
    /// Returns the z component of the 3D cross product of `self` and `other`.
    ///
    /// Positive if `other` points counterclockwise from `self`.
    #[inline]
    pub fn cross(&self, other: &Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }
    /// Returns `self` rotated a quarter turn counterclockwise, `(-y, x)`.
    #[inline]
    pub const fn perp(&self) -> Self {
        vec2(-self.y(), self.x())
    }
    /// Returns the direction of `self` in radians, in `(-π, π]`.
    #[inline]
    pub fn angle(&self) -> f32 {
        fp::atan2(self.y(), self.x())
    }
    /// Returns `self` with each component passed through `f`.
    #[inline]
    pub fn map(self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self(self.0.map(&mut f))
    }
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x() == 0.0 && self.y() == 0.0
    }
}

impl Point2 {
    pub const ORIGIN: Self = pt2(0.0, 0.0);

    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    /// Returns the vector from the origin to `self`.
    #[inline]
    pub const fn to_vec(self) -> Vec2 {
        Vec2(self.0)
    }
    /// Returns the point `t` of the way from `self` to `other`.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        *self + (*other - *self) * t
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }
}

//
// Operator impls
//

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        vec2(self.x() + rhs.x(), self.y() + rhs.y())
    }
}
impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        vec2(self.x() - rhs.x(), self.y() - rhs.y())
    }
}
impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        vec2(-self.x(), -self.y())
    }
}
impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, s: f32) -> Self {
        vec2(self.x() * s, self.y() * s)
    }
}
impl Div<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, s: f32) -> Self {
        vec2(self.x() / s, self.y() / s)
    }
}
impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Point2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Self) -> Vec2 {
        vec2(self.x() - rhs.x(), self.y() - rhs.y())
    }
}
impl Add<Vec2> for Point2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Vec2) -> Self {
        pt2(self.x() + rhs.x(), self.y() + rhs.y())
    }
}
impl Sub<Vec2> for Point2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Vec2) -> Self {
        pt2(self.x() - rhs.x(), self.y() - rhs.y())
    }
}
impl AddAssign<Vec2> for Point2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}
impl SubAssign<Vec2> for Point2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

//
// Foreign trait impls
//

impl Debug for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2{:?}", self.0)
    }
}
impl Debug for Point2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Point2{:?}", self.0)
    }
}

impl ApproxEq for Vec2 {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
}
impl ApproxEq for Point2 {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from(xy: [f32; 2]) -> Self {
        Self(xy)
    }
}
impl From<[f32; 2]> for Point2 {
    #[inline]
    fn from(xy: [f32; 2]) -> Self {
        Self(xy)
    }
}

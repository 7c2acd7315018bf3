//! RGB colors.

use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, AddAssign, Mul};

/// An RGB color with `u8` channels.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color3(pub [u8; 3]);

/// An RGB color with `f32` channels, nominally in `[0, 1]` but unbounded
/// above so that additive blending can accumulate past white.
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Color3f(pub [f32; 3]);

/// Returns a new RGB color with `r`, `g`, and `b` channels.
pub const fn rgb(r: u8, g: u8, b: u8) -> Color3 {
    Color3([r, g, b])
}

impl Color3 {
    pub const BLACK: Self = rgb(0, 0, 0);

    #[inline]
    pub const fn r(&self) -> u8 {
        self.0[0]
    }
    #[inline]
    pub const fn g(&self) -> u8 {
        self.0[1]
    }
    #[inline]
    pub const fn b(&self) -> u8 {
        self.0[2]
    }

    /// Returns a `u32` containing the channels of `self`
    /// in format `0x00_RR_GG_BB`.
    #[inline]
    pub const fn to_rgb_u32(self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0x00, r, g, b])
    }

    /// Returns `self` with channels mapped to `[0, 1]`.
    #[inline]
    pub fn to_f32(self) -> Color3f {
        Color3f(self.0.map(|c| c as f32 / 255.0))
    }
}

impl Color3f {
    pub const BLACK: Self = Self([0.0; 3]);

    /// Returns `self` with channels clamped to `[0, 1]` and rounded to `u8`.
    #[inline]
    pub fn to_color3(self) -> Color3 {
        Color3(self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8))
    }
}

impl Add for Color3f {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let [r, g, b] = self.0;
        let [rr, rg, rb] = rhs.0;
        Self([r + rr, g + rg, b + rb])
    }
}
impl AddAssign for Color3f {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl Mul<f32> for Color3f {
    type Output = Self;
    #[inline]
    fn mul(self, s: f32) -> Self {
        Self(self.0.map(|c| c * s))
    }
}

impl Debug for Color3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "rgb({r}, {g}, {b})")
    }
}
impl Debug for Color3f {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "rgbf{:?}", self.0)
    }
}

//! Floating-point compatibility API.
//!
//! `core` lacks most floating-point functions. This module provides the ones
//! used by the meshers and generators from `std`, the `libm` crate, or the
//! `micromath` crate, depending on which feature is enabled. Callers use the
//! re-exported [`f32`] module and do not care which backend is active.

#[cfg(feature = "std")]
pub mod stdlib {
    // Each function forwards to the inherent `f32` method of the same name.
    macro_rules! inherent {
        ($($f:ident($x:ident $(, $y:ident)?) -> $r:ty;)*) => {$(
            #[inline]
            pub fn $f($x: f32 $(, $y: f32)?) -> $r {
                $x.$f($($y)?)
            }
        )*};
    }
    inherent! {
        sqrt(x) -> f32;
        abs(x) -> f32;
        floor(x) -> f32;
        rem_euclid(x, m) -> f32;
        atan2(y, x) -> f32;
        tan(x) -> f32;
        sin_cos(x) -> (f32, f32);
    }
}

#[cfg(feature = "libm")]
pub mod libm {
    pub use ::libm::atan2f as atan2;
    pub use ::libm::fabsf as abs;
    pub use ::libm::floorf as floor;
    pub use ::libm::sqrtf as sqrt;
    pub use ::libm::tanf as tan;

    #[inline]
    pub fn rem_euclid(x: f32, m: f32) -> f32 {
        let r = ::libm::fmodf(x, m);
        if r < 0.0 { r + abs(m) } else { r }
    }
    #[inline]
    pub fn sin_cos(x: f32) -> (f32, f32) {
        ::libm::sincosf(x)
    }
}

#[cfg(feature = "mm")]
pub mod mm {
    use micromath::F32Ext as mm;

    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        let y = mm::sqrt(x);
        // Two rounds of Newton's method
        let y = 0.5 * (y + (x / y));
        0.5 * (y + (x / y))
    }
    #[inline]
    pub fn abs(x: f32) -> f32 {
        mm::abs(x)
    }
    #[inline]
    pub fn floor(x: f32) -> f32 {
        mm::floor(x)
    }
    #[inline]
    pub fn rem_euclid(x: f32, m: f32) -> f32 {
        mm::rem_euclid(x, m)
    }
    #[inline]
    pub fn atan2(y: f32, x: f32) -> f32 {
        if y == 0.0 && x == 0.0 {
            // Micromath yields a NaN but the others return zero
            return 0.0;
        }
        mm::atan2(y, x)
    }
    #[inline]
    pub fn tan(x: f32) -> f32 {
        mm::tan(x)
    }
    #[inline]
    pub fn sin_cos(x: f32) -> (f32, f32) {
        (mm::sin(x), mm::cos(x))
    }
}

#[cfg(feature = "std")]
pub use stdlib as f32;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f32;

#[cfg(all(feature = "mm", not(feature = "std"), not(feature = "libm")))]
pub use mm as f32;

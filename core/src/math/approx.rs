//! Tolerant float comparison for tests and mesh checks.

use core::iter::zip;

use super::float::f32 as fp;

/// Relative tolerance of the active float backend. Micromath is only
/// accurate to a few decimal digits.
pub const EPSILON: f32 =
    if cfg!(feature = "mm") && !cfg!(any(feature = "std", feature = "libm")) {
        5e-3
    } else {
        1e-6
    };

/// Equality up to a tolerance scaled by the magnitude of `self`.
///
/// Values under 1.0 in magnitude are compared with an absolute tolerance,
/// so `0.0` and `-1e-7` compare equal.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    fn approx_eq_eps(&self, other: &Rhs, eps: f32) -> bool;

    fn approx_eq(&self, other: &Rhs) -> bool {
        self.approx_eq_eps(other, EPSILON)
    }
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, other: &f32, eps: f32) -> bool {
        fp::abs(self - other) <= eps * fp::abs(*self).max(1.0)
    }
}

impl<T: ApproxEq> ApproxEq for [T] {
    fn approx_eq_eps(&self, other: &[T], eps: f32) -> bool {
        self.len() == other.len()
            && zip(self, other).all(|(a, b)| a.approx_eq_eps(b, eps))
    }
}

impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    fn approx_eq_eps(&self, other: &[T; N], eps: f32) -> bool {
        self[..].approx_eq_eps(&other[..], eps)
    }
}

/// Panics unless the two operands are [approximately equal][ApproxEq].
///
/// An explicit tolerance can be given as a trailing `eps = <expr>`.
///
/// ```
/// # use modus_core::assert_approx_eq;
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// assert_approx_eq!([1.0, 2.0], [1.0, 2.0000001]);
/// assert_approx_eq!(100.0, 101.0, eps = 0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        $crate::assert_approx_eq!($a, $b, eps = $crate::math::approx::EPSILON)
    };
    ($a:expr, $b:expr, eps = $eps:expr) => {{
        let (a, b) = (&$a, &$b);
        assert!(
            $crate::math::approx::ApproxEq::approx_eq_eps(a, b, $eps),
            "expected {a:?} ≅ {b:?}"
        );
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_zeros_and_tiny_values() {
        assert_approx_eq!(0.0, -0.0);
        assert_approx_eq!(-1e-7, 0.0);
        assert!(!0.0f32.approx_eq(&1e-4));
    }

    #[test]
    fn tolerance_scales_with_magnitude() {
        assert_approx_eq!(4.0e9, 4.0000004e9);
        assert!(!1.0e3f32.approx_eq_eps(&1.1e3, 0.05));
        assert!(1.0e3f32.approx_eq_eps(&1.04e3, 0.05));
    }

    #[test]
    fn slices_compare_elementwise() {
        assert!([0.1f32 + 0.2, 1.0].approx_eq(&[0.3, 1.0]));
        assert!(![1.0f32, 2.0][..].approx_eq(&[1.0][..]));
    }

    #[test]
    #[should_panic]
    fn nan_never_matches() {
        assert_approx_eq!(f32::NAN, f32::NAN);
    }
}

//! Two-dimensional math.
//!
//! Includes [points and vectors][self::vec], [affine maps][mat],
//! [colors][color], [pseudo-random numbers][rand], a floating-point
//! [compatibility layer][float] for `no_std`, and approximate equality
//! comparisons for tests.

pub use {
    approx::ApproxEq,
    color::{Color3, Color3f, rgb},
    mat::Affine2,
    rand::Xorshift64,
    vec::{Point2, Vec2, pt2, vec2},
};

pub mod approx;
pub mod color;
pub mod float;
pub mod mat;
pub mod rand;
pub mod vec;

use core::f32::consts::{PI, TAU};

use float::f32 as fp;

/// Returns the counterclockwise angle from direction `from` to direction
/// `to`, in radians, normalized into `[0, 2π)`.
///
/// # Examples
/// ```
/// use modus_core::math::{turn_angle, vec2};
/// use core::f32::consts::FRAC_PI_2;
///
/// let a = turn_angle(vec2(1.0, 0.0), vec2(0.0, 1.0));
/// assert!((a - FRAC_PI_2).abs() < 1e-6);
/// ```
pub fn turn_angle(from: Vec2, to: Vec2) -> f32 {
    let dt = fp::rem_euclid(to.angle() - from.angle(), TAU);
    // rem_euclid may round up to exactly TAU
    if dt >= TAU { 0.0 } else { dt }
}

/// Returns the closeness of the turn `dt` to a right angle, in `[0, π/2]`.
///
/// `dt` is a counterclockwise turn in `[0, 2π)`; clockwise turns (`dt > π`)
/// are first reduced by π. The result is zero for straight or reversing
/// strips and π/2 for a quarter turn either way.
pub fn sharpness(dt: f32) -> f32 {
    use core::f32::consts::FRAC_PI_2;
    let dt = if dt > PI { dt - PI } else { dt };
    FRAC_PI_2 - fp::abs(dt - FRAC_PI_2)
}

//! Core functionality of the `modus` project.
//!
//! Turns animated point sequences into thick, colored triangle meshes with
//! fading motion trails. Includes a small 2D math library, a hue-wheel
//! [palette], line strip meshers with mitred joints, a ring buffer of
//! historical meshes, viewport fitting, point generators (iterated function
//! system fractals, rippling spirals, grid line art, pulsing squares), and
//! an additive software render target.
//!
//! # Crate features
//!
//! * `std`:
//!   Uses the floating-point functions of `std` and enables the `std`
//!   support of the logging and error crates. Enabled by default.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! Without `std` the crate only depends on `alloc`. One of the three
//! floating-point backends must be enabled.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(not(feature = "fp"))]
compile_error!("enable one of the `std`, `libm`, or `mm` features");

pub mod art;
pub mod config;
pub mod error;
pub mod geom;
pub mod lines;
pub mod math;
pub mod palette;
pub mod render;
pub mod trail;
pub mod view;

pub mod prelude {
    pub use crate::art::{
        fractal::{Fractals, Pattern},
        lineart::Linearts,
        spiral::{Notice, Spiral, Spirals},
        squares::Squares,
    };
    pub use crate::config::Config;
    pub use crate::error::ConfigError;
    pub use crate::geom::{ColorCoord, Tri, Vertex, strip::Topology, vertex};
    pub use crate::lines::{Fastline, Multiline, Polyline};
    pub use crate::math::{
        Affine2, Color3, Point2, Vec2, color::rgb, pt2, vec2,
    };
    pub use crate::palette::Palette;
    pub use crate::render::{DrawParams, Framebuf, Stats, Target};
    pub use crate::trail::Trail;
    pub use crate::view::{Aspect, Dims, ViewTransform};
}

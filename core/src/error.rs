//! Configuration errors.

use thiserror::Error;

/// A scene or mesh parameter outside its valid range.
///
/// Constructors assert these conditions; [`Config::validate`] and
/// [`Pattern::try_new`] report them as values instead, so that binaries
/// can reject a bad preset without panicking.
///
/// [`Config::validate`]: crate::config::Config::validate
/// [`Pattern::try_new`]: crate::art::fractal::Pattern::try_new
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("window dimensions must be nonzero, got {0}x{1}")]
    EmptyWindow(u32, u32),
    #[error("{0}: palette needs at least one shade per hue")]
    ZeroShades(&'static str),
    #[error("{0}: trails and trail frames must be positive")]
    ZeroTrails(&'static str),
    #[error("{what}: need at least {min}, got {got}")]
    TooFew {
        what: &'static str,
        min: usize,
        got: usize,
    },
    #[error("{0}: thickness must be finite and nonnegative, got {1}")]
    BadThickness(&'static str, f32),
    #[error("pattern has {points} points but {colors} colors")]
    PatternLengths { points: usize, colors: usize },
    #[error("pattern must start at (0, 0) and end at (1, 0)")]
    PatternEndpoints,
    #[error("pattern end colors differ: {first} != {last}")]
    PatternColors { first: i32, last: i32 },
    #[error("{depths} fractal depths of a {len}-point pattern overflow")]
    FractalTooDeep { depths: usize, len: usize },
}

//! Scene parameters.
//!
//! Everything is configured in memory at construction time. The defaults
//! reproduce the classic look of the program at 1200x900.

use crate::art::fractal::{Pattern, depth_counts};
use crate::error::ConfigError;
use crate::view::Dims;

/// Parameters of all scenes.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Window width and height in pixels.
    pub dims: Dims,
    /// Overall detail level; scales point and line counts.
    pub complexity: usize,
    pub spirals: SpiralsConfig,
    pub fractals: FractalsConfig,
    pub linearts: LineartsConfig,
    pub squares: SquaresConfig,
}

/// Parameters of the spiral scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SpiralsConfig {
    /// Number of spirals.
    pub count: usize,
    /// Points per spiral.
    pub points: usize,
    /// Angular speed multiplier.
    pub spin: f32,
    pub thickness: f32,
    /// Number of trail meshes drawn.
    pub trails: usize,
    /// Frames between drawn trail meshes.
    pub trail_frames: usize,
    /// Palette shades per hue.
    pub shades: usize,
}

/// Parameters of the fractal scene.
#[derive(Clone, Debug, PartialEq)]
pub struct FractalsConfig {
    /// Number of depth levels, including the seed line.
    pub depths: usize,
    /// Thickness of the seed line; each depth is 0.9 times thinner.
    pub thickness: f32,
    pub shades: usize,
    pub pattern: Pattern,
}

/// Parameters of the line art scene.
#[derive(Clone, Debug, PartialEq)]
pub struct LineartsConfig {
    /// Number of independent line art figures.
    pub count: usize,
    /// Segments per figure.
    pub lines: usize,
    pub thickness: f32,
    pub trails: usize,
    pub trail_frames: usize,
    pub shades: usize,
}

/// Parameters of the square grid.
#[derive(Clone, Debug, PartialEq)]
pub struct SquaresConfig {
    /// Requested number of squares across the longer screen axis.
    pub columns: usize,
}

impl Config {
    /// Returns the default config with point and line counts scaled to
    /// `complexity`.
    ///
    /// Spirals get `complexity` points each and line art figures get
    /// `complexity / 11` lines each, at least two of both.
    pub fn with_complexity(complexity: usize) -> Self {
        let mut cfg = Self::default();
        cfg.complexity = complexity;
        cfg.spirals.points = complexity.max(2);
        cfg.linearts.lines = (complexity / 11).max(2);
        cfg
    }

    /// Checks every parameter that scene constructors assert on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = self.dims;
        if w == 0 || h == 0 {
            return Err(ConfigError::EmptyWindow(w, h));
        }
        self.spirals.validate()?;
        self.fractals.validate()?;
        self.linearts.validate()?;
        self.squares.validate()
    }
}

impl SpiralsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        const WHAT: &str = "spirals";
        at_least(WHAT, 1, self.count)?;
        at_least("spiral points", 2, self.points)?;
        thickness(WHAT, self.thickness)?;
        trails(WHAT, self.trails, self.trail_frames)?;
        shades(WHAT, self.shades)
    }
}

impl FractalsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        const WHAT: &str = "fractals";
        at_least("fractal depths", 1, self.depths)?;
        thickness(WHAT, self.thickness)?;
        shades(WHAT, self.shades)?;
        let len = self.pattern.len();
        match depth_counts(self.depths, len) {
            Some(_) => Ok(()),
            None => Err(ConfigError::FractalTooDeep { depths: self.depths, len }),
        }
    }
}

impl LineartsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        const WHAT: &str = "linearts";
        at_least(WHAT, 1, self.count)?;
        at_least("lineart lines", 2, self.lines)?;
        thickness(WHAT, self.thickness)?;
        trails(WHAT, self.trails, self.trail_frames)?;
        shades(WHAT, self.shades)
    }
}

impl SquaresConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        at_least("square columns", 1, self.columns)
    }
}

fn at_least(what: &'static str, min: usize, got: usize) -> Result<(), ConfigError> {
    if got < min {
        Err(ConfigError::TooFew { what, min, got })
    } else {
        Ok(())
    }
}

fn thickness(what: &'static str, t: f32) -> Result<(), ConfigError> {
    if t.is_finite() && t >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::BadThickness(what, t))
    }
}

fn trails(what: &'static str, n: usize, frames: usize) -> Result<(), ConfigError> {
    if n == 0 || frames == 0 {
        Err(ConfigError::ZeroTrails(what))
    } else {
        Ok(())
    }
}

fn shades(what: &'static str, n: usize) -> Result<(), ConfigError> {
    if n == 0 { Err(ConfigError::ZeroShades(what)) } else { Ok(()) }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dims: (1200, 900),
            complexity: 400,
            spirals: SpiralsConfig::default(),
            fractals: FractalsConfig::default(),
            linearts: LineartsConfig::default(),
            squares: SquaresConfig::default(),
        }
    }
}

impl Default for SpiralsConfig {
    fn default() -> Self {
        Self {
            count: 3,
            points: 400,
            spin: 1.0,
            thickness: 0.005,
            trails: 6,
            trail_frames: 4,
            shades: 200,
        }
    }
}

impl Default for FractalsConfig {
    fn default() -> Self {
        Self {
            depths: 12,
            thickness: 0.005,
            shades: 4,
            pattern: Pattern::default(),
        }
    }
}

impl Default for LineartsConfig {
    fn default() -> Self {
        Self {
            count: 3,
            lines: 36,
            thickness: 0.005,
            trails: 1,
            trail_frames: 1,
            shades: 200,
        }
    }
}

impl Default for SquaresConfig {
    fn default() -> Self {
        Self { columns: 60 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn complexity_scales_counts() {
        let cfg = Config::with_complexity(110);
        assert_eq!(cfg.complexity, 110);
        assert_eq!(cfg.spirals.points, 110);
        assert_eq!(cfg.linearts.lines, 10);

        let cfg = Config::with_complexity(0);
        assert_eq!(cfg.spirals.points, 2);
        assert_eq!(cfg.linearts.lines, 2);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_window() {
        let cfg = Config { dims: (0, 600), ..Config::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyWindow(0, 600)));
    }

    #[test]
    fn rejects_zero_trails() {
        let mut cfg = Config::default();
        cfg.spirals.trail_frames = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTrails("spirals")));
    }

    #[test]
    fn rejects_zero_shades() {
        let mut cfg = Config::default();
        cfg.linearts.shades = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroShades("linearts")));
    }

    #[test]
    fn rejects_bad_thickness() {
        let mut cfg = Config::default();
        cfg.fractals.thickness = -1.0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::BadThickness("fractals", -1.0))
        );
    }

    #[test]
    fn rejects_too_few_points() {
        let mut cfg = Config::default();
        cfg.spirals.points = 1;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::TooFew { what: "spiral points", min: 2, got: 1 })
        );
    }

    #[test]
    fn errors_name_the_scene() {
        let mut cfg = Config::default();
        cfg.linearts.count = 0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::TooFew { what: "linearts", min: 1, got: 0 })
        );
        cfg = Config::default();
        cfg.spirals.trail_frames = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTrails("spirals")));
    }

    #[test]
    fn rejects_overflowing_fractal() {
        let mut cfg = Config::default();
        cfg.fractals.depths = 100;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::FractalTooDeep { depths: 100, len: 4 })
        );
    }
}

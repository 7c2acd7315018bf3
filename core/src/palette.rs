//! Hue wheel palettes.
//!
//! Everything drawn by modus is colored by a *color coordinate*: an index
//! into a palette that wraps around in both directions. Generators make
//! colors cycle simply by incrementing coordinates.

use alloc::vec::Vec;

use crate::math::{Color3, Color3f, float::f32 as fp, rgb};

/// The anchor hues of the wheel: red, orange, yellow, green, blue, violet,
/// and red again to close the loop.
const RAINBOW: [Color3; 7] = [
    rgb(240, 0, 0),
    rgb(240, 100, 0),
    rgb(220, 220, 0),
    rgb(0, 200, 0),
    rgb(0, 0, 255),
    rgb(180, 0, 200),
    rgb(240, 0, 0),
];

/// An immutable table of colors interpolated around the hue wheel.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color3>,
}

impl Palette {
    /// Creates a palette with `shades` colors between each pair of adjacent
    /// anchor hues, `6 * shades` colors in total.
    ///
    /// Shades are computed with integer weights, so that shade `s` of the
    /// segment from `prev` to `next` is `(next * s + prev * (shades - s)) /
    /// shades` for each channel.
    ///
    /// # Panics
    /// If `shades` is zero.
    pub fn new(shades: usize) -> Self {
        assert!(shades > 0, "palette needs at least one shade per hue");
        let n = shades as u32;
        let colors = (0..shades * 6)
            .map(|i| {
                let prev = RAINBOW[i / shades].0;
                let next = RAINBOW[i / shades + 1].0;
                let scale = (i % shades) as u32;
                let ch = |c: usize| {
                    let mix =
                        next[c] as u32 * scale + prev[c] as u32 * (n - scale);
                    (mix / n) as u8
                };
                rgb(ch(0), ch(1), ch(2))
            })
            .collect();
        Self { colors }
    }

    /// Returns the number of colors in `self`.
    #[inline]
    pub fn size(&self) -> usize {
        self.colors.len()
    }

    /// Returns the color at index `i`, wrapping around in both directions.
    ///
    /// Never panics: every `i32` maps to some color in the palette.
    ///
    /// # Examples
    /// ```
    /// use modus_core::palette::Palette;
    ///
    /// let p = Palette::new(4);
    /// assert_eq!(p.lookup(-1), p.lookup(p.size() as i32 - 1));
    /// assert_eq!(p.lookup(0), p.lookup(p.size() as i32));
    /// ```
    #[inline]
    pub fn lookup(&self, i: i32) -> Color3 {
        let n = self.colors.len() as i64;
        self.colors[(i as i64).rem_euclid(n) as usize]
    }

    /// Returns the color at the fractional coordinate `coord`, linearly
    /// blending the two nearest entries.
    ///
    /// Non-finite coordinates resolve to the first color.
    pub fn sample(&self, coord: f32) -> Color3f {
        if !coord.is_finite() {
            return self.colors[0].to_f32();
        }
        let base = fp::floor(coord);
        let t = coord - base;
        let n = self.colors.len() as f32;
        // Keep the float small enough to convert to an i32 losslessly
        let i = fp::rem_euclid(base, n) as i32;
        let a = self.lookup(i).to_f32();
        if t == 0.0 {
            return a;
        }
        let b = self.lookup(i + 1).to_f32();
        a * (1.0 - t) + b * t
    }
}

use modus_core::prelude::*;

use modus_core::config::{FractalsConfig, LineartsConfig, SpiralsConfig};
use modus_core::math::{Color3f, Xorshift64};

const DIMS: Dims = (160, 120);

fn lit(fb: &Framebuf) -> usize {
    fb.pixels().iter().filter(|&&c| c != Color3f::BLACK).count()
}

#[test]
fn spirals_light_up_squares() {
    let aspect = Aspect::from_dims(DIMS);
    let cfg = SpiralsConfig {
        points: 100,
        thickness: 0.05,
        ..SpiralsConfig::default()
    };
    let palette = Palette::new(cfg.shades);
    let mut rng = Xorshift64::from_seed(1234);
    let mut spirals = Spirals::new(&cfg, aspect, palette.size(), &mut rng);
    let mut squares = Squares::new(DIMS, &Config::default().squares);

    for s in spirals.spirals_mut() {
        s.ripple();
    }
    let mut fb = Framebuf::new(DIMS);
    let mut stats = Stats::new();
    for _ in 0..30 {
        spirals.update(|n| squares.notice(&n));
        squares.decay();
        squares.update();

        fb.clear();
        stats += squares.draw(&mut fb, &palette);
        stats += spirals.draw(&mut fb, &palette);
    }
    assert!(squares.cells().iter().any(|c| c.alpha > 0.0));
    assert!(stats.frags.o > 0);
    assert!(lit(&fb) > 0);
    // Every spiral mesh stays finite
    for s in spirals.spirals() {
        let latest = s.line().trail().latest().expect("should have meshed");
        assert!(latest.iter().all(|v| v.pos.is_finite()));
    }
}

#[test]
fn spiral_trail_warms_up() {
    let aspect = Aspect::from_dims(DIMS);
    let cfg = SpiralsConfig {
        points: 50,
        trails: 3,
        trail_frames: 2,
        ..SpiralsConfig::default()
    };
    let palette = Palette::new(cfg.shades);
    let mut rng = Xorshift64::from_seed(99);
    let mut spirals = Spirals::new(&cfg, aspect, palette.size(), &mut rng);

    let mut calls = Vec::new();
    for _ in 0..8 {
        spirals.update(|_| {});
        let mut fb = Framebuf::new(DIMS);
        let stats = spirals.spirals()[0].draw(&mut fb, &palette);
        calls.push(stats.calls as usize);
    }
    assert_eq!(calls, [1, 1, 2, 2, 3, 3, 3, 3]);
}

#[test]
fn fractal_fills_screen() {
    let aspect = Aspect::from_dims(DIMS);
    let cfg = FractalsConfig { depths: 5, ..FractalsConfig::default() };
    let palette = Palette::new(cfg.shades);
    let mut fractals = Fractals::new(&cfg, aspect);

    let mut fb = Framebuf::new(DIMS);
    for _ in 0..10 {
        fractals.update();
        fb.clear();
        fractals.draw(&mut fb, &palette);
    }
    let deepest = fractals.level(4);
    assert_eq!(deepest.len(), 3 * 3 * 3 * 3 + 1);
    assert!(deepest.points.iter().all(|p| p.is_finite()));
    assert!(lit(&fb) > 0);
}

#[test]
fn linearts_draw_fans() {
    let aspect = Aspect::from_dims(DIMS);
    let cfg = LineartsConfig {
        lines: 8,
        thickness: 0.02,
        ..LineartsConfig::default()
    };
    let palette = Palette::new(cfg.shades);
    let mut linearts =
        Linearts::new(&cfg, aspect, palette.size(), Xorshift64::from_seed(42));
    linearts.advance();

    let mut fb = Framebuf::new(DIMS);
    for _ in 0..50 {
        linearts.update();
    }
    let stats = linearts.draw(&mut fb, &palette);
    assert_eq!(stats.calls, cfg.count as f32);
    assert!(lit(&fb) > 0);
}

#[test]
fn default_config_builds_every_scene() {
    let cfg = Config::with_complexity(40);
    cfg.validate().expect("default config should be valid");
    let aspect = Aspect::from_dims(cfg.dims);
    let mut rng = Xorshift64::from_seed(7);

    let spirals = Spirals::new(&cfg.spirals, aspect, 1200, &mut rng);
    let fractals =
        Fractals::new(&FractalsConfig { depths: 4, ..cfg.fractals }, aspect);
    let linearts = Linearts::new(&cfg.linearts, aspect, 1200, rng);
    let squares = Squares::new(cfg.dims, &cfg.squares);

    assert_eq!(spirals.spirals().len(), 3);
    assert_eq!(spirals.spirals()[0].len(), 40);
    assert_eq!(fractals.depths(), 4);
    assert_eq!(linearts.figures()[0].lines(), 3);
    assert_eq!((squares.cols(), squares.rows()), (60, 45));
}

//! All scenes together: spirals lighting up a grid of squares, with the
//! fractal and the line art layered on top.
//!
//! Keys:
//! * `1`-`4`: toggle spirals, fractals, line art, and squares
//! * `N`: let the line art pick new targets
//! * `D`: log frame statistics
//! * `Esc`: quit

use std::ops::ControlFlow::Continue;

use log::info;
use minifb::Key;

use mo::prelude::*;

use mo::math::Xorshift64;
use mo_front::minifb::Window;

const SCENE_KEYS: [(Key, &str); 4] = [
    (Key::Key1, "spirals"),
    (Key::Key2, "fractals"),
    (Key::Key3, "linearts"),
    (Key::Key4, "squares"),
];

fn main() {
    env_logger::init();

    let cfg = Config::default();
    cfg.validate().expect("default config should be valid");

    let mut win = Window::open("modus", cfg.dims)
        .expect("should create window");

    let aspect = Aspect::from_dims(cfg.dims);
    let big = Palette::new(cfg.spirals.shades);
    let med = Palette::new(cfg.fractals.shades);

    let mut rng = Xorshift64::from_time();
    let mut spirals = Spirals::new(&cfg.spirals, aspect, big.size(), &mut rng);
    let mut fractals = Fractals::new(&cfg.fractals, aspect);
    let mut linearts =
        Linearts::new(&cfg.linearts, aspect, big.size(), rng);
    let mut squares = Squares::new(cfg.dims, &cfg.squares);

    let mut on = [true, true, false, true];

    win.run(|frame| {
        for (i, (key, name)) in SCENE_KEYS.into_iter().enumerate() {
            if frame.win.key_pressed(key) {
                on[i] = !on[i];
                info!("{name}: {}", if on[i] { "on" } else { "off" });
            }
        }
        if frame.win.key_pressed(Key::N) {
            linearts.advance();
        }
        if frame.win.key_pressed(Key::D) {
            let mut stats = frame.stats.clone();
            stats.time = frame.t;
            info!("{stats}");
        }

        let [show_spirals, show_fractals, show_linearts, show_squares] = on;
        if show_spirals {
            spirals.update(|n| squares.notice(&n));
        }
        if show_fractals {
            fractals.update();
        }
        if show_linearts {
            linearts.update();
        }
        squares.decay();
        squares.update();

        let buf = &mut *frame.buf;
        let mut stats = Stats::new();
        if show_squares {
            stats += squares.draw(buf, &big);
        }
        if show_spirals {
            stats += spirals.draw(buf, &big);
        }
        if show_fractals {
            stats += fractals.draw(buf, &med);
        }
        if show_linearts {
            stats += linearts.draw(buf, &big);
        }
        *frame.stats += stats;
        Continue(())
    });
}

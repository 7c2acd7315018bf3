use std::ops::ControlFlow::Continue;

use minifb::Key;

use mo::prelude::*;

use mo::math::Xorshift64;
use mo_front::minifb::Window;

fn main() {
    env_logger::init();

    let cfg = Config::default();
    cfg.validate().expect("default config should be valid");

    let mut win = Window::open("modus//linearts", cfg.dims)
        .expect("should create window");

    let aspect = Aspect::from_dims(cfg.dims);
    let palette = Palette::new(cfg.linearts.shades);
    let mut linearts = Linearts::new(
        &cfg.linearts,
        aspect,
        palette.size(),
        Xorshift64::from_time(),
    );
    // Keep drawing new figures unless asked to hold still
    if std::env::args().nth(1).as_deref() != Some("--hold") {
        linearts.advance();
    }

    win.run(|frame| {
        if frame.win.key_pressed(Key::N) {
            linearts.advance();
        }
        linearts.update();
        *frame.stats += linearts.draw(frame.buf, &palette);
        Continue(())
    });
}

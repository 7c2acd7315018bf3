use std::ops::ControlFlow::Continue;

use mo::prelude::*;

use mo_front::minifb::Window;

fn main() {
    env_logger::init();

    let cfg = Config::default();
    cfg.validate().expect("default config should be valid");

    let mut win = Window::open("modus//fractals", cfg.dims)
        .expect("should create window");

    let palette = Palette::new(cfg.fractals.shades);
    let mut fractals =
        Fractals::new(&cfg.fractals, Aspect::from_dims(cfg.dims));

    win.run(|frame| {
        fractals.update();
        *frame.stats += fractals.draw(frame.buf, &palette);
        Continue(())
    });
}

use std::ops::ControlFlow::Continue;

use mo::prelude::*;

use mo::math::Xorshift64;
use mo_front::minifb::Window;

fn main() {
    env_logger::init();

    let cfg = Config::default();
    cfg.validate().expect("default config should be valid");

    let mut win = Window::open("modus//spirals", cfg.dims)
        .expect("should create window");

    let aspect = Aspect::from_dims(cfg.dims);
    let palette = Palette::new(cfg.spirals.shades);
    let mut rng = Xorshift64::from_time();
    let mut spirals =
        Spirals::new(&cfg.spirals, aspect, palette.size(), &mut rng);

    win.run(|frame| {
        spirals.update(|_| {});
        *frame.stats += spirals.draw(frame.buf, &palette);
        Continue(())
    });
}

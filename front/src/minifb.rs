//! Window and main loop on top of `minifb`.

use std::{ops::ControlFlow, time::Instant};

use log::{debug, info, warn};
use minifb::{Key, KeyRepeat, WindowOptions};

use modus_core::render::{Framebuf, Stats};
use modus_core::view::Dims;

use crate::Frame;

/// Frame rate cap used unless changed with [`Window::set_fps`].
pub const DEFAULT_FPS: u32 = 60;

/// A `minifb` window paired with an ARGB scanout buffer.
pub struct Window {
    imp: minifb::Window,
    dims: Dims,
    pixels: Vec<u32>,
}

impl Window {
    /// Opens a window of size `dims`, capped at [`DEFAULT_FPS`].
    pub fn open(title: &str, dims: Dims) -> minifb::Result<Self> {
        let (w, h) = (dims.0 as usize, dims.1 as usize);
        let mut imp = minifb::Window::new(title, w, h, WindowOptions::default())?;
        imp.set_target_fps(DEFAULT_FPS as usize);
        info!("window: {w}x{h} \"{title}\"");
        Ok(Self { imp, dims, pixels: vec![0; w * h] })
    }

    /// Caps the frame rate; `None` runs the loop as fast as it can go.
    pub fn set_fps(&mut self, fps: Option<u32>) {
        self.imp.set_target_fps(fps.map_or(0, |f| f as usize));
        debug!("fps cap: {fps:?}");
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Whether `key` went down since the previous frame.
    pub fn key_pressed(&self, key: Key) -> bool {
        self.imp.is_key_pressed(key, KeyRepeat::No)
    }

    /// Converts `buf` to ARGB and shows it.
    pub fn present(&mut self, buf: &Framebuf) -> minifb::Result<()> {
        buf.to_argb(&mut self.pixels);
        let (w, h) = self.dims;
        self.imp
            .update_with_buffer(&self.pixels, w as usize, h as usize)
    }

    /// Calls `frame_fn` once per frame until the window is closed, Esc is
    /// pressed, the callback breaks, or a frame fails to show. Returns the
    /// stats gathered over the whole run.
    pub fn run<F>(&mut self, mut frame_fn: F) -> Stats
    where
        F: FnMut(&mut Frame<Self>) -> ControlFlow<()>,
    {
        let mut buf = Framebuf::new(self.dims);
        let mut stats = Stats::start();
        let start = Instant::now();
        let mut prev = start;

        while self.imp.is_open() && !self.imp.is_key_down(Key::Escape) {
            let now = Instant::now();
            buf.clear();
            let flow = frame_fn(&mut Frame {
                t: now - start,
                dt: now - prev,
                buf: &mut buf,
                win: self,
                stats: &mut stats,
            });
            prev = now;
            if flow.is_break() {
                break;
            }
            if let Err(e) = self.present(&buf) {
                warn!("cannot present frame: {e}");
                break;
            }
            stats.frames += 1.0;
        }
        let stats = stats.finish();
        info!("{stats}");
        stats
    }
}

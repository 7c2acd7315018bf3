//! Frontends for running `modus` scenes in a window.

use std::time::Duration;

use modus_core::render::{Framebuf, Stats};

#[cfg(feature = "minifb")]
pub mod minifb;

/// Per-frame state. The window run method passes an instance of `Frame`
/// to the callback function on every iteration of the main loop.
pub struct Frame<'a, Win> {
    /// Elapsed time since the start of the first frame.
    pub t: Duration,
    /// Elapsed time since the start of the previous frame.
    pub dt: Duration,
    /// Framebuffer in which to draw, cleared to black.
    pub buf: &'a mut Framebuf,
    /// Reference to the window object.
    pub win: &'a mut Win,
    /// Statistics accumulated over all frames so far.
    pub stats: &'a mut Stats,
}

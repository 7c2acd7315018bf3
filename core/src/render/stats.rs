//! Rendering statistics.

use core::fmt::{self, Display, Formatter};
use core::ops::AddAssign;
use core::time::Duration;
#[cfg(feature = "std")]
use std::time::Instant;

/// Accumulated counts and timing of draw calls.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    /// Time spent, if measured.
    pub time: Duration,
    /// Number of draw calls issued.
    pub calls: f32,
    /// Number of frames rendered.
    pub frames: f32,
    /// Triangles submitted and rasterized.
    pub prims: Throughput,
    /// Pixels tested and written.
    pub frags: Throughput,

    #[cfg(feature = "std")]
    start: Option<Instant>,
}

/// Counts of items in and out of a rendering stage.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Throughput {
    pub i: usize,
    pub o: usize,
}

impl Stats {
    /// Creates a new zeroed `Stats`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `Stats` that records the time of its creation.
    ///
    /// Call [`finish`][Self::finish] to store the elapsed time. Without the
    /// `std` feature this is equivalent to [`Stats::new`].
    pub fn start() -> Self {
        Self {
            #[cfg(feature = "std")]
            start: Some(Instant::now()),
            ..Self::default()
        }
    }

    /// Stores the time elapsed since [`start`][Self::start] in `self.time`.
    pub fn finish(self) -> Self {
        Self {
            #[cfg(feature = "std")]
            time: self.start.map_or(self.time, |st| st.elapsed()),
            ..self
        }
    }

    /// Returns frames per second, or zero if no time was measured.
    pub fn fps(&self) -> f32 {
        let secs = self.time.as_secs_f32();
        if secs > 0.0 { self.frames / secs } else { 0.0 }
    }
}

impl Throughput {
    /// Returns the fraction of items output, or zero if none were input.
    pub fn ratio(&self) -> f32 {
        if self.i == 0 { 0.0 } else { self.o as f32 / self.i as f32 }
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let frames = self.frames.max(1.0);
        write!(
            f,
            "{} frames in {:.1}s ({:.1} fps), {:.1} calls/frame, \
             prims {} ({}/frame), frags {} ({}/frame)",
            self.frames,
            self.time.as_secs_f32(),
            self.fps(),
            self.calls / frames,
            self.prims,
            self.prims.o / frames as usize,
            self.frags,
            self.frags.o / frames as usize,
        )
    }
}

impl Display for Throughput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.o, self.i)
    }
}

impl AddAssign for Stats {
    /// Appends the counts and time of `other` to `self`.
    fn add_assign(&mut self, other: Self) {
        self.time += other.time;
        self.calls += other.calls;
        self.frames += other.frames;
        self.prims += other.prims;
        self.frags += other.frags;
    }
}

impl AddAssign for Throughput {
    fn add_assign(&mut self, rhs: Self) {
        self.i += rhs.i;
        self.o += rhs.o;
    }
}

//! Motion trails.
//!
//! A [`Trail`] keeps the last few meshes generated by a mesh object in a
//! ring buffer, so that they can be drawn together with older meshes more
//! transparent than newer ones. Only every `frames`th mesh is drawn, which
//! spreads a handful of drawn meshes over a longer stretch of time.

use alloc::vec::Vec;

use crate::math::float::f32 as fp;

/// A ring buffer of `trails * frames` slots with a write cursor.
///
/// The cursor only ever grows; slot `cursor % capacity` is written next.
/// A slot is never reported as visible before it has been written to.
#[derive(Clone, Debug)]
pub struct Trail<S> {
    slots: Vec<S>,
    frames: usize,
    cursor: u64,
}

impl<S> Trail<S> {
    /// Creates a trail drawing `trails` meshes, one every `frames` frames,
    /// with each slot initialized by `init`.
    ///
    /// # Panics
    /// If `trails` or `frames` is zero.
    pub fn new(trails: usize, frames: usize, init: impl FnMut() -> S) -> Self {
        assert!(trails > 0, "trail needs at least one slot");
        assert!(frames > 0, "trail frames must be positive");
        let mut slots = Vec::with_capacity(trails * frames);
        slots.resize_with(trails * frames, init);
        Self { slots, frames, cursor: 0 }
    }

    /// Returns the total number of slots in `self`.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of writes so far.
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Passes the next slot to `f` for writing, then advances the cursor.
    ///
    /// The slot still holds whatever was last written to it, if anything.
    pub fn write_with<R>(&mut self, f: impl FnOnce(&mut S) -> R) -> R {
        let n = self.slots.len() as u64;
        let res = f(&mut self.slots[(self.cursor % n) as usize]);
        self.cursor += 1;
        res
    }

    /// Returns the most recently written slot, if any.
    pub fn latest(&self) -> Option<&S> {
        let n = self.slots.len() as u64;
        let i = self.cursor.checked_sub(1)?;
        Some(&self.slots[(i % n) as usize])
    }

    /// Returns the indices and alphas of the slots to draw, oldest first.
    ///
    /// With `T` the capacity, the `k`th newest mesh is drawn with alpha
    /// `sqrt((T - k) / T)` if `k` is a multiple of `frames`. The newest
    /// is drawn with alpha 1. Slots not yet written to are skipped.
    pub fn visible_slots(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        let n = self.slots.len();
        let cursor = self.cursor;
        (self.frames - 1..n)
            .step_by(self.frames)
            .filter_map(move |i| {
                // `cursor - n + i`, or skip if negative
                let idx = (cursor + i as u64).checked_sub(n as u64)?;
                let alpha = fp::sqrt((i + 1) as f32 / n as f32);
                Some(((idx % n as u64) as usize, alpha))
            })
    }

    /// Returns the slots to draw and their alphas, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = (&S, f32)> + '_ {
        self.visible_slots().map(|(i, a)| (&self.slots[i], a))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn stamp(t: &mut Trail<u64>) {
        let c = t.cursor();
        t.write_with(|s| *s = c + 1);
    }

    #[test]
    fn writes_wrap_around() {
        let mut t = Trail::new(2, 2, || 0);
        assert_eq!(t.capacity(), 4);
        for _ in 0..6 {
            stamp(&mut t);
        }
        assert_eq!(t.cursor(), 6);
        // Slots 0 and 1 overwritten by the fifth and sixth writes
        assert_eq!(t.slots, [5, 6, 3, 4]);
        assert_eq!(t.latest(), Some(&6));
    }

    #[test]
    fn nothing_visible_before_first_write() {
        let t = Trail::new(3, 2, || 0u64);
        assert_eq!(t.visible().count(), 0);
        assert_eq!(t.latest(), None);
    }

    #[test]
    fn warm_up_yields_fewer_entries() {
        let mut t = Trail::new(4, 1, || 0);
        let mut counts = Vec::new();
        for _ in 0..8 {
            stamp(&mut t);
            counts.push(t.visible().count());
        }
        assert_eq!(counts, [1, 2, 3, 4, 4, 4, 4, 4]);
    }

    #[test]
    fn warmed_up_strided_trail_yields_one_per_stride() {
        let mut t = Trail::new(3, 2, || 0);
        let mut counts = Vec::new();
        for _ in 0..t.capacity() * 2 {
            stamp(&mut t);
            counts.push(t.visible().count());
        }
        assert_eq!(counts[..5], [1, 1, 2, 2, 3]);
        assert!(counts[5..].iter().all(|&c| c == 3));
    }

    #[test]
    fn visible_slots_were_written() {
        let mut t = Trail::new(4, 3, || 0);
        for _ in 0..7 {
            stamp(&mut t);
            assert!(t.visible().all(|(&s, _)| s != 0));
        }
    }

    #[test]
    fn alphas_increase_to_one_for_newest() {
        let mut t = Trail::new(6, 4, || 0);
        for _ in 0..100 {
            stamp(&mut t);
        }
        let vis: Vec<_> = t.visible().collect();
        assert_eq!(vis.len(), 6);
        assert!(vis.windows(2).all(|w| w[0].1 <= w[1].1));
        assert!(vis.windows(2).all(|w| w[0].0 < w[1].0));
        let (&newest, alpha) = vis[vis.len() - 1];
        assert_eq!(newest, 100);
        assert_eq!(alpha, 1.0);
    }

    #[test]
    fn two_slots_one_frame_apart() {
        let mut t = Trail::new(2, 1, || 0);
        for _ in 0..3 {
            stamp(&mut t);
        }
        let vis: Vec<_> = t.visible().collect();
        assert_eq!(vis, [(&2, fp::sqrt(0.5)), (&3, 1.0)]);
    }

    #[test]
    #[should_panic]
    fn zero_frames_panics() {
        let _ = Trail::new(3, 0, || ());
    }
}

//! Point generators.
//!
//! Each scene owns one or more [mesh objects][crate::lines], writes new
//! points into them every frame, and meshes them. Scenes are advanced with
//! `update` and drawn with `draw`, once per frame each.

pub mod fractal;
pub mod lineart;
pub mod spiral;
pub mod squares;

//! Axis-aligned bounding boxes.

use crate::math::{Point2, pt2};

/// An axis-aligned bounding box of points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bbox {
    pub min: Point2,
    pub max: Point2,
}

impl Bbox {
    /// Returns the bounds of `pts`, or `None` if `pts` is empty.
    ///
    /// Non-finite points are skipped.
    pub fn of<'a>(pts: impl IntoIterator<Item = &'a Point2>) -> Option<Self> {
        pts.into_iter()
            .filter(|p| p.is_finite())
            .fold(None, |bb, &p| {
                Some(match bb {
                    None => Self { min: p, max: p },
                    Some(bb) => bb.extend(p),
                })
            })
    }

    /// Returns `self` grown to include `p`.
    pub fn extend(self, p: Point2) -> Self {
        let Self { min, max } = self;
        Self {
            min: pt2(min.x().min(p.x()), min.y().min(p.y())),
            max: pt2(max.x().max(p.x()), max.y().max(p.y())),
        }
    }

    /// Returns `self` grown on each side by `fraction` of its extent along
    /// that axis.
    pub fn pad(self, fraction: f32) -> Self {
        let dx = self.width() * fraction;
        let dy = self.height() * fraction;
        Self {
            min: pt2(self.min.x() - dx, self.min.y() - dy),
            max: pt2(self.max.x() + dx, self.max.y() + dy),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x() - self.min.x()
    }
    pub fn height(&self) -> f32 {
        self.max.y() - self.min.y()
    }
}

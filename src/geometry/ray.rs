// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::geometry::{Line, Point2, Segment, ShapeOps, Vector2};
use crate::numeric::coord;

/// Half-line starting at `origin` and passing through `through`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ray {
    origin: Point2,
    through: Point2,
}

impl Ray {
    /// A ray whose two points coincide has no direction; it is accepted
    /// here but its predicates are meaningless. See [`Ray::try_new`].
    pub fn new(origin: Point2, through: Point2) -> Self {
        if (through - origin).is_zero() {
            log::warn!("ray built with zero direction at {origin}");
        }
        Self { origin, through }
    }

    pub fn try_new(origin: Point2, through: Point2) -> Result<Self, ShapeError> {
        if (through - origin).is_zero() {
            log::debug!("rejecting ray with zero direction at {origin}");
            return Err(ShapeError::ZeroDirection(origin));
        }
        Ok(Self { origin, through })
    }

    pub fn origin(&self) -> Point2 {
        self.origin
    }

    pub fn through(&self) -> Point2 {
        self.through
    }

    /// Direction vector `through - origin`.
    pub fn vector(&self) -> Vector2 {
        self.through - self.origin
    }

    pub fn distance_to_point(&self, p: &Point2) -> f64 {
        let ap = *p - self.origin;
        if self.vector().dot(&ap) >= 0 {
            return Line::from_points(self.origin, self.through).distance_to_point(p);
        }
        ap.length()
    }
}

impl ShapeOps for Ray {
    fn move_by(&mut self, v: &Vector2) {
        self.origin.move_by(v);
        self.through.move_by(v);
    }

    fn contains_point(&self, p: &Point2) -> bool {
        let ab = self.vector();
        let ap = *p - self.origin;
        ab.cross(&ap) == 0 && ab.dot(&ap) >= 0
    }

    fn cross_segment(&self, segment: &Segment) -> bool {
        let ray_vec = self.vector();
        let seg_vec = segment.direction();
        let seg_to_ray = self.origin - segment.a();

        let mut rss = ray_vec.cross(&seg_vec);
        if rss == 0 {
            return self.contains_point(&segment.a()) || self.contains_point(&segment.b());
        }
        let mut rsr = ray_vec.cross(&seg_to_ray);
        let mut srs = seg_vec.cross(&seg_to_ray);

        // Orient so that rss > 0; the range checks below assume it.
        if rss < 0 {
            rss = coord::neg(rss);
            rsr = coord::neg(rsr);
            srs = coord::neg(srs);
        }
        rsr >= 0 && rsr <= rss && srs >= 0
    }
}

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

use crate::geometry::{Line, Point2, ShapeOps, Vector2};
use crate::kernel::{is_between, is_point_on_segment, orient2d, straddles};

/// Closed segment between `a` and `b`. `a == b` is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    a: Point2,
    b: Point2,
}

impl Segment {
    pub const fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    pub fn a(&self) -> Point2 {
        self.a
    }

    pub fn b(&self) -> Point2 {
        self.b
    }

    pub fn direction(&self) -> Vector2 {
        self.b - self.a
    }

    /// Distance from `p` to the closest point of the segment.
    ///
    /// If `p` projects onto the segment (endpoints included) this is the
    /// perpendicular distance to the supporting line, otherwise the
    /// distance to the nearer endpoint. A zero-length segment has no
    /// supporting line and yields NaN.
    pub fn distance_to_point(&self, p: &Point2) -> f64 {
        let ab = self.b - self.a;
        let ap = *p - self.a;
        let bp = *p - self.b;

        if ap.dot(&ab) >= 0 && bp.dot(&-ab) >= 0 {
            return Line::from_points(self.a, self.b).distance_to_point(p);
        }
        ap.length().min(bp.length())
    }
}

impl ShapeOps for Segment {
    fn move_by(&mut self, v: &Vector2) {
        self.a.move_by(v);
        self.b.move_by(v);
    }

    fn contains_point(&self, p: &Point2) -> bool {
        is_point_on_segment(p, &self.a, &self.b)
    }

    fn cross_segment(&self, other: &Segment) -> bool {
        let (a, b) = (&self.a, &self.b);
        let (c, d) = (&other.a, &other.b);

        let o1 = orient2d(a, b, c);
        let o2 = orient2d(a, b, d);
        let o3 = orient2d(c, d, a);
        let o4 = orient2d(c, d, b);

        // Proper crossing: each segment separates the other's endpoints.
        if straddles(o1, o2) && straddles(o3, o4) {
            return true;
        }

        // An endpoint of one segment lies on the other; touching counts.
        (o1 == 0 && is_between(c, a, b))
            || (o2 == 0 && is_between(d, a, b))
            || (o3 == 0 && is_between(a, c, d))
            || (o4 == 0 && is_between(b, c, d))
    }
}

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
use crate::geometry::{Point2, Segment, ShapeOps, Vector2};
use crate::kernel::squared_distance;
use crate::numeric::{Coord, coord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    centre: Point2,
    radius: Coord,
}

impl Circle {
    /// Negative radii are kept as given. Containment then behaves as for
    /// `|radius|`, while `cross_segment` is always false.
    pub fn new(centre: Point2, radius: Coord) -> Self {
        if radius < 0 {
            log::warn!("circle at {centre} built with negative radius {radius}");
        }
        Self { centre, radius }
    }

    pub fn try_new(centre: Point2, radius: Coord) -> Result<Self, ShapeError> {
        if radius < 0 {
            log::debug!("rejecting circle at {centre}: negative radius {radius}");
            return Err(ShapeError::NegativeRadius(radius));
        }
        Ok(Self { centre, radius })
    }

    pub fn centre(&self) -> Point2 {
        self.centre
    }

    pub fn radius(&self) -> Coord {
        self.radius
    }

    fn squared_radius(&self) -> Coord {
        coord::mul(self.radius, self.radius)
    }
}

impl ShapeOps for Circle {
    fn move_by(&mut self, v: &Vector2) {
        self.centre.move_by(v);
    }

    /// Closed disk: the boundary is included.
    fn contains_point(&self, p: &Point2) -> bool {
        squared_distance(&self.centre, p) <= self.squared_radius()
    }

    /// True when the segment reaches the boundary circle. A segment lying
    /// strictly inside the disk does not cross it.
    fn cross_segment(&self, segment: &Segment) -> bool {
        let dist = segment.distance_to_point(&self.centre);
        let r2 = self.squared_radius();
        dist <= coord::to_f64(self.radius)
            && (squared_distance(&self.centre, &segment.a()) >= r2
                || squared_distance(&self.centre, &segment.b()) >= r2)
    }
}

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
use crate::kernel::{orient2d, touches_or_straddles};
use crate::numeric::{Coord, coord};

/// Infinite line `a*x + b*y + c = 0` through two defining points.
///
/// The coefficients are derived once and never normalized, so two
/// lines built from different point pairs on the same geometric line
/// generally store different `(a, b, c)`. For that reason `Line` does
/// not implement `PartialEq`.
#[derive(Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "LinePoints", into = "LinePoints")
)]
pub struct Line {
    a: Coord,
    b: Coord,
    c: Coord,
    point_a: Point2,
    point_b: Point2,
}

impl Line {
    /// Builds the line through `point_a` and `point_b`.
    ///
    /// Coincident points are not rejected; every coefficient is then
    /// zero and the line contains the whole plane. Use [`Line::try_new`]
    /// to reject them.
    pub fn new(point_a: Point2, point_b: Point2) -> Self {
        if point_a == point_b {
            log::warn!("line built from coincident points {point_a}");
        }
        Self::from_points(point_a, point_b)
    }

    pub fn try_new(point_a: Point2, point_b: Point2) -> Result<Self, ShapeError> {
        if point_a == point_b {
            log::debug!("rejecting line through coincident points {point_a}");
            return Err(ShapeError::CoincidentPoints(point_a));
        }
        Ok(Self::from_points(point_a, point_b))
    }

    pub(crate) fn from_points(point_a: Point2, point_b: Point2) -> Self {
        let dx = coord::sub(point_b.x, point_a.x);
        let dy = coord::sub(point_b.y, point_a.y);
        Self {
            a: dy,
            b: coord::sub(point_a.x, point_b.x),
            c: coord::mul_sub(point_a.y, dx, point_a.x, dy),
            point_a,
            point_b,
        }
    }

    pub fn a(&self) -> Coord {
        self.a
    }

    pub fn b(&self) -> Coord {
        self.b
    }

    pub fn c(&self) -> Coord {
        self.c
    }

    pub fn point_a(&self) -> Point2 {
        self.point_a
    }

    pub fn point_b(&self) -> Point2 {
        self.point_b
    }

    pub fn direction(&self) -> Vector2 {
        self.point_b - self.point_a
    }

    /// `a*p.x + b*p.y + c`; zero exactly on the line.
    pub fn evaluate(&self, p: &Point2) -> Coord {
        coord::add(coord::mul_add(self.a, p.x, self.b, p.y), self.c)
    }

    pub fn distance_to_point(&self, p: &Point2) -> f64 {
        let norm = coord::to_f64(coord::mul_add(self.a, self.a, self.b, self.b)).sqrt();
        coord::abs_f64(self.evaluate(p)) / norm
    }
}

impl ShapeOps for Line {
    fn move_by(&mut self, v: &Vector2) {
        self.c = coord::sub(self.c, coord::mul_add(self.a, v.dx, self.b, v.dy));
        self.point_a.move_by(v);
        self.point_b.move_by(v);
    }

    fn contains_point(&self, p: &Point2) -> bool {
        self.evaluate(p) == 0
    }

    /// The segment's endpoints are on opposite sides of the line or on it.
    fn cross_segment(&self, segment: &Segment) -> bool {
        touches_or_straddles(
            orient2d(&self.point_a, &self.point_b, &segment.a()),
            orient2d(&self.point_a, &self.point_b, &segment.b()),
        )
    }
}

// Re-derived from the defining points, same as a fresh construction.
impl Clone for Line {
    fn clone(&self) -> Self {
        Self::from_points(self.point_a, self.point_b)
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct LinePoints {
    point_a: Point2,
    point_b: Point2,
}

#[cfg(feature = "serde")]
impl From<LinePoints> for Line {
    fn from(p: LinePoints) -> Self {
        Line::new(p.point_a, p.point_b)
    }
}

#[cfg(feature = "serde")]
impl From<Line> for LinePoints {
    fn from(l: Line) -> Self {
        LinePoints {
            point_a: l.point_a,
            point_b: l.point_b,
        }
    }
}

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

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Circle, Line, Point2, Ray, Segment, Vector2};

/// Capabilities shared by every shape variant.
///
/// Queries never mutate; `move_by` translates in place and needs
/// exclusive access. Duplication is plain `Clone`.
pub trait ShapeOps {
    fn move_by(&mut self, v: &Vector2);
    fn contains_point(&self, p: &Point2) -> bool;
    fn cross_segment(&self, segment: &Segment) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Segment,
    Line,
    Ray,
    Circle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Point => "point",
            ShapeKind::Segment => "segment",
            ShapeKind::Line => "line",
            ShapeKind::Ray => "ray",
            ShapeKind::Circle => "circle",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(tag = "kind"))]
pub enum Shape {
    Point(Point2),
    Segment(Segment),
    Line(Line),
    Ray(Ray),
    Circle(Circle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Ray(_) => ShapeKind::Ray,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Distance from `p` for the variants that define one.
    pub fn distance_to_point(&self, p: &Point2) -> Option<f64> {
        match self {
            Shape::Segment(s) => Some(s.distance_to_point(p)),
            Shape::Line(l) => Some(l.distance_to_point(p)),
            Shape::Ray(r) => Some(r.distance_to_point(p)),
            Shape::Point(_) | Shape::Circle(_) => None,
        }
    }

    /// By-value form of [`ShapeOps::move_by`].
    pub fn translated(mut self, v: &Vector2) -> Self {
        self.move_by(v);
        self
    }
}

impl ShapeOps for Shape {
    fn move_by(&mut self, v: &Vector2) {
        match self {
            Shape::Point(s) => s.move_by(v),
            Shape::Segment(s) => s.move_by(v),
            Shape::Line(s) => s.move_by(v),
            Shape::Ray(s) => s.move_by(v),
            Shape::Circle(s) => s.move_by(v),
        }
    }

    fn contains_point(&self, p: &Point2) -> bool {
        match self {
            Shape::Point(s) => s.contains_point(p),
            Shape::Segment(s) => s.contains_point(p),
            Shape::Line(s) => s.contains_point(p),
            Shape::Ray(s) => s.contains_point(p),
            Shape::Circle(s) => s.contains_point(p),
        }
    }

    fn cross_segment(&self, segment: &Segment) -> bool {
        match self {
            Shape::Point(s) => s.cross_segment(segment),
            Shape::Segment(s) => s.cross_segment(segment),
            Shape::Line(s) => s.cross_segment(segment),
            Shape::Ray(s) => s.cross_segment(segment),
            Shape::Circle(s) => s.cross_segment(segment),
        }
    }
}

impl From<Point2> for Shape {
    fn from(p: Point2) -> Self {
        Shape::Point(p)
    }
}

impl From<Segment> for Shape {
    fn from(s: Segment) -> Self {
        Shape::Segment(s)
    }
}

impl From<Line> for Shape {
    fn from(l: Line) -> Self {
        Shape::Line(l)
    }
}

impl From<Ray> for Shape {
    fn from(r: Ray) -> Self {
        Shape::Ray(r)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

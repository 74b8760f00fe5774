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

use assert_approx_eq::assert_approx_eq;
use cgshapes::{Point2, Ray, Segment, ShapeError, ShapeOps, Vector2};

fn seg(ax: i64, ay: i64, bx: i64, by: i64) -> Segment {
    Segment::new(Point2::new(ax, ay), Point2::new(bx, by))
}

fn x_axis_ray() -> Ray {
    Ray::new(Point2::new(0, 0), Point2::new(1, 0))
}

#[test]
fn test_contains_point() {
    let r = x_axis_ray();
    assert!(r.contains_point(&Point2::new(0, 0)));
    assert!(r.contains_point(&Point2::new(5, 0)));
    assert!(!r.contains_point(&Point2::new(-1, 0))); // behind the origin
    assert!(!r.contains_point(&Point2::new(1, 1)));
}

#[test]
fn test_distance() {
    let r = x_axis_ray();
    assert_eq!(r.distance_to_point(&Point2::new(3, 4)), 4.0);
    assert_approx_eq!(r.distance_to_point(&Point2::new(-3, 4)), 5.0);
    assert_eq!(r.distance_to_point(&Point2::new(0, -2)), 2.0);
}

#[test]
fn test_cross_segment_transversal() {
    let r = x_axis_ray();
    assert!(r.cross_segment(&seg(2, -1, 2, 1)));
    assert!(r.cross_segment(&seg(2, 1, 2, -1))); // same segment, reversed
    assert!(r.cross_segment(&seg(0, -1, 0, 1))); // through the origin
    assert!(r.cross_segment(&seg(3, 0, 4, 7))); // endpoint on the ray
    assert!(!r.cross_segment(&seg(-2, -1, -2, 1))); // behind
    assert!(!r.cross_segment(&seg(2, 1, 2, 3))); // above
}

#[test]
fn test_cross_segment_parallel() {
    let r = x_axis_ray();
    assert!(r.cross_segment(&seg(3, 0, 5, 0)));
    assert!(r.cross_segment(&seg(-5, 0, 5, 0)));
    assert!(!r.cross_segment(&seg(-5, 0, -1, 0)));
    assert!(!r.cross_segment(&seg(0, 1, 5, 1)));
}

#[test]
fn test_vector_and_move() {
    let mut r = Ray::new(Point2::new(1, 1), Point2::new(2, 3));
    assert_eq!(r.vector(), Vector2::new(1, 2));
    let copy = r.clone();

    r.move_by(&Vector2::new(-1, -1));
    assert_eq!(r.origin(), Point2::new(0, 0));
    assert_eq!(r.through(), Point2::new(1, 2));
    assert_eq!(r.vector(), copy.vector());
    assert!(copy.contains_point(&Point2::new(1, 1)));
    assert!(!copy.contains_point(&Point2::new(0, 0)));
}

#[test]
fn test_zero_direction() {
    let p = Point2::new(4, 4);
    assert_eq!(Ray::try_new(p, p).unwrap_err(), ShapeError::ZeroDirection(p));
    assert!(Ray::try_new(p, Point2::new(5, 4)).is_ok());
    assert!(Ray::new(p, p).vector().is_zero());
    assert!(!Vector2::new(0, -1).is_zero());
}

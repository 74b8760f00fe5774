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

use cgshapes::{Circle, Line, Point2, Ray, Segment, Shape, ShapeKind, ShapeOps, Vector2};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn all_shapes() -> Vec<Shape> {
    vec![
        Point2::new(1, 1).into(),
        Segment::new(Point2::new(0, 0), Point2::new(4, 0)).into(),
        Line::new(Point2::new(0, 0), Point2::new(1, 1)).into(),
        Ray::new(Point2::new(0, 0), Point2::new(0, 1)).into(),
        Circle::new(Point2::new(0, 0), 5).into(),
    ]
}

#[test]
fn test_kind_dispatch() {
    let kinds: Vec<ShapeKind> = all_shapes().iter().map(Shape::kind).collect();
    assert_eq!(
        kinds,
        [
            ShapeKind::Point,
            ShapeKind::Segment,
            ShapeKind::Line,
            ShapeKind::Ray,
            ShapeKind::Circle
        ]
    );
    assert_eq!(ShapeKind::Circle.to_string(), "circle");
}

#[test]
fn test_contains_point_through_enum() {
    let p = Point2::new(1, 1);
    let expected = [true, false, true, false, true];
    for (shape, want) in all_shapes().iter().zip(expected) {
        assert_eq!(shape.contains_point(&p), want, "{}", shape.kind());
    }
}

#[test]
fn test_cross_segment_through_enum() {
    let s = Segment::new(Point2::new(1, -1), Point2::new(1, 1));
    let expected = [true, true, true, false, false];
    for (shape, want) in all_shapes().iter().zip(expected) {
        assert_eq!(shape.cross_segment(&s), want, "{}", shape.kind());
    }
}

#[test]
fn test_distance_only_for_linear_shapes() {
    let p = Point2::new(2, 5);
    let dists: Vec<Option<f64>> = all_shapes().iter().map(|s| s.distance_to_point(&p)).collect();
    assert_eq!(dists[0], None);
    assert_eq!(dists[1], Some(5.0));
    assert!(dists[2].is_some());
    assert_eq!(dists[3], Some(2.0));
    assert_eq!(dists[4], None);
}

#[test]
fn test_clone_is_independent() {
    let v = Vector2::new(100, -50);
    let probe = Point2::new(1, 1);
    for mut shape in all_shapes() {
        let copy = shape.clone();
        let before = shape.contains_point(&probe);
        shape.move_by(&v);
        assert_eq!(copy.contains_point(&probe), before, "{}", copy.kind());
        assert_eq!(shape.contains_point(&(probe + v)), before, "{}", shape.kind());
    }
}

#[test]
fn test_translated_returns_moved_value() {
    let shape: Shape = Segment::new(Point2::new(0, 0), Point2::new(4, 0)).into();
    let moved = shape.clone().translated(&Vector2::new(0, 3));
    assert!(moved.contains_point(&Point2::new(2, 3)));
    assert!(shape.contains_point(&Point2::new(2, 0)));
    assert_eq!(moved.kind(), ShapeKind::Segment);
}

#[test]
fn test_degenerate_constructions_are_accepted() {
    init_logger();
    let p = Point2::new(3, 3);
    let shapes: Vec<Shape> = vec![
        Line::new(p, p).into(),
        Ray::new(p, p).into(),
        Circle::new(p, -1).into(),
    ];
    assert!(shapes[0].contains_point(&Point2::new(0, 0)));
    assert!(shapes[1].contains_point(&p));
    assert!(!shapes[2].cross_segment(&Segment::new(p, Point2::new(9, 9))));
}

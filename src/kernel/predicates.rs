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

use crate::geometry::Point2;
use crate::kernel::orient2d;
use crate::numeric::{Coord, coord};

/// Squared Euclidean distance, exact.
pub fn squared_distance(p: &Point2, q: &Point2) -> Coord {
    let dx = coord::sub(p.x, q.x);
    let dy = coord::sub(p.y, q.y);
    coord::mul_add(dx, dx, dy, dy)
}

/// Closed axis-aligned box spanned by `a` and `b`.
pub fn in_bounding_box(p: &Point2, a: &Point2, b: &Point2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

pub fn is_point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> bool {
    orient2d(a, b, p) == 0 && in_bounding_box(p, a, b)
}

/// `(a - p) . (b - p) <= 0`: `p` sees `a` and `b` at an angle of at
/// least 90 degrees. For `p` collinear with `a` and `b` this means `p`
/// lies on the closed segment between them.
pub fn is_between(p: &Point2, a: &Point2, b: &Point2) -> bool {
    (*a - *p).dot(&(*b - *p)) <= 0
}

/// `o1 * o2 < 0`: orientation values of strictly opposite sign.
///
/// The product wraps like every other product in the crate, so once it
/// leaves the `i64` range the answer follows the wrapped value.
pub fn straddles(o1: Coord, o2: Coord) -> bool {
    coord::mul(o1, o2) < 0
}

/// `o1 * o2 <= 0`, wrapping.
pub fn touches_or_straddles(o1: Coord, o2: Coord) -> bool {
    coord::mul(o1, o2) <= 0
}

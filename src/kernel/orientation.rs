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
use crate::numeric::{Coord, coord};

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
///
/// Equal to `cross(b - a, c - a)`, computed exactly in wrapping `i64`.
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> Coord {
    coord::mul_sub(
        coord::sub(b.x, a.x),
        coord::sub(c.y, a.y),
        coord::sub(b.y, a.y),
        coord::sub(c.x, a.x),
    )
}

#[cfg(test)]
mod tests {
    use crate::geometry::Point2;
    use crate::kernel::orientation::orient2d;

    #[test]
    fn ccw_test() {
        let a = Point2::new(0, 0);
        let b = Point2::new(1, 0);
        let c = Point2::new(0, 1);

        assert!(orient2d(&a, &b, &c) > 0); // Counter-clockwise
    }

    #[test]
    fn cw_test() {
        let a = Point2::new(0, 0);
        let b = Point2::new(0, 1);
        let c = Point2::new(1, 0);

        assert!(orient2d(&a, &b, &c) < 0);
    }

    #[test]
    fn collinear_is_exactly_zero() {
        let a = Point2::new(-3, -3);
        let b = Point2::new(1_000_000, 1_000_000);
        let c = Point2::new(7, 7);

        assert_eq!(orient2d(&a, &b, &c), 0);
    }

    #[test]
    fn orientation_flips_with_argument_swap() {
        let a = Point2::new(2, -1);
        let b = Point2::new(5, 4);
        let c = Point2::new(-3, 8);

        assert_eq!(orient2d(&a, &b, &c), -orient2d(&a, &c, &b));
    }
}

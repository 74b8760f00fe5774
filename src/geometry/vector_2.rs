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

use std::ops::{Add, AddAssign, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::geometry::Point2;
use crate::numeric::{Coord, coord};

/// Displacement between two integer points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector2 {
    pub dx: Coord,
    pub dy: Coord,
}

impl Vector2 {
    pub const fn new(dx: Coord, dy: Coord) -> Self {
        Self { dx, dy }
    }

    /// Vector pointing from `from` to `to`.
    pub fn between(from: &Point2, to: &Point2) -> Self {
        Self {
            dx: coord::sub(to.x, from.x),
            dy: coord::sub(to.y, from.y),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    pub fn dot(&self, other: &Vector2) -> Coord {
        coord::mul_add(self.dx, other.dx, self.dy, other.dy)
    }

    /// Signed area of the parallelogram; positive when `other` turns
    /// counter-clockwise from `self`.
    pub fn cross(&self, other: &Vector2) -> Coord {
        coord::mul_sub(self.dx, other.dy, self.dy, other.dx)
    }

    pub fn squared_length(&self) -> Coord {
        self.dot(self)
    }

    pub fn length(&self) -> f64 {
        coord::to_f64(self.squared_length()).sqrt()
    }

    pub fn checked_dot(&self, other: &Vector2) -> Result<Coord, ShapeError> {
        coord::checked_mul_add(self.dx, other.dx, self.dy, other.dy)
    }

    pub fn checked_cross(&self, other: &Vector2) -> Result<Coord, ShapeError> {
        coord::checked_mul_sub(self.dx, other.dy, self.dy, other.dx)
    }

    pub fn checked_squared_length(&self) -> Result<Coord, ShapeError> {
        self.checked_dot(self)
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2 {
            dx: coord::add(self.dx, rhs.dx),
            dy: coord::add(self.dy, rhs.dy),
        }
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        *self = *self + rhs;
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2 {
            dx: coord::neg(self.dx),
            dy: coord::neg(self.dy),
        }
    }
}

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

//! Coordinate arithmetic.
//!
//! All coordinate, dot and cross computations wrap on overflow so that
//! debug and release builds agree. The `checked_*` helpers are the
//! fail-fast alternative for callers working near the `i64` limits.

use num_traits::{
    AsPrimitive, CheckedAdd, CheckedMul, CheckedSub, WrappingAdd, WrappingMul, WrappingNeg,
    WrappingSub,
};

use crate::error::ShapeError;

pub type Coord = i64;

#[inline(always)]
pub fn add(a: Coord, b: Coord) -> Coord {
    WrappingAdd::wrapping_add(&a, &b)
}

#[inline(always)]
pub fn sub(a: Coord, b: Coord) -> Coord {
    WrappingSub::wrapping_sub(&a, &b)
}

#[inline(always)]
pub fn mul(a: Coord, b: Coord) -> Coord {
    WrappingMul::wrapping_mul(&a, &b)
}

#[inline(always)]
pub fn neg(a: Coord) -> Coord {
    WrappingNeg::wrapping_neg(&a)
}

/// `a*b + c*d`
#[inline(always)]
pub fn mul_add(a: Coord, b: Coord, c: Coord, d: Coord) -> Coord {
    add(mul(a, b), mul(c, d))
}

/// `a*b - c*d`
#[inline(always)]
pub fn mul_sub(a: Coord, b: Coord, c: Coord, d: Coord) -> Coord {
    sub(mul(a, b), mul(c, d))
}

pub fn checked_mul_add(a: Coord, b: Coord, c: Coord, d: Coord) -> Result<Coord, ShapeError> {
    let ab = CheckedMul::checked_mul(&a, &b).ok_or(ShapeError::Overflow)?;
    let cd = CheckedMul::checked_mul(&c, &d).ok_or(ShapeError::Overflow)?;
    CheckedAdd::checked_add(&ab, &cd).ok_or(ShapeError::Overflow)
}

pub fn checked_mul_sub(a: Coord, b: Coord, c: Coord, d: Coord) -> Result<Coord, ShapeError> {
    let ab = CheckedMul::checked_mul(&a, &b).ok_or(ShapeError::Overflow)?;
    let cd = CheckedMul::checked_mul(&c, &d).ok_or(ShapeError::Overflow)?;
    CheckedSub::checked_sub(&ab, &cd).ok_or(ShapeError::Overflow)
}

#[inline(always)]
pub fn to_f64(a: Coord) -> f64 {
    AsPrimitive::<f64>::as_(a)
}

/// `|a|` as a float; total even for `Coord::MIN`.
#[inline(always)]
pub fn abs_f64(a: Coord) -> f64 {
    let m: u64 = a.unsigned_abs();
    AsPrimitive::<f64>::as_(m)
}

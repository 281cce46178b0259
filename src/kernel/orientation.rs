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

use crate::geometry::point::{Point2, Point3};
use crate::numeric::{
    Scalar,
    tolerance::{greater, is_zero},
};

/// Turn direction of an ordered 2D point triple.
///
/// The discriminants are the -1/0/1 codes the location classifier
/// multiplies and sums; do not renumber.
#[repr(i8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Negative = -1,
    Neutral = 0,
    Positive = 1,
}

/// Side of the oriented plane through three points (CCW seen from `Above`).
#[repr(i8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaneSide {
    Below = -1,
    On = 0,
    Above = 1,
}

impl Orientation {
    pub fn code(self) -> i8 {
        self as i8
    }

    fn from_value<T: Scalar>(v: T) -> Self {
        if is_zero(v) {
            Orientation::Neutral
        } else if greater(v, T::zero()) {
            Orientation::Positive
        } else {
            Orientation::Negative
        }
    }
}

impl PlaneSide {
    pub fn code(self) -> i8 {
        self as i8
    }

    fn from_value<T: Scalar>(v: T) -> Self {
        if is_zero(v) {
            PlaneSide::On
        } else if greater(v, T::zero()) {
            PlaneSide::Above
        } else {
            PlaneSide::Below
        }
    }
}

/// Raw determinant behind [`orient2d`]:
/// - >0 if `p, q, m` turn counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d_value<T: Scalar>(p: &Point2<T>, q: &Point2<T>, m: &Point2<T>) -> T {
    (p[0] - m[0]) * (q[1] - m[1]) - (p[1] - m[1]) * (q[0] - m[0])
}

pub fn orient2d<T: Scalar>(p: &Point2<T>, q: &Point2<T>, m: &Point2<T>) -> Orientation {
    Orientation::from_value(orient2d_value(p, q, m))
}

/// Signed volume of the tetrahedron `p, q, r, m` (times six).
pub fn orient3d_value<T: Scalar>(p: &Point3<T>, q: &Point3<T>, r: &Point3<T>, m: &Point3<T>) -> T {
    let e21 = m[0] - q[0];
    let e22 = m[1] - q[1];
    let e23 = m[2] - q[2];

    let e31 = m[0] - r[0];
    let e32 = m[1] - r[1];
    let e33 = m[2] - r[2];

    (m[0] - p[0]) * (e22 * e33 - e23 * e32) - (m[1] - p[1]) * (e21 * e33 - e23 * e31)
        + (m[2] - p[2]) * (e21 * e32 - e22 * e31)
}

/// Location of `m` relative to the plane through `p, q, r`.
pub fn orient3d<T: Scalar>(
    p: &Point3<T>,
    q: &Point3<T>,
    r: &Point3<T>,
    m: &Point3<T>,
) -> PlaneSide {
    PlaneSide::from_value(orient3d_value(p, q, r, m))
}

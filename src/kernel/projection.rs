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

//! Reduction of coplanar 3D configurations to 2D.
//!
//! The coordinate axis most aligned with the plane normal is dropped; the
//! two remaining axes keep their cyclic order, so a frame computed once from
//! a reference primitive can be applied to every primitive of the same test.

use crate::{
    geometry::{
        point::{Point2, Point3},
        segment::{Segment2, Segment3},
        triangle::{Triangle2, Triangle3},
        vector::Vector3,
    },
    numeric::{Scalar, tolerance::greater},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Projection {
    /// Keep (y, z).
    DropX,
    /// Keep (z, x).
    DropY,
    /// Keep (x, y).
    DropZ,
}

impl Projection {
    /// Frame for the plane spanned by two non-collinear vectors.
    pub fn from_vectors<T: Scalar>(v1: &Vector3<T>, v2: &Vector3<T>) -> Self {
        let normal = v1.cross(v2);
        let (x, y, z) = (normal[0].abs(), normal[1].abs(), normal[2].abs());

        if greater(x, y) && greater(x, z) {
            Projection::DropX
        } else if y > z {
            Projection::DropY
        } else {
            Projection::DropZ
        }
    }

    /// Frame for a triangle's supporting plane, from edges PQ and PR.
    pub fn from_triangle<T: Scalar>(tri: &Triangle3<T>) -> Self {
        Self::from_vectors(
            &tri.p().vector_to(tri.q()),
            &tri.p().vector_to(tri.r()),
        )
    }

    pub fn point<T: Scalar>(self, p: &Point3<T>) -> Point2<T> {
        match self {
            Projection::DropX => Point2::new(p.y(), p.z()),
            Projection::DropY => Point2::new(p.z(), p.x()),
            Projection::DropZ => Point2::new(p.x(), p.y()),
        }
    }

    pub fn segment<T: Scalar>(self, s: &Segment3<T>) -> Segment2<T> {
        Segment2::new_unchecked(self.point(s.p()), self.point(s.q()))
    }

    pub fn triangle<T: Scalar>(self, t: &Triangle3<T>) -> Triangle2<T> {
        Triangle2::new(self.point(t.p()), self.point(t.q()), self.point(t.r()))
    }
}

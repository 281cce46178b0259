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

use crate::{
    geometry::{
        point::Point3,
        segment::Segment3,
        triangle::Triangle3,
        vector::{Vector, are_collinear, are_oppositely_directed},
    },
    intersection::{location::locate, planar::canonicalize_ccw},
    kernel::{
        orientation::{PlaneSide, orient3d},
        projection::Projection,
    },
    numeric::Scalar,
};

pub fn point_point<T: Scalar>(a: &Point3<T>, b: &Point3<T>) -> bool {
    a.approx_eq(b)
}

/// `m` is on the segment iff it is on the supporting line and the vectors
/// from both endpoints to `m` do not point the same way (endpoints included).
pub fn point_segment<T: Scalar>(m: &Point3<T>, seg: &Segment3<T>) -> bool {
    let pm = Vector::between(seg.p(), m);
    if !are_collinear(&seg.direction(), &pm) {
        return false;
    }
    are_oppositely_directed(&pm, &Vector::between(seg.q(), m))
}

pub fn point_triangle<T: Scalar>(m: &Point3<T>, tri: &Triangle3<T>) -> bool {
    if orient3d(tri.p(), tri.q(), tri.r(), m) != PlaneSide::On {
        return false;
    }

    let projection = Projection::from_triangle(tri);
    let flat = canonicalize_ccw(projection.triangle(tri));
    locate(&projection.point(m), &flat).is_on_triangle()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflexive() {
        let p = Point3::new(0.3, -7.0, 1e6);
        assert!(point_point(&p, &p));
    }

    #[test]
    fn clockwise_triangle_is_canonicalized() {
        let m = Point3::new(0.25, 0.25, 0.0);
        let ccw = Triangle3::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        let mut cw = ccw;
        cw.swap_qr();
        assert!(point_triangle(&m, &ccw));
        assert!(point_triangle(&m, &cw));
    }
}

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
    geometry::{segment::Segment3, triangle::Triangle3},
    intersection::planar::{canonicalize_ccw, intersects_planar},
    kernel::{
        orientation::{PlaneSide, orient3d},
        projection::Projection,
    },
    numeric::Scalar,
};

pub fn segment_triangle<T: Scalar>(seg: &Segment3<T>, tri: &Triangle3<T>) -> bool {
    let (a, b, c) = (tri.p(), tri.q(), tri.r());
    let p_side = orient3d(a, b, c, seg.p());
    let q_side = orient3d(a, b, c, seg.q());

    if p_side == q_side {
        if p_side != PlaneSide::On {
            return false;
        }
        let projection = Projection::from_triangle(tri);
        let flat = canonicalize_ccw(projection.triangle(tri));
        return intersects_planar(&projection.segment(seg), flat);
    }

    // P must be the endpoint on the higher side of the plane.
    let mut s = *seg;
    if p_side.code() < q_side.code() {
        s.swap_points();
    }
    let (p, q) = (s.p(), s.q());

    orient3d(p, a, b, q) != PlaneSide::Above
        && orient3d(p, b, c, q) != PlaneSide::Above
        && orient3d(p, c, a, q) != PlaneSide::Above
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point3;

    fn reference() -> Triangle3<f64> {
        Triangle3::new(
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        )
    }

    #[test]
    fn endpoint_resting_on_face() {
        // one endpoint Above, the other On: order must not matter
        let up = Segment3::new(Point3::new(0.2, 0.2, 1.0), Point3::new(0.2, 0.2, 0.0)).unwrap();
        let mut down = up;
        down.swap_points();
        assert!(segment_triangle(&up, &reference()));
        assert!(segment_triangle(&down, &reference()));
    }

    #[test]
    fn endpoint_on_plane_outside_face() {
        let s = Segment3::new(Point3::new(2.0, 2.0, 1.0), Point3::new(2.0, 2.0, 0.0)).unwrap();
        assert!(!segment_triangle(&s, &reference()));
    }
}

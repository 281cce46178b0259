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

//! Coplanar (2D) overlap of a probe primitive and a triangle.
//!
//! The probe's anchor vertex P is located against the triangle. Contact ends
//! the test; otherwise the triangle is relabeled so the violated edge (or
//! vertex wedge) sits at a fixed position and a decision tree over `orient2d`
//! signs settles whether the rest of the probe reaches the triangle.
//!
//! Both inputs must be wound counter-clockwise.

use crate::{
    geometry::{point::Point2, segment::Segment2, triangle::Triangle2},
    intersection::location::{Location, classify_location, edge_orientations},
    kernel::orientation::{Orientation, orient2d},
    numeric::Scalar,
};

use Orientation::{Negative, Positive};

/// A 2D primitive that can be tested against a counter-clockwise triangle.
pub trait PlanarProbe<T: Scalar> {
    /// Vertex whose location selects the decision tree.
    fn anchor(&self) -> &Point2<T>;

    /// Anchor lies beyond the triangle's RP edge only.
    fn test_r1(&self, tri: &Triangle2<T>) -> bool;

    /// Anchor lies in the wedge of the triangle's vertex P.
    fn test_r2(&self, tri: &Triangle2<T>) -> bool;
}

/// Swaps Q and R unless the triangle already turns counter-clockwise.
pub fn canonicalize_ccw<T: Scalar>(mut tri: Triangle2<T>) -> Triangle2<T> {
    if orient2d(tri.p(), tri.q(), tri.r()) != Positive {
        tri.swap_qr();
    }
    tri
}

pub fn intersects_planar<T: Scalar, P: PlanarProbe<T>>(probe: &P, mut tri: Triangle2<T>) -> bool {
    let [pq, qr, rp] = edge_orientations(probe.anchor(), &tri);

    match classify_location(pq, qr, rp) {
        Location::Inside | Location::OnVertex | Location::OnSide => true,
        Location::EdgeRegion => {
            if pq == Negative {
                tri.swap_counterclockwise();
            } else if qr == Negative {
                tri.swap_clockwise();
            }
            probe.test_r1(&tri)
        }
        Location::VertexRegion => {
            if rp == Positive {
                tri.swap_clockwise();
            } else if qr == Positive {
                tri.swap_counterclockwise();
            }
            probe.test_r2(&tri)
        }
    }
}

impl<T: Scalar> PlanarProbe<T> for Triangle2<T> {
    fn anchor(&self) -> &Point2<T> {
        self.p()
    }

    fn test_r1(&self, tri: &Triangle2<T>) -> bool {
        let (p1, q1, r1) = (self.p(), self.q(), self.r());
        let (p2, r2) = (tri.p(), tri.r());

        if orient2d(r2, p2, q1) == Negative {
            if orient2d(r2, p2, r1) == Negative {
                false
            } else {
                orient2d(q1, r2, r1) != Positive && orient2d(p1, p2, r1) != Negative
            }
        } else if orient2d(p1, r2, q1) == Positive {
            false
        } else if orient2d(p1, p2, q1) != Negative {
            true
        } else {
            orient2d(p1, p2, r1) != Negative && orient2d(q1, p2, r1) != Positive
        }
    }

    fn test_r2(&self, tri: &Triangle2<T>) -> bool {
        let (p1, q1, r1) = (self.p(), self.q(), self.r());
        let (p2, q2, r2) = (tri.p(), tri.q(), tri.r());

        if orient2d(r2, p2, q1) == Negative {
            if orient2d(r2, p2, r1) == Negative {
                false
            } else if orient2d(r2, q1, r1) != Negative {
                orient2d(p1, p2, r1) != Negative
            } else {
                orient2d(q2, q1, r1) != Negative && orient2d(q2, r2, r1) != Negative
            }
        } else if orient2d(q2, r2, q1) == Negative {
            if orient2d(p1, q2, q1) == Negative {
                orient2d(q2, r2, r1) != Negative && orient2d(q2, q1, r1) != Negative
            } else {
                false
            }
        } else if orient2d(p1, p2, q1) == Negative {
            orient2d(p1, p2, r1) != Negative && orient2d(q1, p2, r1) != Positive
        } else {
            orient2d(p1, q2, q1) != Positive
        }
    }
}

impl<T: Scalar> PlanarProbe<T> for Segment2<T> {
    fn anchor(&self) -> &Point2<T> {
        self.p()
    }

    fn test_r1(&self, tri: &Triangle2<T>) -> bool {
        let (p, q) = (self.p(), self.q());
        let (p2, r2) = (tri.p(), tri.r());

        if orient2d(r2, p2, q) == Negative {
            return false;
        }
        orient2d(p, p2, q) != Negative && orient2d(p, r2, q) != Positive
    }

    fn test_r2(&self, tri: &Triangle2<T>) -> bool {
        let (p, q) = (self.p(), self.q());
        let (p2, q2, r2) = (tri.p(), tri.q(), tri.r());

        if orient2d(r2, p2, q) == Negative {
            return false;
        }
        orient2d(p, p2, q) != Negative
            && orient2d(p, q2, q) != Positive
            && orient2d(q2, r2, q) != Negative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Triangle2<f64> {
        canonicalize_ccw(Triangle2::new(
            Point2::new(a.0, a.1),
            Point2::new(b.0, b.1),
            Point2::new(c.0, c.1),
        ))
    }

    #[test]
    fn canonicalize_flips_clockwise() {
        let t = tri((0.0, 1.0), (1.0, 0.0), (0.0, 0.0));
        assert_eq!(orient2d(t.p(), t.q(), t.r()), Positive);
        assert_eq!(*t.q(), Point2::new(0.0, 0.0));
    }

    #[test]
    fn edge_region_probe() {
        let reference = tri((0.0, 1.0), (0.0, 0.0), (1.0, 0.0));
        let reaching = tri((1.0, 1.0), (0.5, 1.5), (0.5, 0.5));
        let short = tri((1.0, 1.0), (0.5, 1.5), (0.75, 0.75));
        assert!(intersects_planar(&reaching, reference));
        assert!(!intersects_planar(&short, reference));
    }

    #[test]
    fn segment_probe_through_vertex_wedge() {
        let reference = tri((0.0, 1.0), (0.0, 0.0), (1.0, 0.0));
        let crossing = Segment2::new_unchecked(Point2::new(2.0, -0.5), Point2::new(-1.0, 1.0));
        let missing = Segment2::new_unchecked(Point2::new(2.0, -0.5), Point2::new(2.0, 2.0));
        assert!(intersects_planar(&crossing, reference));
        assert!(!intersects_planar(&missing, reference));
    }
}

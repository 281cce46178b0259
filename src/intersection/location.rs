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
    geometry::{point::Point2, triangle::Triangle2},
    kernel::orientation::{Orientation, orient2d},
    numeric::Scalar,
};

/// Where a 2D point lies with respect to a counter-clockwise triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Inside,
    OnVertex,
    OnSide,
    /// Outside, beyond exactly one edge line (region R1).
    EdgeRegion,
    /// Outside, beyond two edge lines, i.e. in the wedge of a vertex (region R2),
    /// including the boundary lines of that wedge.
    VertexRegion,
}

impl Location {
    pub fn is_on_triangle(self) -> bool {
        matches!(
            self,
            Location::Inside | Location::OnVertex | Location::OnSide
        )
    }
}

/// Classifies a point from its orientations against the edges PQ, QR and RP
/// of a counter-clockwise triangle.
///
/// Works on the -1/0/1 codes: the product separates the two outside regions,
/// the sum separates vertex from side contact.
pub fn classify_location(pq: Orientation, qr: Orientation, rp: Orientation) -> Location {
    use Orientation::Positive;

    if pq == Positive && qr == Positive && rp == Positive {
        return Location::Inside;
    }

    let mult = pq.code() * qr.code() * rp.code();
    if mult < 0 {
        return Location::EdgeRegion;
    }
    if mult > 0 {
        return Location::VertexRegion;
    }

    match pq.code() + qr.code() + rp.code() {
        0 => Location::VertexRegion,
        1 => Location::OnVertex,
        2 => Location::OnSide,
        sum => unreachable!(
            "point cannot touch a counter-clockwise triangle with edge orientations \
             {pq:?}/{qr:?}/{rp:?} (sum {sum})"
        ),
    }
}

/// Orientations of `m` against the edges PQ, QR and RP of `tri`.
pub fn edge_orientations<T: Scalar>(m: &Point2<T>, tri: &Triangle2<T>) -> [Orientation; 3] {
    [
        orient2d(tri.p(), tri.q(), m),
        orient2d(tri.q(), tri.r(), m),
        orient2d(tri.r(), tri.p(), m),
    ]
}

pub fn locate<T: Scalar>(m: &Point2<T>, tri: &Triangle2<T>) -> Location {
    let [pq, qr, rp] = edge_orientations(m, tri);
    classify_location(pq, qr, rp)
}

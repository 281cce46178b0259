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
        segment::Segment3,
        vector::{Vector, are_codirectional, are_collinear, are_coplanar},
    },
    kernel::{orientation::orient2d, projection::Projection},
    numeric::Scalar,
};

pub fn segment_segment<T: Scalar>(s1: &Segment3<T>, s2: &Segment3<T>) -> bool {
    let v1 = s1.direction();
    let v2 = s2.direction();
    let v3 = Vector::between(s1.p(), s2.q());

    if !are_coplanar(&v1, &v2, &v3) {
        return false;
    }

    if are_collinear(&v1, &v2) {
        return collinear_overlap(s1, s2);
    }

    let projection = Projection::from_vectors(&v1, &v2);
    let a = projection.segment(s1);
    let b = projection.segment(s2);

    let straddle_a = orient2d(a.p(), a.q(), b.p()).code() * orient2d(a.p(), a.q(), b.q()).code();
    if straddle_a > 0 {
        return false;
    }
    let straddle_b = orient2d(b.p(), b.q(), a.p()).code() * orient2d(b.p(), b.q(), a.q()).code();
    straddle_b <= 0
}

/// Parallel segments: same supporting line and overlapping 1D extents.
///
/// With both segments pointing the same way, `[P1, Q1]` and `[P2, Q2]`
/// overlap iff P1→Q2 and P2→Q1 are codirectional (zero-length allowed).
fn collinear_overlap<T: Scalar>(s1: &Segment3<T>, s2: &Segment3<T>) -> bool {
    let v1 = s1.direction();
    if !are_collinear(&v1, &Vector::between(s1.p(), s2.q())) {
        return false;
    }

    let mut s2 = *s2;
    if !are_codirectional(&v1, &s2.direction()) {
        s2.swap_points();
    }

    are_codirectional(
        &Vector::between(s1.p(), s2.q()),
        &Vector::between(s2.p(), s1.q()),
    )
}

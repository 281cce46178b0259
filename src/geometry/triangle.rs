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
    error::Result,
    geometry::{
        point::Point,
        segment::Segment,
        vector::{Vector, are_collinear, are_oppositely_directed},
    },
    numeric::Scalar,
};

/// What a vertex triple actually spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Species {
    Point,
    Segment,
    Triangle,
}

/// Ordered vertex triple. The labels matter: predicates read the winding
/// from the order P, Q, R and relabel in place to canonicalize it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T: Scalar, const N: usize> {
    p: Point<T, N>,
    q: Point<T, N>,
    r: Point<T, N>,
}

pub type Triangle2<T> = Triangle<T, 2>;
pub type Triangle3<T> = Triangle<T, 3>;

impl<T: Scalar, const N: usize> Triangle<T, N> {
    pub fn new(p: Point<T, N>, q: Point<T, N>, r: Point<T, N>) -> Self {
        Self { p, q, r }
    }

    pub fn p(&self) -> &Point<T, N> {
        &self.p
    }

    pub fn q(&self) -> &Point<T, N> {
        &self.q
    }

    pub fn r(&self) -> &Point<T, N> {
        &self.r
    }

    pub fn vertices(&self) -> [Point<T, N>; 3] {
        [self.p, self.q, self.r]
    }

    /// (P, Q, R) -> (P, R, Q). Reverses the winding.
    pub fn swap_qr(&mut self) {
        std::mem::swap(&mut self.q, &mut self.r);
    }

    /// (P, Q, R) -> (R, P, Q). Keeps the winding.
    pub fn swap_clockwise(&mut self) {
        let p = self.p;
        self.p = self.r;
        self.r = self.q;
        self.q = p;
    }

    /// (P, Q, R) -> (Q, R, P). Keeps the winding.
    pub fn swap_counterclockwise(&mut self) {
        let p = self.p;
        self.p = self.q;
        self.q = self.r;
        self.r = p;
    }

    pub fn is_point(&self) -> bool {
        self.p.approx_eq(&self.q) && self.q.approx_eq(&self.r)
    }
}

impl<T: Scalar> Triangle<T, 3> {
    pub fn is_segment(&self) -> bool {
        are_collinear(
            &Vector::between(&self.p, &self.q),
            &Vector::between(&self.p, &self.r),
        )
    }

    pub fn species(&self) -> Species {
        if self.is_point() {
            Species::Point
        } else if self.is_segment() {
            Species::Segment
        } else {
            Species::Triangle
        }
    }

    /// Reduces a collinear triple to the segment spanned by its two
    /// extremal vertices.
    ///
    /// If R lies between P and Q the answer is PQ; otherwise R is an
    /// extremity and is paired with whichever of P, Q lies farther from it.
    pub fn to_segment(&self) -> Result<Segment<T, 3>> {
        let pr = Vector::between(&self.p, &self.r);
        let qr = Vector::between(&self.q, &self.r);

        if are_oppositely_directed(&pr, &qr) {
            Segment::new(self.p, self.q)
        } else if pr.norm() > qr.norm() {
            Segment::new(self.p, self.r)
        } else {
            Segment::new(self.q, self.r)
        }
    }
}

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
    error::{GeometryError, Result},
    geometry::{point::Point, vector::Vector},
    numeric::Scalar,
};

/// Ordered pair of distinct points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T: Scalar, const N: usize> {
    p: Point<T, N>,
    q: Point<T, N>,
}

pub type Segment2<T> = Segment<T, 2>;
pub type Segment3<T> = Segment<T, 3>;

impl<T: Scalar, const N: usize> Segment<T, N> {
    /// Fails with [`GeometryError::DegenerateSegment`] when `p ≈ q`.
    pub fn new(p: Point<T, N>, q: Point<T, N>) -> Result<Self> {
        if p.approx_eq(&q) {
            return Err(GeometryError::DegenerateSegment);
        }
        Ok(Self { p, q })
    }

    /// Projections of a valid 3D segment onto its supporting plane keep
    /// their endpoints apart, so the check is skipped there.
    pub(crate) fn new_unchecked(p: Point<T, N>, q: Point<T, N>) -> Self {
        Self { p, q }
    }

    pub fn p(&self) -> &Point<T, N> {
        &self.p
    }

    pub fn q(&self) -> &Point<T, N> {
        &self.q
    }

    pub fn swap_points(&mut self) {
        std::mem::swap(&mut self.p, &mut self.q);
    }

    pub fn direction(&self) -> Vector<T, N> {
        Vector::between(&self.p, &self.q)
    }

    pub fn midpoint(&self) -> Point<T, N> {
        self.p.midpoint(&self.q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point3;

    #[test]
    fn coincident_endpoints_are_rejected() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let q = Point3::new(1.0, 1.0 + 1e-8, 1.0);
        assert!(matches!(
            Segment::new(p, q),
            Err(GeometryError::DegenerateSegment)
        ));
    }

    #[test]
    fn swap_reverses_direction() {
        let mut s = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 2.0, 3.0)).unwrap();
        let d = s.direction();
        s.swap_points();
        assert_eq!(s.direction(), -d);
        assert_eq!(*s.p(), Point3::new(1.0, 2.0, 3.0));
    }
}

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

use std::array::from_fn;

use crate::{
    geometry::point::Point3,
    numeric::{Scalar, tolerance::less_equal},
};

/// An axis-aligned bounding box in 3D, stored as center and per-axis half-widths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb<T: Scalar> {
    center: Point3<T>,
    halfwidth: [T; 3],
}

impl<T: Scalar> Aabb<T> {
    pub fn new(center: Point3<T>, halfwidth: [T; 3]) -> Self {
        Aabb { center, halfwidth }
    }

    /// Zero-volume box around a single point.
    pub fn from_point(p: &Point3<T>) -> Self {
        Aabb::new(*p, [T::zero(); 3])
    }

    /// Build the smallest AABB containing two points.
    pub fn from_points(a: &Point3<T>, b: &Point3<T>) -> Self {
        Aabb::new(
            a.midpoint(b),
            from_fn(|i| (a[i] - b[i]).abs() * T::half()),
        )
    }

    /// Smallest AABB containing every point; `None` for an empty iterator.
    pub fn from_point_iter<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3<T>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut lo = first.coords;
        let mut hi = first.coords;
        for p in iter {
            for i in 0..3 {
                lo[i] = lo[i].min(p[i]);
                hi[i] = hi[i].max(p[i]);
            }
        }
        Some(Self::from_bounds(lo, hi))
    }

    fn from_bounds(lo: [T; 3], hi: [T; 3]) -> Self {
        Aabb::new(
            Point3::from_coords(from_fn(|i| (lo[i] + hi[i]) * T::half())),
            from_fn(|i| (hi[i] - lo[i]) * T::half()),
        )
    }

    pub fn center(&self) -> &Point3<T> {
        &self.center
    }

    pub fn halfwidth(&self, i: usize) -> T {
        self.halfwidth[i]
    }

    /// Minimum coordinate along axis `i`.
    pub fn min(&self, i: usize) -> T {
        self.center[i] - self.halfwidth[i]
    }

    /// Maximum coordinate along axis `i`.
    pub fn max(&self, i: usize) -> T {
        self.center[i] + self.halfwidth[i]
    }

    pub fn union(&self, other: &Aabb<T>) -> Aabb<T> {
        Self::from_bounds(
            from_fn(|i| self.min(i).min(other.min(i))),
            from_fn(|i| self.max(i).max(other.max(i))),
        )
    }

    /// Tolerant, inclusive overlap: touching boxes overlap.
    pub fn overlaps(&self, other: &Aabb<T>) -> bool {
        (0..3).all(|i| {
            less_equal(
                (self.center[i] - other.center[i]).abs(),
                self.halfwidth[i] + other.halfwidth[i],
            )
        })
    }

    /// Return the axis index with largest extent.
    pub fn longest_axis(&self) -> usize {
        let mut best_i = 0usize;
        for i in 1..3 {
            if self.halfwidth[i] > self.halfwidth[best_i] {
                best_i = i;
            }
        }
        best_i
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_from_iterator() {
        let pts = [
            Point3::new(0.0, 1.0, -2.0),
            Point3::new(2.0, -1.0, 0.0),
            Point3::new(1.0, 0.0, 4.0),
        ];
        let b = Aabb::from_point_iter(pts.iter()).unwrap();
        assert_eq!(b.min(0), 0.0);
        assert_eq!(b.max(1), 1.0);
        assert_eq!(b.min(2), -2.0);
        assert_eq!(b.max(2), 4.0);
        assert_eq!(b.longest_axis(), 2);
        assert!(Aabb::<f64>::from_point_iter(std::iter::empty()).is_none());
    }

    #[test]
    fn touching_boxes_overlap() {
        let a = Aabb::from_points(&Point3::new(0.0, 0.0, 0.0), &Point3::new(1.0, 1.0, 1.0));
        let b = Aabb::from_points(&Point3::new(1.0, 0.0, 0.0), &Point3::new(2.0, 1.0, 1.0));
        let c = Aabb::from_points(&Point3::new(1.1, 0.0, 0.0), &Point3::new(2.0, 1.0, 1.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }
}

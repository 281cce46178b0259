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

use log::warn;

use crate::{
    geometry::{
        aabb::Aabb,
        point::Point3,
        segment::Segment3,
        triangle::{Species, Triangle3},
    },
    intersection::{
        point_point, point_segment, point_triangle, segment_segment, segment_triangle,
        triangle_triangle,
    },
    numeric::Scalar,
};

/// A point triple reduced to the primitive it actually spans.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive<T: Scalar> {
    Point(Point3<T>),
    Segment(Segment3<T>),
    Triangle(Triangle3<T>),
}

impl<T: Scalar> Primitive<T> {
    /// Classifies `(p, q, r)`; collinear triples become the segment between
    /// their two extremal points, coincident ones become `p`.
    pub fn classify(p: Point3<T>, q: Point3<T>, r: Point3<T>) -> Self {
        let tri = Triangle3::new(p, q, r);
        match tri.species() {
            Species::Point => Primitive::Point(p),
            Species::Segment => match tri.to_segment() {
                Ok(seg) => Primitive::Segment(seg),
                Err(err) => {
                    warn!("collinear triple {tri:?} collapsed to a point: {err}");
                    Primitive::Point(p)
                }
            },
            Species::Triangle => Primitive::Triangle(tri),
        }
    }

    pub fn species(&self) -> Species {
        match self {
            Primitive::Point(_) => Species::Point,
            Primitive::Segment(_) => Species::Segment,
            Primitive::Triangle(_) => Species::Triangle,
        }
    }

    pub fn aabb(&self) -> Aabb<T> {
        match self {
            Primitive::Point(p) => Aabb::from_point(p),
            Primitive::Segment(s) => Aabb::from_points(s.p(), s.q()),
            Primitive::Triangle(t) => Aabb::from_point_iter(&t.vertices())
                .unwrap_or_else(|| Aabb::from_point(t.p())),
        }
    }

    /// Exact-kind dispatch; commutative in its arguments.
    pub fn intersects(&self, other: &Primitive<T>) -> bool {
        use Primitive::{Point, Segment, Triangle};

        match (self, other) {
            (Point(a), Point(b)) => point_point(a, b),
            (Point(p), Segment(s)) | (Segment(s), Point(p)) => point_segment(p, s),
            (Point(p), Triangle(t)) | (Triangle(t), Point(p)) => point_triangle(p, t),
            (Segment(a), Segment(b)) => segment_segment(a, b),
            (Segment(s), Triangle(t)) | (Triangle(t), Segment(s)) => segment_triangle(s, t),
            (Triangle(a), Triangle(b)) => triangle_triangle(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_coincident_triple_is_a_point() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let q = Point3::new(1.0 + 1e-7, 1.0, 1.0);
        let r = Point3::new(1.0, 1.0 - 1e-7, 1.0);
        assert_eq!(Primitive::classify(p, q, r).species(), Species::Point);
    }

    #[test]
    fn scaled_points_are_a_segment() {
        let p = Point3::new(3.0, -6.0, 9.0);
        let prim = Primitive::classify(p, Point3::new(1.5, -3.0, 4.5), Point3::new(1.0, -2.0, 3.0));
        match prim {
            Primitive::Segment(s) => {
                assert_eq!(*s.p(), p);
                assert_eq!(*s.q(), Point3::new(1.0, -2.0, 3.0));
            }
            other => panic!("expected a segment, got {other:?}"),
        }
    }
}

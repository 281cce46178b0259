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

use collide3d::geometry::vector::{
    are_antiparallel, are_codirectional, are_collinear, are_coplanar, are_oppositely_directed,
    are_orthogonal, are_parallel, triple_product,
};
use collide3d::geometry::{Aabb, Point2, Point3, Primitive, Species, Triangle3, Vector3};
use collide3d::kernel::{Orientation, PlaneSide, Projection, orient2d, orient3d};
use collide3d::numeric::{Tolerance, are_equal, greater, is_zero, less, less_equal};

#[test]
fn comparator_absorbs_small_differences() {
    assert!(are_equal(1.0, 1.0 + 0.4e-6));
    assert!(!are_equal(1.0, 1.0 + 1e-5));
    assert!(are_equal(0.0, -0.0));
    assert!(is_zero(1e-10));
    // relative branch
    assert!(are_equal(1e9, 1e9 + 100.0));
    assert!(!are_equal(1e9, 1e9 + 1e4));

    assert!(!less(1.0, 1.0 + 1e-7));
    assert!(less_equal(1.0 + 1e-7, 1.0));
    assert!(less(1.0, 2.0));
    assert!(!greater(1.0, 1.0));
}

#[test]
fn custom_tolerance() {
    let loose = Tolerance::new(0.1, 0.0);
    assert!(loose.equal(1.0, 1.05));
    assert!(!loose.less(1.0, 1.05));
    assert!(loose.greater(1.2, 1.0));
}

#[test]
fn vector_direction_predicates() {
    let x = Vector3::new(1.0, 0.0, 0.0);
    let x2 = Vector3::new(2.0, 0.0, 0.0);
    let nx = Vector3::new(-3.0, 0.0, 0.0);
    let y = Vector3::new(0.0, 1.0, 0.0);
    let zero = Vector3::new(0.0, 0.0, 0.0);

    assert!(are_collinear(&x, &nx));
    assert!(are_codirectional(&x, &x2));
    assert!(!are_codirectional(&x, &nx));
    assert!(are_oppositely_directed(&x, &nx));
    assert!(!are_collinear(&x, &y));

    // the zero vector points every way
    assert!(are_codirectional(&zero, &x));
    assert!(are_oppositely_directed(&zero, &x));
    assert!(are_parallel(&zero, &x));
    assert!(are_antiparallel(&zero, &x));
    assert!(are_orthogonal(&zero, &x));

    assert!(are_parallel(&x, &x2));
    assert!(!are_parallel(&x, &nx));
    assert!(!are_parallel(&x, &y));
    assert!(are_antiparallel(&x, &nx));
    assert!(!are_antiparallel(&x, &x2));
    assert!(are_orthogonal(&x, &y));
    assert!(!are_orthogonal(&x, &(x + y)));

    assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
    assert!(are_coplanar(&x, &y, &(x + y)));
    assert!(!are_coplanar(&x, &y, &Vector3::new(0.0, 0.0, 1.0)));

    let z = Vector3::new(0.0, 0.0, 1.0);
    assert_eq!(triple_product(&x, &y, &z), 1.0);
    assert_eq!(triple_product(&y, &x, &z), -1.0);
    assert_eq!(triple_product(&x, &y, &(x + y)), 0.0);
    assert_eq!(triple_product(&zero, &y, &z), 0.0);
}

#[test]
fn snapped_subtraction() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(1.0 + 1e-9, 2.0, 0.0);
    let d = a - b;
    assert_eq!(d[0], 0.0);
    assert_eq!(d[2], 3.0);
}

#[test]
fn orientation_signs() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(1.0, 0.0);
    assert_eq!(orient2d(&a, &b, &Point2::new(0.0, 1.0)), Orientation::Positive);
    assert_eq!(orient2d(&a, &b, &Point2::new(0.0, -1.0)), Orientation::Negative);
    assert_eq!(orient2d(&a, &b, &Point2::new(3.0, 0.0)), Orientation::Neutral);

    let (p, q, r) = (
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    );
    assert_eq!(orient3d(&p, &q, &r, &Point3::new(0.0, 0.0, 1.0)), PlaneSide::Above);
    assert_eq!(orient3d(&p, &q, &r, &Point3::new(0.0, 0.0, -1.0)), PlaneSide::Below);
    assert_eq!(orient3d(&p, &q, &r, &Point3::new(5.0, 5.0, 0.0)), PlaneSide::On);
    // swapping two vertices flips the side
    assert_eq!(orient3d(&p, &r, &q, &Point3::new(0.0, 0.0, 1.0)), PlaneSide::Below);
    assert_eq!(PlaneSide::Below.code(), -1);
}

#[test]
fn projection_drops_dominant_axis() {
    let flat = Triangle3::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    );
    assert_eq!(Projection::from_triangle(&flat), Projection::DropZ);

    let wall = Triangle3::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    );
    assert_eq!(Projection::from_triangle(&wall), Projection::DropX);

    let side = Triangle3::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    );
    assert_eq!(Projection::from_triangle(&side), Projection::DropY);
    assert_eq!(
        Projection::DropY.point(&Point3::new(1.0, 2.0, 3.0)),
        Point2::new(3.0, 1.0)
    );
}

#[test]
fn species_of_triples() {
    let o = Point3::new(0.0, 0.0, 0.0);
    let near = Point3::new(1e-8, 0.0, 0.0);

    assert_eq!(Primitive::classify(o, near, o).species(), Species::Point);

    let line = Primitive::classify(
        Point3::new(1.0, 1.0, 1.0),
        o,
        Point3::new(2.0, 2.0, 2.0),
    );
    match line {
        Primitive::Segment(s) => {
            let ends = [*s.p(), *s.q()];
            assert!(ends.contains(&o));
            assert!(ends.contains(&Point3::new(2.0, 2.0, 2.0)));
        }
        other => panic!("expected a segment, got {other:?}"),
    }

    let t = Primitive::classify(o, Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0));
    assert_eq!(t.species(), Species::Triangle);
}

#[test]
fn boxes_touching_overlap() {
    let a = Aabb::from_points(&Point3::new(0.0, 0.0, 0.0), &Point3::new(1.0, 1.0, 1.0));
    let b = Aabb::from_points(&Point3::new(1.0, 0.0, 0.0), &Point3::new(2.0, 1.0, 1.0));
    let c = Aabb::from_points(&Point3::new(1.1, 0.0, 0.0), &Point3::new(2.0, 1.0, 1.0));
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
    assert!(!a.overlaps(&c));

    let u = a.union(&c);
    assert_eq!(u.min(0), 0.0);
    assert_eq!(u.max(0), 2.0);
    assert_eq!(u.longest_axis(), 0);
}

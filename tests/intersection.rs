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

use collide3d::geometry::{Point3, Primitive, Segment3, Triangle3};
use collide3d::intersection::{
    point_point, point_segment, point_triangle, segment_segment, segment_triangle,
};

fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
    Point3::new(x, y, z)
}

fn seg(a: [f64; 3], b: [f64; 3]) -> Segment3<f64> {
    Segment3::new(a.into(), b.into()).unwrap()
}

fn tri(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Triangle3<f64> {
    Triangle3::new(a.into(), b.into(), c.into())
}

/// Both segment directions against both windings of the triangle.
fn seg_tri(s: &Segment3<f64>, t: &Triangle3<f64>) -> bool {
    let mut rev = *s;
    rev.swap_points();
    let mut flipped = *t;
    flipped.swap_qr();

    let result = segment_triangle(s, t);
    for (a, b) in [(&rev, t), (s, &flipped), (&rev, &flipped)] {
        assert_eq!(segment_triangle(a, b), result, "{a:?} vs {b:?}");
    }
    result
}

fn seg_seg(a: &Segment3<f64>, b: &Segment3<f64>) -> bool {
    let result = segment_segment(a, b);
    assert_eq!(segment_segment(b, a), result, "{b:?} vs {a:?}");
    result
}

#[test]
fn points_within_tolerance_coincide() {
    assert!(point_point(&p(0.0, 0.0, 0.0), &p(0.0, 0.0, 1e-7)));
    assert!(!point_point(&p(0.0, 0.0, 0.0), &p(0.0, 0.0, 1e-3)));
}

#[test]
fn point_on_segment() {
    let s = seg([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
    assert!(point_segment(&p(1.0, 1.0, 1.0), &s));
    assert!(point_segment(&p(0.0, 0.0, 0.0), &s));
    assert!(point_segment(&p(2.0, 2.0, 2.0), &s));
    // on the supporting line, past the end
    assert!(!point_segment(&p(3.0, 3.0, 3.0), &s));
    assert!(!point_segment(&p(1.0, 1.0, 1.1), &s));
}

#[test]
fn point_in_triangle_any_winding() {
    let ccw = tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
    let cw = tri([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]);
    for t in [&ccw, &cw] {
        assert!(point_triangle(&p(0.25, 0.25, 0.0), t));
        // on the hypotenuse
        assert!(point_triangle(&p(0.5, 0.5, 0.0), t));
        assert!(point_triangle(&p(1.0, 0.0, 0.0), t));
        assert!(!point_triangle(&p(0.6, 0.6, 0.0), t));
        assert!(!point_triangle(&p(-0.1, 0.5, 0.0), t));
        assert!(!point_triangle(&p(0.25, 0.25, 0.1), t));
    }
}

#[test]
fn point_in_vertical_triangle() {
    let t = tri([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]);
    assert!(point_triangle(&p(0.0, 0.2, 0.2), &t));
    assert!(!point_triangle(&p(0.0, 0.6, 0.6), &t));
}

#[test]
fn crossing_and_skew_segments() {
    let a = seg([0.0, 0.0, 0.0], [2.0, 2.0, 0.0]);
    assert!(seg_seg(&a, &seg([0.0, 2.0, 0.0], [2.0, 0.0, 0.0])));
    assert!(!seg_seg(&a, &seg([0.0, 2.0, 1.0], [2.0, 0.0, 1.0])));
    // endpoint resting on the other segment
    assert!(seg_seg(&a, &seg([1.0, 1.0, 0.0], [1.0, 5.0, 0.0])));
    assert!(!seg_seg(&a, &seg([3.0, 0.0, 0.0], [4.0, -1.0, 0.0])));
}

#[test]
fn collinear_segments() {
    let x = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
    assert!(!seg_seg(&x, &seg([2.0, 0.0, 0.0], [3.0, 0.0, 0.0])));
    assert!(seg_seg(&x, &seg([1.0, 0.0, 0.0], [3.0, 0.0, 0.0])));
    assert!(seg_seg(&x, &seg([3.0, 0.0, 0.0], [1.0, 0.0, 0.0])));
    assert!(seg_seg(&x, &seg([3.0, 0.0, 0.0], [0.5, 0.0, 0.0])));
    // parallel, one unit apart
    assert!(!seg_seg(&x, &seg([0.0, 1.0, 0.0], [1.0, 1.0, 0.0])));

    let y = seg([-1.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
    assert!(!seg_seg(&y, &seg([3.0, 0.0, 0.0], [2.0, 0.0, 0.0])));
}

#[test]
fn segment_against_triangle() {
    let t = tri([0.0, 1.0, 0.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);

    assert!(seg_tri(&seg([0.25, 0.25, -1.0], [0.25, 0.25, 1.0]), &t));
    assert!(seg_tri(&seg([1.0, 0.0, -1.0], [1.0, 0.0, 1.0]), &t));
    assert!(!seg_tri(&seg([1.0, 1.0, -1.0], [1.0, 1.0, 1.0]), &t));
    assert!(!seg_tri(&seg([0.6, 0.6, -1.0], [0.6, 0.6, 1.0]), &t));
    assert!(!seg_tri(&seg([0.2, 0.2, 1.0], [0.2, 0.2, 2.0]), &t));
}

#[test]
fn segment_endpoint_on_triangle_face() {
    let t = tri([0.0, 1.0, 0.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
    assert!(seg_tri(&seg([0.25, 0.25, 0.0], [0.25, 0.25, 1.0]), &t));
}

#[test]
fn segment_in_triangle_plane() {
    let t = tri([0.0, 1.0, 0.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
    assert!(seg_tri(&seg([0.1, 0.1, 0.0], [0.2, 0.2, 0.0]), &t));
    assert!(seg_tri(&seg([-1.0, 0.25, 0.0], [2.0, 0.25, 0.0]), &t));
    assert!(!seg_tri(&seg([1.0, 1.0, 0.0], [2.0, 2.0, 0.0]), &t));
}

#[test]
fn primitive_dispatch_is_commutative() {
    let t = Primitive::classify(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
    let s = Primitive::classify(p(0.2, 0.2, -1.0), p(0.2, 0.2, 1.0), p(0.2, 0.2, 0.0));
    let m = Primitive::classify(p(0.2, 0.2, 0.0), p(0.2, 0.2, 0.0), p(0.2, 0.2, 0.0));
    let far = Primitive::classify(p(5.0, 5.0, 5.0), p(5.0, 5.0, 5.0), p(5.0, 5.0, 5.0));

    let all = [t, s, m];
    for a in &all {
        for b in &all {
            assert!(a.intersects(b));
        }
        assert!(!a.intersects(&far));
        assert!(!far.intersects(a));
    }
}

#[test]
fn reference_scenarios() {
    let o = p(0.0, 0.0, 0.0);
    assert!(!point_segment(&o, &seg([1.0, 0.0, 0.0], [0.0, -1.0, 0.0])));
    assert!(point_segment(&o, &seg([-6.0, -6.0, 0.0], [3.0, 3.0, 0.0])));
    assert!(point_point(&o, &o));

    let s = seg([-1.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
    assert!(!seg_seg(&s, &seg([2.0, 0.0, 0.0], [3.0, 0.0, 0.0])));
    assert!(seg_seg(&s, &seg([1.0, 0.0, 0.0], [1.0, 7.0, 0.0])));
}

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

//! Triangle-triangle overlap after Guigue and Devillers: plane-side
//! classification, a relabeling that isolates one vertex of each triangle,
//! then two `orient3d` tests on the relabeled vertices. Coplanar pairs go
//! through the planar decision trees.

use crate::{
    geometry::triangle::Triangle3,
    intersection::planar::{canonicalize_ccw, intersects_planar},
    kernel::{
        orientation::{PlaneSide, orient3d},
        projection::Projection,
    },
    numeric::Scalar,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rotation {
    Keep,
    Clockwise,
    Counterclockwise,
}

/// Relabeling of one triangle plus whether the other triangle's winding
/// must be reversed (`swap_qr`) to keep the sign convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Relabel {
    rotation: Rotation,
    flip_other: bool,
}

const fn relabel_action(rotation: Rotation, flip_other: bool) -> Relabel {
    Relabel {
        rotation,
        flip_other,
    }
}

/// Decision table on the sides of P, Q, R against the other plane.
fn relabel(p: PlaneSide, q: PlaneSide, r: PlaneSide) -> Relabel {
    use PlaneSide::{Above, Below, On};
    use Rotation::{Clockwise, Counterclockwise, Keep};

    match (p, q, r) {
        (Above, Above, On) | (Above, Above, Below) => relabel_action(Clockwise, true),
        (Above, On, Above) | (Above, Below, Above) => relabel_action(Counterclockwise, true),
        (Above, _, _) => relabel_action(Keep, false),

        (On, Above, Above) => relabel_action(Keep, true),
        (On, Above, On) | (On, Above, Below) => relabel_action(Counterclockwise, false),
        (On, On, Above) | (On, Below, Above) => relabel_action(Clockwise, false),
        (On, On, Below) => relabel_action(Clockwise, true),
        (On, Below, On) => relabel_action(Counterclockwise, true),
        (On, On, On) | (On, Below, Below) => relabel_action(Keep, false),

        (Below, Below, Above) | (Below, Below, On) => relabel_action(Clockwise, false),
        (Below, Above, Below) | (Below, On, Below) => relabel_action(Counterclockwise, false),
        (Below, Above, Above)
        | (Below, On, On)
        | (Below, Below, Below)
        | (Below, Above, On)
        | (Below, On, Above) => relabel_action(Keep, true),
    }
}

/// Applies `action` to `tri`; a flip reverses `other` and swaps the cached
/// sides of its Q and R vertices along with it.
fn apply<T: Scalar>(
    action: Relabel,
    tri: &mut Triangle3<T>,
    other: &mut Triangle3<T>,
    other_sides: &mut [PlaneSide; 3],
) {
    match action.rotation {
        Rotation::Keep => {}
        Rotation::Clockwise => tri.swap_clockwise(),
        Rotation::Counterclockwise => tri.swap_counterclockwise(),
    }
    if action.flip_other {
        other.swap_qr();
        other_sides.swap(1, 2);
    }
}

/// Sides of `tri`'s vertices against the plane of `plane`.
fn sides<T: Scalar>(plane: &Triangle3<T>, tri: &Triangle3<T>) -> [PlaneSide; 3] {
    let (a, b, c) = (plane.p(), plane.q(), plane.r());
    [
        orient3d(a, b, c, tri.p()),
        orient3d(a, b, c, tri.q()),
        orient3d(a, b, c, tri.r()),
    ]
}

fn all_same(s: &[PlaneSide; 3]) -> bool {
    s[0] == s[1] && s[1] == s[2]
}

pub fn triangle_triangle<T: Scalar>(t1: &Triangle3<T>, t2: &Triangle3<T>) -> bool {
    let mut sides1 = sides(t2, t1);
    if all_same(&sides1) {
        return sides1[0] == PlaneSide::On && coplanar_overlap(t1, t2);
    }

    let mut sides2 = sides(t1, t2);
    if all_same(&sides2) {
        // t2 lies in t1's plane although t1 straddles t2's: near-degenerate
        // input where tolerances disagree. Settle it in the plane.
        return sides2[0] == PlaneSide::On && coplanar_overlap(t1, t2);
    }

    let (mut a, mut b) = (*t1, *t2);

    apply(relabel(sides1[0], sides1[1], sides1[2]), &mut a, &mut b, &mut sides2);
    sides1 = sides(&b, &a);
    apply(relabel(sides2[0], sides2[1], sides2[2]), &mut b, &mut a, &mut sides1);

    let p1 = sides1[0];
    let p2 = orient3d(a.p(), a.q(), a.r(), b.p());
    if p1 == PlaneSide::On && p2 == PlaneSide::On {
        return a.p().approx_eq(b.p());
    }

    let kj = orient3d(a.p(), a.q(), b.p(), b.q());
    let li = orient3d(a.p(), a.r(), b.p(), b.r());
    li != PlaneSide::Below && kj != PlaneSide::Above
}

/// Both triangles in one plane; the frame comes from `t1`.
fn coplanar_overlap<T: Scalar>(t1: &Triangle3<T>, t2: &Triangle3<T>) -> bool {
    let projection = Projection::from_triangle(t1);
    let a = canonicalize_ccw(projection.triangle(t1));
    let b = canonicalize_ccw(projection.triangle(t2));
    intersects_planar(&a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PlaneSide::*;

    #[test]
    fn table_isolates_p() {
        // P alone on its side: nothing to rotate
        assert_eq!(relabel(Above, Below, Below), relabel_action(Rotation::Keep, false));
        // Q alone above: rotate it into P
        assert_eq!(
            relabel(Below, Above, Below),
            relabel_action(Rotation::Counterclockwise, false)
        );
        assert_eq!(relabel(On, On, Below), relabel_action(Rotation::Clockwise, true));
    }
}

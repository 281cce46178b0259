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

//! Free vectors with cancellation snapping.
//!
//! Every constructor and arithmetic operator replaces a component whose
//! operands (almost) cancel by an exact zero, so roundoff left over from a
//! subtraction of near-equal coordinates never reaches a sign test.

use std::{
    array::from_fn,
    ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign},
};

use crate::{
    geometry::point::Point,
    numeric::{
        Scalar,
        tolerance::{are_equal, greater, is_zero, less},
    },
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize>(pub Point<T, N>);

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;

#[inline(always)]
fn snapped_sum<T: Scalar>(a: T, b: T) -> T {
    if are_equal(a, -b) { T::zero() } else { a + b }
}

#[inline(always)]
fn snapped_diff<T: Scalar>(a: T, b: T) -> T {
    if are_equal(a, b) { T::zero() } else { a - b }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn from_coords(coords: [T; N]) -> Self {
        Vector(Point::from_coords(coords))
    }

    pub fn zero() -> Self {
        Vector(Point::default())
    }

    /// Vector from `p` to `q`; components of near-equal coordinates are exactly zero.
    pub fn between(p: &Point<T, N>, q: &Point<T, N>) -> Self {
        Self::from_coords(from_fn(|i| snapped_diff(q[i], p[i])))
    }

    pub fn coords(&self) -> &[T; N] {
        &self.0.coords
    }

    pub fn dot(&self, other: &Self) -> T {
        if N == 0 {
            return T::zero();
        }
        let mut acc = self[0] * other[0];
        for i in 1..N {
            acc = snapped_sum(acc, self[i] * other[i]);
        }
        acc
    }

    /// Squared length.
    pub fn norm(&self) -> T {
        self.0.coords.iter().fold(T::zero(), |acc, c| acc + *c * *c)
    }

    /// Euclidean length.
    pub fn module(&self) -> T {
        self.norm().sqrt()
    }

    /// Unit vector in the same direction; a zero vector is returned unchanged.
    pub fn normalized(&self) -> Self {
        if self.is_zero() {
            return *self;
        }
        *self / self.module()
    }

    pub fn is_zero(&self) -> bool {
        self.0.coords.iter().all(|c| is_zero(*c))
    }
}

impl<T: Scalar> Vector<T, 2> {
    pub fn new(x: T, y: T) -> Self {
        Self::from_coords([x, y])
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::from_coords([x, y, z])
    }

    pub fn cross(&self, other: &Self) -> Self {
        let (l, r) = (self, other);
        Self::new(
            snapped_diff(l[1] * r[2], l[2] * r[1]),
            snapped_diff(l[2] * r[0], l[0] * r[2]),
            snapped_diff(l[0] * r[1], l[1] * r[0]),
        )
    }

    /// `self · (b × c)`, the signed volume spanned by the three vectors.
    pub fn triple(&self, b: &Self, c: &Self) -> T {
        self.dot(&b.cross(c))
    }
}

pub fn triple_product<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>, c: &Vector3<T>) -> T {
    a.triple(b, c)
}

pub fn are_collinear<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>) -> bool {
    a.cross(b).is_zero()
}

pub fn are_coplanar<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>, c: &Vector3<T>) -> bool {
    is_zero(a.triple(b, c))
}

pub fn are_orthogonal<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> bool {
    is_zero(a.dot(b))
}

/// Same direction, compared through the angle: `a·b == |a||b|`.
pub fn are_parallel<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> bool {
    are_equal(a.dot(b), a.module() * b.module())
}

pub fn are_antiparallel<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> bool {
    are_equal(-a.dot(b), a.module() * b.module())
}

/// Collinear and not pointing opposite ways. A zero vector is codirectional
/// with everything.
pub fn are_codirectional<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>) -> bool {
    are_collinear(a, b) && !less(a.dot(b), T::zero())
}

/// Collinear and not pointing the same way. A zero vector is oppositely
/// directed to everything.
pub fn are_oppositely_directed<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>) -> bool {
    are_collinear(a, b) && !greater(a.dot(b), T::zero())
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0.coords[i]
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self[i] = snapped_sum(self[i], rhs[i]);
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self[i] = snapped_diff(self[i], rhs[i]);
        }
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_coords(from_fn(|i| -self[i]))
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;
    fn mul(self, k: T) -> Self {
        Self::from_coords(from_fn(|i| self[i] * k))
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;
    fn div(self, k: T) -> Self {
        Self::from_coords(from_fn(|i| self[i] / k))
    }
}

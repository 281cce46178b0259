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

//! Epsilon-based comparison of scalars.
//!
//! The ordering predicates are a strict float comparison *and* not-equal,
//! so `less(a, b)` and `are_equal(a, b)` never hold together.

use crate::numeric::scalar::Scalar;

/// Absolute and relative epsilons used by every comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance<T: Scalar> {
    pub absolute: T,
    pub relative: T,
}

impl<T: Scalar> Default for Tolerance<T> {
    fn default() -> Self {
        Self {
            absolute: T::tolerance(),
            relative: T::relative_tolerance(),
        }
    }
}

impl<T: Scalar> Tolerance<T> {
    pub fn new(absolute: T, relative: T) -> Self {
        Self { absolute, relative }
    }

    pub fn equal(&self, a: T, b: T) -> bool {
        let diff = (a - b).abs();
        if diff < self.absolute {
            return true;
        }
        diff < a.abs().max(b.abs()) * self.relative
    }

    pub fn is_zero(&self, a: T) -> bool {
        self.equal(a, T::zero())
    }

    pub fn less(&self, a: T, b: T) -> bool {
        a < b && !self.equal(a, b)
    }

    pub fn less_equal(&self, a: T, b: T) -> bool {
        a < b || self.equal(a, b)
    }

    pub fn greater(&self, a: T, b: T) -> bool {
        a > b && !self.equal(a, b)
    }

    pub fn greater_equal(&self, a: T, b: T) -> bool {
        a > b || self.equal(a, b)
    }
}

#[inline(always)]
pub fn are_equal<T: Scalar>(a: T, b: T) -> bool {
    Tolerance::default().equal(a, b)
}

#[inline(always)]
pub fn is_zero<T: Scalar>(a: T) -> bool {
    Tolerance::default().is_zero(a)
}

#[inline(always)]
pub fn less<T: Scalar>(a: T, b: T) -> bool {
    Tolerance::default().less(a, b)
}

#[inline(always)]
pub fn less_equal<T: Scalar>(a: T, b: T) -> bool {
    Tolerance::default().less_equal(a, b)
}

#[inline(always)]
pub fn greater<T: Scalar>(a: T, b: T) -> bool {
    Tolerance::default().greater(a, b)
}

#[inline(always)]
pub fn greater_equal<T: Scalar>(a: T, b: T) -> bool {
    Tolerance::default().greater_equal(a, b)
}

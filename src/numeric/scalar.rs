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

use num_traits::Float;

use std::fmt::{Debug, Display};

/// Floating-point coordinate type shared by every geometric type in the crate.
///
/// The tolerances returned here are the defaults of [`Tolerance`](crate::numeric::tolerance::Tolerance);
/// all predicates compare through them rather than with raw `==`.
pub trait Scalar: Float + Debug + Display + Default + Send + Sync + 'static {
    /// Absolute epsilon: two values closer than this are equal.
    fn tolerance() -> Self;

    /// Relative epsilon, scaled by the larger magnitude of the compared pair.
    fn relative_tolerance() -> Self;

    fn two() -> Self {
        Self::one() + Self::one()
    }

    fn half() -> Self {
        Self::one() / Self::two()
    }
}

impl Scalar for f64 {
    fn tolerance() -> Self {
        1e-6
    }

    fn relative_tolerance() -> Self {
        1e-6
    }
}

impl Scalar for f32 {
    fn tolerance() -> Self {
        1e-6
    }

    fn relative_tolerance() -> Self {
        1e-6
    }
}

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn constants_are_exact() {
        assert_eq!(<f64 as Scalar>::half(), 0.5);
        assert_eq!(<f32 as Scalar>::two(), 2.0);
    }
}

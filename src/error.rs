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

use thiserror::Error;

/// Errors raised while building primitives, spatial indices, or reading input.
///
/// Intersection predicates themselves are total and never produce these.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A segment was requested between two coincident points.
    #[error("degenerate segment: endpoints coincide")]
    DegenerateSegment,

    /// A spatial index was requested over zero shapes.
    #[error("cannot build a spatial index over an empty shape set")]
    EmptyInput,

    /// A point carries a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    InvalidPoint { index: usize },

    /// Shapes are read as point triples; the flat list must divide by three.
    #[error("point count {count} is not a multiple of 3")]
    PointCount { count: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot parse token {token:?}")]
    Parse { token: String },

    #[error("unexpected end of input: expected {expected} values, found {found}")]
    UnexpectedEof { expected: usize, found: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeometryError>;

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

use log::{debug, warn};

use crate::{
    error::{GeometryError, Result},
    geometry::{aabb::Aabb, point::Point3, primitive::Primitive, triangle::Species},
    numeric::Scalar,
};

/// A primitive with its bounding box and the index reported in results.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape<T: Scalar> {
    index: usize,
    primitive: Primitive<T>,
    aabb: Aabb<T>,
}

impl<T: Scalar> Shape<T> {
    pub fn new(index: usize, primitive: Primitive<T>) -> Self {
        Shape {
            index,
            aabb: primitive.aabb(),
            primitive,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn primitive(&self) -> &Primitive<T> {
        &self.primitive
    }

    pub fn aabb(&self) -> &Aabb<T> {
        &self.aabb
    }

    /// Bounding boxes first; the exact predicate runs only when they overlap.
    pub fn intersects(&self, other: &Shape<T>) -> bool {
        self.aabb.overlaps(&other.aabb) && self.primitive.intersects(&other.primitive)
    }
}

/// Wraps primitives in shapes indexed by ingestion order, starting at 0.
pub fn build_shape_set<T, I>(primitives: I) -> Vec<Shape<T>>
where
    T: Scalar,
    I: IntoIterator<Item = Primitive<T>>,
{
    primitives
        .into_iter()
        .enumerate()
        .map(|(index, primitive)| Shape::new(index, primitive))
        .collect()
}

/// Reads consecutive point triples as shapes.
///
/// Fails on a non-finite coordinate or on a point count that does not
/// divide by three. Degenerate triples are kept as points or segments.
pub fn shapes_from_points<T: Scalar>(points: &[Point3<T>]) -> Result<Vec<Shape<T>>> {
    if points.len() % 3 != 0 {
        return Err(GeometryError::PointCount {
            count: points.len(),
        });
    }
    if let Some(index) = points.iter().position(|p| !p.is_valid()) {
        return Err(GeometryError::InvalidPoint { index });
    }

    let shapes = build_shape_set(
        points
            .chunks_exact(3)
            .map(|t| Primitive::classify(t[0], t[1], t[2])),
    );

    let degenerate = shapes
        .iter()
        .filter(|s| s.primitive().species() != Species::Triangle)
        .count();
    if degenerate > 0 {
        warn!(
            "{degenerate} of {} input triangles are degenerate (points or segments)",
            shapes.len()
        );
    }
    debug!("ingested {} shapes from {} points", shapes.len(), points.len());

    Ok(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_ingestion_order() {
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(5.0, 5.0, 5.0),
            Point3::new(5.0, 5.0, 5.0),
            Point3::new(5.0, 5.0, 5.0),
        ];
        let shapes = shapes_from_points(&pts).unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].index(), 0);
        assert_eq!(shapes[1].index(), 1);
        assert_eq!(shapes[1].primitive().species(), Species::Point);
    }

    #[test]
    fn rejects_bad_input() {
        let two = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        assert!(matches!(
            shapes_from_points(&two),
            Err(GeometryError::PointCount { count: 2 })
        ));

        let nan = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, f64::NAN, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        assert!(matches!(
            shapes_from_points(&nan),
            Err(GeometryError::InvalidPoint { index: 1 })
        ));
    }
}

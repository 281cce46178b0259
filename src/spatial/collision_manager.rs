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

use std::collections::BTreeSet;

use log::debug;

use crate::{
    error::Result,
    numeric::Scalar,
    spatial::{
        octree::{Octree, OctreeConfig},
        shape::Shape,
    },
};

/// Finds every shape that intersects at least one other shape.
///
/// Owns the octree built from its input; results survive until the next
/// [`intersect_all`](Self::intersect_all).
#[derive(Clone, Debug)]
pub struct CollisionManager<T: Scalar> {
    octree: Octree<T>,
    intersecting: BTreeSet<usize>,
    pair_tests: usize,
}

impl<T: Scalar> CollisionManager<T> {
    /// Fails with `EmptyInput` when `shapes` is empty.
    pub fn new(shapes: Vec<Shape<T>>) -> Result<Self> {
        Self::with_config(shapes, OctreeConfig::default())
    }

    pub fn with_config(shapes: Vec<Shape<T>>, config: OctreeConfig) -> Result<Self> {
        Ok(Self::from_octree(Octree::with_config(shapes, config)?))
    }

    pub fn from_octree(octree: Octree<T>) -> Self {
        CollisionManager {
            octree,
            intersecting: BTreeSet::new(),
            pair_tests: 0,
        }
    }

    pub fn octree(&self) -> &Octree<T> {
        &self.octree
    }

    /// Recomputes the result set from scratch.
    pub fn intersect_all(&mut self) {
        let mut traversal = Traversal {
            octree: &self.octree,
            ancestors: Vec::with_capacity(self.octree.height()),
            found: BTreeSet::new(),
            pair_tests: 0,
        };
        traversal.visit(self.octree.root_id());

        debug!(
            "{} pair tests over {} shapes, {} intersecting",
            traversal.pair_tests,
            self.octree.len(),
            traversal.found.len()
        );
        self.pair_tests = traversal.pair_tests;
        self.intersecting = traversal.found;
    }

    /// Indices of intersecting shapes, ascending.
    pub fn intersecting_indices(&self) -> Vec<usize> {
        self.intersecting.iter().copied().collect()
    }

    pub fn intersecting(&self) -> &BTreeSet<usize> {
        &self.intersecting
    }

    /// Shape pairs handed to `Shape::intersects` by the last run.
    pub fn pair_tests(&self) -> usize {
        self.pair_tests
    }
}

struct Traversal<'a, T: Scalar> {
    octree: &'a Octree<T>,
    /// Nodes from the root down to the one being visited, inclusive.
    ancestors: Vec<usize>,
    found: BTreeSet<usize>,
    pair_tests: usize,
}

impl<T: Scalar> Traversal<'_, T> {
    fn visit(&mut self, id: usize) {
        let octree = self.octree;
        let Some(node) = octree.node(id) else {
            return;
        };
        self.ancestors.push(id);

        for k in 0..self.ancestors.len() {
            let ancestor_id = self.ancestors[k];
            let Some(ancestor) = octree.node(ancestor_id) else {
                continue;
            };

            for (i, shape) in node.shapes().iter().enumerate() {
                // Within one node each pair is tested once, never a shape with itself.
                let others = if ancestor_id == id {
                    &ancestor.shapes()[..i]
                } else {
                    ancestor.shapes()
                };
                for other in others {
                    self.pair_tests += 1;
                    if shape.intersects(other) {
                        self.found.insert(shape.index());
                        self.found.insert(other.index());
                    }
                }
            }
        }

        for child in node.children().iter().flatten() {
            self.visit(*child);
        }
        self.ancestors.pop();
    }
}

/// All-pairs reference: what [`CollisionManager::intersecting_indices`]
/// must return for the same shapes.
pub fn brute_force_intersections<T: Scalar>(shapes: &[Shape<T>]) -> Vec<usize> {
    let mut found = BTreeSet::new();
    for (i, a) in shapes.iter().enumerate() {
        for b in &shapes[i + 1..] {
            if a.intersects(b) {
                found.insert(a.index());
                found.insert(b.index());
            }
        }
    }
    found.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{point::Point3, primitive::Primitive};

    fn point(i: usize, x: f64) -> Shape<f64> {
        Shape::new(i, Primitive::Point(Point3::new(x, 0.0, 0.0)))
    }

    #[test]
    fn duplicate_values_are_distinct_shapes() {
        let mut manager =
            CollisionManager::new(vec![point(0, 1.0), point(1, 1.0), point(2, 3.0)]).unwrap();
        manager.intersect_all();
        assert_eq!(manager.intersecting_indices(), vec![0, 1]);
        assert_eq!(manager.pair_tests(), 3);
    }

    #[test]
    fn rerun_is_idempotent() {
        let mut manager = CollisionManager::new(vec![point(0, 0.0), point(1, 0.0)]).unwrap();
        manager.intersect_all();
        manager.intersect_all();
        assert_eq!(manager.intersecting_indices(), vec![0, 1]);
    }

    #[test]
    fn single_shape_intersects_nothing() {
        let mut manager = CollisionManager::new(vec![point(0, 0.0)]).unwrap();
        manager.intersect_all();
        assert!(manager.intersecting_indices().is_empty());
    }
}

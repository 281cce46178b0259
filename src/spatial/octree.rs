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

//! Static octree over shape bounding boxes.
//!
//! All nodes are allocated up front in one arena, down to a height derived
//! from the shape count. Nodes refer to their children by arena index.
//!
//! A shape descends into a child only if its box lies strictly inside that
//! child's octant; a box touching or crossing any of the node's center planes
//! stays at the node. Two shapes stored in disjoint subtrees are therefore
//! separated by at least one center plane.

use std::array::from_fn;

use log::{debug, trace};

use crate::{
    error::{GeometryError, Result},
    geometry::{aabb::Aabb, point::Point3},
    numeric::{
        Scalar,
        tolerance::{greater, less_equal},
    },
    spatial::shape::Shape,
};

/// Heights above this would need an arena of more than 10^8 nodes.
pub const MAX_SUPPORTED_HEIGHT: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OctreeConfig {
    /// Upper bound on the number of levels, root included.
    pub max_height: usize,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        OctreeConfig { max_height: 6 }
    }
}

impl OctreeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_height == 0 || self.max_height > MAX_SUPPORTED_HEIGHT {
            return Err(GeometryError::InvalidConfig(format!(
                "octree max height must be in 1..={MAX_SUPPORTED_HEIGHT}, got {}",
                self.max_height
            )));
        }
        Ok(())
    }

    /// `floor(log10(1 + n))` clamped to `1..=max_height`.
    pub fn height_for(&self, n_shapes: usize) -> usize {
        let mut digits = 0;
        let mut m = n_shapes.saturating_add(1);
        while m >= 10 {
            m /= 10;
            digits += 1;
        }
        digits.clamp(1, self.max_height.max(1))
    }
}

/// Number of nodes in a complete octree with `height` levels.
pub fn node_count_for_height(height: usize) -> usize {
    (0..height).map(|level| 8usize.pow(level as u32)).sum()
}

#[derive(Clone, Debug)]
pub struct Node<T: Scalar> {
    /// Center of the node's cube.
    center: Point3<T>,
    /// Half of the cube's edge length.
    halfwidth: T,
    /// Child `i` covers the octant whose axis `k` lies on the positive side
    /// iff bit `k` of `i` is set.
    children: [Option<usize>; 8],
    /// Shapes that stop at this node.
    shapes: Vec<Shape<T>>,
}

impl<T: Scalar> Node<T> {
    fn new(center: Point3<T>, halfwidth: T) -> Self {
        Node {
            center,
            halfwidth,
            children: [None; 8],
            shapes: Vec::new(),
        }
    }

    pub fn center(&self) -> &Point3<T> {
        &self.center
    }

    pub fn halfwidth(&self) -> T {
        self.halfwidth
    }

    pub fn children(&self) -> &[Option<usize>; 8] {
        &self.children
    }

    pub fn shapes(&self) -> &[Shape<T>] {
        &self.shapes
    }

    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Child octant that fully contains `aabb`, if any.
    fn octant_of(&self, aabb: &Aabb<T>) -> Option<usize> {
        let mut index = 0;
        for axis in 0..3 {
            let delta = aabb.center()[axis] - self.center[axis];
            if less_equal(delta.abs(), aabb.halfwidth(axis)) {
                return None;
            }
            if greater(delta, T::zero()) {
                index |= 1 << axis;
            }
        }
        Some(index)
    }
}

#[derive(Clone, Debug)]
pub struct Octree<T: Scalar> {
    nodes: Vec<Node<T>>,
    height: usize,
    len: usize,
}

impl<T: Scalar> Octree<T> {
    pub fn new(shapes: Vec<Shape<T>>) -> Result<Self> {
        Self::with_config(shapes, OctreeConfig::default())
    }

    pub fn with_config(shapes: Vec<Shape<T>>, config: OctreeConfig) -> Result<Self> {
        config.validate()?;

        let mut boxes = shapes.iter().map(Shape::aabb);
        let first = boxes.next().ok_or(GeometryError::EmptyInput)?;
        let bounds = boxes.fold(*first, |acc, b| acc.union(b));

        let height = config.height_for(shapes.len());
        let capacity = node_count_for_height(height);

        // Cube over [lo, hi] on every axis.
        let lo = (0..3).map(|i| bounds.min(i)).fold(T::infinity(), T::min);
        let hi = (0..3).map(|i| bounds.max(i)).fold(T::neg_infinity(), T::max);
        let center = Point3::from_coords([(lo + hi) * T::half(); 3]);
        let halfwidth = (hi - lo) * T::half();

        let mut tree = Octree {
            nodes: Vec::with_capacity(capacity),
            height,
            len: 0,
        };
        tree.build_subtree(center, halfwidth, height);
        debug_assert_eq!(tree.nodes.len(), capacity);

        debug!(
            "octree: {} shapes, height {height}, {capacity} nodes, root cube {center:?} ± {halfwidth}",
            shapes.len()
        );

        for shape in shapes {
            tree.insert(shape);
        }
        Ok(tree)
    }

    fn build_subtree(&mut self, center: Point3<T>, halfwidth: T, levels: usize) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node::new(center, halfwidth));

        if levels > 1 {
            let step = halfwidth * T::half();
            for i in 0..8 {
                let child_center = Point3::from_coords(from_fn(|axis| {
                    if i & (1 << axis) != 0 {
                        center[axis] + step
                    } else {
                        center[axis] - step
                    }
                }));
                let child = self.build_subtree(child_center, step, levels - 1);
                self.nodes[id].children[i] = Some(child);
            }
        }
        id
    }

    /// Stores `shape` at the deepest node whose octant fully contains its box.
    /// The tree layout is never changed.
    pub fn insert(&mut self, shape: Shape<T>) {
        let mut id = 0;
        let mut depth = 0;
        while let Some(child) = self.nodes[id]
            .octant_of(shape.aabb())
            .and_then(|octant| self.nodes[id].children[octant])
        {
            id = child;
            depth += 1;
        }
        trace!("shape {} -> node {id} (depth {depth})", shape.index());
        self.nodes[id].shapes.push(shape);
        self.len += 1;
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of stored shapes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub const fn root_id(&self) -> usize {
        0
    }

    pub fn root(&self) -> &Node<T> {
        &self.nodes[0]
    }

    pub fn node(&self, id: usize) -> Option<&Node<T>> {
        self.nodes.get(id)
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape<T>> {
        self.nodes.iter().flat_map(|n| n.shapes.iter())
    }
}

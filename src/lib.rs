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

//! Pairwise intersection detection for sets of 3D points, segments and
//! triangles, pruned by a static octree.
//!
//! ```no_run
//! use collide3d::{CollisionManager, geometry::Point3, shapes_from_points};
//!
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.2, 0.2, -1.0), Point3::new(0.2, 0.2, 1.0), Point3::new(0.3, 0.3, 1.0),
//! ];
//! let mut manager = CollisionManager::new(shapes_from_points(&points)?)?;
//! manager.intersect_all();
//! assert_eq!(manager.intersecting_indices(), vec![0, 1]);
//! # Ok::<(), collide3d::GeometryError>(())
//! ```

pub mod error;
pub mod generator;
pub mod geometry;
pub mod intersection;
pub mod io;
pub mod kernel;
pub mod numeric;
pub mod spatial;

pub use error::{GeometryError, Result};
pub use spatial::{
    CollisionManager, Octree, OctreeConfig, Shape, brute_force_intersections, build_shape_set,
    shapes_from_points,
};

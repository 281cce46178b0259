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

//! Random triangle soups for benchmarks and cross-checks.

use log::debug;
use rand::Rng;

use crate::{
    error::{GeometryError, Result},
    geometry::point::Point3,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub n_shapes: usize,
    /// Shape centers are drawn from `[-world_size, world_size]` on every axis.
    pub world_size: f64,
    /// Bounds of the per-axis half-extent of each shape's box.
    pub min_size: f64,
    pub max_size: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            n_shapes: 1000,
            world_size: 100.0,
            min_size: 0.5,
            max_size: 5.0,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<()> {
        if self.n_shapes == 0 {
            return Err(GeometryError::InvalidConfig(
                "number of shapes must be positive".into(),
            ));
        }
        for (name, v) in [
            ("world size", self.world_size),
            ("min size", self.min_size),
            ("max size", self.max_size),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(GeometryError::InvalidConfig(format!(
                    "{name} must be positive, got {v}"
                )));
            }
        }
        if self.min_size >= self.max_size {
            return Err(GeometryError::InvalidConfig(format!(
                "min size {} must be below max size {}",
                self.min_size, self.max_size
            )));
        }
        Ok(())
    }
}

/// Three points per shape, uniform inside a random box around a random center.
pub fn generate_points<R: Rng>(config: &SceneConfig, rng: &mut R) -> Result<Vec<Point3<f64>>> {
    config.validate()?;

    let mut points = Vec::with_capacity(config.n_shapes * 3);
    for _ in 0..config.n_shapes {
        let center: [f64; 3] =
            std::array::from_fn(|_| rng.random_range(-config.world_size..=config.world_size));
        let half: [f64; 3] =
            std::array::from_fn(|_| rng.random_range(config.min_size..=config.max_size));

        for _ in 0..3 {
            let coords = std::array::from_fn(|i| {
                rng.random_range(center[i] - half[i]..=center[i] + half[i])
            });
            points.push(Point3::from_coords(coords));
        }
    }
    debug!("generated {} shapes ({config:?})", config.n_shapes);
    Ok(points)
}

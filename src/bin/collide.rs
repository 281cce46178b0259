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

use std::{io, path::PathBuf, process, time::Instant};

use clap::Parser;
use log::{error, info};

use collide3d::{
    CollisionManager, OctreeConfig, Result, brute_force_intersections,
    io::{read_points, read_points_file, write_indices},
    shapes_from_points,
};

#[derive(Parser, Debug)]
#[command(
    name = "collide",
    about = "Print the indices of all triangles that intersect another one"
)]
struct Cli {
    /// Triangle stream (count, then count x 9 coordinates); stdin when omitted
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Upper bound on the octree height
    #[arg(long, default_value_t = 6)]
    max_height: usize,

    /// Also run the all-pairs check and compare the results
    #[arg(long)]
    verify: bool,
}

/// Returns false when `--verify` found a mismatch.
fn run(cli: &Cli) -> Result<bool> {
    let start = Instant::now();
    let points = match &cli.input {
        Some(path) => read_points_file::<f64, _>(path)?,
        None => read_points(io::stdin().lock())?,
    };
    info!("read {} points in {:?}", points.len(), start.elapsed());

    let shapes = shapes_from_points(&points)?;
    let reference = cli.verify.then(|| shapes.clone());

    let start = Instant::now();
    let config = OctreeConfig {
        max_height: cli.max_height,
    };
    let mut manager = CollisionManager::with_config(shapes, config)?;
    info!(
        "octree of height {} built in {:?}",
        manager.octree().height(),
        start.elapsed()
    );

    let start = Instant::now();
    manager.intersect_all();
    let indices = manager.intersecting_indices();
    info!(
        "{} intersecting shapes found in {:?} ({} pair tests)",
        indices.len(),
        start.elapsed(),
        manager.pair_tests()
    );

    let mut consistent = true;
    if let Some(shapes) = reference {
        let start = Instant::now();
        let expected = brute_force_intersections(&shapes);
        info!("all-pairs check took {:?}", start.elapsed());
        if expected != indices {
            error!(
                "octree reports {} intersecting shapes, all-pairs check {}",
                indices.len(),
                expected.len()
            );
            consistent = false;
        }
    }

    write_indices(io::stdout().lock(), &indices)?;
    Ok(consistent)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(2),
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    }
}

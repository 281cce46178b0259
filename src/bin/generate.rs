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

use std::{io, path::PathBuf, process};

use clap::Parser;
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};

use collide3d::{
    Result,
    generator::{SceneConfig, generate_points},
    io::{write_points, write_points_file},
};

#[derive(Parser, Debug)]
#[command(
    name = "generate",
    about = "Write a random triangle soup in the point-stream format"
)]
struct Cli {
    /// Number of triangles
    #[arg(long, default_value_t = 1000)]
    shapes: usize,

    /// Triangle centers lie in [-world-size, world-size] on every axis
    #[arg(long, default_value_t = 100.0)]
    world_size: f64,

    /// Smallest half-extent of a triangle's box
    #[arg(long, default_value_t = 0.5)]
    min_size: f64,

    /// Largest half-extent of a triangle's box
    #[arg(long, default_value_t = 5.0)]
    max_size: f64,

    /// Seed for reproducible output; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Destination file; stdout when omitted
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<()> {
    let config = SceneConfig {
        n_shapes: cli.shapes,
        world_size: cli.world_size,
        min_size: cli.min_size,
        max_size: cli.max_size,
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let points = generate_points(&config, &mut rng)?;
    match &cli.output {
        Some(path) => write_points_file(path, &points)?,
        None => write_points(io::stdout().lock(), &points)?,
    }
    info!("wrote {} triangles", config.n_shapes);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        error!("{err}");
        process::exit(1);
    }
}

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

use num_traits::NumCast;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    error::{GeometryError, Result},
    geometry::point::Point3,
    numeric::Scalar,
};

/// Read a triangle stream.
/// Format (whitespace separated, `#` starts a comment):
///   <count>
///   count × "x1 y1 z1 x2 y2 z2 x3 y3 z3"
/// The count is the number of triangles, so `3 * count` points are returned.
/// Tokens after the last triangle are ignored.
pub fn read_points<T: Scalar, R: BufRead>(reader: R) -> Result<Vec<Point3<T>>> {
    let toks = tokenize(reader)?;
    let mut it = toks.iter();

    let count_tok = it.next().ok_or(GeometryError::UnexpectedEof {
        expected: 1,
        found: 0,
    })?;
    let count: usize = count_tok.parse().map_err(|_| GeometryError::Parse {
        token: count_tok.clone(),
    })?;

    let n_points = count.saturating_mul(3);
    let expected = n_points.saturating_mul(3);
    let available = toks.len() - 1;
    if available < expected {
        return Err(GeometryError::UnexpectedEof {
            expected,
            found: available,
        });
    }

    let mut points = Vec::with_capacity(n_points);
    for _ in 0..n_points {
        let x = parse_coord(it.next())?;
        let y = parse_coord(it.next())?;
        let z = parse_coord(it.next())?;
        points.push(Point3::new(x, y, z));
    }
    Ok(points)
}

pub fn read_points_file<T: Scalar, P: AsRef<Path>>(path: P) -> Result<Vec<Point3<T>>> {
    read_points(BufReader::new(File::open(path)?))
}

/// Write points in the format accepted by [`read_points`], one triangle
/// per line.
pub fn write_points<T: Scalar, W: Write>(writer: W, points: &[Point3<T>]) -> Result<()> {
    if points.len() % 3 != 0 {
        return Err(GeometryError::PointCount {
            count: points.len(),
        });
    }
    let mut out = BufWriter::new(writer);
    writeln!(out, "{}", points.len() / 3)?;
    for t in points.chunks_exact(3) {
        writeln!(
            out,
            "{} {} {} {} {} {} {} {} {}",
            t[0].x(),
            t[0].y(),
            t[0].z(),
            t[1].x(),
            t[1].y(),
            t[1].z(),
            t[2].x(),
            t[2].y(),
            t[2].z()
        )?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_points_file<T: Scalar, P: AsRef<Path>>(path: P, points: &[Point3<T>]) -> Result<()> {
    write_points(File::create(path)?, points)
}

/// Space-separated indices on one line.
pub fn write_indices<W: Write>(mut writer: W, indices: &[usize]) -> Result<()> {
    let line = indices
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(writer, "{line}")?;
    writer.flush()?;
    Ok(())
}

fn tokenize<R: BufRead>(r: R) -> Result<Vec<String>> {
    let mut toks = Vec::new();
    for line in r.lines() {
        let l = line?;
        let trimmed = l.split('#').next().unwrap_or("").trim();
        if trimmed.is_empty() {
            continue;
        }
        toks.extend(trimmed.split_whitespace().map(str::to_string));
    }
    Ok(toks)
}

fn parse_coord<T: Scalar>(tok: Option<&String>) -> Result<T> {
    let tok = tok.ok_or(GeometryError::UnexpectedEof {
        expected: 1,
        found: 0,
    })?;
    tok.parse::<f64>()
        .ok()
        .and_then(<T as NumCast>::from)
        .ok_or_else(|| GeometryError::Parse { token: tok.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_multiline_stream() {
        let input = "1 # one triangle\n0 0 0\n1.5 -2\n3e0 0 1 0\n";
        let pts: Vec<Point3<f64>> = read_points(Cursor::new(input)).unwrap();
        assert_eq!(
            pts,
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.5, -2.0, 3.0),
                Point3::new(0.0, 1.0, 0.0)
            ]
        );
    }

    #[test]
    fn short_stream_is_an_error() {
        let err = read_points::<f64, _>(Cursor::new("1\n0 0 0 1")).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::UnexpectedEof {
                expected: 9,
                found: 4
            }
        ));
    }

    #[test]
    fn bad_token_is_reported() {
        let err = read_points::<f32, _>(Cursor::new("1\n0 zero 0 1 0 0 0 1 0")).unwrap_err();
        assert!(matches!(err, GeometryError::Parse { token } if token == "zero"));
    }

    #[test]
    fn writes_one_triangle_per_line() {
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.5),
        ];
        let mut buf = Vec::new();
        write_points(&mut buf, &pts).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1\n0 0 0 1 0 0 0 1 0.5\n");

        let err = write_points(Vec::new(), &pts[..2]).unwrap_err();
        assert!(matches!(err, GeometryError::PointCount { count: 2 }));
    }
}

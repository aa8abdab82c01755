// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Writers producing the formats read by `loading`.
//!
//! Lines are joined by `\n` without a trailing newline.

use cleave_core::{geometry::point::Point, num::decimal::DecimalString};
use std::io::Write;

/// Fractional digits written per coordinate unless told otherwise.
pub const DEFAULT_POINT_PRECISION: usize = 2;

/// Writes one `<x>,<y>` line per point with `precision` fractional digits.
pub fn write_point_set<W: Write>(
    w: &mut W,
    points: &[Point],
    precision: usize,
) -> std::io::Result<()> {
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            w.write_all(b"\n")?;
        }
        write!(w, "{:.*},{:.*}", precision, p.x(), precision, p.y())?;
    }
    Ok(())
}

/// Writes the two operands of a multiplication file verbatim.
pub fn write_operands<W: Write>(
    w: &mut W,
    x: &DecimalString,
    y: &DecimalString,
) -> std::io::Result<()> {
    write!(w, "{}\n{}", x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::{OperandLoader, PointSetLoader};

    #[test]
    fn test_point_set_format() {
        let mut out = Vec::new();
        let points = [Point::new(1.0, 2.5), Point::new(-3.126, 0.0)];
        write_point_set(&mut out, &points, DEFAULT_POINT_PRECISION).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1.00,2.50\n-3.13,0.00");
    }

    #[test]
    fn test_written_points_load_back() {
        let mut out = Vec::new();
        let points = [Point::new(0.5, 10.0), Point::new(7.0, -2.0)];
        write_point_set(&mut out, &points, 3).unwrap();
        let loaded = PointSetLoader::new().from_reader(out.as_slice()).unwrap();
        assert_eq!(loaded, points);
    }

    #[test]
    fn test_operands_keep_leading_zeros() {
        let x = DecimalString::parse("007").unwrap();
        let y = DecimalString::parse("12").unwrap();
        let mut out = Vec::new();
        write_operands(&mut out, &x, &y).unwrap();
        assert_eq!(out, b"007\n12");

        let ops = OperandLoader::new().from_reader(out.as_slice()).unwrap();
        assert_eq!((ops.x, ops.y), (x, y));
    }

    #[test]
    fn test_empty_point_set_writes_nothing() {
        let mut out = Vec::new();
        write_point_set(&mut out, &[], 2).unwrap();
        assert!(out.is_empty());
    }
}

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

//! Loaders for the two textual input formats.
//!
//! A point-set file holds one point per line as `<x>,<y>`. An operand file
//! holds exactly two non-empty lines, each a string of decimal digits. In
//! both formats surrounding whitespace is trimmed and blank lines are
//! skipped.
//!
//! Like every loader in this crate they accept any `BufRead`, a file path, a
//! plain reader or a string slice. Line numbers in errors are 1-based and
//! count every physical line, blank ones included.

use cleave_core::{error::CleaveError, geometry::point::Point, num::decimal::DecimalString};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// The error type for loading input files.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// An I/O error occurred while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A coordinate token could not be parsed as a number.
    #[error("Could not parse token '{token}' on line {line} as a coordinate")]
    Parse { line: usize, token: String },
    /// A line did not have the `<x>,<y>` shape.
    #[error("Line {line} is not of the form '<x>,<y>': '{content}'")]
    MalformedLine { line: usize, content: String },
    /// The file did not have the expected number of non-empty lines.
    #[error("Expected {expected} non-empty lines, found {actual}")]
    WrongLineCount { expected: usize, actual: usize },
    /// A value parsed but was rejected by the domain types.
    #[error("Invalid input: {0}")]
    Input(#[from] CleaveError),
}

/// Yields `(line_number, trimmed_line)` for every non-blank line.
fn content_lines<R: BufRead>(
    rdr: R,
) -> impl Iterator<Item = Result<(usize, String), LoaderError>> {
    rdr.lines().enumerate().filter_map(|(i, line)| match line {
        Err(e) => Some(Err(LoaderError::Io(e))),
        Ok(line) => {
            let trimmed = line.trim();
            (!trimmed.is_empty()).then(|| Ok((i + 1, trimmed.to_string())))
        }
    })
}

/// A configurable loader for point-set files.
///
/// # Configuration
/// * `allow_comments`: skip lines whose first non-blank character is `#`.
///   Off by default, so a stray `#` is reported as a malformed line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointSetLoader {
    allow_comments: bool,
}

impl PointSetLoader {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn allow_comments(mut self, yes: bool) -> Self {
        self.allow_comments = yes;
        self
    }

    /// Loads points from a type implementing `BufRead`.
    ///
    /// An input without any point yields an empty vector; rejecting it is
    /// left to the solver.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Vec<Point>, LoaderError> {
        let mut points = Vec::new();
        for entry in content_lines(rdr) {
            let (line, content) = entry?;
            if self.allow_comments && content.starts_with('#') {
                continue;
            }
            points.push(parse_point(line, &content)?);
        }
        Ok(points)
    }

    /// Loads points from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Point>, LoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads points from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Vec<Point>, LoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads points from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Vec<Point>, LoaderError> {
        self.from_reader(s.as_bytes())
    }
}

fn parse_point(line: usize, content: &str) -> Result<Point, LoaderError> {
    let malformed = || LoaderError::MalformedLine {
        line,
        content: content.to_string(),
    };
    let (x, y) = content.split_once(',').ok_or_else(malformed)?;
    if y.contains(',') {
        return Err(malformed());
    }

    let coordinate = |token: &str| {
        let token = token.trim();
        token.parse::<f64>().map_err(|_| LoaderError::Parse {
            line,
            token: token.to_string(),
        })
    };
    Ok(Point::try_new(coordinate(x)?, coordinate(y)?)?)
}

/// The two operands of a multiplication file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operands {
    pub x: DecimalString,
    pub y: DecimalString,
}

/// Loader for multiplication files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperandLoader;

impl OperandLoader {
    /// Number of non-empty lines an operand file must contain.
    pub const OPERAND_COUNT: usize = 2;

    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Loads both operands from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Operands, LoaderError> {
        let lines = content_lines(rdr)
            .map(|entry| entry.map(|(_, content)| content))
            .collect::<Result<Vec<_>, _>>()?;

        match lines.as_slice() {
            [x, y] => Ok(Operands {
                x: DecimalString::parse(x)?,
                y: DecimalString::parse(y)?,
            }),
            _ => Err(LoaderError::WrongLineCount {
                expected: Self::OPERAND_COUNT,
                actual: lines.len(),
            }),
        }
    }

    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Operands, LoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Operands, LoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Operands, LoaderError> {
        self.from_reader(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_POINT_SET: &str = "
        0.00,0.00
        3.00,4.00

        -1.5, 2.25
    ";

    #[test]
    fn test_loads_points_and_skips_blank_lines() {
        let points = PointSetLoader::new().from_str(SMALL_POINT_SET).unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(3.0, 4.0),
                Point::new(-1.5, 2.25)
            ]
        );
    }

    #[test]
    fn test_comments_are_opt_in() {
        let data = "# generated\n1,2\n3,4\n";
        let points = PointSetLoader::new()
            .allow_comments(true)
            .from_str(data)
            .unwrap();
        assert_eq!(points.len(), 2);

        match PointSetLoader::new().from_str(data) {
            Err(LoaderError::MalformedLine { line, content }) => {
                assert_eq!(line, 1);
                assert_eq!(content, "# generated");
            }
            other => panic!("expected a malformed line, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_structure() {
        let data = "1,2\n\n3,abc\n";
        match PointSetLoader::new().from_str(data) {
            Err(LoaderError::Parse { line, token }) => {
                assert_eq!(line, 3);
                assert_eq!(token, "abc");
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_lines() {
        assert!(matches!(
            PointSetLoader::new().from_str("1 2"),
            Err(LoaderError::MalformedLine { line: 1, .. })
        ));
        assert!(matches!(
            PointSetLoader::new().from_str("1,2,3"),
            Err(LoaderError::MalformedLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_non_finite_coordinates_are_rejected() {
        let err = PointSetLoader::new().from_str("inf,0").unwrap_err();
        match err {
            LoaderError::Input(e) => assert!(e.is_invalid_input()),
            other => panic!("expected an input error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_yields_no_points() {
        assert!(PointSetLoader::new().from_str("\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_loads_operands() {
        let ops = OperandLoader::new()
            .from_str("\n 123456789012345678901234567890 \n\n42\n")
            .unwrap();
        assert_eq!(ops.x.as_str(), "123456789012345678901234567890");
        assert_eq!(ops.y.as_str(), "42");
    }

    #[test]
    fn test_operand_file_needs_exactly_two_lines() {
        for (data, actual) in [("", 0), ("1\n", 1), ("1\n2\n3\n", 3)] {
            match OperandLoader::new().from_str(data) {
                Err(LoaderError::WrongLineCount { expected, actual: a }) => {
                    assert_eq!(expected, 2);
                    assert_eq!(a, actual);
                }
                other => panic!("expected a line count error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_operand_digits_are_validated() {
        let err = OperandLoader::new().from_str("12\n3x\n").unwrap_err();
        assert!(matches!(err, LoaderError::Input(CleaveError::InvalidInput(_))));
        assert!(err.to_string().starts_with("Invalid input:"));
    }

    #[test]
    fn test_missing_file_reports_io() {
        let err = OperandLoader::new()
            .from_path("/definitely/not/here/operands.txt")
            .unwrap_err();
        assert!(matches!(err, LoaderError::Io(_)));
    }
}

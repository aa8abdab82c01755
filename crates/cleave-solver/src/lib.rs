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

//! # Cleave Solver
//!
//! The public face of the Cleave engines. Two functions cover the common
//! case of running one engine with its defaults:
//!
//! - `solve_closest_pair`: nearest two points of a planar point set.
//! - `solve_karatsuba`: exact product of two decimal digit strings.
//!
//! Both return the result together with the ordered trace of the recursion.
//! For custom configurations, live monitoring or statistics, build a
//! `solver::Solver` through `solver::SolverBuilder`.

pub mod solver;

use cleave_closest::{
    event::ClosestPairEvent, result::ClosestPairResult, solver::ClosestPairSolver,
};
use cleave_core::{error::CleaveError, geometry::point::Point, trace::Trace};
use cleave_karatsuba::{event::KaratsubaEvent, result::KaratsubaResult, solver::KaratsubaSolver};

/// Finds the closest pair of `points` with the default configuration.
///
/// # Errors
///
/// `CleaveError::InvalidInput` for fewer than two points or a non-finite
/// coordinate.
///
/// # Examples
///
/// ```rust
/// use cleave_core::geometry::point::Point;
///
/// let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(0.0, 0.0)];
/// let (result, trace) = cleave_solver::solve_closest_pair(&points).unwrap();
/// assert_eq!(result.distance(), 0.0);
/// assert!(!trace.is_empty());
/// ```
pub fn solve_closest_pair(
    points: &[Point],
) -> Result<(ClosestPairResult, Trace<ClosestPairEvent>), CleaveError> {
    ClosestPairSolver::new().solve(points)
}

/// Multiplies two decimal digit strings with the default configuration.
///
/// # Errors
///
/// `CleaveError::InvalidInput` if an operand is empty or has a character
/// other than `0`-`9`.
///
/// # Examples
///
/// ```rust
/// let (result, _) = cleave_solver::solve_karatsuba("123", "456").unwrap();
/// assert_eq!(result.product().as_str(), "56088");
/// ```
pub fn solve_karatsuba(
    x: &str,
    y: &str,
) -> Result<(KaratsubaResult, Trace<KaratsubaEvent>), CleaveError> {
    KaratsubaSolver::new().solve(x, y)
}

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

//! Cleave Closest: traced closest pair of points
//!
//! Divide-and-conquer search for the two nearest points of a planar point
//! set. Alongside the answer the solver returns a `Trace` of every step it
//! took, in the order the recursion took them.
//!
//! Core flow
//! - Collect `cleave_core::geometry::point::Point`s.
//! - Optionally tune a `config::ClosestPairConfig`.
//! - Call `solver::ClosestPairSolver::solve` for `(result, trace)`, or
//!   `solve_with_monitor` to observe events live and get statistics.
//!
//! Guarantees
//! - The input slice is never modified; the solver works on a sorted copy.
//! - Deterministic: equal input (including order) gives an equal result and
//!   an equal trace.
//! - Ties keep the pair found first (brute force in `(i, j)` order, left half
//!   before right half, strip updates only on strictly smaller distances).
//!
//! Module map
//! - `solver`: the recursion.
//! - `event`: `ClosestPairEvent` and its kinds.
//! - `result`: `ClosestPairResult` and `ClosestPairOutcome`.
//! - `config`: solver settings.

pub mod config;
pub mod event;
pub mod result;
pub mod solver;

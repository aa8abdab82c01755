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

//! Cleave Karatsuba: traced arbitrary-precision multiplication
//!
//! Multiplies non-negative integers of any length, held as decimal digit
//! strings, with Karatsuba's three-multiplication recursion. Short operands
//! fall back to native `u128` arithmetic.
//!
//! Core flow
//! - Pass two digit strings to `solver::KaratsubaSolver::solve`; it returns
//!   the canonical product and a depth-tagged pre-order `Trace`.
//! - Use `solve_with_monitor` with a `cleave_core` monitor to watch events
//!   as they are recorded and collect `SolveStatistics`.
//!
//! Guarantees
//! - The product is exact and canonical (`"0"` or no leading zeros).
//! - Invalid operands are rejected with `CleaveError::InvalidInput` before
//!   any event is recorded.
//! - A subtraction that would go negative aborts the solve with
//!   `CleaveError::ArithmeticInvariantViolation`; it is never clamped.
//!
//! Module map
//! - `solver`: the recursion.
//! - `event`: `KaratsubaEvent` and its kinds.
//! - `result`: `KaratsubaResult` and `KaratsubaOutcome`.
//! - `config`: base-case threshold.

pub mod config;
pub mod event;
pub mod result;
pub mod solver;

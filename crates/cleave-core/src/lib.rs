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

//! # Cleave Core
//!
//! Shared building blocks for the Cleave divide-and-conquer engines. Each
//! engine is a pure recursive routine that also reports every step it takes;
//! this crate holds everything the engines have in common.
//!
//! ## Modules
//!
//! - `trace`: the `TraceEvent` trait, the append-only `TraceRecorder`, the
//!   sealed `Trace` with pagination, and `TraceCursor` for stepping.
//! - `monitor`: `TraceMonitor` observers (`LogMonitor` emitting `tracing`
//!   records, `CompositeMonitor`, `NoOpMonitor`).
//! - `stats`: `SolveStatistics` counters and timing.
//! - `error`: `CleaveError`, the error type of every engine.
//! - `num`: `DecimalString` and exact digit-string arithmetic.
//! - `geometry`: `Point`, `PointPair` and the brute-force nearest-pair search.
//!
//! Solvers own one recorder per invocation and pass it down the recursion
//! by `&mut`; nothing here is global or shared between solves.

pub mod error;
pub mod geometry;
pub mod monitor;
pub mod num;
pub mod stats;
pub mod trace;

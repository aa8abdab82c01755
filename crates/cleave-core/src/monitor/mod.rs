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

//! Observers for solver traces
//!
//! Defines the `TraceMonitor` trait plus small implementations that watch a
//! solve as it runs without touching the solver itself.
//!
//! Components
//! - `trace_monitor`: the monitoring interface.
//! - `composite`: fan-out monitor dispatching to children in insertion order.
//! - `log`: structured `tracing` output for every event.
//! - `no_op`: placeholder that ignores everything.
//!
//! Notes
//! - Callbacks take `&mut self`; keep handlers fast, they run inside the recursion.

pub mod composite;
pub mod log;
pub mod no_op;
pub mod trace_monitor;

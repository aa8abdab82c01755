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

//! Structured logging of solver traces.
//!
//! `LogMonitor` turns every recorded event into a `tracing` record. Events
//! are emitted at `DEBUG` level with `algorithm`, `index`, `kind` and `depth`
//! fields; the start and the final statistics of a solve are emitted at
//! `INFO`. Nothing is printed unless the application installs a subscriber.

use crate::{monitor::trace_monitor::TraceMonitor, stats::SolveStatistics, trace::TraceEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMonitor {
    algorithm: String,
    stride: usize,
    logged: u64,
}

impl LogMonitor {
    /// Creates a monitor that logs every `stride`-th event (a stride of 0 is
    /// treated as 1).
    pub fn new(stride: usize) -> Self {
        Self {
            algorithm: String::new(),
            stride: stride.max(1),
            logged: 0,
        }
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of events logged since the last `on_enter_solve`.
    #[inline]
    pub fn logged(&self) -> u64 {
        self.logged
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(1)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(stride: {})", self.stride)
    }
}

impl<E> TraceMonitor<E> for LogMonitor
where
    E: TraceEvent,
{
    fn on_enter_solve(&mut self, algorithm: &str) {
        self.algorithm.clear();
        self.algorithm.push_str(algorithm);
        self.logged = 0;
        tracing::info!(algorithm = %self.algorithm, "solve started");
    }

    fn on_event(&mut self, event: &E, index: usize) {
        if index % self.stride != 0 {
            return;
        }
        self.logged += 1;
        tracing::debug!(
            algorithm = %self.algorithm,
            index,
            kind = %event.kind(),
            depth = event.depth(),
            "{}",
            event.message()
        );
    }

    fn on_exit_solve(&mut self, stats: &SolveStatistics) {
        tracing::info!(
            algorithm = %self.algorithm,
            events = stats.events_recorded,
            recursive_calls = stats.recursive_calls,
            max_depth = stats.max_depth,
            elapsed = ?stats.time_total,
            "solve finished"
        );
    }

    fn name(&self) -> &str {
        "LogMonitor"
    }
}

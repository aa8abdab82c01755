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

use crate::{stats::SolveStatistics, trace::TraceEvent};

/// Receives the events of a solve as they are recorded.
pub trait TraceMonitor<E>: Send
where
    E: TraceEvent,
{
    /// Called once before the first event of a solve.
    fn on_enter_solve(&mut self, algorithm: &str);

    /// Called for every event, just before it is appended at position `index`.
    fn on_event(&mut self, event: &E, index: usize);

    /// Called once after the last event, with the final statistics.
    fn on_exit_solve(&mut self, stats: &SolveStatistics);

    /// Returns the name of the monitor.
    fn name(&self) -> &str;
}

impl<'a, E> std::fmt::Debug for dyn TraceMonitor<E> + 'a
where
    E: TraceEvent,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TraceMonitor({})", self.name())
    }
}

impl<'a, E> std::fmt::Display for dyn TraceMonitor<E> + 'a
where
    E: TraceEvent,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TraceMonitor({})", self.name())
    }
}

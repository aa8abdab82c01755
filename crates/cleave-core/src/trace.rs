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

//! # Execution Traces
//!
//! Append-only logs of typed events emitted by a recursive solver while it
//! runs. A `TraceRecorder` is owned by exactly one solve and is threaded
//! through the recursion by `&mut`; once the solve returns the recorder is
//! consumed by `seal`, which yields an immutable `Trace`.
//!
//! ## Ordering
//!
//! Events are stored in emission order. For a depth-first recursion that
//! records on entry, this is a pre-order walk of the call tree with siblings
//! visited left to right, so the depth can grow by at most one between two
//! consecutive events. `Trace::is_preorder` checks exactly that.
//!
//! ## Navigation
//!
//! `Trace::page` slices the log for renderers that show a fixed number of
//! steps at a time, and `TraceCursor` keeps a clamped step position for
//! step-through viewers.

use crate::monitor::trace_monitor::TraceMonitor;

/// An event that can be stored in a trace.
///
/// Implementors are closed enums with one variant per event kind. The
/// human-readable `message` must be derived from the payload alone.
pub trait TraceEvent: std::fmt::Debug + Send + Sync {
    /// Field-less tag naming the variant.
    type Kind: Copy + Eq + std::fmt::Debug + std::fmt::Display;

    /// Returns the tag of this event.
    fn kind(&self) -> Self::Kind;

    /// Returns the recursion depth at which the event was emitted (0 = root call).
    fn depth(&self) -> usize;

    /// Renders the payload as a human-readable line.
    fn message(&self) -> String;
}

/// Records events for a single solve.
///
/// The recorder optionally forwards every event to a `TraceMonitor` before it
/// is appended.
pub struct TraceRecorder<'m, E>
where
    E: TraceEvent,
{
    events: Vec<E>,
    monitor: Option<&'m mut dyn TraceMonitor<E>>,
}

impl<E> TraceRecorder<'static, E>
where
    E: TraceEvent,
{
    /// Creates an empty recorder without a monitor.
    #[inline]
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            monitor: None,
        }
    }
}

impl<E> Default for TraceRecorder<'static, E>
where
    E: TraceEvent,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'m, E> TraceRecorder<'m, E>
where
    E: TraceEvent,
{
    /// Creates an empty recorder that forwards each event to `monitor`.
    #[inline]
    pub fn with_monitor(monitor: &'m mut dyn TraceMonitor<E>) -> Self {
        Self {
            events: Vec::new(),
            monitor: Some(monitor),
        }
    }

    /// Appends `event` to the end of the log.
    #[inline]
    pub fn record(&mut self, event: E) {
        if let Some(monitor) = self.monitor.as_deref_mut() {
            monitor.on_event(&event, self.events.len());
        }
        self.events.push(event);
    }

    /// Returns all events recorded so far, in emission order.
    #[inline]
    pub fn events(&self) -> &[E] {
        &self.events
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consumes the recorder and returns the read-only trace.
    #[inline]
    pub fn seal(self) -> Trace<E> {
        Trace {
            events: self.events,
        }
    }
}

impl<E> std::fmt::Debug for TraceRecorder<'_, E>
where
    E: TraceEvent,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceRecorder")
            .field("events", &self.events.len())
            .field("monitor", &self.monitor.as_ref().map(|m| m.name()))
            .finish()
    }
}

/// A sealed, read-only sequence of events in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<E> {
    events: Vec<E>,
}

impl<E> Trace<E>
where
    E: TraceEvent,
{
    #[inline]
    pub fn events(&self) -> &[E] {
        &self.events
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&E> {
        self.events.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.events.iter()
    }

    #[inline]
    pub fn first(&self) -> Option<&E> {
        self.events.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&E> {
        self.events.last()
    }

    /// Returns the deepest recursion level that produced an event.
    pub fn max_depth(&self) -> usize {
        self.events.iter().map(TraceEvent::depth).max().unwrap_or(0)
    }

    /// Counts the events of the given kind.
    pub fn count_kind(&self, kind: E::Kind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    /// Returns the sequence of event kinds, in order.
    pub fn kinds(&self) -> Vec<E::Kind> {
        self.events.iter().map(TraceEvent::kind).collect()
    }

    /// Returns `true` if the trace starts at depth 0 and never descends by
    /// more than one level between consecutive events.
    pub fn is_preorder(&self) -> bool {
        match self.events.first() {
            None => true,
            Some(first) if first.depth() != 0 => false,
            Some(_) => self
                .events
                .windows(2)
                .all(|w| w[1].depth() <= w[0].depth() + 1),
        }
    }

    /// Returns page `index` of `page_size` events. Out-of-range pages and a
    /// zero page size yield an empty slice.
    pub fn page(&self, index: usize, page_size: usize) -> &[E] {
        if page_size == 0 {
            return &[];
        }
        let start = index.saturating_mul(page_size);
        if start >= self.events.len() {
            return &[];
        }
        let end = start.saturating_add(page_size).min(self.events.len());
        &self.events[start..end]
    }

    /// Number of pages of `page_size` events needed to cover the trace.
    #[inline]
    pub fn num_pages(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.events.len().div_ceil(page_size)
    }

    /// Returns a step cursor positioned on the first event.
    #[inline]
    pub fn cursor(&self) -> TraceCursor<'_, E> {
        TraceCursor {
            trace: self,
            position: 0,
        }
    }
}

impl<'a, E> IntoIterator for &'a Trace<E>
where
    E: TraceEvent,
{
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl<E> std::fmt::Display for Trace<E>
where
    E: TraceEvent,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, event) in self.events.iter().enumerate() {
            writeln!(
                f,
                "{:>5} | {:<8} | {:>3} | {}",
                i + 1,
                event.kind(),
                event.depth(),
                event.message()
            )?;
        }
        Ok(())
    }
}

/// A step position over a sealed trace.
///
/// Movement saturates at both ends; `advance` and `retreat` report whether the
/// position actually changed.
#[derive(Debug)]
pub struct TraceCursor<'a, E> {
    trace: &'a Trace<E>,
    position: usize,
}

impl<E> Clone for TraceCursor<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for TraceCursor<'_, E> {}

impl<'a, E> TraceCursor<'a, E>
where
    E: TraceEvent,
{
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the event under the cursor, or `None` for an empty trace.
    #[inline]
    pub fn current(&self) -> Option<&'a E> {
        self.trace.events.get(self.position)
    }

    #[inline]
    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    #[inline]
    pub fn is_last(&self) -> bool {
        self.position + 1 >= self.trace.len()
    }

    /// Moves one step forward.
    #[inline]
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Moves one step back.
    #[inline]
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Jumps to `index`, clamped to the last event.
    #[inline]
    pub fn seek(&mut self, index: usize) {
        self.position = index.min(self.trace.len().saturating_sub(1));
    }

    /// Renders the position as `Step i / n` (1-based).
    pub fn progress(&self) -> String {
        if self.trace.is_empty() {
            return "Step 0 / 0".to_string();
        }
        format!("Step {} / {}", self.position + 1, self.trace.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::trace_monitor::TraceMonitor;
    use crate::stats::SolveStatistics;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum ToyKind {
        Enter,
        Leave,
    }

    impl std::fmt::Display for ToyKind {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                ToyKind::Enter => write!(f, "enter"),
                ToyKind::Leave => write!(f, "leave"),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct ToyEvent {
        kind: ToyKind,
        depth: usize,
    }

    impl TraceEvent for ToyEvent {
        type Kind = ToyKind;

        fn kind(&self) -> ToyKind {
            self.kind
        }

        fn depth(&self) -> usize {
            self.depth
        }

        fn message(&self) -> String {
            format!("{} at {}", self.kind, self.depth)
        }
    }

    fn ev(kind: ToyKind, depth: usize) -> ToyEvent {
        ToyEvent { kind, depth }
    }

    fn sample() -> Trace<ToyEvent> {
        let mut rec = TraceRecorder::new();
        rec.record(ev(ToyKind::Enter, 0));
        rec.record(ev(ToyKind::Enter, 1));
        rec.record(ev(ToyKind::Leave, 1));
        rec.record(ev(ToyKind::Enter, 1));
        rec.record(ev(ToyKind::Leave, 1));
        rec.record(ev(ToyKind::Leave, 0));
        rec.seal()
    }

    #[derive(Default)]
    struct Counting {
        seen: Vec<usize>,
    }

    impl TraceMonitor<ToyEvent> for Counting {
        fn on_enter_solve(&mut self, _algorithm: &str) {}

        fn on_event(&mut self, _event: &ToyEvent, index: usize) {
            self.seen.push(index);
        }

        fn on_exit_solve(&mut self, _stats: &SolveStatistics) {}

        fn name(&self) -> &str {
            "Counting"
        }
    }

    #[test]
    fn test_record_preserves_emission_order() {
        let trace = sample();
        assert_eq!(trace.len(), 6);
        assert_eq!(
            trace.kinds(),
            vec![
                ToyKind::Enter,
                ToyKind::Enter,
                ToyKind::Leave,
                ToyKind::Enter,
                ToyKind::Leave,
                ToyKind::Leave
            ]
        );
        assert_eq!(trace.max_depth(), 1);
        assert_eq!(trace.count_kind(ToyKind::Leave), 3);
        assert!(trace.is_preorder());
    }

    #[test]
    fn test_is_preorder_rejects_depth_jumps() {
        let mut rec = TraceRecorder::new();
        rec.record(ev(ToyKind::Enter, 0));
        rec.record(ev(ToyKind::Enter, 2));
        assert!(!rec.seal().is_preorder());

        let mut rec = TraceRecorder::new();
        rec.record(ev(ToyKind::Enter, 1));
        assert!(!rec.seal().is_preorder());
    }

    #[test]
    fn test_recorder_forwards_to_monitor() {
        let mut monitor = Counting::default();
        {
            let mut rec = TraceRecorder::with_monitor(&mut monitor);
            rec.record(ev(ToyKind::Enter, 0));
            rec.record(ev(ToyKind::Leave, 0));
            assert_eq!(rec.len(), 2);
            assert!(format!("{:?}", rec).contains("Counting"));
        }
        assert_eq!(monitor.seen, vec![0, 1]);
    }

    #[test]
    fn test_pagination() {
        let trace = sample();
        assert_eq!(trace.num_pages(4), 2);
        assert_eq!(trace.page(0, 4).len(), 4);
        assert_eq!(trace.page(1, 4).len(), 2);
        assert!(trace.page(2, 4).is_empty());
        assert!(trace.page(0, 0).is_empty());
        assert_eq!(trace.num_pages(0), 0);
        assert!(trace.page(usize::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn test_cursor_saturates_at_both_ends() {
        let trace = sample();
        let mut c = trace.cursor();
        assert!(c.is_first());
        assert!(!c.retreat());
        assert_eq!(c.progress(), "Step 1 / 6");

        while c.advance() {}
        assert!(c.is_last());
        assert_eq!(c.position(), 5);
        assert_eq!(c.current(), trace.last());

        c.seek(100);
        assert_eq!(c.position(), 5);
        c.seek(2);
        assert_eq!(c.current().map(|e| e.kind), Some(ToyKind::Leave));
    }

    #[test]
    fn test_cursor_on_empty_trace() {
        let trace: Trace<ToyEvent> = TraceRecorder::new().seal();
        let mut c = trace.cursor();
        assert!(c.current().is_none());
        assert!(!c.advance());
        assert_eq!(c.progress(), "Step 0 / 0");
        assert!(trace.is_preorder());
        assert_eq!(trace.max_depth(), 0);
    }

    #[test]
    fn test_display_lists_every_event() {
        let rendered = format!("{}", sample());
        assert_eq!(rendered.lines().count(), 6);
        assert!(rendered.contains("enter at 0"));
    }
}

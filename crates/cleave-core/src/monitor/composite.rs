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

//! Monitor combinator
//!
//! `CompositeMonitor` forwards every callback to its children in insertion
//! order, so logging, live rendering and ad hoc probes can be attached to
//! one solve at the same time.

use crate::{monitor::trace_monitor::TraceMonitor, stats::SolveStatistics, trace::TraceEvent};

pub struct CompositeMonitor<'a, E>
where
    E: TraceEvent,
{
    monitors: Vec<Box<dyn TraceMonitor<E> + 'a>>,
}

impl<E> Default for CompositeMonitor<'_, E>
where
    E: TraceEvent,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E> CompositeMonitor<'a, E>
where
    E: TraceEvent,
{
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: TraceMonitor<E> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn TraceMonitor<E> + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn TraceMonitor<E> + 'a>] {
        &self.monitors
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, E> FromIterator<Box<dyn TraceMonitor<E> + 'a>> for CompositeMonitor<'a, E>
where
    E: TraceEvent,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn TraceMonitor<E> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<E> std::fmt::Debug for CompositeMonitor<'_, E>
where
    E: TraceEvent,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.monitors.iter().map(|m| m.name()))
            .finish()
    }
}

impl<E> TraceMonitor<E> for CompositeMonitor<'_, E>
where
    E: TraceEvent,
{
    fn on_enter_solve(&mut self, algorithm: &str) {
        for monitor in &mut self.monitors {
            monitor.on_enter_solve(algorithm);
        }
    }

    fn on_event(&mut self, event: &E, index: usize) {
        for monitor in &mut self.monitors {
            monitor.on_event(event, index);
        }
    }

    fn on_exit_solve(&mut self, stats: &SolveStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_solve(stats);
        }
    }

    fn name(&self) -> &str {
        "CompositeMonitor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{log::LogMonitor, no_op::NoOpMonitor};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Tick;

    impl std::fmt::Display for Tick {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "tick")
        }
    }

    #[derive(Debug)]
    struct TickEvent(usize);

    impl TraceEvent for TickEvent {
        type Kind = Tick;

        fn kind(&self) -> Tick {
            Tick
        }

        fn depth(&self) -> usize {
            self.0
        }

        fn message(&self) -> String {
            format!("tick {}", self.0)
        }
    }

    struct Journal {
        tag: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl TraceMonitor<TickEvent> for Journal {
        fn on_enter_solve(&mut self, algorithm: &str) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:enter:{}", self.tag, algorithm));
        }

        fn on_event(&mut self, event: &TickEvent, index: usize) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:event:{}:{}", self.tag, index, event.0));
        }

        fn on_exit_solve(&mut self, stats: &SolveStatistics) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:exit:{}", self.tag, stats.events_recorded));
        }

        fn name(&self) -> &str {
            self.tag
        }
    }

    #[test]
    fn test_fans_out_in_insertion_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut composite = CompositeMonitor::new();
        composite.add_monitor(Journal {
            tag: "a",
            log: Arc::clone(&log),
        });
        composite.add_monitor(Journal {
            tag: "b",
            log: Arc::clone(&log),
        });
        assert_eq!(composite.len(), 2);

        composite.on_enter_solve("toy");
        composite.on_event(&TickEvent(4), 0);
        let stats = SolveStatistics {
            events_recorded: 1,
            ..Default::default()
        };
        composite.on_exit_solve(&stats);

        let log = log.lock().unwrap();
        assert_eq!(
            *log,
            vec![
                "a:enter:toy",
                "b:enter:toy",
                "a:event:0:4",
                "b:event:0:4",
                "a:exit:1",
                "b:exit:1"
            ]
        );
    }

    #[test]
    fn test_debug_lists_child_names() {
        let mut composite: CompositeMonitor<'_, TickEvent> = CompositeMonitor::with_capacity(2);
        composite.add_monitor(NoOpMonitor::new());
        composite.add_monitor(LogMonitor::default());
        assert_eq!(format!("{:?}", composite), r#"["NoOpMonitor", "LogMonitor"]"#);
    }

    #[test]
    fn test_log_monitor_respects_stride() {
        let mut monitor = LogMonitor::new(3);
        TraceMonitor::<TickEvent>::on_enter_solve(&mut monitor, "toy");
        for i in 0..7 {
            monitor.on_event(&TickEvent(0), i);
        }
        // indices 0, 3 and 6
        assert_eq!(monitor.logged(), 3);
        assert_eq!(LogMonitor::new(0).stride(), 1);
    }
}

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

use std::time::Duration;

/// Counters collected while a solver runs.
///
/// Fields that do not apply to an engine simply stay at zero; the
/// closest-pair solver never touches `digit_operations` and Karatsuba never
/// scans a strip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolveStatistics {
    /// Events appended to the trace.
    pub events_recorded: u64,
    /// Calls of the recursive routine, root included.
    pub recursive_calls: u64,
    /// Calls that terminated in the base case.
    pub base_cases: u64,
    /// The deepest recursion level reached.
    pub max_depth: u64,
    /// Points that entered a merge strip (closest pair).
    pub strip_points: u64,
    /// Strip candidates compared by distance (closest pair).
    pub strip_comparisons: u64,
    /// Times a strip comparison improved the best distance (closest pair).
    pub strip_updates: u64,
    /// Digit-string additions and subtractions performed (Karatsuba).
    pub digit_operations: u64,
    /// Wall-clock time of the solve.
    pub time_total: Duration,
}

impl SolveStatistics {
    #[inline]
    pub fn on_event_recorded(&mut self) {
        self.events_recorded = self.events_recorded.saturating_add(1);
    }

    /// Records entry into the recursive routine at `depth`.
    #[inline]
    pub fn on_recursive_call(&mut self, depth: usize) {
        self.recursive_calls = self.recursive_calls.saturating_add(1);
        self.max_depth = self.max_depth.max(depth as u64);
    }

    #[inline]
    pub fn on_base_case(&mut self) {
        self.base_cases = self.base_cases.saturating_add(1);
    }

    #[inline]
    pub fn on_strip(&mut self, size: usize) {
        self.strip_points = self.strip_points.saturating_add(size as u64);
    }

    #[inline]
    pub fn on_strip_comparison(&mut self) {
        self.strip_comparisons = self.strip_comparisons.saturating_add(1);
    }

    #[inline]
    pub fn on_strip_update(&mut self) {
        self.strip_updates = self.strip_updates.saturating_add(1);
    }

    #[inline]
    pub fn on_digit_operation(&mut self) {
        self.digit_operations = self.digit_operations.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SolveStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solve Statistics:")?;
        writeln!(f, "  Events recorded:      {}", self.events_recorded)?;
        writeln!(f, "  Recursive calls:      {}", self.recursive_calls)?;
        writeln!(f, "  Base cases:           {}", self.base_cases)?;
        writeln!(f, "  Max depth reached:    {}", self.max_depth)?;
        writeln!(f, "  Strip points:         {}", self.strip_points)?;
        writeln!(f, "  Strip comparisons:    {}", self.strip_comparisons)?;
        writeln!(f, "  Strip updates:        {}", self.strip_updates)?;
        writeln!(f, "  Digit operations:     {}", self.digit_operations)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_and_depth_tracking() {
        let mut s = SolveStatistics::default();
        s.on_recursive_call(0);
        s.on_recursive_call(3);
        s.on_recursive_call(1);
        s.on_base_case();
        s.on_strip(4);
        s.on_strip(2);
        s.on_strip_comparison();
        s.on_strip_update();
        s.on_digit_operation();
        s.on_event_recorded();

        assert_eq!(s.recursive_calls, 3);
        assert_eq!(s.max_depth, 3);
        assert_eq!(s.base_cases, 1);
        assert_eq!(s.strip_points, 6);
        assert_eq!(s.strip_comparisons, 1);
        assert_eq!(s.strip_updates, 1);
        assert_eq!(s.digit_operations, 1);
        assert_eq!(s.events_recorded, 1);
    }

    #[test]
    fn test_counters_saturate() {
        let mut s = SolveStatistics {
            events_recorded: u64::MAX,
            ..Default::default()
        };
        s.on_event_recorded();
        assert_eq!(s.events_recorded, u64::MAX);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let s = SolveStatistics {
            recursive_calls: 7,
            time_total: Duration::from_millis(1500),
            ..Default::default()
        };
        let rendered = format!("{}", s);
        assert!(rendered.contains("Solve Statistics:"));
        assert!(rendered.contains("Recursive calls:      7"));
        assert!(rendered.contains("Total time:           1.50s"));
    }
}

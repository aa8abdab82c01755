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

//! # Divide-and-Conquer Closest Pair
//!
//! The solver sorts a copy of the input by x (stable, so ties keep their
//! input order) and recurses on halves of that sequence:
//!
//! - calls on at most `base_case_size` points fall back to exhaustive search;
//! - otherwise the points are split at `mid = n / 2`, both halves are solved
//!   (left first), and the closer of the two results becomes the provisional
//!   best, the left one winning ties;
//! - the merge step collects every point whose x-distance from `pts[mid].x`
//!   is strictly below the best distance, sorts that strip by y and compares
//!   each point only against successors less than the best distance above it.
//!
//! Every comparison uses strict `<`, so an equal distance never replaces a
//! pair that was found first.
//!
//! ## Preconditions
//!
//! At least two points, all coordinates finite. Violations are reported as
//! `CleaveError::InvalidInput` before the recursion starts.

use crate::{
    config::ClosestPairConfig,
    event::ClosestPairEvent,
    result::{ClosestPairOutcome, ClosestPairResult},
};
use cleave_core::{
    error::CleaveError,
    geometry::{
        pair::{NearestPair, PointPair, brute_force_nearest_pair},
        point::Point,
    },
    monitor::{no_op::NoOpMonitor, trace_monitor::TraceMonitor},
    stats::SolveStatistics,
    trace::{Trace, TraceRecorder},
};
use std::{cmp::Ordering, time::Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClosestPairSolver {
    config: ClosestPairConfig,
}

impl ClosestPairSolver {
    /// Name reported to monitors.
    pub const ALGORITHM: &'static str = "closest-pair";

    /// Creates a solver with the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with `config`, rejecting invalid settings.
    pub fn with_config(config: ClosestPairConfig) -> Result<Self, CleaveError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &ClosestPairConfig {
        &self.config
    }

    /// Finds the closest pair of `points` and returns it with the trace.
    pub fn solve(
        &self,
        points: &[Point],
    ) -> Result<(ClosestPairResult, Trace<ClosestPairEvent>), CleaveError> {
        let mut monitor = NoOpMonitor::new();
        self.solve_with_monitor(points, &mut monitor)
            .map(ClosestPairOutcome::into_parts)
    }

    /// Finds the closest pair of `points`, forwarding every event to
    /// `monitor` as it is recorded.
    pub fn solve_with_monitor(
        &self,
        points: &[Point],
        monitor: &mut dyn TraceMonitor<ClosestPairEvent>,
    ) -> Result<ClosestPairOutcome, CleaveError> {
        validate_points(points)?;

        let start = Instant::now();
        monitor.on_enter_solve(Self::ALGORITHM);

        let mut sorted = points.to_vec();
        sorted.sort_by(|a, b| coordinate_order(a.x(), b.x()));

        let mut session = Session {
            recorder: TraceRecorder::with_monitor(&mut *monitor),
            stats: SolveStatistics::default(),
            base_case_size: self.config.get_base_case_size(),
        };
        let best = session.solve_rec(&sorted, 0);

        let Session {
            recorder,
            mut stats,
            ..
        } = session;
        let trace = recorder.seal();
        stats.set_total_time(start.elapsed());
        monitor.on_exit_solve(&stats);

        // At least two finite points always produce a finite pair.
        let pair = best.pair.ok_or_else(|| {
            CleaveError::invalid_input("point set produced no pair")
        })?;

        tracing::debug!(
            points = points.len(),
            events = trace.len(),
            distance = best.distance,
            "closest pair solved"
        );

        Ok(ClosestPairOutcome {
            result: ClosestPairResult::new(best.distance, pair),
            trace,
            statistics: stats,
        })
    }
}

impl std::fmt::Display for ClosestPairSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClosestPairSolver({})", self.config)
    }
}

fn validate_points(points: &[Point]) -> Result<(), CleaveError> {
    match points.len() {
        0 => return Err(CleaveError::invalid_input("point set is empty")),
        1 => {
            return Err(CleaveError::invalid_input(
                "point set has a single point, a pair needs at least two",
            ));
        }
        _ => {}
    }
    if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
        return Err(CleaveError::invalid_input(format!(
            "point {} at index {} has a non-finite coordinate",
            p, index
        )));
    }
    Ok(())
}

/// Total order on finite coordinates in which `-0.0` and `0.0` are equal, so
/// a stable sort keeps them in input order.
#[inline]
fn coordinate_order(a: f64, b: f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

/// State threaded through one solve.
struct Session<'m> {
    recorder: TraceRecorder<'m, ClosestPairEvent>,
    stats: SolveStatistics,
    base_case_size: usize,
}

impl Session<'_> {
    #[inline]
    fn emit(&mut self, event: ClosestPairEvent) {
        self.stats.on_event_recorded();
        self.recorder.record(event);
    }

    fn solve_rec(&mut self, pts: &[Point], depth: usize) -> NearestPair {
        let n = pts.len();
        self.stats.on_recursive_call(depth);
        self.emit(ClosestPairEvent::Divide {
            depth,
            points: pts.to_vec(),
        });

        if n <= self.base_case_size {
            let result = brute_force_nearest_pair(pts);
            self.stats.on_base_case();
            self.emit(ClosestPairEvent::Base {
                depth,
                points: pts.to_vec(),
                result,
            });
            return result;
        }

        let mid = n / 2;
        let (left, right) = pts.split_at(mid);
        self.emit(ClosestPairEvent::Split {
            depth,
            left: left.len(),
            right: right.len(),
        });

        let left_best = self.solve_rec(left, depth + 1);
        let right_best = self.solve_rec(right, depth + 1);
        let mut best = left_best.closer(right_best);

        let mid_x = pts[mid].x();
        let mut strip: Vec<Point> = pts
            .iter()
            .copied()
            .filter(|p| (p.x() - mid_x).abs() < best.distance)
            .collect();
        self.stats.on_strip(strip.len());
        self.emit(ClosestPairEvent::Strip {
            depth,
            strip: strip.clone(),
            mid_x,
            distance: best.distance,
        });

        strip.sort_by(|a, b| coordinate_order(a.y(), b.y()));
        for (i, a) in strip.iter().enumerate() {
            for b in &strip[i + 1..] {
                if b.y() - a.y() >= best.distance {
                    break;
                }
                self.stats.on_strip_comparison();
                let distance = a.distance(b);
                if best.offer(*a, *b, distance) {
                    self.stats.on_strip_update();
                    self.emit(ClosestPairEvent::Update {
                        depth,
                        pair: PointPair::new(*a, *b),
                        distance,
                    });
                }
            }
        }

        self.emit(ClosestPairEvent::Merge {
            depth,
            result: best,
        });
        best
    }
}

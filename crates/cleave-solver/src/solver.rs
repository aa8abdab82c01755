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

//! # Engine Facade
//!
//! `Solver` owns one configured instance of each engine plus a monitor stack
//! per event type, and dispatches an `Input` to the engine that handles it.
//!
//! ## Usage
//!
//! ```rust
//! use cleave_core::{geometry::point::Point, monitor::log::LogMonitor};
//! use cleave_solver::solver::{Input, SolverBuilder};
//!
//! let mut solver = SolverBuilder::new()
//!     .add_monitor(LogMonitor::new(10))
//!     .build()
//!     .unwrap();
//!
//! let input = Input::from(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
//! let outcome = solver.solve(&input).unwrap();
//! assert_eq!(outcome.statistics().base_cases, 1);
//! ```

use cleave_closest::{
    config::ClosestPairConfig, event::ClosestPairEvent, result::ClosestPairOutcome,
    solver::ClosestPairSolver,
};
use cleave_core::{
    error::CleaveError,
    geometry::point::Point,
    monitor::{composite::CompositeMonitor, trace_monitor::TraceMonitor},
    num::decimal::DecimalString,
    stats::SolveStatistics,
};
use cleave_karatsuba::{
    config::KaratsubaConfig, event::KaratsubaEvent, result::KaratsubaOutcome,
    solver::KaratsubaSolver,
};
use cleave_model::loading::Operands;

/// The engine that handled a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    ClosestPair,
    Karatsuba,
}

impl Algorithm {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::ClosestPair => ClosestPairSolver::ALGORITHM,
            Algorithm::Karatsuba => KaratsubaSolver::ALGORITHM,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A problem instance for one of the engines.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    ClosestPair(Vec<Point>),
    Multiply { x: DecimalString, y: DecimalString },
}

impl Input {
    /// Validates two digit strings as multiplication operands.
    pub fn multiply(x: &str, y: &str) -> Result<Self, CleaveError> {
        Ok(Input::Multiply {
            x: DecimalString::parse(x)?,
            y: DecimalString::parse(y)?,
        })
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Input::ClosestPair(_) => Algorithm::ClosestPair,
            Input::Multiply { .. } => Algorithm::Karatsuba,
        }
    }
}

impl From<Vec<Point>> for Input {
    fn from(points: Vec<Point>) -> Self {
        Input::ClosestPair(points)
    }
}

impl From<Operands> for Input {
    fn from(operands: Operands) -> Self {
        Input::Multiply {
            x: operands.x,
            y: operands.y,
        }
    }
}

/// The result, trace and statistics of whichever engine ran.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    ClosestPair(ClosestPairOutcome),
    Karatsuba(KaratsubaOutcome),
}

impl SolveOutcome {
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            SolveOutcome::ClosestPair(_) => Algorithm::ClosestPair,
            SolveOutcome::Karatsuba(_) => Algorithm::Karatsuba,
        }
    }

    #[inline]
    pub fn statistics(&self) -> &SolveStatistics {
        match self {
            SolveOutcome::ClosestPair(o) => &o.statistics,
            SolveOutcome::Karatsuba(o) => &o.statistics,
        }
    }

    /// Number of events in the trace.
    #[inline]
    pub fn trace_len(&self) -> usize {
        match self {
            SolveOutcome::ClosestPair(o) => o.trace.len(),
            SolveOutcome::Karatsuba(o) => o.trace.len(),
        }
    }

    #[inline]
    pub fn as_closest_pair(&self) -> Option<&ClosestPairOutcome> {
        match self {
            SolveOutcome::ClosestPair(o) => Some(o),
            SolveOutcome::Karatsuba(_) => None,
        }
    }

    #[inline]
    pub fn as_karatsuba(&self) -> Option<&KaratsubaOutcome> {
        match self {
            SolveOutcome::Karatsuba(o) => Some(o),
            SolveOutcome::ClosestPair(_) => None,
        }
    }
}

impl std::fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm())?;
        match self {
            SolveOutcome::ClosestPair(o) => writeln!(f, "Result: {}", o.result)?,
            SolveOutcome::Karatsuba(o) => writeln!(f, "Result: {}", o.result)?,
        }
        writeln!(f, "Trace events: {}", self.trace_len())?;
        write!(f, "{}", self.statistics())
    }
}

pub struct Solver<'a> {
    closest_pair: ClosestPairSolver,
    karatsuba: KaratsubaSolver,
    closest_pair_monitor: CompositeMonitor<'a, ClosestPairEvent>,
    karatsuba_monitor: CompositeMonitor<'a, KaratsubaEvent>,
}

impl<'a> Solver<'a> {
    #[inline]
    pub fn closest_pair(&self) -> &ClosestPairSolver {
        &self.closest_pair
    }

    #[inline]
    pub fn karatsuba(&self) -> &KaratsubaSolver {
        &self.karatsuba
    }

    #[inline]
    pub fn add_closest_pair_monitor<M>(&mut self, monitor: M)
    where
        M: TraceMonitor<ClosestPairEvent> + 'a,
    {
        self.closest_pair_monitor.add_monitor(monitor);
    }

    #[inline]
    pub fn add_karatsuba_monitor<M>(&mut self, monitor: M)
    where
        M: TraceMonitor<KaratsubaEvent> + 'a,
    {
        self.karatsuba_monitor.add_monitor(monitor);
    }

    /// Runs the engine matching `input`.
    pub fn solve(&mut self, input: &Input) -> Result<SolveOutcome, CleaveError> {
        tracing::debug!(algorithm = %input.algorithm(), "dispatching solve");
        match input {
            Input::ClosestPair(points) => self
                .closest_pair
                .solve_with_monitor(points, &mut self.closest_pair_monitor)
                .map(SolveOutcome::ClosestPair),
            Input::Multiply { x, y } => self
                .karatsuba
                .solve_with_monitor(x, y, &mut self.karatsuba_monitor)
                .map(SolveOutcome::Karatsuba),
        }
    }
}

impl std::fmt::Debug for Solver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("closest_pair", &self.closest_pair)
            .field("karatsuba", &self.karatsuba)
            .field("closest_pair_monitor", &self.closest_pair_monitor)
            .field("karatsuba_monitor", &self.karatsuba_monitor)
            .finish()
    }
}

#[derive(Default)]
pub struct SolverBuilder<'a> {
    closest_pair_config: ClosestPairConfig,
    karatsuba_config: KaratsubaConfig,
    closest_pair_monitor: CompositeMonitor<'a, ClosestPairEvent>,
    karatsuba_monitor: CompositeMonitor<'a, KaratsubaEvent>,
}

impl<'a> SolverBuilder<'a> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_closest_pair_config(mut self, config: ClosestPairConfig) -> Self {
        self.closest_pair_config = config;
        self
    }

    #[inline]
    pub fn with_karatsuba_config(mut self, config: KaratsubaConfig) -> Self {
        self.karatsuba_config = config;
        self
    }

    /// Attaches a copy of `monitor` to both engines.
    #[inline]
    pub fn add_monitor<M>(mut self, monitor: M) -> Self
    where
        M: TraceMonitor<ClosestPairEvent> + TraceMonitor<KaratsubaEvent> + Clone + 'a,
    {
        self.closest_pair_monitor.add_monitor(monitor.clone());
        self.karatsuba_monitor.add_monitor(monitor);
        self
    }

    #[inline]
    pub fn add_closest_pair_monitor<M>(mut self, monitor: M) -> Self
    where
        M: TraceMonitor<ClosestPairEvent> + 'a,
    {
        self.closest_pair_monitor.add_monitor(monitor);
        self
    }

    #[inline]
    pub fn add_karatsuba_monitor<M>(mut self, monitor: M) -> Self
    where
        M: TraceMonitor<KaratsubaEvent> + 'a,
    {
        self.karatsuba_monitor.add_monitor(monitor);
        self
    }

    /// Validates both configurations and assembles the solver.
    pub fn build(self) -> Result<Solver<'a>, CleaveError> {
        Ok(Solver {
            closest_pair: ClosestPairSolver::with_config(self.closest_pair_config)?,
            karatsuba: KaratsubaSolver::with_config(self.karatsuba_config)?,
            closest_pair_monitor: self.closest_pair_monitor,
            karatsuba_monitor: self.karatsuba_monitor,
        })
    }
}

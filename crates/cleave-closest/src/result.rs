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

use crate::event::ClosestPairEvent;
use cleave_core::{
    geometry::{pair::PointPair, point::Point},
    stats::SolveStatistics,
    trace::Trace,
};

/// The closest pair of a point set and its distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPairResult {
    distance: f64,
    pair: PointPair,
}

impl ClosestPairResult {
    #[inline]
    pub fn new(distance: f64, pair: PointPair) -> Self {
        Self { distance, pair }
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    #[inline]
    pub fn pair(&self) -> PointPair {
        self.pair
    }

    #[inline]
    pub fn points(&self) -> (Point, Point) {
        (self.pair.first, self.pair.second)
    }
}

impl std::fmt::Display for ClosestPairResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "distance={:.6} pair={:.3}", self.distance, self.pair)
    }
}

/// Everything a closest-pair solve produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosestPairOutcome {
    pub result: ClosestPairResult,
    pub trace: Trace<ClosestPairEvent>,
    pub statistics: SolveStatistics,
}

impl ClosestPairOutcome {
    #[inline]
    pub fn into_parts(self) -> (ClosestPairResult, Trace<ClosestPairEvent>) {
        (self.result, self.trace)
    }
}

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

//! Trace events of the closest-pair recursion.
//!
//! Every call of the recursive routine emits `Divide` first. Base calls then
//! emit `Base`; recursive calls emit `Split`, the events of their two child
//! calls (left first), `Strip`, zero or more `Update`s, and finally `Merge`.

use cleave_core::{
    geometry::{
        pair::{NearestPair, PointPair},
        point::Point,
    },
    trace::TraceEvent,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClosestPairEventKind {
    Divide,
    Split,
    Base,
    Strip,
    Update,
    Merge,
}

impl std::fmt::Display for ClosestPairEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClosestPairEventKind::Divide => write!(f, "divide"),
            ClosestPairEventKind::Split => write!(f, "split"),
            ClosestPairEventKind::Base => write!(f, "base"),
            ClosestPairEventKind::Strip => write!(f, "strip"),
            ClosestPairEventKind::Update => write!(f, "update"),
            ClosestPairEventKind::Merge => write!(f, "merge"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClosestPairEvent {
    /// A call started on `points` (sorted by x).
    Divide { depth: usize, points: Vec<Point> },
    /// A call split its points into halves of the given sizes.
    Split {
        depth: usize,
        left: usize,
        right: usize,
    },
    /// A call solved `points` by exhaustive search.
    Base {
        depth: usize,
        points: Vec<Point>,
        result: NearestPair,
    },
    /// The candidates within `distance` of the dividing line `x = mid_x`.
    Strip {
        depth: usize,
        strip: Vec<Point>,
        mid_x: f64,
        distance: f64,
    },
    /// A strip comparison found a strictly closer pair.
    Update {
        depth: usize,
        pair: PointPair,
        distance: f64,
    },
    /// A recursive call finished with `result`.
    Merge { depth: usize, result: NearestPair },
}

impl TraceEvent for ClosestPairEvent {
    type Kind = ClosestPairEventKind;

    fn kind(&self) -> ClosestPairEventKind {
        match self {
            Self::Divide { .. } => ClosestPairEventKind::Divide,
            Self::Split { .. } => ClosestPairEventKind::Split,
            Self::Base { .. } => ClosestPairEventKind::Base,
            Self::Strip { .. } => ClosestPairEventKind::Strip,
            Self::Update { .. } => ClosestPairEventKind::Update,
            Self::Merge { .. } => ClosestPairEventKind::Merge,
        }
    }

    fn depth(&self) -> usize {
        match self {
            Self::Divide { depth, .. }
            | Self::Split { depth, .. }
            | Self::Base { depth, .. }
            | Self::Strip { depth, .. }
            | Self::Update { depth, .. }
            | Self::Merge { depth, .. } => *depth,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Divide { depth, points } => {
                format!("Processing {} points at depth {}", points.len(), depth)
            }
            Self::Split { left, right, .. } => {
                format!("Split into {} left and {} right points", left, right)
            }
            Self::Base { points, result, .. } => match result.pair {
                Some(_) => format!(
                    "Base case: Found pair with distance {:.2}",
                    result.distance
                ),
                None => format!("Base case: No pair among {} point(s)", points.len()),
            },
            Self::Strip { strip, mid_x, .. } => format!(
                "Checking {} points in strip region around x = {:.2}",
                strip.len(),
                mid_x
            ),
            Self::Update { distance, .. } => {
                format!("Found closer pair in strip: distance {:.2}", distance)
            }
            Self::Merge { depth, result } => format!(
                "Merged result at depth {}: distance {:.2}",
                depth, result.distance
            ),
        }
    }
}

impl std::fmt::Display for ClosestPairEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_messages_are_derived_from_payload() {
        let e = ClosestPairEvent::Divide {
            depth: 2,
            points: vec![p(0.0, 0.0), p(1.0, 1.0)],
        };
        assert_eq!(e.message(), "Processing 2 points at depth 2");
        assert_eq!(e.kind(), ClosestPairEventKind::Divide);
        assert_eq!(e.depth(), 2);

        let e = ClosestPairEvent::Base {
            depth: 1,
            points: vec![p(0.0, 0.0), p(3.0, 4.0)],
            result: NearestPair::of(p(0.0, 0.0), p(3.0, 4.0)),
        };
        assert_eq!(e.message(), "Base case: Found pair with distance 5.00");

        let e = ClosestPairEvent::Base {
            depth: 1,
            points: vec![p(0.0, 0.0)],
            result: NearestPair::EMPTY,
        };
        assert_eq!(e.message(), "Base case: No pair among 1 point(s)");

        let e = ClosestPairEvent::Merge {
            depth: 0,
            result: NearestPair::of(p(0.0, 0.0), p(0.0, 0.25)),
        };
        assert_eq!(e.to_string(), "Merged result at depth 0: distance 0.25");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ClosestPairEventKind::Strip.to_string(), "strip");
        assert_eq!(ClosestPairEventKind::Update.to_string(), "update");
    }
}

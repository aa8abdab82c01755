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

use crate::geometry::point::Point;

/// Two points, in the order they were found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPair {
    pub first: Point,
    pub second: Point,
}

impl PointPair {
    #[inline(always)]
    pub const fn new(first: Point, second: Point) -> Self {
        Self { first, second }
    }

    /// Distance between the two points, recomputed from their coordinates.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.first.distance(&self.second)
    }
}

impl std::fmt::Display for PointPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "[{:.*}, {:.*}]", p, self.first, p, self.second),
            None => write!(f, "[{}, {}]", self.first, self.second),
        }
    }
}

/// The best pair seen so far and its distance.
///
/// An empty candidate has infinite distance and no pair, which is what a
/// search over fewer than two points produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPair {
    pub distance: f64,
    pub pair: Option<PointPair>,
}

impl NearestPair {
    /// The candidate with no pair and infinite distance.
    pub const EMPTY: NearestPair = NearestPair {
        distance: f64::INFINITY,
        pair: None,
    };

    #[inline]
    pub fn of(first: Point, second: Point) -> Self {
        Self {
            distance: first.distance(&second),
            pair: Some(PointPair::new(first, second)),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pair.is_none()
    }

    /// Replaces the candidate when `distance` is strictly smaller. Returns
    /// whether it did.
    #[inline]
    pub fn offer(&mut self, first: Point, second: Point, distance: f64) -> bool {
        if distance < self.distance {
            self.distance = distance;
            self.pair = Some(PointPair::new(first, second));
            true
        } else {
            false
        }
    }

    /// Returns the closer of two candidates; `self` wins ties.
    #[inline]
    pub fn closer(self, other: NearestPair) -> NearestPair {
        if other.distance < self.distance {
            other
        } else {
            self
        }
    }
}

impl Default for NearestPair {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Exhaustive O(k²) nearest-pair search.
///
/// Pairs are visited in `(i, j)` order with `i < j`, and only a strictly
/// smaller distance replaces the current best, so the first pair found wins
/// exact ties.
pub fn brute_force_nearest_pair(points: &[Point]) -> NearestPair {
    let mut best = NearestPair::EMPTY;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            best.offer(*a, *b, a.distance(b));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_fewer_than_two_points_yield_empty() {
        assert_eq!(brute_force_nearest_pair(&[]), NearestPair::EMPTY);
        let one = brute_force_nearest_pair(&[p(1.0, 1.0)]);
        assert!(one.is_empty());
        assert!(one.distance.is_infinite());
    }

    #[test]
    fn test_finds_minimum() {
        let pts = [p(0.0, 0.0), p(10.0, 10.0), p(1.0, 1.0), p(10.5, 10.0)];
        let best = brute_force_nearest_pair(&pts);
        assert_eq!(best.distance, 0.5);
        assert_eq!(best.pair, Some(PointPair::new(p(10.0, 10.0), p(10.5, 10.0))));
    }

    #[test]
    fn test_first_found_pair_wins_ties() {
        // (0,1) and (1,2) are both at distance 1.0.
        let pts = [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)];
        let best = brute_force_nearest_pair(&pts);
        assert_eq!(best.distance, 1.0);
        assert_eq!(best.pair, Some(PointPair::new(p(0.0, 0.0), p(1.0, 0.0))));
    }

    #[test]
    fn test_closer_prefers_self_on_ties() {
        let a = NearestPair::of(p(0.0, 0.0), p(1.0, 0.0));
        let b = NearestPair::of(p(5.0, 5.0), p(6.0, 5.0));
        assert_eq!(a.closer(b), a);
        assert_eq!(b.closer(a), b);
        assert_eq!(NearestPair::EMPTY.closer(a), a);
    }

    #[test]
    fn test_display() {
        let pair = PointPair::new(p(0.0, 0.0), p(3.0, 4.0));
        assert_eq!(format!("{:.1}", pair), "[(0.0, 0.0), (3.0, 4.0)]");
        assert_eq!(pair.distance(), 5.0);
    }
}

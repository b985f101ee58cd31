//! Estimates of the remaining cost between two grid coordinates.
//!
//! A [`Heuristic`] guides the A* strategy: the open set is ordered by the
//! cost walked so far plus the estimate towards the finish. All heuristics
//! here are pure functions of the two coordinates — no state, no side
//! effects.

use crate::Point;
use std::fmt;

/// A cost estimate between two coordinates.
///
/// Implementations must be non-negative and must depend only on the two
/// coordinates, since A* computes the estimate once per cell and never
/// refreshes it. The trait is object-safe so that
/// [`Algorithm::AStar`](crate::Algorithm::AStar) can box one.
pub trait Heuristic: fmt::Debug {
	/// Estimates the cost of travelling from `here` to `there`.
	fn estimate(&self, here: Point, there: Point) -> f64;
}

fn deltas(here: Point, there: Point) -> (f64, f64) {
	let dx = here.0.abs_diff(there.0) as f64;
	let dy = here.1.abs_diff(there.1) as f64;
	(dx, dy)
}

/// Manhattan distance: `|Δx| + |Δy|`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
	fn estimate(&self, here: Point, there: Point) -> f64 {
		let (dx, dy) = deltas(here, there);
		dx + dy
	}
}

/// Octile distance: `√2·min(|Δx|, |Δy|) + (max(|Δx|, |Δy|) − min(|Δx|, |Δy|))`.
///
/// The exact travel distance when diagonal movement costs `√2` of an
/// orthogonal step and nothing is in the way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Diagonal;

impl Heuristic for Diagonal {
	fn estimate(&self, here: Point, there: Point) -> f64 {
		let (dx, dy) = deltas(here, there);
		let (min, max) = if dx < dy { (dx, dy) } else { (dy, dx) };
		std::f64::consts::SQRT_2 * min + (max - min)
	}
}

/// Always `f64::MAX`.
///
/// Every cell looks equally (and maximally) far from the finish, so the
/// open-set ordering degrades to cost-from-start alone. Exists for
/// degenerate-case coverage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Infinity;

impl Heuristic for Infinity {
	fn estimate(&self, _here: Point, _there: Point) -> f64 {
		f64::MAX
	}
}

/// Always `f64::MIN_POSITIVE`.
///
/// Provides effectively no guidance, turning A* into uniform-cost
/// (Dijkstra) search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
	fn estimate(&self, _here: Point, _there: Point) -> f64 {
		f64::MIN_POSITIVE
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn manhattan() {
		assert_eq!(Manhattan.estimate((0, 0), (3, 4)), 7.0);
		assert_eq!(Manhattan.estimate((3, 4), (0, 0)), 7.0);
		assert_eq!(Manhattan.estimate((2, 2), (2, 2)), 0.0);
	}

	#[test]
	fn diagonal() {
		// a pure diagonal is all √2 steps
		let estimate = Diagonal.estimate((0, 0), (3, 3));
		assert!((estimate - 3.0 * std::f64::consts::SQRT_2).abs() < 1e-9);

		// mixed: two diagonal steps, one straight
		let estimate = Diagonal.estimate((0, 0), (3, 2));
		assert!((estimate - (2.0 * std::f64::consts::SQRT_2 + 1.0)).abs() < 1e-9);

		// a straight line has no diagonal component
		assert_eq!(Diagonal.estimate((0, 0), (0, 5)), 5.0);
	}

	#[test]
	fn degenerate_variants() {
		assert_eq!(Infinity.estimate((0, 0), (1, 1)), f64::MAX);
		assert_eq!(Zero.estimate((0, 0), (100, 100)), f64::MIN_POSITIVE);
		assert!(Zero.estimate((0, 0), (1, 1)) > 0.0);
	}
}

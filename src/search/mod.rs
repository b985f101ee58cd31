//! The three search strategies and their shared invocation contract.
//!
//! Every strategy takes a mutable [`Grid`] with a start and a finish cell
//! and either produces a start→finish [`Path`] — annotating the grid's
//! intermediate cells with directional waypoints on the way — or reports
//! that the finish is unreachable. Strategies mutate only per-cell search
//! bookkeeping; obstacle, start and finish statuses are never touched.

mod a_star;
pub use self::a_star::a_star_search;

mod bfs;
pub use self::bfs::breadth_first_search;

mod dfs;
pub use self::dfs::depth_first_search;

use crate::heuristic::Heuristic;
use crate::{Grid, GridError, Path, Point, Result};

/// The choice of search strategy.
#[derive(Debug)]
pub enum Algorithm {
	/// Uninformed depth-first search. Deterministic, but gives no
	/// optimality guarantee of any kind.
	DepthFirst,
	/// Uninformed breadth-first search. Shortest in number of hops.
	BreadthFirst,
	/// Best-first search ordered by cost-so-far plus the boxed heuristic's
	/// estimate. Cost-optimal when the heuristic never overestimates.
	AStar(Box<dyn Heuristic>),
}

/// One search invocation: a strategy plus the corner-cutting policy.
///
/// A `Search` owns its whole configuration, so any number of independent
/// searches can exist side by side. Run each against its own freshly built
/// [`Grid`]; per-cell search state is not isolated between runs on a shared
/// grid.
///
/// ## Examples
/// ```
/// use waygrid::{Algorithm, Grid, Search};
///
/// let mut grid = Grid::new(6, 6).unwrap();
/// grid.set_start(0, 0).unwrap();
/// grid.set_finish(5, 5).unwrap();
///
/// let search = Search::new(Algorithm::BreadthFirst).with_corner_cutting(true);
/// let path = search.execute(&mut grid).unwrap();
/// assert!(path.is_some());
/// ```
#[derive(Debug)]
pub struct Search {
	algorithm: Algorithm,
	corner_cutting: bool,
}

impl Search {
	/// Creates a search invocation with corner cutting disallowed.
	pub fn new(algorithm: Algorithm) -> Search {
		Search {
			algorithm,
			corner_cutting: false,
		}
	}

	/// Sets whether the path may cut diagonally past a single obstacle
	/// corner. See [`Grid::walkable_neighbors`] for the exact rule.
	pub fn with_corner_cutting(mut self, allowed: bool) -> Search {
		self.corner_cutting = allowed;
		self
	}

	/// The configured corner-cutting policy.
	pub fn corner_cutting(&self) -> bool {
		self.corner_cutting
	}

	/// Runs the configured strategy against `grid`.
	///
	/// Returns the start→finish path, `Ok(None)` when the finish is
	/// unreachable, or a configuration error when the grid is missing an
	/// endpoint.
	pub fn execute(&self, grid: &mut Grid) -> Result<Option<Path<Point>>> {
		match &self.algorithm {
			Algorithm::DepthFirst => depth_first_search(grid, self.corner_cutting),
			Algorithm::BreadthFirst => breadth_first_search(grid, self.corner_cutting),
			Algorithm::AStar(heuristic) => {
				a_star_search(grid, heuristic.as_ref(), self.corner_cutting)
			}
		}
	}
}

/// Validates the endpoints and clears stale per-cell search state from any
/// earlier run.
pub(crate) fn prepare(grid: &mut Grid) -> Result<(Point, Point)> {
	let start = grid.start().ok_or(GridError::MissingStart)?;
	let finish = grid.finish().ok_or(GridError::MissingFinish)?;
	grid.reset_search_state();
	Ok((start, finish))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_endpoints_are_rejected() {
		let mut grid = Grid::new(3, 3).unwrap();
		assert_eq!(
			depth_first_search(&mut grid, false),
			Err(GridError::MissingStart)
		);

		grid.set_start(0, 0).unwrap();
		assert_eq!(
			breadth_first_search(&mut grid, false),
			Err(GridError::MissingFinish)
		);

		grid.set_finish(2, 2).unwrap();
		assert!(depth_first_search(&mut grid, false).is_ok());
	}

	#[test]
	fn search_dispatches_like_the_free_functions() {
		let build = || {
			let mut grid = Grid::new(5, 5).unwrap();
			grid.set_start(0, 0).unwrap();
			grid.set_finish(4, 0).unwrap();
			grid.add_obstacle_line(2, 0, 2, 2).unwrap();
			grid
		};

		let mut direct = build();
		let expected = breadth_first_search(&mut direct, false).unwrap().unwrap();

		let mut dispatched = build();
		let search = Search::new(Algorithm::BreadthFirst);
		let path = search.execute(&mut dispatched).unwrap().unwrap();

		assert_eq!(path, expected.as_slice());
		assert!(!search.corner_cutting());
	}
}

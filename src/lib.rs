#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! Search a bounded 2-D grid for a path between two cells.
//!
//! ## Introduction
//! A [`Grid`] is a fixed `width × height` field of cells. One cell is the
//! start, one is the finish, and any number of cells may be obstacles, placed
//! as rasterized line segments. Three interchangeable strategies find a path
//! between the endpoints:
//!
//! - [`depth_first_search`] — uninformed, deterministic, no optimality
//!   guarantee
//! - [`breadth_first_search`] — uninformed, shortest in number of hops
//! - [`a_star_search`] — best-first, guided by a pluggable [`Heuristic`],
//!   cost-optimal with an admissible heuristic
//!
//! Movement is eight-way. An orthogonal step costs 10 and a diagonal step
//! costs 15, approximating the `√2 : 1` ratio with integers. Whether a path
//! may cut diagonally past an obstacle corner is controlled per search by the
//! corner-cutting flag (see [`Grid::walkable_neighbors`]).
//!
//! After a successful search, every intermediate cell of the returned path is
//! annotated with a directional waypoint pointing at the next step, so
//! rendering the grid shows the route as a chain of arrows.
//!
//! ## Examples
//! Running a search:
//! ```
//! use waygrid::prelude::*;
//!
//! let mut grid = Grid::new(7, 5).unwrap();
//! grid.set_start(0, 0).unwrap();
//! grid.set_finish(6, 4).unwrap();
//! grid.add_obstacle_line(3, 0, 3, 3).unwrap();
//!
//! let search = Search::new(Algorithm::AStar(Box::new(Manhattan)));
//! let path = search.execute(&mut grid).unwrap().expect("finish is reachable");
//!
//! assert_eq!(path[0], (0, 0));
//! assert_eq!(path[path.len() - 1], (6, 4));
//! println!("{grid}");
//! ```
//! The strategies are also plain functions, so a caller that does not need
//! runtime algorithm selection can skip the [`Search`] object:
//! ```
//! use waygrid::prelude::*;
//!
//! let mut grid = Grid::new(5, 5).unwrap();
//! grid.set_start(0, 0).unwrap();
//! grid.set_finish(4, 4).unwrap();
//!
//! let path = breadth_first_search(&mut grid, false).unwrap().unwrap();
//! assert_eq!(path.len(), 5); // the diagonal, both endpoints included
//! ```
//! An unreachable finish is a result, not an error:
//! ```
//! use waygrid::prelude::*;
//!
//! let mut grid = Grid::new(5, 5).unwrap();
//! grid.set_start(0, 0).unwrap();
//! grid.set_finish(2, 2).unwrap();
//! // wall the finish in completely
//! grid.add_obstacle_line(1, 1, 3, 1).unwrap();
//! grid.add_obstacle_line(1, 3, 3, 3).unwrap();
//! grid.add_obstacle(1, 2).unwrap();
//! grid.add_obstacle(3, 2).unwrap();
//!
//! assert_eq!(depth_first_search(&mut grid, false).unwrap(), None);
//! ```
//! Configuration mistakes are rejected before anything is mutated:
//! ```
//! use waygrid::{Grid, GridError};
//!
//! let mut grid = Grid::new(3, 3).unwrap();
//! grid.set_start(1, 1).unwrap();
//!
//! assert_eq!(grid.set_finish(1, 1), Err(GridError::EndpointOverlap { x: 1, y: 1 }));
//! assert!(matches!(grid.set_finish(5, 5), Err(GridError::OutOfBounds { .. })));
//! ```
//!
//! ## Lifecycle
//! A grid is built once per search configuration. The running strategy
//! mutates per-cell bookkeeping (parent links and visited/open/closed
//! state), and the path reconstruction rewrites intermediate path cells to
//! waypoints. Build a fresh grid per search rather than reusing one; as a
//! guard, every search clears the per-cell bookkeeping before it starts.
//!
//! Everything here is single-threaded and synchronous: a search runs to
//! completion before returning, and the grid is exclusively owned by its
//! caller for the duration.

/// A coordinate on the grid. North is towards positive `y`.
pub type Point = (usize, usize);

/// The accumulated movement cost of a path.
pub type Cost = usize;

pub(crate) type PointSet = hashbrown::HashSet<Point>;

mod error;
pub use self::error::{GridError, Result};

mod direction;
pub use self::direction::{Direction, NeighborMap};

mod cell;
pub use self::cell::{Cell, CellStatus};

mod grid;
pub use self::grid::Grid;

pub mod heuristic;
pub use self::heuristic::Heuristic;

pub mod search;
pub use self::search::{
	a_star_search, breadth_first_search, depth_first_search, Algorithm, Search,
};

mod path;
pub use self::path::Path;

/// The most commonly used types and functions, re-exported in one place.
pub mod prelude {
	pub use crate::heuristic::{Diagonal, Heuristic, Infinity, Manhattan, Zero};
	pub use crate::{
		a_star_search, breadth_first_search, depth_first_search, Algorithm, Cell, CellStatus,
		Direction, Grid, GridError, Path, Point, Search,
	};
}

//! Grid cells, their statuses and their per-search bookkeeping.

use crate::{Cost, Direction, Point};

/// The status of a cell. Exactly one status holds at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellStatus {
	/// The cell the search begins from. Displayed as `S`.
	Start,
	/// The goal of the search. Displayed as `F`.
	Finish,
	/// A cell that can never be traversed. Displayed as `█`.
	Obstacle,
	/// A cell on the solution path, carrying the direction towards the next
	/// step when one could be derived. Displayed as an arrow, or `•` when
	/// directionless.
	Waypoint(Option<Direction>),
	/// None of the above. Displayed as a blank.
	#[default]
	Empty,
}

impl CellStatus {
	/// The one-character display symbol for this status.
	pub fn symbol(self) -> char {
		match self {
			CellStatus::Start => 'S',
			CellStatus::Finish => 'F',
			CellStatus::Obstacle => '█',
			CellStatus::Waypoint(Some(dir)) => dir.arrow(),
			CellStatus::Waypoint(None) => '•',
			CellStatus::Empty => ' ',
		}
	}
}

/// One addressable position of a [`Grid`](crate::Grid).
///
/// A cell holds its status, the parent link set while a search runs (a
/// coordinate back into the grid, used afterwards to reconstruct the path)
/// and the auxiliary state of the strategy that touched it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cell {
	status: CellStatus,
	parent: Option<Point>,
	state: SearchState,
}

impl Cell {
	/// The current status of the cell.
	pub fn status(&self) -> CellStatus {
		self.status
	}

	/// The cell this one was first reached from during the last search, if
	/// any.
	pub fn parent(&self) -> Option<Point> {
		self.parent
	}

	/// Whether the cell is an obstacle.
	pub fn is_obstacle(&self) -> bool {
		self.status == CellStatus::Obstacle
	}

	/// The one-character display symbol of the cell.
	pub fn symbol(&self) -> char {
		self.status.symbol()
	}

	pub(crate) fn set_status(&mut self, status: CellStatus) {
		self.status = status;
	}

	pub(crate) fn set_parent(&mut self, parent: Point) {
		self.parent = Some(parent);
	}

	pub(crate) fn reset_search_state(&mut self) {
		self.parent = None;
		self.state = SearchState::Untouched;
	}

	pub(crate) fn visited(&self) -> bool {
		matches!(self.state, SearchState::DepthFirst { visited: true })
	}

	pub(crate) fn mark_visited(&mut self) {
		self.state = SearchState::DepthFirst { visited: true };
	}

	pub(crate) fn astar(&self) -> AStarState {
		match self.state {
			SearchState::AStar(state) => state,
			_ => AStarState::default(),
		}
	}

	pub(crate) fn astar_mut(&mut self) -> &mut AStarState {
		if !matches!(self.state, SearchState::AStar(_)) {
			self.state = SearchState::AStar(AStarState::default());
		}
		match &mut self.state {
			SearchState::AStar(state) => state,
			_ => unreachable!(),
		}
	}

	/// The heuristic estimate stored on the cell. Obstacles read as
	/// `f64::MAX` so they can never win the open-set ordering, regardless
	/// of any state left on them.
	pub(crate) fn heuristic_cost(&self) -> f64 {
		if self.is_obstacle() {
			f64::MAX
		} else {
			self.astar().h
		}
	}
}

/// The strategy-specific payload of a cell. Each search begins with every
/// cell `Untouched` and only ever installs its own variant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) enum SearchState {
	/// No search has touched the cell yet. Breadth-first search keeps its
	/// discovery set outside the grid, so its cells stay in this state.
	#[default]
	Untouched,
	/// Depth-first search entered the cell.
	DepthFirst {
		/// Set on entry, never cleared within a run.
		visited: bool,
	},
	/// A* discovered the cell.
	AStar(AStarState),
}

/// A* bookkeeping for one cell. At most one of `open` and `closed` is true
/// at any time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct AStarState {
	/// Cost of the best known route from the start.
	pub g: Cost,
	/// Heuristic estimate towards the finish, set once at discovery.
	pub h: f64,
	/// Discovered but not yet expanded.
	pub open: bool,
	/// Expanded, cost finalized.
	pub closed: bool,
}

impl Default for AStarState {
	fn default() -> Self {
		AStarState {
			g: Cost::MAX,
			h: 0.0,
			open: false,
			closed: false,
		}
	}
}

impl AStarState {
	pub(crate) fn set_open(&mut self) {
		self.open = true;
		self.closed = false;
	}

	pub(crate) fn set_closed(&mut self) {
		self.closed = true;
		self.open = false;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn symbols() {
		assert_eq!(CellStatus::Start.symbol(), 'S');
		assert_eq!(CellStatus::Finish.symbol(), 'F');
		assert_eq!(CellStatus::Obstacle.symbol(), '█');
		assert_eq!(CellStatus::Empty.symbol(), ' ');
		assert_eq!(CellStatus::Waypoint(None).symbol(), '•');
		assert_eq!(CellStatus::Waypoint(Some(Direction::East)).symbol(), '→');
		assert_eq!(CellStatus::Waypoint(Some(Direction::SouthWest)).symbol(), '↙');
	}

	#[test]
	fn open_and_closed_are_exclusive() {
		let mut state = AStarState::default();
		assert!(!state.open && !state.closed);

		state.set_open();
		assert!(state.open && !state.closed);

		state.set_closed();
		assert!(!state.open && state.closed);
	}

	#[test]
	fn obstacle_heuristic_is_maximal() {
		let mut cell = Cell::default();
		cell.astar_mut().h = 7.0;
		assert_eq!(cell.heuristic_cost(), 7.0);

		cell.set_status(CellStatus::Obstacle);
		assert_eq!(cell.heuristic_cost(), f64::MAX);
	}

	#[test]
	fn reset_clears_bookkeeping_but_not_status() {
		let mut cell = Cell::default();
		cell.set_status(CellStatus::Obstacle);
		cell.set_parent((1, 1));
		cell.mark_visited();

		cell.reset_search_state();
		assert_eq!(cell.parent(), None);
		assert!(!cell.visited());
		assert!(cell.is_obstacle());
	}
}

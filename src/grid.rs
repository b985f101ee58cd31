//! The search area: a bounded 2-D grid of cells.

use crate::{Cell, CellStatus, Direction, GridError, NeighborMap, Point, PointSet, Result};

use log::debug;
use std::fmt;

/// A bounded `width × height` grid of [`Cell`]s.
///
/// The grid owns all cells, the optional start and finish placement and the
/// obstacle set, and answers the adjacency queries the search strategies are
/// built on. Coordinates run from `(0, 0)` in the south-west corner; north
/// is towards positive `y`.
///
/// ## Examples
/// ```
/// use waygrid::{CellStatus, Grid};
///
/// let mut grid = Grid::new(4, 3).unwrap();
/// grid.set_start(0, 0).unwrap();
/// grid.set_finish(3, 2).unwrap();
/// grid.add_obstacle_line(1, 0, 1, 1).unwrap();
///
/// assert_eq!(grid.cell((1, 1)).unwrap().status(), CellStatus::Obstacle);
/// assert_eq!(grid.start(), Some((0, 0)));
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
	width: usize,
	height: usize,
	cells: Vec<Cell>,
	start: Option<Point>,
	finish: Option<Point>,
	obstacles: PointSet,
}

impl Grid {
	/// Creates a grid with every cell [`Empty`](CellStatus::Empty).
	///
	/// Fails with [`GridError::InvalidDimensions`] unless both dimensions
	/// are at least 1.
	pub fn new(width: usize, height: usize) -> Result<Grid> {
		if width < 1 || height < 1 {
			return Err(GridError::InvalidDimensions { width, height });
		}
		Ok(Grid {
			width,
			height,
			cells: vec![Cell::default(); width * height],
			start: None,
			finish: None,
			obstacles: PointSet::default(),
		})
	}

	/// The number of cells in the `x` dimension.
	pub fn width(&self) -> usize {
		self.width
	}

	/// The number of cells in the `y` dimension.
	pub fn height(&self) -> usize {
		self.height
	}

	/// The start coordinate, if one has been placed.
	pub fn start(&self) -> Option<Point> {
		self.start
	}

	/// The finish coordinate, if one has been placed.
	pub fn finish(&self) -> Option<Point> {
		self.finish
	}

	/// Whether `p` lies within the grid bounds.
	pub fn contains(&self, p: Point) -> bool {
		p.0 < self.width && p.1 < self.height
	}

	/// The cell at `p`, or `None` if `p` is out of bounds.
	pub fn cell(&self, p: Point) -> Option<&Cell> {
		if self.contains(p) {
			Some(&self.cells[self.index(p)])
		} else {
			None
		}
	}

	/// The display symbol of the cell at `p`, or `None` if out of bounds.
	pub fn symbol(&self, p: Point) -> Option<char> {
		self.cell(p).map(Cell::symbol)
	}

	/// Iterates over the coordinates of all obstacle cells.
	pub fn obstacles(&self) -> impl Iterator<Item = Point> + '_ {
		self.obstacles.iter().copied()
	}

	/// Places the start cell at `(x, y)`.
	///
	/// Any previous start cell is demoted to [`Empty`](CellStatus::Empty),
	/// and an obstacle at the target is replaced. Fails with
	/// [`GridError::OutOfBounds`] outside the grid, and refuses with
	/// [`GridError::EndpointOverlap`] (no mutation) when the target
	/// currently holds the finish.
	pub fn set_start(&mut self, x: usize, y: usize) -> Result<()> {
		let p = self.check_bounds(x, y)?;
		if self.finish == Some(p) {
			debug!("refusing start at ({x}, {y}): cell holds the finish");
			return Err(GridError::EndpointOverlap { x, y });
		}
		if let Some(old) = self.start.take() {
			self.at_mut(old).set_status(CellStatus::Empty);
		}
		self.obstacles.remove(&p);
		self.at_mut(p).set_status(CellStatus::Start);
		self.start = Some(p);
		Ok(())
	}

	/// Places the finish cell at `(x, y)`.
	///
	/// Mirror image of [`set_start`](Grid::set_start): demotes a previous
	/// finish, replaces an obstacle, refuses the current start cell.
	pub fn set_finish(&mut self, x: usize, y: usize) -> Result<()> {
		let p = self.check_bounds(x, y)?;
		if self.start == Some(p) {
			debug!("refusing finish at ({x}, {y}): cell holds the start");
			return Err(GridError::EndpointOverlap { x, y });
		}
		if let Some(old) = self.finish.take() {
			self.at_mut(old).set_status(CellStatus::Empty);
		}
		self.obstacles.remove(&p);
		self.at_mut(p).set_status(CellStatus::Finish);
		self.finish = Some(p);
		Ok(())
	}

	/// Marks every cell on the line from `(x0, y0)` to `(x1, y1)`,
	/// inclusive, as an obstacle.
	///
	/// The line is rasterized with Bresenham's algorithm, so only cells
	/// whose centers lie on the line are affected. The whole line is
	/// validated before any cell is touched: [`GridError::OutOfBounds`] if
	/// either endpoint is outside the grid,
	/// [`GridError::ObstacleOverlapsEndpoint`] if any rasterized cell is
	/// the current start or finish. On failure nothing is mutated.
	pub fn add_obstacle_line(&mut self, x0: usize, y0: usize, x1: usize, y1: usize) -> Result<()> {
		let from = self.check_bounds(x0, y0)?;
		let to = self.check_bounds(x1, y1)?;

		let line = raster_line(from, to);
		for &p in &line {
			if self.start == Some(p) || self.finish == Some(p) {
				debug!(
					"rejecting obstacle line ({x0}, {y0}) -> ({x1}, {y1}): \
					 crosses an endpoint at {p:?}"
				);
				return Err(GridError::ObstacleOverlapsEndpoint { x: p.0, y: p.1 });
			}
		}
		for p in line {
			self.at_mut(p).set_status(CellStatus::Obstacle);
			self.obstacles.insert(p);
		}
		Ok(())
	}

	/// Marks the single cell `(x, y)` as an obstacle.
	pub fn add_obstacle(&mut self, x: usize, y: usize) -> Result<()> {
		self.add_obstacle_line(x, y, x, y)
	}

	/// The up to eight in-bounds, non-obstacle neighbors of `p`, keyed by
	/// the direction leading to them.
	///
	/// Returns an empty map when `p` itself is out of bounds.
	pub fn neighbors(&self, p: Point) -> NeighborMap {
		let mut map = NeighborMap::default();
		if !self.contains(p) {
			return map;
		}
		for dir in Direction::ALL {
			if let Some(adjacent) = dir.step(p, self.width, self.height) {
				if !self.cells[self.index(adjacent)].is_obstacle() {
					map.insert(dir, adjacent);
				}
			}
		}
		map
	}

	/// The neighbors of `p` that a path may actually step to, with diagonal
	/// entries trimmed by the corner rule.
	///
	/// Each diagonal direction is flanked by the two orthogonal directions
	/// adjacent to it on the compass. With `corner_cutting` disallowed
	/// (`false`) a diagonal neighbor survives only if **both** flanking
	/// neighbors are present — the path can never squeeze diagonally past an
	/// obstacle or the grid edge. With `corner_cutting` allowed (`true`) a
	/// diagonal is removed only if **both** flanking neighbors are absent;
	/// one open side is enough to permit the cut. The strict and lenient
	/// modes are intentionally asymmetric.
	///
	/// ```text
	///    strict           lenient
	/// ┌───┬───┬───┐   ┌───┬───┬───┐
	/// │   │   │ ? │   │   │ █ │ ! │
	/// ├───┼───┼───┤   ├───┼───┼───┤
	/// │   │ A │ █ │   │   │ A │ █ │
	/// └───┴───┴───┘   └───┴───┴───┘
	/// ```
	/// From `A`, the `?` cell is reachable only when corner cutting is
	/// allowed; the `!` cell is never reachable — that would pass between
	/// two walls.
	pub fn walkable_neighbors(&self, p: Point, corner_cutting: bool) -> NeighborMap {
		let mut map = self.neighbors(p);
		for dir in Direction::DIAGONALS {
			trim_diagonal(&mut map, dir, corner_cutting);
		}
		map
	}

	pub(crate) fn at(&self, p: Point) -> &Cell {
		&self.cells[p.1 * self.width + p.0]
	}

	pub(crate) fn at_mut(&mut self, p: Point) -> &mut Cell {
		let i = self.index(p);
		&mut self.cells[i]
	}

	/// Clears parent links and per-strategy state on every cell. Statuses
	/// (start, finish, obstacles, waypoints) are left alone.
	pub(crate) fn reset_search_state(&mut self) {
		for cell in &mut self.cells {
			cell.reset_search_state();
		}
	}

	fn index(&self, p: Point) -> usize {
		p.1 * self.width + p.0
	}

	fn check_bounds(&self, x: usize, y: usize) -> Result<Point> {
		if x < self.width && y < self.height {
			Ok((x, y))
		} else {
			Err(GridError::OutOfBounds {
				x,
				y,
				width: self.width,
				height: self.height,
			})
		}
	}
}

impl fmt::Display for Grid {
	/// Renders the symbol raster, top row (`y = height - 1`) first.
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		for y in (0..self.height).rev() {
			for x in 0..self.width {
				write!(fmt, "{}", self.at((x, y)).symbol())?;
			}
			writeln!(fmt)?;
		}
		Ok(())
	}
}

fn trim_diagonal(map: &mut NeighborMap, dir: Direction, corner_cutting: bool) {
	if !map.contains(dir) {
		return;
	}
	let ccw = map.contains(dir.counter_clockwise());
	let cw = map.contains(dir.clockwise());
	// Strict mode needs both flanking cells open, lenient mode just one.
	let blocked = if corner_cutting {
		!ccw && !cw
	} else {
		!ccw || !cw
	};
	if blocked {
		map.remove(dir);
	}
}

/// Integer line rasterization: the cells whose centers lie on the line from
/// `from` to `to`, both endpoints included.
fn raster_line(from: Point, to: Point) -> Vec<Point> {
	let (mut x0, mut y0) = (from.0 as isize, from.1 as isize);
	let (x1, y1) = (to.0 as isize, to.1 as isize);

	let dx = (x1 - x0).abs();
	let dy = (y1 - y0).abs();
	let sx = if x0 < x1 { 1 } else { -1 };
	let sy = if y0 < y1 { 1 } else { -1 };
	let mut err = dx - dy;

	let mut line = vec![];
	loop {
		line.push((x0 as usize, y0 as usize));
		if x0 == x1 && y0 == y1 {
			return line;
		}
		let e2 = 2 * err;
		if e2 > -dy {
			err -= dy;
			x0 += sx;
		}
		if e2 < dx {
			err += dx;
			y0 += sy;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Direction::*;

	#[test]
	fn rejects_degenerate_dimensions() {
		assert!(matches!(
			Grid::new(0, 5),
			Err(GridError::InvalidDimensions { width: 0, height: 5 })
		));
		assert!(matches!(Grid::new(5, 0), Err(GridError::InvalidDimensions { .. })));
		assert!(Grid::new(1, 1).is_ok());
	}

	#[test]
	fn endpoint_placement_rules() {
		let mut grid = Grid::new(3, 3).unwrap();
		grid.set_start(0, 0).unwrap();
		grid.set_finish(2, 2).unwrap();

		// moving the start demotes the old cell
		grid.set_start(1, 1).unwrap();
		assert_eq!(grid.cell((0, 0)).unwrap().status(), CellStatus::Empty);
		assert_eq!(grid.cell((1, 1)).unwrap().status(), CellStatus::Start);
		assert_eq!(grid.start(), Some((1, 1)));

		// the other endpoint's cell is refused without mutation
		assert_eq!(
			grid.set_start(2, 2),
			Err(GridError::EndpointOverlap { x: 2, y: 2 })
		);
		assert_eq!(grid.cell((2, 2)).unwrap().status(), CellStatus::Finish);
		assert_eq!(grid.start(), Some((1, 1)));

		// out of bounds is its own condition
		assert_eq!(
			grid.set_finish(3, 0),
			Err(GridError::OutOfBounds { x: 3, y: 0, width: 3, height: 3 })
		);
	}

	#[test]
	fn endpoint_replaces_obstacle() {
		let mut grid = Grid::new(3, 3).unwrap();
		grid.add_obstacle(1, 1).unwrap();
		assert_eq!(grid.obstacles().count(), 1);

		grid.set_start(1, 1).unwrap();
		assert_eq!(grid.cell((1, 1)).unwrap().status(), CellStatus::Start);
		assert_eq!(grid.obstacles().count(), 0);
	}

	#[test]
	fn raster_line_is_bresenham() {
		assert_eq!(raster_line((0, 0), (3, 0)), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
		assert_eq!(raster_line((0, 0), (2, 2)), vec![(0, 0), (1, 1), (2, 2)]);
		assert_eq!(raster_line((2, 2), (0, 0)), vec![(2, 2), (1, 1), (0, 0)]);
		assert_eq!(raster_line((1, 1), (1, 1)), vec![(1, 1)]);
		// shallow slope: one cell per column
		assert_eq!(
			raster_line((0, 0), (4, 2)),
			vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]
		);
	}

	#[test]
	fn obstacle_line_is_atomic() {
		let mut grid = Grid::new(5, 5).unwrap();
		grid.set_start(0, 0).unwrap();
		grid.set_finish(4, 4).unwrap();

		// the diagonal crosses the finish; nothing of it may be placed
		assert_eq!(
			grid.add_obstacle_line(2, 2, 4, 4),
			Err(GridError::ObstacleOverlapsEndpoint { x: 4, y: 4 })
		);
		assert_eq!(grid.obstacles().count(), 0);
		assert_eq!(grid.cell((2, 2)).unwrap().status(), CellStatus::Empty);

		assert!(matches!(
			grid.add_obstacle_line(2, 2, 5, 2),
			Err(GridError::OutOfBounds { .. })
		));
		assert_eq!(grid.obstacles().count(), 0);

		grid.add_obstacle_line(2, 0, 2, 3).unwrap();
		assert_eq!(grid.obstacles().count(), 4);
	}

	#[test]
	fn neighbors_skip_bounds_and_obstacles() {
		let mut grid = Grid::new(3, 3).unwrap();
		grid.add_obstacle(1, 2).unwrap();

		// south-west corner: three candidates, none an obstacle
		let corner = grid.neighbors((0, 0));
		assert_eq!(corner.len(), 3);
		assert_eq!(corner.get(North), Some((0, 1)));
		assert_eq!(corner.get(NorthEast), Some((1, 1)));
		assert_eq!(corner.get(East), Some((1, 0)));

		// center: all eight minus the obstacle to the north
		let center = grid.neighbors((1, 1));
		assert_eq!(center.len(), 7);
		assert!(!center.contains(North));

		assert!(grid.neighbors((9, 9)).is_empty());
	}

	#[test]
	fn strict_corner_rule_needs_both_sides() {
		let mut grid = Grid::new(3, 3).unwrap();
		grid.add_obstacle(1, 2).unwrap(); // north of center

		// NE of (1,1) is flanked by N (obstacle) and E (open)
		let strict = grid.walkable_neighbors((1, 1), false);
		assert!(!strict.contains(NorthEast));
		assert!(!strict.contains(NorthWest));
		assert!(strict.contains(SouthEast));
		assert!(strict.contains(SouthWest));

		// one open side is enough in lenient mode
		let lenient = grid.walkable_neighbors((1, 1), true);
		assert!(lenient.contains(NorthEast));
		assert!(lenient.contains(NorthWest));
	}

	#[test]
	fn lenient_corner_rule_blocks_double_walls() {
		let mut grid = Grid::new(3, 3).unwrap();
		grid.add_obstacle(1, 2).unwrap(); // north of center
		grid.add_obstacle(2, 1).unwrap(); // east of center

		// NE of (1,1) is now flanked by two obstacles: blocked in both modes
		assert!(!grid.walkable_neighbors((1, 1), true).contains(NorthEast));
		assert!(!grid.walkable_neighbors((1, 1), false).contains(NorthEast));
	}

	#[test]
	fn grid_edge_counts_as_absent_flank() {
		let grid = Grid::new(3, 3).unwrap();

		// NE of (2,1) is out of bounds; NW of (2,1) is flanked by N (open)
		// and W (open) and survives. N itself is flanked by... nothing to
		// trim: orthogonals are never trimmed.
		let strict = grid.walkable_neighbors((2, 0), false);
		assert!(strict.contains(North));
		assert!(strict.contains(West));
		// NW of (2,0) is flanked by N (open) and W (open): walkable
		assert!(strict.contains(NorthWest));

		// in the corner, the edge removes the flanks themselves
		let corner = grid.walkable_neighbors((0, 0), false);
		assert_eq!(corner.len(), 3);
	}

	#[test]
	fn walkable_neighbors_is_idempotent() {
		let mut grid = Grid::new(4, 4).unwrap();
		grid.add_obstacle_line(1, 1, 2, 1).unwrap();

		let first = grid.walkable_neighbors((2, 2), false);
		let second = grid.walkable_neighbors((2, 2), false);
		assert_eq!(first, second);
	}

	#[test]
	fn display_renders_top_row_first() {
		let mut grid = Grid::new(3, 2).unwrap();
		grid.set_start(0, 0).unwrap();
		grid.set_finish(2, 1).unwrap();
		grid.add_obstacle(1, 1).unwrap();

		assert_eq!(format!("{grid}"), " █F\nS  \n");
	}
}

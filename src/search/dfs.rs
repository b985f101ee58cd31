//! Depth-first traversal with a fixed direction order.

use crate::{path, Direction, Grid, NeighborMap, Path, Point, Result};

use log::{debug, trace};

/// One suspended level of the traversal. The neighbor map is captured when
/// the cell is entered and not refreshed afterwards.
struct Frame {
	pos: Point,
	neighbors: NeighborMap,
	next: usize,
}

/// Depth-first search from the grid's start cell.
///
/// Neighbors are tried in the fixed enumeration order N, NE, E, SE, S, SW,
/// W, NW, so the produced path is fully deterministic. A cell's parent is
/// fixed the first time the walk steps onto it, and the search stops as
/// soon as the finish cell is entered. Depth-first gives no optimality
/// guarantee — the path follows whatever branch happened to reach the
/// finish first.
///
/// Beyond the corner-cutting rule, a diagonal step is also skipped when
/// both of its flanking orthogonal neighbors have already been visited:
/// the walk never crosses its own trail diagonally.
///
/// Fails with [`MissingStart`](crate::GridError::MissingStart) /
/// [`MissingFinish`](crate::GridError::MissingFinish) on an unconfigured
/// grid; an unreachable finish is reported as `Ok(None)`.
pub fn depth_first_search(grid: &mut Grid, corner_cutting: bool) -> Result<Option<Path<Point>>> {
	let (start, finish) = super::prepare(grid)?;
	debug!("depth-first search from {start:?} to {finish:?}");

	grid.at_mut(start).mark_visited();
	let mut stack = vec![Frame {
		pos: start,
		neighbors: branch_neighbors(grid, start, corner_cutting),
		next: 0,
	}];

	while let Some(frame) = stack.last_mut() {
		if frame.next >= Direction::ALL.len() {
			stack.pop();
			continue;
		}
		let dir = Direction::ALL[frame.next];
		frame.next += 1;

		let Some(neighbor) = frame.neighbors.get(dir) else {
			continue;
		};
		let here = frame.pos;
		if grid.at(neighbor).visited() {
			continue;
		}

		grid.at_mut(neighbor).set_parent(here);
		grid.at_mut(neighbor).mark_visited();
		trace!("stepping {} to {neighbor:?}", dir.abbreviation());

		if neighbor == finish {
			debug!("finish reached after {} suspended levels", stack.len());
			break;
		}
		let neighbors = branch_neighbors(grid, neighbor, corner_cutting);
		stack.push(Frame {
			pos: neighbor,
			neighbors,
			next: 0,
		});
	}

	Ok(path::reconstruct(grid))
}

/// The walkable neighbors of `p`, additionally dropping diagonals whose
/// flanking orthogonal neighbors were both visited already.
fn branch_neighbors(grid: &Grid, p: Point, corner_cutting: bool) -> NeighborMap {
	let mut map = grid.walkable_neighbors(p, corner_cutting);
	for dir in Direction::DIAGONALS {
		if !map.contains(dir) {
			continue;
		}
		let crossed = [dir.counter_clockwise(), dir.clockwise()]
			.into_iter()
			.all(|flank| {
				map.get(flank)
					.is_some_and(|neighbor| grid.at(neighbor).visited())
			});
		if crossed {
			map.remove(dir);
		}
	}
	map
}

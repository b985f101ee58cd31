//! Breadth-first traversal over the walkable neighbor relation.

use crate::{path, Grid, Path, Point, PointSet, Result};

use log::{debug, trace};
use std::collections::VecDeque;

/// Breadth-first search from the grid's start cell.
///
/// Level-order FIFO traversal. A discovered set prevents re-enqueuing, and
/// a cell's parent is fixed the first time it is discovered, which makes
/// the returned path shortest in number of hops for the configured
/// corner-cutting mode. The search stops as soon as the finish cell is
/// dequeued.
///
/// Fails with [`MissingStart`](crate::GridError::MissingStart) /
/// [`MissingFinish`](crate::GridError::MissingFinish) on an unconfigured
/// grid; an unreachable finish is reported as `Ok(None)`.
pub fn breadth_first_search(grid: &mut Grid, corner_cutting: bool) -> Result<Option<Path<Point>>> {
	let (start, finish) = super::prepare(grid)?;
	debug!("breadth-first search from {start:?} to {finish:?}");

	let mut horizon = VecDeque::new();
	let mut discovered = PointSet::default();
	horizon.push_back(start);
	discovered.insert(start);

	while let Some(current) = horizon.pop_front() {
		if current == finish {
			debug!("finish dequeued after {} discoveries", discovered.len());
			break;
		}
		for (dir, neighbor) in grid.walkable_neighbors(current, corner_cutting).iter() {
			if discovered.insert(neighbor) {
				grid.at_mut(neighbor).set_parent(current);
				trace!("discovered {neighbor:?} via {}", dir.abbreviation());
				horizon.push_back(neighbor);
			}
		}
	}

	Ok(path::reconstruct(grid))
}

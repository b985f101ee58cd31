//! Best-first search ordered by cost-so-far plus a heuristic estimate.

use crate::heuristic::Heuristic;
use crate::{path, Cost, Grid, Path, Point, Result};

use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One open-set entry. Entries are never removed from the heap when a cell
/// is relaxed; a popped entry whose cost no longer matches the cell's
/// stored cost is simply stale and gets skipped.
struct OpenEntry {
	pos: Point,
	g: Cost,
	f: f64,
	seq: u64,
}

impl PartialEq for OpenEntry {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}
impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OpenEntry {
	fn cmp(&self, other: &Self) -> Ordering {
		// reversed on every key so the max-heap pops the smallest f.
		// ties fall back to the smaller cost-so-far, then to insertion
		// order, keeping the expansion sequence fully deterministic
		other
			.f
			.partial_cmp(&self.f)
			.unwrap_or(Ordering::Equal)
			.then_with(|| other.g.cmp(&self.g))
			.then_with(|| other.seq.cmp(&self.seq))
	}
}

/// A* search from the grid's start cell.
///
/// The open set is ordered by `f = g + h`, where `g` is the exact movement
/// cost walked so far and `h` is the heuristic's estimate towards the
/// finish. `h` is computed once per cell when it first enters the open set
/// and reused on every later relaxation. When the heuristic never
/// overestimates the true remaining cost, the returned path is
/// cost-optimal.
///
/// Fails with [`MissingStart`](crate::GridError::MissingStart) /
/// [`MissingFinish`](crate::GridError::MissingFinish) on an unconfigured
/// grid; an unreachable finish is reported as `Ok(None)`.
pub fn a_star_search<H: Heuristic + ?Sized>(
	grid: &mut Grid,
	heuristic: &H,
	corner_cutting: bool,
) -> Result<Option<Path<Point>>> {
	let (start, finish) = super::prepare(grid)?;
	debug!("A* search from {start:?} to {finish:?}");

	let h = heuristic.estimate(start, finish);
	{
		let state = grid.at_mut(start).astar_mut();
		state.g = 0;
		state.h = h;
		state.set_open();
	}

	let mut open = BinaryHeap::new();
	open.push(OpenEntry {
		pos: start,
		g: 0,
		f: h,
		seq: 0,
	});
	let mut seq = 1_u64;
	let mut expanded = 0_usize;

	while let Some(entry) = open.pop() {
		let state = grid.at(entry.pos).astar();
		if state.closed || !state.open || entry.g != state.g {
			continue;
		}
		grid.at_mut(entry.pos).astar_mut().set_closed();
		expanded += 1;

		if entry.pos == finish {
			debug!("finish closed after {expanded} expansions");
			break;
		}

		for (dir, neighbor) in grid.walkable_neighbors(entry.pos, corner_cutting).iter() {
			let tentative = entry.g + dir.cost();
			let state = grid.at(neighbor).astar();
			if state.closed {
				continue;
			}
			if !state.open {
				let h = heuristic.estimate(neighbor, finish);
				let cell = grid.at_mut(neighbor);
				cell.set_parent(entry.pos);
				let state = cell.astar_mut();
				state.g = tentative;
				state.h = h;
				state.set_open();
				trace!("opened {neighbor:?} with g = {tentative}");
				open.push(OpenEntry {
					pos: neighbor,
					g: tentative,
					f: tentative as f64 + h,
					seq,
				});
				seq += 1;
			} else if tentative < state.g {
				// better route to an open cell: only g and the parent
				// change, the stored estimate stays as computed
				let h = grid.at(neighbor).heuristic_cost();
				let cell = grid.at_mut(neighbor);
				cell.set_parent(entry.pos);
				cell.astar_mut().g = tentative;
				trace!("relaxed {neighbor:?} down to g = {tentative}");
				open.push(OpenEntry {
					pos: neighbor,
					g: tentative,
					f: tentative as f64 + h,
					seq,
				});
				seq += 1;
			}
		}
	}

	Ok(path::reconstruct(grid))
}

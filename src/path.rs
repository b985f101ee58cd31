//! Solution paths and the parent-link walk that produces them.

use crate::{Cell, CellStatus, Cost, Direction, Grid, Point};

use std::fmt;
use std::ops::Index;

/// An ordered solution path together with its total movement cost.
///
/// Paths run from the start cell to the finish cell, both included. The
/// cost is the sum of the step costs along the way (10 per orthogonal step,
/// 15 per diagonal step).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<P> {
	steps: Vec<P>,
	cost: Cost,
}

impl<P> Path<P> {
	pub(crate) fn new(steps: Vec<P>, cost: Cost) -> Path<P> {
		Path { steps, cost }
	}

	/// The total movement cost of the path.
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// The number of cells on the path, both endpoints included.
	pub fn len(&self) -> usize {
		self.steps.len()
	}

	/// Whether the path contains no cells.
	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}

	/// Iterates over the path from start to finish.
	pub fn iter(&self) -> std::slice::Iter<'_, P> {
		self.steps.iter()
	}

	/// The path as a slice, ordered start to finish.
	pub fn as_slice(&self) -> &[P] {
		&self.steps
	}
}

impl<P> Index<usize> for Path<P> {
	type Output = P;
	fn index(&self, index: usize) -> &P {
		&self.steps[index]
	}
}

impl<'a, P> IntoIterator for &'a Path<P> {
	type Item = &'a P;
	type IntoIter = std::slice::Iter<'a, P>;
	fn into_iter(self) -> Self::IntoIter {
		self.steps.iter()
	}
}

impl<P> IntoIterator for Path<P> {
	type Item = P;
	type IntoIter = std::vec::IntoIter<P>;
	fn into_iter(self) -> Self::IntoIter {
		self.steps.into_iter()
	}
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
	fn eq(&self, rhs: &Vec<P>) -> bool {
		self.steps == *rhs
	}
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
	fn eq(&self, rhs: &&'a [P]) -> bool {
		self.steps == *rhs
	}
}

impl<P: fmt::Debug> fmt::Display for Path<P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[cost = {}]: ", self.cost)?;
		if self.steps.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{:?}", self.steps[0])?;
			for p in self.steps.iter().skip(1) {
				write!(fmt, " -> {:?}", p)?;
			}
			Ok(())
		}
	}
}

/// Walks the parent chain backwards from the finish cell and turns it into
/// a start→finish [`Path`].
///
/// Returns `None` when the finish cell has no parent, i.e. the search never
/// reached it. Every cell on the chain except the start and the finish is
/// annotated with a [`Waypoint`](CellStatus::Waypoint) status carrying the
/// direction towards its successor, computed from the coordinate offset.
pub(crate) fn reconstruct(grid: &mut Grid) -> Option<Path<Point>> {
	let start = grid.start()?;
	let finish = grid.finish()?;
	grid.cell(finish).and_then(Cell::parent)?;

	let mut steps = vec![finish];
	let mut cost = 0;
	let mut current = finish;
	while current != start {
		let parent = grid.cell(current).and_then(Cell::parent)?;
		let dx = current.0 as isize - parent.0 as isize;
		let dy = current.1 as isize - parent.1 as isize;
		let towards = Direction::from_offset(dx, dy);
		if let Some(dir) = towards {
			cost += dir.cost();
		}
		if parent != start {
			grid.at_mut(parent).set_status(CellStatus::Waypoint(towards));
		}
		steps.push(parent);
		current = parent;
	}
	steps.reverse();
	Some(Path::new(steps, cost))
}

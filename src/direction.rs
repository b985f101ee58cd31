//! The eight directions of travel between adjacent grid cells.

use crate::{Cost, Point};

/// A compass direction from a cell to one of its eight neighbors.
///
/// North is towards positive `y`, east towards positive `x`. Every direction
/// carries a unit offset, a movement cost (10 orthogonal, 15 diagonal) and
/// the compass algebra needed by the corner-cutting rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
	/// Towards `(x, y + 1)`.
	North,
	/// Towards `(x + 1, y + 1)`.
	NorthEast,
	/// Towards `(x + 1, y)`.
	East,
	/// Towards `(x + 1, y - 1)`.
	SouthEast,
	/// Towards `(x, y - 1)`.
	South,
	/// Towards `(x - 1, y - 1)`.
	SouthWest,
	/// Towards `(x - 1, y)`.
	West,
	/// Towards `(x - 1, y + 1)`.
	NorthWest,
}

use self::Direction::*;

impl Direction {
	/// All directions in enumeration order: N, NE, E, SE, S, SW, W, NW.
	///
	/// Searches visit neighbors in this order, which keeps their output
	/// deterministic.
	pub const ALL: [Direction; 8] = [
		North, NorthEast, East, SouthEast, South, SouthWest, West, NorthWest,
	];

	/// The four diagonal directions, in enumeration order.
	pub const DIAGONALS: [Direction; 4] = [NorthEast, SouthEast, SouthWest, NorthWest];

	/// The `(Δx, Δy)` offset of the neighbor in this direction.
	pub fn offset(self) -> (isize, isize) {
		match self {
			North => (0, 1),
			NorthEast => (1, 1),
			East => (1, 0),
			SouthEast => (1, -1),
			South => (0, -1),
			SouthWest => (-1, -1),
			West => (-1, 0),
			NorthWest => (-1, 1),
		}
	}

	/// The cost of moving one step in this direction.
	pub fn cost(self) -> Cost {
		if self.is_diagonal() {
			15
		} else {
			10
		}
	}

	/// Whether this is one of the four diagonal directions.
	pub fn is_diagonal(self) -> bool {
		matches!(self, NorthEast | SouthEast | SouthWest | NorthWest)
	}

	/// The compass abbreviation: `"N"`, `"NE"`, and so on.
	pub fn abbreviation(self) -> &'static str {
		match self {
			North => "N",
			NorthEast => "NE",
			East => "E",
			SouthEast => "SE",
			South => "S",
			SouthWest => "SW",
			West => "W",
			NorthWest => "NW",
		}
	}

	/// The arrow symbol pointing in this direction, used to display
	/// waypoints.
	pub fn arrow(self) -> char {
		match self {
			North => '↑',
			NorthEast => '↗',
			East => '→',
			SouthEast => '↘',
			South => '↓',
			SouthWest => '↙',
			West => '←',
			NorthWest => '↖',
		}
	}

	/// The adjacent direction one 45° step clockwise around the compass.
	pub fn clockwise(self) -> Direction {
		Self::ALL[(self as usize + 1) % 8]
	}

	/// The adjacent direction one 45° step counter-clockwise around the
	/// compass.
	pub fn counter_clockwise(self) -> Direction {
		Self::ALL[(self as usize + 7) % 8]
	}

	/// The opposite direction.
	pub fn opposite(self) -> Direction {
		Self::ALL[(self as usize + 4) % 8]
	}

	/// The direction matching a unit offset, or `None` if `(dx, dy)` is not
	/// a unit offset.
	pub fn from_offset(dx: isize, dy: isize) -> Option<Direction> {
		Self::ALL.iter().copied().find(|d| d.offset() == (dx, dy))
	}

	/// The coordinate one step in this direction from `p`, if it stays
	/// within a `width × height` grid.
	pub(crate) fn step(self, p: Point, width: usize, height: usize) -> Option<Point> {
		let (dx, dy) = self.offset();
		let x = p.0 as isize + dx;
		let y = p.1 as isize + dy;
		if x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height {
			Some((x as usize, y as usize))
		} else {
			None
		}
	}
}

/// The neighbors of a cell, keyed by the direction leading to them.
///
/// A fixed-size stand-in for a hash map from [`Direction`] to [`Point`]:
/// iteration always happens in enumeration order, so every search that walks
/// a `NeighborMap` is deterministic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighborMap {
	slots: [Option<Point>; 8],
}

impl NeighborMap {
	/// The neighbor in direction `dir`, if there is one.
	pub fn get(&self, dir: Direction) -> Option<Point> {
		self.slots[dir as usize]
	}

	/// Whether there is a neighbor in direction `dir`.
	pub fn contains(&self, dir: Direction) -> bool {
		self.slots[dir as usize].is_some()
	}

	/// The number of neighbors in the map.
	pub fn len(&self) -> usize {
		self.slots.iter().filter(|slot| slot.is_some()).count()
	}

	/// Whether the map holds no neighbors at all.
	pub fn is_empty(&self) -> bool {
		self.slots.iter().all(|slot| slot.is_none())
	}

	/// Iterates over `(direction, neighbor)` pairs in enumeration order.
	pub fn iter(&self) -> impl Iterator<Item = (Direction, Point)> + '_ {
		Direction::ALL
			.iter()
			.filter_map(move |&dir| self.slots[dir as usize].map(|p| (dir, p)))
	}

	pub(crate) fn insert(&mut self, dir: Direction, p: Point) {
		self.slots[dir as usize] = Some(p);
	}

	pub(crate) fn remove(&mut self, dir: Direction) -> Option<Point> {
		self.slots[dir as usize].take()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn compass_algebra() {
		assert_eq!(North.clockwise(), NorthEast);
		assert_eq!(North.counter_clockwise(), NorthWest);
		assert_eq!(NorthWest.clockwise(), North);
		assert_eq!(SouthWest.opposite(), NorthEast);
		for dir in Direction::ALL {
			assert_eq!(dir.clockwise().counter_clockwise(), dir);
			assert_eq!(dir.opposite().opposite(), dir);
		}
	}

	#[test]
	fn offsets_round_trip() {
		for dir in Direction::ALL {
			let (dx, dy) = dir.offset();
			assert_eq!(Direction::from_offset(dx, dy), Some(dir));
			assert_eq!(dir.opposite().offset(), (-dx, -dy));
		}
		assert_eq!(Direction::from_offset(0, 0), None);
		assert_eq!(Direction::from_offset(2, 1), None);
	}

	#[test]
	fn costs() {
		assert_eq!(North.cost(), 10);
		assert_eq!(East.cost(), 10);
		assert_eq!(NorthEast.cost(), 15);
		assert_eq!(SouthWest.cost(), 15);
	}

	#[test]
	fn step_respects_bounds() {
		assert_eq!(North.step((0, 4), 5, 5), None);
		assert_eq!(South.step((0, 0), 5, 5), None);
		assert_eq!(West.step((0, 2), 5, 5), None);
		assert_eq!(NorthEast.step((3, 3), 5, 5), Some((4, 4)));
	}

	#[test]
	fn neighbor_map_iterates_in_enumeration_order() {
		let mut map = NeighborMap::default();
		map.insert(West, (0, 1));
		map.insert(North, (1, 2));
		map.insert(SouthEast, (2, 0));

		let pairs: Vec<_> = map.iter().collect();
		assert_eq!(pairs, vec![(North, (1, 2)), (SouthEast, (2, 0)), (West, (0, 1))]);

		assert_eq!(map.len(), 3);
		assert!(map.contains(West));
		map.remove(West);
		assert!(!map.contains(West));
		assert_eq!(map.len(), 2);
	}
}

//! Error types for grid construction and search configuration.

use thiserror::Error;

/// The ways grid setup or a search invocation can fail.
///
/// All of these are configuration errors: they are rejected at the call that
/// introduced them, before any cell is mutated. An unreachable finish is not
/// an error — searches report it as an `Ok(None)` result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
	/// Grid dimensions must both be at least 1.
	#[error("invalid grid dimensions {width}x{height}: both must be at least 1")]
	InvalidDimensions {
		/// The rejected width.
		width: usize,
		/// The rejected height.
		height: usize,
	},

	/// A coordinate lies outside the grid bounds.
	#[error("coordinate ({x}, {y}) is out of range for a {width}x{height} grid")]
	OutOfBounds {
		/// The `x` coordinate that was passed.
		x: usize,
		/// The `y` coordinate that was passed.
		y: usize,
		/// The grid width.
		width: usize,
		/// The grid height.
		height: usize,
	},

	/// Tried to place the start on the finish cell, or the finish on the
	/// start cell. The cell is left unchanged.
	#[error("cell ({x}, {y}) already holds the other endpoint")]
	EndpointOverlap {
		/// The `x` coordinate of the refused cell.
		x: usize,
		/// The `y` coordinate of the refused cell.
		y: usize,
	},

	/// An obstacle line crossed the start or finish cell. The whole line is
	/// rejected; no cell of it is placed.
	#[error("obstacle line crosses the endpoint cell at ({x}, {y})")]
	ObstacleOverlapsEndpoint {
		/// The `x` coordinate of the crossed endpoint.
		x: usize,
		/// The `y` coordinate of the crossed endpoint.
		y: usize,
	},

	/// A search was started on a grid with no start cell.
	#[error("no start cell has been set")]
	MissingStart,

	/// A search was started on a grid with no finish cell.
	#[error("no finish cell has been set")]
	MissingFinish,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GridError>;

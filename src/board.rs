//! # Board
//!
//! Herein are the positions, tiles, and grids on which the word games are
//! played.

use std::{
	error::Error,
	fmt::{self, Display, Formatter}
};

use fixedstr::str8;
use log::trace;

////////////////////////////////////////////////////////////////////////////////
//                                 Positions.                                  //
////////////////////////////////////////////////////////////////////////////////

/// A board coordinate, as a column and row pair. Columns grow rightward and
/// rows grow downward, so `(0, 0)` is the upper left corner of a board.
/// Negative coordinates are representable so that neighbor enumeration can
/// run off the edge of a board and be clipped by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[must_use]
pub struct Position
{
	/// The column, growing rightward from zero.
	pub col: i32,

	/// The row, growing downward from zero.
	pub row: i32
}

/// The eight king-move offsets, in reading order: the row above from left to
/// right, then the two flanks, then the row below from left to right. Path
/// search visits neighbors in exactly this order, which keeps its answers
/// reproducible across runs.
const KING_OFFSETS: [(i32, i32); 8] = [
	(-1, -1), (0, -1), (1, -1),
	(-1, 0), (1, 0),
	(-1, 1), (0, 1), (1, 1)
];

/// The four rook-move offsets, in reading order: above, left, right, below.
const ROOK_OFFSETS: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

impl Position
{
	/// Construct a position from its column and row.
	#[inline]
	pub const fn new(col: i32, row: i32) -> Self
	{
		Self { col, row }
	}

	/// Translate the position by the given column and row deltas.
	///
	/// # Arguments
	///
	/// * `dc` - The column delta.
	/// * `dr` - The row delta.
	///
	/// # Returns
	///
	/// The translated position.
	#[inline]
	#[must_use]
	pub const fn offset(&self, dc: i32, dr: i32) -> Self
	{
		Self { col: self.col + dc, row: self.row + dr }
	}

	/// Answer the eight positions adjacent to this one by a king move, i.e.,
	/// differing by at most one in each of column and row. The neighbors are
	/// enumerated in reading order. Positions outside the board are included;
	/// the caller clips them.
	///
	/// # Returns
	///
	/// The king-move neighbors, in reading order.
	#[must_use]
	pub fn king_neighbors(&self) -> [Position; 8]
	{
		KING_OFFSETS.map(|(dc, dr)| self.offset(dc, dr))
	}

	/// Answer the four positions adjacent to this one by a rook move, i.e.,
	/// differing by exactly one in exactly one of column and row. The
	/// neighbors are enumerated in reading order. Positions outside the board
	/// are included; the caller clips them.
	///
	/// # Returns
	///
	/// The rook-move neighbors, in reading order.
	#[must_use]
	pub fn rook_neighbors(&self) -> [Position; 4]
	{
		ROOK_OFFSETS.map(|(dc, dr)| self.offset(dc, dr))
	}
}

impl Display for Position
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "({}, {})", self.col, self.row)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tiles.                                    //
////////////////////////////////////////////////////////////////////////////////

/// A letter tile, as produced by rolling a die. The label is the text shown
/// on the upper face, which may be more than one character for a digraph die
/// ("Qu") or a blank ("■"). The identity is a small integer assigned by the
/// tile source, stable for the life of a round, so that a tile can be tracked
/// as it moves around a board. Tiles are immutable values; moving one
/// produces a new [`PositionedTile`] rather than mutating anything shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Tile
{
	/// The stable identity of the tile within its round.
	id: usize,

	/// The text on the upper face of the die.
	label: str8
}

impl Tile
{
	/// Construct a tile from its identity and label.
	///
	/// # Arguments
	///
	/// * `id` - The stable identity of the tile within its round.
	/// * `label` - The text on the upper face of the die.
	///
	/// # Returns
	///
	/// The new tile.
	#[inline]
	pub fn new(id: usize, label: &str) -> Self
	{
		Self { id, label: str8::from(label) }
	}

	/// Answer the stable identity of the tile.
	#[inline]
	#[must_use]
	pub fn id(&self) -> usize
	{
		self.id
	}

	/// Answer the text on the upper face of the die.
	#[inline]
	#[must_use]
	pub fn label(&self) -> &str
	{
		self.label.as_str()
	}
}

impl Display for Tile
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "{}", self.label)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                              Positioned tiles.                              //
////////////////////////////////////////////////////////////////////////////////

/// A tile bound to a board position. The engines only ever see placed tiles;
/// a tile still in a rack is tracked by the game layer, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct PositionedTile
{
	/// The tile.
	pub tile: Tile,

	/// The position at which the tile sits.
	pub position: Position
}

impl PositionedTile
{
	/// Bind a tile to a position.
	#[inline]
	pub const fn new(tile: Tile, position: Position) -> Self
	{
		Self { tile, position }
	}

	/// Answer the text on the upper face of the tile's die.
	#[inline]
	#[must_use]
	pub fn label(&self) -> &str
	{
		self.tile.label()
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Grids.                                    //
////////////////////////////////////////////////////////////////////////////////

/// A rectangular board densely covered by tiles, one per cell, as produced by
/// shaking a set of dice into a tray. Construction validates the covering, so
/// an extant grid always has exactly `width * height` tiles and supports
/// constant-time lookup by position. Grids are immutable; a fresh grid is
/// built for each round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Grid
{
	/// The width of the grid, in cells.
	width: usize,

	/// The height of the grid, in cells.
	height: usize,

	/// The tiles, in reading order.
	tiles: Vec<PositionedTile>
}

impl Grid
{
	/// Construct a grid from the given tiles, which must exactly cover the
	/// declared rectangle.
	///
	/// # Arguments
	///
	/// * `width` - The width of the grid, in cells.
	/// * `height` - The height of the grid, in cells.
	/// * `tiles` - The tiles, in any order.
	///
	/// # Returns
	///
	/// The new grid, or an error if the tiles do not exactly cover the
	/// rectangle.
	///
	/// # Errors
	///
	/// * [`InvalidGrid::WrongTileCount`] if the number of tiles differs from
	///   the cell count.
	/// * [`InvalidGrid::OutOfBounds`] if a tile lies outside the rectangle.
	/// * [`InvalidGrid::DuplicateCell`] if two tiles occupy the same cell.
	pub fn new(
		width: usize,
		height: usize,
		tiles: Vec<PositionedTile>
	) -> Result<Self, InvalidGrid>
	{
		let expected = width * height;
		if tiles.len() != expected
		{
			return Err(InvalidGrid::WrongTileCount
			{
				expected,
				actual: tiles.len()
			})
		}
		let mut cells: Vec<Option<PositionedTile>> = vec![None; expected];
		for placed in tiles
		{
			let Position { col, row } = placed.position;
			if col < 0 || row < 0
				|| col as usize >= width || row as usize >= height
			{
				return Err(InvalidGrid::OutOfBounds(placed.position))
			}
			let index = row as usize * width + col as usize;
			if cells[index].is_some()
			{
				return Err(InvalidGrid::DuplicateCell(placed.position))
			}
			cells[index] = Some(placed);
		}
		// Every cell is occupied: the counts match and no tile was dropped
		// for duplication, so flattening loses nothing.
		let tiles = cells.into_iter().flatten().collect();
		trace!("built {}x{} grid", width, height);
		Ok(Self { width, height, tiles })
	}

	/// Answer the width of the grid, in cells.
	#[inline]
	#[must_use]
	pub fn width(&self) -> usize
	{
		self.width
	}

	/// Answer the height of the grid, in cells.
	#[inline]
	#[must_use]
	pub fn height(&self) -> usize
	{
		self.height
	}

	/// Answer all tiles of the grid, in reading order.
	#[inline]
	#[must_use]
	pub fn tiles(&self) -> &[PositionedTile]
	{
		&self.tiles
	}

	/// Answer the rows of the grid, top to bottom.
	#[inline]
	pub fn rows(&self) -> impl Iterator<Item = &[PositionedTile]>
	{
		// The chunk size must be nonzero even for a degenerate empty grid.
		self.tiles.chunks(self.width.max(1))
	}

	/// Look up the tile at the given position. Neighbor enumeration runs off
	/// the edges of the grid, so out-of-bounds positions answer `None` and
	/// are thereby clipped.
	///
	/// # Arguments
	///
	/// * `position` - The position to look up.
	///
	/// # Returns
	///
	/// The tile at the position, or `None` if the position lies outside the
	/// grid.
	#[must_use]
	pub fn get(&self, position: Position) -> Option<&PositionedTile>
	{
		let Position { col, row } = position;
		if col < 0 || row < 0
			|| col as usize >= self.width || row as usize >= self.height
		{
			return None
		}
		Some(&self.tiles[row as usize * self.width + col as usize])
	}
}

impl Display for Grid
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		let mut lines = Vec::with_capacity(self.height * 3);
		for row in self.rows()
		{
			let mut top = String::new();
			let mut mid = String::new();
			let mut bottom = String::new();
			for placed in row
			{
				top.push_str("┌───┐");
				mid.push_str(&format!("│ {:<2}│", placed.label()));
				bottom.push_str("└───┘");
			}
			lines.push(top);
			lines.push(mid);
			lines.push(bottom);
		}
		write!(f, "{}", lines.join("\n"))
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                Grid errors.                                 //
////////////////////////////////////////////////////////////////////////////////

/// The complete enumeration of grid construction errors. Each describes a way
/// in which a set of tiles can fail to cover the declared rectangle exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidGrid
{
	/// The number of tiles differs from the number of cells.
	WrongTileCount
	{
		/// The number of cells in the declared rectangle.
		expected: usize,

		/// The number of tiles actually supplied.
		actual: usize
	},

	/// A tile lies outside the declared rectangle.
	OutOfBounds(Position),

	/// Two or more tiles occupy the same cell.
	DuplicateCell(Position)
}

impl Display for InvalidGrid
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::WrongTileCount { expected, actual } => write!(
				f,
				"grid needs {} tiles, but {} were supplied",
				expected,
				actual
			),
			Self::OutOfBounds(position) =>
				write!(f, "tile position {} lies outside the grid", position),
			Self::DuplicateCell(position) =>
				write!(f, "multiple tiles occupy {}", position)
		}
	}
}

impl Error for InvalidGrid {}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                    //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::board::{Grid, InvalidGrid, Position, PositionedTile, Tile};

	/// Build a grid from rows of single-letter labels, assigning tile
	/// identities in reading order.
	fn grid(rows: &[&str]) -> Grid
	{
		let width = rows[0].chars().count();
		let height = rows.len();
		let mut tiles = Vec::new();
		for (row, labels) in rows.iter().enumerate()
		{
			for (col, label) in labels.chars().enumerate()
			{
				tiles.push(PositionedTile::new(
					Tile::new(tiles.len(), &label.to_string()),
					Position::new(col as i32, row as i32)
				));
			}
		}
		Grid::new(width, height, tiles).unwrap()
	}

	/// Ensure that king-move neighbors are enumerated in reading order.
	#[test]
	fn test_king_neighbors()
	{
		let neighbors = Position::new(1, 1).king_neighbors();
		assert_eq!(
			neighbors,
			[
				Position::new(0, 0),
				Position::new(1, 0),
				Position::new(2, 0),
				Position::new(0, 1),
				Position::new(2, 1),
				Position::new(0, 2),
				Position::new(1, 2),
				Position::new(2, 2)
			]
		);
	}

	/// Ensure that rook-move neighbors are enumerated in reading order, and
	/// that they are exactly the orthogonal subset of the king-move
	/// neighbors.
	#[test]
	fn test_rook_neighbors()
	{
		let position = Position::new(1, 1);
		let neighbors = position.rook_neighbors();
		assert_eq!(
			neighbors,
			[
				Position::new(1, 0),
				Position::new(0, 1),
				Position::new(2, 1),
				Position::new(1, 2)
			]
		);
		let kings = position.king_neighbors();
		for neighbor in neighbors
		{
			assert!(kings.contains(&neighbor));
		}
	}

	/// Ensure that neighbor enumeration is happy to run off the edge of a
	/// board, answering negative coordinates for the caller to clip.
	#[test]
	fn test_neighbors_at_origin()
	{
		let neighbors = Position::new(0, 0).king_neighbors();
		assert_eq!(neighbors[0], Position::new(-1, -1));
		assert_eq!(neighbors[7], Position::new(1, 1));
	}

	/// Ensure that a well-formed tile set produces a grid with reading-order
	/// tiles and working lookup.
	#[test]
	fn test_grid_construction()
	{
		let grid = grid(&["CA", "TS"]);
		assert_eq!(grid.width(), 2);
		assert_eq!(grid.height(), 2);
		assert_eq!(grid.tiles().len(), 4);
		let labels = grid.tiles().iter()
			.map(|placed| placed.label().to_string())
			.collect::<Vec<_>>();
		assert_eq!(labels, ["C", "A", "T", "S"]);
		assert_eq!(grid.get(Position::new(1, 1)).unwrap().label(), "S");
		assert_eq!(grid.get(Position::new(0, 1)).unwrap().label(), "T");
	}

	/// Ensure that out-of-bounds lookups are clipped to `None`.
	#[test]
	fn test_grid_lookup_clips()
	{
		let grid = grid(&["CA", "TS"]);
		assert!(grid.get(Position::new(-1, 0)).is_none());
		assert!(grid.get(Position::new(0, -1)).is_none());
		assert!(grid.get(Position::new(2, 0)).is_none());
		assert!(grid.get(Position::new(0, 2)).is_none());
	}

	/// Ensure that constructing a grid with too few or too many tiles is
	/// rejected.
	#[test]
	fn test_wrong_tile_count()
	{
		let tiles = vec![
			PositionedTile::new(Tile::new(0, "A"), Position::new(0, 0))
		];
		assert_eq!(
			Grid::new(2, 2, tiles),
			Err(InvalidGrid::WrongTileCount { expected: 4, actual: 1 })
		);
	}

	/// Ensure that constructing a grid with a tile outside the rectangle is
	/// rejected.
	#[test]
	fn test_out_of_bounds()
	{
		let tiles = vec![
			PositionedTile::new(Tile::new(0, "A"), Position::new(0, 0)),
			PositionedTile::new(Tile::new(1, "B"), Position::new(2, 0))
		];
		assert_eq!(
			Grid::new(2, 1, tiles),
			Err(InvalidGrid::OutOfBounds(Position::new(2, 0)))
		);
	}

	/// Ensure that constructing a grid with two tiles on the same cell is
	/// rejected.
	#[test]
	fn test_duplicate_cell()
	{
		let tiles = vec![
			PositionedTile::new(Tile::new(0, "A"), Position::new(0, 0)),
			PositionedTile::new(Tile::new(1, "B"), Position::new(0, 0))
		];
		assert_eq!(
			Grid::new(2, 1, tiles),
			Err(InvalidGrid::DuplicateCell(Position::new(0, 0)))
		);
	}

	/// Ensure that tiles supplied out of order are laid into reading order.
	#[test]
	fn test_reading_order_normalization()
	{
		let tiles = vec![
			PositionedTile::new(Tile::new(0, "S"), Position::new(1, 1)),
			PositionedTile::new(Tile::new(1, "C"), Position::new(0, 0)),
			PositionedTile::new(Tile::new(2, "T"), Position::new(0, 1)),
			PositionedTile::new(Tile::new(3, "A"), Position::new(1, 0))
		];
		let grid = Grid::new(2, 2, tiles).unwrap();
		let labels = grid.tiles().iter()
			.map(|placed| placed.label().to_string())
			.collect::<Vec<_>>();
		assert_eq!(labels, ["C", "A", "T", "S"]);
	}

	/// Ensure that a grid renders as rows of boxed dice, with digraph labels
	/// filling the face and single letters padded.
	#[test]
	fn test_grid_display()
	{
		let grid = grid(&["CA", "TS"]);
		let expected = "\
			┌───┐┌───┐\n\
			│ C ││ A │\n\
			└───┘└───┘\n\
			┌───┐┌───┐\n\
			│ T ││ S │\n\
			└───┘└───┘";
		assert_eq!(grid.to_string(), expected);
		let quit = Grid::new(
			1,
			1,
			vec![PositionedTile::new(
				Tile::new(0, "Qu"),
				Position::new(0, 0)
			)]
		).unwrap();
		assert_eq!(quit.to_string(), "┌───┐\n│ Qu│\n└───┘");
	}
}

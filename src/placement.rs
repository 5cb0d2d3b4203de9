//! # Placement
//!
//! Herein is the word extraction engine, which decomposes an arbitrary
//! spread of placed tiles into its maximal horizontal and vertical words and
//! its orthogonally contiguous islands.

use std::collections::{HashMap, VecDeque};

use log::trace;

use crate::board::{Position, PositionedTile};

////////////////////////////////////////////////////////////////////////////////
//                                 Placements.                                 //
////////////////////////////////////////////////////////////////////////////////

/// A sparse spread of tiles on an unbounded board, as laid out during a
/// crossword round. No two tiles share a position. Unlike a [`Grid`], a
/// placement need not cover any rectangle; the interesting questions are
/// which words its tiles spell and whether they hang together.
///
/// [`Grid`]: crate::board::Grid
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct Placement
{
	/// The tiles, in reading order.
	tiles: Vec<PositionedTile>,

	/// The occupancy index, from position to offset within `tiles`.
	occupied: HashMap<Position, usize>
}

impl Placement
{
	/// Construct a placement from the given tiles, which are sorted into
	/// reading order.
	///
	/// # Arguments
	///
	/// * `tiles` - The tiles, in any order.
	///
	/// # Returns
	///
	/// The new placement.
	///
	/// # Panics
	///
	/// If two tiles occupy the same position.
	pub fn from_tiles(mut tiles: Vec<PositionedTile>) -> Self
	{
		tiles.sort_by_key(|placed| (placed.position.row, placed.position.col));
		let mut occupied = HashMap::with_capacity(tiles.len());
		for (index, placed) in tiles.iter().enumerate()
		{
			let previous = occupied.insert(placed.position, index);
			assert!(previous.is_none(), "two tiles occupy {}", placed.position);
		}
		trace!("placement of {} tiles", tiles.len());
		Self { tiles, occupied }
	}

	/// Answer the tiles of the placement, in reading order.
	#[inline]
	#[must_use]
	pub fn tiles(&self) -> &[PositionedTile]
	{
		&self.tiles
	}

	/// Answer the number of placed tiles.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize
	{
		self.tiles.len()
	}

	/// Check if the placement is empty.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool
	{
		self.tiles.is_empty()
	}

	/// Look up the tile at the given position.
	///
	/// # Arguments
	///
	/// * `position` - The position to look up.
	///
	/// # Returns
	///
	/// The tile at the position, or `None` if the position is vacant.
	#[inline]
	#[must_use]
	pub fn get(&self, position: Position) -> Option<&PositionedTile>
	{
		self.occupied.get(&position).map(|&index| &self.tiles[index])
	}

	/// Check if the given position is occupied.
	#[inline]
	#[must_use]
	pub fn contains(&self, position: Position) -> bool
	{
		self.occupied.contains_key(&position)
	}

	/// Extract every maximal run of two or more consecutive tiles along a
	/// row or column. A run starts at a tile with no tile just before it on
	/// the axis and extends as far as tiles continue. A tile may lie in one
	/// horizontal and one vertical run at once. Lone tiles produce no run.
	///
	/// Runs of exactly two tiles are reported like any others; whether a
	/// two-letter word is acceptable is the caller's rule, not ours.
	///
	/// The answer is deterministic: all horizontal runs appear before all
	/// vertical ones, each group in reading order of its starting tile, and
	/// the tiles of a run in increasing coordinate order along its axis.
	///
	/// # Returns
	///
	/// The word runs of the placement.
	#[must_use]
	pub fn extract_runs(&self) -> Vec<WordRun>
	{
		let mut runs = Vec::new();
		for axis in [Axis::Horizontal, Axis::Vertical]
		{
			for placed in &self.tiles
			{
				if self.contains(axis.before(placed.position))
				{
					// Some earlier tile begins this run.
					continue
				}
				let mut tiles = vec![*placed];
				let mut next = axis.after(placed.position);
				while let Some(following) = self.get(next)
				{
					tiles.push(*following);
					next = axis.after(next);
				}
				if tiles.len() >= 2
				{
					runs.push(WordRun { axis, tiles });
				}
			}
		}
		trace!("extracted {} runs", runs.len());
		runs
	}

	/// Partition the placement into its islands: the maximal sets of tiles
	/// connected through rook-move adjacency. Diagonal contact does not
	/// connect. The islands are answered largest first, so the caller can
	/// treat the leading island as the main body and the rest as strays;
	/// islands of equal size keep their discovery order, which follows the
	/// reading order of their first tiles.
	///
	/// # Returns
	///
	/// The islands of the placement, largest first.
	#[must_use]
	pub fn connected_components(&self) -> Vec<Island>
	{
		let mut assigned = vec![false; self.tiles.len()];
		let mut islands = Vec::new();
		for (index, placed) in self.tiles.iter().enumerate()
		{
			if assigned[index]
			{
				continue
			}
			// Flood outward from this tile over rook adjacency.
			let mut tiles = Vec::new();
			let mut frontier = VecDeque::new();
			assigned[index] = true;
			frontier.push_back(*placed);
			while let Some(current) = frontier.pop_front()
			{
				tiles.push(current);
				for neighbor in current.position.rook_neighbors()
				{
					if let Some(&i) = self.occupied.get(&neighbor)
					{
						if !assigned[i]
						{
							assigned[i] = true;
							frontier.push_back(self.tiles[i]);
						}
					}
				}
			}
			islands.push(Island(tiles));
		}
		// The sort is stable, so islands of equal size keep discovery
		// order.
		islands.sort_by(|a, b| b.len().cmp(&a.len()));
		trace!("partitioned into {} islands", islands.len());
		islands
	}
}

impl FromIterator<PositionedTile> for Placement
{
	fn from_iter<T: IntoIterator<Item = PositionedTile>>(iter: T) -> Self
	{
		Self::from_tiles(iter.into_iter().collect())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                 Word runs.                                  //
////////////////////////////////////////////////////////////////////////////////

/// The axis along which a word run reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis
{
	/// The run reads left to right along a row.
	Horizontal,

	/// The run reads top to bottom along a column.
	Vertical
}

impl Axis
{
	/// Answer the position just before the given one along the axis.
	#[inline]
	fn before(&self, position: Position) -> Position
	{
		match self
		{
			Self::Horizontal => position.offset(-1, 0),
			Self::Vertical => position.offset(0, -1)
		}
	}

	/// Answer the position just after the given one along the axis.
	#[inline]
	fn after(&self, position: Position) -> Position
	{
		match self
		{
			Self::Horizontal => position.offset(1, 0),
			Self::Vertical => position.offset(0, 1)
		}
	}
}

/// A maximal run of two or more consecutive tiles along one axis, reading
/// one of the words spelled by a placement.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct WordRun
{
	/// The axis along which the run reads.
	axis: Axis,

	/// The tiles of the run, in increasing coordinate order along the axis.
	tiles: Vec<PositionedTile>
}

impl WordRun
{
	/// Answer the axis along which the run reads.
	#[inline]
	#[must_use]
	pub fn axis(&self) -> Axis
	{
		self.axis
	}

	/// Answer the tiles of the run, in reading order along its axis.
	#[inline]
	#[must_use]
	pub fn tiles(&self) -> &[PositionedTile]
	{
		&self.tiles
	}

	/// Answer the number of tiles in the run, always at least two.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize
	{
		self.tiles.len()
	}

	/// Check if the run is empty. An extracted run never is.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool
	{
		self.tiles.is_empty()
	}

	/// Answer the word read by the run, as the concatenation of its tile
	/// labels.
	#[must_use]
	pub fn word(&self) -> String
	{
		self.tiles.iter().map(PositionedTile::label).collect()
	}

	/// Check if the run passes through the given position.
	#[must_use]
	pub fn contains(&self, position: Position) -> bool
	{
		self.tiles.iter().any(|placed| placed.position == position)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                  Islands.                                   //
////////////////////////////////////////////////////////////////////////////////

/// A maximal set of placed tiles connected through rook-move adjacency.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Island(Vec<PositionedTile>);

impl Island
{
	/// Answer the tiles of the island, in flood discovery order.
	#[inline]
	#[must_use]
	pub fn tiles(&self) -> &[PositionedTile]
	{
		&self.0
	}

	/// Answer the number of tiles in the island, always at least one.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize
	{
		self.0.len()
	}

	/// Check if the island is empty. A discovered island never is.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool
	{
		self.0.is_empty()
	}

	/// Check if the island contains the given position.
	#[must_use]
	pub fn contains(&self, position: Position) -> bool
	{
		self.0.iter().any(|placed| placed.position == position)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                    //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::{
		board::{Position, PositionedTile, Tile},
		placement::{Axis, Placement}
	};

	/// Build a placement from labeled coordinates, assigning tile identities
	/// in the order given.
	fn placement(tiles: &[(&str, i32, i32)]) -> Placement
	{
		tiles.iter()
			.enumerate()
			.map(|(id, &(label, col, row))| {
				PositionedTile::new(
					Tile::new(id, label),
					Position::new(col, row)
				)
			})
			.collect()
	}

	/// Ensure that a single row of consecutive tiles yields exactly one
	/// horizontal run reading the whole word, and exactly one island.
	#[test]
	fn test_row_run()
	{
		let placement = placement(&[
			("T", 0, 0), ("E", 1, 0), ("S", 2, 0), ("T", 3, 0)
		]);
		let runs = placement.extract_runs();
		assert_eq!(runs.len(), 1);
		assert_eq!(runs[0].axis(), Axis::Horizontal);
		assert_eq!(runs[0].len(), 4);
		assert_eq!(runs[0].word(), "TEST");
		let islands = placement.connected_components();
		assert_eq!(islands.len(), 1);
		assert_eq!(islands[0].len(), 4);
	}

	/// Ensure that a crossing produces one run per axis, horizontal runs
	/// first, with the shared tile in both.
	#[test]
	fn test_crossing_runs()
	{
		let placement = placement(&[
			("C", 0, 1), ("A", 1, 1), ("T", 2, 1),
			("R", 1, 0), ("T", 1, 2)
		]);
		let runs = placement.extract_runs();
		assert_eq!(runs.len(), 2);
		assert_eq!(runs[0].axis(), Axis::Horizontal);
		assert_eq!(runs[0].word(), "CAT");
		assert_eq!(runs[1].axis(), Axis::Vertical);
		assert_eq!(runs[1].word(), "RAT");
		let shared = Position::new(1, 1);
		assert!(runs[0].contains(shared));
		assert!(runs[1].contains(shared));
	}

	/// Ensure that a run of exactly two tiles is reported; rejecting short
	/// words is the caller's business.
	#[test]
	fn test_length_two_run_reported()
	{
		let placement = placement(&[("A", 0, 0), ("T", 1, 0)]);
		let runs = placement.extract_runs();
		assert_eq!(runs.len(), 1);
		assert_eq!(runs[0].word(), "AT");
		assert_eq!(runs[0].len(), 2);
	}

	/// Ensure that lone tiles yield no runs, and that diagonal contact
	/// neither forms a run nor joins an island.
	#[test]
	fn test_diagonal_contact()
	{
		let placement = placement(&[("A", 0, 0), ("B", 1, 1)]);
		assert!(placement.extract_runs().is_empty());
		let islands = placement.connected_components();
		assert_eq!(islands.len(), 2);
	}

	/// Ensure that disjoint groups are answered as separate islands with the
	/// largest first.
	#[test]
	fn test_two_islands_largest_first()
	{
		let placement = placement(&[
			("C", 0, 0), ("A", 1, 0), ("T", 2, 0),
			("O", 5, 5), ("N", 5, 6)
		]);
		let islands = placement.connected_components();
		assert_eq!(islands.len(), 2);
		assert_eq!(islands[0].len(), 3);
		assert_eq!(islands[1].len(), 2);
		assert!(islands[0].contains(Position::new(0, 0)));
		assert!(islands[1].contains(Position::new(5, 5)));
	}

	/// Ensure that islands of equal size keep the reading order of their
	/// first tiles.
	#[test]
	fn test_equal_islands_keep_order()
	{
		let placement = placement(&[
			("A", 0, 0), ("B", 1, 0),
			("C", 4, 0), ("D", 5, 0)
		]);
		let islands = placement.connected_components();
		assert_eq!(islands.len(), 2);
		assert!(islands[0].contains(Position::new(0, 0)));
		assert!(islands[1].contains(Position::new(4, 0)));
	}

	/// Ensure that the islands exactly partition the placement: every tile
	/// lies in exactly one island.
	#[test]
	fn test_islands_partition()
	{
		let placement = placement(&[
			("A", 0, 0), ("B", 1, 0), ("C", 1, 1),
			("D", 3, 3),
			("E", 6, 0), ("F", 6, 1)
		]);
		let islands = placement.connected_components();
		let total = islands.iter().map(|island| island.len()).sum::<usize>();
		assert_eq!(total, placement.len());
		for placed in placement.tiles()
		{
			let homes = islands.iter()
				.filter(|island| island.contains(placed.position))
				.count();
			assert_eq!(homes, 1);
		}
	}

	/// Ensure that an orthogonally connected bent shape is one island even
	/// though it spans several runs.
	#[test]
	fn test_bent_shape_single_island()
	{
		let placement = placement(&[
			("L", 0, 0), ("O", 0, 1), ("W", 0, 2),
			("E", 1, 2), ("B", 2, 2)
		]);
		let islands = placement.connected_components();
		assert_eq!(islands.len(), 1);
		assert_eq!(islands[0].len(), 5);
	}

	/// Ensure that extraction and partitioning answer identically when
	/// repeated on the same placement.
	#[test]
	fn test_deterministic()
	{
		let placement = placement(&[
			("C", 0, 1), ("A", 1, 1), ("T", 2, 1),
			("R", 1, 0), ("T", 1, 2),
			("X", 9, 9)
		]);
		assert_eq!(placement.extract_runs(), placement.extract_runs());
		assert_eq!(
			placement.connected_components(),
			placement.connected_components()
		);
	}

	/// Ensure that an empty placement has no runs and no islands.
	#[test]
	fn test_empty_placement()
	{
		let placement = Placement::from_tiles(vec![]);
		assert!(placement.is_empty());
		assert!(placement.extract_runs().is_empty());
		assert!(placement.connected_components().is_empty());
	}

	/// Ensure that two tiles on the same position are rejected outright.
	#[test]
	#[should_panic]
	fn test_duplicate_position_panics()
	{
		let _ = placement(&[("A", 0, 0), ("B", 0, 0)]);
	}
}

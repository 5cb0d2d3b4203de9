//! # Search
//!
//! Herein is the path search engine, which decides whether a candidate word
//! can be traced through a grid of letter dice along king-move adjacency
//! without landing on any die twice.

use log::{debug, trace};

use crate::board::{Grid, Position, PositionedTile};

////////////////////////////////////////////////////////////////////////////////
//                                   Paths.                                    //
////////////////////////////////////////////////////////////////////////////////

/// A successful trace of a word through a grid: a sequence of tiles, each
/// king-adjacent to its predecessor, visiting no cell twice, whose
/// concatenated labels spell the word.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Path(Vec<PositionedTile>);

impl Path
{
	/// Answer the tiles of the path, in trace order.
	#[inline]
	#[must_use]
	pub fn tiles(&self) -> &[PositionedTile]
	{
		&self.0
	}

	/// Answer the number of tiles in the path. This may be smaller than the
	/// character count of the word, since a digraph die spells two characters
	/// from one tile.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize
	{
		self.0.len()
	}

	/// Check if the path is empty. A path produced by [`find_path`] never
	/// is.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool
	{
		self.0.is_empty()
	}

	/// Answer the word spelled by the path, as the concatenation of its tile
	/// labels.
	///
	/// # Returns
	///
	/// The word spelled by the path.
	#[must_use]
	pub fn word(&self) -> String
	{
		self.0.iter().map(PositionedTile::label).collect()
	}

	/// Check if the path visits the given position.
	///
	/// # Arguments
	///
	/// * `position` - The position of interest.
	///
	/// # Returns
	///
	/// `true` if the path visits the position, `false` otherwise.
	#[must_use]
	pub fn visits(&self, position: Position) -> bool
	{
		self.0.iter().any(|placed| placed.position == position)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                Path search.                                 //
////////////////////////////////////////////////////////////////////////////////

/// Search the grid for a path that spells the given word. Matching is
/// case-insensitive. Candidate starting cells are considered in reading
/// order, and neighbors are considered in the fixed order of
/// [`king_neighbors`](Position::king_neighbors), so of several valid paths
/// the same one is found every time.
///
/// A die whose label has several characters spells all of them or nothing:
/// it matches only where the whole label coincides with the next characters
/// of the word. A blank die ("■") therefore never matches.
///
/// # Arguments
///
/// * `grid` - The grid to search.
/// * `word` - The word to trace. Must be nonempty.
///
/// # Returns
///
/// The first path that spells the word, or `None` if the word cannot be
/// formed on this grid. `None` is an ordinary answer, not a failure.
///
/// # Panics
///
/// If `word` is empty.
#[must_use]
pub fn find_path(grid: &Grid, word: &str) -> Option<Path>
{
	assert!(!word.is_empty(), "target word must be nonempty");
	let target = word.to_ascii_uppercase();
	let mut visited = vec![false; grid.tiles().len()];
	let mut trail = Vec::new();
	for placed in grid.tiles()
	{
		if extend(grid, &target, placed, &mut visited, &mut trail)
		{
			debug!("traced {} through {} dice", target, trail.len());
			return Some(Path(trail))
		}
	}
	trace!("no path spells {}", target);
	None
}

/// Try to extend the trail through the given unvisited cell, consuming the
/// front of the remaining target text. On success the cell stays marked and
/// on the trail; on failure both marks are undone, so sibling branches see a
/// clean board.
///
/// # Arguments
///
/// * `grid` - The grid under search.
/// * `remainder` - The unmatched tail of the target word.
/// * `placed` - The cell to extend through.
/// * `visited` - The visitation marks, indexed in reading order.
/// * `trail` - The tiles matched so far, in trace order.
///
/// # Returns
///
/// `true` if the remainder was fully matched through this cell, `false`
/// otherwise.
fn extend(
	grid: &Grid,
	remainder: &str,
	placed: &PositionedTile,
	visited: &mut Vec<bool>,
	trail: &mut Vec<PositionedTile>
) -> bool
{
	let label = placed.label();
	if !label_matches(label, remainder)
	{
		return false
	}
	let index = cell_index(grid, placed.position);
	visited[index] = true;
	trail.push(*placed);
	let remainder = &remainder[label.len()..];
	if remainder.is_empty()
	{
		return true
	}
	for neighbor in placed.position.king_neighbors()
	{
		if let Some(next) = grid.get(neighbor)
		{
			if !visited[cell_index(grid, next.position)]
				&& extend(grid, remainder, next, visited, trail)
			{
				return true
			}
		}
	}
	// Unwind the speculative match.
	visited[index] = false;
	trail.pop();
	false
}

/// Decide whether a die label matches the front of the remaining target
/// text. A multi-character label matches in full or not at all.
///
/// # Arguments
///
/// * `label` - The die label.
/// * `remainder` - The unmatched tail of the target word.
///
/// # Returns
///
/// `true` if the label spells the front of the remainder, `false` otherwise.
#[inline]
fn label_matches(label: &str, remainder: &str) -> bool
{
	label.len() <= remainder.len()
		&& label.as_bytes()
			.eq_ignore_ascii_case(&remainder.as_bytes()[..label.len()])
}

/// Map an in-grid position to its reading-order cell index.
#[inline]
fn cell_index(grid: &Grid, position: Position) -> usize
{
	position.row as usize * grid.width() + position.col as usize
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                    //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::{
		board::{Grid, Position, PositionedTile, Tile},
		search::{find_path, Path}
	};

	/// Build a grid from rows of single-letter labels, assigning tile
	/// identities in reading order.
	fn grid(rows: &[&str]) -> Grid
	{
		let rows = rows.iter()
			.map(|labels| {
				labels.chars().map(|c| c.to_string()).collect::<Vec<_>>()
			})
			.collect::<Vec<_>>();
		let rows = rows.iter()
			.map(|labels| {
				labels.iter().map(String::as_str).collect::<Vec<_>>()
			})
			.collect::<Vec<_>>();
		grid_labeled(&rows)
	}

	/// Build a grid from rows of arbitrary labels, such as digraph or blank
	/// faces, assigning tile identities in reading order.
	fn grid_labeled(rows: &[Vec<&str>]) -> Grid
	{
		let width = rows[0].len();
		let height = rows.len();
		let mut tiles = Vec::new();
		for (row, labels) in rows.iter().enumerate()
		{
			for (col, label) in labels.iter().enumerate()
			{
				tiles.push(PositionedTile::new(
					Tile::new(tiles.len(), label),
					Position::new(col as i32, row as i32)
				));
			}
		}
		Grid::new(width, height, tiles).unwrap()
	}

	/// Assert the invariants of a found path: the labels spell the word, the
	/// tiles are consecutively king-adjacent, and no cell repeats.
	fn assert_path_valid(path: &Path, word: &str)
	{
		assert!(path.word().eq_ignore_ascii_case(word));
		for pair in path.tiles().windows(2)
		{
			let neighbors = pair[0].position.king_neighbors();
			assert!(neighbors.contains(&pair[1].position));
		}
		for (i, placed) in path.tiles().iter().enumerate()
		{
			for other in &path.tiles()[i + 1..]
			{
				assert_ne!(placed.position, other.position);
			}
		}
	}

	/// Ensure that a word running along the top row is found, and that a
	/// word with no matching starting die is not.
	#[test]
	fn test_straight_word()
	{
		let grid = grid(&["CATS", "EIRN", "LPOU", "MWQZ"]);
		let path = find_path(&grid, "CAT").unwrap();
		assert_path_valid(&path, "CAT");
		assert_eq!(path.len(), 3);
		let positions = path.tiles().iter()
			.map(|placed| placed.position)
			.collect::<Vec<_>>();
		assert_eq!(
			positions,
			[Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
		);
		assert!(find_path(&grid, "DOG").is_none());
	}

	/// Ensure that matching is insensitive to the case of the candidate
	/// word.
	#[test]
	fn test_case_insensitive()
	{
		let grid = grid(&["CATS", "EIRN", "LPOU", "MWQZ"]);
		let lower = find_path(&grid, "cat").unwrap();
		let upper = find_path(&grid, "CAT").unwrap();
		assert_eq!(lower, upper);
	}

	/// Ensure that a die may not be landed on twice, but that a second die
	/// with the same label serves.
	#[test]
	fn test_no_reuse()
	{
		let one_a = grid(&["AB"]);
		assert!(find_path(&one_a, "ABA").is_none());
		let two_a = grid(&["ABA"]);
		let path = find_path(&two_a, "ABA").unwrap();
		assert_path_valid(&path, "ABA");
	}

	/// Ensure that consecutive letters must sit on adjacent dice.
	#[test]
	fn test_adjacency_required()
	{
		let grid = grid(&["AXB"]);
		assert!(find_path(&grid, "AB").is_none());
	}

	/// Ensure that diagonal adjacency counts.
	#[test]
	fn test_diagonal_step()
	{
		let grid = grid(&["AX", "XB"]);
		let path = find_path(&grid, "AB").unwrap();
		assert_path_valid(&path, "AB");
	}

	/// Ensure that a failed branch is fully unwound: the dead-end die must
	/// not stay marked, and must not appear in the path eventually found.
	#[test]
	fn test_backtracking()
	{
		// CAB through C(1,0) first tries A(0,0), which strands B, and must
		// back out and reach B through A(2,0).
		let grid = grid(&["ACA", "XXB"]);
		let path = find_path(&grid, "CAB").unwrap();
		assert_path_valid(&path, "CAB");
		let positions = path.tiles().iter()
			.map(|placed| placed.position)
			.collect::<Vec<_>>();
		assert_eq!(
			positions,
			[Position::new(1, 0), Position::new(2, 0), Position::new(2, 1)]
		);
	}

	/// Ensure that of several valid paths, the same one is found every time:
	/// starting cells scan in reading order and neighbors are tried in a
	/// fixed order.
	#[test]
	fn test_deterministic_choice()
	{
		let grid = grid(&["AB", "BX"]);
		let first = find_path(&grid, "AB").unwrap();
		let positions = first.tiles().iter()
			.map(|placed| placed.position)
			.collect::<Vec<_>>();
		// The east neighbor precedes the south one.
		assert_eq!(
			positions,
			[Position::new(0, 0), Position::new(1, 0)]
		);
		let second = find_path(&grid, "AB").unwrap();
		assert_eq!(first, second);
	}

	/// Ensure that a digraph die spells both of its characters from one
	/// tile, and refuses to spell only the first.
	#[test]
	fn test_digraph_die()
	{
		let grid = grid_labeled(&[
			vec!["Qu", "I"],
			vec!["T", "E"]
		]);
		let path = find_path(&grid, "quite").unwrap();
		assert_path_valid(&path, "QuITE");
		assert_eq!(path.len(), 4);
		// The die spells QU, never a bare Q.
		assert!(find_path(&grid, "QI").is_none());
	}

	/// Ensure that a blank die never matches any character.
	#[test]
	fn test_blank_die()
	{
		let grid = grid_labeled(&[
			vec!["■", "A"],
			vec!["T", "X"]
		]);
		let path = find_path(&grid, "AT").unwrap();
		assert_path_valid(&path, "AT");
		assert!(!path.visits(Position::new(0, 0)));
		assert!(find_path(&grid, "BAT").is_none());
	}

	/// Ensure that a word of a single letter is traced by a single die.
	#[test]
	fn test_single_letter()
	{
		let grid = grid(&["AB"]);
		let path = find_path(&grid, "B").unwrap();
		assert_eq!(path.len(), 1);
		assert_eq!(path.tiles()[0].position, Position::new(1, 0));
	}

	/// Ensure that an empty candidate word is rejected outright.
	#[test]
	#[should_panic]
	fn test_empty_word_panics()
	{
		let grid = grid(&["AB"]);
		let _ = find_path(&grid, "");
	}
}

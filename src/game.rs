//! # Game
//!
//! Herein are the rules of the games, sitting between the engines and the
//! front ends: which plays count, why a play was refused, and whether a
//! finished crossword stands. The dictionary is consulted here and only
//! here; the engines answer geometry, not spelling.

use std::rc::Rc;

use log::debug;

use crate::{
	board::{Grid, PositionedTile},
	dice::Variant,
	dictionary::Dictionary,
	placement::{Placement, WordRun},
	score::{crossword_score, score},
	search::{find_path, Path}
};

////////////////////////////////////////////////////////////////////////////////
//                                Word scores.                                 //
////////////////////////////////////////////////////////////////////////////////

/// Why a played word scored what it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreReason
{
	/// The word counted.
	Success,

	/// The word was already played this round.
	AlreadyPlayed,

	/// The word is shorter than the variant's minimum.
	TooShort,

	/// The word cannot be traced on the board.
	Unplayable,

	/// The word is not in the dictionary.
	Misspelt
}

impl ScoreReason
{
	/// Answer the label shown beside the word in a round summary. A
	/// successful play shows nothing.
	#[must_use]
	pub fn label(&self) -> &'static str
	{
		match self
		{
			Self::Success => "",
			Self::AlreadyPlayed => "Duplicate Word",
			Self::TooShort => "Too short",
			Self::Unplayable => "Unplayable",
			Self::Misspelt => "Misspelt"
		}
	}
}

/// The outcome of one played word.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct WordScore
{
	/// The word as played, normalized to uppercase.
	pub word: String,

	/// The points awarded. Zero unless the play succeeded.
	pub score: u32,

	/// Why the play scored what it did.
	pub reason: ScoreReason
}

////////////////////////////////////////////////////////////////////////////////
//                          Shake-and-search rounds.                           //
////////////////////////////////////////////////////////////////////////////////

/// One round of the shake-and-search game: a shaken grid, the dictionary,
/// and the plays made so far. Every play is recorded, refused ones included,
/// so the round summary can show the player what went wrong.
#[derive(Clone, Debug)]
#[must_use]
pub struct BoggleRound
{
	/// The board variant in play.
	variant: Variant,

	/// The shaken grid.
	grid: Grid,

	/// The dictionary to check plays against.
	dictionary: Rc<Dictionary>,

	/// The plays made so far, in play order.
	plays: Vec<WordScore>
}

impl BoggleRound
{
	/// Start a round on the given grid.
	///
	/// # Arguments
	///
	/// * `variant` - The board variant in play.
	/// * `grid` - The shaken grid.
	/// * `dictionary` - The dictionary to check plays against.
	///
	/// # Returns
	///
	/// The new round, with no plays yet.
	///
	/// # Panics
	///
	/// If the grid's shape is not the variant's.
	pub fn new(
		variant: Variant,
		grid: Grid,
		dictionary: Rc<Dictionary>
	) -> Self
	{
		assert_eq!(grid.width(), variant.width());
		assert_eq!(grid.height(), variant.height());
		Self { variant, grid, dictionary, plays: Vec::new() }
	}

	/// Answer the board variant in play.
	#[inline]
	#[must_use]
	pub fn variant(&self) -> Variant
	{
		self.variant
	}

	/// Answer the shaken grid.
	#[inline]
	#[must_use]
	pub fn grid(&self) -> &Grid
	{
		&self.grid
	}

	/// Answer the dictionary the round checks plays against.
	#[inline]
	#[must_use]
	pub fn dictionary(&self) -> &Dictionary
	{
		&self.dictionary
	}

	/// Play a word. The word is normalized, judged, scored, and recorded,
	/// in that order. Judgment stops at the first failure: a repeated word
	/// is a duplicate even if it would also be too short, a word too short
	/// is refused before the board is searched, a word untraceable on the
	/// board is refused before the dictionary is consulted.
	///
	/// # Arguments
	///
	/// * `word` - The word to play.
	///
	/// # Returns
	///
	/// The outcome of the play, also retained in [`plays`](Self::plays).
	pub fn play_word(&mut self, word: &str) -> WordScore
	{
		let word = word.trim().to_ascii_uppercase();
		let reason = if self.plays.iter().any(|play| play.word == word)
		{
			ScoreReason::AlreadyPlayed
		}
		else if word.chars().count() < self.variant.minimum_word_length()
		{
			ScoreReason::TooShort
		}
		else if find_path(&self.grid, &word).is_none()
		{
			ScoreReason::Unplayable
		}
		else if !self.dictionary.is_word(&word)
		{
			ScoreReason::Misspelt
		}
		else
		{
			ScoreReason::Success
		};
		let score = match reason
		{
			ScoreReason::Success =>
				score(word.chars().count(), self.variant),
			_ => 0
		};
		let play = WordScore { word, score, reason };
		debug!("played {}: {:?} for {}", play.word, play.reason, play.score);
		self.plays.push(play.clone());
		play
	}

	/// Trace a word on the board without playing it, for highlighting a
	/// candidate while it is typed.
	///
	/// # Arguments
	///
	/// * `word` - The candidate word.
	///
	/// # Returns
	///
	/// The path spelling the word, or `None` if the word is blank or cannot
	/// be formed.
	#[must_use]
	pub fn search(&self, word: &str) -> Option<Path>
	{
		let word = word.trim();
		if word.is_empty()
		{
			return None
		}
		find_path(&self.grid, word)
	}

	/// Answer the plays made so far, in play order.
	#[inline]
	#[must_use]
	pub fn plays(&self) -> &[WordScore]
	{
		&self.plays
	}

	/// Answer the round total: the points of the successful plays.
	#[must_use]
	pub fn total(&self) -> u32
	{
		self.plays.iter().map(|play| play.score).sum()
	}
}

////////////////////////////////////////////////////////////////////////////////
//                              Crossword checks.                              //
////////////////////////////////////////////////////////////////////////////////

/// The parameters that distinguish the crossword games.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct CrosswordRules
{
	/// The number of dice in the rack, all of which must end up placed and
	/// working in some word.
	pub rack_size: usize,

	/// Whether words of exactly two letters are acceptable.
	pub allow_two_letter_words: bool
}

impl CrosswordRules
{
	/// The rules of the twelve-die crossword game: every die placed,
	/// two-letter words tolerated.
	#[inline]
	pub const fn qless() -> Self
	{
		Self { rack_size: 12, allow_two_letter_words: true }
	}

	/// The rules of the seven-die valued crossword game: every die placed,
	/// two-letter words refused.
	#[inline]
	pub const fn scrabble_dice() -> Self
	{
		Self { rack_size: 7, allow_two_letter_words: false }
	}
}

/// The verdict on a finished crossword. The failing verdicts carry the
/// offending tiles so a front end can point at them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum CrosswordVerdict
{
	/// Dice remain idle. The carried tiles are placed but work in no word;
	/// dice still in the rack are counted against
	/// [`rack_size`](CrosswordRules::rack_size) but carry no position to
	/// report.
	Incomplete
	{
		/// The placed tiles working in no word.
		unused: Vec<PositionedTile>
	},

	/// Words of exactly two letters, where the rules refuse them.
	TwoLetterWords
	{
		/// The tiles of the offending runs.
		tiles: Vec<PositionedTile>
	},

	/// The tiles do not hang together in one block.
	SplitBlock
	{
		/// The tiles of every island but the largest.
		strays: Vec<PositionedTile>
	},

	/// Some words are not in the dictionary.
	Misspelt
	{
		/// The tiles of the misspelt runs.
		tiles: Vec<PositionedTile>,

		/// The misspelt words.
		words: Vec<String>
	},

	/// The crossword stands, checked against the dictionary.
	Valid
	{
		/// The words of the crossword.
		words: Vec<String>
	},

	/// The crossword is shaped like a winner, but no dictionary was at hand
	/// to check the spelling.
	Unverified
	{
		/// The words of the crossword.
		words: Vec<String>
	}
}

/// Judge a finished crossword against the given rules. The checks run in a
/// fixed order and the first failure is the verdict: idle dice, then
/// two-letter words, then disconnection, then spelling. A lone stray die is
/// thereby reported as idle, not as a split block.
///
/// # Arguments
///
/// * `placement` - The placed tiles.
/// * `rules` - The rules of the game in play.
/// * `dictionary` - The dictionary, if one is at hand. Without one, a
///   well-shaped crossword is answered as unverified rather than valid.
///
/// # Returns
///
/// The verdict.
#[must_use]
pub fn check_crossword(
	placement: &Placement,
	rules: &CrosswordRules,
	dictionary: Option<&Dictionary>
) -> CrosswordVerdict
{
	let runs = placement.extract_runs();
	let unused = placement.tiles().iter()
		.filter(|placed| {
			!runs.iter().any(|run| run.contains(placed.position))
		})
		.copied()
		.collect::<Vec<_>>();
	if placement.len() < rules.rack_size || !unused.is_empty()
	{
		debug!(
			"incomplete: {} placed, {} idle",
			placement.len(),
			unused.len()
		);
		return CrosswordVerdict::Incomplete { unused }
	}
	if !rules.allow_two_letter_words
	{
		let tiles = runs.iter()
			.filter(|run| run.len() == 2)
			.flat_map(|run| run.tiles().iter().copied())
			.collect::<Vec<_>>();
		if !tiles.is_empty()
		{
			debug!("two-letter words on the board");
			return CrosswordVerdict::TwoLetterWords { tiles }
		}
	}
	let islands = placement.connected_components();
	if islands.len() > 1
	{
		// The largest island is the main body; all the rest are strays.
		let strays = islands[1..].iter()
			.flat_map(|island| island.tiles().iter().copied())
			.collect::<Vec<_>>();
		debug!("split block: {} islands", islands.len());
		return CrosswordVerdict::SplitBlock { strays }
	}
	let words = runs.iter().map(WordRun::word).collect::<Vec<_>>();
	match dictionary
	{
		Some(dictionary) =>
		{
			let misspelt = runs.iter()
				.filter(|run| !dictionary.is_word(&run.word()))
				.collect::<Vec<_>>();
			if !misspelt.is_empty()
			{
				let words = misspelt.iter()
					.map(|run| run.word())
					.collect::<Vec<_>>();
				let tiles = misspelt.iter()
					.flat_map(|run| run.tiles().iter().copied())
					.collect::<Vec<_>>();
				debug!("misspelt: {}", words.join(", "));
				return CrosswordVerdict::Misspelt { tiles, words }
			}
			debug!("valid crossword: {}", words.join(", "));
			CrosswordVerdict::Valid { words }
		}
		None =>
		{
			debug!("unverified crossword: {}", words.join(", "));
			CrosswordVerdict::Unverified { words }
		}
	}
}

/// Total a completed crossword by the published length table.
///
/// # Arguments
///
/// * `words` - The words of the crossword.
///
/// # Returns
///
/// The points awarded.
#[must_use]
pub fn crossword_total(words: &[String]) -> u32
{
	words.iter()
		.map(|word| crossword_score(word.chars().count()))
		.sum()
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                    //
////////////////////////////////////////////////////////////////////////////////

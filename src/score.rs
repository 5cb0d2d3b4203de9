//! # Score
//!
//! Herein are the scoring tables of the games: pure lookups from word
//! length to points, with nothing to validate and nothing to mutate.

use crate::dice::Variant;

////////////////////////////////////////////////////////////////////////////////
//                               Search scoring.                               //
////////////////////////////////////////////////////////////////////////////////

/// Points for a found word of each length, indexed by length and saturating
/// at eight letters and over.
const LENGTH_POINTS: [u32; 9] = [0, 0, 0, 1, 1, 2, 3, 5, 11];

/// Score a word of the given length under the given variant's rules. The
/// score is a total function of its arguments: lengths below the variant's
/// minimum score zero, the 6x6 variant doubles the length of words of nine
/// or more letters, and everything else reads from the published table.
///
/// Score only words already proven: formable on the board and present in
/// the word list. No checking happens here.
///
/// # Arguments
///
/// * `word_len` - The length of the word, in letters.
/// * `variant` - The board variant whose rules apply.
///
/// # Returns
///
/// The points awarded for the word.
#[must_use]
pub fn score(word_len: usize, variant: Variant) -> u32
{
	if word_len < variant.minimum_word_length()
	{
		return 0
	}
	if variant.doubles_long_words() && word_len >= 9
	{
		return 2 * word_len as u32
	}
	LENGTH_POINTS[word_len.min(LENGTH_POINTS.len() - 1)]
}

////////////////////////////////////////////////////////////////////////////////
//                             Crossword scoring.                              //
////////////////////////////////////////////////////////////////////////////////

/// Points for a completed crossword word of each length, indexed by length.
/// Seven dice bound the crossword dice game, so longer lengths never arise
/// and score nothing.
const CROSSWORD_POINTS: [u32; 8] = [0, 0, 2, 5, 10, 18, 25, 50];

/// Score a completed crossword word of the given length.
///
/// # Arguments
///
/// * `word_len` - The length of the word, in letters.
///
/// # Returns
///
/// The points awarded for the word.
#[must_use]
pub fn crossword_score(word_len: usize) -> u32
{
	CROSSWORD_POINTS.get(word_len).copied().unwrap_or(0)
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                    //
////////////////////////////////////////////////////////////////////////////////

//! # Dice
//!
//! Herein are the letter dice, the published die sets, and the board
//! variants of the games, together with the shaking that turns a bag of
//! dice into tiles.

use fixedstr::str8;
use log::trace;
use rand::{seq::SliceRandom, Rng};

use crate::board::{Grid, Position, PositionedTile, Tile};

////////////////////////////////////////////////////////////////////////////////
//                                   Faces.                                    //
////////////////////////////////////////////////////////////////////////////////

/// The text on a blank die face. A blank can never contribute to a word.
pub const BLANK: &str = "■";

/// A single face of a letter die: the text shown, which may be a digraph or
/// a blank, and the point value of the face in games that count letter
/// points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Face
{
	/// The text shown on the face.
	label: str8,

	/// The point value of the face. Zero for unvalued die sets and blanks.
	value: u8
}

impl Face
{
	/// Parse a face from its token: a label with an optional trailing point
	/// value, e.g. `"A1"`, `"Q10"`, `"Th"`, or `"■0"`.
	///
	/// # Arguments
	///
	/// * `token` - The face token.
	///
	/// # Returns
	///
	/// The parsed face.
	///
	/// # Panics
	///
	/// If the trailing digits do not fit a point value.
	fn parse(token: &str) -> Self
	{
		let split = token.find(|c: char| c.is_ascii_digit())
			.unwrap_or(token.len());
		let (label, digits) = token.split_at(split);
		let value = if digits.is_empty()
		{
			0
		}
		else
		{
			digits.parse().unwrap_or_else(
				|_| panic!("bad face token: {}", token))
		};
		Self { label: str8::from(label), value }
	}

	/// Answer the text shown on the face.
	#[inline]
	#[must_use]
	pub fn label(&self) -> &str
	{
		self.label.as_str()
	}

	/// Answer the point value of the face.
	#[inline]
	#[must_use]
	pub fn value(&self) -> u8
	{
		self.value
	}

	/// Check if the face is blank.
	#[inline]
	#[must_use]
	pub fn is_blank(&self) -> bool
	{
		self.label.as_str() == BLANK
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                    Dice.                                    //
////////////////////////////////////////////////////////////////////////////////

/// A six-sided letter die. Rolling selects the upper face; nothing else
/// about a die ever changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct LetterDie
{
	/// The six faces of the die.
	faces: [Face; 6],

	/// The index of the upper face.
	upper: usize
}

impl LetterDie
{
	/// Parse a die from its face specification. A spec containing
	/// whitespace lists six face tokens, each with an optional trailing
	/// point value, e.g. `"A1 E1 I1 L1 O1 ■0"` or `"An Er He In Qu Th"`. A
	/// compact spec lists six single letters, with `Q` standing for the
	/// `Qu` face, e.g. `"ABJMOQ"`.
	///
	/// # Arguments
	///
	/// * `spec` - The face specification.
	///
	/// # Returns
	///
	/// The parsed die, with the first face up.
	///
	/// # Panics
	///
	/// If the spec does not describe exactly six faces.
	pub fn parse(spec: &str) -> Self
	{
		let faces = if spec.contains(char::is_whitespace)
		{
			spec.split_whitespace()
				.map(Face::parse)
				.collect::<Vec<_>>()
		}
		else
		{
			spec.chars()
				.map(|c| {
					if c.eq_ignore_ascii_case(&'Q')
					{
						Face { label: str8::from("Qu"), value: 0 }
					}
					else
					{
						Face { label: str8::from(&c.to_string()), value: 0 }
					}
				})
				.collect::<Vec<_>>()
		};
		let faces: [Face; 6] = faces.try_into().unwrap_or_else(
			|_| panic!("die spec must name six faces: {}", spec));
		Self { faces, upper: 0 }
	}

	/// Roll the die, selecting a new upper face uniformly at random.
	///
	/// # Arguments
	///
	/// * `rng` - The source of randomness.
	pub fn roll(&mut self, rng: &mut impl Rng)
	{
		self.upper = rng.gen_range(0..self.faces.len());
	}

	/// Answer the faces of the die.
	#[inline]
	#[must_use]
	pub fn faces(&self) -> &[Face; 6]
	{
		&self.faces
	}

	/// Answer the upper face of the die.
	#[inline]
	#[must_use]
	pub fn face(&self) -> Face
	{
		self.faces[self.upper]
	}

	/// Answer the text shown on the upper face of the die.
	#[inline]
	#[must_use]
	pub fn label(&self) -> &str
	{
		self.faces[self.upper].label()
	}

	/// Answer the point value of the upper face of the die.
	#[inline]
	#[must_use]
	pub fn value(&self) -> u8
	{
		self.faces[self.upper].value()
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                  Variants.                                  //
////////////////////////////////////////////////////////////////////////////////

/// The published board variants of the shake-and-search game. The three
/// 5x5 editions share one die set; they differ in packaging and rules
/// trivia, not in letters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant
{
	/// The classic 4x4 game, with the original die set.
	Classic4x4,

	/// The 4x4 game with the revised die set.
	New4x4,

	/// The original 5x5 game.
	BigOriginal,

	/// The deluxe edition of the 5x5 game.
	BigDeluxe,

	/// The challenge edition of the 5x5 game.
	BigChallenge,

	/// The 6x6 game, with the 2012 die set.
	SuperBig2012
}

impl Variant
{
	/// Answer the width of the variant's board, in cells.
	#[inline]
	#[must_use]
	pub const fn width(&self) -> usize
	{
		match self
		{
			Self::Classic4x4 | Self::New4x4 => 4,
			Self::BigOriginal | Self::BigDeluxe | Self::BigChallenge => 5,
			Self::SuperBig2012 => 6
		}
	}

	/// Answer the height of the variant's board, in cells. Every published
	/// board is square.
	#[inline]
	#[must_use]
	pub const fn height(&self) -> usize
	{
		self.width()
	}

	/// Answer the shortest word the variant accepts. The 4x4 games accept
	/// three-letter words; the larger boards demand four.
	#[inline]
	#[must_use]
	pub const fn minimum_word_length(&self) -> usize
	{
		match self
		{
			Self::Classic4x4 | Self::New4x4 => 3,
			_ => 4
		}
	}

	/// Check if the variant doubles the score of long words: on the 6x6
	/// board, a word of nine or more letters scores twice its length.
	#[inline]
	#[must_use]
	pub const fn doubles_long_words(&self) -> bool
	{
		matches!(self, Self::SuperBig2012)
	}

	/// Answer a fresh bag of the variant's dice, in canonical order with
	/// first faces up. Shake before use.
	///
	/// # Returns
	///
	/// The variant's dice.
	#[must_use]
	pub fn dice(&self) -> Vec<LetterDie>
	{
		let specs: &[&str] = match self
		{
			Self::Classic4x4 => &CLASSIC_4X4,
			Self::New4x4 => &NEW_4X4,
			Self::BigOriginal | Self::BigDeluxe | Self::BigChallenge =>
				&BIG_5X5,
			Self::SuperBig2012 => &SUPER_BIG_6X6
		};
		parse_set(specs)
	}
}

impl std::fmt::Display for Variant
{
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result
	{
		let name = match self
		{
			Self::Classic4x4 => "Classic 4x4",
			Self::New4x4 => "New 4x4",
			Self::BigOriginal => "Big 5x5 original",
			Self::BigDeluxe => "Big 5x5 deluxe",
			Self::BigChallenge => "Big 5x5 challenge",
			Self::SuperBig2012 => "Super Big 6x6"
		};
		write!(f, "{}", name)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                  Die sets.                                  //
////////////////////////////////////////////////////////////////////////////////

/// The sixteen dice of the classic 4x4 game.
const CLASSIC_4X4: [&str; 16] = [
	"AACIOT", "ABILTY", "ABJMOQ", "ACDEMP",
	"ACELRS", "ADENVZ", "AHMORS", "BIFORX",
	"DENOSW", "DKNOTU", "EEFHIY", "EGKLUY",
	"EGINTV", "EHINPS", "ELPSTU", "GILRUW"
];

/// The sixteen dice of the revised 4x4 game.
const NEW_4X4: [&str; 16] = [
	"AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS",
	"AOOTTW", "CIMOTU", "DEILRX", "DELRVY",
	"DISTTY", "EEGHNW", "EEINSU", "EHRTVW",
	"EIOSST", "ELRTTY", "HIMNQU", "HLNNRZ"
];

/// The twenty-five dice of the 5x5 games.
const BIG_5X5: [&str; 25] = [
	"AAAFRS", "AAEEEE", "AAFIRS", "ADENNN", "AEEEEM",
	"AEEGMU", "AEGMNN", "AFIRSY", "BJKQXZ", "CCNSTW",
	"CEIILT", "CEILPT", "CEIPST", "DDLNOR", "DHHLOR",
	"DHHNOT", "DHLNOR", "EIIITT", "EMOTTT", "ENSSSU",
	"FIPRSY", "GORRVW", "HIPRRY", "NOOTUW", "OOOTTU"
];

/// The thirty-six dice of the 6x6 game, including the all-digraph die and
/// the die with three blank faces.
const SUPER_BIG_6X6: [&str; 36] = [
	"AAAFRS", "AAEEEE", "AAEEOO", "AAFIRS", "ABDEIO", "ADENNN",
	"AEEEEM", "AEEGMU", "AEGMNN", "AEILMN", "AEINOU", "AFIRSY",
	"An Er He In Qu Th", "BBJKXZ", "CCENST", "CDDLNN", "CEIITT", "CEIPST",
	"CFGNUY", "DDHNOT", "DHHLOR", "DHHNOW", "DHLNOR", "EHILRS",
	"EIILST", "EILPST", "E I O ■ ■ ■", "EMOTTT", "ENSSSU", "GORRVW",
	"HIRSTV", "HOPRST", "IPRSYY", "JKQWXZ", "NOOTUW", "OOOTTU"
];

/// The twelve dice of the rackless crossword game. The set carries no Q, so
/// no rack ever strands one.
const QLESS_DICE: [&str; 12] = [
	"MMLLBY", "VFGKPP", "HHNNRR", "DFRLLW",
	"RRDLGG", "XKBSZN", "WHHTTP", "CCBTJD",
	"CCMTTS", "OIINNY", "AEIOUU", "AAEEOO"
];

/// The seven valued dice of the crossword dice game: two all-vowel dice and
/// five consonant dice, each consonant die carrying one blank face.
const SCRABBLE_DICE: [&str; 7] = [
	"A1 E1 I1 O1 U1 Y4",
	"A1 E1 I1 O1 U1 Y4",
	"A1 E1 I1 L1 O1 ■0",
	"B3 F4 H4 N1 W4 ■0",
	"C3 D2 G2 T1 V4 ■0",
	"J8 K5 Q10 X8 Z10 ■0",
	"M3 N1 P3 R1 S1 ■0"
];

/// Parse a whole die set.
fn parse_set(specs: &[&str]) -> Vec<LetterDie>
{
	specs.iter().map(|spec| LetterDie::parse(spec)).collect()
}

/// Answer a fresh bag of the rackless crossword game's dice. Shake before
/// use.
#[must_use]
pub fn qless_dice() -> Vec<LetterDie>
{
	parse_set(&QLESS_DICE)
}

/// Answer a fresh bag of the crossword dice game's dice. Shake before use.
#[must_use]
pub fn scrabble_dice() -> Vec<LetterDie>
{
	parse_set(&SCRABBLE_DICE)
}

////////////////////////////////////////////////////////////////////////////////
//                                  Shaking.                                   //
////////////////////////////////////////////////////////////////////////////////

/// Shake a bag of dice: roll every die and shuffle the bag order, as one
/// shake of the dome.
///
/// # Arguments
///
/// * `dice` - The bag of dice.
/// * `rng` - The source of randomness.
pub fn shake(dice: &mut [LetterDie], rng: &mut impl Rng)
{
	for die in dice.iter_mut()
	{
		die.roll(rng);
	}
	dice.shuffle(rng);
	trace!("shook {} dice", dice.len());
}

/// Shake the variant's dice and lay them onto the board in reading order.
/// Tile identities follow the laid order.
///
/// # Arguments
///
/// * `variant` - The board variant.
/// * `rng` - The source of randomness.
///
/// # Returns
///
/// The freshly shaken grid.
pub fn shake_grid(variant: Variant, rng: &mut impl Rng) -> Grid
{
	let mut dice = variant.dice();
	shake(&mut dice, rng);
	let width = variant.width();
	let tiles = dice.iter()
		.enumerate()
		.map(|(id, die)| {
			PositionedTile::new(
				Tile::new(id, die.label()),
				Position::new((id % width) as i32, (id / width) as i32)
			)
		})
		.collect();
	match Grid::new(width, variant.height(), tiles)
	{
		Ok(grid) => grid,
		// Every variant's die count matches its board.
		Err(e) => unreachable!("shaken grid must cover its board: {}", e)
	}
}

/// Shake a bag of dice and hand back rack tiles, one per die. Tile
/// identities follow the rack order, and thereby index the shaken bag.
///
/// # Arguments
///
/// * `dice` - The bag of dice.
/// * `rng` - The source of randomness.
///
/// # Returns
///
/// The rack tiles.
pub fn shake_rack(dice: &mut [LetterDie], rng: &mut impl Rng) -> Vec<Tile>
{
	shake(dice, rng);
	dice.iter()
		.enumerate()
		.map(|(id, die)| Tile::new(id, die.label()))
		.collect()
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                    //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use rand::{rngs::StdRng, SeedableRng};

	use crate::dice::{
		qless_dice, scrabble_dice, shake, shake_grid, shake_rack, Face,
		LetterDie, Variant
	};

	/// Ensure that face tokens parse into label and point value.
	#[test]
	fn test_face_parse()
	{
		let face = Face::parse("A1");
		assert_eq!(face.label(), "A");
		assert_eq!(face.value(), 1);
		let face = Face::parse("Q10");
		assert_eq!(face.label(), "Q");
		assert_eq!(face.value(), 10);
		let face = Face::parse("Th");
		assert_eq!(face.label(), "Th");
		assert_eq!(face.value(), 0);
		let face = Face::parse("■0");
		assert!(face.is_blank());
		assert_eq!(face.value(), 0);
	}

	/// Ensure that a compact spec parses into six single letters, with Q
	/// standing for the Qu face.
	#[test]
	fn test_compact_spec()
	{
		let die = LetterDie::parse("ABJMOQ");
		let labels = die.faces().iter()
			.map(Face::label)
			.collect::<Vec<_>>();
		assert_eq!(labels, ["A", "B", "J", "M", "O", "Qu"]);
	}

	/// Ensure that a spaced spec parses its tokens literally, values and
	/// all.
	#[test]
	fn test_spaced_spec()
	{
		let die = LetterDie::parse("A1 E1 I1 O1 U1 Y4");
		let labels = die.faces().iter()
			.map(Face::label)
			.collect::<Vec<_>>();
		assert_eq!(labels, ["A", "E", "I", "O", "U", "Y"]);
		let values = die.faces().iter()
			.map(Face::value)
			.collect::<Vec<_>>();
		assert_eq!(values, [1, 1, 1, 1, 1, 4]);
		let die = LetterDie::parse("An Er He In Qu Th");
		let labels = die.faces().iter()
			.map(Face::label)
			.collect::<Vec<_>>();
		assert_eq!(labels, ["An", "Er", "He", "In", "Qu", "Th"]);
	}

	/// Ensure that every published die set has the advertised size.
	#[test]
	fn test_set_sizes()
	{
		assert_eq!(Variant::Classic4x4.dice().len(), 16);
		assert_eq!(Variant::New4x4.dice().len(), 16);
		assert_eq!(Variant::BigOriginal.dice().len(), 25);
		assert_eq!(Variant::BigDeluxe.dice().len(), 25);
		assert_eq!(Variant::BigChallenge.dice().len(), 25);
		assert_eq!(Variant::SuperBig2012.dice().len(), 36);
		assert_eq!(qless_dice().len(), 12);
		assert_eq!(scrabble_dice().len(), 7);
	}

	/// Ensure that the 6x6 set carries its oddities: one all-digraph die
	/// and one die with three blank faces.
	#[test]
	fn test_super_big_oddities()
	{
		let dice = Variant::SuperBig2012.dice();
		let digraph = dice.iter().find(|die| {
			die.faces().iter().all(|face| face.label().len() == 2)
		});
		assert!(digraph.is_some());
		let blanks = dice.iter()
			.map(|die| {
				die.faces().iter().filter(|face| face.is_blank()).count()
			})
			.sum::<usize>();
		assert_eq!(blanks, 3);
	}

	/// Ensure that the rackless crossword set has no Q anywhere.
	#[test]
	fn test_qless_has_no_q()
	{
		for die in qless_dice()
		{
			for face in die.faces()
			{
				assert!(!face.label().contains('Q'));
			}
		}
	}

	/// Ensure that the variant geometry and rules read as published.
	#[test]
	fn test_variant_rules()
	{
		assert_eq!(Variant::Classic4x4.width(), 4);
		assert_eq!(Variant::BigDeluxe.width(), 5);
		assert_eq!(Variant::SuperBig2012.width(), 6);
		assert_eq!(Variant::Classic4x4.minimum_word_length(), 3);
		assert_eq!(Variant::New4x4.minimum_word_length(), 3);
		assert_eq!(Variant::BigOriginal.minimum_word_length(), 4);
		assert_eq!(Variant::SuperBig2012.minimum_word_length(), 4);
		assert!(!Variant::BigChallenge.doubles_long_words());
		assert!(Variant::SuperBig2012.doubles_long_words());
	}

	/// Ensure that shaking with the same seed reproduces the same bag, and
	/// that shaking rolls every die to a face of its own.
	#[test]
	fn test_shake_reproducible()
	{
		let mut first = Variant::Classic4x4.dice();
		let mut second = Variant::Classic4x4.dice();
		let mut rng = StdRng::seed_from_u64(42);
		shake(&mut first, &mut rng);
		let mut rng = StdRng::seed_from_u64(42);
		shake(&mut second, &mut rng);
		assert_eq!(first, second);
	}

	/// Ensure that a shaken grid covers its variant's board with one tile
	/// per die, identities in laid order.
	#[test]
	fn test_shake_grid()
	{
		let mut rng = StdRng::seed_from_u64(7);
		for variant in [
			Variant::Classic4x4,
			Variant::New4x4,
			Variant::BigOriginal,
			Variant::SuperBig2012
		]
		{
			let grid = shake_grid(variant, &mut rng);
			assert_eq!(grid.width(), variant.width());
			assert_eq!(grid.height(), variant.height());
			assert_eq!(grid.tiles().len(), variant.width() * variant.height());
			for (index, placed) in grid.tiles().iter().enumerate()
			{
				assert_eq!(placed.tile.id(), index);
			}
		}
	}

	/// Ensure that a shaken rack has one tile per die, identities indexing
	/// the shaken bag.
	#[test]
	fn test_shake_rack()
	{
		let mut rng = StdRng::seed_from_u64(11);
		let mut dice = qless_dice();
		let rack = shake_rack(&mut dice, &mut rng);
		assert_eq!(rack.len(), dice.len());
		for (index, tile) in rack.iter().enumerate()
		{
			assert_eq!(tile.id(), index);
			assert_eq!(tile.label(), dice[index].label());
		}
	}
}

//! # Dicewords
//!
//! A family of word games played at the terminal with letter dice. Shake a
//! boxed set of dice and hunt words through the grid against the clock
//! (Boggle, in its several published sizes), or roll a rack of dice and
//! arrange them into an interlocking crossword (Q-Less and Scrabble Dice).
//!
//! Via command line options, the user picks the game and the dictionary that
//! plays are checked against. The games run in a text-based user interface
//! (TUI); shaken boards, rolled racks, and final tallies are written to
//! standard output.

mod app;
mod tui;

use std::{rc::Rc, time::Duration};

use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, trace, warn};
use rand::thread_rng;

use dicewords::{
	dice::{
		qless_dice, scrabble_dice, shake_grid, shake_rack, LetterDie, Variant
	},
	dictionary::Dictionary,
	game::{crossword_total, BoggleRound, CrosswordRules, CrosswordVerdict}
};

use app::{clock, BoggleApp, CrosswordApp};

////////////////////////////////////////////////////////////////////////////////
//                           Command line options.                            //
////////////////////////////////////////////////////////////////////////////////

/// CLI for the dice word games.
#[derive(Clone, Debug, Parser)]
#[command(version)]
struct Opts
{
	/// The path to the directory containing the dictionary files.
	#[arg(short = 'd', long, default_value = "dict")]
	directory: String,

	/// The name of the dictionary. This is the name shared by the text and
	/// binary files, sans the extension.
	#[arg(short = 'n', long, default_value = "english")]
	dictionary: String,

	#[command(subcommand)]
	command: Command
}

/// The subcommands of the CLI.
#[derive(Copy, Clone, Debug, Subcommand)]
enum Command
{
	/// Just generate the binary dictionary and exit.
	Generate,

	/// Shake a board of letter dice and hunt words through it against the
	/// clock.
	Boggle
	{
		/// The board variant to shake.
		#[arg(value_enum, default_value = "classic")]
		variant: VariantArg,

		/// Play a timed round in the text-based user interface (TUI).
		/// Without this, the shaken board is printed and the program exits.
		#[arg(short = 'p', long)]
		play: bool,

		/// Light up the path of the entry on the board as it is typed.
		#[arg(short = 'v', long)]
		verbose: bool,

		/// The length of the round, in seconds.
		#[arg(short = 't', long, default_value = "180")]
		time: u64
	},

	/// Roll the twelve crossword dice and arrange them into an interlocking
	/// crossword.
	Qless
	{
		/// Build the crossword in the text-based user interface (TUI).
		/// Without this, the rolled rack is printed and the program exits.
		#[arg(short = 'p', long)]
		play: bool,

		/// Print the rack with sorted vowel and consonant rows.
		#[arg(short = 'v', long)]
		verbose: bool
	},

	/// Roll the seven valued dice and arrange them into a scoring crossword.
	Scrabbledice
	{
		/// Show die point values beside their letters.
		#[arg(short = 'v', long)]
		verbose: bool
	}
}

/// The board variants, as command line values. Keeping this distinct from
/// [`Variant`] keeps the command line surface out of the library.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg
{
	/// The classic 4x4 game.
	Classic,

	/// The 4x4 game with the revised die set.
	New,

	/// The original 5x5 game.
	Big,

	/// The deluxe edition of the 5x5 game.
	Deluxe,

	/// The challenge edition of the 5x5 game.
	Challenge,

	/// The 6x6 game.
	Superbig
}

impl From<VariantArg> for Variant
{
	fn from(arg: VariantArg) -> Self
	{
		match arg
		{
			VariantArg::Classic => Variant::Classic4x4,
			VariantArg::New => Variant::New4x4,
			VariantArg::Big => Variant::BigOriginal,
			VariantArg::Deluxe => Variant::BigDeluxe,
			VariantArg::Challenge => Variant::BigChallenge,
			VariantArg::Superbig => Variant::SuperBig2012
		}
	}
}

////////////////////////////////////////////////////////////////////////////////
//                               Main program.                                //
////////////////////////////////////////////////////////////////////////////////

/// Parse the command line options and execute the appropriate subcommand.
fn main()
{
	env_logger::init();
	let opts = Opts::parse();
	debug!("command line options: {:?}", opts);
	match opts.command
	{
		Command::Generate =>
		{
			let _ = open_required_dictionary(&opts);
			trace!("exiting after generating the binary dictionary");
		}
		Command::Boggle { variant, play, verbose, time } =>
			boggle(&opts, variant.into(), play, verbose, time),
		Command::Qless { play, verbose } => qless(&opts, play, verbose),
		Command::Scrabbledice { verbose } => scrabbledice(&opts, verbose)
	}
}

/// Open the dictionary, creating the binary dictionary if necessary. The
/// timed game cannot be played without one.
///
/// # Arguments
///
/// * `opts` - The command line options.
///
/// # Returns
///
/// The dictionary.
///
/// # Panics
///
/// If neither dictionary file can be opened.
fn open_required_dictionary(opts: &Opts) -> Rc<Dictionary>
{
	let dictionary = Dictionary::open(&opts.directory, &opts.dictionary)
		.unwrap_or_else(|_|
			panic!(
				"failed to open dictionary: {}/{}.dict or {0}/{1}.txt",
				opts.directory,
				opts.dictionary
			)
		);
	Rc::new(dictionary)
}

/// Open the dictionary if one can be had. The crossword games play on
/// without, leaving the spelling to the player's say-so.
///
/// # Arguments
///
/// * `opts` - The command line options.
///
/// # Returns
///
/// The dictionary, or `None` if it could not be opened.
fn open_optional_dictionary(opts: &Opts) -> Option<Rc<Dictionary>>
{
	match Dictionary::open(&opts.directory, &opts.dictionary)
	{
		Ok(dictionary) => Some(Rc::new(dictionary)),
		Err(e) =>
		{
			warn!(
				"no dictionary at {}/{}: {}; crosswords will go unchecked",
				opts.directory,
				opts.dictionary,
				e
			);
			None
		}
	}
}

/// Run the boggle subcommand: shake a board, then either print it or play a
/// timed round on it.
///
/// # Arguments
///
/// * `opts` - The command line options.
/// * `variant` - The board variant to shake.
/// * `play` - Whether to play a timed round in the TUI.
/// * `verbose` - Whether to light up the path of the entry as it is typed.
/// * `time` - The length of the round, in seconds.
fn boggle(opts: &Opts, variant: Variant, play: bool, verbose: bool, time: u64)
{
	let grid = shake_grid(variant, &mut thread_rng());
	if !play
	{
		println!("{}", grid);
		return
	}
	let dictionary = open_required_dictionary(opts);
	let round = BoggleRound::new(variant, grid, dictionary);
	let mut app = BoggleApp::new(round, Duration::from_secs(time), verbose);
	tui::session(|terminal| app.run(terminal))
		.unwrap_or_else(|e| panic!("failed to drive TUI: {}", e));
	print_round_summary(app.round());
}

/// Run the qless subcommand: roll the rack, then either print it or build a
/// crossword from it.
///
/// # Arguments
///
/// * `opts` - The command line options.
/// * `play` - Whether to build the crossword in the TUI.
/// * `verbose` - Whether the printed rack adds vowel and consonant rows.
fn qless(opts: &Opts, play: bool, verbose: bool)
{
	let mut dice = qless_dice();
	let rack = shake_rack(&mut dice, &mut thread_rng());
	if !play
	{
		print_rack(&dice, verbose);
		return
	}
	let dictionary = open_optional_dictionary(opts);
	let mut app = CrosswordApp::new(
		"Q-Less",
		dice,
		rack,
		CrosswordRules::qless(),
		dictionary,
		false
	);
	tui::session(|terminal| app.run(terminal))
		.unwrap_or_else(|e| panic!("failed to drive TUI: {}", e));
	print_crossword_summary(&app, false);
}

/// Run the scrabbledice subcommand: roll the valued dice and build a scoring
/// crossword from them.
///
/// # Arguments
///
/// * `opts` - The command line options.
/// * `verbose` - Whether to show die point values beside their letters.
fn scrabbledice(opts: &Opts, verbose: bool)
{
	let mut dice = scrabble_dice();
	let rack = shake_rack(&mut dice, &mut thread_rng());
	let dictionary = open_optional_dictionary(opts);
	let mut app = CrosswordApp::new(
		"Scrabble Dice",
		dice,
		rack,
		CrosswordRules::scrabble_dice(),
		dictionary,
		verbose
	);
	tui::session(|terminal| app.run(terminal))
		.unwrap_or_else(|e| panic!("failed to drive TUI: {}", e));
	print_crossword_summary(&app, true);
}

////////////////////////////////////////////////////////////////////////////////
//                                 Summaries.                                 //
////////////////////////////////////////////////////////////////////////////////

/// Print a rolled rack to standard output. Verbosity adds the letters sorted
/// into vowel and consonant rows, the way players like to read a fresh roll.
///
/// # Arguments
///
/// * `dice` - The rolled dice.
/// * `verbose` - Whether to add the sorted vowel and consonant rows.
fn print_rack(dice: &[LetterDie], verbose: bool)
{
	let labels = dice.iter().map(LetterDie::label).collect::<Vec<_>>();
	println!("{:>12}: {}", "Rack", labels.join(" "));
	if verbose
	{
		let mut sorted = labels;
		sorted.sort_unstable();
		let (vowels, consonants): (Vec<&str>, Vec<&str>) =
			sorted.into_iter().partition(|label| {
				label.starts_with(|c: char| "AEIOU".contains(c))
			});
		println!("{:>12}: {}", "Vowels", vowels.join(" "));
		println!("{:>12}: {}", "Consonants", consonants.join(" "));
	}
}

/// Print the round summary to standard output: every play in alphabetical
/// order with its score and the reason for any refusal, then the round
/// total.
///
/// # Arguments
///
/// * `round` - The finished round.
fn print_round_summary(round: &BoggleRound)
{
	let mut plays = round.plays().to_vec();
	plays.sort_by(|a, b| a.word.cmp(&b.word));
	println!();
	println!("Score Word            Reason");
	for play in &plays
	{
		let line = format!(
			"{:>4}  {:<15} {}",
			play.score,
			play.word,
			play.reason.label()
		);
		println!("{}", line.trim_end());
	}
	println!();
	println!("{:>4}  Total Score", round.total());
}

/// Print the crossword summary to standard output: the time spent, and the
/// words of a standing crossword, scored where the game keeps score.
///
/// # Arguments
///
/// * `app` - The finished crossword application.
/// * `count_score` - Whether the game totals word scores.
fn print_crossword_summary(app: &CrosswordApp, count_score: bool)
{
	println!();
	println!("Time elapsed: {}", clock(app.elapsed()));
	if let Some(
		CrosswordVerdict::Valid { words }
		| CrosswordVerdict::Unverified { words }
	) = app.outcome()
	{
		println!("Words: {}", words.join(", "));
		if count_score
		{
			println!("Score: {}", crossword_total(words));
		}
	}
}

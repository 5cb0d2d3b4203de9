//! # Application
//!
//! The application state and logic of the playable games, including their
//! text-based user interfaces (TUIs). There are two of them: a timed round
//! against a shaken board, and an untimed crossword build from a rack of
//! rolled dice. Both drive the engines through the game layer and never
//! consult the dictionary behind its back.

use std::{io, mem, rc::Rc, time::{Duration, Instant}};

use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::{
	buffer::Buffer, layout::{Alignment, Constraint, Direction, Layout, Rect},
	style::{Color, Style, Stylize},
	text::{Line, Span},
	widgets::{
		block::{Position as TitlePosition, Title},
		Block, BorderType, Borders, List, Paragraph, Widget
	},
	Frame
};

use dicewords::{
	board::{Position, PositionedTile, Tile},
	dice::LetterDie,
	dictionary::Dictionary,
	game::{
		check_crossword, BoggleRound, CrosswordRules, CrosswordVerdict,
		ScoreReason, WordScore
	},
	placement::Placement,
	search::Path
};

use crate::tui::Tui;

////////////////////////////////////////////////////////////////////////////////
//                                Game clock.                                 //
////////////////////////////////////////////////////////////////////////////////

/// Format a duration the way a game clock shows it, as minutes and
/// zero-padded seconds.
///
/// # Arguments
///
/// * `duration` - The duration to format.
///
/// # Returns
///
/// The formatted clock reading.
#[must_use]
pub fn clock(duration: Duration) -> String
{
	let seconds = duration.as_secs();
	format!("{}:{:02}", seconds / 60, seconds % 60)
}

////////////////////////////////////////////////////////////////////////////////
//                                Timed rounds.                               //
////////////////////////////////////////////////////////////////////////////////

/// The application state of a timed round: a shaken board, a running clock,
/// and an entry line. Words are typed blind and judged on entry; the round
/// keeps every play, refusals included, for the final tally.
#[must_use]
pub struct BoggleApp
{
	/// The execution state of the round.
	state: RoundState,

	/// The round being played.
	round: BoggleRound,

	/// When the clock runs out.
	deadline: Instant,

	/// Whether to light up the traced path of the entry while it is typed.
	show_path: bool,

	/// The word being typed, kept uppercase.
	entry: String,

	/// The traced path of the entry, when tracing is on and the entry is
	/// formable.
	trace: Option<Path>
}

// Public interface.
impl BoggleApp
{
	/// Create the application state for one round.
	///
	/// # Arguments
	///
	/// * `round` - The round to play.
	/// * `length` - The length of the round.
	/// * `show_path` - Whether to light up the traced path of the entry
	///   while it is typed.
	///
	/// # Returns
	///
	/// The new application state, with the clock already running.
	pub fn new(round: BoggleRound, length: Duration, show_path: bool) -> Self
	{
		Self {
			state: RoundState::Playing,
			round,
			deadline: Instant::now() + length,
			show_path,
			entry: String::new(),
			trace: None
		}
	}

	/// Run the application. This amounts to:
	///
	/// * Watching the clock.
	/// * Rendering the application frame.
	/// * Processing events.
	///
	/// # Arguments
	///
	/// * `tui` - The text-based user interface (TUI).
	///
	/// # Errors
	///
	/// Any error that occurs while running the application.
	pub fn run(&mut self, tui: &mut Tui) -> io::Result<()>
	{
		while self.is_running()
		{
			self.check_clock();
			tui.draw(|frame| self.render_frame(frame))?;
			self.process_event()?;
		}
		Ok(())
	}

	/// Check if the application is running.
	///
	/// # Returns
	///
	/// `true` if the application is running, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_running(&self) -> bool
	{
		!matches!(self.state, RoundState::Exiting)
	}

	/// Answer the round, for the tally after the application has exited.
	#[inline]
	#[must_use]
	pub fn round(&self) -> &BoggleRound
	{
		&self.round
	}
}

// Private implementation details.
impl BoggleApp
{
	/// Retire the round if the clock has run out. The board stays on screen
	/// for review; only the entry line closes.
	fn check_clock(&mut self)
	{
		if self.state == RoundState::Playing && Instant::now() >= self.deadline
		{
			debug!("round expired with {} plays", self.round.plays().len());
			self.state = RoundState::Expired;
			self.entry.clear();
			self.trace = None;
		}
	}

	/// Answer the time left on the clock.
	#[must_use]
	fn remaining(&self) -> Duration
	{
		self.deadline.saturating_duration_since(Instant::now())
	}

	/// Append a letter to the entry, upcasing as it lands.
	///
	/// # Arguments
	///
	/// * `c` - The letter to append.
	fn append(&mut self, c: char)
	{
		self.entry.push(c.to_ascii_uppercase());
		self.retrace();
	}

	/// Erase the last letter of the entry. If the entry is empty, do
	/// nothing.
	fn erase(&mut self)
	{
		self.entry.pop();
		self.retrace();
	}

	/// Play the entry and clear the entry line. A blank entry is not a
	/// play.
	fn submit(&mut self)
	{
		if !self.entry.trim().is_empty()
		{
			// The round records the play, reasons and all.
			let _ = self.round.play_word(&self.entry);
		}
		self.entry.clear();
		self.retrace();
	}

	/// Re-trace the entry on the board, when tracing is on.
	fn retrace(&mut self)
	{
		self.trace =
			if self.show_path { self.round.search(&self.entry) }
			else { None };
	}

	/// Render the application frame.
	///
	/// # Arguments
	///
	/// * `frame` - The target frame.
	fn render_frame(&self, frame: &mut Frame)
	{
		frame.render_widget(self, frame.size());
	}

	/// Render the board, the clock, and the entry line.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	fn render_board(&self, area: Rect, buf: &mut Buffer)
	{
		let grid = self.round.grid();
		// The clock turns red for the final seconds.
		let remaining = self.remaining();
		let clock_style =
			if remaining <= Duration::from_secs(10)
			{
				Style::default().fg(Color::Red).bold()
			}
			else
			{
				Style::default().fg(Color::White)
			};
		Block::default()
			.borders(Borders::ALL)
			.border_style(Style::default().fg(Color::White))
			.title(
				Title::default()
					.content(format!("Boggle – {}", self.round.variant()))
					.position(TitlePosition::Top)
					.alignment(Alignment::Center)
			)
			.title(
				Title::default()
					.content("⎋ – leave".yellow().bold())
					.position(TitlePosition::Top)
					.alignment(Alignment::Left)
			)
			.title(
				Title::default()
					.content(Span::styled(clock(remaining), clock_style))
					.position(TitlePosition::Top)
					.alignment(Alignment::Right)
			)
			.title(
				Title::default()
					.content("A-Z – type  ⌫ – erase  ↵ – play".cyan())
					.position(TitlePosition::Bottom)
					.alignment(Alignment::Center)
			)
			.render(area, buf);
		// The board is a rank of dice per row, with the entry line beneath.
		let height = grid.height();
		let mut constraints = vec![Constraint::Ratio(1, 3)];
		constraints.extend((0 .. height).map(|_| Constraint::Length(3)));
		constraints.push(Constraint::Length(3));
		constraints.push(Constraint::Ratio(1, 3));
		let rows = Layout::default()
			.direction(Direction::Vertical)
			.margin(2)
			.constraints(constraints)
			.split(area);
		for (index, rank) in grid.rows().enumerate()
		{
			let columns = Layout::default()
				.direction(Direction::Horizontal)
				.constraints(vec![Constraint::Length(6); grid.width()])
				.split(rows[index + 1]);
			for (column, placed) in rank.iter().enumerate()
			{
				self.render_die(placed, columns[column], buf);
			}
		}
		self.render_entry(rows[height + 1], buf);
	}

	/// Render a single die of the board. A die on the traced path shows its
	/// step number and lights up.
	///
	/// # Arguments
	///
	/// * `placed` - The die's tile.
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	fn render_die(&self, placed: &PositionedTile, area: Rect, buf: &mut Buffer)
	{
		let step = self.trace.as_ref().and_then(|path| {
			path.tiles().iter()
				.position(|visited| visited.position == placed.position)
		});
		let block = Block::new()
			.border_type(BorderType::Rounded)
			.borders(Borders::ALL)
			.border_style(Style::default().fg(Color::White));
		let die = match step
		{
			Some(step) =>
				Paragraph::new(format!("{} {}", step + 1, placed.label()))
					.block(block)
					.alignment(Alignment::Center)
					.style(Style::default().fg(Color::Black).bg(Color::Green)),
			None =>
				Paragraph::new(placed.label())
					.block(block)
					.alignment(Alignment::Center)
					.style(Style::default())
		};
		die.render(area, buf);
	}

	/// Render the entry line, tinted by whether the entry still leads
	/// toward some dictionary word. After expiry the line becomes the
	/// closing banner instead.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	fn render_entry(&self, area: Rect, buf: &mut Buffer)
	{
		let entry = match self.state
		{
			RoundState::Playing =>
			{
				let style =
					if self.entry.is_empty()
					{
						Style::default()
					}
					else if self.round.dictionary().has_prefix(&self.entry)
					{
						Style::default().fg(Color::Green)
					}
					else
					{
						Style::default().fg(Color::Red)
					};
				Paragraph::new(self.entry.as_str())
					.style(style)
					.block(
						Block::new()
							.border_type(BorderType::Rounded)
							.borders(Borders::ALL)
							.title("Entry")
					)
			}
			_ =>
				Paragraph::new("Time! Press ↵ for the tally.")
					.style(Style::default().fg(Color::Red).bold())
					.block(
						Block::new()
							.border_type(BorderType::Rounded)
							.borders(Borders::ALL)
					)
		};
		entry.render(area, buf);
	}

	/// Render the word list: every play so far, with the running total.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	fn render_words(&self, area: Rect, buf: &mut Buffer)
	{
		let items = self.round.plays().iter()
			.map(play_line)
			.collect::<Vec<_>>();
		let list = List::new(items)
			.block(
				Block::default()
					.borders(Borders::ALL)
					.title(
						Title::default()
							.content("Words")
							.alignment(Alignment::Center)
					)
					.title(
						Title::default()
							.content(format!("Score: {}", self.round.total()))
							.position(TitlePosition::Bottom)
							.alignment(Alignment::Center)
					)
			)
			.style(Style::default().fg(Color::White));
		Widget::render(list, area, buf);
	}

	/// Process events. The poll is brisk so that the countdown never
	/// visibly stutters.
	///
	/// # Errors
	///
	/// Any error that occurs while processing events.
	fn process_event(&mut self) -> io::Result<()>
	{
		if poll(Duration::from_millis(50))?
		{
			match read()?
			{
				Event::Key(event) if event.kind == KeyEventKind::Press =>
					self.process_key_event(event),
				_ => {}
			}
		}
		Ok(())
	}

	/// Process a key event, according to the execution state.
	///
	/// # Arguments
	///
	/// * `event` - The key event to process.
	fn process_key_event(&mut self, event: KeyEvent)
	{
		match self.state
		{
			RoundState::Playing => self.process_key_event_playing(event),
			RoundState::Expired => self.process_key_event_expired(event),
			RoundState::Exiting => {}
		}
	}

	/// Process a key event while the clock is [running](RoundState::Playing):
	///
	/// * Escape - Leave the round early.
	/// * Enter - Play the entry.
	/// * Backspace - Erase the last letter of the entry.
	/// * A-Z - Append the corresponding letter to the entry.
	///
	/// # Arguments
	///
	/// * `event` - The key event to process.
	fn process_key_event_playing(&mut self, event: KeyEvent)
	{
		match event.code
		{
			KeyCode::Esc => self.state = RoundState::Exiting,
			KeyCode::Enter => self.submit(),
			KeyCode::Backspace => self.erase(),
			KeyCode::Char(c) if c.is_ascii_alphabetic() => self.append(c),
			_ => {}
		}
	}

	/// Process a key event after the clock has [run out](RoundState::Expired):
	///
	/// * Escape, Enter - Leave for the tally.
	///
	/// # Arguments
	///
	/// * `event` - The key event to process.
	fn process_key_event_expired(&mut self, event: KeyEvent)
	{
		match event.code
		{
			KeyCode::Esc | KeyCode::Enter => self.state = RoundState::Exiting,
			_ => {}
		}
	}
}

impl Widget for &BoggleApp
{
	fn render(self, area: Rect, buf: &mut Buffer)
	{
		// Split the screen into the board and the word list.
		let outer = Layout::default()
			.direction(Direction::Horizontal)
			.margin(1)
			.constraints([
				Constraint::Percentage(100),
				Constraint::Min(24)
			])
			.split(area);
		self.render_board(outer[0], buf);
		self.render_words(outer[1], buf);
	}
}

/// The execution state of a timed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RoundState
{
	/// The clock is running and entries are accepted.
	Playing,

	/// The clock ran out; the board stays up until the player leaves.
	Expired,

	/// The player left; the main loop should stop.
	Exiting
}

/// Render one play as a list line. A successful play shows its score; a
/// refused play shows the refusal in its color: repeats dimmed, everything
/// else red.
///
/// # Arguments
///
/// * `play` - The play to render.
///
/// # Returns
///
/// The list line.
fn play_line(play: &WordScore) -> Line<'static>
{
	match play.reason
	{
		ScoreReason::Success =>
			Line::raw(format!("{} {}", play.word, play.score)),
		reason =>
		{
			let color = match reason
			{
				ScoreReason::AlreadyPlayed => Color::DarkGray,
				_ => Color::Red
			};
			Line::styled(
				format!("{} ({})", play.word, reason.label()),
				Style::default().fg(color)
			)
		}
	}
}

////////////////////////////////////////////////////////////////////////////////
//                              Crossword builds.                             //
////////////////////////////////////////////////////////////////////////////////

/// The width of the virtual crossword board, in cells. Wide enough to lay
/// the whole twelve-die rack in one line, with room to shift it around.
const BOARD_COLUMNS: i32 = 13;

/// The height of the virtual crossword board, in cells.
const BOARD_ROWS: i32 = 13;

/// How long a rejection notice stays up.
const FLASH_DURATION: Duration = Duration::from_millis(1500);

/// The application state of a crossword build: a rack of rolled dice, a
/// virtual board to arrange them on, and a die in hand. Letter keys take a
/// die in hand, arrow keys slide it, and enter asks the rules for a
/// verdict.
#[must_use]
pub struct CrosswordApp
{
	/// The execution state of the build.
	state: BuildState,

	/// The name of the game, shown over the board.
	title: &'static str,

	/// The shaken bag. A die's index in the bag is its tile identity.
	dice: Vec<LetterDie>,

	/// The rack tiles, one per die, identities indexing the bag.
	rack: Vec<Tile>,

	/// Where each die sits on the board, by bag index. `None` while the die
	/// is still in the rack.
	slots: Vec<Option<Position>>,

	/// The rules of the game in play.
	rules: CrosswordRules,

	/// The dictionary, if one was at hand.
	dictionary: Option<Rc<Dictionary>>,

	/// Whether to show die point values beside their letters.
	show_values: bool,

	/// The die in hand, by bag index.
	selected: usize,

	/// The rejection notice currently up, if any.
	flash: Option<Flash>,

	/// When the build began.
	started: Instant,

	/// How long the build took, once it stood up.
	solved_in: Option<Duration>,

	/// The final verdict, once the build stood up.
	outcome: Option<CrosswordVerdict>
}

// Public interface.
impl CrosswordApp
{
	/// Create the application state for one crossword build.
	///
	/// # Arguments
	///
	/// * `title` - The name of the game, shown over the board.
	/// * `dice` - The shaken bag.
	/// * `rack` - The rack tiles, one per die, identities indexing the bag.
	/// * `rules` - The rules of the game in play.
	/// * `dictionary` - The dictionary, if one is at hand. Without one, a
	///   well-shaped crossword needs the player's say-so to stand.
	/// * `show_values` - Whether to show die point values beside their
	///   letters.
	///
	/// # Returns
	///
	/// The new application state, with every die still in the rack.
	///
	/// # Panics
	///
	/// If the rack does not match the bag, or the bag is empty.
	pub fn new(
		title: &'static str,
		dice: Vec<LetterDie>,
		rack: Vec<Tile>,
		rules: CrosswordRules,
		dictionary: Option<Rc<Dictionary>>,
		show_values: bool
	) -> Self
	{
		assert_eq!(dice.len(), rack.len());
		assert!(!dice.is_empty(), "a crossword needs dice in the rack");
		let slots = vec![None; dice.len()];
		Self {
			state: BuildState::Building,
			title,
			dice,
			rack,
			slots,
			rules,
			dictionary,
			show_values,
			selected: 0,
			flash: None,
			started: Instant::now(),
			solved_in: None,
			outcome: None
		}
	}

	/// Run the application. This amounts to:
	///
	/// * Taking down lapsed rejection notices.
	/// * Rendering the application frame.
	/// * Processing events.
	///
	/// # Arguments
	///
	/// * `tui` - The text-based user interface (TUI).
	///
	/// # Errors
	///
	/// Any error that occurs while running the application.
	pub fn run(&mut self, tui: &mut Tui) -> io::Result<()>
	{
		while self.is_running()
		{
			self.expire_flash();
			tui.draw(|frame| self.render_frame(frame))?;
			self.process_event()?;
		}
		Ok(())
	}

	/// Check if the application is running.
	///
	/// # Returns
	///
	/// `true` if the application is running, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_running(&self) -> bool
	{
		!matches!(self.state, BuildState::Exiting)
	}

	/// Answer the final verdict, if the build stood up before the
	/// application exited.
	#[inline]
	#[must_use]
	pub fn outcome(&self) -> Option<&CrosswordVerdict>
	{
		self.outcome.as_ref()
	}

	/// Answer how long the build has taken: until it stands, the time spent
	/// so far; afterward, the time it took to stand.
	#[must_use]
	pub fn elapsed(&self) -> Duration
	{
		self.solved_in.unwrap_or_else(|| self.started.elapsed())
	}
}

// Private implementation details.
impl CrosswordApp
{
	/// Take down the rejection notice once it has lapsed.
	fn expire_flash(&mut self)
	{
		if let Some(ref flash) = self.flash
		{
			if Instant::now() >= flash.until
			{
				self.flash = None;
			}
		}
	}

	/// Take the next die whose label starts with the given letter in hand,
	/// cycling past the one already held so that repeated presses walk all
	/// the candidates. If no die matches, keep the current one.
	///
	/// # Arguments
	///
	/// * `letter` - The letter pressed.
	fn pick(&mut self, letter: char)
	{
		let count = self.rack.len();
		for offset in 1 ..= count
		{
			let candidate = (self.selected + offset) % count;
			let matches = self.rack[candidate].label()
				.chars()
				.next()
				.is_some_and(|first| first.eq_ignore_ascii_case(&letter));
			if matches
			{
				self.selected = candidate;
				return
			}
		}
	}

	/// Take the next die in bag order in hand.
	///
	/// # Arguments
	///
	/// * `step` - The direction to walk the bag, `1` or `-1`.
	fn select_next(&mut self, step: isize)
	{
		let count = self.dice.len() as isize;
		let selected = self.selected as isize;
		self.selected = (selected + step).rem_euclid(count) as usize;
	}

	/// Slide the held die one press's worth: a die already on the board
	/// moves to the next free cell in the pressed direction, hopping over
	/// occupied ones; a die still in the rack enters from the board edge
	/// behind the direction of travel and takes the first free cell on its
	/// lane. If the lane is full, the die stays where it was.
	///
	/// # Arguments
	///
	/// * `dc` - The column delta of the direction of travel.
	/// * `dr` - The row delta of the direction of travel.
	fn slide(&mut self, dc: i32, dr: i32)
	{
		let mut position = match self.slots[self.selected]
		{
			Some(position) => position.offset(dc, dr),
			None => entry_point(dc, dr)
		};
		while in_bounds(position)
		{
			if !self.occupied(position)
			{
				self.slots[self.selected] = Some(position);
				return
			}
			position = position.offset(dc, dr);
		}
	}

	/// Check if some die sits at the given position.
	///
	/// # Arguments
	///
	/// * `position` - The position to check.
	#[must_use]
	fn occupied(&self, position: Position) -> bool
	{
		self.slots.iter().any(|slot| *slot == Some(position))
	}

	/// Send the held die back to the rack.
	fn lift(&mut self)
	{
		self.slots[self.selected] = None;
	}

	/// Read the board as a sparse placement of the placed dice.
	#[must_use]
	fn placement(&self) -> Placement
	{
		self.rack.iter()
			.zip(self.slots.iter())
			.filter_map(|(tile, slot)| {
				slot.map(|position| PositionedTile::new(*tile, position))
			})
			.collect()
	}

	/// Ask the rules for a verdict on the board. A sound crossword finishes
	/// the build, a sound but uncheckable one waits for the player's
	/// say-so, and anything else flashes a rejection and keeps building.
	fn check(&mut self)
	{
		let verdict = check_crossword(
			&self.placement(),
			&self.rules,
			self.dictionary.as_deref()
		);
		debug!("checked the crossword: {:?}", verdict);
		let rejection = match &verdict
		{
			CrosswordVerdict::Valid { .. }
			| CrosswordVerdict::Unverified { .. } => None,
			CrosswordVerdict::Incomplete { unused } if unused.is_empty() =>
				Some((
					"Every die has to be on the board.".to_string(),
					vec![]
				)),
			CrosswordVerdict::Incomplete { unused } =>
				Some((
					"Some dice work in no word.".to_string(),
					positions_of(unused)
				)),
			CrosswordVerdict::TwoLetterWords { tiles } =>
				Some((
					"Two-letter words are out in this game.".to_string(),
					positions_of(tiles)
				)),
			CrosswordVerdict::SplitBlock { strays } =>
				Some((
					"Everything has to hang together.".to_string(),
					positions_of(strays)
				)),
			CrosswordVerdict::Misspelt { tiles, words } =>
				Some((
					format!("Not in the dictionary: {}", words.join(", ")),
					positions_of(tiles)
				))
		};
		match rejection
		{
			Some((message, positions)) => self.rebuke(message, positions),
			None if matches!(verdict, CrosswordVerdict::Valid { .. }) =>
				self.finish(verdict),
			None => self.state = BuildState::Confirming { verdict }
		}
	}

	/// Put up a rejection notice.
	///
	/// # Arguments
	///
	/// * `message` - The rejection message.
	/// * `positions` - The positions of the offending dice.
	fn rebuke(&mut self, message: String, positions: Vec<Position>)
	{
		self.flash = Some(Flash {
			message,
			positions,
			until: Instant::now() + FLASH_DURATION
		});
	}

	/// Let the crossword stand: record the verdict and how long the build
	/// took, and hold the board for a last look.
	///
	/// # Arguments
	///
	/// * `verdict` - The final verdict.
	fn finish(&mut self, verdict: CrosswordVerdict)
	{
		self.solved_in = Some(self.started.elapsed());
		self.outcome = Some(verdict);
		self.state = BuildState::Finished;
	}

	/// Resolve the player's answer to an unverified crossword: on `Y` it
	/// stands, on anything else the build resumes.
	fn accept(&mut self)
	{
		let state = mem::replace(&mut self.state, BuildState::Building);
		if let BuildState::Confirming { verdict } = state
		{
			self.finish(verdict);
		}
	}

	/// Render the application frame.
	///
	/// # Arguments
	///
	/// * `frame` - The target frame.
	fn render_frame(&self, frame: &mut Frame)
	{
		frame.render_widget(self, frame.size());
	}

	/// Render the virtual board and its chrome.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	fn render_board(&self, area: Rect, buf: &mut Buffer)
	{
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(Style::default().fg(Color::White))
			.title(
				Title::default()
					.content(self.title)
					.position(TitlePosition::Top)
					.alignment(Alignment::Center)
			)
			.title(
				Title::default()
					.content("⎋ – leave".yellow().bold())
					.position(TitlePosition::Top)
					.alignment(Alignment::Left)
			)
			.title(
				Title::default()
					.content("↵ – check".green().bold())
					.position(TitlePosition::Top)
					.alignment(Alignment::Right)
			)
			.title(
				Title::default()
					.content(
						"A-Z – take a die  ←↑↓→ – slide  ⇥ – next  ⌫ – lift"
							.cyan()
					)
					.position(TitlePosition::Bottom)
					.alignment(Alignment::Center)
			);
		let inner = block.inner(area);
		block.render(area, buf);
		let lines = (0 .. BOARD_ROWS)
			.map(|row| self.board_line(row))
			.collect::<Vec<_>>();
		let mut board = Paragraph::new(lines);
		if matches!(self.state, BuildState::Finished)
		{
			// A standing crossword locks the board in gold.
			board = board.style(Style::default().fg(Color::Yellow));
		}
		board.render(inner, buf);
	}

	/// Render one rank of the virtual board. Empty cells show as dim dots;
	/// the held die shows inverted; dice under a rejection notice show red.
	///
	/// # Arguments
	///
	/// * `row` - The rank to render.
	///
	/// # Returns
	///
	/// The rendered rank.
	#[must_use]
	fn board_line(&self, row: i32) -> Line<'static>
	{
		let mut spans = Vec::with_capacity(BOARD_COLUMNS as usize);
		for col in 0 .. BOARD_COLUMNS
		{
			let position = Position::new(col, row);
			let sitter = self.slots.iter()
				.position(|slot| *slot == Some(position));
			let span = match sitter
			{
				Some(index) =>
				{
					let text = self.die_text(index);
					if self.flashes(position)
					{
						Span::styled(
							text,
							Style::default().fg(Color::White).bg(Color::Red)
						)
					}
					else if index == self.selected
					{
						Span::styled(
							text,
							Style::default().fg(Color::Black).bg(Color::Cyan)
						)
					}
					else
					{
						Span::raw(text)
					}
				}
				None => Span::styled(
					" ·  ".to_string(),
					Style::default().fg(Color::DarkGray)
				)
			};
			spans.push(span);
		}
		Line::from(spans)
	}

	/// The text of a die's board cell, four columns wide, with the die's
	/// point value when values are shown.
	///
	/// # Arguments
	///
	/// * `index` - The die's bag index.
	///
	/// # Returns
	///
	/// The cell text.
	#[must_use]
	fn die_text(&self, index: usize) -> String
	{
		if self.show_values
		{
			// Valued faces carry single letters; the value may reach 10.
			format!(
				" {}{:>2}",
				self.rack[index].label(),
				self.dice[index].value()
			)
		}
		else
		{
			format!(" {:<2} ", self.rack[index].label())
		}
	}

	/// Check if the given position is under the rejection notice.
	///
	/// # Arguments
	///
	/// * `position` - The position to check.
	#[must_use]
	fn flashes(&self, position: Position) -> bool
	{
		self.flash.as_ref()
			.is_some_and(|flash| flash.positions.contains(&position))
	}

	/// Render the rack: the dice not yet placed, with the held one
	/// inverted.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	fn render_rack(&self, area: Rect, buf: &mut Buffer)
	{
		let mut spans = Vec::new();
		for (index, tile) in self.rack.iter().enumerate()
		{
			if self.slots[index].is_some()
			{
				continue
			}
			let text =
				if self.show_values
				{
					format!(" {}{} ", tile.label(), self.dice[index].value())
				}
				else
				{
					format!(" {} ", tile.label())
				};
			let span =
				if index == self.selected
				{
					Span::styled(
						text,
						Style::default().fg(Color::Black).bg(Color::Cyan)
					)
				}
				else
				{
					Span::raw(text)
				};
			spans.push(span);
		}
		let placed = self.slots.iter().filter(|slot| slot.is_some()).count();
		Paragraph::new(Line::from(spans))
			.block(
				Block::default()
					.borders(Borders::ALL)
					.title(
						Title::default()
							.content("Rack")
							.alignment(Alignment::Center)
					)
					.title(
						Title::default()
							.content(format!(
								"{} of {} placed",
								placed,
								self.rack.len()
							))
							.position(TitlePosition::Bottom)
							.alignment(Alignment::Right)
					)
			)
			.render(area, buf);
	}

	/// Render the status line: the standing crossword's banner, the
	/// confirmation prompt, or the rejection notice.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	fn render_status(&self, area: Rect, buf: &mut Buffer)
	{
		let line = match self.state
		{
			BuildState::Finished =>
				Line::styled(
					format!("Crossword! {}", clock(self.elapsed())),
					Style::default().fg(Color::Green).bold()
				),
			BuildState::Confirming { .. } =>
				Line::styled(
					"No dictionary is open. Y lets the crossword stand; \
					anything else goes back to building.",
					Style::default().fg(Color::Yellow)
				),
			_ => match self.flash
			{
				Some(ref flash) =>
					Line::styled(
						flash.message.clone(),
						Style::default().fg(Color::Red).bold()
					),
				None => Line::raw("")
			}
		};
		Paragraph::new(line).render(area, buf);
	}

	/// Process events.
	///
	/// # Errors
	///
	/// Any error that occurs while processing events.
	fn process_event(&mut self) -> io::Result<()>
	{
		if poll(Duration::from_millis(50))?
		{
			match read()?
			{
				Event::Key(event) if event.kind == KeyEventKind::Press =>
					self.process_key_event(event),
				_ => {}
			}
		}
		Ok(())
	}

	/// Process a key event, according to the execution state.
	///
	/// # Arguments
	///
	/// * `event` - The key event to process.
	fn process_key_event(&mut self, event: KeyEvent)
	{
		match self.state
		{
			BuildState::Building => self.process_key_event_building(event),
			BuildState::Confirming { .. } =>
				self.process_key_event_confirming(event),
			BuildState::Finished => self.state = BuildState::Exiting,
			BuildState::Exiting => {}
		}
	}

	/// Process a key event while [building](BuildState::Building):
	///
	/// * Escape - Leave the table.
	/// * Enter - Ask for a verdict.
	/// * Up, Down, Left, Right - Slide the held die.
	/// * Tab - Take the next die in hand.
	/// * BackTab - (Shift+Tab) Take the previous die in hand.
	/// * Backspace, Delete - Send the held die back to the rack.
	/// * A-Z - Take the next die showing that letter in hand.
	///
	/// # Arguments
	///
	/// * `event` - The key event to process.
	fn process_key_event_building(&mut self, event: KeyEvent)
	{
		match event.code
		{
			KeyCode::Esc => self.state = BuildState::Exiting,
			KeyCode::Enter => self.check(),
			KeyCode::Up => self.slide(0, -1),
			KeyCode::Down => self.slide(0, 1),
			KeyCode::Left => self.slide(-1, 0),
			KeyCode::Right => self.slide(1, 0),
			KeyCode::Tab => self.select_next(1),
			KeyCode::BackTab => self.select_next(-1),
			KeyCode::Backspace | KeyCode::Delete => self.lift(),
			KeyCode::Char(c) if c.is_ascii_alphabetic() => self.pick(c),
			_ => {}
		}
	}

	/// Process a key event while [confirming](BuildState::Confirming) an
	/// unverified crossword:
	///
	/// * Y - Let the crossword stand.
	/// * Escape - Leave the table.
	/// * Anything else - Resume building.
	///
	/// # Arguments
	///
	/// * `event` - The key event to process.
	fn process_key_event_confirming(&mut self, event: KeyEvent)
	{
		match event.code
		{
			KeyCode::Esc => self.state = BuildState::Exiting,
			KeyCode::Char(c) if c.eq_ignore_ascii_case(&'y') => self.accept(),
			_ => self.state = BuildState::Building
		}
	}
}

impl Widget for &CrosswordApp
{
	fn render(self, area: Rect, buf: &mut Buffer)
	{
		// The board on top, the rack and the status line beneath.
		let outer = Layout::default()
			.direction(Direction::Vertical)
			.margin(1)
			.constraints([
				Constraint::Length(BOARD_ROWS as u16 + 2),
				Constraint::Length(3),
				Constraint::Min(1)
			])
			.split(area);
		self.render_board(outer[0], buf);
		self.render_rack(outer[1], buf);
		self.render_status(outer[2], buf);
	}
}

/// The execution state of a crossword build.
#[derive(Clone, Debug)]
enum BuildState
{
	/// Dice are being arranged on the board.
	Building,

	/// The crossword is well shaped, but with no dictionary at hand the
	/// spelling went unchecked; the player decides whether it stands.
	Confirming
	{
		/// The unverified verdict, held while the player decides.
		verdict: CrosswordVerdict
	},

	/// The crossword stood up; the board stays up until the next keypress.
	Finished,

	/// The player left; the main loop should stop.
	Exiting
}

/// A rejection notice: what went wrong, which placed dice to point at, and
/// when to take the notice down.
struct Flash
{
	/// The rejection message.
	message: String,

	/// The positions of the offending dice.
	positions: Vec<Position>,

	/// When the notice lapses.
	until: Instant
}

/// The cell where a rack die enters the board for the given direction of
/// travel: the middle of the edge the travel crosses first.
const fn entry_point(dc: i32, dr: i32) -> Position
{
	match (dc, dr)
	{
		(0, 1) => Position::new(BOARD_COLUMNS / 2, 0),
		(0, -1) => Position::new(BOARD_COLUMNS / 2, BOARD_ROWS - 1),
		(1, 0) => Position::new(0, BOARD_ROWS / 2),
		(-1, 0) => Position::new(BOARD_COLUMNS - 1, BOARD_ROWS / 2),
		_ => Position::new(BOARD_COLUMNS / 2, BOARD_ROWS / 2)
	}
}

/// Check that a position lies on the virtual board.
const fn in_bounds(position: Position) -> bool
{
	position.col >= 0 && position.col < BOARD_COLUMNS
		&& position.row >= 0 && position.row < BOARD_ROWS
}

/// The positions of the given placed tiles.
fn positions_of(tiles: &[PositionedTile]) -> Vec<Position>
{
	tiles.iter().map(|placed| placed.position).collect()
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

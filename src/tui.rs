//! # Text-based user interface (TUI)
//!
//! The terminal plumbing shared by the playable games: putting the terminal
//! into raw mode on the alternate screen, handing it back afterward, and
//! making sure a panic does not strand the user on a dead alternate screen
//! with a hidden cursor. Every Ratatui application carries a copy of this
//! module in some form; this is ours.

use std::{
	io::{self, stdout, Stdout},
	panic,
	sync::Once
};

use crossterm::{
	execute,
	terminal::{
		disable_raw_mode, enable_raw_mode,
		EnterAlternateScreen, LeaveAlternateScreen
	}
};
use ratatui::{backend::{Backend, CrosstermBackend}, Terminal};

////////////////////////////////////////////////////////////////////////////////
//                         Text-based user interface.                         //
////////////////////////////////////////////////////////////////////////////////

/// The text-based user interface (TUI) type.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run a function against a freshly initialized terminal, restoring the
/// terminal afterward however the function fares. A panic restores the
/// terminal too, through a process-wide hook installed on first use; the
/// hook stays installed, and restoring an already restored terminal is
/// harmless.
///
/// # Arguments
///
/// * `f` - The function to apply to the TUI.
///
/// # Returns
///
/// The result of applying `f` to the TUI.
///
/// # Errors
///
/// Any error that occurs while initializing, driving, or restoring the TUI.
pub fn session<F, T>(f: F) -> io::Result<T>
	where F: FnOnce(&mut Tui) -> io::Result<T>
{
	install_panic_hook();
	// Initialization is non-atomic, so restore even after partial success.
	let result = match init()
	{
		Ok(mut terminal) => f(&mut terminal),
		Err(e) => Err(e)
	};
	restore()?;
	result
}

/// Guards the panic hook, which is installed at most once per process.
static PANIC_HOOK: Once = Once::new();

/// Install a panic hook that restores the terminal before deferring to the
/// previous hook, so the panic report lands on a usable screen.
fn install_panic_hook()
{
	PANIC_HOOK.call_once(|| {
		let previous = panic::take_hook();
		panic::set_hook(Box::new(move |info| {
			// Nothing useful can be done about a restoration failure while
			// already panicking.
			let _ = restore();
			previous(info);
		}));
	});
}

/// Initialize the text-based user interface (TUI): raw mode, alternate
/// screen.
///
/// # Returns
///
/// The initialized TUI.
///
/// # Errors
///
/// Any error that occurs while initializing the TUI.
fn init() -> io::Result<Tui>
{
	let mut stdout = stdout();
	execute!(stdout, EnterAlternateScreen)?;
	enable_raw_mode()?;
	Terminal::new(CrosstermBackend::new(stdout))
}

/// Restore the terminal to its original state.
///
/// # Errors
///
/// Any error that occurs while restoring the terminal.
fn restore() -> io::Result<()>
{
	let mut stdout = stdout();
	execute!(stdout, LeaveAlternateScreen)?;
	disable_raw_mode()?;
	// Take care to restore the cursor.
	CrosstermBackend::new(stdout).show_cursor()
}

//! TUI application state and logic

use super::input::{Action, decode_key};
use crate::game::{Dictionary, Game, SubmitOutcome};
use crate::output::Palette;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use std::mem;

/// Application state
pub struct App<'a> {
    pub game: Game<&'a dyn Dictionary>,
    pub palette: Palette,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub const fn new(game: Game<&'a dyn Dictionary>, palette: Palette) -> Self {
        Self {
            game,
            palette,
            should_quit: false,
        }
    }

    /// Apply one decoded key press to the game
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Letter(c) => {
                self.game.append_letter(c);
            }
            Action::Backspace => {
                self.game.delete_letter();
            }
            Action::Submit => {
                if let SubmitOutcome::NotAWord(word) = self.game.submit_guess() {
                    log::debug!("Alerting: {word} is not a word");
                }
            }
            Action::Quit => self.should_quit = true,
        }
    }
}

/// Puts the terminal back the way it was found, step by step
///
/// Each step is undone only if it was done, and independently of the others,
/// so a failed setup or a failed cleanup never leaves the shell in raw mode.
/// Dropping the guard restores as well.
struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
    alternate_screen: bool,
}

impl<W: Write> TerminalGuard<W> {
    const fn new(out: W) -> Self {
        Self {
            out,
            raw_mode: false,
            alternate_screen: false,
        }
    }

    fn enter(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        self.raw_mode = true;
        execute!(self.out, EnterAlternateScreen)?;
        self.alternate_screen = true;
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        let screen = if mem::take(&mut self.alternate_screen) {
            execute!(self.out, LeaveAlternateScreen, Show)
        } else {
            Ok(())
        };
        let raw = if mem::take(&mut self.raw_mode) {
            disable_raw_mode()
        } else {
            Ok(())
        };
        screen.and(raw)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::warn!("Failed to restore terminal: {e}");
        }
    }
}

/// Run the TUI application
///
/// Returns the app once the player quits so the caller can print a summary.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored either way.
pub fn run_tui(app: App) -> Result<App> {
    let mut guard = TerminalGuard::new(io::stdout());
    guard.enter().context("failed to set up terminal")?;

    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| run_app(&mut terminal, app));

    let restored = guard.restore();
    let app = res?;
    restored.context("failed to restore terminal")?;
    Ok(app)
}

fn run_app<'a, B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App<'a>,
) -> Result<App<'a>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()?
            && let Some(action) = decode_key(key, app.game.status().is_over())
        {
            app.handle_action(action);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}

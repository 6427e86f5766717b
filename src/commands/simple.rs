//! Simple line-mode game
//!
//! Text-based game without TUI: type a whole word, press enter.

use crate::core::{NUM_GUESSES, NUM_LETTERS};
use crate::game::{Dictionary, Game, SubmitOutcome};
use crate::output::{Palette, write_board, write_message};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the line-mode game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D: Dictionary>(game: &mut Game<D>, palette: &Palette) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_lines(game, palette, &mut stdin.lock(), &mut stdout)
}

/// Drive `game` from newline-separated guesses until it ends or input runs out
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub fn play_lines<D, R, W>(
    game: &mut Game<D>,
    palette: &Palette,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    D: Dictionary,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n{}", "W O R D L E".bright_white().bold())?;
    writeln!(
        out,
        "Guess the {NUM_LETTERS}-letter word in {NUM_GUESSES} tries. Type 'quit' to give up.\n"
    )?;

    while !game.status().is_over() {
        let prompt = format!("Guess {}/{NUM_GUESSES}", game.history().len() + 1);
        let Some(line) = read_guess(&prompt, input, out)? else {
            writeln!(out)?;
            break;
        };

        if matches!(line.to_lowercase().as_str(), "quit" | "exit") {
            break;
        }

        if line.chars().count() != NUM_LETTERS || !line.chars().all(|c| c.is_ascii_alphabetic())
        {
            writeln!(
                out,
                "{}",
                format!("Enter exactly {NUM_LETTERS} letters").yellow()
            )?;
            continue;
        }

        while game.delete_letter() {}
        for ch in line.chars() {
            game.append_letter(ch);
        }

        match game.submit_guess() {
            SubmitOutcome::Accepted(_) => write_board(out, game, palette)?,
            SubmitOutcome::NotAWord(_) | SubmitOutcome::Ignored => {}
        }

        if let Some(message) = game.message() {
            write_message(out, message, palette)?;
        }
    }

    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_guess<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

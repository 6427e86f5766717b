//! Display functions for the line-mode front end and end-of-game summaries

use super::Palette;
use super::formatters::{colored_keyboard, share_grid, tallied_row};
use crate::core::NUM_GUESSES;
use crate::game::{Game, GameStatus, Message};
use colored::Colorize;
use std::io::{self, Write};

/// Print the scored rows so far, followed by the keyboard
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_board<D, W: Write>(out: &mut W, game: &Game<D>, palette: &Palette) -> io::Result<()> {
    writeln!(out)?;
    for (i, record) in game.history().iter().enumerate() {
        writeln!(
            out,
            "  {} {}",
            format!("{}.", i + 1).bright_black(),
            tallied_row(record, palette)
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{}", colored_keyboard(game.keyboard(), palette))?;
    writeln!(out)
}

/// Print the game's current message in its palette color
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_message<W: Write>(out: &mut W, message: &Message, palette: &Palette) -> io::Result<()> {
    let (r, g, b) = match message {
        Message::NotAWord(_) => palette.alert,
        Message::Won => palette.win,
        Message::Lost { .. } => palette.loss,
    };
    writeln!(out, "{}", message.to_string().truecolor(r, g, b).bold())
}

/// Print the result of a finished game
pub fn print_game_summary<D>(game: &Game<D>, palette: &Palette) {
    println!("\n{}", "─".repeat(40).cyan());
    match game.status() {
        GameStatus::Won => println!(
            "{}",
            format!(
                "✅ Solved {} in {}/{NUM_GUESSES}",
                game.secret(),
                game.history().len()
            )
            .green()
            .bold()
        ),
        GameStatus::Lost => println!(
            "{}",
            format!("❌ The word was {}", game.secret()).red().bold()
        ),
        GameStatus::InProgress => println!("{}", "Game abandoned".bright_black()),
    }
    println!("{}", "─".repeat(40).cyan());

    for record in game.history() {
        println!("  {}", tallied_row(record, palette));
    }

    if game.status().is_over() {
        println!("\n{}\n", share_grid(game));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::AcceptAll;

    #[test]
    fn write_message_uses_message_text() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_message(
            &mut out,
            &Message::Lost {
                secret: "CRANE".to_string(),
            },
            &Palette::STANDARD,
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "You lost! The secret word was CRANE\n"
        );
    }

    #[test]
    fn write_board_lists_guesses() {
        colored::control::set_override(false);
        let mut game = Game::with_secret(Word::new("crane").unwrap(), AcceptAll);
        for ch in "slate".chars() {
            game.append_letter(ch);
        }
        game.submit_guess();

        let mut out = Vec::new();
        write_board(&mut out, &game, &Palette::STANDARD).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("1.  S  L  A  T  E   1🟩 1🟨"));
        assert!(text.contains(" Q "));
    }
}

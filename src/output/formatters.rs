//! Formatting utilities for terminal output

use super::Palette;
use crate::core::{KEYBOARD_ROWS, KeyboardHints, LetterVerdict, NUM_GUESSES};
use crate::game::{Game, GameStatus, GuessRecord};
use colored::Colorize;

/// A scored guess as colored tiles, e.g. ` S  L  A  T  E `
#[must_use]
pub fn colored_row(record: &GuessRecord, palette: &Palette) -> String {
    let (fr, fg, fb) = palette.text;

    record
        .word
        .text()
        .chars()
        .zip(record.feedback.verdicts())
        .map(|(letter, &verdict)| {
            let (r, g, b) = palette.verdict(verdict);
            format!(" {letter} ")
                .truecolor(fr, fg, fb)
                .on_truecolor(r, g, b)
                .bold()
                .to_string()
        })
        .collect()
}

/// A scored guess followed by its green and yellow tallies
#[must_use]
pub fn tallied_row(record: &GuessRecord, palette: &Palette) -> String {
    let tally = format!(
        "{}{} {}{}",
        record.feedback.count_correct(),
        LetterVerdict::Correct.to_emoji(),
        record.feedback.count_present(),
        LetterVerdict::Present.to_emoji()
    );
    format!("{}  {}", colored_row(record, palette), tally.bright_black())
}

/// The keyboard as three colored lines, one per QWERTY row
#[must_use]
pub fn colored_keyboard(hints: &KeyboardHints, palette: &Palette) -> String {
    let (fr, fg, fb) = palette.text;

    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|letter| {
                    let (r, g, b) = palette.hint(hints.hint(letter));
                    format!(" {letter} ")
                        .truecolor(fr, fg, fb)
                        .on_truecolor(r, g, b)
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join(" ");
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Spoiler-free emoji grid of the finished game
///
/// ```text
/// Wordle 3/6
///
/// ⬜⬜🟩⬜🟩
/// 🟩🟨🟩⬜🟩
/// 🟩🟩🟩🟩🟩
/// ```
#[must_use]
pub fn share_grid<D>(game: &Game<D>) -> String {
    let score = match game.status() {
        GameStatus::Won => game.history().len().to_string(),
        GameStatus::Lost | GameStatus::InProgress => "X".to_string(),
    };

    let rows: Vec<String> = game
        .history()
        .iter()
        .map(|record| record.feedback.to_emoji())
        .collect();

    format!("Wordle {score}/{NUM_GUESSES}\n\n{}", rows.join("\n"))
}

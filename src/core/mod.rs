//! Core domain types for Wordle
//!
//! Words, verdicts, guess evaluation and keyboard hints. Everything here is
//! pure: no I/O, no randomness, no rendering.

mod feedback;
mod keyboard;
mod verdict;
mod word;

pub use feedback::Feedback;
pub use keyboard::{KEYBOARD_ROWS, KeyboardHints};
pub use verdict::LetterVerdict;
pub use word::{Word, WordError};

/// Number of letters in every guess and in the secret word
pub const NUM_LETTERS: usize = 5;

/// Number of guesses the player has to find the secret word
pub const NUM_GUESSES: usize = 6;

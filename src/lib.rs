//! Wordle
//!
//! Guess the hidden five-letter word in six tries. After each guess every
//! letter is marked correct, present elsewhere, or absent.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{Game, GameStatus, WordList};
//!
//! let words = WordList::embedded();
//! let mut game = Game::with_secret(Word::new("robot").unwrap(), &words);
//!
//! for ch in "pools".chars() {
//!     game.append_letter(ch);
//! }
//! game.submit_guess();
//!
//! assert_eq!(game.history()[0].feedback.to_emoji(), "⬜🟩🟨⬜⬜");
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

// Core domain types
pub mod core;

// Game state machine and word sources
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use crate::core::{NUM_GUESSES, NUM_LETTERS};

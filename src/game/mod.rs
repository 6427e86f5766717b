//! Game state and word sources
//!
//! The state machine in `state` is independent of any front end; word
//! selection and dictionary checks are pluggable through the traits in
//! `word_source`.

mod error;
mod state;
mod word_source;

pub use error::GameError;
pub use state::{BoardRow, Game, GameStatus, GuessRecord, Message, SubmitOutcome};
pub use word_source::{AcceptAll, Dictionary, WordList, WordSource};

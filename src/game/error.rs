use crate::core::WordError;
use thiserror::Error;

/// Failures that prevent a game from being set up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("The list of common words does not have any words that are {0} letters long!")]
    NoWordsOfLength(usize),

    #[error("The secret word {0} is not in the dictionary, so it could never be guessed")]
    SecretNotInDictionary(String),

    #[error("Invalid secret word: {0}")]
    InvalidSecret(#[from] WordError),
}

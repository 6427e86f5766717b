//! Secret-word selection and dictionary membership

use super::GameError;
use crate::core::{NUM_LETTERS, Word};
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{ALLOWED, ANSWERS};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// Decides whether a submitted guess is a real word
pub trait Dictionary {
    /// `word` is the lowercase spelling of the guess
    fn is_valid_word(&self, word: &str) -> bool;
}

impl<T: Dictionary + ?Sized> Dictionary for &T {
    fn is_valid_word(&self, word: &str) -> bool {
        (**self).is_valid_word(word)
    }
}

/// Supplies the secret word for a new game
pub trait WordSource {
    /// Pick a secret uniformly among the source's `NUM_LETTERS`-letter words
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoWordsOfLength` if the source has no such word.
    fn choose_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, GameError>;
}

/// Dictionary that accepts every guess
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Dictionary for AcceptAll {
    fn is_valid_word(&self, _word: &str) -> bool {
        true
    }
}

/// Common words for secrets plus a dictionary for validating guesses
///
/// Every common word is also accepted as a guess.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    common: Vec<Word>,
    allowed: FxHashSet<String>,
}

impl WordList {
    /// Build from already-parsed words
    #[must_use]
    pub fn new(common: Vec<Word>, allowed: &[Word]) -> Self {
        let allowed = allowed
            .iter()
            .chain(&common)
            .map(Word::to_lowercase)
            .collect();

        Self { common, allowed }
    }

    /// The lists compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::{Dictionary, WordList};
    ///
    /// let words = WordList::embedded();
    /// assert!(words.is_valid_word("crane"));
    /// assert!(!words.is_valid_word("xqzvk"));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS), &words_from_slice(ALLOWED))
    }

    /// Load a custom list that serves as both secret source and dictionary
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let words = load_from_file(path)?;
        Ok(Self::new(words, &[]))
    }

    /// Number of candidate secret words
    #[must_use]
    pub fn common_len(&self) -> usize {
        self.common.len()
    }

    /// Number of words accepted as guesses
    #[must_use]
    pub fn dictionary_len(&self) -> usize {
        self.allowed.len()
    }
}

impl Dictionary for WordList {
    fn is_valid_word(&self, word: &str) -> bool {
        self.allowed.contains(word)
    }
}

impl WordSource for WordList {
    fn choose_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, GameError> {
        self.common
            .choose(rng)
            .cloned()
            .ok_or(GameError::NoWordsOfLength(NUM_LETTERS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list)
    }

    #[test]
    fn accept_all_accepts_anything() {
        assert!(AcceptAll.is_valid_word("xqzvk"));
        assert!(AcceptAll.is_valid_word(""));
    }

    #[test]
    fn word_list_validates_lowercase_guesses() {
        let list = WordList::new(words(&["crane"]), &words(&["slate"]));

        assert!(list.is_valid_word("crane"));
        assert!(list.is_valid_word("slate"));
        assert!(!list.is_valid_word("robot"));
        assert_eq!(list.dictionary_len(), 2);
    }

    #[test]
    fn word_list_chooses_from_common_words() {
        let list = WordList::new(words(&["crane", "robot"]), &words(&["slate"]));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let secret = list.choose_secret(&mut rng).unwrap();
            assert!(["CRANE", "ROBOT"].contains(&secret.text()));
        }
    }

    #[test]
    fn word_list_same_seed_same_secret() {
        let list = WordList::embedded();
        let first = list.choose_secret(&mut StdRng::seed_from_u64(42)).unwrap();
        let second = list.choose_secret(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_word_list_cannot_choose_secret() {
        let list = WordList::new(Vec::new(), &words(&["slate"]));
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            list.choose_secret(&mut rng),
            Err(GameError::NoWordsOfLength(NUM_LETTERS))
        );
    }

    #[test]
    fn file_without_five_letter_words_cannot_choose_secret() {
        let path = std::env::temp_dir().join(format!("wordle_source_{}.txt", std::process::id()));
        std::fs::write(&path, "cat\ndog\nelephant\n").unwrap();

        let list = WordList::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(list.common_len(), 0);
        assert!(list.choose_secret(&mut StdRng::seed_from_u64(3)).is_err());
    }

    #[test]
    fn embedded_list_is_populated() {
        let list = WordList::embedded();
        assert_eq!(list.common_len(), ANSWERS.len());
        assert_eq!(list.dictionary_len(), ALLOWED.len());
    }

    #[test]
    fn dictionary_through_reference() {
        fn accepts<D: Dictionary>(dictionary: D, word: &str) -> bool {
            dictionary.is_valid_word(word)
        }

        let list = WordList::embedded();

        assert!(accepts(&list, "robot"));
        assert!(!accepts(&list, "qqqqq"));
    }

    #[test]
    fn embedded_dictionary_accepts_everyday_guesses() {
        use crate::game::{Game, SubmitOutcome};

        let words = WordList::embedded();
        let mut game = Game::with_secret(Word::new("crane").unwrap(), &words);

        for guess in ["there", "their", "could", "these", "about"] {
            for ch in guess.chars() {
                game.append_letter(ch);
            }
            assert!(
                matches!(game.submit_guess(), SubmitOutcome::Accepted(_)),
                "{guess} should be playable"
            );
        }
        assert_eq!(game.history().len(), 5);
    }
}

//! Guess state machine
//!
//! Owns one game: the secret word, finalized guesses, the guess being typed
//! and the keyboard hints. Front ends feed it three inbound actions
//! (`append_letter`, `delete_letter`, `submit_guess`) and redraw from the
//! outbound queries after each one.

use super::{Dictionary, GameError, WordSource};
use crate::core::{Feedback, KeyboardHints, NUM_GUESSES, NUM_LETTERS, Word};
use rand::Rng;
use std::fmt;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and Lost are final
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A finalized guess and the feedback it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// Result of `Game::submit_guess`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Game already over or the guess is not full length; nothing changed
    Ignored,
    /// Rejected by the dictionary; the guess was not consumed
    NotAWord(String),
    /// Guess consumed and scored
    Accepted(Feedback),
}

/// Message for the renderer's alert line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Advisory: the typed guess failed dictionary validation
    NotAWord(String),
    Won,
    Lost { secret: String },
}

impl Message {
    /// Terminal messages stay up; advisories clear on the next edit
    #[must_use]
    pub const fn is_advisory(&self) -> bool {
        matches!(self, Self::NotAWord(_))
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAWord(word) => write!(f, "{word} is not a word!"),
            Self::Won => write!(f, "You win!"),
            Self::Lost { secret } => write!(f, "You lost! The secret word was {secret}"),
        }
    }
}

/// One row of the guess grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardRow<'a> {
    Scored(&'a GuessRecord),
    Typing(&'a str),
    Empty,
}

/// A single game of Wordle
#[derive(Debug, Clone)]
pub struct Game<D> {
    secret: Word,
    dictionary: D,
    history: Vec<GuessRecord>,
    in_progress: String,
    keyboard: KeyboardHints,
    status: GameStatus,
    message: Option<Message>,
}

impl<D: Dictionary> Game<D> {
    /// Start a game with a secret drawn from `source`
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoWordsOfLength` if `source` has no word of
    /// `NUM_LETTERS` letters, or `GameError::SecretNotInDictionary` if the
    /// drawn word would be rejected as a guess.
    pub fn new<S, R>(source: &S, dictionary: D, rng: &mut R) -> Result<Self, GameError>
    where
        S: WordSource,
        R: Rng + ?Sized,
    {
        let secret = source.choose_secret(rng)?;
        Self::try_with_secret(secret, dictionary)
    }

    /// Start a game with a known secret that `dictionary` must accept
    ///
    /// # Errors
    ///
    /// Returns `GameError::SecretNotInDictionary` if the secret could never
    /// be submitted as a guess.
    pub fn try_with_secret(secret: Word, dictionary: D) -> Result<Self, GameError> {
        if !dictionary.is_valid_word(&secret.to_lowercase()) {
            return Err(GameError::SecretNotInDictionary(secret.text().to_string()));
        }

        Ok(Self::with_secret(secret, dictionary))
    }

    /// Start a game with a known secret
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{AcceptAll, Game, GameStatus, SubmitOutcome};
    ///
    /// let mut game = Game::with_secret(Word::new("crane").unwrap(), AcceptAll);
    /// for ch in "crane".chars() {
    ///     game.append_letter(ch);
    /// }
    /// assert!(matches!(game.submit_guess(), SubmitOutcome::Accepted(f) if f.is_perfect()));
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    #[must_use]
    pub fn with_secret(secret: Word, dictionary: D) -> Self {
        log::info!("New game started");
        log::debug!("Secret word is {secret}");

        Self {
            secret,
            dictionary,
            history: Vec::with_capacity(NUM_GUESSES),
            in_progress: String::with_capacity(NUM_LETTERS),
            keyboard: KeyboardHints::new(),
            status: GameStatus::InProgress,
            message: None,
        }
    }

    /// Add a letter to the guess being typed
    ///
    /// Ignored unless the game is in progress, the guess has room, and `ch`
    /// is an ASCII letter. Returns whether anything changed.
    pub fn append_letter(&mut self, ch: char) -> bool {
        if self.status.is_over()
            || self.in_progress.len() >= NUM_LETTERS
            || !ch.is_ascii_alphabetic()
        {
            return false;
        }

        self.in_progress.push(ch.to_ascii_uppercase());
        self.clear_advisory();
        true
    }

    /// Remove the last letter of the guess being typed
    ///
    /// Returns whether anything changed.
    pub fn delete_letter(&mut self) -> bool {
        if self.status.is_over() || self.in_progress.pop().is_none() {
            return false;
        }

        self.clear_advisory();
        true
    }

    /// Finalize the guess being typed
    ///
    /// Dictionary validation runs first, so a rejected word never consumes
    /// a guess or ends the game. A correct guess wins even when it is the
    /// last one allowed.
    pub fn submit_guess(&mut self) -> SubmitOutcome {
        if self.status.is_over() || self.in_progress.len() != NUM_LETTERS {
            return SubmitOutcome::Ignored;
        }

        if !self
            .dictionary
            .is_valid_word(&self.in_progress.to_ascii_lowercase())
        {
            log::debug!("Rejected {}: not in dictionary", self.in_progress);
            self.message = Some(Message::NotAWord(self.in_progress.clone()));
            return SubmitOutcome::NotAWord(self.in_progress.clone());
        }

        // Only ASCII letters are ever appended, so this cannot fail
        let Ok(word) = Word::new(self.in_progress.as_str()) else {
            log::warn!("Guess {:?} is not a playable word", self.in_progress);
            return SubmitOutcome::Ignored;
        };

        let feedback = Feedback::evaluate(&word, &self.secret);
        log::debug!(
            "Guess {} of {NUM_GUESSES}: {word} {}",
            self.history.len() + 1,
            feedback.to_emoji()
        );

        self.keyboard.record(&word, &feedback);
        let solved = word == self.secret;
        self.history.push(GuessRecord { word, feedback });
        self.in_progress.clear();
        self.message = None;

        if solved {
            self.status = GameStatus::Won;
            self.message = Some(Message::Won);
            log::info!("Game won in {} guesses", self.history.len());
        } else if self.history.len() >= NUM_GUESSES {
            self.status = GameStatus::Lost;
            self.message = Some(Message::Lost {
                secret: self.secret.text().to_string(),
            });
            log::info!("Game lost after {NUM_GUESSES} guesses");
        }

        SubmitOutcome::Accepted(feedback)
    }

    fn clear_advisory(&mut self) {
        if self.message.as_ref().is_some_and(Message::is_advisory) {
            self.message = None;
        }
    }
}

impl<D> Game<D> {
    /// Finalized guesses, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Uppercase letters typed so far for the next guess
    #[must_use]
    pub fn in_progress(&self) -> &str {
        &self.in_progress
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardHints {
        &self.keyboard
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Current alert, if any
    #[must_use]
    pub const fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// The secret word; front ends should only show it once the game is lost
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        NUM_GUESSES - self.history.len()
    }

    /// The full `NUM_GUESSES`-row grid: scored rows, then the row being
    /// typed (while in progress), then empty rows
    #[must_use]
    pub fn board(&self) -> [BoardRow<'_>; NUM_GUESSES] {
        std::array::from_fn(|row| match row.cmp(&self.history.len()) {
            std::cmp::Ordering::Less => BoardRow::Scored(&self.history[row]),
            std::cmp::Ordering::Equal if !self.status.is_over() => {
                BoardRow::Typing(&self.in_progress)
            }
            _ => BoardRow::Empty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterVerdict::{Absent, Correct, Present};
    use crate::game::{AcceptAll, WordList};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game(secret: &str) -> Game<AcceptAll> {
        Game::with_secret(Word::new(secret).unwrap(), AcceptAll)
    }

    fn type_word<D: Dictionary>(game: &mut Game<D>, word: &str) {
        for ch in word.chars() {
            game.append_letter(ch);
        }
    }

    fn guess<D: Dictionary>(game: &mut Game<D>, word: &str) -> SubmitOutcome {
        type_word(game, word);
        game.submit_guess()
    }

    /// Rejects everything except the listed words
    struct Only(&'static [&'static str]);

    impl Dictionary for Only {
        fn is_valid_word(&self, word: &str) -> bool {
            self.0.iter().any(|&allowed| allowed == word)
        }
    }

    #[test]
    fn new_game_is_empty() {
        let game = game("crane");
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
        assert_eq!(game.in_progress(), "");
        assert_eq!(game.message(), None);
        assert_eq!(game.guesses_remaining(), NUM_GUESSES);
        assert_eq!(game.keyboard(), &KeyboardHints::new());
    }

    #[test]
    fn append_uppercases_letters() {
        let mut game = game("crane");
        assert!(game.append_letter('s'));
        assert!(game.append_letter('L'));
        assert_eq!(game.in_progress(), "SL");
    }

    #[test]
    fn append_ignores_non_letters() {
        let mut game = game("crane");
        for ch in ['1', ' ', '!', 'é', '\n'] {
            assert!(!game.append_letter(ch), "{ch:?} should be ignored");
        }
        assert_eq!(game.in_progress(), "");
    }

    #[test]
    fn append_stops_at_word_length() {
        let mut game = game("crane");
        type_word(&mut game, "slates");
        assert_eq!(game.in_progress(), "SLATE");
        assert!(!game.append_letter('x'));
    }

    #[test]
    fn delete_removes_last_letter() {
        let mut game = game("crane");
        type_word(&mut game, "sla");
        assert!(game.delete_letter());
        assert_eq!(game.in_progress(), "SL");
    }

    #[test]
    fn delete_on_empty_is_noop() {
        let mut game = game("crane");
        assert!(!game.delete_letter());
        assert_eq!(game.in_progress(), "");
    }

    #[test]
    fn submit_short_guess_is_ignored() {
        let mut game = game("crane");
        assert_eq!(guess(&mut game, "sla"), SubmitOutcome::Ignored);
        assert_eq!(game.in_progress(), "SLA");
        assert!(game.history().is_empty());
        assert_eq!(game.message(), None);
    }

    #[test]
    fn slate_then_crane_wins() {
        let mut game = game("crane");

        let outcome = guess(&mut game, "slate");
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted(Feedback::new([Absent, Absent, Correct, Absent, Correct]))
        );
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.in_progress(), "");
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].word.text(), "SLATE");

        let outcome = guess(&mut game, "crane");
        assert_eq!(outcome, SubmitOutcome::Accepted(Feedback::PERFECT));
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.message().map(ToString::to_string).as_deref(), Some("You win!"));
    }

    #[test]
    fn robot_pools_feedback() {
        let mut game = game("robot");
        assert_eq!(
            guess(&mut game, "pools"),
            SubmitOutcome::Accepted(Feedback::new([Absent, Correct, Present, Absent, Absent]))
        );
    }

    #[test]
    fn six_misses_lose_and_reveal_secret() {
        let mut game = game("crane");
        for word in ["slate", "pools", "robot", "audio", "speed", "lolly"] {
            assert!(matches!(guess(&mut game, word), SubmitOutcome::Accepted(_)));
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.guesses_remaining(), 0);
        let message = game.message().unwrap().to_string();
        assert_eq!(message, "You lost! The secret word was CRANE");
    }

    #[test]
    fn correct_sixth_guess_wins() {
        let mut game = game("crane");
        for word in ["slate", "pools", "robot", "audio", "speed"] {
            guess(&mut game, word);
        }
        assert_eq!(game.status(), GameStatus::InProgress);

        guess(&mut game, "crane");
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.message(), Some(&Message::Won));
    }

    #[test]
    fn seventh_submit_is_noop() {
        let mut game = game("crane");
        for word in ["slate", "pools", "robot", "audio", "speed", "lolly"] {
            guess(&mut game, word);
        }

        assert!(!game.append_letter('c'));
        assert!(!game.delete_letter());
        assert_eq!(game.submit_guess(), SubmitOutcome::Ignored);
        assert_eq!(game.history().len(), NUM_GUESSES);
        assert_eq!(game.in_progress(), "");
    }

    #[test]
    fn no_mutation_after_win() {
        let mut game = game("crane");
        guess(&mut game, "crane");
        let keyboard = game.keyboard().clone();

        assert!(!game.append_letter('s'));
        assert_eq!(guess(&mut game, "slate"), SubmitOutcome::Ignored);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.keyboard(), &keyboard);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn invalid_word_does_not_consume_guess() {
        let mut game = Game::with_secret(Word::new("crane").unwrap(), Only(&["slate"]));

        assert_eq!(
            guess(&mut game, "xqzvk"),
            SubmitOutcome::NotAWord("XQZVK".to_string())
        );
        assert!(game.history().is_empty());
        assert_eq!(game.in_progress(), "XQZVK");
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.keyboard(), &KeyboardHints::new());
        assert_eq!(
            game.message().map(ToString::to_string).as_deref(),
            Some("XQZVK is not a word!")
        );
    }

    #[test]
    fn secret_outside_dictionary_is_refused() {
        let result = Game::try_with_secret(Word::new("crane").unwrap(), Only(&["slate"]));
        assert_eq!(
            result.err(),
            Some(GameError::SecretNotInDictionary("CRANE".to_string()))
        );

        let words = WordList::embedded();
        let result = Game::try_with_secret(Word::new("zzzzz").unwrap(), &words);
        assert!(matches!(result, Err(GameError::SecretNotInDictionary(s)) if s == "ZZZZZ"));
    }

    #[test]
    fn secret_inside_dictionary_can_be_won() {
        let mut game =
            Game::try_with_secret(Word::new("crane").unwrap(), Only(&["crane", "slate"])).unwrap();
        assert!(matches!(guess(&mut game, "crane"), SubmitOutcome::Accepted(f) if f.is_perfect()));
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn new_refuses_source_words_the_dictionary_rejects() {
        let source = WordList::new(words_from_slice(&["robot"]), &[]);
        let mut rng = StdRng::seed_from_u64(0);

        let result = Game::new(&source, Only(&["slate"]), &mut rng);
        assert!(matches!(result, Err(GameError::SecretNotInDictionary(_))));
    }

    #[test]
    fn advisory_clears_on_next_edit() {
        let mut game = Game::with_secret(Word::new("crane").unwrap(), Only(&["slate"]));
        guess(&mut game, "xqzvk");
        assert!(game.message().is_some());

        game.delete_letter();
        assert_eq!(game.message(), None);
        assert_eq!(game.in_progress(), "XQZV");
    }

    #[test]
    fn dictionary_sees_lowercase() {
        let mut game = Game::with_secret(Word::new("crane").unwrap(), Only(&["slate"]));
        assert!(matches!(guess(&mut game, "SLATE"), SubmitOutcome::Accepted(_)));
    }

    #[test]
    fn keyboard_tracks_best_verdicts() {
        let mut game = game("crane");
        guess(&mut game, "acorn");
        assert_eq!(game.keyboard().hint('C'), Some(Present));
        assert_eq!(game.keyboard().hint('O'), Some(Absent));

        guess(&mut game, "crane");
        assert_eq!(game.keyboard().hint('C'), Some(Correct));
        assert_eq!(game.keyboard().hint('O'), Some(Absent));
        assert_eq!(game.keyboard().hint('Z'), None);
    }

    #[test]
    fn board_layout() {
        let mut game = game("crane");
        guess(&mut game, "slate");
        type_word(&mut game, "cr");

        let board = game.board();
        assert!(matches!(board[0], BoardRow::Scored(r) if r.word.text() == "SLATE"));
        assert_eq!(board[1], BoardRow::Typing("CR"));
        assert!(board[2..].iter().all(|row| *row == BoardRow::Empty));
    }

    #[test]
    fn board_has_no_typing_row_after_game_over() {
        let mut game = game("crane");
        guess(&mut game, "crane");

        let board = game.board();
        assert!(matches!(board[0], BoardRow::Scored(_)));
        assert!(board[1..].iter().all(|row| *row == BoardRow::Empty));
    }

    #[test]
    fn new_draws_secret_from_source() {
        let source = WordList::new(words_from_slice(&["robot"]), &[]);
        let mut rng = StdRng::seed_from_u64(0);

        let game = Game::new(&source, &source, &mut rng).unwrap();
        assert_eq!(game.secret().text(), "ROBOT");
    }

    #[test]
    fn new_fails_without_words() {
        let source = WordList::default();
        let mut rng = StdRng::seed_from_u64(0);

        let result = Game::new(&source, AcceptAll, &mut rng);
        assert!(matches!(result, Err(GameError::NoWordsOfLength(NUM_LETTERS))));
    }
}

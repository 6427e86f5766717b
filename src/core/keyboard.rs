//! Aggregated per-letter hints for the on-screen keyboard

use super::{Feedback, LetterVerdict, Word};

/// QWERTY rows as drawn by the front ends
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best verdict seen so far for each letter A-Z
///
/// `None` means the letter has not appeared in any finalized guess. Hints
/// only ever move up the order unseen < Absent < Present < Correct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints([Option<LetterVerdict>; 26]);

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finalized guess into the hints
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &verdict) in guess.chars().iter().zip(feedback.verdicts()) {
            if let Some(slot) = Self::slot(letter).map(|i| &mut self.0[i]) {
                *slot = (*slot).max(Some(verdict));
            }
        }
    }

    /// Best known verdict for a letter (either case)
    #[must_use]
    pub fn hint(&self, letter: char) -> Option<LetterVerdict> {
        u8::try_from(letter)
            .ok()
            .and_then(|b| Self::slot(b.to_ascii_uppercase()))
            .and_then(|i| self.0[i])
    }

    /// Letters with a hint, in alphabetical order
    pub fn seen(&self) -> impl Iterator<Item = (char, LetterVerdict)> + '_ {
        (b'A'..=b'Z')
            .zip(self.0.iter())
            .filter_map(|(letter, hint)| hint.map(|v| (char::from(letter), v)))
    }

    fn slot(letter: u8) -> Option<usize> {
        letter
            .is_ascii_uppercase()
            .then(|| usize::from(letter - b'A'))
    }
}

//! Guess evaluation
//!
//! Computes the per-letter verdicts for a finalized guess against the secret
//! word, following Wordle's duplicate-letter rules.

use super::{LetterVerdict, NUM_LETTERS, Word};
use std::ops::Index;

/// Verdicts for every position of one finalized guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterVerdict; NUM_LETTERS]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterVerdict::Correct; NUM_LETTERS]);

    /// Create feedback from explicit verdicts
    #[inline]
    #[must_use]
    pub const fn new(verdicts: [LetterVerdict; NUM_LETTERS]) -> Self {
        Self(verdicts)
    }

    /// Evaluate `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and remove them from the
    ///    pool of secret letters
    /// 2. Second pass: left to right, mark Present while the pool still
    ///    holds the letter, Absent otherwise
    ///
    /// A letter therefore never earns more Correct + Present verdicts than
    /// it has occurrences in the secret.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterVerdict::*, Word};
    ///
    /// let guess = Word::new("pools").unwrap();
    /// let secret = Word::new("robot").unwrap();
    ///
    /// assert_eq!(
    ///     Feedback::evaluate(&guess, &secret).verdicts(),
    ///     &[Absent, Correct, Present, Absent, Absent]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterVerdict::Absent; NUM_LETTERS];
        let mut secret_available = secret.char_counts();

        // First pass: greens
        for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == s {
                result[i] = LetterVerdict::Correct;
                if let Some(count) = secret_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: yellows from whatever the greens left over
        for (i, &letter) in guess.chars().iter().enumerate() {
            if result[i] == LetterVerdict::Correct {
                continue;
            }
            if let Some(count) = secret_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterVerdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Verdicts in guess order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[LetterVerdict; NUM_LETTERS] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterVerdict::Correct)
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterVerdict::Present)
    }

    fn count(&self, verdict: LetterVerdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert feedback to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("slate").unwrap();
    /// assert_eq!(Feedback::evaluate(&guess, &secret).to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.to_emoji()).collect()
    }
}

impl Index<usize> for Feedback {
    type Output = LetterVerdict;

    fn index(&self, position: usize) -> &Self::Output {
        &self.0[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterVerdict::{Absent, Correct, Present};

    fn eval(guess: &str, secret: &str) -> Feedback {
        Feedback::evaluate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn feedback_perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count_correct(), 5);
        assert_eq!(Feedback::PERFECT.count_present(), 0);
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = eval("abcde", "fghij");

        assert_eq!(feedback.verdicts(), &[Absent; 5]);
        assert_eq!(feedback.count_correct(), 0);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn feedback_self_is_perfect() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            assert!(eval(word, word).is_perfect(), "{word} vs itself");
        }
    }

    #[test]
    fn feedback_slate_against_crane() {
        // A and E share positions with CRANE
        let feedback = eval("slate", "crane");
        assert_eq!(
            feedback.verdicts(),
            &[Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn feedback_green_consumes_pool_before_yellow() {
        // ROBOT has two O's; the exact match at index 1 uses one,
        // leaving one for the O at index 2
        let feedback = eval("pools", "robot");
        assert_eq!(
            feedback.verdicts(),
            &[Absent, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn feedback_yellows_consumed_left_to_right() {
        // ALLOY: exact L at 2 and Y at 4 leave one L for the guess,
        // which goes to the leftmost unmatched L
        let feedback = eval("lolly", "alloy");
        assert_eq!(
            feedback.verdicts(),
            &[Present, Present, Correct, Absent, Correct]
        );
    }

    #[test]
    fn feedback_duplicates_without_greens() {
        let feedback = eval("erase", "speed");
        assert_eq!(
            feedback.verdicts(),
            &[Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn feedback_single_secret_letter_guessed_twice() {
        // Only one E in CRANE: the later exact match wins, the earlier E is gray
        let feedback = eval("eerie", "crane");
        assert_eq!(feedback[0], Absent);
        assert_eq!(feedback[1], Absent);
        assert_eq!(feedback[4], Correct);
    }

    #[test]
    fn feedback_never_overcounts_letters() {
        let words = [
            "crane", "robot", "pools", "speed", "erase", "alloy", "lolly", "geese", "eerie",
            "mamma", "array", "llama",
        ];

        for secret in words {
            let secret_word = Word::new(secret).unwrap();
            for guess in words {
                let guess_word = Word::new(guess).unwrap();
                let feedback = Feedback::evaluate(&guess_word, &secret_word);

                for letter in guess_word.chars() {
                    let credited = guess_word
                        .chars()
                        .iter()
                        .zip(feedback.verdicts())
                        .filter(|&(l, v)| l == letter && *v != Absent)
                        .count();
                    let available = secret_word.chars().iter().filter(|&l| l == letter).count();
                    assert!(
                        credited <= available,
                        "{guess} vs {secret}: letter {} credited {credited} > {available}",
                        *letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn feedback_emoji() {
        assert_eq!(eval("pools", "robot").to_emoji(), "⬜🟩🟨⬜⬜");
        assert_eq!(Feedback::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩");
    }
}

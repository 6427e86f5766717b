//! Per-letter feedback classification

use std::fmt;

/// Feedback for a single letter of a finalized guess
///
/// Variants are ordered by how much they reveal, so `max` picks the best
/// known verdict: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterVerdict {
    /// Letter does not occur in the secret (gray)
    Absent,
    /// Letter occurs in the secret at another position (yellow)
    Present,
    /// Letter is in the correct position (green)
    Correct,
}

impl LetterVerdict {
    /// Emoji square for share-style output
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

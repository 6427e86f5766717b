//! Verdict colors shared by the TUI and the line-mode output

use crate::core::LetterVerdict;

/// 24-bit color as `(red, green, blue)`
pub type Rgb = (u8, u8, u8);

/// Colors for tiles, keys and alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub correct: Rgb,
    pub present: Rgb,
    pub absent: Rgb,
    /// Tile that has not been scored yet
    pub empty: Rgb,
    /// Key whose letter has not been guessed
    pub key: Rgb,
    pub border: Rgb,
    pub text: Rgb,
    pub alert: Rgb,
    pub win: Rgb,
    pub loss: Rgb,
}

impl Palette {
    /// Classic green/yellow/gray
    pub const STANDARD: Self = Self {
        correct: (0x61, 0x8C, 0x55),
        present: (0xB1, 0xA0, 0x4C),
        absent: (0x3A, 0x3A, 0x3C),
        empty: (0x12, 0x12, 0x13),
        key: (0x81, 0x83, 0x84),
        border: (0x3A, 0x3A, 0x3C),
        text: (0xFF, 0xFF, 0xFF),
        alert: (0xB0, 0x50, 0x50),
        win: (0x61, 0x8C, 0x55),
        loss: (0xB0, 0x50, 0x50),
    };

    /// Orange/blue, distinguishable with red-green color blindness
    pub const COLORBLIND: Self = Self {
        correct: (0xE3, 0x7E, 0x43),
        present: (0x94, 0xC1, 0xF6),
        win: (0x94, 0xC1, 0xF6),
        ..Self::STANDARD
    };

    #[must_use]
    pub const fn new(colorblind: bool) -> Self {
        if colorblind {
            Self::COLORBLIND
        } else {
            Self::STANDARD
        }
    }

    /// Tile background for a scored letter
    #[must_use]
    pub const fn verdict(&self, verdict: LetterVerdict) -> Rgb {
        match verdict {
            LetterVerdict::Correct => self.correct,
            LetterVerdict::Present => self.present,
            LetterVerdict::Absent => self.absent,
        }
    }

    /// Key background on the on-screen keyboard
    #[must_use]
    pub const fn hint(&self, hint: Option<LetterVerdict>) -> Rgb {
        match hint {
            Some(verdict) => self.verdict(verdict),
            None => self.key,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::STANDARD
    }
}

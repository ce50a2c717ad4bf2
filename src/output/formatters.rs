//! Formatting utilities for terminal output

use crate::core::{GuessBuffer, LetterScore, WordScore};
use colored::{ColoredString, Colorize};

/// Tile colours for each score
///
/// The high-contrast variant swaps yellow/green for blue/red.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Palette {
    #[default]
    Standard,
    HighContrast,
}

impl Palette {
    #[must_use]
    pub const fn new(high_contrast: bool) -> Self {
        if high_contrast {
            Self::HighContrast
        } else {
            Self::Standard
        }
    }

    /// RGB background for a tile with this score
    #[must_use]
    pub const fn rgb(self, score: LetterScore) -> (u8, u8, u8) {
        match (self, score) {
            (_, LetterScore::NotEvaluated) => (0, 0, 0),
            (_, LetterScore::NotInWord) => (58, 58, 60),
            (Self::Standard, LetterScore::WrongPosition) => (181, 159, 59),
            (Self::Standard, LetterScore::Correct) => (83, 141, 78),
            (Self::HighContrast, LetterScore::WrongPosition) => (133, 192, 249),
            (Self::HighContrast, LetterScore::Correct) => (245, 121, 58),
        }
    }

    /// A letter drawn as a coloured tile
    #[must_use]
    pub fn tile(self, letter: char, score: LetterScore) -> ColoredString {
        let (r, g, b) = self.rgb(score);
        format!(" {letter} ").bold().white().on_truecolor(r, g, b)
    }
}

/// A scored word as a row of coloured tiles
#[must_use]
pub fn word_row(word: &str, score: &WordScore, palette: Palette) -> String {
    word.chars()
        .zip(score.iter())
        .map(|(letter, &s)| palette.tile(letter, s).to_string())
        .collect()
}

/// The current guess buffer, blanks shown as underscores
#[must_use]
pub fn buffer_row(buffer: &GuessBuffer) -> String {
    buffer
        .slots()
        .map(|slot| format!(" {} ", slot.unwrap_or('_')))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

//! The editable current-guess buffer
//!
//! Front-ends write letters into fixed slots; a blank slot holds [`BLANK`].

use super::WORD_LENGTH;
use std::fmt;

/// Placeholder for an empty slot
pub const BLANK: char = ' ';

/// Fixed-width buffer of letters being composed into the next guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessBuffer([char; WORD_LENGTH]);

impl Default for GuessBuffer {
    fn default() -> Self {
        Self([BLANK; WORD_LENGTH])
    }
}

impl GuessBuffer {
    /// An all-blank buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill from a word
    ///
    /// Letters are uppercased. Extra characters are dropped and missing ones
    /// stay blank.
    ///
    /// # Examples
    /// ```
    /// use wrdle::core::GuessBuffer;
    ///
    /// assert_eq!(GuessBuffer::from_word("adieu").as_string(), "ADIEU");
    /// assert_eq!(GuessBuffer::from_word("ad").as_string(), "AD   ");
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut buffer = Self::new();
        for (slot, letter) in buffer.0.iter_mut().zip(word.chars()) {
            *slot = letter.to_ascii_uppercase();
        }
        buffer
    }

    /// Letter in a slot, or `None` for blank or out-of-range slots
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<char> {
        self.0.get(slot).copied().filter(|&c| c != BLANK)
    }

    /// Write a letter into a slot; ignored if the slot is out of range
    pub fn set(&mut self, slot: usize, letter: char) {
        if let Some(cell) = self.0.get_mut(slot) {
            *cell = letter.to_ascii_uppercase();
        }
    }

    /// Blank a slot
    pub fn clear_slot(&mut self, slot: usize) {
        self.set(slot, BLANK);
    }

    /// Blank every slot
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Type a letter into the first blank slot
    ///
    /// Returns `false` if the buffer is already full.
    pub fn push(&mut self, letter: char) -> bool {
        match self.0.iter().position(|&c| c == BLANK) {
            Some(slot) => {
                self.set(slot, letter);
                true
            }
            None => false,
        }
    }

    /// Blank the last filled slot and return its letter
    pub fn pop(&mut self) -> Option<char> {
        let slot = self.0.iter().rposition(|&c| c != BLANK)?;
        let letter = self.0[slot];
        self.0[slot] = BLANK;
        Some(letter)
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&c| c == BLANK)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.0.contains(&BLANK)
    }

    /// The buffer as a string, blanks included
    #[must_use]
    pub fn as_string(&self) -> String {
        self.0.iter().collect()
    }

    /// Slots in order, `None` for blanks
    pub fn slots(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.0.iter().map(|&c| (c != BLANK).then_some(c))
    }
}

impl fmt::Display for GuessBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_blank() {
        let buffer = GuessBuffer::new();
        assert!(buffer.is_blank());
        assert!(!buffer.is_full());
        assert_eq!(buffer.as_string(), "     ");
        assert_eq!(buffer.get(0), None);
    }

    #[test]
    fn push_fills_first_blank() {
        let mut buffer = GuessBuffer::new();
        buffer.set(1, 'r');
        assert!(buffer.push('c'));
        assert!(buffer.push('a'));
        assert_eq!(buffer.as_string(), "CRA  ");
    }

    #[test]
    fn push_rejects_when_full() {
        let mut buffer = GuessBuffer::from_word("CRANE");
        assert!(buffer.is_full());
        assert!(!buffer.push('X'));
        assert_eq!(buffer.as_string(), "CRANE");
    }

    #[test]
    fn pop_clears_last_filled_slot() {
        let mut buffer = GuessBuffer::from_word("CR");
        buffer.set(3, 'N');
        assert_eq!(buffer.pop(), Some('N'));
        assert_eq!(buffer.pop(), Some('R'));
        assert_eq!(buffer.pop(), Some('C'));
        assert_eq!(buffer.pop(), None);
    }

    #[test]
    fn set_out_of_range_is_ignored() {
        let mut buffer = GuessBuffer::new();
        buffer.set(WORD_LENGTH, 'Z');
        assert!(buffer.is_blank());
    }

    #[test]
    fn from_word_truncates_long_input() {
        let buffer = GuessBuffer::from_word("crane!");
        assert_eq!(buffer.as_string(), "CRANE");
    }

    #[test]
    fn clear_slot_and_slots() {
        let mut buffer = GuessBuffer::from_word("CRANE");
        buffer.clear_slot(2);
        let slots: Vec<_> = buffer.slots().collect();
        assert_eq!(
            slots,
            vec![Some('C'), Some('R'), None, Some('N'), Some('E')]
        );
        buffer.clear();
        assert!(buffer.is_blank());
    }
}

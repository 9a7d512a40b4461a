//! Target word representation
//!
//! A Word stores a case-folded target along with letter position indices for feedback calculation.

use rustc_hash::FxHashMap;
use std::fmt;

/// A target word with letter position tracking
///
/// Stores the word one folded character per position and keeps a map of letter
/// positions for duplicate handling. Any length above zero is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<char>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one character"),
        }
    }
}

impl std::error::Error for WordError {}

/// Fold a single character to lower case without changing the position count
///
/// `char::to_lowercase` can expand to several characters (e.g. 'İ'); only the
/// first is kept so guess and target stay aligned position by position.
#[inline]
#[must_use]
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Fold every character of `text` with [`fold_char`]
#[must_use]
pub fn fold(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and every character is folded to
    /// lower case. Non-letter characters are kept as-is.
    ///
    /// # Errors
    /// Returns `WordError::Empty` if nothing remains after trimming.
    ///
    /// # Examples
    /// ```
    /// use letter_feedback::core::Word;
    ///
    /// let word = Word::new("Apple").unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let chars = fold(text.as_ref().trim());

        if chars.is_empty() {
            return Err(WordError::Empty);
        }

        // Build position map for fast lookup
        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text: chars.iter().collect(),
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the folded characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of character positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; a `Word` cannot be empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// Returns `None` past the end of the word.
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied()
    }

    /// Check if the word contains a specific letter (case-insensitive)
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&fold_char(letter))
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&fold_char(letter))
            .map_or(&[], Vec::as_slice)
    }

    /// Get the count of each letter in the word
    ///
    /// Used as the available-letter budget when calculating feedback.
    #[inline]
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<char, u32> {
        self.char_positions
            .iter()
            .map(|(&ch, positions)| (ch, positions.len() as u32))
            .collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("apple").unwrap();
        assert_eq!(word.text(), "apple");
        assert_eq!(word.chars(), &['a', 'p', 'p', 'l', 'e']);
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("APPLE").unwrap();
        assert_eq!(word.text(), "apple");

        let word2 = Word::new("ApPlE").unwrap();
        assert_eq!(word2.text(), "apple");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = Word::new("  cat\n").unwrap();
        assert_eq!(word.text(), "cat");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new(" \t "), Err(WordError::Empty));
    }

    #[test]
    fn word_accepts_any_length_and_symbols() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("encyclopedia").unwrap().len(), 12);
        assert_eq!(Word::new("don't").unwrap().text(), "don't");
    }

    #[test]
    fn word_folding_keeps_positions() {
        // 'İ' lowercases to two chars; only one position may be used
        let word = Word::new("İS").unwrap();
        assert_eq!(word.len(), 2);
        assert_eq!(word.char_at(1), Some('s'));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("cat").unwrap();
        assert_eq!(word.char_at(0), Some('c'));
        assert_eq!(word.char_at(2), Some('t'));
        assert_eq!(word.char_at(3), None);
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter('c'));
        assert!(word.has_letter('R'));
        assert!(!word.has_letter('z'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("error").unwrap();
        assert_eq!(word.positions_of('r'), &[1, 2, 4]);
        assert_eq!(word.positions_of('e'), &[0]);
        assert_eq!(word.positions_of('o'), &[3]);
        assert_eq!(word.positions_of('z'), &[] as &[usize]);
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("error").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.get(&'r'), Some(&3));
        assert_eq!(counts.get(&'e'), Some(&1));
        assert_eq!(counts.get(&'o'), Some(&1));
    }

    #[test]
    fn word_display() {
        let word = Word::new("Plant").unwrap();
        assert_eq!(format!("{word}"), "plant");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("cat").unwrap();
        let word2 = Word::new("CAT").unwrap();
        let word3 = Word::new("cut").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}

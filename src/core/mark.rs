//! Per-position feedback marks
//!
//! - Correct = letter in the right position (green)
//! - Present = letter in the word, wrong position (yellow)
//! - Absent  = letter not among the remaining letters of the word (gray)
//! - Missing = the guess ran out before this position (gray, dark tile)

use std::fmt;

/// Feedback for a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    Present,
    Absent,
    Missing,
}

impl Mark {
    /// All marks in display order
    pub const ALL: [Self; 4] = [Self::Correct, Self::Present, Self::Absent, Self::Missing];

    /// Correct or present
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }

    /// Absent or missing; both read as "not in the word" to a player
    #[inline]
    #[must_use]
    pub const fn is_absent(self) -> bool {
        matches!(self, Self::Absent | Self::Missing)
    }

    /// ASCII glyph used in plain-text feedback strings
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
            Self::Missing => '.',
        }
    }

    /// Emoji tile
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Missing => '⬛',
        }
    }

    /// Parse a glyph or emoji
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    /// - '.'/⬛ for missing
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            '.' | '⬛' => Some(Self::Missing),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Missing => "missing",
        };
        f.write_str(name)
    }
}

//! Wordle feedback calculation and representation
//!
//! Feedback holds one [`Mark`] per output position. The output is as long as
//! the longer of target and guess, so length mismatches are visible to the
//! caller instead of being rejected.

use super::mark::Mark;
use super::word::{Word, fold};
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for one guess against one target
///
/// Derived and immutable; recompute it for every guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    marks: Vec<Mark>,
    target_len: usize,
    guess_len: usize,
}

/// How a guess's length differs from the target's
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthMismatch {
    /// Guess ended before the target did
    TooShort { missing: usize },
    /// Guess carried letters past the end of the target
    TooLong { extra: usize },
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (count, what) = match *self {
            Self::TooShort { missing } => (missing, "short"),
            Self::TooLong { extra } => (extra, "too long"),
        };
        let noun = if count == 1 { "letter" } else { "letters" };
        write!(f, "guess is {count} {noun} {what}")
    }
}

/// Classify `guess` against `target`, case-insensitively
///
/// Total over all inputs: empty strings, mismatched lengths and non-letter
/// characters all produce feedback. Neither input is trimmed.
///
/// # Examples
/// ```
/// use letter_feedback::core::{Mark, classify};
///
/// let feedback = classify("ERROR", "roar");
/// assert_eq!(
///     feedback.marks(),
///     &[Mark::Present, Mark::Present, Mark::Absent, Mark::Present, Mark::Missing]
/// );
/// assert_eq!(feedback.to_string(), "YY-Y.");
/// ```
#[must_use]
pub fn classify(target: &str, guess: &str) -> Feedback {
    let target = fold(target);
    let mut available: FxHashMap<char, u32> = FxHashMap::default();
    for &ch in &target {
        *available.entry(ch).or_insert(0) += 1;
    }
    Feedback::score(&target, &fold(guess), available)
}

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// This implements Wordle's duplicate-letter rules.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches (correct) and remove them from the available pool
    /// 2. Second pass: left to right, mark present letters from what remains of the pool
    /// 3. Positions with no guess letter are missing; guess letters past the target are absent
    ///
    /// # Examples
    /// ```
    /// use letter_feedback::core::{Feedback, Word};
    ///
    /// let target = Word::new("apple").unwrap();
    /// let feedback = Feedback::calculate(&target, "PPLEA");
    ///
    /// // P(present) P(correct) L(present) E(present) A(present)
    /// assert_eq!(feedback.to_string(), "YGYYY");
    /// ```
    #[must_use]
    pub fn calculate(target: &Word, guess: &str) -> Self {
        Self::score(target.chars(), &fold(guess), target.char_counts())
    }

    fn score(target: &[char], guess: &[char], mut available: FxHashMap<char, u32>) -> Self {
        let len = target.len().max(guess.len());
        let mut marks = vec![Mark::Absent; len];

        // First pass: exact position matches
        for (i, (t, g)) in target.iter().zip(guess).enumerate() {
            if t == g {
                marks[i] = Mark::Correct;
                if let Some(count) = available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: remaining target positions, left to right
        for (i, mark) in marks.iter_mut().enumerate().take(target.len()) {
            if *mark == Mark::Correct {
                continue;
            }
            let Some(letter) = guess.get(i) else {
                *mark = Mark::Missing;
                continue;
            };
            if let Some(count) = available.get_mut(letter)
                && *count > 0
            {
                *mark = Mark::Present;
                *count -= 1;
            }
        }

        // Anything past the target's end was initialised as absent

        Self {
            marks,
            target_len: target.len(),
            guess_len: guess.len(),
        }
    }

    /// Marks in position order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Number of positions (`max(target_len, guess_len)`)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// True only when both target and guess were empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn target_len(&self) -> usize {
        self.target_len
    }

    #[inline]
    #[must_use]
    pub const fn guess_len(&self) -> usize {
        self.guess_len
    }

    /// Guess matched the target exactly
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.target_len > 0
            && self.target_len == self.guess_len
            && self.marks.iter().all(|&m| m == Mark::Correct)
    }

    /// Count the correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(|m| m == Mark::Correct)
    }

    /// Count the present-elsewhere positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(|m| m == Mark::Present)
    }

    /// Count absent positions, missing ones included
    #[must_use]
    pub fn count_absent(&self) -> usize {
        self.count(Mark::is_absent)
    }

    fn count(&self, pred: impl Fn(Mark) -> bool) -> usize {
        self.marks.iter().filter(|&&m| pred(m)).count()
    }

    /// Length note for the presentation layer, `None` when lengths agree
    #[must_use]
    pub const fn length_mismatch(&self) -> Option<LengthMismatch> {
        if self.guess_len < self.target_len {
            Some(LengthMismatch::TooShort {
                missing: self.target_len - self.guess_len,
            })
        } else if self.guess_len > self.target_len {
            Some(LengthMismatch::TooLong {
                extra: self.guess_len - self.target_len,
            })
        } else {
            None
        }
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜⬛"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.emoji()).collect()
    }

    /// Parse feedback from glyphs like "GY-." or emojis like "🟩🟨⬜⬛"
    ///
    /// A parsed string cannot tell extra guess letters from ordinary absent
    /// ones, so the guess is assumed not to overrun the target: trailing
    /// missing marks shorten the guess, everything else belongs to both.
    ///
    /// # Examples
    /// ```
    /// use letter_feedback::core::{Feedback, classify};
    ///
    /// let expected = Feedback::parse("YY-Y.").unwrap();
    /// assert_eq!(classify("error", "roar"), expected);
    /// assert!(Feedback::parse("GQ").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let marks = s
            .trim()
            .chars()
            .map(Mark::from_char)
            .collect::<Option<Vec<_>>>()?;

        let trailing_missing = marks.iter().rev().take_while(|&&m| m == Mark::Missing).count();

        Some(Self {
            target_len: marks.len(),
            guess_len: marks.len() - trailing_missing,
            marks,
        })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.marks
            .iter()
            .try_for_each(|m| write!(f, "{}", m.glyph()))
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use colored::{ColoredString, Colorize};

/// Format feedback as emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.to_emoji()
}

/// Render each guess letter on a coloured tile, e.g. ` C  A  T `
///
/// Missing positions are drawn as `_`.
#[must_use]
pub fn colored_tiles(guess: &str, feedback: &Feedback) -> String {
    let mut letters = guess.chars();
    feedback
        .marks()
        .iter()
        .map(|&mark| {
            let letter = if mark == Mark::Missing {
                '_'
            } else {
                letters.next().map_or('_', |c| c.to_uppercase().next().unwrap_or(c))
            };
            tile(mark, &format!(" {letter} ")).to_string()
        })
        .collect()
}

fn tile(mark: Mark, text: &str) -> ColoredString {
    match mark {
        Mark::Correct => text.black().on_green(),
        Mark::Present => text.black().on_yellow(),
        Mark::Absent => text.white().on_bright_black(),
        Mark::Missing => text.bright_black(),
    }
}

/// Placeholder for a hidden word of `len` letters
#[must_use]
pub fn mask_word(len: usize) -> String {
    "_".repeat(len)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

//! One-shot scoring command
//!
//! Scores a single guess against a target word.

use crate::core::{Feedback, Word};

/// Result of scoring one guess
pub struct ScoreResult {
    pub target: String,
    pub guess: String,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if the target word is empty.
pub fn score_guess(target: &str, guess: &str) -> Result<ScoreResult, String> {
    let target_word = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess = guess.trim();
    let feedback = Feedback::calculate(&target_word, guess);

    log::debug!("scored {guess:?} against {target_word}: {feedback}");

    Ok(ScoreResult {
        target: target_word.text().to_string(),
        guess: guess.to_string(),
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LengthMismatch;

    #[test]
    fn score_valid_pair() {
        let result = score_guess("APPLE", "pplea").unwrap();
        assert_eq!(result.target, "apple");
        assert_eq!(result.guess, "pplea");
        assert_eq!(result.feedback.to_string(), "YGYYY");
    }

    #[test]
    fn score_trims_guess() {
        let result = score_guess("error", "  roar \n").unwrap();
        assert_eq!(result.guess, "roar");
        assert_eq!(
            result.feedback.length_mismatch(),
            Some(LengthMismatch::TooShort { missing: 1 })
        );
    }

    #[test]
    fn score_empty_target() {
        assert!(score_guess("  ", "cat").is_err());
    }

    #[test]
    fn score_empty_guess() {
        let result = score_guess("cat", "").unwrap();
        assert_eq!(result.feedback.to_string(), "...");
    }
}

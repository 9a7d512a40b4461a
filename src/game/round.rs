//! Spelling round state machine
//!
//! A round walks `Idle → Showing → Guessing → Resolved → NextRound`. The word
//! is shown for a fixed time, hidden while the player spells it, and revealed
//! again once the round resolves. Time only advances through [`Round::tick`],
//! so the caller owns the clock.

use crate::core::{Feedback, Word};
use std::fmt;
use std::time::Duration;

/// Round settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    /// How long the word stays visible before guessing starts
    pub show_for: Duration,
    /// Attempts before the round is lost; 0 means unlimited
    pub max_attempts: usize,
}

impl RoundConfig {
    #[must_use]
    pub const fn new(show_for: Duration, max_attempts: usize) -> Self {
        Self {
            show_for,
            max_attempts,
        }
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(Duration::from_secs(3), 6)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Showing,
    Guessing,
    Resolved,
    NextRound,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Showing => "showing",
            Self::Guessing => "guessing",
            Self::Resolved => "resolved",
            Self::NextRound => "next-round",
        };
        f.write_str(name)
    }
}

/// How a resolved round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Solved,
    OutOfAttempts,
    GaveUp,
}

/// Inputs that drive a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    Start,
    SkipReveal,
    Submit,
    GiveUp,
    Advance,
}

impl fmt::Display for RoundEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::SkipReveal => "skip-reveal",
            Self::Submit => "submit",
            Self::GiveUp => "give-up",
            Self::Advance => "advance",
        };
        f.write_str(name)
    }
}

/// Error type for events the current phase does not accept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundError {
    InvalidTransition { phase: Phase, event: RoundEvent },
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTransition { phase, event } => {
                write!(f, "Cannot {event} while the round is {phase}")
            }
        }
    }
}

impl std::error::Error for RoundError {}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: String,
    pub feedback: Feedback,
}

/// A single spelling round
#[derive(Debug, Clone)]
pub struct Round {
    config: RoundConfig,
    phase: Phase,
    word: Option<Word>,
    shown_for: Duration,
    attempts: Vec<Attempt>,
    outcome: Option<Outcome>,
}

impl Round {
    #[must_use]
    pub const fn new(config: RoundConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            word: None,
            shown_for: Duration::ZERO,
            attempts: Vec::new(),
            outcome: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// The word, while the player is allowed to see it
    #[must_use]
    pub fn target(&self) -> Option<&Word> {
        match self.phase {
            Phase::Showing | Phase::Resolved => self.word.as_ref(),
            _ => None,
        }
    }

    /// Length of the hidden word, so a front-end can draw empty tiles
    #[must_use]
    pub fn target_len(&self) -> Option<usize> {
        self.word.as_ref().map(Word::len)
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Time left before the word is hidden, `None` outside `Showing`
    #[must_use]
    pub fn reveal_remaining(&self) -> Option<Duration> {
        (self.phase == Phase::Showing).then(|| self.config.show_for.saturating_sub(self.shown_for))
    }

    /// Attempts left, `None` when unlimited
    #[must_use]
    pub fn attempts_left(&self) -> Option<usize> {
        (self.config.max_attempts > 0)
            .then(|| self.config.max_attempts.saturating_sub(self.attempts.len()))
    }

    /// Show a new word
    ///
    /// # Errors
    /// Returns `RoundError::InvalidTransition` unless the round is idle or
    /// waiting for its next word.
    pub fn start(&mut self, word: Word) -> Result<(), RoundError> {
        self.expect(&[Phase::Idle, Phase::NextRound], RoundEvent::Start)?;

        self.word = Some(word);
        self.shown_for = Duration::ZERO;
        self.attempts.clear();
        self.outcome = None;
        self.transition(Phase::Showing);

        // A zero reveal time goes straight to guessing
        self.tick(Duration::ZERO);
        Ok(())
    }

    /// Advance the reveal timer
    ///
    /// Only meaningful while showing; ignored in every other phase.
    pub fn tick(&mut self, elapsed: Duration) -> Phase {
        if self.phase == Phase::Showing {
            self.shown_for = self.shown_for.saturating_add(elapsed);
            if self.shown_for >= self.config.show_for {
                self.transition(Phase::Guessing);
            }
        }
        self.phase
    }

    /// Hide the word now instead of waiting for the timer
    ///
    /// # Errors
    /// Returns `RoundError::InvalidTransition` outside `Showing`.
    pub fn skip_reveal(&mut self) -> Result<(), RoundError> {
        self.expect(&[Phase::Showing], RoundEvent::SkipReveal)?;
        self.transition(Phase::Guessing);
        Ok(())
    }

    /// Score a guess and record it
    ///
    /// Resolves the round when the guess is correct or the attempt limit is hit.
    ///
    /// # Errors
    /// Returns `RoundError::InvalidTransition` outside `Guessing`.
    pub fn submit(&mut self, guess: &str) -> Result<&Feedback, RoundError> {
        self.expect(&[Phase::Guessing], RoundEvent::Submit)?;
        let Some(word) = self.word.as_ref() else {
            return Err(self.invalid(RoundEvent::Submit));
        };

        let feedback = Feedback::calculate(word, guess);
        let solved = feedback.is_solved();
        log::debug!("guess {guess:?} scored {feedback}");

        self.attempts.push(Attempt {
            guess: guess.to_string(),
            feedback,
        });

        if solved {
            self.resolve(Outcome::Solved);
        } else if self.attempts_left() == Some(0) {
            self.resolve(Outcome::OutOfAttempts);
        }

        let last = self.attempts.len() - 1;
        Ok(&self.attempts[last].feedback)
    }

    /// Stop guessing and reveal the word
    ///
    /// # Errors
    /// Returns `RoundError::InvalidTransition` outside `Guessing`.
    pub fn give_up(&mut self) -> Result<(), RoundError> {
        self.expect(&[Phase::Guessing], RoundEvent::GiveUp)?;
        self.resolve(Outcome::GaveUp);
        Ok(())
    }

    /// Leave a resolved round
    ///
    /// # Errors
    /// Returns `RoundError::InvalidTransition` outside `Resolved`.
    pub fn advance(&mut self) -> Result<(), RoundError> {
        self.expect(&[Phase::Resolved], RoundEvent::Advance)?;
        self.transition(Phase::NextRound);
        Ok(())
    }

    fn resolve(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.transition(Phase::Resolved);
    }

    fn expect(&self, allowed: &[Phase], event: RoundEvent) -> Result<(), RoundError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(self.invalid(event))
        }
    }

    const fn invalid(&self, event: RoundEvent) -> RoundError {
        RoundError::InvalidTransition {
            phase: self.phase,
            event,
        }
    }

    fn transition(&mut self, to: Phase) {
        log::debug!("round {} -> {to}", self.phase);
        self.phase = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;

    fn config(secs: u64, attempts: usize) -> RoundConfig {
        RoundConfig::new(Duration::from_secs(secs), attempts)
    }

    fn started(word: &str, cfg: RoundConfig) -> Round {
        let mut round = Round::new(cfg);
        round.start(Word::new(word).unwrap()).unwrap();
        round
    }

    #[test]
    fn new_round_is_idle() {
        let round = Round::new(RoundConfig::default());
        assert_eq!(round.phase(), Phase::Idle);
        assert!(round.target().is_none());
        assert!(round.attempts().is_empty());
    }

    #[test]
    fn default_config() {
        let cfg = RoundConfig::default();
        assert_eq!(cfg.show_for, Duration::from_secs(3));
        assert_eq!(cfg.max_attempts, 6);
    }

    #[test]
    fn showing_reveals_word_until_timer_expires() {
        let mut round = started("apple", config(3, 6));
        assert_eq!(round.phase(), Phase::Showing);
        assert_eq!(round.target().map(Word::text), Some("apple"));

        assert_eq!(round.tick(Duration::from_secs(2)), Phase::Showing);
        assert_eq!(round.reveal_remaining(), Some(Duration::from_secs(1)));

        assert_eq!(round.tick(Duration::from_secs(1)), Phase::Guessing);
        assert!(round.target().is_none());
        assert_eq!(round.target_len(), Some(5));
        assert_eq!(round.reveal_remaining(), None);
    }

    #[test]
    fn zero_reveal_time_starts_guessing() {
        let round = started("apple", config(0, 6));
        assert_eq!(round.phase(), Phase::Guessing);
    }

    #[test]
    fn skip_reveal() {
        let mut round = started("apple", config(10, 6));
        round.skip_reveal().unwrap();
        assert_eq!(round.phase(), Phase::Guessing);
        assert!(round.skip_reveal().is_err());
    }

    #[test]
    fn ticks_outside_showing_are_ignored() {
        let mut round = Round::new(config(1, 6));
        assert_eq!(round.tick(Duration::from_secs(5)), Phase::Idle);

        round.start(Word::new("cat").unwrap()).unwrap();
        round.tick(Duration::from_secs(1));
        assert_eq!(round.tick(Duration::from_secs(5)), Phase::Guessing);
    }

    #[test]
    fn submit_before_guessing_is_rejected() {
        let mut round = started("apple", config(3, 6));
        let err = round.submit("apple").unwrap_err();
        assert_eq!(
            err,
            RoundError::InvalidTransition {
                phase: Phase::Showing,
                event: RoundEvent::Submit
            }
        );
        assert!(round.attempts().is_empty());
        assert_eq!(err.to_string(), "Cannot submit while the round is showing");
    }

    #[test]
    fn correct_guess_resolves_round() {
        let mut round = started("Apple", config(0, 6));

        let feedback = round.submit("appel").unwrap();
        assert_eq!(feedback.to_string(), "GGGYY");
        assert_eq!(round.phase(), Phase::Guessing);

        assert!(round.submit("APPLE").unwrap().is_solved());
        assert_eq!(round.phase(), Phase::Resolved);
        assert_eq!(round.outcome(), Some(Outcome::Solved));
        assert_eq!(round.attempts().len(), 2);
        assert_eq!(round.target().map(Word::text), Some("apple"));
    }

    #[test]
    fn attempts_run_out() {
        let mut round = started("cat", config(0, 2));
        round.submit("cot").unwrap();
        assert_eq!(round.attempts_left(), Some(1));

        let feedback = round.submit("ca").unwrap();
        assert_eq!(feedback.marks(), &[Mark::Correct, Mark::Correct, Mark::Missing]);
        assert_eq!(round.outcome(), Some(Outcome::OutOfAttempts));
        assert!(round.submit("cat").is_err());
    }

    #[test]
    fn unlimited_attempts() {
        let mut round = started("cat", config(0, 0));
        for _ in 0..20 {
            round.submit("dog").unwrap();
        }
        assert_eq!(round.phase(), Phase::Guessing);
        assert_eq!(round.attempts_left(), None);
    }

    #[test]
    fn give_up_reveals_word() {
        let mut round = started("cat", config(0, 6));
        round.give_up().unwrap();
        assert_eq!(round.outcome(), Some(Outcome::GaveUp));
        assert_eq!(round.target().map(Word::text), Some("cat"));
    }

    #[test]
    fn advance_then_start_next_word() {
        let mut round = started("cat", config(0, 6));
        assert!(round.advance().is_err());

        round.submit("cat").unwrap();
        round.advance().unwrap();
        assert_eq!(round.phase(), Phase::NextRound);
        assert!(round.target().is_none());

        round.start(Word::new("dog").unwrap()).unwrap();
        assert!(round.attempts().is_empty());
        assert_eq!(round.outcome(), None);
        assert_eq!(round.phase(), Phase::Guessing);
    }

    #[test]
    fn start_mid_round_is_rejected() {
        let mut round = started("cat", config(5, 6));
        let err = round.start(Word::new("dog").unwrap()).unwrap_err();
        assert_eq!(
            err,
            RoundError::InvalidTransition {
                phase: Phase::Showing,
                event: RoundEvent::Start
            }
        );
        round.skip_reveal().unwrap();
        assert_eq!(round.target_len(), Some(3));
    }
}

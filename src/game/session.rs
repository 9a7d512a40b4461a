//! A run of spelling rounds over a shuffled deck

use super::round::{Outcome, Phase, Round, RoundConfig, RoundError, RoundEvent};
use crate::core::{Feedback, Word};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;
use std::time::Duration;

/// Running totals for a session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_solved: usize,
    /// attempts needed → number of solved rounds
    pub attempt_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_solved as f64 / self.rounds_played as f64
        }
    }

    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        if self.rounds_solved == 0 {
            return None;
        }
        let total: usize = self
            .attempt_distribution
            .iter()
            .map(|(attempts, count)| attempts * count)
            .sum();
        Some(total as f64 / self.rounds_solved as f64)
    }

    fn record(&mut self, outcome: Outcome, attempts: usize) {
        self.rounds_played += 1;
        if outcome == Outcome::Solved {
            self.rounds_solved += 1;
            *self.attempt_distribution.entry(attempts).or_insert(0) += 1;
        }
    }
}

/// Deck of words played one round at a time
#[derive(Debug, Clone)]
pub struct Session {
    deck: Vec<Word>,
    round: Round,
    stats: Statistics,
}

impl Session {
    /// Create a session with the deck shuffled by the thread RNG
    #[must_use]
    pub fn new(words: Vec<Word>, config: RoundConfig) -> Self {
        Self::with_rng(words, config, &mut rand::rng())
    }

    /// Create a session shuffled with the given RNG
    #[must_use]
    pub fn with_rng<R: Rng + ?Sized>(mut words: Vec<Word>, config: RoundConfig, rng: &mut R) -> Self {
        // Rounds are drawn from the back
        words.shuffle(rng);
        log::debug!("session deck holds {} words", words.len());
        Self {
            deck: words,
            round: Round::new(config),
            stats: Statistics::default(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Words not yet played
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    /// Start the next word
    ///
    /// A resolved round is left first. Returns `Ok(false)` when the deck is
    /// exhausted.
    ///
    /// # Errors
    /// Returns `RoundError::InvalidTransition` while a round is still being shown or guessed.
    pub fn next_round(&mut self) -> Result<bool, RoundError> {
        match self.round.phase() {
            Phase::Resolved => self.round.advance()?,
            Phase::Idle | Phase::NextRound => {}
            phase @ (Phase::Showing | Phase::Guessing) => {
                return Err(RoundError::InvalidTransition {
                    phase,
                    event: RoundEvent::Start,
                });
            }
        }

        let Some(word) = self.deck.pop() else {
            log::debug!("session deck exhausted");
            return Ok(false);
        };
        self.round.start(word)?;
        Ok(true)
    }

    pub fn tick(&mut self, elapsed: Duration) -> Phase {
        self.round.tick(elapsed)
    }

    /// # Errors
    /// See [`Round::skip_reveal`].
    pub fn skip_reveal(&mut self) -> Result<(), RoundError> {
        self.round.skip_reveal()
    }

    /// Score a guess in the current round, recording the result if it resolves
    ///
    /// # Errors
    /// See [`Round::submit`].
    pub fn submit(&mut self, guess: &str) -> Result<Feedback, RoundError> {
        let feedback = self.round.submit(guess)?.clone();
        self.record_if_resolved();
        Ok(feedback)
    }

    /// # Errors
    /// See [`Round::give_up`].
    pub fn give_up(&mut self) -> Result<(), RoundError> {
        self.round.give_up()?;
        self.record_if_resolved();
        Ok(())
    }

    fn record_if_resolved(&mut self) {
        if let Some(outcome) = self.round.outcome() {
            self.stats.record(outcome, self.round.attempts().len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn session(list: &[&str]) -> Session {
        let cfg = RoundConfig::new(Duration::ZERO, 3);
        Session::with_rng(words(list), cfg, &mut StdRng::seed_from_u64(7))
    }

    fn current_word(s: &Session) -> String {
        // Give up on a throwaway copy to peek at the hidden word
        let mut round = s.round().clone();
        round.give_up().unwrap();
        round.target().unwrap().text().to_string()
    }

    #[test]
    fn plays_every_word_once() {
        let mut s = session(&["cat", "dog", "owl"]);
        let mut seen = Vec::new();

        while s.next_round().unwrap() {
            let word = current_word(&s);
            assert!(s.submit(&word).unwrap().is_solved());
            seen.push(word);
        }

        seen.sort();
        assert_eq!(seen, vec!["cat", "dog", "owl"]);
        assert_eq!(s.remaining(), 0);
        assert_eq!(s.stats().rounds_played, 3);
        assert_eq!(s.stats().rounds_solved, 3);
        assert_eq!(s.stats().attempt_distribution.get(&1), Some(&3));
        assert!((s.stats().solve_rate() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cannot_skip_an_unfinished_round() {
        let mut s = session(&["cat", "dog"]);
        assert!(s.next_round().unwrap());
        assert!(s.next_round().is_err());
        assert_eq!(s.remaining(), 1);
    }

    #[test]
    fn failed_and_abandoned_rounds_are_counted() {
        let mut s = session(&["cat", "dog"]);

        s.next_round().unwrap();
        for _ in 0..3 {
            s.submit("xyz").unwrap();
        }
        assert_eq!(s.round().outcome(), Some(Outcome::OutOfAttempts));

        s.next_round().unwrap();
        s.give_up().unwrap();

        assert_eq!(s.stats().rounds_played, 2);
        assert_eq!(s.stats().rounds_solved, 0);
        assert_eq!(s.stats().average_attempts(), None);
        assert!(!s.next_round().unwrap());
    }

    #[test]
    fn average_attempts() {
        let mut stats = Statistics::default();
        stats.record(Outcome::Solved, 1);
        stats.record(Outcome::Solved, 3);
        stats.record(Outcome::GaveUp, 4);

        assert!((stats.average_attempts().unwrap() - 2.0).abs() < 1e-9);
        assert!((stats.solve_rate() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_deck() {
        let mut s = session(&[]);
        assert!(!s.next_round().unwrap());
        assert_eq!(s.round().phase(), Phase::Idle);
    }
}

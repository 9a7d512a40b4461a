//! Audit the scorer over a word list
//!
//! Scores every ordered pair of words and checks the feedback invariants:
//! self-matches are solved, no letter is credited more often than the target
//! holds it, and the output shape follows the two lengths.

use crate::core::{Feedback, Mark, Word};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Which rule a pair broke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Word scored against itself was not solved
    NotSelfSolved,
    /// More correct + present marks for a letter than the target holds
    LetterBudget {
        letter: char,
        credited: u32,
        available: u32,
    },
    /// Output length is not the longer of the two lengths
    WrongLength { len: usize },
    /// A position past the target's end was not absent, or one past the guess's end was not missing
    WrongTail { position: usize, mark: Mark },
    /// Scoring the same pair twice gave different feedback
    NotRepeatable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub target: String,
    pub guess: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}: ", self.target, self.guess)?;
        match &self.kind {
            ViolationKind::NotSelfSolved => write!(f, "self-match not solved"),
            ViolationKind::LetterBudget {
                letter,
                credited,
                available,
            } => write!(
                f,
                "'{letter}' credited {credited} times, target has {available}"
            ),
            ViolationKind::WrongLength { len } => write!(f, "feedback has {len} positions"),
            ViolationKind::WrongTail { position, mark } => {
                write!(f, "position {position} marked {mark}")
            }
            ViolationKind::NotRepeatable => write!(f, "feedback changed between runs"),
        }
    }
}

/// Check one scored pair against the feedback invariants
#[must_use]
pub fn check_pair(target: &Word, guess: &str, feedback: &Feedback) -> Vec<ViolationKind> {
    let mut found = Vec::new();
    let guess_chars = crate::core::fold(guess);

    let expected_len = target.len().max(guess_chars.len());
    if feedback.len() != expected_len {
        found.push(ViolationKind::WrongLength {
            len: feedback.len(),
        });
    }

    let mut credited: FxHashMap<char, u32> = FxHashMap::default();
    for (position, &mark) in feedback.marks().iter().enumerate() {
        if mark.is_hit()
            && let Some(&letter) = guess_chars.get(position)
        {
            *credited.entry(letter).or_insert(0) += 1;
        }

        let tail_ok = if position >= target.len() {
            mark == Mark::Absent
        } else if position >= guess_chars.len() {
            mark == Mark::Missing
        } else {
            mark != Mark::Missing
        };
        if !tail_ok {
            found.push(ViolationKind::WrongTail { position, mark });
        }
    }

    let available = target.char_counts();
    let mut over_budget: Vec<ViolationKind> = credited
        .into_iter()
        .filter_map(|(letter, credited)| {
            let available = available.get(&letter).copied().unwrap_or(0);
            (credited > available).then_some(ViolationKind::LetterBudget {
                letter,
                credited,
                available,
            })
        })
        .collect();
    over_budget.sort_by_key(|kind| match kind {
        ViolationKind::LetterBudget { letter, .. } => *letter,
        _ => '\0',
    });
    found.extend(over_budget);

    if Feedback::calculate(target, guess) != *feedback {
        found.push(ViolationKind::NotRepeatable);
    }

    found
}

/// Mark totals across every scored pair
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MarkTotals {
    pub correct: usize,
    pub present: usize,
    pub absent: usize,
    pub missing: usize,
}

impl MarkTotals {
    fn add(&mut self, feedback: &Feedback) {
        for mark in feedback.marks() {
            match mark {
                Mark::Correct => self.correct += 1,
                Mark::Present => self.present += 1,
                Mark::Absent => self.absent += 1,
                Mark::Missing => self.missing += 1,
            }
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.correct + self.present + self.absent + self.missing
    }
}

/// Result of an audit run
#[derive(Debug)]
pub struct AuditResult {
    pub total_words: usize,
    pub targets: usize,
    pub pairs: usize,
    pub solved_pairs: usize,
    pub length_mismatches: usize,
    pub marks: MarkTotals,
    pub violations: Vec<Violation>,
    pub duration: Duration,
}

impl AuditResult {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Default)]
struct Tally {
    pairs: usize,
    solved_pairs: usize,
    length_mismatches: usize,
    marks: MarkTotals,
    violations: Vec<Violation>,
}

impl Tally {
    fn merge(mut self, other: Self) -> Self {
        self.pairs += other.pairs;
        self.solved_pairs += other.solved_pairs;
        self.length_mismatches += other.length_mismatches;
        self.marks.correct += other.marks.correct;
        self.marks.present += other.marks.present;
        self.marks.absent += other.marks.absent;
        self.marks.missing += other.marks.missing;
        self.violations.extend(other.violations);
        self
    }
}

/// Score every target in `words` (or the first `limit`) against every word
///
/// Targets are processed in parallel. A progress bar is drawn when `progress` is set.
#[must_use]
pub fn run_audit(words: &[Word], limit: Option<usize>, progress: bool) -> AuditResult {
    let targets = &words[..limit.unwrap_or(words.len()).min(words.len())];
    log::debug!("auditing {} targets against {} guesses", targets.len(), words.len());

    let pb = if progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let tally = targets
        .par_iter()
        .map(|target| {
            let tally = audit_target(target, words);
            pb.inc(1);
            tally
        })
        .reduce(Tally::default, Tally::merge);

    pb.finish_with_message("Complete!");

    let mut violations = tally.violations;
    violations.sort_by(|a, b| (&a.target, &a.guess).cmp(&(&b.target, &b.guess)));

    AuditResult {
        total_words: words.len(),
        targets: targets.len(),
        pairs: tally.pairs,
        solved_pairs: tally.solved_pairs,
        length_mismatches: tally.length_mismatches,
        marks: tally.marks,
        violations,
        duration: start.elapsed(),
    }
}

fn audit_target(target: &Word, words: &[Word]) -> Tally {
    let mut tally = Tally::default();

    let own = Feedback::calculate(target, target.text());
    if !own.is_solved() {
        tally.violations.push(Violation {
            target: target.text().to_string(),
            guess: target.text().to_string(),
            kind: ViolationKind::NotSelfSolved,
        });
    }

    for guess in words {
        let feedback = Feedback::calculate(target, guess.text());
        tally.pairs += 1;
        tally.marks.add(&feedback);
        if feedback.is_solved() {
            tally.solved_pairs += 1;
        }
        if feedback.length_mismatch().is_some() {
            tally.length_mismatches += 1;
        }
        tally.violations.extend(
            check_pair(target, guess.text(), &feedback)
                .into_iter()
                .map(|kind| Violation {
                    target: target.text().to_string(),
                    guess: guess.text().to_string(),
                    kind,
                }),
        );
    }

    tally
}

//! Simple interactive CLI mode
//!
//! Text-based spelling rounds without TUI

use crate::core::Word;
use crate::game::{Outcome, Phase, RoundConfig, Session};
use crate::output::formatters::{feedback_to_emoji, mask_word};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::thread;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(words: Vec<Word>, config: RoundConfig) -> Result<(), String> {
    let session = Session::new(words, config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(session, &mut stdin.lock(), &mut stdout.lock(), true).map_err(|e| e.to_string())
}

/// Drive a session from `input`, writing to `output`
///
/// With `wait` set the reveal timer runs on the wall clock; otherwise the
/// word is hidden as soon as it has been printed.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn play<R: BufRead, W: Write>(
    mut session: Session,
    input: &mut R,
    output: &mut W,
    wait: bool,
) -> io::Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║              Spelling Practice - Interactive Mode            ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Each word is shown briefly, then hidden. Type it from memory.")?;
    writeln!(output, "  🟩 right letter, right place   🟨 right letter, wrong place")?;
    writeln!(output, "  ⬜ letter not in the word       ⬛ letter missing\n")?;
    writeln!(output, "Commands: ':skip' to reveal the word, ':quit' to exit\n")?;

    'rounds: while session.next_round().map_err(io::Error::other)? {
        let round_no = session.stats().rounds_played + 1;
        writeln!(output, "────────────────────────────────────────────────────────────")?;
        writeln!(output, "Round {round_no}: {} words left", session.remaining())?;
        writeln!(output, "────────────────────────────────────────────────────────────")?;

        if let (Some(word), Some(remaining)) =
            (session.round().target(), session.round().reveal_remaining())
        {
            writeln!(output, "\n  👀 {}\n", word.text().to_uppercase().bright_yellow().bold())?;
            output.flush()?;
            if wait {
                thread::sleep(remaining);
            }
            session.tick(remaining);
        }

        while session.round().phase() == Phase::Guessing {
            let len = session.round().target_len().unwrap_or(0);
            let left = session
                .round()
                .attempts_left()
                .map_or_else(|| "∞".to_string(), |n| n.to_string());
            let prompt = format!("Spell it ({}) [{left} tries left]", mask_word(len));

            let Some(line) = read_line(input, output, &prompt)? else {
                break 'rounds;
            };

            // Commands carry a ':' prefix; bare input is always a guess
            match line.strip_prefix(':').map(str::to_lowercase).as_deref() {
                Some("quit" | "q" | "exit") => break 'rounds,
                Some("skip" | "give up") => {
                    session.give_up().map_err(io::Error::other)?;
                }
                _ => {
                    let feedback = session.submit(&line).map_err(io::Error::other)?;
                    write!(output, "  {} {}", line.to_uppercase(), feedback_to_emoji(&feedback))?;
                    if let Some(note) = feedback.length_mismatch() {
                        write!(output, "  ({note})")?;
                    }
                    writeln!(output)?;
                }
            }
        }

        let round = session.round();
        let answer = round
            .target()
            .map(|w| w.text().to_uppercase())
            .unwrap_or_default();
        match round.outcome() {
            Some(Outcome::Solved) => {
                let n = round.attempts().len();
                writeln!(
                    output,
                    "\n  {} Spelled {} in {n} {}\n",
                    "✅".green(),
                    answer.bright_green().bold(),
                    if n == 1 { "try" } else { "tries" }
                )?;
            }
            Some(Outcome::OutOfAttempts) => {
                writeln!(output, "\n  {} Out of tries. The word was {}\n", "❌".red(), answer.bold())?;
            }
            Some(Outcome::GaveUp) => {
                writeln!(output, "\n  The word was {}\n", answer.bold())?;
            }
            None => {}
        }
    }

    let stats = session.stats();
    writeln!(
        output,
        "👋 Thanks for playing! Spelled {}/{} words.",
        stats.rounds_solved, stats.rounds_played
    )?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

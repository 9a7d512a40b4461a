//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar, feedback_to_emoji};
use crate::commands::{AuditResult, ScoreResult};
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}", colored_tiles(&result.guess, &result.feedback));
    println!("  {}", feedback_to_emoji(&result.feedback));

    if verbose {
        let feedback = &result.feedback;
        println!("\n  Feedback:  {feedback}");
        println!("  Correct:   {}", feedback.count_correct());
        println!("  Present:   {}", feedback.count_present());
        println!("  Absent:    {}", feedback.count_absent());
    }

    println!();
    if result.feedback.is_solved() {
        println!("{}", "✅ Spelled correctly!".green().bold());
    } else if let Some(note) = result.feedback.length_mismatch() {
        println!("{}", format!("❌ Not quite: {note}").red().bold());
    } else {
        println!("{}", "❌ Not quite".red().bold());
    }
}

/// Print the result of an audit run
pub fn print_audit_result(result: &AuditResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AUDIT RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Words:            {}", result.total_words);
    println!("   Targets:          {}", result.targets);
    println!("   Pairs scored:     {}", result.pairs);
    println!("   Exact matches:    {}", result.solved_pairs);
    println!("   Length mismatch:  {}", result.length_mismatches);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let total = result.marks.total().max(1) as f64;
    println!("\n📈 {}", "Mark distribution:".bright_cyan().bold());
    for (label, count) in [
        ("🟩 correct", result.marks.correct),
        ("🟨 present", result.marks.present),
        ("⬜ absent ", result.marks.absent),
        ("⬛ missing", result.marks.missing),
    ] {
        let pct = count as f64 / total * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {label}: {} {count:8} ({pct:5.1}%)", bar.green());
    }

    println!();
    if result.passed() {
        println!("{}", "✅ All invariants hold".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} violations", result.violations.len())
                .red()
                .bold()
        );
        for violation in result.violations.iter().take(20) {
            println!("   • {violation}");
        }
    }
}

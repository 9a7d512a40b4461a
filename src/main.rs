//! Letter Feedback - CLI
//!
//! Spelling practice with Wordle-style letter feedback, in TUI and CLI modes.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use letter_feedback::{
    commands::{run_audit, run_simple, score_guess},
    core::Word,
    game::{RoundConfig, Session},
    output::{print_audit_result, print_score_result},
    wordlists::{WORDS, loader::words_from_slice},
};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "letter_feedback",
    about = "Spelling practice with Wordle-style letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seconds each word is shown before it is hidden
    #[arg(short = 's', long, global = true, default_value = "3")]
    show_secs: u64,

    /// Attempts per word (0 for unlimited)
    #[arg(short = 'a', long, global = true, default_value = "6")]
    attempts: usize,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (spelling rounds without TUI)
    Simple,

    /// Score one guess against a target word
    Score {
        /// The target word
        target: String,

        /// The guess to score
        guess: String,
    },

    /// Check the scorer's invariants over every pair of words in the list
    Audit {
        /// Limit number of target words
        #[arg(short, long)]
        limit: Option<usize>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

/// Load words based on the -w flag
fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    use letter_feedback::wordlists::loader::load_from_file;

    let words = match wordlist {
        "builtin" => words_from_slice(WORDS),
        path => load_from_file(path).map_err(|e| anyhow!("Cannot read wordlist {path}: {e}"))?,
    };

    if words.is_empty() {
        return Err(anyhow!("Wordlist '{wordlist}' contains no words"));
    }
    log::info!("using {} words from {wordlist}", words.len());
    Ok(words)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = RoundConfig::new(Duration::from_secs(cli.show_secs), cli.attempts);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli.wordlist, config),
        Commands::Simple => run_simple_command(&cli.wordlist, config),
        Commands::Score { target, guess } => run_score_command(&target, &guess, cli.verbose),
        Commands::Audit { limit, no_progress } => {
            run_audit_command(&cli.wordlist, limit, !no_progress)
        }
    }
}

fn run_score_command(target: &str, guess: &str, verbose: bool) -> Result<()> {
    let result = score_guess(target, guess).map_err(|e| anyhow!(e))?;
    print_score_result(&result, verbose);
    Ok(())
}

fn run_audit_command(wordlist: &str, limit: Option<usize>, progress: bool) -> Result<()> {
    let words = load_words(wordlist)?;

    println!("\n{}", "═".repeat(70));
    println!(" Letter Feedback Audit ");
    println!("{}", "═".repeat(70));
    println!("\nChecking {} words against each other\n", words.len());

    let result = run_audit(&words, limit, progress);
    print_audit_result(&result);

    if result.passed() {
        Ok(())
    } else {
        Err(anyhow!("audit found {} violations", result.violations.len()))
    }
}

fn run_simple_command(wordlist: &str, config: RoundConfig) -> Result<()> {
    let words = load_words(wordlist)?;
    run_simple(words, config).map_err(|e| anyhow!(e))
}

fn run_play_command(wordlist: &str, config: RoundConfig) -> Result<()> {
    use letter_feedback::interactive::{App, run_tui};

    let words = load_words(wordlist)?;
    let app = App::new(Session::new(words, config));
    run_tui(app)
}

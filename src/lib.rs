//! Letter Feedback
//!
//! Wordle-style letter feedback for spelling games: score a guess against a
//! target word, letter by letter, with Wordle's duplicate-letter rules.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_feedback::core::{Mark, classify};
//!
//! let feedback = classify("apple", "pplea");
//! assert_eq!(feedback.marks()[1], Mark::Correct);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Round and session state machines
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

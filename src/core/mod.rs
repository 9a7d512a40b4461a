//! Core domain types for letter feedback
//!
//! This module contains the fundamental domain types, independent of any front-end.
//! All types here are pure, testable, and safe to share across threads.

mod feedback;
mod mark;
mod word;

pub use feedback::{Feedback, LengthMismatch, classify};
pub use mark::Mark;
pub use word::{Word, WordError, fold, fold_char};

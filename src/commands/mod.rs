//! Command implementations

pub mod audit;
pub mod score;
pub mod simple;

pub use audit::{AuditResult, run_audit};
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;

//! Spelling game flow
//!
//! Round and session state machines driven by caller-supplied events and
//! ticks. Scoring itself lives in [`crate::core`].

mod round;
mod session;

pub use round::{Attempt, Outcome, Phase, Round, RoundConfig, RoundError, RoundEvent};
pub use session::{Session, Statistics};

//! Command implementations

pub mod round;
pub mod session;
pub mod suggest;

pub use round::{LIST_THRESHOLD, RoundInput, RoundReport, Suggestions, play_round};
pub use session::{ClueInputStyle, SessionConfig, run_session};
pub use suggest::{SuggestConfig, run_suggest};

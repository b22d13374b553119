//! Core domain types for the helper
//!
//! Words and clues are plain values with no I/O; everything else builds on them.

mod clue;
mod word;

pub use clue::{ClueError, DisplacementClue, PositionPattern, WILDCARD};
pub use word::{WORD_LEN, Word, WordError};

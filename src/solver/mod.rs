//! Clue matching and ranking
//!
//! This module narrows the dictionary to words consistent with the clues and
//! orders the survivors by letter frequency.

pub mod clues;
pub mod constraints;
mod engine;
pub mod ranking;

pub use clues::ClueStore;
pub use engine::Helper;
pub use ranking::{DEFAULT_TOP, Ranking, ScoredCandidate, rank_candidates};

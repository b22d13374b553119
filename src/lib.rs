//! Wordle Helper
//!
//! Narrows a word list to the words consistent with Wordle clues and ranks the
//! survivors by how common their letters are among the remaining candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::PositionPattern;
//! use wordle_helper::solver::{ClueStore, DEFAULT_TOP, Helper};
//! use wordle_helper::wordlists::loader::words_from_slice;
//!
//! let dictionary = words_from_slice(&["apple", "amble", "angle"]);
//! let helper = Helper::new(&dictionary);
//!
//! let mut clues = ClueStore::new().begin_round(PositionPattern::parse("a...e").unwrap());
//! clues.exclude_letters("b");
//!
//! let ranking = helper.suggest(&clues, DEFAULT_TOP);
//! assert_eq!(ranking.len(), 2);
//! ```

// Core domain types
pub mod core;

// Clue matching and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

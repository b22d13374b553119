//! Formatting utilities for terminal output
//!
//! Plain text only; colors are applied by the display layer.

use crate::core::Word;
use crate::solver::ScoredCandidate;

/// Format one ranked suggestion as `word (score: N)`
#[must_use]
pub fn format_scored(candidate: &ScoredCandidate<'_>) -> String {
    format!("{} (score: {})", candidate.word, candidate.score)
}

/// Join words with `, `
#[must_use]
pub fn join_words<'a, I>(words: I) -> String
where
    I: IntoIterator<Item = &'a Word>,
{
    words
        .into_iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format letters as a space separated list
#[must_use]
pub fn format_letters(letters: &[u8]) -> String {
    letters
        .iter()
        .map(|&b| char::from(b).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

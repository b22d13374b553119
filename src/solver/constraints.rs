//! Clue predicates for a single word
//!
//! Each predicate answers one question about one word and is pure. A word is
//! a candidate only if it passes all three.

use super::clues::ClueStore;
use crate::core::{DisplacementClue, PositionPattern, Word};
use rustc_hash::FxHashSet;

/// Check the word against the green pattern
///
/// Wildcard cells accept any letter; pinned cells require an exact match.
///
/// # Examples
/// ```
/// use wordle_helper::core::{PositionPattern, Word};
/// use wordle_helper::solver::constraints::matches_position;
///
/// let word = Word::new("amble").unwrap();
/// assert!(matches_position(&word, &PositionPattern::parse("a...e").unwrap()));
/// assert!(!matches_position(&word, &PositionPattern::parse("ap...").unwrap()));
/// ```
#[must_use]
pub fn matches_position(word: &Word, pattern: &PositionPattern) -> bool {
    word.chars()
        .iter()
        .zip(pattern.cells())
        .all(|(&letter, cell)| cell.is_none_or(|pinned| pinned == letter))
}

/// Check the word against every yellow clue
///
/// Each clue's letter must occur somewhere in the word, but not at the clue's
/// position. Clues for the same letter at different positions stack.
#[must_use]
pub fn matches_displacement(word: &Word, clues: &[DisplacementClue]) -> bool {
    clues.iter().all(|clue| {
        word.has_letter(clue.letter()) && word.char_at(clue.position()) != clue.letter()
    })
}

/// Check the word against the gray letters
///
/// Protected letters are skipped: a letter that is green or yellow this round
/// is never grounds for rejection, even if it was also marked gray.
#[must_use]
pub fn matches_exclusion(
    word: &Word,
    excluded: &FxHashSet<u8>,
    protected: &FxHashSet<u8>,
) -> bool {
    excluded
        .iter()
        .filter(|letter| !protected.contains(*letter))
        .all(|&letter| !word.has_letter(letter))
}

/// Check the word against the whole clue store
///
/// `protected` must be the store's [`ClueStore::protected_letters`]; it is
/// passed in so callers filtering many words derive it only once.
#[must_use]
pub fn is_candidate(word: &Word, clues: &ClueStore, protected: &FxHashSet<u8>) -> bool {
    matches_position(word, clues.pattern())
        && matches_displacement(word, clues.displacements())
        && matches_exclusion(word, clues.exclusions(), protected)
}

//! Session clue state
//!
//! The store is a plain value owned by the caller. Starting a round consumes
//! the previous store and returns the next one: the green pattern is replaced,
//! yellow clues are cleared and gray letters carry over.

use crate::core::{DisplacementClue, PositionPattern};
use rustc_hash::FxHashSet;

/// Clues known at the current round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueStore {
    pattern: PositionPattern,
    displacements: Vec<DisplacementClue>,
    exclusions: FxHashSet<u8>,
}

impl ClueStore {
    /// Empty store: open pattern, no yellow clues, no gray letters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the next round with a fresh green pattern
    ///
    /// Yellow clues from the previous round are dropped. Gray letters are kept.
    #[must_use]
    pub fn begin_round(mut self, pattern: PositionPattern) -> Self {
        self.pattern = pattern;
        self.displacements.clear();
        self
    }

    /// Record a yellow clue for this round
    ///
    /// Returns `false` if an identical clue was already recorded. Clues for the
    /// same letter at other positions are distinct and always kept.
    pub fn add_displacement(&mut self, clue: DisplacementClue) -> bool {
        if self.displacements.contains(&clue) {
            return false;
        }
        self.displacements.push(clue);
        true
    }

    /// Add every letter of `letters` to the gray set
    ///
    /// Non-letters are ignored and repeats are harmless. Returns how many
    /// letters were new to the set.
    pub fn exclude_letters(&mut self, letters: &str) -> usize {
        let mut added = 0;
        for letter in letters.bytes().filter(u8::is_ascii_alphabetic) {
            if self.exclusions.insert(letter.to_ascii_lowercase()) {
                added += 1;
            }
        }
        added
    }

    /// The current green pattern
    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &PositionPattern {
        &self.pattern
    }

    /// Yellow clues in the order they were entered
    #[inline]
    #[must_use]
    pub fn displacements(&self) -> &[DisplacementClue] {
        &self.displacements
    }

    /// Gray letters accumulated so far
    #[inline]
    #[must_use]
    pub const fn exclusions(&self) -> &FxHashSet<u8> {
        &self.exclusions
    }

    /// Gray letters in alphabetical order
    #[must_use]
    pub fn sorted_exclusions(&self) -> Vec<u8> {
        let mut letters: Vec<u8> = self.exclusions.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Letters that are green or yellow this round
    ///
    /// These override a gray marking of the same letter.
    #[must_use]
    pub fn protected_letters(&self) -> FxHashSet<u8> {
        self.pattern
            .pinned_letters()
            .chain(self.displacements.iter().map(DisplacementClue::letter))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clue(text: &str) -> DisplacementClue {
        DisplacementClue::parse_single(text).unwrap()
    }

    #[test]
    fn new_store_is_empty() {
        let store = ClueStore::new();
        assert_eq!(store.pattern(), &PositionPattern::ANY);
        assert!(store.displacements().is_empty());
        assert!(store.exclusions().is_empty());
        assert!(store.protected_letters().is_empty());
    }

    #[test]
    fn add_displacement_drops_exact_duplicates() {
        let mut store = ClueStore::new();
        assert!(store.add_displacement(clue("..k..")));
        assert!(!store.add_displacement(clue("..k..")));
        assert!(store.add_displacement(clue("k....")));
        assert_eq!(store.displacements(), &[clue("..k.."), clue("k....")]);
    }

    #[test]
    fn exclude_letters_accumulates_and_normalizes() {
        let mut store = ClueStore::new();
        assert_eq!(store.exclude_letters("Qzq"), 2);
        assert_eq!(store.exclude_letters("z x-1"), 1);
        assert_eq!(store.sorted_exclusions(), b"qxz".to_vec());
    }

    #[test]
    fn begin_round_replaces_pattern_and_clears_yellows() {
        let mut store = ClueStore::new().begin_round(PositionPattern::parse("a....").unwrap());
        store.add_displacement(clue("....l"));
        store.exclude_letters("xyz");

        let next = store.begin_round(PositionPattern::parse("....e").unwrap());
        assert_eq!(next.pattern().to_string(), "....e");
        assert!(next.displacements().is_empty());
        assert_eq!(next.sorted_exclusions(), b"xyz".to_vec());
    }

    #[test]
    fn protected_letters_cover_green_and_yellow() {
        let mut store = ClueStore::new().begin_round(PositionPattern::parse("s...e").unwrap());
        store.add_displacement(clue(".a..."));
        store.add_displacement(clue("...a."));

        let protected = store.protected_letters();
        let mut letters: Vec<u8> = protected.into_iter().collect();
        letters.sort_unstable();
        assert_eq!(letters, b"aes".to_vec());
    }
}

//! Main helper interface

use super::clues::ClueStore;
use super::constraints::is_candidate;
use super::ranking::{Ranking, rank_candidates};
use crate::core::Word;
use log::debug;

/// Clue-driven word filter over a fixed dictionary
///
/// Holds the dictionary by reference; every query re-evaluates the whole
/// dictionary against the clues it is given.
pub struct Helper<'a> {
    dictionary: &'a [Word],
}

impl<'a> Helper<'a> {
    /// Create a helper over `dictionary`, in load order
    #[must_use]
    pub const fn new(dictionary: &'a [Word]) -> Self {
        Self { dictionary }
    }

    /// Number of dictionary entries, duplicates included
    #[must_use]
    pub const fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    /// Words consistent with every clue, in dictionary order
    ///
    /// An empty result is a normal outcome.
    #[must_use]
    pub fn filter_candidates(&self, clues: &ClueStore) -> Vec<&'a Word> {
        let protected = clues.protected_letters();

        let candidates: Vec<&'a Word> = self
            .dictionary
            .iter()
            .filter(|word| is_candidate(word, clues, &protected))
            .collect();

        debug!(
            "pattern {} with {} yellow clue(s) and {} gray letter(s): {} of {} words remain",
            clues.pattern(),
            clues.displacements().len(),
            clues.exclusions().len(),
            candidates.len(),
            self.dictionary.len()
        );

        candidates
    }

    /// Count how many words are consistent with the clues
    #[must_use]
    pub fn count_candidates(&self, clues: &ClueStore) -> usize {
        self.filter_candidates(clues).len()
    }

    /// Filter then rank, keeping `top` suggestions
    #[must_use]
    pub fn suggest(&self, clues: &ClueStore, top: usize) -> Ranking<'a> {
        let candidates = self.filter_candidates(clues);
        rank_candidates(&candidates, top)
    }
}

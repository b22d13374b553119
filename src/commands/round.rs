//! One round of clue processing
//!
//! Takes the session's clue store by value, applies the round's input and
//! hands back the updated store together with what to show the user.

use crate::core::{DisplacementClue, PositionPattern, Word};
use crate::solver::{ClueStore, Helper, Ranking, rank_candidates};
use log::{debug, info};

/// Candidate counts at or below this are listed without scores
pub const LIST_THRESHOLD: usize = 2;

/// Clues entered for one round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundInput {
    pub pattern: PositionPattern,
    pub displacements: Vec<DisplacementClue>,
    pub gray_letters: String,
}

/// What the round produced for display
#[derive(Debug, Clone)]
pub enum Suggestions<'a> {
    /// Nothing matched the clues
    NoMatches,
    /// Few enough candidates to list as-is
    Few(Vec<&'a Word>),
    /// Candidates ranked by letter frequency
    Ranked(Ranking<'a>),
}

/// Result of one round
#[derive(Debug, Clone)]
pub struct RoundReport<'a> {
    pub count: usize,
    pub suggestions: Suggestions<'a>,
}

impl<'a> RoundReport<'a> {
    /// Build the report for a candidate list in dictionary order
    ///
    /// Ranking is skipped for zero candidates and for short lists.
    #[must_use]
    pub fn from_candidates(candidates: Vec<&'a Word>, top: usize) -> Self {
        let count = candidates.len();
        let suggestions = match count {
            0 => Suggestions::NoMatches,
            n if n <= LIST_THRESHOLD => Suggestions::Few(candidates),
            _ => Suggestions::Ranked(rank_candidates(&candidates, top)),
        };
        Self { count, suggestions }
    }
}

/// Apply one round of clues and report the candidates
///
/// The green pattern replaces the previous one, yellow clues replace the
/// previous round's (exact repeats dropped) and gray letters are added to
/// those already known.
#[must_use]
pub fn play_round<'a>(
    helper: &Helper<'a>,
    clues: ClueStore,
    input: &RoundInput,
    top: usize,
) -> (ClueStore, RoundReport<'a>) {
    let mut clues = clues.begin_round(input.pattern);

    for &clue in &input.displacements {
        if !clues.add_displacement(clue) {
            debug!("dropping repeated clue {clue}");
        }
    }
    clues.exclude_letters(&input.gray_letters);

    let candidates = helper.filter_candidates(&clues);
    info!(
        "round with pattern {}: {} candidate(s)",
        clues.pattern(),
        candidates.len()
    );

    let report = RoundReport::from_candidates(candidates, top);
    (clues, report)
}

//! Letter-frequency ranking of candidates
//!
//! A candidate scores the sum, over its distinct letters, of how often each
//! letter appears across all candidates (repeats counted). Words that share
//! many common letters with the rest of the pool rank first.

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Default number of top suggestions
pub const DEFAULT_TOP: usize = 10;

/// A candidate paired with its frequency score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCandidate<'a> {
    pub word: &'a Word,
    pub score: usize,
}

impl ScoredCandidate<'_> {
    /// Higher score first, then alphabetical
    fn rank_order(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.word.cmp(other.word))
    }
}

/// Candidates in rank order with a cut-off for the top suggestions
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    ranked: Vec<ScoredCandidate<'a>>,
    top: usize,
}

impl<'a> Ranking<'a> {
    /// The first `top` entries (all of them if there are fewer)
    #[must_use]
    pub fn top(&self) -> &[ScoredCandidate<'a>] {
        &self.ranked[..self.top.min(self.ranked.len())]
    }

    /// Every candidate in rank order
    #[must_use]
    pub fn full(&self) -> &[ScoredCandidate<'a>] {
        &self.ranked
    }

    /// Number of ranked candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// True when there was nothing to rank
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Ranked words without scores
    pub fn words(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.ranked.iter().map(|scored| scored.word)
    }
}

/// Count every letter occurrence across all candidates
#[must_use]
pub fn letter_histogram(candidates: &[&Word]) -> FxHashMap<u8, usize> {
    let mut counts = FxHashMap::default();
    for word in candidates {
        for &letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }
    counts
}

/// Score one word against a histogram
///
/// Each distinct letter counts once, so a doubled letter does not double its
/// own contribution.
#[must_use]
pub fn score_word<S>(word: &Word, histogram: &std::collections::HashMap<u8, usize, S>) -> usize
where
    S: std::hash::BuildHasher,
{
    word.distinct_letters()
        .iter()
        .map(|letter| histogram.get(letter).copied().unwrap_or(0))
        .sum()
}

/// Score and order candidates
///
/// Order is descending score, ties broken by ascending word. Any number of
/// candidates is accepted, including zero.
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::solver::ranking::rank_candidates;
///
/// let words: Vec<Word> = ["sissy", "kiosk", "basis"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let refs: Vec<&Word> = words.iter().collect();
///
/// let ranking = rank_candidates(&refs, 10);
/// assert_eq!(ranking.top()[0].word.text(), "kiosk");
/// assert_eq!(ranking.top()[0].score, 12);
/// ```
#[must_use]
pub fn rank_candidates<'a>(candidates: &[&'a Word], top: usize) -> Ranking<'a> {
    let histogram = letter_histogram(candidates);

    let mut ranked: Vec<ScoredCandidate<'a>> = candidates
        .iter()
        .map(|&word| ScoredCandidate {
            word,
            score: score_word(word, &histogram),
        })
        .collect();
    ranked.sort_by(ScoredCandidate::rank_order);

    Ranking { ranked, top }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn texts<'a>(ranked: &[ScoredCandidate<'a>]) -> Vec<&'a str> {
        ranked.iter().map(|s| s.word.text()).collect()
    }

    #[test]
    fn histogram_counts_repeats() {
        let pool = words(&["sissy", "kiosk"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let histogram = letter_histogram(&refs);

        assert_eq!(histogram.get(&b's'), Some(&4));
        assert_eq!(histogram.get(&b'k'), Some(&2));
        assert_eq!(histogram.get(&b'i'), Some(&2));
        assert_eq!(histogram.get(&b'z'), None);
    }

    #[test]
    fn score_uses_distinct_letters_only() {
        let pool = words(&["sissy", "kiosk", "basis"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let histogram = letter_histogram(&refs);

        // s=6 i=3 y=1: the three s's in "sissy" count once toward its score
        assert_eq!(score_word(&pool[0], &histogram), 10);
        // k=2 i=3 o=1 s=6
        assert_eq!(score_word(&pool[1], &histogram), 12);
        // b=1 a=1 s=6 i=3
        assert_eq!(score_word(&pool[2], &histogram), 11);
    }

    #[test]
    fn ranking_orders_by_score_then_alphabet() {
        let pool = words(&["sissy", "kiosk", "basis"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let ranking = rank_candidates(&refs, DEFAULT_TOP);

        assert_eq!(texts(ranking.full()), ["kiosk", "basis", "sissy"]);
        let scores: Vec<usize> = ranking.full().iter().map(|s| s.score).collect();
        assert_eq!(scores, [12, 11, 10]);
    }

    #[test]
    fn ties_break_alphabetically() {
        // Every word scores 11: a=3 l=3 e=3 plus two letters worth 1, or p=2
        let pool = words(&["apple", "angle", "amble"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let ranking = rank_candidates(&refs, DEFAULT_TOP);

        assert!(ranking.full().iter().all(|s| s.score == 11));
        assert_eq!(texts(ranking.full()), ["amble", "angle", "apple"]);
    }

    #[test]
    fn ranking_is_idempotent() {
        let pool = words(&["crane", "slate", "trace", "react", "caret", "stare"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let first = rank_candidates(&refs, DEFAULT_TOP);

        let reordered: Vec<&Word> = first.words().collect();
        let second = rank_candidates(&reordered, DEFAULT_TOP);

        assert_eq!(first.full(), second.full());
    }

    #[test]
    fn ten_candidates_top_equals_full() {
        let pool = words(&[
            "eerie", "geese", "eager", "terse", "sheet", "elite", "tepee", "agree", "steer",
            "mummy",
        ]);
        let refs: Vec<&Word> = pool.iter().collect();
        let ranking = rank_candidates(&refs, DEFAULT_TOP);

        assert_eq!(ranking.len(), 10);
        assert_eq!(ranking.top(), ranking.full());

        // Ordered by descending score, then ascending word
        for pair in ranking.full().windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.score > b.score || (a.score == b.score && a.word < b.word));
        }

        // Shares no letters with the rest: m=3 u=1 y=1, each distinct letter once
        let last = ranking.full().last().unwrap();
        assert_eq!(last.word.text(), "mummy");
        assert_eq!(last.score, 3 + 1 + 1);
    }

    #[test]
    fn top_truncates_long_rankings() {
        let pool = words(&[
            "crane", "slate", "trace", "react", "caret", "stare", "arise", "raise", "irate",
            "arose", "store", "snare",
        ]);
        let refs: Vec<&Word> = pool.iter().collect();
        let ranking = rank_candidates(&refs, DEFAULT_TOP);

        assert_eq!(ranking.full().len(), 12);
        assert_eq!(ranking.top().len(), 10);
        assert_eq!(ranking.top(), &ranking.full()[..10]);
    }

    #[test]
    fn small_and_empty_pools_rank() {
        let pool = words(&["kiosk"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let ranking = rank_candidates(&refs, DEFAULT_TOP);
        assert_eq!(texts(ranking.top()), ["kiosk"]);
        assert_eq!(ranking.top()[0].score, 2 + 1 + 1 + 1);

        let empty = rank_candidates(&[], DEFAULT_TOP);
        assert!(empty.is_empty());
        assert!(empty.top().is_empty());
    }
}

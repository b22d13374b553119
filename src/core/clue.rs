//! Clue representations and their textual formats
//!
//! Clues are written as 5-character strings where `.` marks an unknown cell:
//! - Position pattern (green): `a...e` pins `a` at 0 and `e` at 4
//! - Displacement clue (yellow): `..k..` means `k` is in the word but not at 2
//!
//! All parsing is case-insensitive; letters are stored lowercase.

use super::word::WORD_LEN;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Marker for an unknown cell in the textual formats
pub const WILDCARD: char = '.';

/// Error type for malformed clue input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClueError {
    #[error("clue must be 5 characters (use . for unknowns), got {0}")]
    InvalidLength(usize),

    #[error("clue contains invalid character '{0}'")]
    InvalidCharacter(char),

    #[error("clue position {0} is out of range")]
    InvalidPosition(usize),

    #[error("clue must contain exactly one letter, got {0}")]
    LetterCount(usize),
}

/// Confirmed letter positions ("green pattern")
///
/// Each of the 5 cells is either a pinned letter or a wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionPattern([Option<u8>; WORD_LEN]);

impl PositionPattern {
    /// Pattern with every cell unknown
    pub const ANY: Self = Self([None; WORD_LEN]);

    /// Create a pattern from raw cells
    #[must_use]
    pub const fn from_cells(cells: [Option<u8>; WORD_LEN]) -> Self {
        Self(cells)
    }

    /// Parse a pattern like `..e.r`
    ///
    /// # Errors
    /// Returns `ClueError::InvalidLength` unless the trimmed input has exactly
    /// 5 characters, and `ClueError::InvalidCharacter` for anything that is
    /// neither a letter nor `.`.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::PositionPattern;
    ///
    /// let pattern = PositionPattern::parse("A...e").unwrap();
    /// assert_eq!(pattern.cell(0), Some(b'a'));
    /// assert_eq!(pattern.cell(1), None);
    /// assert!(PositionPattern::parse("a..e").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ClueError> {
        let cells = parse_cells(input)?;
        Ok(Self(cells))
    }

    /// The letter pinned at `position`, if any
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn cell(&self, position: usize) -> Option<u8> {
        self.0[position]
    }

    /// All cells in position order
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Option<u8>; WORD_LEN] {
        &self.0
    }

    /// Letters pinned anywhere in the pattern
    pub fn pinned_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().flatten().copied()
    }

    /// True when no cell is pinned
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

impl FromStr for PositionPattern {
    type Err = ClueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PositionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cells(f, &self.0)
    }
}

/// A letter known to be in the word but not at `position` ("yellow clue")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplacementClue {
    position: usize,
    letter: u8,
}

impl DisplacementClue {
    /// Create a clue for `letter` excluded from `position`
    ///
    /// # Errors
    /// Returns `ClueError::InvalidPosition` for positions >= 5 and
    /// `ClueError::InvalidCharacter` if `letter` is not an ASCII letter.
    pub fn new(position: usize, letter: u8) -> Result<Self, ClueError> {
        if position >= WORD_LEN {
            return Err(ClueError::InvalidPosition(position));
        }
        if !letter.is_ascii_alphabetic() {
            return Err(ClueError::InvalidCharacter(char::from(letter)));
        }
        Ok(Self {
            position,
            letter: letter.to_ascii_lowercase(),
        })
    }

    /// The position this letter is known not to occupy
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The letter known to be present
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    /// Parse a single clue like `..k..`
    ///
    /// # Errors
    /// Fails unless the input is 5 characters with exactly one letter and
    /// `.` everywhere else.
    pub fn parse_single(input: &str) -> Result<Self, ClueError> {
        let clues = Self::parse_combined(input)?;
        match clues.as_slice() {
            [clue] => Ok(*clue),
            other => Err(ClueError::LetterCount(other.len())),
        }
    }

    /// Parse a combined clue string like `.a.g.`
    ///
    /// Every letter becomes an independent clue for its own position, in
    /// left-to-right order. A string of only `.` yields no clues.
    ///
    /// # Errors
    /// Same rules as [`PositionPattern::parse`].
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::DisplacementClue;
    ///
    /// let clues = DisplacementClue::parse_combined(".a.g.").unwrap();
    /// assert_eq!(clues.len(), 2);
    /// assert_eq!(clues[0].position(), 1);
    /// assert_eq!(clues[1].letter(), b'g');
    /// ```
    pub fn parse_combined(input: &str) -> Result<Vec<Self>, ClueError> {
        let cells = parse_cells(input)?;
        Ok(cells
            .iter()
            .enumerate()
            .filter_map(|(position, cell)| cell.map(|letter| Self { position, letter }))
            .collect())
    }
}

impl FromStr for DisplacementClue {
    type Err = ClueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_single(s)
    }
}

impl fmt::Display for DisplacementClue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells = [None; WORD_LEN];
        cells[self.position] = Some(self.letter);
        write_cells(f, &cells)
    }
}

fn parse_cells(input: &str) -> Result<[Option<u8>; WORD_LEN], ClueError> {
    let chars: Vec<char> = input.trim().chars().collect();
    if chars.len() != WORD_LEN {
        return Err(ClueError::InvalidLength(chars.len()));
    }

    let mut cells = [None; WORD_LEN];
    for (cell, ch) in cells.iter_mut().zip(chars) {
        *cell = match ch {
            WILDCARD => None,
            c if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase() as u8),
            c => return Err(ClueError::InvalidCharacter(c)),
        };
    }
    Ok(cells)
}

fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[Option<u8>; WORD_LEN]) -> fmt::Result {
    for cell in cells {
        let ch = cell.map_or(WILDCARD, char::from);
        write!(f, "{ch}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_parse_pins_letters() {
        let pattern = PositionPattern::parse("..e.r").unwrap();
        assert_eq!(pattern.cells(), &[None, None, Some(b'e'), None, Some(b'r')]);
        assert_eq!(pattern.pinned_letters().collect::<Vec<_>>(), vec![b'e', b'r']);
    }

    #[test]
    fn pattern_parse_normalizes_case_and_whitespace() {
        let pattern = PositionPattern::parse("  A...E \n").unwrap();
        assert_eq!(pattern.to_string(), "a...e");
    }

    #[test]
    fn pattern_parse_all_wildcards() {
        let pattern = PositionPattern::parse(".....").unwrap();
        assert_eq!(pattern, PositionPattern::ANY);
        assert!(pattern.is_open());
    }

    #[test]
    fn pattern_parse_invalid_length() {
        assert_eq!(
            PositionPattern::parse("a..e"),
            Err(ClueError::InvalidLength(4))
        );
        assert_eq!(
            PositionPattern::parse("a....e"),
            Err(ClueError::InvalidLength(6))
        );
        assert_eq!(PositionPattern::parse(""), Err(ClueError::InvalidLength(0)));
    }

    #[test]
    fn pattern_parse_invalid_character() {
        assert_eq!(
            PositionPattern::parse("a.?.e"),
            Err(ClueError::InvalidCharacter('?'))
        );
    }

    #[test]
    fn pattern_display_round_trips_text() {
        let pattern: PositionPattern = "s.a.e".parse().unwrap();
        assert_eq!(pattern.to_string(), "s.a.e");
    }

    #[test]
    fn displacement_parse_single() {
        let clue = DisplacementClue::parse_single("..K..").unwrap();
        assert_eq!(clue.position(), 2);
        assert_eq!(clue.letter(), b'k');
        assert_eq!(clue.to_string(), "..k..");
    }

    #[test]
    fn displacement_parse_single_rejects_wrong_letter_count() {
        assert_eq!(
            DisplacementClue::parse_single("....."),
            Err(ClueError::LetterCount(0))
        );
        assert_eq!(
            DisplacementClue::parse_single(".a.g."),
            Err(ClueError::LetterCount(2))
        );
        assert!(DisplacementClue::parse_single("..k.").is_err());
    }

    #[test]
    fn displacement_parse_combined_splits_letters() {
        let clues = DisplacementClue::parse_combined("a...a").unwrap();
        assert_eq!(
            clues,
            vec![
                DisplacementClue::new(0, b'a').unwrap(),
                DisplacementClue::new(4, b'a').unwrap(),
            ]
        );
    }

    #[test]
    fn displacement_new_validates() {
        assert_eq!(
            DisplacementClue::new(5, b'a'),
            Err(ClueError::InvalidPosition(5))
        );
        assert_eq!(
            DisplacementClue::new(1, b'.'),
            Err(ClueError::InvalidCharacter('.'))
        );
        assert_eq!(DisplacementClue::new(1, b'Q').unwrap().letter(), b'q');
    }
}

//! Word list loading utilities
//!
//! Provides functions to load word lists from files, readers or string slices.

use crate::core::{WORD_LEN, Word};
use log::{debug, info, trace};
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Word list read when no path is given
pub const DEFAULT_WORDLIST: &str = "list_wordles.txt";

/// Options applied while loading a word list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Drop repeated entries, keeping the first occurrence
    pub dedup: bool,
}

/// Load words from a file
///
/// Returns valid Word instances in file order, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_helper::wordlists::loader::{LoadOptions, load_from_file};
///
/// let words = load_from_file("list_wordles.txt", LoadOptions::default()).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, options: LoadOptions) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let words = load_from_reader(BufReader::new(file), options)?;

    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load words from any line-oriented source
///
/// Each line is trimmed and lowercased. Lines that are not exactly 5
/// characters are dropped silently; 5-character lines that are not all
/// letters are dropped and logged.
///
/// # Errors
///
/// Returns an I/O error if reading a line fails.
pub fn load_from_reader<R: BufRead>(reader: R, options: LoadOptions) -> io::Result<Vec<Word>> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.chars().count() != WORD_LEN {
            trace!("skipping entry {trimmed:?}: not {WORD_LEN} characters");
            continue;
        }

        match Word::new(trimmed) {
            Ok(word) => words.push(word),
            Err(e) => debug!("skipping entry {trimmed:?}: {e}"),
        }
    }

    if options.dedup {
        let before = words.len();
        words = dedup_words(words);
        debug!("removed {} duplicate entries", before - words.len());
    }

    Ok(words)
}

/// Convert a string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_helper::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["apple", "toolong", "amble"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Remove repeated words, keeping first occurrences in order
#[must_use]
pub fn dedup_words(words: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

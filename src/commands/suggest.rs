//! One-shot suggestion command
//!
//! Runs a single round from command-line arguments instead of prompts.

use super::round::{RoundInput, play_round};
use crate::core::{DisplacementClue, PositionPattern};
use crate::output::{write_gray_letters, write_report};
use crate::solver::{ClueStore, Helper};
use anyhow::{Context, Result};
use log::warn;
use std::io::Write;

/// Clues for a one-shot suggestion
#[derive(Debug, Clone, Default)]
pub struct SuggestConfig {
    /// Green pattern, e.g. `a...e`
    pub pattern: String,
    /// Out-of-place letters, each in combined form, e.g. `.a.g.`
    pub misplaced: Vec<String>,
    /// Gray letters
    pub exclude: String,
    /// Number of top suggestions to show
    pub top: usize,
}

/// Filter and rank once, printing the same report as the interactive mode
///
/// # Errors
///
/// Returns an error if the pattern is malformed or writing to `output` fails.
/// Malformed out-of-place strings are skipped with a warning.
pub fn run_suggest<W: Write>(
    helper: &Helper<'_>,
    config: &SuggestConfig,
    mut output: W,
) -> Result<ClueStore> {
    let pattern = PositionPattern::parse(&config.pattern)
        .with_context(|| format!("invalid pattern {:?}", config.pattern))?;

    let mut displacements = Vec::new();
    for text in &config.misplaced {
        match DisplacementClue::parse_combined(text) {
            Ok(clues) => displacements.extend(clues),
            Err(e) => warn!("ignoring out-of-place letters {text:?}: {e}"),
        }
    }

    let round = RoundInput {
        pattern,
        displacements,
        gray_letters: config.exclude.clone(),
    };
    let (clues, report) = play_round(helper, ClueStore::new(), &round, config.top);

    write_gray_letters(&mut output, &clues)?;
    write_report(&mut output, &report)?;
    Ok(clues)
}

//! Interactive line-prompt mode
//!
//! Each round asks for the green pattern, the out-of-place letters and the
//! gray letters, then prints the candidates. A blank pattern ends the session.

use super::round::{RoundInput, play_round};
use crate::core::{ClueError, DisplacementClue, PositionPattern};
use crate::output::{write_banner, write_gray_letters, write_report};
use crate::solver::{ClueStore, DEFAULT_TOP, Helper};
use log::{debug, info};
use std::io::{self, BufRead, Write};

const PATTERN_PROMPT: &str = "Pattern (blank to quit)";
const COMBINED_PROMPT: &str = "Out-of-place letters (format .a.g.), Enter to skip";
const PROMPTED_PROMPT: &str = "Out-of-place clue (format ..k..), blank to finish";
const GRAY_PROMPT: &str = "Letters eliminated (gray), as a string";

/// How out-of-place letters are entered each round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ClueInputStyle {
    /// One string where every letter is a clue for its position, e.g. `.a.g.`
    #[default]
    Combined,
    /// One clue per prompt, e.g. `..k..`, until a blank line
    Prompted,
}

/// Settings for an interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub clue_input: ClueInputStyle,
    /// Number of top suggestions to show
    pub top: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            clue_input: ClueInputStyle::default(),
            top: DEFAULT_TOP,
        }
    }
}

/// Run the interactive session until a blank pattern or end of input
///
/// Returns the clue store as it stood when the session ended.
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `output` fails.
pub fn run_session<R: BufRead, W: Write>(
    helper: &Helper<'_>,
    config: SessionConfig,
    input: R,
    output: W,
) -> io::Result<ClueStore> {
    let mut session = Session {
        helper,
        config,
        input,
        output,
    };
    session.run()
}

enum RoundStep {
    Continue(ClueStore),
    Finished(ClueStore),
}

struct Session<'h, 'a, R, W> {
    helper: &'h Helper<'a>,
    config: SessionConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<'_, '_, R, W> {
    fn run(&mut self) -> io::Result<ClueStore> {
        write_banner(&mut self.output)?;
        info!(
            "session started over {} words",
            self.helper.dictionary_len()
        );

        let mut clues = ClueStore::new();
        loop {
            match self.next_round(clues)? {
                RoundStep::Continue(next) => clues = next,
                RoundStep::Finished(last) => {
                    info!("session ended");
                    return Ok(last);
                }
            }
        }
    }

    fn next_round(&mut self, clues: ClueStore) -> io::Result<RoundStep> {
        writeln!(self.output)?;
        let Some(pattern) = self.read_pattern()? else {
            return Ok(RoundStep::Finished(clues));
        };

        let displacements = match self.config.clue_input {
            ClueInputStyle::Combined => self.read_combined_clues()?,
            ClueInputStyle::Prompted => self.read_prompted_clues()?,
        };
        let gray_letters = self.prompt(GRAY_PROMPT)?.unwrap_or_default();

        let round = RoundInput {
            pattern,
            displacements,
            gray_letters,
        };
        let (clues, report) = play_round(self.helper, clues, &round, self.config.top);

        write_gray_letters(&mut self.output, &clues)?;
        write_report(&mut self.output, &report)?;
        Ok(RoundStep::Continue(clues))
    }

    /// Prompt until a well-formed pattern arrives; `None` ends the session
    fn read_pattern(&mut self) -> io::Result<Option<PositionPattern>> {
        loop {
            let line = match self.prompt(PATTERN_PROMPT)? {
                Some(line) if !line.is_empty() => line,
                _ => return Ok(None),
            };

            match PositionPattern::parse(&line) {
                Ok(pattern) => return Ok(Some(pattern)),
                Err(ClueError::InvalidLength(_)) => {
                    writeln!(
                        self.output,
                        "Pattern must be 5 characters (use . for unknowns)."
                    )?;
                }
                Err(e) => writeln!(self.output, "Invalid pattern: {e}")?,
            }
        }
    }

    fn read_combined_clues(&mut self) -> io::Result<Vec<DisplacementClue>> {
        let line = self.prompt(COMBINED_PROMPT)?.unwrap_or_default();
        if line.is_empty() {
            return Ok(Vec::new());
        }

        Ok(DisplacementClue::parse_combined(&line).unwrap_or_else(|e| {
            debug!("ignoring out-of-place input {line:?}: {e}");
            Vec::new()
        }))
    }

    fn read_prompted_clues(&mut self) -> io::Result<Vec<DisplacementClue>> {
        let mut clues = Vec::new();
        while let Some(line) = self.prompt(PROMPTED_PROMPT)? {
            if line.is_empty() {
                break;
            }
            match DisplacementClue::parse_single(&line) {
                Ok(clue) if clues.contains(&clue) => debug!("dropping repeated clue {clue}"),
                Ok(clue) => clues.push(clue),
                Err(e) => debug!("ignoring out-of-place input {line:?}: {e}"),
            }
        }
        Ok(clues)
    }

    /// Print a prompt and read one trimmed, lowercased line
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }
}

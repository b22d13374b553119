//! Display functions for round results

use super::formatters::{format_letters, format_scored, join_words};
use crate::commands::{RoundReport, Suggestions};
use crate::solver::ClueStore;
use colored::Colorize;
use std::io::{self, Write};

/// Print the session banner
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        "Wordle Helper (Frequency Scoring)".bright_cyan().bold()
    )?;
    writeln!(
        out,
        "Type known letters in correct positions (e.g. ..e.r), or . for unknowns."
    )
}

/// Print the gray letters known so far, if any
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn write_gray_letters<W: Write>(out: &mut W, clues: &ClueStore) -> io::Result<()> {
    let letters = clues.sorted_exclusions();
    if letters.is_empty() {
        return Ok(());
    }
    writeln!(
        out,
        "{} {}",
        "Gray letters:".bright_black(),
        format_letters(&letters)
    )
}

/// Print the result of one round
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn write_report<W: Write>(out: &mut W, report: &RoundReport<'_>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        format!("Results ({}):", report.count).bright_cyan().bold()
    )?;

    match &report.suggestions {
        Suggestions::NoMatches => writeln!(out, "{}", "No words found.".red()),
        Suggestions::Few(words) => writeln!(out, "{}", join_words(words.iter().copied())),
        Suggestions::Ranked(ranking) => {
            writeln!(
                out,
                "{}",
                "Top suggestions (highest-frequency letters):"
                    .green()
                    .bold()
            )?;
            for candidate in ranking.top() {
                writeln!(out, "{}", format_scored(candidate))?;
            }
            writeln!(out)?;
            writeln!(out, "{}", "Full list:".bold())?;
            writeln!(out, "{}", join_words(ranking.words()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::loader::words_from_slice;

    fn render(report: &RoundReport<'_>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_report(&mut out, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn no_matches_report() {
        let text = render(&RoundReport::from_candidates(Vec::new(), 10));
        assert_eq!(text, "\nResults (0):\nNo words found.\n");
    }

    #[test]
    fn short_list_report() {
        let words = words_from_slice(&["apple", "angle"]);
        let refs: Vec<&Word> = words.iter().collect();
        let text = render(&RoundReport::from_candidates(refs, 10));
        assert_eq!(text, "\nResults (2):\napple, angle\n");
    }

    #[test]
    fn ranked_report() {
        let words = words_from_slice(&["sissy", "kiosk", "basis"]);
        let refs: Vec<&Word> = words.iter().collect();
        let text = render(&RoundReport::from_candidates(refs, 2));
        assert_eq!(
            text,
            "\nResults (3):\n\
             Top suggestions (highest-frequency letters):\n\
             kiosk (score: 12)\n\
             basis (score: 11)\n\
             \n\
             Full list:\n\
             kiosk, basis, sissy\n"
        );
    }

    #[test]
    fn gray_letters_line_only_when_known() {
        colored::control::set_override(false);
        let mut clues = ClueStore::new();

        let mut out = Vec::new();
        write_gray_letters(&mut out, &clues).unwrap();
        assert!(out.is_empty());

        clues.exclude_letters("zq");
        write_gray_letters(&mut out, &clues).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Gray letters: q z\n");
    }
}

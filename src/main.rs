//! Wordle Helper - CLI
//!
//! Filters a word list by Wordle clues and suggests guesses by letter frequency.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::warn;
use std::io;
use std::path::PathBuf;
use wordle_helper::{
    commands::{ClueInputStyle, SessionConfig, SuggestConfig, run_session, run_suggest},
    solver::{DEFAULT_TOP, Helper},
    wordlists::{DEFAULT_WORDLIST, LoadOptions, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Wordle helper that filters words by clues and ranks them by letter frequency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// How out-of-place letters are entered in interactive mode
    #[arg(long, global = true, value_enum, default_value_t = ClueInputStyle::Combined)]
    clue_input: ClueInputStyle,

    /// Drop repeated words from the word list
    #[arg(long, global = true)]
    dedup: bool,

    /// Number of top suggestions to show
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_TOP)]
    top: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Suggest guesses for one set of clues
    Suggest {
        /// Known letters in place, '.' for unknowns (e.g. a...e)
        #[arg(short, long)]
        pattern: String,

        /// Out-of-place letters at the positions they were tried (e.g. .a.g.)
        #[arg(short, long)]
        misplaced: Vec<String>,

        /// Letters known not to be in the word
        #[arg(short = 'x', long, default_value = "")]
        exclude: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let options = LoadOptions { dedup: cli.dedup };
    let dictionary = load_from_file(&cli.wordlist, options)
        .with_context(|| format!("failed to load word list {}", cli.wordlist.display()))?;
    if dictionary.is_empty() {
        warn!("word list {} has no 5-letter words", cli.wordlist.display());
    }

    let helper = Helper::new(&dictionary);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let config = SessionConfig {
                clue_input: cli.clue_input,
                top: cli.top,
            };
            run_play_command(&helper, config)
        }
        Commands::Suggest {
            pattern,
            misplaced,
            exclude,
        } => {
            let config = SuggestConfig {
                pattern,
                misplaced,
                exclude,
                top: cli.top,
            };
            run_suggest(&helper, &config, io::stdout().lock())?;
            Ok(())
        }
    }
}

fn run_play_command(helper: &Helper<'_>, config: SessionConfig) -> Result<()> {
    let stdin = io::stdin();
    run_session(helper, config, stdin.lock(), io::stdout().lock())
        .context("interactive session failed")?;
    Ok(())
}

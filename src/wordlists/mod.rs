//! Word lists for the helper
//!
//! The dictionary is read from a plain text file, one word per line.

pub mod loader;

pub use loader::{DEFAULT_WORDLIST, LoadOptions, load_from_file, load_from_reader};

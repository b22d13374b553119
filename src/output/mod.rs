//! Terminal output formatting
//!
//! Display utilities for round results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{write_banner, write_gray_letters, write_report};

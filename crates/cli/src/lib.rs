//! Term Ask CLI Library
//!
//! This crate provides the command-line interface for term-ask, exposing the
//! interactive prompts from `term-ask-core` as a small scripting utility.
//! It handles argument parsing, message styling overrides, and exit-code
//! mapping.
//!
//! # Examples
//!
//! The CLI binary (`ta`) can be used from shell scripts:
//!
//! ```bash
//! # Checklist: prints the chosen option texts, one per line
//! ta select -m "Which services?" -o api -o worker -o cron
//!
//! # Preselect entries and keep the answer on screen
//! ta select -m "Targets:" -o staging -o prod --preselect 0 --no-clear
//!
//! # Yes/no question: the answer becomes the exit code (0 = yes, 1 = no)
//! ta confirm -m "Deploy now?" --default-answer yes
//! ```
//!
//! A cancelled prompt (ctrl-c or end of input) exits with code 120.

pub mod cli_args;
pub mod colors;

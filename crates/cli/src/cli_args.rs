//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure for the `ta`
//! binary using the `clap` crate.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for the term-ask CLI tool.
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    #[command(subcommand)]
    pub command: PromptCommand,
}

/// The prompt to run.
#[derive(Subcommand, Debug)]
pub enum PromptCommand {
    /// Show a multi-choice checklist and print the chosen options.
    Select(SelectArgs),
    /// Ask a yes/no question; the answer becomes the exit code.
    Confirm(ConfirmArgs),
}

/// Arguments for the `select` subcommand.
#[derive(clap::Args, Debug)]
pub struct SelectArgs {
    /// The message displayed above the options.
    #[arg(long, short = 'm')]
    pub message: String,

    /// An option to offer. Repeat the flag for each entry.
    #[arg(long = "option", short = 'o', action = clap::ArgAction::Append, required = true)]
    pub options: Vec<String>,

    /// Zero-based index of an option that starts out selected.
    ///
    /// Repeat the flag to preselect several entries. Out-of-range indices
    /// are ignored with a warning.
    #[arg(long = "preselect", short = 'p', action = clap::ArgAction::Append)]
    pub preselected: Vec<usize>,

    /// Leave the completed answer on screen instead of clearing the prompt.
    #[arg(long, action)]
    pub no_clear: bool,

    /// Marker shown beside the active option.
    #[arg(long)]
    pub pointer: Option<String>,

    /// Color name applied to the prompt message (e.g. `green`).
    #[arg(long)]
    pub message_color: Option<String>,

    /// Print the zero-based indices of the chosen options instead of their
    /// text.
    #[arg(long, action)]
    pub print_indices: bool,
}

/// Arguments for the `confirm` subcommand.
#[derive(clap::Args, Debug)]
pub struct ConfirmArgs {
    /// The question to ask.
    #[arg(long, short = 'm')]
    pub message: String,

    /// Answer assumed when the user presses enter without typing one.
    #[arg(long, value_enum)]
    pub default_answer: Option<Answer>,

    /// Leave the completed answer on screen instead of clearing the prompt.
    #[arg(long, action)]
    pub no_clear: bool,

    /// Color name applied to the prompt message (e.g. `green`).
    #[arg(long)]
    pub message_color: Option<String>,
}

/// A yes/no answer as a flag value.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl From<Answer> for bool {
    fn from(answer: Answer) -> Self {
        matches!(answer, Answer::Yes)
    }
}

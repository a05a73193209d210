use std::process::ExitCode;

use clap::Parser;
use itertools::Itertools;
use log::{debug, warn};

use term_ask_cli::cli_args::{Args, ConfirmArgs, PromptCommand, SelectArgs};
use term_ask_cli::colors::message_styler;
use term_ask_core::confirm::{confirm, ConfirmOptions};
use term_ask_core::error::Result;
use term_ask_core::multi_select::{multi_select, MultiSelectItem, MultiSelectOptions};
use term_ask_core::style::{ConfirmStyling, MultiSelectStyling};

fn run_select(args: SelectArgs) -> Result<ExitCode> {
    let mut items: Vec<MultiSelectItem> = args
        .options
        .iter()
        .map(|text| MultiSelectItem::new(text.clone()))
        .collect();

    for &index in &args.preselected {
        match items.get_mut(index) {
            Some(item) => item.selected = true,
            None => warn!("Preselect index {index} is out of range, ignoring it!"),
        }
    }

    let mut styling = MultiSelectStyling {
        message_style: message_styler(args.message_color.as_deref())?,
        ..Default::default()
    };
    if let Some(pointer) = args.pointer {
        styling.pointer = pointer;
    }

    let texts = args.options;
    let mut options = MultiSelectOptions::new(args.message, items).styling(styling);
    if args.no_clear {
        options = options.no_clear();
    }

    // Exits with code 120 when the prompt is cancelled.
    let chosen = multi_select(options)?;
    debug!("selected indices: {chosen:?}");

    if chosen.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }
    if args.print_indices {
        println!("{}", chosen.iter().join("\n"));
    } else {
        println!("{}", chosen.iter().map(|&index| &texts[index]).join("\n"));
    }

    Ok(ExitCode::SUCCESS)
}

fn run_confirm(args: ConfirmArgs) -> Result<ExitCode> {
    let mut options = ConfirmOptions::new(args.message).styling(ConfirmStyling {
        message_style: message_styler(args.message_color.as_deref())?,
    });
    if let Some(default_answer) = args.default_answer {
        options = options.default_answer(default_answer.into());
    }
    if args.no_clear {
        options = options.no_clear();
    }

    // Exits with code 120 when the prompt is cancelled.
    let answered_yes = confirm(options)?;
    debug!("confirmed: {answered_yes}");

    Ok(if answered_yes {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn execute() -> Result<ExitCode> {
    let args = Args::parse();

    match args.command {
        PromptCommand::Select(select_args) => run_select(select_args),
        PromptCommand::Confirm(confirm_args) => run_confirm(confirm_args),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

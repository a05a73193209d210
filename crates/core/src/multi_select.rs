//! Multi-choice checklist prompt.
//!
//! Presents a list of options the user navigates with the arrow keys (or
//! `j`/`k`), toggles with space, and submits with enter. The result is the
//! set of chosen indices in original option order.

use crossterm::style::Stylize;

use crate::driver::{run_interactive, unwrap_or_cancel, PromptMachine};
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::style::MultiSelectStyling;

/// A single option in a multi-selection prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelectItem {
    /// Text to display for the option.
    pub text: String,
    /// Whether the option starts out selected.
    pub selected: bool,
}

impl MultiSelectItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selected: false,
        }
    }

    /// An option that starts out selected.
    pub fn preselected(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selected: true,
        }
    }
}

impl From<&str> for MultiSelectItem {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for MultiSelectItem {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Configuration for a multi-selection prompt.
pub struct MultiSelectOptions {
    /// The message displayed to prompt the user.
    pub message: String,
    /// The set of choices to select from, in display order.
    pub options: Vec<MultiSelectItem>,
    /// Whether to leave the completed answer on screen instead of clearing
    /// the prompt from the output.
    pub no_clear: bool,
    /// Styling for the prompt.
    pub styling: MultiSelectStyling,
}

impl MultiSelectOptions {
    pub fn new(
        message: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<MultiSelectItem>>,
    ) -> Self {
        Self {
            message: message.into(),
            options: options.into_iter().map(Into::into).collect(),
            no_clear: false,
            styling: MultiSelectStyling::default(),
        }
    }

    #[must_use]
    pub fn no_clear(mut self) -> Self {
        self.no_clear = true;
        self
    }

    #[must_use]
    pub fn styling(mut self, styling: MultiSelectStyling) -> Self {
        self.styling = styling;
        self
    }
}

/// Checklist state machine driven by the prompt loop.
pub struct MultiSelectPrompt {
    title: String,
    active_index: usize,
    items: Vec<MultiSelectItem>,
    has_completed: bool,
    styling: MultiSelectStyling,
}

impl MultiSelectPrompt {
    /// Build the prompt state from caller options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoOptions`] for an empty option list; the navigation
    /// and toggle keys have nothing to act on.
    pub fn new(options: MultiSelectOptions) -> Result<Self> {
        if options.options.is_empty() {
            return Err(Error::NoOptions);
        }

        Ok(Self {
            title: options.message,
            active_index: 0,
            items: options.options,
            has_completed: false,
            styling: options.styling,
        })
    }

    fn move_up(&mut self) {
        if self.active_index == 0 {
            self.active_index = self.items.len() - 1;
        } else {
            self.active_index -= 1;
        }
    }

    fn move_down(&mut self) {
        self.active_index = (self.active_index + 1) % self.items.len();
    }

    fn chosen_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.selected)
            .map(|(index, _)| index)
            .collect()
    }
}

impl PromptMachine for MultiSelectPrompt {
    type Output = Vec<usize>;

    fn render(&self) -> Vec<String> {
        let style = &self.styling;
        let mut lines = vec![(style.message_style)(&self.title)];

        if self.has_completed {
            if self.items.iter().any(|item| item.selected) {
                // Pad so the bullets line up where the pointer used to be.
                let padding = " ".repeat(
                    (style.pointer.len() + style.selected.len())
                        .saturating_sub(style.list_bullet.len() + 2),
                );
                for item in self.items.iter().filter(|item| item.selected) {
                    lines.push(format!("{padding}{} {}", style.list_bullet, item.text));
                }
            } else {
                lines.push(" <None>".italic().to_string());
            }
        } else {
            for (i, item) in self.items.iter().enumerate() {
                let prefix = if i == self.active_index {
                    format!("{} ", style.pointer)
                } else {
                    " ".repeat(style.pointer.len() + 1)
                };
                let marker = if item.selected {
                    &style.selected
                } else {
                    &style.unselected
                };
                lines.push(format!("{prefix}{marker} {}", item.text));
            }
        }

        lines
    }

    fn on_key(&mut self, key: Key) -> Option<Vec<usize>> {
        match key {
            Key::Up => self.move_up(),
            Key::Down => self.move_down(),
            Key::Text(text) if text == "k" => self.move_up(),
            Key::Text(text) if text == "j" => self.move_down(),
            Key::Space => {
                let item = &mut self.items[self.active_index];
                item.selected = !item.selected;
            }
            Key::Enter => {
                self.has_completed = true;
                return Some(self.chosen_indices());
            }
            _ => {}
        }
        None
    }
}

/// Prompt the user with a set of options, of which they can select multiple.
///
/// Exits the process with code 120 if input reaches EOF or the user cancels
/// (ctrl-c) before the prompt completes.
///
/// # Errors
///
/// Returns an error when the option list is empty or the terminal cannot be
/// driven.
pub fn multi_select(options: MultiSelectOptions) -> Result<Vec<usize>> {
    Ok(unwrap_or_cancel(try_multi_select(options)?))
}

/// Prompt the user with a set of options, of which they can select multiple.
///
/// Returns `None` if input reaches EOF or the user cancels (ctrl-c) before
/// the prompt completes.
///
/// # Errors
///
/// Returns an error when the option list is empty or the terminal cannot be
/// driven.
pub fn try_multi_select(options: MultiSelectOptions) -> Result<Option<Vec<usize>>> {
    let no_clear = options.no_clear;
    let mut prompt = MultiSelectPrompt::new(options)?;
    run_interactive(&mut prompt, no_clear)
}

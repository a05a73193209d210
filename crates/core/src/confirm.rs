//! Yes/no confirmation prompt.
//!
//! Shows a message with a `(Y/N)` hint, accepts `y`/`n` (typed answers can
//! be erased with backspace before submitting), and resolves on enter. An
//! optional default answer is adopted when enter is pressed on an empty
//! input.

use crate::driver::{run_interactive, unwrap_or_cancel, PromptMachine};
use crate::error::Result;
use crate::keys::Key;
use crate::style::ConfirmStyling;

/// Glyph appended to the edit point while the prompt is active.
const BLOCK_CURSOR: char = '\u{2588}';

/// Configuration for a confirmation prompt.
pub struct ConfirmOptions {
    /// Text to display to the user for confirmation.
    pub message: String,
    /// The answer adopted when enter is pressed without typing one.
    pub default: Option<bool>,
    /// Whether to leave the completed answer on screen instead of clearing
    /// the prompt from the output.
    pub no_clear: bool,
    /// Styling for the prompt.
    pub styling: ConfirmStyling,
}

impl ConfirmOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: None,
            no_clear: false,
            styling: ConfirmStyling::default(),
        }
    }

    #[must_use]
    pub fn default_answer(mut self, default: bool) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn no_clear(mut self) -> Self {
        self.no_clear = true;
        self
    }

    #[must_use]
    pub fn styling(mut self, styling: ConfirmStyling) -> Self {
        self.styling = styling;
        self
    }
}

impl From<&str> for ConfirmOptions {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ConfirmOptions {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Confirmation state machine driven by the prompt loop.
pub struct ConfirmPrompt {
    title: String,
    default: Option<bool>,
    input_text: String,
    has_completed: bool,
    styling: ConfirmStyling,
}

impl ConfirmPrompt {
    pub fn new(options: ConfirmOptions) -> Self {
        Self {
            title: options.message,
            default: options.default,
            input_text: String::new(),
            has_completed: false,
            styling: options.styling,
        }
    }
}

impl PromptMachine for ConfirmPrompt {
    type Output = bool;

    fn render(&self) -> Vec<String> {
        let hint = if self.has_completed {
            ""
        } else {
            match self.default {
                None => "(Y/N) ",
                Some(true) => "(Y/n) ",
                Some(false) => "(y/N) ",
            }
        };
        let cursor = if self.has_completed {
            String::new()
        } else {
            BLOCK_CURSOR.to_string()
        };

        vec![format!(
            "{} {hint}{}{cursor}",
            (self.styling.message_style)(&self.title),
            self.input_text,
        )]
    }

    fn on_key(&mut self, key: Key) -> Option<bool> {
        match key {
            Key::Text(text) if text == "Y" || text == "y" => {
                self.input_text = "Y".to_string();
            }
            Key::Text(text) if text == "N" || text == "n" => {
                self.input_text = "N".to_string();
            }
            Key::Backspace => self.input_text.clear(),
            Key::Enter => {
                if self.input_text.is_empty() {
                    // Without a typed answer, enter only completes when a
                    // default exists.
                    let default = self.default?;
                    self.input_text = if default { "Y" } else { "N" }.to_string();
                }
                self.has_completed = true;
                return Some(self.input_text == "Y");
            }
            _ => {}
        }
        None
    }
}

/// Prompt the user for confirmation (a yes/no answer).
///
/// Exits the process with code 120 if input reaches EOF or the user cancels
/// (ctrl-c) before the prompt completes.
///
/// # Errors
///
/// Returns an error when the terminal cannot be driven.
pub fn confirm(options: impl Into<ConfirmOptions>) -> Result<bool> {
    Ok(unwrap_or_cancel(try_confirm(options)?))
}

/// Prompt the user for confirmation (a yes/no answer).
///
/// Returns `None` if input reaches EOF or the user cancels (ctrl-c) before
/// the prompt completes.
///
/// # Errors
///
/// Returns an error when the terminal cannot be driven.
pub fn try_confirm(options: impl Into<ConfirmOptions>) -> Result<Option<bool>> {
    let options = options.into();
    let no_clear = options.no_clear;
    let mut prompt = ConfirmPrompt::new(options);
    run_interactive(&mut prompt, no_clear)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::plain_message_style;

    fn plain_prompt(options: ConfirmOptions) -> ConfirmPrompt {
        ConfirmPrompt::new(options.styling(ConfirmStyling {
            message_style: plain_message_style(),
        }))
    }

    fn text(s: &str) -> Key {
        Key::Text(s.to_string())
    }

    #[test]
    fn test_enter_without_default_does_not_complete() {
        let mut prompt = plain_prompt(ConfirmOptions::new("Proceed?"));
        assert_eq!(prompt.on_key(Key::Enter), None);
        assert!(!prompt.has_completed);
    }

    #[test]
    fn test_enter_adopts_the_default() {
        let mut prompt = plain_prompt(ConfirmOptions::new("Proceed?").default_answer(true));
        assert_eq!(prompt.on_key(Key::Enter), Some(true));

        let mut prompt = plain_prompt(ConfirmOptions::new("Proceed?").default_answer(false));
        assert_eq!(prompt.on_key(Key::Enter), Some(false));
    }

    #[test]
    fn test_typed_answer_wins_over_the_default() {
        let mut prompt = plain_prompt(ConfirmOptions::new("Proceed?").default_answer(false));
        prompt.on_key(text("y"));
        assert_eq!(prompt.on_key(Key::Enter), Some(true));
    }

    #[test]
    fn test_uppercase_and_lowercase_answers() {
        for answer in ["Y", "y"] {
            let mut prompt = plain_prompt(ConfirmOptions::new("Proceed?"));
            prompt.on_key(text(answer));
            assert_eq!(prompt.on_key(Key::Enter), Some(true));
        }
        for answer in ["N", "n"] {
            let mut prompt = plain_prompt(ConfirmOptions::new("Proceed?"));
            prompt.on_key(text(answer));
            assert_eq!(prompt.on_key(Key::Enter), Some(false));
        }
    }

    #[test]
    fn test_backspace_clears_the_typed_answer() {
        let mut prompt = plain_prompt(ConfirmOptions::new("Proceed?").default_answer(false));
        prompt.on_key(text("Y"));
        prompt.on_key(Key::Backspace);
        assert_eq!(prompt.on_key(Key::Enter), Some(false));
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut prompt = plain_prompt(ConfirmOptions::new("Proceed?"));
        prompt.on_key(Key::Up);
        prompt.on_key(Key::Space);
        prompt.on_key(text("x"));
        assert_eq!(prompt.on_key(Key::Enter), None);
    }

    #[test]
    fn test_hint_reflects_the_default() {
        let no_default = plain_prompt(ConfirmOptions::new("Go?"));
        assert_eq!(no_default.render(), vec![format!("Go? (Y/N) {BLOCK_CURSOR}")]);

        let default_yes = plain_prompt(ConfirmOptions::new("Go?").default_answer(true));
        assert_eq!(default_yes.render(), vec![format!("Go? (Y/n) {BLOCK_CURSOR}")]);

        let default_no = plain_prompt(ConfirmOptions::new("Go?").default_answer(false));
        assert_eq!(default_no.render(), vec![format!("Go? (y/N) {BLOCK_CURSOR}")]);
    }

    #[test]
    fn test_typed_character_is_echoed_before_the_cursor() {
        let mut prompt = plain_prompt(ConfirmOptions::new("Go?"));
        prompt.on_key(text("n"));
        assert_eq!(prompt.render(), vec![format!("Go? (Y/N) N{BLOCK_CURSOR}")]);
    }

    #[test]
    fn test_completed_render_drops_hint_and_cursor() {
        let mut prompt = plain_prompt(ConfirmOptions::new("Go?"));
        prompt.on_key(text("y"));
        prompt.on_key(Key::Enter);
        assert_eq!(prompt.render(), vec!["Go? Y".to_string()]);
    }

    #[test]
    fn test_bare_message_converts_into_options() {
        let options = ConfirmOptions::from("Go?");
        assert_eq!(options.message, "Go?");
        assert_eq!(options.default, None);
        assert!(!options.no_clear);
    }
}

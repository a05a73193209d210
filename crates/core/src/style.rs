//! Display tokens and message styling for prompts.

use crossterm::style::Stylize;

/// A function that applies a style to a string. Commonly, this would apply
/// ANSI styling to the input string.
pub type Styler = Box<dyn Fn(&str) -> String>;

/// The default message style: bold blue.
pub fn default_message_style() -> Styler {
    Box::new(|message: &str| message.blue().bold().to_string())
}

/// A style that leaves the message untouched. Useful when the output is not
/// a color terminal, and in tests.
pub fn plain_message_style() -> Styler {
    Box::new(str::to_string)
}

/// Styling tokens for a multi-selection prompt.
pub struct MultiSelectStyling {
    /// Text displayed next to selected options (default `[x]`).
    pub selected: String,
    /// Text displayed next to unselected options (default `[ ]`).
    pub unselected: String,
    /// Text displayed at the start of the currently active option
    /// (default `>`).
    pub pointer: String,
    /// Bullet used when printing the chosen options after completion; only
    /// visible with `no_clear` (default `-`).
    pub list_bullet: String,
    /// Style applied to the prompt message.
    pub message_style: Styler,
}

impl Default for MultiSelectStyling {
    fn default() -> Self {
        Self {
            selected: "[x]".to_string(),
            unselected: "[ ]".to_string(),
            pointer: ">".to_string(),
            list_bullet: "-".to_string(),
            message_style: default_message_style(),
        }
    }
}

/// Styling tokens for a confirmation prompt.
pub struct ConfirmStyling {
    /// Style applied to the prompt message.
    pub message_style: Styler,
}

impl Default for ConfirmStyling {
    fn default() -> Self {
        Self {
            message_style: default_message_style(),
        }
    }
}

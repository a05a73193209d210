//! Color-name lookup for message styling overrides.

use crossterm::style::{Color, Stylize};
use term_ask_core::error::{Error, Result};
use term_ask_core::style::{default_message_style, Styler};

/// Map a color name from the command line to a crossterm color.
pub fn parse_color_name(name: &str) -> Result<Color> {
    Ok(match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "darkgrey" => Color::DarkGrey,
        "red" => Color::Red,
        "darkred" => Color::DarkRed,
        "green" => Color::Green,
        "darkgreen" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "darkyellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "darkblue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "darkmagenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "darkcyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" => Color::Grey,
        _ => return Err(Error::UnknownColorName(name.to_string())),
    })
}

/// Build the message styler for an optional color-name override.
///
/// Without an override this is the library default (bold blue).
///
/// # Errors
///
/// Returns [`Error::UnknownColorName`] when the name is not in the table.
pub fn message_styler(color_name: Option<&str>) -> Result<Styler> {
    match color_name {
        None => Ok(default_message_style()),
        Some(name) => {
            let color = parse_color_name(name)?;
            Ok(Box::new(move |message: &str| {
                message.with(color).bold().to_string()
            }))
        }
    }
}

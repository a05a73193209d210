use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Terminal IO error: {}", _0)]
    Io(#[from] std::io::Error),

    #[error("Failed to switch raw terminal mode: {}", _0)]
    RawMode(std::io::Error),

    #[error("A selection prompt needs at least one option.")]
    NoOptions,

    #[error("Unknown color name: \"{}\"", _0)]
    UnknownColorName(String),
}

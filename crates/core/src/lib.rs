//! Term Ask Core Library
//!
//! This crate provides interactive, redrawable terminal prompts for
//! command-line tools: a multi-choice checklist and a yes/no confirmation,
//! both driven by raw keystroke input and repainted in place without
//! polluting scrollback.
//!
//! # Key Features
//!
//! - **Raw Key Decoding**: Classifies raw input bytes into logical keys or
//!   literal text
//! - **In-place Repainting**: Redraws multi-line prompts where they stand,
//!   clearing exactly the rows of the previous frame
//! - **Session Serialization**: A process-wide FIFO gate so only one prompt
//!   owns the terminal's raw mode at a time
//! - **Guaranteed Cleanup**: Raw mode and cursor visibility are restored on
//!   every exit path, including failures
//! - **Cancellation**: EOF and ctrl-c yield "no result" from the
//!   `try_`-variants, or exit the process with code 120 from the strict ones
//!
//! # Examples
//!
//! Asking the user to pick from a checklist:
//!
//! ```no_run
//! use term_ask_core::multi_select::{multi_select, MultiSelectOptions};
//!
//! let chosen = multi_select(MultiSelectOptions::new(
//!     "Pick your fruits:",
//!     ["apple", "banana", "cherry"],
//! ))?;
//! println!("chosen indices: {chosen:?}");
//! # Ok::<(), term_ask_core::error::Error>(())
//! ```
//!
//! Asking for confirmation with a default answer:
//!
//! ```no_run
//! use term_ask_core::confirm::{try_confirm, ConfirmOptions};
//!
//! match try_confirm(ConfirmOptions::new("Proceed?").default_answer(true))? {
//!     Some(true) => println!("proceeding"),
//!     Some(false) => println!("stopping"),
//!     None => println!("cancelled"),
//! }
//! # Ok::<(), term_ask_core::error::Error>(())
//! ```

pub mod confirm;
pub mod driver;
pub mod error;
pub mod keys;
pub mod multi_select;
pub mod session;
pub mod style;
pub mod term;

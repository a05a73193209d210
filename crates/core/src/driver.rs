//! Generic read-render-react prompt loop.

use std::io::{stdin, stdout, Read, Write};
use std::process;

use log::debug;

use crate::error::Result;
use crate::keys::{Key, KeyReader};
use crate::session::{session_gate, TerminalModeGuard};
use crate::term::FramePainter;

/// Process exit code used by the exit-on-cancel prompt variants.
///
/// Kept for compatibility; the value carries no meaning beyond "non-zero,
/// distinguishable from success".
pub const CANCEL_EXIT_CODE: i32 = 120;

/// A prompt's state machine: renders frames and reacts to decoded keys.
pub trait PromptMachine {
    type Output;

    /// The display lines for the prompt's current state.
    fn render(&self) -> Vec<String>;

    /// Apply one key, mutating the prompt state. Returning `Some` signals
    /// that the prompt has produced its final answer.
    fn on_key(&mut self, key: Key) -> Option<Self::Output>;
}

/// Run the prompt loop over arbitrary streams.
///
/// Renders strictly alternate with key reads: the current frame is painted,
/// one key is consumed and applied, and the frame is repainted or finalized.
/// Returns `Ok(None)` when input ends (EOF or interrupt) before the machine
/// completes.
pub fn run_loop<R, W, M>(
    input: R,
    output: W,
    machine: &mut M,
    no_clear: bool,
) -> Result<Option<M::Output>>
where
    R: Read,
    W: Write,
    M: PromptMachine,
{
    let mut painter = FramePainter::new(output);
    painter.write_frame(&machine.render())?;

    for key in KeyReader::new(input) {
        if let Some(result) = machine.on_key(key?) {
            painter.write_frame(&[])?;
            if no_clear {
                // Leave the completed answer on screen.
                painter.write_frame(&machine.render())?;
                painter.finish_line()?;
            }
            return Ok(Some(result));
        }
        painter.write_frame(&machine.render())?;
    }

    painter.write_frame(&[])?;
    Ok(None)
}

/// Run a prompt session against the real terminal.
///
/// Waits for its turn on the process-wide session gate, brackets the loop in
/// raw mode with the cursor hidden, and restores the terminal however the
/// loop ends.
pub fn run_interactive<M: PromptMachine>(
    machine: &mut M,
    no_clear: bool,
) -> Result<Option<M::Output>> {
    let _turn = session_gate().acquire();
    let _modes = TerminalModeGuard::engage()?;
    debug!("prompt session started");

    let result = run_loop(stdin().lock(), stdout().lock(), machine, no_clear);
    match &result {
        Ok(Some(_)) => debug!("prompt completed"),
        Ok(None) => debug!("prompt cancelled before completion"),
        Err(e) => debug!("prompt failed: {e}"),
    }
    result
}

/// Unwrap an optional prompt result or stop the process with
/// [`CANCEL_EXIT_CODE`].
///
/// This is the layer that turns "no result" into process termination; the
/// prompt loop itself never exits the process.
pub fn unwrap_or_cancel<T>(result: Option<T>) -> T {
    match result {
        Some(value) => value,
        None => {
            debug!("prompt cancelled; exiting with code {CANCEL_EXIT_CODE}");
            process::exit(CANCEL_EXIT_CODE);
        }
    }
}

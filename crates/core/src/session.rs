//! Prompt session serialization and terminal mode bracketing.
//!
//! Only one prompt may own the terminal's raw mode at a time. Sessions from
//! anywhere in the process queue up on a FIFO gate and run strictly in the
//! order they asked, whether or not earlier sessions succeeded.

use std::io::stdout;
use std::sync::{Condvar, Mutex, MutexGuard};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::debug;

use crate::error::{Error, Result};

/// FIFO gate serializing prompt sessions.
pub struct SessionGate {
    state: Mutex<GateState>,
    turn_over: Condvar,
}

struct GateState {
    next_ticket: u64,
    now_serving: u64,
}

impl SessionGate {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(GateState {
                next_ticket: 0,
                now_serving: 0,
            }),
            turn_over: Condvar::new(),
        }
    }

    /// Take the next ticket and block until every earlier ticket has been
    /// released.
    ///
    /// Dropping the returned guard admits the next caller, regardless of how
    /// the session holding it ended.
    pub fn acquire(&self) -> SessionTurn<'_> {
        let mut state = self.lock_state();
        let ticket = state.next_ticket;
        state.next_ticket += 1;

        while state.now_serving != ticket {
            state = self
                .turn_over
                .wait(state)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
        }

        SessionTurn { gate: self }
    }

    fn lock_state(&self) -> MutexGuard<'_, GateState> {
        // A panicked session must not wedge every later prompt.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII turn held while a prompt session runs.
pub struct SessionTurn<'a> {
    gate: &'a SessionGate,
}

impl Drop for SessionTurn<'_> {
    fn drop(&mut self) {
        let mut state = self.gate.lock_state();
        state.now_serving += 1;
        self.gate.turn_over.notify_all();
    }
}

/// The process-wide gate every interactive prompt queues on.
pub fn session_gate() -> &'static SessionGate {
    static GATE: SessionGate = SessionGate::new();
    &GATE
}

/// Hides the cursor and switches the terminal to raw mode for its lifetime.
///
/// Both are restored on drop, even when the session failed.
pub struct TerminalModeGuard;

impl TerminalModeGuard {
    pub fn engage() -> Result<Self> {
        execute!(stdout(), Hide)?;
        if let Err(e) = enable_raw_mode() {
            let _ = execute!(stdout(), Show);
            return Err(Error::RawMode(e));
        }
        debug!("terminal switched to raw mode, cursor hidden");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        // Restore terminal state on drop
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), Show);
    }
}

//! Run identity and the pause flag.
//!
//! Every `start` and `reset` advances the token. A run holding an
//! older token, or any run while the pause flag is set, is cancelled: it must
//! stop at its next step boundary without touching the array again. This is
//! the only exclusion mechanism between runs.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use thiserror::Error;

use crate::core::actions::cancellation::CancelToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunToken(u64);

impl RunToken {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RunToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "run#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("a sorting run is already active")]
    AlreadyRunning,
}

#[derive(Debug, Default)]
pub struct RunController {
    token: AtomicU64,
    paused: AtomicBool,
    running: AtomicBool,
}

impl RunController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Result<RunToken, RunError> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(RunError::AlreadyRunning);
        }

        // Advance before clearing the pause flag so a paused run never sees
        // itself live again.
        let token = self.token.fetch_add(1, Ordering::SeqCst) + 1;
        self.paused.store(false, Ordering::SeqCst);

        Ok(RunToken(token))
    }

    /// Returns false when no run was live.
    pub fn pause(&self) -> bool {
        if !self.running.load(Ordering::Acquire) {
            return false;
        }

        self.paused.store(true, Ordering::SeqCst);
        self.running.store(false, Ordering::Release);
        true
    }

    /// Invalidates any run in flight and returns the new current token.
    pub fn reset(&self) -> RunToken {
        let token = self.token.fetch_add(1, Ordering::SeqCst) + 1;
        self.paused.store(false, Ordering::SeqCst);
        self.running.store(false, Ordering::Release);
        RunToken(token)
    }

    /// Marks `token` as finished if it is still the live run.
    pub fn finish(&self, token: RunToken) -> bool {
        if self.is_cancelled(token) {
            return false;
        }

        self.running.store(false, Ordering::Release);
        true
    }

    #[must_use]
    pub fn is_cancelled(&self, token: RunToken) -> bool {
        self.paused.load(Ordering::SeqCst) || self.token.load(Ordering::SeqCst) != token.0
    }

    #[must_use]
    pub fn current_token(&self) -> RunToken {
        RunToken(self.token.load(Ordering::SeqCst))
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn cancel_token(&self, token: RunToken) -> RunCancelToken<'_> {
        RunCancelToken {
            controller: self,
            token,
        }
    }
}

/// Borrowed view answering "is this run still live?" for one token.
#[derive(Debug, Clone, Copy)]
pub struct RunCancelToken<'a> {
    controller: &'a RunController,
    token: RunToken,
}

impl CancelToken for RunCancelToken<'_> {
    fn is_cancelled(&self) -> bool {
        self.controller.is_cancelled(self.token)
    }
}

//! Request context carrying cancellation and an optional deadline.
//!
//! A [`Context`] is handed unmodified to every store call. Store clients
//! consult [`Context::err`] before doing work; nothing else in fcr checks it.
//! Cancellation propagates from a context to every context derived from it.

use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use crate::error::StoreError;

/// Cancellation/deadline-bearing request context.
#[derive(Debug, Clone)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Context {
            token: CancellationToken::new(),
            deadline: None,
        }
    }

    /// A derived context that expires after `timeout`.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// A derived context that expires at `deadline`, or earlier if the
    /// parent already has an earlier deadline.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(parent) if parent < deadline => parent,
            _ => deadline,
        };
        Context {
            token: self.token.child_token(),
            deadline: Some(deadline),
        }
    }

    /// A derived context plus the handle that cancels it.
    pub fn with_cancel(&self) -> (Context, CancelHandle) {
        let child = self.child();
        let handle = CancelHandle {
            token: child.token.clone(),
        };
        (child, handle)
    }

    /// A derived context sharing this context's deadline.
    pub fn child(&self) -> Self {
        Context {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Why this context is done, if it is.
    ///
    /// Cancellation wins over an expired deadline.
    pub fn err(&self) -> Option<StoreError> {
        if self.token.is_cancelled() {
            return Some(StoreError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(StoreError::DeadlineExceeded),
            _ => None,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::background()
    }
}

/// Cancels the context it was created with, and everything derived from it.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }
}

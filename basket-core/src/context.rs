//! Caller-controlled cancellation and deadlines.
//!
//! The engine performs no I/O of its own, so a [`RequestContext`] is only
//! consulted on entry: a request that is already cancelled or past its
//! deadline fails fast instead of computing on stale input.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use thiserror::Error;

/// Why a request was refused by its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    /// The caller cancelled the request.
    #[error("request was cancelled")]
    Cancelled,
    /// The request's deadline has passed.
    #[error("request deadline exceeded")]
    DeadlineExceeded,
}

/// Cancellation flag and optional deadline for one request.
///
/// Clones share the same flag, so a clone handed to another thread can cancel
/// the original.
///
/// # Examples
/// ```
/// use basket_core::{ContextError, RequestContext};
///
/// let context = RequestContext::new();
/// assert!(context.check().is_ok());
///
/// let handle = context.clone();
/// handle.cancel();
/// assert_eq!(context.check(), Err(ContextError::Cancelled));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context with no deadline that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an absolute deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set a deadline `timeout` from now.
    ///
    /// A timeout too large to represent leaves the context without a deadline.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// Request cancellation for this context and all of its clones.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether [`RequestContext::cancel`] has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// The deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fail if the request is cancelled or its deadline has passed.
    pub fn check(&self) -> Result<(), ContextError> {
        if self.is_cancelled() {
            return Err(ContextError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(ContextError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fresh_context_passes() {
        assert_eq!(RequestContext::new().check(), Ok(()));
    }

    #[rstest]
    fn expired_deadline_fails() {
        let context = RequestContext::new().with_deadline(Instant::now());
        assert_eq!(context.check(), Err(ContextError::DeadlineExceeded));
    }

    #[rstest]
    fn distant_deadline_passes() {
        let context = RequestContext::new().with_timeout(Duration::from_secs(3600));
        assert_eq!(context.check(), Ok(()));
    }

    #[rstest]
    fn cancellation_wins_over_deadline() {
        let context = RequestContext::new().with_deadline(Instant::now());
        context.cancel();
        assert_eq!(context.check(), Err(ContextError::Cancelled));
    }

    #[rstest]
    fn cancellation_crosses_threads() {
        let context = RequestContext::new();
        let remote = context.clone();
        std::thread::spawn(move || remote.cancel())
            .join()
            .expect("cancelling thread");
        assert!(context.is_cancelled());
    }
}

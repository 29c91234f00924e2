//! Progress and cancellation hooks for long-running estimations

use crate::error::{LinkRankError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Receives progress from an estimator.
///
/// `start` is called once with the total number of units (walks or
/// iterations), `inc` once per completed unit, `finish` at the end. `inc`
/// may be called from several threads at once.
pub trait ProgressSink: Send + Sync {
    fn start(&self, _total: u64) {}

    fn inc(&self, delta: u64);

    fn finish(&self) {}
}

/// Progress sink that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn inc(&self, _delta: u64) {}
}

/// Shared flag used to abort an estimation between walks or iterations
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// What an estimator reports to while it runs
#[derive(Clone)]
pub struct Observer<'a> {
    progress: &'a dyn ProgressSink,
    cancel: CancelToken,
}

impl<'a> Observer<'a> {
    pub fn new(progress: &'a dyn ProgressSink, cancel: CancelToken) -> Self {
        Self { progress, cancel }
    }

    pub(crate) fn start(&self, total: u64) {
        self.progress.start(total);
    }

    pub(crate) fn tick(&self) {
        self.progress.inc(1);
    }

    pub(crate) fn finish(&self) {
        self.progress.finish();
    }

    pub(crate) fn check(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            Err(LinkRankError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Observer<'static> {
    /// No progress reporting, never cancelled
    pub fn silent() -> Self {
        Self::new(&NoProgress, CancelToken::new())
    }
}

impl Default for Observer<'static> {
    fn default() -> Self {
        Self::silent()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_token_shared_between_clones() {
        let token = CancelToken::new();
        let observer = Observer::new(&NoProgress, token.clone());
        assert!(observer.check().is_ok());

        token.cancel();
        assert!(matches!(observer.check(), Err(LinkRankError::Cancelled)));
    }
}

//! Background record loading.
//!
//! The provider runs on its own thread so the event loop keeps drawing while
//! the request is in flight. The result comes back over a channel the event
//! loop drains on its timer tick. Loads can be cancelled and retried.

use crate::model::{LoadError, Record};
use crate::source::RecordProvider;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Granularity of cancellation checks while sleeping between attempts.
const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Outcome delivered by a load.
pub type LoadResult = Result<Vec<Record>, LoadError>;

/// How many times to try and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Values below 1 mean 1.
    pub attempts: u32,
    /// Delay before retry `n` is `backoff * n` (linear).
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    /// One attempt, no retry.
    fn default() -> Self {
        Self {
            attempts: 1,
            backoff: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    fn delay_before(&self, retry: u32) -> Duration {
        self.backoff * retry
    }
}

/// Handle to an in-flight load.
#[derive(Debug)]
pub struct LoadHandle {
    rx: Receiver<LoadResult>,
    cancel: Arc<AtomicBool>,
    delivered: bool,
}

impl LoadHandle {
    /// Take the result if it has arrived. Non-blocking.
    ///
    /// Returns `Some` exactly once. A loader thread that died without
    /// reporting is delivered as `LoadError::Cancelled`.
    pub fn try_take(&mut self) -> Option<LoadResult> {
        if self.delivered {
            return None;
        }
        let result = match self.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(LoadError::Cancelled),
        };
        self.delivered = true;
        Some(result)
    }

    /// Ask the loader to stop. Takes effect between attempts; a request
    /// already on the wire is allowed to finish but its result is dropped.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }
}

/// Run `provider` on a background thread under `policy`.
pub fn spawn_load(provider: Box<dyn RecordProvider>, policy: RetryPolicy) -> LoadHandle {
    let (tx, rx) = mpsc::channel();
    let cancel = Arc::new(AtomicBool::new(false));
    let cancel_flag = Arc::clone(&cancel);

    thread::spawn(move || {
        let result = run_with_retry(provider.as_ref(), policy, &cancel_flag);
        // Receiver may be gone if the UI already exited.
        let _ = tx.send(result);
    });

    LoadHandle {
        rx,
        cancel,
        delivered: false,
    }
}

/// Run `provider` until it succeeds, fails permanently, runs out of
/// attempts, or `cancel` is set.
pub fn run_with_retry(
    provider: &dyn RecordProvider,
    policy: RetryPolicy,
    cancel: &AtomicBool,
) -> LoadResult {
    let attempts = policy.attempts.max(1);
    let source = provider.describe();
    let mut last_error = LoadError::Cancelled;

    for attempt in 1..=attempts {
        if attempt > 1 && !sleep_unless_cancelled(policy.delay_before(attempt - 1), cancel) {
            break;
        }
        if cancel.load(Ordering::SeqCst) {
            break;
        }

        debug!(%source, attempt, attempts, "Load attempt");
        match provider.fetch() {
            Ok(records) => {
                if cancel.load(Ordering::SeqCst) {
                    return Err(LoadError::Cancelled);
                }
                info!(%source, count = records.len(), attempt, "Load succeeded");
                return Ok(records);
            }
            Err(err) => {
                warn!(%source, attempt, error = %err, "Load attempt failed");
                let retryable = err.is_retryable();
                last_error = err;
                if !retryable {
                    break;
                }
            }
        }
    }

    if cancel.load(Ordering::SeqCst) {
        return Err(LoadError::Cancelled);
    }
    Err(last_error)
}

/// Sleep for `total`, waking early on cancel. Returns false if cancelled.
fn sleep_unless_cancelled(total: Duration, cancel: &AtomicBool) -> bool {
    let mut remaining = total;
    while !remaining.is_zero() {
        if cancel.load(Ordering::SeqCst) {
            return false;
        }
        let step = remaining.min(CANCEL_POLL_INTERVAL);
        thread::sleep(step);
        remaining -= step;
    }
    !cancel.load(Ordering::SeqCst)
}

//! Cancellable repeating task on a dedicated thread.
//!
//! The task thread is driven by a `crossbeam_channel::tick` source and
//! selects on it together with a cancellation channel.  Exactly one callback
//! runs at a time, always on the task thread, so callbacks never overlap.
//!
//! ```text
//! spawn ──period──▶ f() ──period──▶ f() ── … ──▶ Break / cancel
//! ```

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Sender, select};
use tracing::warn;

/// Handle to a callback that fires every `period` until cancelled or until
/// it returns [`ControlFlow::Break`].
///
/// Dropping the handle cancels the task.
pub struct RepeatingTask {
    /// Dropped on cancel; disconnection wakes the task thread's `select!`.
    cancel_tx: Option<Sender<()>>,
    cancelled: Arc<AtomicBool>,
    finished:  Arc<AtomicBool>,
    handle:    Option<JoinHandle<()>>,
}

/// Marks the task finished however the thread exits, including by panic.
struct FinishGuard(Arc<AtomicBool>);

impl Drop for FinishGuard {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Release);
    }
}

impl RepeatingTask {
    /// Spawn a thread named `name` that calls `f` every `period`, the first
    /// call one full period from now.
    pub fn spawn<F>(name: &str, period: Duration, mut f: F) -> std::io::Result<Self>
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = crossbeam_channel::bounded::<()>(0);
        let cancelled = Arc::new(AtomicBool::new(false));
        let finished  = Arc::new(AtomicBool::new(false));

        let task_cancelled = Arc::clone(&cancelled);
        let task_finished  = Arc::clone(&finished);

        let handle = thread::Builder::new()
            .name(name.to_owned())
            .spawn(move || {
                let _guard = FinishGuard(task_finished);
                let ticker = crossbeam_channel::tick(period);
                loop {
                    select! {
                        recv(cancel_rx) -> _ => break,
                        recv(ticker) -> _ => {
                            // `select!` picks among ready arms at random, so a
                            // cancel that raced the tick is re-checked here.
                            if task_cancelled.load(Ordering::Acquire) {
                                break;
                            }
                            if f().is_break() {
                                break;
                            }
                        }
                    }
                }
            })?;

        Ok(Self {
            cancel_tx: Some(cancel_tx),
            cancelled,
            finished,
            handle: Some(handle),
        })
    }

    /// Stop the task.
    ///
    /// When called from any thread other than the task thread, this blocks
    /// until an in-flight callback completes; no callback starts after it
    /// returns.  When called from inside the callback itself, the task ends as
    /// soon as that callback returns.  Idempotent.
    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::Release);
        self.cancel_tx.take();

        let Some(handle) = self.handle.take() else {
            return;
        };
        if handle.thread().id() == thread::current().id() {
            // Re-entrant cancel: joining ourselves would deadlock.  The thread
            // observes the flag once the callback returns and exits on its own.
            return;
        }
        if handle.join().is_err() {
            warn!("repeating task thread panicked");
        }
    }

    /// `true` once the task thread has exited (break, cancel, or panic).
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }

    /// `true` once `cancel` has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl Drop for RepeatingTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

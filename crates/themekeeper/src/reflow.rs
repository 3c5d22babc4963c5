//! Deferred, fire-and-forget tasks.
//!
//! Some rendering engines only pick up a changed root attribute after a
//! forced layout pass. The manager asks a [`Scheduler`] to run the surface's
//! reflow hook a short while after each theme application. Scheduled tasks
//! are never awaited or cancelled.

use std::thread;
use std::time::Duration;

use tracing::{trace, warn};

/// Delay between applying a theme and notifying the surface.
pub const DEFAULT_REFLOW_DELAY: Duration = Duration::from_millis(100);

/// A one-shot task handed to a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs tasks after a delay without blocking the caller.
pub trait Scheduler: Send + Sync {
    fn defer(&self, delay: Duration, task: Task);
}

/// Runs each task on its own detached thread after sleeping for the delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadScheduler;

impl Scheduler for ThreadScheduler {
    fn defer(&self, delay: Duration, task: Task) {
        let spawned = thread::Builder::new()
            .name("themekeeper-reflow".into())
            .spawn(move || {
                thread::sleep(delay);
                trace!(?delay, "running deferred reflow");
                task();
            });
        if let Err(err) = spawned {
            warn!(%err, "could not spawn reflow thread; skipping notification");
        }
    }
}

/// Runs each task inline, ignoring the delay.
///
/// Suitable for environments that restyle without a forced reflow, and for
/// tests that need to observe the notification synchronously.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl Scheduler for Immediate {
    fn defer(&self, _delay: Duration, task: Task) {
        task();
    }
}

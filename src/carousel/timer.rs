//! Cancellable handle for the auto-advance task

use tokio::task::JoinHandle;

/// Owns a spawned tick task and aborts it on cancel or drop
#[derive(Debug)]
pub struct TickHandle {
    task: JoinHandle<()>,
    cancelled: bool,
}

impl TickHandle {
    pub fn new(task: JoinHandle<()>) -> Self {
        Self {
            task,
            cancelled: false,
        }
    }

    /// Stop the task. Calling this again is a no-op.
    pub fn cancel(&mut self) {
        if !self.cancelled {
            self.task.abort();
            self.cancelled = true;
        }
    }

    /// True once the task has actually stopped running
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

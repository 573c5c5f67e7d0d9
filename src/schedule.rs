//! Cancellable deferred tasks.
//!
//! Deferred work (the announcer's delayed write, a modal's post-open focus
//! call) is registered here instead of being fired from bare timers. Every
//! task returns a [`TaskHandle`] so the owner can cancel it on teardown —
//! a stale timer can then never run against a destroyed element.

use std::time::{Duration, Instant};

use slotmap::{new_key_type, SlotMap};

use crate::dom::Document;

new_key_type! {
    /// Slot key for a scheduled task.
    pub struct TaskId;
}

/// Handle to a scheduled task, used to cancel it. Cancelling a task that
/// already ran (or was already cancelled) is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(TaskId);

struct ScheduledTask {
    due: Instant,
    seq: u64,
    callback: Box<dyn FnOnce(&mut Document)>,
}

/// Queue of due-timestamped callbacks over the document.
///
/// Single-threaded by design: tasks run on the same thread that mutates
/// the document, driven either by [`run_due`](Scheduler::run_due) from an
/// event loop or by the async driver in the application context.
pub struct Scheduler {
    tasks: SlotMap<TaskId, ScheduledTask>,
    next_seq: u64,
}

impl Scheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self {
            tasks: SlotMap::with_key(),
            next_seq: 0,
        }
    }

    /// Schedule `callback` to run `delay` from now.
    pub fn schedule(
        &mut self,
        delay: Duration,
        callback: impl FnOnce(&mut Document) + 'static,
    ) -> TaskHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        let id = self.tasks.insert(ScheduledTask {
            due: Instant::now() + delay,
            seq,
            callback: Box::new(callback),
        });
        TaskHandle(id)
    }

    /// Cancel a scheduled task. Returns whether it was still pending.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        self.tasks.remove(handle.0).is_some()
    }

    /// Whether the task behind `handle` is still pending.
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.contains_key(handle.0)
    }

    /// Run every task due at or before `now`, in due order.
    ///
    /// Returns the number of tasks that ran.
    pub fn run_due(&mut self, now: Instant, doc: &mut Document) -> usize {
        let mut due: Vec<(Instant, u64, TaskId)> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.due <= now)
            .map(|(id, task)| (task.due, task.seq, id))
            .collect();
        due.sort();

        let count = due.len();
        for (_, _, id) in due {
            if let Some(task) = self.tasks.remove(id) {
                (task.callback)(doc);
            }
        }
        count
    }

    /// The earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.values().map(|task| task.due).min()
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no tasks are pending.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("pending", &self.tasks.len())
            .finish()
    }
}

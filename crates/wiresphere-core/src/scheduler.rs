//! Cancellable repeating tasks driven by the frame clock.
//!
//! Nothing runs on its own thread: the host polls [`Scheduler::due`]
//! once per frame with the current time and acts on the returned tasks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Liveness flag shared between a scheduled task and its owner.
///
/// Cloning the handle shares the flag. [`TaskHandle::cancel`] is
/// idempotent and takes effect before the next poll.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    alive: Arc<AtomicBool>,
}

impl TaskHandle {
    fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Release);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

struct Entry<T> {
    task: T,
    interval_ms: f64,
    next_due_ms: f64,
    handle: TaskHandle,
}

/// A set of repeating tasks keyed by interval.
pub struct Scheduler<T> {
    entries: Vec<Entry<T>>,
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Schedule `task` every `interval_ms`, first due at `first_due_ms`.
    ///
    /// An interval of zero fires on every poll.
    pub fn every(&mut self, task: T, interval_ms: f64, first_due_ms: f64) -> TaskHandle {
        let handle = TaskHandle::new();
        self.entries.push(Entry {
            task,
            interval_ms: interval_ms.max(0.0),
            next_due_ms: first_due_ms,
            handle: handle.clone(),
        });
        handle
    }

    /// Tasks due at `now_ms`, in scheduling order.
    ///
    /// Cancelled tasks are dropped here and never returned. A task that
    /// fell several intervals behind fires once and catches up.
    pub fn due(&mut self, now_ms: f64) -> Vec<T> {
        self.entries.retain(|e| e.handle.is_alive());

        let mut fired = Vec::new();
        for entry in &mut self.entries {
            if now_ms < entry.next_due_ms {
                continue;
            }
            fired.push(entry.task.clone());
            if entry.interval_ms > 0.0 {
                let behind = ((now_ms - entry.next_due_ms) / entry.interval_ms).floor() + 1.0;
                entry.next_due_ms += behind * entry.interval_ms;
            }
        }
        fired
    }

    /// Cancel every task. Idempotent.
    pub fn cancel_all(&mut self) {
        for entry in self.entries.drain(..) {
            entry.handle.cancel();
        }
    }

    /// Number of live tasks.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.handle.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Task {
        Frame,
        Stats,
    }

    #[test]
    fn zero_interval_fires_every_poll() {
        let mut s = Scheduler::new();
        s.every(Task::Frame, 0.0, 0.0);
        assert_eq!(s.due(0.0), vec![Task::Frame]);
        assert_eq!(s.due(0.0), vec![Task::Frame]);
        assert_eq!(s.due(16.0), vec![Task::Frame]);
    }

    #[test]
    fn interval_task_fires_on_schedule() {
        let mut s = Scheduler::new();
        s.every(Task::Stats, 1000.0, 1000.0);
        assert!(s.due(999.0).is_empty());
        assert_eq!(s.due(1000.0), vec![Task::Stats]);
        assert!(s.due(1500.0).is_empty());
        assert_eq!(s.due(2001.0), vec![Task::Stats]);
    }

    #[test]
    fn late_task_fires_once_and_catches_up() {
        let mut s = Scheduler::new();
        s.every(Task::Stats, 100.0, 100.0);
        assert_eq!(s.due(950.0), vec![Task::Stats]);
        assert!(s.due(999.0).is_empty());
        assert_eq!(s.due(1000.0), vec![Task::Stats]);
    }

    #[test]
    fn cancelled_task_never_fires() {
        let mut s = Scheduler::new();
        let frame = s.every(Task::Frame, 0.0, 0.0);
        s.every(Task::Stats, 0.0, 0.0);
        frame.cancel();
        assert!(!frame.is_alive());
        assert_eq!(s.due(10.0), vec![Task::Stats]);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut s: Scheduler<Task> = Scheduler::new();
        let handle = s.every(Task::Frame, 0.0, 0.0);
        handle.cancel();
        handle.cancel();
        s.cancel_all();
        s.cancel_all();
        assert!(!handle.is_alive());
        assert!(s.is_empty());
        assert!(s.due(100.0).is_empty());
    }

    #[test]
    fn cancel_all_kills_outstanding_handles() {
        let mut s = Scheduler::new();
        let a = s.every(Task::Frame, 0.0, 0.0);
        let b = a.clone();
        s.cancel_all();
        assert!(!a.is_alive());
        assert!(!b.is_alive());
    }
}

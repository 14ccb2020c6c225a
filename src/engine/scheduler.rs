//! One-shot deferred execution.
//!
//! The engine's only suspension point is the first-turn draw. It is
//! expressed against this seam so production code gets a real timer while
//! tests drive completions deterministically.

use std::sync::Mutex;
use std::thread;
use std::time::Duration;

/// A deferred task.
pub type Task = Box<dyn FnOnce() + Send>;

/// Schedules a task to run once, after a delay, without blocking the
/// caller.
///
/// No completion ordering is guaranteed across tasks; the engine guards
/// against stale completions itself.
pub trait DelayScheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Task);
}

/// Default scheduler: a spawned thread that sleeps out the delay.
pub struct ThreadScheduler;

impl DelayScheduler for ThreadScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        thread::spawn(move || {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            task();
        });
    }
}

/// Runs tasks immediately on the calling thread, ignoring the delay.
///
/// For tests and hosts that want `start` to settle synchronously.
pub struct InlineScheduler;

impl DelayScheduler for InlineScheduler {
    fn schedule(&self, _delay: Duration, task: Task) {
        task();
    }
}

/// Queues tasks until the owner fires them.
///
/// Lets tests interleave engine calls with timer completions, e.g. to
/// exercise a completion that fires after a newer `start`.
#[derive(Default)]
pub struct ManualScheduler {
    queue: Mutex<Vec<Task>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.lock().expect("scheduler lock poisoned").len()
    }

    /// Run the oldest queued task, if any. Returns whether one ran.
    pub fn fire_next(&self) -> bool {
        let task = {
            let mut queue = self.queue.lock().expect("scheduler lock poisoned");
            if queue.is_empty() {
                None
            } else {
                Some(queue.remove(0))
            }
        };

        match task {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Run every queued task in order.
    pub fn fire_all(&self) {
        while self.fire_next() {}
    }
}

impl DelayScheduler for ManualScheduler {
    fn schedule(&self, _delay: Duration, task: Task) {
        self.queue
            .lock()
            .expect("scheduler lock poisoned")
            .push(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_thread_scheduler_runs_task() {
        let (tx, rx) = mpsc::channel();
        ThreadScheduler.schedule(
            Duration::from_millis(1),
            Box::new(move || tx.send(()).unwrap()),
        );

        rx.recv_timeout(Duration::from_secs(5)).unwrap();
    }

    #[test]
    fn test_inline_scheduler_runs_synchronously() {
        let (tx, rx) = mpsc::channel();
        InlineScheduler.schedule(
            Duration::from_secs(3600),
            Box::new(move || tx.send(()).unwrap()),
        );

        // Ran before schedule returned, delay ignored.
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn test_manual_scheduler_fires_in_order() {
        let scheduler = ManualScheduler::new();
        let (tx, rx) = mpsc::channel();

        for i in 0..3 {
            let tx = tx.clone();
            scheduler.schedule(Duration::ZERO, Box::new(move || tx.send(i).unwrap()));
        }
        assert_eq!(scheduler.pending(), 3);

        assert!(scheduler.fire_next());
        assert_eq!(rx.try_recv(), Ok(0));

        scheduler.fire_all();
        assert_eq!(rx.try_recv(), Ok(1));
        assert_eq!(rx.try_recv(), Ok(2));
        assert!(!scheduler.fire_next());
    }
}

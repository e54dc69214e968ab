//! Cooperative task scheduling.
//!
//! Everything runs on one thread. A [`Scheduler`] hands out cancellable
//! timeouts and animation-frame callbacks; the browser implementation lives
//! in `utils::scheduler`, and [`ManualScheduler`] drives a virtual clock in
//! tests.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

/// Opaque handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(pub(crate) u64);

/// Source of deferred execution.
pub trait Scheduler {
    /// Runs `task` once after `delay`.
    fn set_timeout(&self, delay: Duration, task: Task) -> TaskHandle;

    /// Runs `task` before the next repaint.
    fn request_frame(&self, task: Task) -> TaskHandle;

    /// Cancels a pending task. Cancelling a finished task is a no-op.
    fn cancel(&self, handle: TaskHandle);
}

// ============================================================================
// Debouncer
// ============================================================================

/// Runs only the most recent call once no new call arrives for `wait`.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    wait: Duration,
    pending: Rc<Cell<Option<TaskHandle>>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, wait: Duration) -> Self {
        Self {
            scheduler,
            wait,
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Replaces any pending call with `task`.
    pub fn call(&self, task: impl FnOnce() + 'static) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        let pending = Rc::clone(&self.pending);
        let handle = self.scheduler.set_timeout(
            self.wait,
            Box::new(move || {
                pending.set(None);
                task();
            }),
        );
        self.pending.set(Some(handle));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}

// ============================================================================
// FrameThrottle
// ============================================================================

/// Coalesces calls into at most one run per animation frame.
///
/// Each call cancels the pending frame callback and requests a new one, so
/// the last task submitted before the frame wins.
pub struct FrameThrottle<S: Scheduler> {
    scheduler: S,
    pending: Rc<Cell<Option<TaskHandle>>>,
}

impl<S: Scheduler> FrameThrottle<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn call(&self, task: impl FnOnce() + 'static) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        let pending = Rc::clone(&self.pending);
        let handle = self.scheduler.request_frame(Box::new(move || {
            pending.set(None);
            task();
        }));
        self.pending.set(Some(handle));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}

// ============================================================================
// ManualScheduler
// ============================================================================

#[cfg(any(test, feature = "mock"))]
pub use manual::ManualScheduler;

#[cfg(any(test, feature = "mock"))]
mod manual {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::{Scheduler, Task, TaskHandle};

    struct Timer {
        due_ms: u64,
        handle: TaskHandle,
        task: Task,
    }

    #[derive(Default)]
    struct Inner {
        now_ms: u64,
        next_id: u64,
        timers: Vec<Timer>,
        frames: Vec<(TaskHandle, Task)>,
    }

    /// Virtual-clock scheduler for tests.
    ///
    /// Timeouts run when [`advance`](Self::advance) moves the clock past
    /// their due time, in due order (ties in scheduling order). Frame
    /// callbacks run on [`run_frame`](Self::run_frame).
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        inner: Rc<RefCell<Inner>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now_ms(&self) -> u64 {
            self.inner.borrow().now_ms
        }

        /// Number of pending timeouts.
        pub fn pending_timeouts(&self) -> usize {
            self.inner.borrow().timers.len()
        }

        /// Number of pending frame callbacks.
        pub fn pending_frames(&self) -> usize {
            self.inner.borrow().frames.len()
        }

        /// Moves the clock forward, running every timeout that becomes due.
        ///
        /// Tasks scheduled by running tasks also run if they fall due within
        /// the window.
        pub fn advance(&self, ms: u64) {
            let target = self.inner.borrow().now_ms + ms;
            loop {
                let next = {
                    let mut inner = self.inner.borrow_mut();
                    let position = inner
                        .timers
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due_ms <= target)
                        .min_by_key(|(_, t)| (t.due_ms, t.handle.0))
                        .map(|(i, _)| i);
                    position.map(|i| {
                        let timer = inner.timers.remove(i);
                        inner.now_ms = inner.now_ms.max(timer.due_ms);
                        timer.task
                    })
                };
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
            self.inner.borrow_mut().now_ms = target;
        }

        /// Runs every frame callback requested before this call.
        pub fn run_frame(&self) {
            let frames = std::mem::take(&mut self.inner.borrow_mut().frames);
            for (_, task) in frames {
                task();
            }
        }

        fn next_handle(inner: &mut Inner) -> TaskHandle {
            inner.next_id += 1;
            TaskHandle(inner.next_id)
        }
    }

    impl Scheduler for ManualScheduler {
        fn set_timeout(&self, delay: Duration, task: Task) -> TaskHandle {
            let mut inner = self.inner.borrow_mut();
            let handle = Self::next_handle(&mut inner);
            let due_ms = inner.now_ms + delay.as_millis() as u64;
            inner.timers.push(Timer {
                due_ms,
                handle,
                task,
            });
            handle
        }

        fn request_frame(&self, task: Task) -> TaskHandle {
            let mut inner = self.inner.borrow_mut();
            let handle = Self::next_handle(&mut inner);
            inner.frames.push((handle, task));
            handle
        }

        fn cancel(&self, handle: TaskHandle) {
            let mut inner = self.inner.borrow_mut();
            inner.timers.retain(|t| t.handle != handle);
            inner.frames.retain(|(h, _)| *h != handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn test_manual_timeouts_run_in_due_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (delay, tag) in [(30, "c"), (10, "a"), (20, "b")] {
            let log = Rc::clone(&log);
            scheduler.set_timeout(
                Duration::from_millis(delay),
                Box::new(move || log.borrow_mut().push(tag)),
            );
        }

        scheduler.advance(15);
        assert_eq!(*log.borrow(), vec!["a"]);
        scheduler.advance(100);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(scheduler.now_ms(), 115);
    }

    #[test]
    fn test_manual_cancel() {
        let scheduler = ManualScheduler::new();
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let handle = scheduler.set_timeout(
            Duration::from_millis(5),
            Box::new(move || flag.set(true)),
        );
        scheduler.cancel(handle);
        scheduler.advance(10);
        assert!(!ran.get());
        assert_eq!(scheduler.pending_timeouts(), 0);
    }

    #[test]
    fn test_debouncer_runs_last_call_once() {
        let scheduler = ManualScheduler::new();
        let debouncer = Debouncer::new(scheduler.clone(), Duration::from_millis(250));
        let runs = Rc::new(RefCell::new(Vec::new()));

        for i in 0..5 {
            let runs = Rc::clone(&runs);
            debouncer.call(move || runs.borrow_mut().push(i));
            scheduler.advance(50);
        }
        assert!(debouncer.is_pending());
        assert!(runs.borrow().is_empty());

        scheduler.advance(250);
        assert_eq!(*runs.borrow(), vec![4]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_debouncer_separate_windows() {
        let scheduler = ManualScheduler::new();
        let debouncer = Debouncer::new(scheduler.clone(), Duration::from_millis(250));
        let count = Rc::new(Cell::new(0));

        for _ in 0..2 {
            let count = Rc::clone(&count);
            debouncer.call(move || count.set(count.get() + 1));
            scheduler.advance(300);
        }
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_frame_throttle_coalesces() {
        let scheduler = ManualScheduler::new();
        let throttle = FrameThrottle::new(scheduler.clone());
        let count = Rc::new(Cell::new(0));

        for _ in 0..10 {
            let count = Rc::clone(&count);
            throttle.call(move || count.set(count.get() + 1));
        }
        assert_eq!(scheduler.pending_frames(), 1);

        scheduler.run_frame();
        assert_eq!(count.get(), 1);
        assert!(!throttle.is_pending());

        scheduler.run_frame();
        assert_eq!(count.get(), 1);
    }
}

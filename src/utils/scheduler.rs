//! Browser [`Scheduler`] backed by `setTimeout` and `requestAnimationFrame`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::{
    AnimationFrameRequestHandle, TimeoutHandle, request_animation_frame_with_handle,
    set_timeout_with_handle,
};

use crate::core::{Scheduler, TaskHandle, schedule::Task};
use crate::utils::console;

enum Pending {
    Timeout(TimeoutHandle),
    Frame(AnimationFrameRequestHandle),
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    pending: HashMap<u64, Pending>,
}

/// Scheduler for the live page.
///
/// Keeps the browser handle of every pending task so it can be cancelled by
/// [`TaskHandle`]. Entries are dropped when their task runs.
#[derive(Clone, Default)]
pub struct BrowserScheduler {
    inner: Rc<RefCell<Inner>>,
}

impl BrowserScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn reserve(&self) -> u64 {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        inner.next_id
    }

    /// Wraps `task` so it forgets its own entry before running.
    fn tracked(&self, id: u64, task: Task) -> impl FnOnce() + 'static {
        let inner = Rc::clone(&self.inner);
        move || {
            inner.borrow_mut().pending.remove(&id);
            task();
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn set_timeout(&self, delay: Duration, task: Task) -> TaskHandle {
        let id = self.reserve();
        match set_timeout_with_handle(self.tracked(id, task), delay) {
            Ok(handle) => {
                self.inner
                    .borrow_mut()
                    .pending
                    .insert(id, Pending::Timeout(handle));
            }
            Err(e) => console::warn(&format!("setTimeout failed: {:?}", e)),
        }
        TaskHandle(id)
    }

    fn request_frame(&self, task: Task) -> TaskHandle {
        let id = self.reserve();
        match request_animation_frame_with_handle(self.tracked(id, task)) {
            Ok(handle) => {
                self.inner
                    .borrow_mut()
                    .pending
                    .insert(id, Pending::Frame(handle));
            }
            Err(e) => console::warn(&format!("requestAnimationFrame failed: {:?}", e)),
        }
        TaskHandle(id)
    }

    fn cancel(&self, handle: TaskHandle) {
        let pending = self.inner.borrow_mut().pending.remove(&handle.0);
        match pending {
            Some(Pending::Timeout(h)) => h.clear(),
            Some(Pending::Frame(h)) => h.cancel(),
            None => {}
        }
    }
}

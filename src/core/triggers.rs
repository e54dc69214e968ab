//! Named triggers for scroll and resize recomputes.
//!
//! Page features register plain recompute functions against a [`Trigger`].
//! The [`Coordinator`] turns raw window events into trigger firings:
//! scroll events are coalesced to one run per animation frame and resize
//! events are debounced to one run after a quiet window.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::config::scroll;
use crate::core::schedule::{Debouncer, FrameThrottle, Scheduler};

/// When a registered recompute runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Every raw scroll event.
    Scroll,
    /// At most once per animation frame while scrolling.
    ScrollFrame,
    /// Once resizing has been quiet for the debounce window.
    ResizeQuiet,
}

type Handler = Rc<dyn Fn()>;

#[derive(Default)]
struct Registry {
    handlers: RefCell<Vec<(Trigger, Handler)>>,
}

impl Registry {
    fn run(&self, trigger: Trigger) {
        // Snapshot so handlers may register more handlers.
        let handlers: Vec<Handler> = self
            .handlers
            .borrow()
            .iter()
            .filter(|(t, _)| *t == trigger)
            .map(|(_, h)| Rc::clone(h))
            .collect();
        for handler in handlers {
            handler();
        }
    }
}

/// Dispatches window events to registered recomputes.
pub struct Coordinator<S: Scheduler> {
    registry: Rc<Registry>,
    frame: FrameThrottle<S>,
    resize: Debouncer<S>,
}

impl<S: Scheduler + Clone> Coordinator<S> {
    pub fn new(scheduler: S) -> Self {
        Self::with_resize_quiet(
            scheduler,
            Duration::from_millis(u64::from(scroll::RESIZE_QUIET_MS)),
        )
    }

    pub fn with_resize_quiet(scheduler: S, quiet: Duration) -> Self {
        Self {
            registry: Rc::new(Registry::default()),
            frame: FrameThrottle::new(scheduler.clone()),
            resize: Debouncer::new(scheduler, quiet),
        }
    }
}

impl<S: Scheduler> Coordinator<S> {
    /// Registers `handler` for `trigger`. Handlers of one trigger run in registration order.
    pub fn register(&self, trigger: Trigger, handler: impl Fn() + 'static) {
        self.registry
            .handlers
            .borrow_mut()
            .push((trigger, Rc::new(handler)));
    }

    /// Runs every handler of `trigger` immediately.
    pub fn fire(&self, trigger: Trigger) {
        self.registry.run(trigger);
    }

    /// Feeds a raw scroll event.
    pub fn on_scroll(&self) {
        self.registry.run(Trigger::Scroll);
        let registry = Rc::clone(&self.registry);
        self.frame.call(move || registry.run(Trigger::ScrollFrame));
    }

    /// Feeds a raw resize event.
    pub fn on_resize(&self) {
        let registry = Rc::clone(&self.registry);
        self.resize.call(move || registry.run(Trigger::ResizeQuiet));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::core::schedule::ManualScheduler;

    fn counter(coordinator: &Coordinator<ManualScheduler>, trigger: Trigger) -> Rc<Cell<u32>> {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        coordinator.register(trigger, move || c.set(c.get() + 1));
        count
    }

    #[test]
    fn test_scroll_frame_coalesced() {
        let scheduler = ManualScheduler::new();
        let coordinator = Coordinator::new(scheduler.clone());
        let raw = counter(&coordinator, Trigger::Scroll);
        let framed = counter(&coordinator, Trigger::ScrollFrame);

        for _ in 0..5 {
            coordinator.on_scroll();
        }
        assert_eq!(raw.get(), 5);
        assert_eq!(framed.get(), 0);

        scheduler.run_frame();
        assert_eq!(framed.get(), 1);
    }

    #[test]
    fn test_frame_handlers_run_in_registration_order() {
        let scheduler = ManualScheduler::new();
        let coordinator = Coordinator::new(scheduler.clone());
        let order = Rc::new(RefCell::new(Vec::new()));
        for name in ["navbar", "active-link"] {
            let order = Rc::clone(&order);
            coordinator.register(Trigger::ScrollFrame, move || order.borrow_mut().push(name));
        }

        coordinator.on_scroll();
        scheduler.run_frame();
        assert_eq!(*order.borrow(), vec!["navbar", "active-link"]);
    }

    #[test]
    fn test_resize_debounced_uses_latest_state() {
        let scheduler = ManualScheduler::new();
        let coordinator = Coordinator::new(scheduler.clone());
        let width = Rc::new(Cell::new(0));
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let width = Rc::clone(&width);
            let seen = Rc::clone(&seen);
            coordinator.register(Trigger::ResizeQuiet, move || seen.borrow_mut().push(width.get()));
        }

        for w in [400, 600, 800, 1000] {
            width.set(w);
            coordinator.on_resize();
            scheduler.advance(100);
        }
        assert!(seen.borrow().is_empty());

        scheduler.advance(150);
        assert_eq!(*seen.borrow(), vec![1000]);
    }

    #[test]
    fn test_fire_runs_immediately() {
        let coordinator = Coordinator::new(ManualScheduler::new());
        let framed = counter(&coordinator, Trigger::ScrollFrame);
        let resize = counter(&coordinator, Trigger::ResizeQuiet);
        coordinator.fire(Trigger::ScrollFrame);
        assert_eq!((framed.get(), resize.get()), (1, 0));
    }
}

//! Typewriter engine.
//!
//! Owns a [`TypingState`] and a text sink, and keeps a chain of timeouts
//! alive: each tick renders one frame and schedules the next tick after the
//! frame's delay. The chain runs until [`Typewriter::stop`] is called.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::core::error::TypingError;
use crate::core::schedule::{Scheduler, TaskHandle};
use crate::models::{Frame, TypingState};

/// Destination for rendered typewriter text.
pub trait TextSink {
    fn render(&self, text: &str);
}

impl<T: TextSink + ?Sized> TextSink for Rc<T> {
    fn render(&self, text: &str) {
        (**self).render(text);
    }
}

struct Inner<S: Scheduler> {
    state: RefCell<TypingState>,
    sink: Box<dyn TextSink>,
    scheduler: S,
    pending: Cell<Option<TaskHandle>>,
}

/// Timer-driven typing and deleting loop over a fixed list of phrases.
pub struct Typewriter<S: Scheduler + 'static> {
    inner: Rc<Inner<S>>,
}

impl<S: Scheduler + 'static> Typewriter<S> {
    pub fn new(
        texts: Vec<String>,
        sink: impl TextSink + 'static,
        scheduler: S,
    ) -> Result<Self, TypingError> {
        Ok(Self::from_state(TypingState::new(texts)?, sink, scheduler))
    }

    pub fn from_state(state: TypingState, sink: impl TextSink + 'static, scheduler: S) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                sink: Box::new(sink),
                scheduler,
                pending: Cell::new(None),
            }),
        }
    }

    /// Schedules the first tick after `initial_delay`.
    ///
    /// Restarting a running typewriter replaces its pending tick.
    pub fn start(&self, initial_delay: Duration) {
        self.stop();
        schedule_tick(&self.inner, initial_delay);
    }

    /// Cancels the pending tick. The visible text stays as last rendered.
    pub fn stop(&self) {
        if let Some(handle) = self.inner.pending.take() {
            self.inner.scheduler.cancel(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.pending.get().is_some()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> TypingState {
        self.inner.state.borrow().clone()
    }
}

fn schedule_tick<S: Scheduler + 'static>(inner: &Rc<Inner<S>>, delay: Duration) {
    let next = Rc::clone(inner);
    let handle = inner
        .scheduler
        .set_timeout(delay, Box::new(move || tick(&next)));
    inner.pending.set(Some(handle));
}

fn tick<S: Scheduler + 'static>(inner: &Rc<Inner<S>>) {
    inner.pending.set(None);
    let Frame { text, delay } = inner.state.borrow_mut().tick();
    inner.sink.render(&text);
    schedule_tick(inner, delay);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schedule::ManualScheduler;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl TextSink for Recorder {
        fn render(&self, text: &str) {
            self.0.borrow_mut().push(text.to_string());
        }
    }

    fn writer(texts: &[&str]) -> (Typewriter<ManualScheduler>, Rc<Recorder>, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        let sink = Rc::new(Recorder::default());
        let writer = Typewriter::new(
            texts.iter().map(|s| s.to_string()).collect(),
            Rc::clone(&sink),
            scheduler.clone(),
        )
        .unwrap();
        (writer, sink, scheduler)
    }

    #[test]
    fn test_waits_for_initial_delay() {
        let (writer, sink, scheduler) = writer(&["ab"]);
        writer.start(Duration::from_millis(1000));
        assert!(writer.is_running());

        scheduler.advance(999);
        assert!(sink.0.borrow().is_empty());
        scheduler.advance(1);
        assert_eq!(*sink.0.borrow(), vec!["a"]);
    }

    #[test]
    fn test_frames_follow_delays() {
        let (writer, sink, scheduler) = writer(&["ab"]);
        writer.start(Duration::ZERO);

        scheduler.advance(0);
        assert_eq!(*sink.0.borrow(), vec!["a"]);
        scheduler.advance(50);
        assert_eq!(*sink.0.borrow(), vec!["a", "ab"]);
        scheduler.advance(1499);
        assert_eq!(sink.0.borrow().len(), 2);
        scheduler.advance(1);
        scheduler.advance(30);
        assert_eq!(*sink.0.borrow(), vec!["a", "ab", "a", ""]);

        let state = writer.snapshot();
        assert_eq!(state.text_index(), 0);
        assert!(!state.is_deleting());
        assert_eq!(state.delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_stop_cancels_pending_tick() {
        let (writer, sink, scheduler) = writer(&["abc"]);
        writer.start(Duration::ZERO);
        scheduler.advance(0);
        writer.stop();
        assert!(!writer.is_running());

        scheduler.advance(10_000);
        assert_eq!(*sink.0.borrow(), vec!["a"]);
        assert_eq!(scheduler.pending_timeouts(), 0);
    }

    #[test]
    fn test_restart_keeps_single_chain() {
        let (writer, sink, scheduler) = writer(&["abc"]);
        writer.start(Duration::from_millis(10));
        writer.start(Duration::from_millis(10));
        assert_eq!(scheduler.pending_timeouts(), 1);
        scheduler.advance(10);
        assert_eq!(*sink.0.borrow(), vec!["a"]);
    }

    #[test]
    fn test_empty_texts_rejected() {
        let result = Typewriter::new(vec![], Recorder::default(), ManualScheduler::new());
        assert!(matches!(result, Err(TypingError::EmptyTexts)));
    }
}

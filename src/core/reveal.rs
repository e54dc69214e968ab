//! Scroll reveal coordination.
//!
//! A [`RevealBoard`] tracks every reveal element and decides what to do when
//! an element is seen. A [`RevealController`] carries those decisions out
//! against a [`RevealSurface`] (the DOM in the browser), deferring staggered
//! reveals through a [`Scheduler`].
//!
//! Elements are seen either through intersection observers or, when the
//! browser has none, by polling their position on scroll. The strategy is
//! picked once at setup and the two are never mixed.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::config::reveal;
use crate::core::schedule::Scheduler;
use crate::models::{RevealElement, RevealKind};

/// How reveal elements are detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStrategy {
    /// Intersection observers with per-kind margin and threshold.
    Observer,
    /// Position polling on scroll.
    Polling,
}

impl RevealStrategy {
    pub fn detect(observer_supported: bool) -> Self {
        if observer_supported {
            Self::Observer
        } else {
            Self::Polling
        }
    }
}

/// Work produced by an intersection entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Mark the element visible now.
    Show { index: usize },
    /// Mark the element visible after `delay_ms`.
    ShowAfter { index: usize, delay_ms: u32 },
    /// Stop observing the element.
    Unobserve { index: usize },
}

/// Polling fallback predicate: the top edge has risen 150px above the viewport bottom.
pub fn within_reveal_point(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - reveal::POLL_REVEAL_POINT
}

/// Visibility bookkeeping for every reveal element on the page.
#[derive(Debug, Clone, Default)]
pub struct RevealBoard {
    elements: Vec<RevealElement>,
}

impl RevealBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element and returns its index.
    pub fn push(&mut self, kind: RevealKind, stagger_ms: u32) -> usize {
        self.elements.push(RevealElement::new(kind, stagger_ms));
        self.elements.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&RevealElement> {
        self.elements.get(index)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.get(index).is_some_and(RevealElement::is_visible)
    }

    pub fn is_observed(&self, index: usize) -> bool {
        self.get(index).is_some_and(RevealElement::is_observed)
    }

    /// Handles an intersection entry for the element at `index`.
    ///
    /// Fade elements are shown after their stagger when they intersect
    /// while still hidden, and stay observed. Skill bars are shown at once (their
    /// stagger is a transition delay) and unobserved. Entries for elements
    /// no longer observed are ignored.
    pub fn on_intersection(&mut self, index: usize, intersecting: bool) -> Vec<RevealAction> {
        let Some(element) = self.elements.get_mut(index) else {
            return Vec::new();
        };
        if !intersecting || !element.is_observed() {
            return Vec::new();
        }

        match element.kind {
            RevealKind::Fade if element.is_visible() => Vec::new(),
            RevealKind::Fade => vec![RevealAction::ShowAfter {
                index,
                delay_ms: element.stagger_ms,
            }],
            RevealKind::SkillBar => {
                element.stop_observing();
                vec![
                    RevealAction::Show { index },
                    RevealAction::Unobserve { index },
                ]
            }
        }
    }

    /// Latches the element visible. Returns `true` only the first time.
    pub fn mark_visible(&mut self, index: usize) -> bool {
        self.elements
            .get_mut(index)
            .is_some_and(RevealElement::latch_visible)
    }

    /// Polling fallback check. Returns `true` when the element newly became visible.
    pub fn poll(&mut self, index: usize, element_top: f64, viewport_height: f64) -> bool {
        within_reveal_point(element_top, viewport_height) && self.mark_visible(index)
    }
}

/// Presentation side of the reveal animators.
pub trait RevealSurface {
    /// Sets the visible flag on the element.
    fn show(&self, index: usize);
    /// Detaches the element from its observer.
    fn unobserve(&self, index: usize);
}

struct Shared<S, V> {
    board: RefCell<RevealBoard>,
    scheduler: S,
    surface: V,
}

/// Runs reveal decisions against a surface.
pub struct RevealController<S: Scheduler, V: RevealSurface> {
    shared: Rc<Shared<S, V>>,
}

impl<S: Scheduler, V: RevealSurface> Clone for RevealController<S, V> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<S: Scheduler + 'static, V: RevealSurface + 'static> RevealController<S, V> {
    pub fn new(board: RevealBoard, scheduler: S, surface: V) -> Self {
        Self {
            shared: Rc::new(Shared {
                board: RefCell::new(board),
                scheduler,
                surface,
            }),
        }
    }

    pub fn board(&self) -> std::cell::Ref<'_, RevealBoard> {
        self.shared.board.borrow()
    }

    pub fn surface(&self) -> &V {
        &self.shared.surface
    }

    /// Handles one intersection observer entry.
    pub fn on_entry(&self, index: usize, intersecting: bool) {
        let actions = self
            .shared
            .board
            .borrow_mut()
            .on_intersection(index, intersecting);

        for action in actions {
            match action {
                RevealAction::Show { index } => self.show_now(index),
                RevealAction::ShowAfter { index, delay_ms } => self.show_after(index, delay_ms),
                RevealAction::Unobserve { index } => self.shared.surface.unobserve(index),
            }
        }
    }

    /// Polls every element against the current viewport.
    ///
    /// `top_of` yields an element's top edge relative to the viewport.
    pub fn poll(&self, viewport_height: f64, top_of: impl Fn(usize) -> Option<f64>) {
        let count = self.shared.board.borrow().len();
        for index in 0..count {
            let Some(top) = top_of(index) else { continue };
            let newly_visible = self
                .shared
                .board
                .borrow_mut()
                .poll(index, top, viewport_height);
            if newly_visible {
                self.shared.surface.show(index);
            }
        }
    }

    fn show_after(&self, index: usize, delay_ms: u32) {
        let controller = self.clone();
        self.shared.scheduler.set_timeout(
            Duration::from_millis(u64::from(delay_ms)),
            Box::new(move || controller.show_now(index)),
        );
    }

    fn show_now(&self, index: usize) {
        let newly_visible = self.shared.board.borrow_mut().mark_visible(index);
        if newly_visible {
            self.shared.surface.show(index);
        }
    }
}

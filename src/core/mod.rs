//! Platform-independent page logic.
//!
//! - [`Typewriter`] - Timer-driven typing animation over a [`Scheduler`]
//! - [`Coordinator`] - Scroll-frame and resize-quiet triggers
//! - [`navigation`] - Navbar style and active-link recompute
//! - [`RevealController`] - Fade-in and skill-bar reveal latches
//! - [`menu`] - Mobile menu open/close rules

pub mod error;
pub mod menu;
pub mod navigation;
pub mod reveal;
pub mod schedule;
mod triggers;
mod typewriter;

pub use reveal::{RevealBoard, RevealController, RevealStrategy, RevealSurface};
pub use schedule::{Debouncer, FrameThrottle, Scheduler, TaskHandle};
#[cfg(any(test, feature = "mock"))]
pub use schedule::ManualScheduler;
pub use triggers::{Coordinator, Trigger};
pub use typewriter::{TextSink, Typewriter};

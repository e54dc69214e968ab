//! Data models for page behaviors.
//!
//! - [`TypingState`], [`Frame`], [`TypingSpeeds`] - Typewriter state machine
//! - [`NavSection`], [`LinkHighlight`] - Section geometry and active-link decisions
//! - [`RevealElement`], [`RevealKind`], [`ObserverOptions`] - Scroll reveal targets

mod reveal;
mod section;
mod typing;

pub use reveal::{ObserverOptions, RevealElement, RevealKind};
pub use section::{LinkHighlight, NavSection};
pub use typing::{Frame, TypingSpeeds, TypingState};

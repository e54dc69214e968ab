//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - Element lookup, geometry, class flags and event listeners
//! - [`console`] - Console logging
//! - [`BrowserScheduler`] - Timeouts and animation frames for the live page

pub mod console;
pub mod dom;
mod scheduler;

pub use scheduler::BrowserScheduler;

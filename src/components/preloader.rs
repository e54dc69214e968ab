//! Preloader removal once the page has fully loaded.

use std::time::Duration;

use web_sys::Document;

use crate::app::Page;
use crate::config::{PRELOADER_REMOVE_MS, classes, selectors};
use crate::core::Scheduler;
use crate::core::error::SetupError;
use crate::utils::{BrowserScheduler, dom};

/// Whether the window `load` event has already fired for this `readyState`.
fn load_already_fired(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Fades the preloader out, removes it after its transition, and marks
/// the body as loaded.
fn finish(document: &Document, scheduler: &BrowserScheduler) {
    if let Ok(Some(preloader)) = document.query_selector(selectors::PRELOADER) {
        dom::set_class(&preloader, classes::LOADED, true);
        scheduler.set_timeout(
            Duration::from_millis(u64::from(PRELOADER_REMOVE_MS)),
            Box::new(move || preloader.remove()),
        );
    }

    if let Some(body) = document.body() {
        dom::set_class(&body, classes::LOADED, true);
    }
}

/// Runs [`finish`] on window `load`, or right away when the page finished
/// loading before the module started.
pub fn install(page: &Page) -> Result<(), SetupError> {
    if load_already_fired(&page.document.ready_state()) {
        finish(&page.document, &page.scheduler);
        return Ok(());
    }

    let document = page.document.clone();
    let scheduler = page.scheduler.clone();
    dom::listen(&page.window, "load", move |_| finish(&document, &scheduler))
}

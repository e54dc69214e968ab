//! Typewriter slot in the hero section.
//!
//! The slot's text is a leptos signal; the [`Typewriter`] writes frames into
//! the signal and the mounted view re-renders them.

use std::time::Duration;

use leptos::prelude::*;

use crate::app::Page;
use crate::config::{selectors, typing};
use crate::core::error::SetupError;
use crate::core::{TextSink, Typewriter};
use crate::utils::BrowserScheduler;

impl TextSink for RwSignal<String> {
    fn render(&self, text: &str) {
        self.set(text.to_string());
    }
}

#[component]
fn TypedText(text: ReadSignal<String>) -> impl IntoView {
    move || text.get()
}

/// Mounts the typed text into `#typed-text` and starts the typewriter.
///
/// Does nothing when the slot is absent.
pub fn install(page: &Page) -> Result<Typewriter<BrowserScheduler>, SetupError> {
    let slot = page.by_id(selectors::TYPED_TEXT_ID)?;
    slot.set_text_content(None);

    let text = RwSignal::new(String::new());
    let read = text.read_only();
    mount_to(slot, move || view! { <TypedText text=read /> }).forget();

    let writer = Typewriter::new(page.site.typing.texts.clone(), text, page.scheduler.clone())?;
    writer.start(Duration::from_millis(u64::from(typing::START_DELAY_MS)));
    Ok(writer)
}

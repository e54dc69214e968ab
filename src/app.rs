//! Root application module.
//!
//! Collects the page context and installs every behavior. Each feature
//! installs independently; a feature whose elements are missing logs at
//! debug level and stays off while the rest of the page keeps working.

use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement, Window};

use crate::components::{images, menu, navbar, preloader, reveal, smooth_scroll, typed_text};
use crate::config::{SiteConfig, banner};
use crate::core::Coordinator;
use crate::core::error::SetupError;
use crate::utils::{BrowserScheduler, console, dom};

// ============================================================================
// Page
// ============================================================================

/// Shared handles every behavior installer works from.
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub scheduler: BrowserScheduler,
    /// Scroll and resize triggers, fed by window listeners.
    pub coordinator: Rc<Coordinator<BrowserScheduler>>,
    pub site: SiteConfig,
}

impl Page {
    pub fn new() -> Result<Self, SetupError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let scheduler = BrowserScheduler::new();
        Ok(Self {
            window,
            document,
            coordinator: Rc::new(Coordinator::new(scheduler.clone())),
            scheduler,
            site: SiteConfig::load(),
        })
    }

    pub fn by_id(&self, id: &'static str) -> Result<HtmlElement, SetupError> {
        dom::by_id(&self.document, id)
    }

    pub fn query(&self, selector: &'static str) -> Result<Element, SetupError> {
        dom::query(&self.document, selector)
    }

    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        dom::query_all(&self.document, selector)
    }

    /// Routes window scroll and resize events into the coordinator.
    fn wire_window_events(&self) -> Result<(), SetupError> {
        let coordinator = Rc::clone(&self.coordinator);
        dom::listen(&self.window, "scroll", move |_| coordinator.on_scroll())?;

        let coordinator = Rc::clone(&self.coordinator);
        dom::listen(&self.window, "resize", move |_| coordinator.on_resize())?;
        Ok(())
    }
}

// ============================================================================
// Startup
// ============================================================================

/// Installs page behaviors once the document has been parsed.
pub fn start() {
    let Ok(window) = dom::window() else {
        return;
    };
    let Ok(document) = dom::document(&window) else {
        return;
    };

    if document.ready_state() == "loading" {
        let installed = dom::listen(&document, "DOMContentLoaded", {
            let mut pending = true;
            move |_| {
                if std::mem::take(&mut pending) {
                    run();
                }
            }
        });
        if let Err(e) = installed {
            console::warn(&format!("page setup skipped: {}", e));
        }
    } else {
        run();
    }
}

fn run() {
    let page = match Page::new() {
        Ok(page) => page,
        Err(e) => {
            console::warn(&format!("page setup skipped: {}", e));
            return;
        }
    };

    // Menu first so a quiet resize closes it before links are recomputed.
    install("mobile menu", menu::install(&page));
    install("smooth scroll", smooth_scroll::install_links(&page));
    install("navbar", navbar::install(&page));
    install("typed text", typed_text::install(&page));
    if let Some(strategy) = install("reveal", reveal::install(&page)) {
        console::debug(&format!("reveal strategy: {:?}", strategy));
    }
    install("back to top", smooth_scroll::install_back_to_top(&page));
    install("image fallback", images::install(&page));
    install("preloader", preloader::install(&page));
    install("window events", page.wire_window_events());

    welcome(&page.site);
}

fn install<T>(feature: &str, result: Result<T, SetupError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            console::debug(&format!("{} disabled: {}", feature, e));
            None
        }
    }
}

/// Prints the console welcome banner.
fn welcome(site: &SiteConfig) {
    console::styled(
        &format!("👋 Welcome to {}'s Portfolio!", site.owner),
        banner::WELCOME_STYLE,
    );
    for (i, line) in site.console.lines.iter().enumerate() {
        let style = if i == 0 {
            banner::BUILT_WITH_STYLE
        } else {
            banner::FOOTER_STYLE
        };
        console::styled(line, style);
    }
}

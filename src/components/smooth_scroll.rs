//! In-page link scrolling and the back-to-top control.

use std::rc::Rc;

use web_sys::{Document, Element, Event, HtmlElement, Window};

use crate::app::Page;
use crate::config::{classes, selectors};
use crate::core::error::SetupError;
use crate::core::navigation::{fragment_target, scroll_destination};
use crate::utils::dom;

struct Scroller {
    window: Window,
    document: Document,
    navbar: Option<HtmlElement>,
}

impl Scroller {
    fn follow(&self, event: &Event, link: &Element) {
        event.prevent_default();

        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(selector) = fragment_target(&href) else {
            return;
        };
        let Ok(Some(target)) = self.document.query_selector(selector) else {
            return;
        };

        let navbar_height = self
            .navbar
            .as_ref()
            .map_or(0.0, |n| f64::from(n.offset_height()));
        dom::smooth_scroll_to(
            &self.window,
            scroll_destination(dom::offset_top(&target), navbar_height),
        );
    }
}

/// Makes nav links and other `#fragment` links scroll smoothly, offset by the navbar.
pub fn install_links(page: &Page) -> Result<(), SetupError> {
    let scroller = Rc::new(Scroller {
        window: page.window.clone(),
        document: page.document.clone(),
        navbar: page.by_id(selectors::NAVBAR_ID).ok(),
    });

    let nav_links = page.query_all(selectors::NAV_LINK);
    let other_links = page
        .query_all(selectors::INTERNAL_LINK)
        .into_iter()
        .filter(|link| !dom::has_class(link, classes::NAV_LINK));

    for link in nav_links.into_iter().chain(other_links) {
        let scroller = Rc::clone(&scroller);
        let target = link.clone();
        dom::listen(&link, "click", move |event| scroller.follow(&event, &target))?;
    }
    Ok(())
}

/// Scrolls back to the top of the page from the footer control.
pub fn install_back_to_top(page: &Page) -> Result<(), SetupError> {
    let button = page.query(selectors::BACK_TO_TOP)?;
    let window = page.window.clone();
    dom::listen(&button, "click", move |event| {
        event.prevent_default();
        dom::smooth_scroll_to(&window, 0.0);
    })
}

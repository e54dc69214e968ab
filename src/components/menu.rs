//! Mobile navigation toggle.
//!
//! The `active` class on the toggle and the menu is the open state.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent, Node, Window};

use crate::app::Page;
use crate::config::{classes, selectors};
use crate::core::Trigger;
use crate::core::error::SetupError;
use crate::core::menu::{MenuEvent, body_overflow, should_close, toggled};
use crate::utils::dom;

struct MobileNav {
    window: Window,
    toggle: HtmlElement,
    menu: HtmlElement,
    body: Option<HtmlElement>,
}

impl MobileNav {
    fn is_open(&self) -> bool {
        dom::has_class(&self.menu, classes::ACTIVE)
    }

    fn set_open(&self, open: bool) {
        dom::set_class(&self.toggle, classes::ACTIVE, open);
        dom::set_class(&self.menu, classes::ACTIVE, open);
        if let Some(body) = &self.body {
            let _ = body.style().set_property("overflow", body_overflow(open));
        }
    }

    fn close_on(&self, event: MenuEvent<'_>) {
        if should_close(self.is_open(), event) {
            self.set_open(false);
        }
    }

    fn contains(&self, event: &Event) -> bool {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let target = target.as_ref();
        self.menu.contains(target) || self.toggle.contains(target)
    }
}

pub fn install(page: &Page) -> Result<(), SetupError> {
    let nav = Rc::new(MobileNav {
        window: page.window.clone(),
        toggle: page.by_id(selectors::NAV_TOGGLE_ID)?,
        menu: page.by_id(selectors::NAV_MENU_ID)?,
        body: page.document.body(),
    });

    let n = Rc::clone(&nav);
    dom::listen(&nav.toggle, "click", move |_| n.set_open(toggled(n.is_open())))?;

    for link in page.query_all(selectors::NAV_LINK) {
        let n = Rc::clone(&nav);
        dom::listen(&link, "click", move |_| n.close_on(MenuEvent::LinkClicked))?;
    }

    let n = Rc::clone(&nav);
    dom::listen(&page.document, "click", move |event| {
        let inside = n.contains(&event);
        n.close_on(MenuEvent::DocumentClick { inside });
    })?;

    let n = Rc::clone(&nav);
    dom::listen(&page.document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
            n.close_on(MenuEvent::Key(&key));
        }
    })?;

    let n = Rc::clone(&nav);
    page.coordinator.register(Trigger::ResizeQuiet, move || {
        let width = dom::inner_width(&n.window);
        n.close_on(MenuEvent::Resized { width });
    });

    Ok(())
}

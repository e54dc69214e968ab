//! Navbar scroll style and active-link highlighting.

use std::rc::Rc;

use web_sys::{Element, HtmlElement, Window};

use crate::app::Page;
use crate::config::{classes, selectors};
use crate::core::Trigger;
use crate::core::error::SetupError;
use crate::core::navigation::{active_section, link_flags, navbar_scrolled};
use crate::models::NavSection;
use crate::utils::dom;

struct Navbar {
    window: Window,
    navbar: HtmlElement,
    sections: Vec<Element>,
    links: Vec<Element>,
    home_id: String,
}

impl Navbar {
    fn update_style(&self) {
        dom::set_class(
            &self.navbar,
            classes::SCROLLED,
            navbar_scrolled(dom::scroll_y(&self.window)),
        );
    }

    fn highlight_active_link(&self) {
        let sections: Vec<NavSection> = self
            .sections
            .iter()
            .filter_map(|el| {
                let id = el.get_attribute("id")?;
                Some(NavSection::new(id, dom::offset_top(el), dom::offset_height(el)))
            })
            .collect();

        let highlight = active_section(
            &sections,
            dom::scroll_y(&self.window),
            f64::from(self.navbar.offset_height()),
            &self.home_id,
        );

        let hrefs: Vec<Option<String>> =
            self.links.iter().map(|l| l.get_attribute("href")).collect();
        let previous: Vec<bool> = self
            .links
            .iter()
            .map(|l| dom::has_class(l, classes::ACTIVE))
            .collect();

        for (link, active) in self
            .links
            .iter()
            .zip(link_flags(&hrefs, &previous, &highlight))
        {
            dom::set_class(link, classes::ACTIVE, active);
        }
    }
}

/// Registers the navbar recomputes and runs them once.
///
/// Scroll frames update the style, then the active link. A quiet resize
/// recomputes the active link since section offsets may have moved.
pub fn install(page: &Page) -> Result<(), SetupError> {
    let navbar = Rc::new(Navbar {
        window: page.window.clone(),
        navbar: page.by_id(selectors::NAVBAR_ID)?,
        sections: page.query_all(selectors::SECTION),
        links: page.query_all(selectors::NAV_LINK),
        home_id: page.site.home_section.clone(),
    });

    let n = Rc::clone(&navbar);
    page.coordinator
        .register(Trigger::ScrollFrame, move || n.update_style());
    let n = Rc::clone(&navbar);
    page.coordinator
        .register(Trigger::ScrollFrame, move || n.highlight_active_link());
    let n = Rc::clone(&navbar);
    page.coordinator
        .register(Trigger::ResizeQuiet, move || n.highlight_active_link());

    navbar.update_style();
    navbar.highlight_active_link();
    Ok(())
}

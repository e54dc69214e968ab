//! Scroll-derived navigation state.
//!
//! Pure recompute functions: every input comes from live layout at call
//! time and nothing is remembered between calls.

use crate::config::scroll;
use crate::models::{LinkHighlight, NavSection};

/// Whether the navbar should use its scrolled variant.
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > scroll::NAVBAR_SCROLLED_Y
}

/// Picks the section whose nav link should be active.
///
/// The reference point is `scroll_y + navbar_height + 100`. Sections are scanned
/// in document order and the last one containing the point wins. Within the
/// first 100px of the page the home section is always chosen.
pub fn active_section(
    sections: &[NavSection],
    scroll_y: f64,
    navbar_height: f64,
    home_id: &str,
) -> LinkHighlight {
    if scroll_y < scroll::HOME_OVERRIDE_Y {
        return LinkHighlight::Activate(home_id.to_string());
    }

    let point = scroll_y + navbar_height + scroll::ACTIVE_SECTION_OFFSET;
    sections
        .iter()
        .filter(|section| section.contains(point))
        .last()
        .map(|section| LinkHighlight::Activate(section.id.clone()))
        .unwrap_or(LinkHighlight::Unchanged)
}

/// Applies a highlight decision to a list of link hrefs.
///
/// `previous` holds the current active flags and is returned untouched for
/// [`LinkHighlight::Unchanged`]. Otherwise every flag is cleared and the first
/// link whose href matches the section gets set, so at most one link is
/// active.
pub fn link_flags(
    hrefs: &[Option<String>],
    previous: &[bool],
    highlight: &LinkHighlight,
) -> Vec<bool> {
    let Some(target) = highlight.href() else {
        return previous.to_vec();
    };

    let mut flags = vec![false; hrefs.len()];
    if let Some(i) = hrefs
        .iter()
        .position(|href| href.as_deref() == Some(target.as_str()))
    {
        flags[i] = true;
    }
    flags
}

/// Extracts the in-page target selector from a link href.
///
/// Returns `None` for empty hrefs, a bare `#` and anything that is not a
/// fragment.
pub fn fragment_target(href: &str) -> Option<&str> {
    match href {
        "" | "#" => None,
        h if h.starts_with('#') => Some(h),
        _ => None,
    }
}

/// Scroll offset that puts a section's top just below the fixed navbar.
pub fn scroll_destination(offset_top: f64, navbar_height: f64) -> f64 {
    (offset_top - navbar_height).max(0.0)
}

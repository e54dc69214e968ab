//! Mobile navigation menu decisions.

use crate::config::scroll;

/// Why the menu might close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent<'a> {
    /// A navigation link was clicked.
    LinkClicked,
    /// A click landed somewhere; `inside` is true for the toggle or the menu.
    DocumentClick { inside: bool },
    /// A key was pressed anywhere in the document.
    Key(&'a str),
    /// Resizing settled at this viewport width.
    Resized { width: f64 },
}

/// Open state after the toggle control is clicked.
pub fn toggled(open: bool) -> bool {
    !open
}

/// Whether `event` should close a menu whose current state is `open`.
pub fn should_close(open: bool, event: MenuEvent<'_>) -> bool {
    match event {
        MenuEvent::LinkClicked => true,
        MenuEvent::DocumentClick { inside } => open && !inside,
        MenuEvent::Key(key) => open && key == "Escape",
        MenuEvent::Resized { width } => open && width > scroll::DESKTOP_MIN_WIDTH,
    }
}

/// Body overflow value for the given menu state.
pub fn body_overflow(open: bool) -> &'static str {
    if open { "hidden" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert!(toggled(false));
        assert!(!toggled(true));
    }

    #[test]
    fn test_close_rules() {
        assert!(should_close(false, MenuEvent::LinkClicked));
        assert!(should_close(true, MenuEvent::DocumentClick { inside: false }));
        assert!(!should_close(true, MenuEvent::DocumentClick { inside: true }));
        assert!(!should_close(false, MenuEvent::DocumentClick { inside: false }));
        assert!(should_close(true, MenuEvent::Key("Escape")));
        assert!(!should_close(true, MenuEvent::Key("Enter")));
        assert!(should_close(true, MenuEvent::Resized { width: 1024.0 }));
        assert!(!should_close(true, MenuEvent::Resized { width: 768.0 }));
        assert!(!should_close(false, MenuEvent::Resized { width: 1024.0 }));
    }

    #[test]
    fn test_resize_events_compare_by_width() {
        let settled = MenuEvent::Resized { width: 1024.0 };
        let copy = settled;
        assert_eq!(settled, copy);
        assert_ne!(settled, MenuEvent::Resized { width: 767.5 });
        assert!(should_close(true, copy));
    }

    #[test]
    fn test_body_overflow() {
        assert_eq!(body_overflow(true), "hidden");
        assert_eq!(body_overflow(false), "");
    }
}

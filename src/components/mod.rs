//! Page behaviors bound to the live DOM.
//!
//! - [`menu`] - Mobile navigation toggle
//! - [`smooth_scroll`] - In-page link scrolling and back-to-top
//! - [`navbar`] - Scrolled navbar style and active-link highlighting
//! - [`typed_text`] - Typewriter slot (leptos-mounted)
//! - [`reveal`] - Fade-in and skill-bar reveal animations
//! - [`images`] - Broken image flagging
//! - [`preloader`] - Preloader removal on load

pub mod images;
pub mod menu;
pub mod navbar;
pub mod preloader;
pub mod reveal;
pub mod smooth_scroll;
pub mod typed_text;

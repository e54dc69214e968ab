//! Client-side behavior for a personal portfolio page.
//!
//! Attaches to a static page: mobile menu, smooth in-page scrolling, navbar
//! scroll styling, active-link highlighting, a typewriter hero line, scroll
//! reveal animations, image error flagging and preloader removal.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

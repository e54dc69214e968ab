//! Application configuration.
//!
//! Centralizes timing, threshold and selector constants. Site content
//! (owner, typing phrases, welcome lines) is loaded at compile time from
//! `assets/site.toml` with `include_str!` and parsed on startup.

use serde::Deserialize;

use crate::core::error::ConfigError;

// =============================================================================
// Site Content (loaded at compile time)
// =============================================================================

/// Raw site configuration.
pub const SITE_TOML: &str = include_str!("../assets/site.toml");

/// Site content parsed from [`SITE_TOML`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    /// Name shown in the console welcome banner.
    pub owner: String,
    /// Section whose nav link is forced active near the top of the page.
    #[serde(default = "default_home_section")]
    pub home_section: String,
    pub typing: TypingConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypingConfig {
    /// Phrases cycled by the typewriter, in order.
    pub texts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ConsoleConfig {
    /// Extra lines printed after the welcome line.
    #[serde(default)]
    pub lines: Vec<String>,
}

fn default_home_section() -> String {
    HOME_SECTION_ID.to_string()
}

impl SiteConfig {
    /// Parses and validates a site configuration document.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if config.typing.texts.is_empty() {
            return Err(ConfigError::EmptyTypingTexts);
        }
        Ok(config)
    }

    /// Loads the embedded configuration, falling back to built-in defaults.
    pub fn load() -> Self {
        match Self::parse(SITE_TOML) {
            Ok(config) => config,
            Err(e) => {
                crate::utils::console::warn(&format!("site.toml ignored: {}", e));
                Self::default()
            }
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Pranav Sarotra".to_string(),
            home_section: default_home_section(),
            typing: TypingConfig {
                texts: vec![
                    "a Computer Science Student".to_string(),
                    "Specialising in Data Science & Artificial Intelligence".to_string(),
                    "a Thinker, Creator, Developer".to_string(),
                    "a Problem Solver".to_string(),
                ],
            },
            console: ConsoleConfig {
                lines: vec![
                    "Built with Rust and WebAssembly".to_string(),
                    "Interested in the code? Check out the GitHub repo!".to_string(),
                ],
            },
        }
    }
}

/// Default id of the home section.
pub const HOME_SECTION_ID: &str = "home";

// =============================================================================
// Typewriter
// =============================================================================

/// Typewriter delays (milliseconds).
pub mod typing {
    /// Delay after each typed character.
    pub const TYPE_MS: u32 = 50;
    /// Delay after each deleted character.
    pub const DELETE_MS: u32 = 30;
    /// Dwell on the fully typed phrase.
    pub const DWELL_FULL_MS: u32 = 1500;
    /// Pause before typing the next phrase.
    pub const DWELL_EMPTY_MS: u32 = 500;
    /// Delay before the first tick after page setup.
    pub const START_DELAY_MS: u32 = 1000;
}

// =============================================================================
// Scroll Coordination
// =============================================================================

/// Scroll and resize thresholds.
pub mod scroll {
    /// Navbar gets the scrolled variant past this offset (px).
    pub const NAVBAR_SCROLLED_Y: f64 = 50.0;
    /// Extra lookahead added to the scroll position when picking the active section (px).
    pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;
    /// Below this offset the home link is always active (px).
    pub const HOME_OVERRIDE_Y: f64 = 100.0;
    /// Quiet window for resize debouncing (ms).
    pub const RESIZE_QUIET_MS: u32 = 250;
    /// Widths above this close the mobile menu on resize (px).
    pub const DESKTOP_MIN_WIDTH: f64 = 768.0;
}

// =============================================================================
// Reveal Animations
// =============================================================================

/// Reveal observer settings.
pub mod reveal {
    pub const FADE_ROOT_MARGIN: &str = "0px 0px -50px 0px";
    pub const FADE_THRESHOLD: f64 = 0.1;
    /// Stagger per sibling ordinal (ms).
    pub const FADE_STAGGER_MS: u32 = 100;

    pub const SKILL_ROOT_MARGIN: &str = "0px";
    pub const SKILL_THRESHOLD: f64 = 0.2;
    /// Stagger per skill ordinal, applied as a CSS transition delay (ms).
    pub const SKILL_STAGGER_MS: u32 = 50;

    /// Polling fallback: reveal when the top edge is this far above the viewport bottom (px).
    pub const POLL_REVEAL_POINT: f64 = 150.0;
}

// =============================================================================
// Preloader
// =============================================================================

/// Time between marking the preloader loaded and removing it (ms).
pub const PRELOADER_REMOVE_MS: u32 = 500;

// =============================================================================
// DOM Hooks
// =============================================================================

/// Element ids and selectors the page is expected to provide.
pub mod selectors {
    pub const NAVBAR_ID: &str = "navbar";
    pub const NAV_TOGGLE_ID: &str = "nav-toggle";
    pub const NAV_MENU_ID: &str = "nav-menu";
    pub const TYPED_TEXT_ID: &str = "typed-text";
    pub const NAV_LINK: &str = ".nav-link";
    pub const INTERNAL_LINK: &str = "a[href^=\"#\"]";
    pub const FADE_IN: &str = ".fade-in";
    pub const SKILL_ITEM: &str = ".skill-item";
    pub const SECTION: &str = "section[id]";
    pub const BACK_TO_TOP: &str = ".footer-back-to-top";
    pub const IMAGE: &str = "img";
    pub const PRELOADER: &str = ".preloader";
}

/// Presentation hook class names.
pub mod classes {
    pub const ACTIVE: &str = "active";
    pub const SCROLLED: &str = "scrolled";
    pub const VISIBLE: &str = "visible";
    pub const NAV_LINK: &str = "nav-link";
    pub const IMAGE_ERROR: &str = "image-error";
    pub const LOADED: &str = "loaded";
}

// =============================================================================
// Console Banner
// =============================================================================

pub mod banner {
    pub const WELCOME_STYLE: &str = "color: #6366f1; font-size: 16px; font-weight: bold;";
    pub const BUILT_WITH_STYLE: &str = "color: #8b5cf6; font-size: 12px;";
    pub const FOOTER_STYLE: &str = "color: #a1a1aa; font-size: 11px;";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::parse(SITE_TOML).unwrap();
        assert!(!config.typing.texts.is_empty());
        assert_eq!(config.home_section, "home");
    }

    #[test]
    fn test_fallback_matches_embedded_config() {
        let embedded = SiteConfig::parse(SITE_TOML).unwrap();
        assert_eq!(SiteConfig::default(), embedded);
        assert_eq!(SiteConfig::default().typing.texts.len(), 4);
        assert_eq!(SiteConfig::default().console.lines.len(), 2);
    }

    #[test]
    fn test_home_section_defaults() {
        let config = SiteConfig::parse(
            r#"
            owner = "Someone"
            [typing]
            texts = ["one"]
            "#,
        )
        .unwrap();
        assert_eq!(config.home_section, HOME_SECTION_ID);
        assert!(config.console.lines.is_empty());
    }

    #[test]
    fn test_empty_texts_rejected() {
        let err = SiteConfig::parse(
            r#"
            owner = "Someone"
            [typing]
            texts = []
            "#,
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::EmptyTypingTexts);
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            SiteConfig::parse("owner = "),
            Err(ConfigError::Parse(_))
        ));
    }
}

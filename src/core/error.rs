//! Error types for page setup and runtime degradation.
//!
//! None of these are ever shown to the visitor. Each feature installs
//! independently, and a failure only disables that feature:
//!
//! - [`SetupError`] - Browser objects or page elements missing at setup
//! - [`ResourceError`] - Page resources that failed to load
//! - [`ConfigError`] - Invalid embedded site configuration
//! - [`TypingError`] - Invalid typewriter input

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while attaching behaviors to the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Browser window not available.
    #[error("browser window not available")]
    NoWindow,
    /// Window has no document.
    #[error("document not available")]
    NoDocument,
    /// An element the feature depends on is absent.
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    /// A browser call failed.
    #[error("browser call failed: {0}")]
    Js(String),
    /// Typewriter could not be built from the configured phrases.
    #[error("typewriter: {0}")]
    Typing(#[from] TypingError),
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        Self::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

/// Page resources that failed to load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("Image failed to load: {src}")]
    ImageLoad { src: String },
}

/// Site configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("typing.texts must not be empty")]
    EmptyTypingTexts,
}

/// Typewriter construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypingError {
    #[error("typewriter needs at least one phrase")]
    EmptyTexts,
}

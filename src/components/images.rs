//! Image load failure handling.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

use crate::app::Page;
use crate::config::{classes, selectors};
use crate::core::error::{ResourceError, SetupError};
use crate::utils::{console, dom};

/// Flags a broken image and logs it. No retry, no placeholder.
fn mark_failed(img: &Element) {
    dom::set_class(img, classes::IMAGE_ERROR, true);

    let src = img
        .dyn_ref::<HtmlImageElement>()
        .map(HtmlImageElement::src)
        .or_else(|| img.get_attribute("src"))
        .unwrap_or_default();
    console::warn(&ResourceError::ImageLoad { src }.to_string());
}

/// An image whose fetch already settled without producing any pixels.
/// Images without a source never fire `error` and are left alone.
fn failed_before_install(src: &str, complete: bool, natural_width: u32) -> bool {
    !src.is_empty() && complete && natural_width == 0
}

/// Watches every image on the page for load errors. Images that already
/// failed before this runs are flagged at once. Returns how many are watched.
pub fn install(page: &Page) -> Result<usize, SetupError> {
    let images = page.query_all(selectors::IMAGE);
    if images.is_empty() {
        return Err(SetupError::MissingElement(selectors::IMAGE));
    }

    for img in &images {
        let already_failed = img.dyn_ref::<HtmlImageElement>().is_some_and(|image| {
            failed_before_install(&image.src(), image.complete(), image.natural_width())
        });
        if already_failed {
            mark_failed(img);
            continue;
        }
        let target = img.clone();
        dom::listen(img, "error", move |_| mark_failed(&target))?;
    }
    Ok(images.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_before_install() {
        assert!(failed_before_install("photo.png", true, 0));
        assert!(!failed_before_install("photo.png", true, 640));
        assert!(!failed_before_install("photo.png", false, 0));
        assert!(!failed_before_install("", true, 0));
    }
}

//! Browser checks for the DOM adapters. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use portfolio::app::Page;
use portfolio::components::{images, navbar, preloader, reveal};
use portfolio::core::RevealStrategy;
use portfolio::core::error::SetupError;
use portfolio::utils::dom;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> Page {
    let page = Page::new().unwrap();
    page.document.body().unwrap().set_inner_html(html);
    page
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn missing_navbar_disables_feature() {
    let page = mount("<section id=\"home\"></section>");
    assert_eq!(
        navbar::install(&page),
        Err(SetupError::MissingElement("navbar"))
    );
}

#[wasm_bindgen_test]
fn home_link_active_after_install() {
    let page = mount(
        r##"
        <nav id="navbar">
            <a class="nav-link" href="#home">Home</a>
            <a class="nav-link active" href="#about">About</a>
        </nav>
        <section id="home" style="height: 800px"></section>
        <section id="about" style="height: 800px"></section>
        "##,
    );
    navbar::install(&page).unwrap();

    let links = page.query_all(".nav-link");
    assert!(dom::has_class(&links[0], "active"));
    assert!(!dom::has_class(&links[1], "active"));
}

#[wasm_bindgen_test]
fn reveal_tags_stagger() {
    let page = mount(
        r#"
        <div><p class="fade-in"></p><p class="fade-in"></p></div>
        <div class="skill-item"></div><div class="skill-item"></div>
        "#,
    );
    assert_eq!(reveal::install(&page), Ok(RevealStrategy::Observer));

    let fades = page.query_all(".fade-in");
    assert_eq!(fades[1].get_attribute("data-delay").as_deref(), Some("100"));
    let skills = page.query_all(".skill-item");
    assert_eq!(
        skills[1].get_attribute("style").as_deref(),
        Some("transition-delay: 50ms;")
    );
}

#[wasm_bindgen_test]
fn no_images_reported_missing() {
    let page = mount("<p>text only</p>");
    assert_eq!(
        images::install(&page),
        Err(SetupError::MissingElement("img"))
    );
}

#[wasm_bindgen_test]
async fn preloader_removed_when_installed_after_load() {
    let page = mount(r#"<div class="preloader"></div>"#);
    preloader::install(&page).unwrap();

    let overlay = page.query(".preloader").unwrap();
    assert!(dom::has_class(&overlay, "loaded"));
    assert!(dom::has_class(&page.document.body().unwrap(), "loaded"));

    sleep(600).await;
    assert!(page.query(".preloader").is_err());
}

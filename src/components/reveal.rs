//! Fade-in and skill-bar reveals.
//!
//! Uses intersection observers when the browser has them, otherwise polls
//! element positions on every scroll event.

use std::cell::RefCell;
use std::collections::HashMap;

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::prelude::Closure;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::app::Page;
use crate::config::{classes, selectors};
use crate::core::error::SetupError;
use crate::core::{RevealBoard, RevealController, RevealStrategy, RevealSurface, Trigger};
use crate::models::RevealKind;
use crate::utils::{BrowserScheduler, dom};

type Controller = RevealController<BrowserScheduler, DomSurface>;

/// Reveal elements on the live page, indexed like the board.
struct DomSurface {
    elements: Vec<Element>,
    kinds: Vec<RevealKind>,
    observers: RefCell<HashMap<RevealKind, IntersectionObserver>>,
}

impl DomSurface {
    fn index_of(&self, element: &Element) -> Option<usize> {
        self.elements.iter().position(|el| el == element)
    }
}

impl RevealSurface for DomSurface {
    fn show(&self, index: usize) {
        if let Some(el) = self.elements.get(index) {
            dom::set_class(el, classes::VISIBLE, true);
        }
    }

    fn unobserve(&self, index: usize) {
        let (Some(el), Some(kind)) = (self.elements.get(index), self.kinds.get(index)) else {
            return;
        };
        if let Some(observer) = self.observers.borrow().get(kind) {
            observer.unobserve(el);
        }
    }
}

/// Ordinal of a fade element among the fade elements under its parent.
fn sibling_ordinal(element: &Element) -> usize {
    element
        .parent_element()
        .and_then(|parent| {
            dom::query_all_in(&parent, selectors::FADE_IN)
                .iter()
                .position(|el| el == element)
        })
        .unwrap_or(0)
}

/// Tags every reveal element with its stagger and starts watching them.
pub fn install(page: &Page) -> Result<RevealStrategy, SetupError> {
    let fades = page.query_all(selectors::FADE_IN);
    let skills = page.query_all(selectors::SKILL_ITEM);
    if fades.is_empty() && skills.is_empty() {
        return Err(SetupError::MissingElement(selectors::FADE_IN));
    }

    let mut board = RevealBoard::new();
    let mut elements = Vec::with_capacity(fades.len() + skills.len());
    let mut kinds = Vec::with_capacity(elements.capacity());

    for fade in fades {
        let stagger = RevealKind::Fade.stagger_for(sibling_ordinal(&fade));
        let _ = fade.set_attribute("data-delay", &stagger.to_string());
        board.push(RevealKind::Fade, stagger);
        elements.push(fade);
        kinds.push(RevealKind::Fade);
    }

    for (ordinal, skill) in skills.into_iter().enumerate() {
        let stagger = RevealKind::SkillBar.stagger_for(ordinal);
        if let Some(html) = skill.dyn_ref::<HtmlElement>() {
            let _ = html
                .style()
                .set_property("transition-delay", &format!("{}ms", stagger));
        }
        board.push(RevealKind::SkillBar, stagger);
        elements.push(skill);
        kinds.push(RevealKind::SkillBar);
    }

    let controller = RevealController::new(
        board,
        page.scheduler.clone(),
        DomSurface {
            elements,
            kinds,
            observers: RefCell::new(HashMap::new()),
        },
    );

    let strategy = RevealStrategy::detect(dom::supports_intersection_observer(&page.window));
    match strategy {
        RevealStrategy::Observer => {
            for kind in [RevealKind::Fade, RevealKind::SkillBar] {
                observe_kind(&controller, kind)?;
            }
        }
        RevealStrategy::Polling => {
            let window = page.window.clone();
            let poller = controller.clone();
            let poll = move || {
                let surface = poller.surface();
                poller.poll(dom::inner_height(&window), |i| {
                    surface
                        .elements
                        .get(i)
                        .map(|el| el.get_bounding_client_rect().top())
                });
            };
            poll();
            page.coordinator.register(Trigger::Scroll, poll);
        }
    }

    Ok(strategy)
}

/// Creates the observer for one kind and observes its elements.
fn observe_kind(controller: &Controller, kind: RevealKind) -> Result<(), SetupError> {
    let surface = controller.surface();
    let targets: Vec<&Element> = surface
        .elements
        .iter()
        .zip(&surface.kinds)
        .filter(|(_, k)| **k == kind)
        .map(|(el, _)| el)
        .collect();
    if targets.is_empty() {
        return Ok(());
    }

    let handler = controller.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if let Some(index) = handler.surface().index_of(&entry.target()) {
                handler.on_entry(index, entry.is_intersecting());
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = kind.observer_options();
    let init = IntersectionObserverInit::new();
    init.set_root_margin(options.root_margin);
    init.set_threshold(&JsValue::from_f64(options.threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for el in targets {
        observer.observe(el);
    }
    surface.observers.borrow_mut().insert(kind, observer);
    Ok(())
}

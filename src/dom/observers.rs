use std::rc::Rc;

use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::BrowserPage;
use crate::error::BehaviorError;

/// Whether the browser exposes `IntersectionObserver`.
pub(super) fn supported() -> bool {
    web_sys::window().map_or(false, |window| {
        Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    })
}

/// Observes `elements` and calls `on_entry(index, is_intersecting)` for each
/// delivery. The element is unobserved as soon as `on_entry` returns `true`.
fn observe_once<F>(
    elements: Vec<Element>,
    options: &IntersectionObserverInit,
    on_entry: F,
) -> Result<(), BehaviorError>
where
    F: Fn(usize, bool) -> bool + 'static,
{
    if elements.is_empty() {
        return Ok(());
    }

    let watched = elements.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = watched.iter().position(|el| *el == target) else {
                continue;
            };
            if on_entry(index, entry.is_intersecting()) {
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?;
    for element in &elements {
        observer.observe(element);
    }
    callback.forget();
    Ok(())
}

pub(super) fn observe_lazy_images(page: &Rc<BrowserPage>) -> Result<(), BehaviorError> {
    let options = IntersectionObserverInit::new();
    options.set_root_margin(&page.config().lazy_root_margin);

    let p = page.clone();
    observe_once(page.view().lazy_images().to_vec(), &options, move |index, hit| {
        p.on_lazy_image_intersect(index, hit)
    })
}

pub(super) fn observe_fade_sections(page: &Rc<BrowserPage>) -> Result<(), BehaviorError> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(page.config().fade_threshold));
    options.set_root_margin(&page.config().fade_root_margin);

    let p = page.clone();
    observe_once(page.view().fade_sections().to_vec(), &options, move |index, hit| {
        p.on_section_intersect(index, hit)
    })
}

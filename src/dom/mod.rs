//! Browser side: locate the page elements, implement [`crate::view::PageView`]
//! on top of web-sys and wire the DOM events to [`PageBehaviors`].

mod listeners;
mod observers;
mod view;

pub use view::DomView;

use std::rc::Rc;

use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, NodeList};

use crate::behaviors::PageBehaviors;
use crate::config::{BehaviorConfig, CONFIG_SCRIPT_ID};
use crate::error::BehaviorError;
use crate::timer::BrowserScheduler;

pub type BrowserPage = PageBehaviors<DomView, BrowserScheduler>;

/// Attaches every behavior, waiting for `DOMContentLoaded` if the document
/// is still being parsed.
pub fn start() -> Result<(), BehaviorError> {
    let document = document()?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || {
            if let Err(err) = init() {
                error!("Page behaviors not attached: {}", err);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        Ok(())
    } else {
        init()
    }
}

fn init() -> Result<(), BehaviorError> {
    let document = document()?;
    let config = load_config(&document);
    let view = Rc::new(DomView::locate(&config)?);
    let fade_sections = view.fade_sections().len();
    let lazy_images = view.lazy_images().len();

    let page = PageBehaviors::new(view, BrowserScheduler, config, fade_sections, lazy_images);
    listeners::bind(&page)?;

    let can_observe = observers::supported();
    if !attach_optional("lazy image loading", can_observe, || {
        observers::observe_lazy_images(&page)
    }) {
        page.load_all_lazy_images();
    }
    if !attach_optional("section fade-in", can_observe, || {
        observers::observe_fade_sections(&page)
    }) {
        page.reveal_all_sections();
    }

    page.on_ready(page.view().scroll_offset());
    Ok(())
}

/// Attaches an enhancement the page works without. Returns `false` when it
/// is unsupported or failed; the failure is logged and setup goes on.
fn attach_optional<F>(feature: &str, supported: bool, attach: F) -> bool
where
    F: FnOnce() -> Result<(), BehaviorError>,
{
    if !supported {
        info!("{} unavailable in this browser", feature);
        return false;
    }
    match attach() {
        Ok(()) => true,
        Err(err) => {
            warn!("{} not attached: {}", feature, err);
            false
        }
    }
}

fn load_config(document: &Document) -> BehaviorConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content())
    else {
        return BehaviorConfig::default();
    };

    BehaviorConfig::from_json(&raw).unwrap_or_else(|err| {
        warn!("Ignoring #{}: {}", CONFIG_SCRIPT_ID, err);
        BehaviorConfig::default()
    })
}

pub(crate) fn document() -> Result<Document, BehaviorError> {
    window()
        .ok_or(BehaviorError::NoWindow)?
        .document()
        .ok_or(BehaviorError::NoDocument)
}

pub(crate) fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, BehaviorError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BehaviorError::MissingElement(format!("#{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| BehaviorError::WrongElementType(format!("#{}", id)))
}

/// Elements of `list` that are a `T`, in document order.
pub(crate) fn collect<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub(crate) fn report<T>(result: Result<T, JsValue>, action: &str) {
    if let Err(err) = result {
        warn!("{} failed: {:?}", action, err);
    }
}

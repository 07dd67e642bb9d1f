use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, KeyboardEvent, Node};

use super::{collect, document, BrowserPage};
use crate::behaviors::analytics::track_cta_click;
use crate::config::Selectors;
use crate::error::BehaviorError;

/// Registers `handler` for the lifetime of the page.
fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), BehaviorError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub(super) fn bind(page: &Rc<BrowserPage>) -> Result<(), BehaviorError> {
    bind_navigation(page)?;
    bind_scrolling(page)?;
    bind_contact_form(page)?;
    bind_portfolio(page)?;
    bind_cta_tracking()?;
    Ok(())
}

fn bind_navigation(page: &Rc<BrowserPage>) -> Result<(), BehaviorError> {
    let view = page.view();

    let p = page.clone();
    listen(view.nav_toggle(), "click", move |_| p.on_nav_toggle())?;

    for link in view.nav_links() {
        let p = page.clone();
        listen(link, "click", move |_| p.on_nav_link_click())?;
    }

    let p = page.clone();
    listen(view.document(), "click", move |event: Event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let view = p.view();
        let inside_menu = view.nav_menu().contains(target.as_ref());
        let inside_toggle = view.nav_toggle().contains(target.as_ref());
        p.on_document_click(inside_menu, inside_toggle);
    })?;

    let p = page.clone();
    listen(view.nav_menu(), "keydown", move |event: Event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let focus = p.view().menu_focus();
        if p.on_menu_keydown(&key_event.key(), key_event.shift_key(), focus) {
            event.prevent_default();
        }
    })?;

    Ok(())
}

fn bind_scrolling(page: &Rc<BrowserPage>) -> Result<(), BehaviorError> {
    let window = web_sys::window().ok_or(BehaviorError::NoWindow)?;

    let p = page.clone();
    listen(&window, "scroll", move |_| {
        let offset = p.view().scroll_offset();
        p.on_scroll(offset);
    })?;

    let p = page.clone();
    listen(page.view().scroll_to_top_button(), "click", move |_| {
        p.on_scroll_top_click()
    })?;

    let anchors: Vec<Element> = collect(document()?.query_selector_all(Selectors::ANCHORS)?);
    for anchor in anchors {
        let p = page.clone();
        let href = anchor.clone();
        listen(&anchor, "click", move |event: Event| {
            let href = href.get_attribute("href").unwrap_or_default();
            if p.on_anchor_click(&href) {
                event.prevent_default();
            }
        })?;
    }

    Ok(())
}

fn bind_contact_form(page: &Rc<BrowserPage>) -> Result<(), BehaviorError> {
    let p = page.clone();
    listen(page.view().contact_form(), "submit", move |event: Event| {
        event.prevent_default();
        let submission = p.view().read_submission();
        if let Err(err) = p.on_contact_submit(submission) {
            debug!("Contact form rejected: {}", err);
        }
    })
}

fn bind_portfolio(page: &Rc<BrowserPage>) -> Result<(), BehaviorError> {
    for (index, item) in page.view().portfolio_items().iter().enumerate() {
        let p = page.clone();
        listen(item, "click", move |_| p.on_portfolio_click(index))?;
    }
    Ok(())
}

fn bind_cta_tracking() -> Result<(), BehaviorError> {
    let buttons: Vec<Element> = collect(document()?.query_selector_all(Selectors::CTA_BUTTONS)?);
    for button in buttons {
        let label = button.clone();
        listen(&button, "click", move |_| {
            track_cta_click(&label.text_content().unwrap_or_default());
        })?;
    }
    Ok(())
}

//! Event-driven behaviors of the landing page.
//!
//! [`PageBehaviors`] owns the page state, the view and the scheduler. Each
//! submodule adds the handlers for one feature; none of them touch the DOM
//! directly.

pub mod analytics;
pub mod anchor;
pub mod contact;
pub mod header;
pub mod highlight;
pub mod nav;
pub mod portfolio;
pub mod reveal;
pub mod scroll_top;

#[cfg(test)]
pub(crate) mod testing;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::info;

use crate::config::BehaviorConfig;
use crate::debounce::debounce;
use crate::state::PageState;
use crate::timer::Scheduler;
use crate::view::PageView;

pub const READY_MESSAGE: &str = "Diseñoría - Sitio web inicializado";

pub struct PageBehaviors<V, S>
where
    V: PageView + 'static,
    S: Scheduler,
{
    view: Rc<V>,
    scheduler: S,
    config: BehaviorConfig,
    state: RefCell<PageState>,
    debounced_highlight: Box<dyn Fn(f64)>,
    this: Weak<Self>,
}

impl<V, S> PageBehaviors<V, S>
where
    V: PageView + 'static,
    S: Scheduler,
{
    /// `fade_sections` and `lazy_images` size the one-shot trigger tables.
    pub fn new(
        view: Rc<V>,
        scheduler: S,
        config: BehaviorConfig,
        fade_sections: usize,
        lazy_images: usize,
    ) -> Rc<Self> {
        Rc::new_cyclic(|this: &Weak<Self>| {
            let page = this.clone();
            let debounced_highlight = debounce(
                scheduler.clone(),
                config.highlight_debounce_ms,
                move |offset: f64| {
                    if let Some(page) = page.upgrade() {
                        page.highlight_navigation(offset);
                    }
                },
            );

            Self {
                view,
                scheduler,
                config,
                state: RefCell::new(PageState::new(fade_sections, lazy_images)),
                debounced_highlight: Box::new(debounced_highlight),
                this: this.clone(),
            }
        })
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> PageState {
        self.state.borrow().clone()
    }

    /// Window scroll. Header and scroll-to-top react immediately, the
    /// section highlighter is debounced.
    pub fn on_scroll(&self, offset: f64) {
        self.state.borrow_mut().last_scroll = offset;
        self.update_header(offset);
        self.update_scroll_top(offset);
        (self.debounced_highlight)(offset);
    }

    /// Runs once the document is ready.
    pub fn on_ready(&self, offset: f64) {
        info!("{}", READY_MESSAGE);
        self.state.borrow_mut().last_scroll = offset;
        self.highlight_navigation(offset);
        self.view.mark_page_loaded();
    }
}

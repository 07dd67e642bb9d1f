//! Mobile navigation: toggle, close on link/outside click/Escape, and a Tab
//! focus trap while the menu is open.

use log::debug;

use super::PageBehaviors;
use crate::timer::Scheduler;
use crate::view::{MenuEdge, PageView};

/// Where keyboard focus sits relative to the menu's focusable elements.
/// With a single focusable element both flags are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuFocus {
    pub on_first: bool,
    pub on_last: bool,
}

/// Edge to jump to for a Tab press, if focus has to wrap.
pub fn wrap_focus(shift: bool, focus: MenuFocus) -> Option<MenuEdge> {
    if shift && focus.on_first {
        Some(MenuEdge::Last)
    } else if !shift && focus.on_last {
        Some(MenuEdge::First)
    } else {
        None
    }
}

impl<V, S> PageBehaviors<V, S>
where
    V: PageView + 'static,
    S: Scheduler,
{
    pub fn is_nav_open(&self) -> bool {
        self.state.borrow().nav_open
    }

    pub fn on_nav_toggle(&self) {
        let open = {
            let mut state = self.state.borrow_mut();
            state.nav_open = !state.nav_open;
            state.nav_open
        };
        debug!("Navigation menu {}", if open { "opened" } else { "closed" });
        self.view.set_nav_open(open);
    }

    pub fn on_nav_link_click(&self) {
        self.close_nav();
    }

    /// Any click on the document. Clicks inside the menu or on the toggle
    /// are handled by their own listeners.
    pub fn on_document_click(&self, inside_menu: bool, inside_toggle: bool) {
        if !inside_menu && !inside_toggle && self.is_nav_open() {
            self.close_nav();
        }
    }

    /// Keydown inside the menu. Returns `true` when the default action must
    /// be prevented.
    pub fn on_menu_keydown(&self, key: &str, shift: bool, focus: MenuFocus) -> bool {
        if !self.is_nav_open() {
            return false;
        }

        match key {
            "Tab" => match wrap_focus(shift, focus) {
                Some(edge) => {
                    self.view.focus_menu_edge(edge);
                    true
                }
                None => false,
            },
            "Escape" => {
                self.close_nav();
                self.view.focus_nav_toggle();
                false
            }
            _ => false,
        }
    }

    fn close_nav(&self) {
        self.state.borrow_mut().nav_open = false;
        self.view.set_nav_open(false);
    }
}

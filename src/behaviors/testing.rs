use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::behaviors::PageBehaviors;
use crate::config::BehaviorConfig;
use crate::timer::VirtualScheduler;
use crate::view::{MenuEdge, MessageKind, PageView, SectionBounds};

#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    NavOpen(bool),
    FocusEdge(MenuEdge),
    FocusToggle,
    HeaderScrolled(bool),
    ScrollTopVisible(bool),
    ScrollTo(f64),
    ActiveLink(String),
    SubmitLabel(String),
    SubmitEnabled(bool),
    ResetForm,
    ShowMessage(u32, MessageKind, String),
    FadeMessage(u32, u32),
    RemoveMessage(u32),
    PortfolioPressed(usize, bool),
    LoadImage(usize),
    FadeIn(usize),
    PageLoaded,
}

/// Records every view update and serves canned geometry.
pub struct RecordingView {
    calls: RefCell<Vec<ViewCall>>,
    header_height: Cell<f64>,
    targets: RefCell<HashMap<String, f64>>,
    sections: RefCell<Vec<SectionBounds>>,
    submit_label: RefCell<String>,
    backgrounds: RefCell<HashSet<usize>>,
    next_message: Cell<u32>,
    attached_messages: RefCell<Vec<u32>>,
    body_scroll_locked: Cell<bool>,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            header_height: Cell::new(80.0),
            targets: RefCell::new(HashMap::new()),
            sections: RefCell::new(Vec::new()),
            submit_label: RefCell::new("Enviar mensaje".to_string()),
            backgrounds: RefCell::new(HashSet::new()),
            next_message: Cell::new(0),
            attached_messages: RefCell::new(Vec::new()),
            body_scroll_locked: Cell::new(false),
        }
    }
}

impl RecordingView {
    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.borrow().clone()
    }

    pub fn has(&self, call: &ViewCall) -> bool {
        self.calls.borrow().contains(call)
    }

    pub fn count(&self, pred: impl Fn(&ViewCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(*c)).count()
    }

    pub fn last(&self, pred: impl Fn(&ViewCall) -> bool) -> Option<ViewCall> {
        self.calls.borrow().iter().rev().find(|c| pred(*c)).cloned()
    }

    pub fn active_links(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                ViewCall::ActiveLink(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Messages shown so far, oldest first.
    pub fn messages(&self) -> Vec<(MessageKind, String)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                ViewCall::ShowMessage(_, kind, text) => Some((*kind, text.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn attached_messages(&self) -> Vec<u32> {
        self.attached_messages.borrow().clone()
    }

    pub fn body_scroll_locked(&self) -> bool {
        self.body_scroll_locked.get()
    }

    pub fn set_header_height(&self, height: f64) {
        self.header_height.set(height);
    }

    pub fn add_target(&self, id: &str, top: f64) {
        self.targets.borrow_mut().insert(id.to_string(), top);
    }

    pub fn set_sections(&self, sections: Vec<SectionBounds>) {
        *self.sections.borrow_mut() = sections;
    }

    pub fn set_background(&self, index: usize) {
        self.backgrounds.borrow_mut().insert(index);
    }

    pub fn current_submit_label(&self) -> String {
        self.submit_label.borrow().clone()
    }

    fn record(&self, call: ViewCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl PageView for RecordingView {
    type Message = u32;

    fn set_nav_open(&self, open: bool) {
        self.body_scroll_locked.set(open);
        self.record(ViewCall::NavOpen(open));
    }

    fn focus_menu_edge(&self, edge: MenuEdge) {
        self.record(ViewCall::FocusEdge(edge));
    }

    fn focus_nav_toggle(&self) {
        self.record(ViewCall::FocusToggle);
    }

    fn set_header_scrolled(&self, scrolled: bool) {
        self.record(ViewCall::HeaderScrolled(scrolled));
    }

    fn header_height(&self) -> f64 {
        self.header_height.get()
    }

    fn set_scroll_top_visible(&self, visible: bool) {
        self.record(ViewCall::ScrollTopVisible(visible));
    }

    fn scroll_to(&self, top: f64) {
        self.record(ViewCall::ScrollTo(top));
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.targets.borrow().get(id).copied()
    }

    fn section_bounds(&self) -> Vec<SectionBounds> {
        self.sections.borrow().clone()
    }

    fn set_active_link(&self, section_id: &str) {
        self.record(ViewCall::ActiveLink(section_id.to_string()));
    }

    fn submit_label(&self) -> String {
        self.submit_label.borrow().clone()
    }

    fn set_submit_label(&self, label: &str) {
        *self.submit_label.borrow_mut() = label.to_string();
        self.record(ViewCall::SubmitLabel(label.to_string()));
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.record(ViewCall::SubmitEnabled(enabled));
    }

    fn reset_form(&self) {
        self.record(ViewCall::ResetForm);
    }

    fn show_form_message(&self, kind: MessageKind, text: &str) -> u32 {
        let id = self.next_message.get();
        self.next_message.set(id + 1);
        *self.attached_messages.borrow_mut() = vec![id];
        self.record(ViewCall::ShowMessage(id, kind, text.to_string()));
        id
    }

    fn fade_form_message(&self, message: &u32, fade_ms: u32) {
        self.record(ViewCall::FadeMessage(*message, fade_ms));
    }

    fn remove_form_message(&self, message: &u32) {
        self.attached_messages.borrow_mut().retain(|m| m != message);
        self.record(ViewCall::RemoveMessage(*message));
    }

    fn set_portfolio_pressed(&self, index: usize, pressed: bool) {
        self.record(ViewCall::PortfolioPressed(index, pressed));
    }

    fn lazy_image_has_background(&self, index: usize) -> bool {
        self.backgrounds.borrow().contains(&index)
    }

    fn load_lazy_image(&self, index: usize) {
        self.record(ViewCall::LoadImage(index));
    }

    fn set_section_faded_in(&self, index: usize) {
        self.record(ViewCall::FadeIn(index));
    }

    fn mark_page_loaded(&self) {
        self.record(ViewCall::PageLoaded);
    }
}

pub type TestPage = PageBehaviors<RecordingView, VirtualScheduler>;

/// Page with six fade sections and three lazy images on a virtual clock.
pub fn fixture() -> (Rc<TestPage>, Rc<RecordingView>, VirtualScheduler) {
    let view = Rc::new(RecordingView::default());
    let clock = VirtualScheduler::new();
    let page = PageBehaviors::new(
        view.clone(),
        clock.clone(),
        BehaviorConfig::default(),
        6,
        3,
    );
    (page, view, clock)
}

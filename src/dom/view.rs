use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

use super::{by_id, collect, report};
use crate::behaviors::contact::ContactSubmission;
use crate::behaviors::highlight::active_link_flags;
use crate::behaviors::nav::MenuFocus;
use crate::config::{BehaviorConfig, Selectors};
use crate::error::BehaviorError;
use crate::view::{MenuEdge, MessageKind, PageView, SectionBounds};

/// The landing page as rendered by the server.
pub struct DomView {
    window: Window,
    document: Document,
    body: HtmlElement,
    header: HtmlElement,
    nav_toggle: HtmlElement,
    nav_menu: HtmlElement,
    nav_links: Vec<Element>,
    scroll_to_top: HtmlElement,
    contact_form: HtmlFormElement,
    submit_button: HtmlButtonElement,
    portfolio_items: Vec<HtmlElement>,
    sections: Vec<HtmlElement>,
    lazy_images: Vec<Element>,
    fade_sections: Vec<Element>,
}

impl DomView {
    /// Looks up every element the behaviors need. Any required element
    /// missing from the markup is fatal.
    pub fn locate(config: &BehaviorConfig) -> Result<Self, BehaviorError> {
        let window = web_sys::window().ok_or(BehaviorError::NoWindow)?;
        let document = window.document().ok_or(BehaviorError::NoDocument)?;
        let body = document
            .body()
            .ok_or_else(|| BehaviorError::MissingElement("body".to_string()))?;

        let contact_form: HtmlFormElement = by_id(&document, Selectors::CONTACT_FORM)?;
        let submit_button = contact_form
            .query_selector(Selectors::SUBMIT_BUTTON)?
            .ok_or_else(|| BehaviorError::MissingElement(Selectors::SUBMIT_BUTTON.to_string()))?
            .dyn_into::<HtmlButtonElement>()
            .map_err(|_| BehaviorError::WrongElementType(Selectors::SUBMIT_BUTTON.to_string()))?;

        Ok(Self {
            header: by_id(&document, Selectors::HEADER)?,
            nav_toggle: by_id(&document, Selectors::NAV_TOGGLE)?,
            nav_menu: by_id(&document, Selectors::NAV_MENU)?,
            nav_links: collect(document.query_selector_all(Selectors::NAV_LINKS)?),
            scroll_to_top: by_id(&document, Selectors::SCROLL_TO_TOP)?,
            portfolio_items: collect(document.query_selector_all(Selectors::PORTFOLIO_ITEMS)?),
            sections: collect(document.query_selector_all(Selectors::SECTIONS)?),
            lazy_images: collect(document.query_selector_all(Selectors::LAZY_IMAGES)?),
            fade_sections: collect(document.query_selector_all(&config.fade_selector())?),
            contact_form,
            submit_button,
            window,
            document,
            body,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn nav_toggle(&self) -> &HtmlElement {
        &self.nav_toggle
    }

    pub fn nav_menu(&self) -> &HtmlElement {
        &self.nav_menu
    }

    pub fn nav_links(&self) -> &[Element] {
        &self.nav_links
    }

    pub fn scroll_to_top_button(&self) -> &HtmlElement {
        &self.scroll_to_top
    }

    pub fn contact_form(&self) -> &HtmlFormElement {
        &self.contact_form
    }

    pub fn portfolio_items(&self) -> &[HtmlElement] {
        &self.portfolio_items
    }

    pub fn lazy_images(&self) -> &[Element] {
        &self.lazy_images
    }

    pub fn fade_sections(&self) -> &[Element] {
        &self.fade_sections
    }

    pub fn scroll_offset(&self) -> f64 {
        self.window.page_y_offset().unwrap_or(0.0)
    }

    /// Current form values; a form that cannot be read yields empty fields.
    pub fn read_submission(&self) -> ContactSubmission {
        match FormData::new_with_form(&self.contact_form) {
            Ok(data) => ContactSubmission::from_fields(|name| data.get(name).as_string()),
            Err(err) => {
                warn!("Could not read contact form: {:?}", err);
                ContactSubmission::default()
            }
        }
    }

    fn menu_focusables(&self) -> Vec<HtmlElement> {
        self.nav_menu
            .query_selector_all(Selectors::MENU_FOCUSABLE)
            .map(collect)
            .unwrap_or_default()
    }

    /// Position of the focused element among the menu's focusables.
    pub fn menu_focus(&self) -> MenuFocus {
        let focusables = self.menu_focusables();
        let Some(active) = self.document.active_element() else {
            return MenuFocus::default();
        };
        let is_active = |el: Option<&HtmlElement>| {
            el.map_or(false, |el| {
                let el: &Element = el;
                *el == active
            })
        };
        MenuFocus {
            on_first: is_active(focusables.first()),
            on_last: is_active(focusables.last()),
        }
    }

    fn build_message(&self, kind: MessageKind, text: &str) -> Result<HtmlElement, BehaviorError> {
        if let Some(existing) = self.contact_form.query_selector(Selectors::FORM_MESSAGE)? {
            existing.remove();
        }

        let message = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| BehaviorError::WrongElementType("div".to_string()))?;
        message.set_class_name(&kind.class_name());
        message.set_text_content(Some(text));

        let palette = kind.palette();
        let style = message.style();
        for (property, value) in [
            ("padding", "16px"),
            ("border-radius", "6px"),
            ("margin-top", "16px"),
            ("text-align", "center"),
            ("font-weight", "600"),
            ("background-color", palette.background),
            ("color", palette.color),
            ("border", palette.border),
        ] {
            style.set_property(property, value)?;
        }

        self.contact_form.append_child(&message)?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        message.scroll_into_view_with_scroll_into_view_options(&options);

        Ok(message)
    }
}

impl PageView for DomView {
    /// `None` when the node could not be created.
    type Message = Option<HtmlElement>;

    fn set_nav_open(&self, open: bool) {
        report(
            self.nav_toggle.class_list().toggle_with_force("active", open),
            "toggle nav button",
        );
        report(
            self.nav_menu.class_list().toggle_with_force("active", open),
            "toggle nav menu",
        );
        report(
            self.body
                .style()
                .set_property("overflow", if open { "hidden" } else { "" }),
            "set body overflow",
        );
    }

    fn focus_menu_edge(&self, edge: MenuEdge) {
        let focusables = self.menu_focusables();
        let target = match edge {
            MenuEdge::First => focusables.first(),
            MenuEdge::Last => focusables.last(),
        };
        if let Some(target) = target {
            report(target.focus(), "focus menu item");
        }
    }

    fn focus_nav_toggle(&self) {
        report(self.nav_toggle.focus(), "focus nav toggle");
    }

    fn set_header_scrolled(&self, scrolled: bool) {
        report(
            self.header.class_list().toggle_with_force("scrolled", scrolled),
            "toggle header state",
        );
    }

    fn header_height(&self) -> f64 {
        f64::from(self.header.offset_height())
    }

    fn set_scroll_top_visible(&self, visible: bool) {
        report(
            self.scroll_to_top
                .class_list()
                .toggle_with_force("visible", visible),
            "toggle scroll-to-top",
        );
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| f64::from(el.offset_top()))
    }

    fn section_bounds(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .map(|section| {
                SectionBounds::new(
                    section.id(),
                    f64::from(section.offset_top()),
                    f64::from(section.offset_height()),
                )
            })
            .collect()
    }

    fn set_active_link(&self, section_id: &str) {
        let hrefs: Vec<Option<String>> =
            self.nav_links.iter().map(|link| link.get_attribute("href")).collect();
        let flags = active_link_flags(hrefs.iter().map(Option::as_deref), section_id);
        for (link, active) in self.nav_links.iter().zip(flags) {
            report(
                link.class_list().toggle_with_force("active", active),
                "toggle nav link",
            );
        }
    }

    fn submit_label(&self) -> String {
        self.submit_button.text_content().unwrap_or_default()
    }

    fn set_submit_label(&self, label: &str) {
        self.submit_button.set_text_content(Some(label));
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_button.set_disabled(!enabled);
    }

    fn reset_form(&self) {
        self.contact_form.reset();
    }

    fn show_form_message(&self, kind: MessageKind, text: &str) -> Option<HtmlElement> {
        self.build_message(kind, text)
            .map_err(|err| warn!("Could not show form message: {}", err))
            .ok()
    }

    fn fade_form_message(&self, message: &Option<HtmlElement>, fade_ms: u32) {
        let Some(message) = message else {
            return;
        };
        let style = message.style();
        let transition = format!("opacity {}s ease", f64::from(fade_ms) / 1000.0);
        report(style.set_property("transition", &transition), "set message transition");
        report(style.set_property("opacity", "0"), "fade message");
    }

    fn remove_form_message(&self, message: &Option<HtmlElement>) {
        if let Some(message) = message {
            message.remove();
        }
    }

    fn set_portfolio_pressed(&self, index: usize, pressed: bool) {
        if let Some(item) = self.portfolio_items.get(index) {
            let transform = if pressed { "scale(0.98)" } else { "" };
            report(item.style().set_property("transform", transform), "pulse portfolio item");
        }
    }

    fn lazy_image_has_background(&self, index: usize) -> bool {
        self.lazy_images
            .get(index)
            .and_then(|img| img.dyn_ref::<HtmlElement>())
            .and_then(|img| img.style().get_property_value("background-image").ok())
            .map_or(false, |background| background.contains("url"))
    }

    fn load_lazy_image(&self, index: usize) {
        let Some(img) = self.lazy_images.get(index) else {
            return;
        };
        if let Some(src) = img.get_attribute("data-src") {
            report(img.set_attribute("src", &src), "set image src");
            report(img.remove_attribute("data-src"), "clear data-src");
        }
    }

    fn set_section_faded_in(&self, index: usize) {
        if let Some(section) = self.fade_sections.get(index) {
            report(section.class_list().add_1("fade-in"), "fade in section");
        }
    }

    fn mark_page_loaded(&self) {
        report(self.body.class_list().add_1("loaded"), "mark body loaded");
    }
}

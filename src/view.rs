//! View-update interface between behavior logic and the rendered page.
//!
//! Behaviors only talk to the page through [`PageView`]. The browser
//! implementation lives in [`crate::dom::DomView`].

/// Vertical extent of a `section[id]`, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open: the top edge belongs to the section, the bottom edge to the next.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEdge {
    First,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }

    pub fn class_name(self) -> String {
        format!("form-message form-message-{}", self.as_str())
    }

    pub fn palette(self) -> MessagePalette {
        match self {
            MessageKind::Success => MessagePalette {
                background: "#d4edda",
                color: "#155724",
                border: "1px solid #c3e6cb",
            },
            MessageKind::Error => MessagePalette {
                background: "#f8d7da",
                color: "#721c24",
                border: "1px solid #f5c6cb",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessagePalette {
    pub background: &'static str,
    pub color: &'static str,
    pub border: &'static str,
}

pub trait PageView {
    /// Handle to an inserted form message node.
    type Message: Clone + 'static;

    /// `active` on toggle and menu, body overflow hidden while open.
    fn set_nav_open(&self, open: bool);
    fn focus_menu_edge(&self, edge: MenuEdge);
    fn focus_nav_toggle(&self);

    fn set_header_scrolled(&self, scrolled: bool);
    fn header_height(&self) -> f64;

    fn set_scroll_top_visible(&self, visible: bool);
    /// Smooth scroll of the window to `top`.
    fn scroll_to(&self, top: f64);
    /// Document offset of the element with `id`, if present.
    fn element_top(&self, id: &str) -> Option<f64>;

    fn section_bounds(&self) -> Vec<SectionBounds>;
    /// Marks the link pointing at `#section_id` active and clears the rest.
    fn set_active_link(&self, section_id: &str);

    fn submit_label(&self) -> String;
    fn set_submit_label(&self, label: &str);
    fn set_submit_enabled(&self, enabled: bool);
    fn reset_form(&self);

    /// Removes any existing message, inserts a styled one and scrolls it into view.
    fn show_form_message(&self, kind: MessageKind, text: &str) -> Self::Message;
    fn fade_form_message(&self, message: &Self::Message, fade_ms: u32);
    fn remove_form_message(&self, message: &Self::Message);

    fn set_portfolio_pressed(&self, index: usize, pressed: bool);

    fn lazy_image_has_background(&self, index: usize) -> bool;
    /// Moves `data-src` into `src`.
    fn load_lazy_image(&self, index: usize);
    fn set_section_faded_in(&self, index: usize);

    /// `loaded` on body.
    fn mark_page_loaded(&self);
}

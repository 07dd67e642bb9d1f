use log::Level;
use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the optional inline JSON block that overrides [`BehaviorConfig`].
pub const CONFIG_SCRIPT_ID: &str = "page-behaviors-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose traces while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Thresholds, delays and observer options for every page behavior.
///
/// All pixel values are CSS pixels, all delays milliseconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BehaviorConfig {
    /// Header gets `scrolled` once the offset is strictly above this.
    pub header_scrolled_after: f64,
    /// Scroll-to-top control shows once the offset is strictly above this.
    pub scroll_top_visible_after: f64,
    /// Distance below the viewport top used to pick the active section.
    pub highlight_line_offset: f64,
    pub highlight_debounce_ms: u32,
    pub submit_delay_ms: u32,
    pub message_lifetime_ms: u32,
    pub message_fade_ms: u32,
    pub portfolio_pulse_ms: u32,
    pub lazy_root_margin: String,
    pub fade_threshold: f64,
    pub fade_root_margin: String,
    /// Selectors of the sections that fade in on first sight.
    pub fade_sections: Vec<String>,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            header_scrolled_after: 50.0,
            scroll_top_visible_after: 500.0,
            highlight_line_offset: 100.0,
            highlight_debounce_ms: 100,
            submit_delay_ms: 1_500,
            message_lifetime_ms: 5_000,
            message_fade_ms: 300,
            portfolio_pulse_ms: 200,
            lazy_root_margin: "50px".to_string(),
            fade_threshold: 0.1,
            fade_root_margin: "0px 0px -100px 0px".to_string(),
            fade_sections: [
                ".values",
                ".services",
                ".portfolio",
                ".process",
                ".testimonials",
                ".about",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl BehaviorConfig {
    /// Parses and validates an override block. Missing keys keep their
    /// defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the DOM or the observer constructors would throw on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fade_sections.is_empty() || self.fade_sections.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::EmptyFadeSelector);
        }
        if !(0.0..=1.0).contains(&self.fade_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.fade_threshold));
        }
        for margin in [&self.lazy_root_margin, &self.fade_root_margin] {
            if !is_root_margin(margin) {
                return Err(ConfigError::InvalidRootMargin(margin.clone()));
            }
        }
        Ok(())
    }

    /// Comma-joined selector for the fade-in observer.
    pub fn fade_selector(&self) -> String {
        self.fade_sections.join(", ")
    }
}

/// One to four lengths, each in `px` or `%`, as IntersectionObserver accepts.
fn is_root_margin(margin: &str) -> bool {
    let parts: Vec<&str> = margin.split_whitespace().collect();
    (1..=4).contains(&parts.len())
        && parts.iter().all(|part| {
            part.strip_suffix("px")
                .or_else(|| part.strip_suffix('%'))
                .map_or(false, |number| number.parse::<f64>().is_ok())
        })
}

/// DOM hooks the host markup has to provide.
pub struct Selectors;

impl Selectors {
    pub const HEADER: &'static str = "header";
    pub const NAV_TOGGLE: &'static str = "navToggle";
    pub const NAV_MENU: &'static str = "navMenu";
    pub const NAV_LINKS: &'static str = ".nav-link";
    pub const MENU_FOCUSABLE: &'static str = "a, button";
    pub const SCROLL_TO_TOP: &'static str = "scrollToTop";
    pub const CONTACT_FORM: &'static str = "contactForm";
    pub const SUBMIT_BUTTON: &'static str = "button[type=\"submit\"]";
    pub const FORM_MESSAGE: &'static str = ".form-message";
    pub const PORTFOLIO_ITEMS: &'static str = ".portfolio-item";
    pub const SECTIONS: &'static str = "section[id]";
    pub const ANCHORS: &'static str = "a[href^=\"#\"]";
    pub const LAZY_IMAGES: &'static str = "img[data-src]";
    pub const CTA_BUTTONS: &'static str = ".btn-primary";
}

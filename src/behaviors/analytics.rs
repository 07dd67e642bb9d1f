//! Conversion tracking. Events only go to the console log for now.

use log::info;

pub fn track_cta_click(label: &str) {
    info!("CTA clicked: {}", label.trim());
}

/// `index` is zero-based; the log line counts from one.
pub fn track_portfolio_view(index: usize) {
    info!("Portfolio item viewed: {}", index + 1);
}

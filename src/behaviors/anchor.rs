use log::debug;

use super::PageBehaviors;
use crate::timer::Scheduler;
use crate::view::PageView;

/// Target id of a same-page link. Bare `#` and empty hrefs have none.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

impl<V, S> PageBehaviors<V, S>
where
    V: PageView + 'static,
    S: Scheduler,
{
    /// Click on an `a[href^="#"]`. Returns `true` when the default jump must
    /// be prevented.
    pub fn on_anchor_click(&self, href: &str) -> bool {
        let Some(id) = anchor_target(href) else {
            return false;
        };

        match self.view.element_top(id) {
            Some(top) => {
                let position = top - self.view.header_height();
                debug!("Smooth scroll to #{} at {}", id, position);
                self.view.scroll_to(position);
            }
            None => debug!("Anchor target #{} not found", id),
        }
        true
    }
}

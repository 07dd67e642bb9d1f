//! Active nav link follows the section under a line just below the viewport top.

use log::debug;

use super::PageBehaviors;
use crate::timer::Scheduler;
use crate::view::{PageView, SectionBounds};

/// Section whose span contains `line`. On overlapping spans the later
/// section in document order wins.
pub fn section_at(sections: &[SectionBounds], line: f64) -> Option<&SectionBounds> {
    sections.iter().filter(|s| s.contains(line)).last()
}

/// Which nav links carry `active` for `section_id`, given each link's `href`.
/// Only the first link pointing at `#section_id` is flagged, so at most one
/// link is active.
pub fn active_link_flags<'a, I>(hrefs: I, section_id: &str) -> Vec<bool>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let target = format!("#{}", section_id);
    let mut found = false;
    hrefs
        .into_iter()
        .map(|href| {
            let active = !found && href == Some(target.as_str());
            found |= active;
            active
        })
        .collect()
}

impl<V, S> PageBehaviors<V, S>
where
    V: PageView + 'static,
    S: Scheduler,
{
    /// Marks the link of the section under `offset + highlight_line_offset`.
    /// When no section matches the current link stays active.
    pub fn highlight_navigation(&self, offset: f64) {
        let line = offset + self.config.highlight_line_offset;
        let sections = self.view.section_bounds();
        let Some(section) = section_at(&sections, line) else {
            debug!("No section under {}, keeping active link", line);
            return;
        };

        self.view.set_active_link(&section.id);
        self.state.borrow_mut().active_section = Some(section.id.clone());
    }
}

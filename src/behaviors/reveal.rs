//! One-shot intersection triggers: section fade-in and lazy images.
//!
//! The trigger tables in [`crate::state::PageState`] make both handlers
//! idempotent, so a late or duplicated observer delivery is harmless.

use log::debug;

use super::PageBehaviors;
use crate::timer::Scheduler;
use crate::view::PageView;

impl<V, S> PageBehaviors<V, S>
where
    V: PageView + 'static,
    S: Scheduler,
{
    /// Returns `true` when the section can be unobserved.
    pub fn on_section_intersect(&self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        let first = self.state.borrow_mut().sections.fire(index);
        if first {
            debug!("Section {} faded in", index);
            self.view.set_section_faded_in(index);
        }
        true
    }

    /// Returns `true` when the image can be unobserved.
    pub fn on_lazy_image_intersect(&self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        let first = self.state.borrow_mut().images.fire(index);
        if !first {
            return true;
        }

        if self.view.lazy_image_has_background(index) {
            debug!("Lazy image {} uses a background image, skipping", index);
        } else {
            self.view.load_lazy_image(index);
        }
        true
    }

    /// Fallback without intersection observation: every section shows at once.
    pub fn reveal_all_sections(&self) {
        let count = self.state.borrow().sections.len();
        for index in 0..count {
            self.on_section_intersect(index, true);
        }
    }

    /// Fallback without intersection observation: every image loads at once.
    pub fn load_all_lazy_images(&self) {
        let count = self.state.borrow().images.len();
        for index in 0..count {
            self.on_lazy_image_intersect(index, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::behaviors::testing::{fixture, ViewCall};
    use crate::state::TriggerState;

    #[test]
    fn section_fades_in_once() {
        let (page, view, _) = fixture();

        assert!(!page.on_section_intersect(1, false));
        assert!(view.calls().is_empty());

        assert!(page.on_section_intersect(1, true));
        assert!(page.on_section_intersect(1, true));
        assert!(page.on_section_intersect(1, true));

        assert_eq!(view.calls(), vec![ViewCall::FadeIn(1)]);
        assert_eq!(page.snapshot().sections.state(1), Some(TriggerState::Triggered));
        assert_eq!(page.snapshot().sections.triggered_count(), 1);
    }

    #[test]
    fn lazy_image_loads_once() {
        let (page, view, _) = fixture();

        assert!(page.on_lazy_image_intersect(0, true));
        assert!(page.on_lazy_image_intersect(0, true));
        assert!(!page.on_lazy_image_intersect(2, false));

        assert_eq!(view.calls(), vec![ViewCall::LoadImage(0)]);
        assert_eq!(page.snapshot().images.state(2), Some(TriggerState::Pending));
    }

    #[test]
    fn background_images_are_skipped_but_settled() {
        let (page, view, _) = fixture();
        view.set_background(1);

        assert!(page.on_lazy_image_intersect(1, true));
        assert!(view.calls().is_empty());
        assert_eq!(page.snapshot().images.state(1), Some(TriggerState::Triggered));
    }

    #[test]
    fn fallback_reveals_every_pending_section_once() {
        let (page, view, _) = fixture();
        page.on_section_intersect(2, true);

        page.reveal_all_sections();
        page.reveal_all_sections();

        assert_eq!(view.count(|c| matches!(c, ViewCall::FadeIn(_))), 6);
        assert_eq!(page.snapshot().sections.triggered_count(), 6);
    }

    #[test]
    fn fallback_loads_images_except_backgrounds() {
        let (page, view, _) = fixture();
        view.set_background(0);

        page.load_all_lazy_images();

        assert_eq!(view.calls(), vec![ViewCall::LoadImage(1), ViewCall::LoadImage(2)]);
        assert_eq!(page.snapshot().images.triggered_count(), 3);
    }

    #[test]
    fn unknown_index_is_released_without_changes() {
        let (page, view, _) = fixture();
        assert!(page.on_section_intersect(42, true));
        assert!(view.calls().is_empty());
    }
}

use super::PageBehaviors;
use crate::timer::Scheduler;
use crate::view::PageView;

impl<V, S> PageBehaviors<V, S>
where
    V: PageView + 'static,
    S: Scheduler,
{
    pub(crate) fn update_scroll_top(&self, offset: f64) {
        let visible = offset > self.config.scroll_top_visible_after;
        self.state.borrow_mut().scroll_top_visible = visible;
        self.view.set_scroll_top_visible(visible);
    }

    pub fn on_scroll_top_click(&self) {
        self.view.scroll_to(0.0);
    }
}

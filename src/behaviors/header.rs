use super::PageBehaviors;
use crate::timer::Scheduler;
use crate::view::PageView;

impl<V, S> PageBehaviors<V, S>
where
    V: PageView + 'static,
    S: Scheduler,
{
    pub(crate) fn update_header(&self, offset: f64) {
        let scrolled = offset > self.config.header_scrolled_after;
        self.state.borrow_mut().header_scrolled = scrolled;
        self.view.set_header_scrolled(scrolled);
    }
}

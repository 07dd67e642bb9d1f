use super::analytics::track_portfolio_view;
use super::PageBehaviors;
use crate::timer::Scheduler;
use crate::view::PageView;

impl<V, S> PageBehaviors<V, S>
where
    V: PageView + 'static,
    S: Scheduler,
{
    /// Short press pulse on the clicked item.
    pub fn on_portfolio_click(&self, index: usize) {
        self.view.set_portfolio_pressed(index, true);
        track_portfolio_view(index);

        let view = self.view.clone();
        self.scheduler
            .defer(self.config.portfolio_pulse_ms, move || view.set_portfolio_pressed(index, false));
    }
}

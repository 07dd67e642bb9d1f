/// Lifecycle of a one-time visual change (fade-in, lazy load).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerState {
    #[default]
    Pending,
    Triggered,
}

/// Per-element one-shot triggers, indexed in document order.
#[derive(Debug, Clone, Default)]
pub struct OneShotTriggers {
    states: Vec<TriggerState>,
}

impl OneShotTriggers {
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![TriggerState::Pending; count],
        }
    }

    /// Moves `index` to `Triggered`. Returns `true` only for the first call;
    /// unknown indexes never fire.
    pub fn fire(&mut self, index: usize) -> bool {
        match self.states.get_mut(index) {
            Some(state) if *state == TriggerState::Pending => {
                *state = TriggerState::Triggered;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<TriggerState> {
        self.states.get(index).copied()
    }

    pub fn triggered_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == TriggerState::Triggered)
            .count()
    }
}

/// Everything the handlers remember between events.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub nav_open: bool,
    pub last_scroll: f64,
    pub header_scrolled: bool,
    pub scroll_top_visible: bool,
    pub active_section: Option<String>,
    pub submitting: bool,
    pub sections: OneShotTriggers,
    pub images: OneShotTriggers,
}

impl PageState {
    pub fn new(fade_sections: usize, lazy_images: usize) -> Self {
        Self {
            sections: OneShotTriggers::new(fade_sections),
            images: OneShotTriggers::new(lazy_images),
            ..Self::default()
        }
    }
}

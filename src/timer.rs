//! One-shot timers behind a small trait so behaviors can run on the browser
//! event loop or on a manually advanced clock.

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

pub trait Scheduler: Clone + 'static {
    /// Dropping the handle cancels the pending task.
    type Handle: 'static;

    /// Runs `task` after `delay_ms`, cancellable through the returned handle.
    fn schedule<F>(&self, delay_ms: u32, task: F) -> Self::Handle
    where
        F: FnOnce() + 'static;

    /// Runs `task` after `delay_ms`. Fire-and-forget.
    fn defer<F>(&self, delay_ms: u32, task: F)
    where
        F: FnOnce() + 'static;
}

/// `setTimeout` backed scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule<F>(&self, delay_ms: u32, task: F) -> Timeout
    where
        F: FnOnce() + 'static,
    {
        Timeout::new(delay_ms, task)
    }

    fn defer<F>(&self, delay_ms: u32, task: F)
    where
        F: FnOnce() + 'static,
    {
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            task();
        });
    }
}

/// Manually advanced clock for tests.
#[cfg(test)]
mod virtual_clock {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::Scheduler;

    struct PendingTask {
        due: u64,
        seq: u64,
        cancelled: Rc<Cell<bool>>,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct VirtualClock {
        now: u64,
        next_seq: u64,
        queue: Vec<PendingTask>,
    }

    /// Deterministic scheduler driven by [`VirtualScheduler::advance`].
    ///
    /// Tasks due at the same instant run in the order they were scheduled.
    /// Tasks scheduled while advancing run in the same call if they fall due
    /// before the target time.
    #[derive(Clone, Default)]
    pub struct VirtualScheduler {
        clock: Rc<RefCell<VirtualClock>>,
    }

    /// Cancels its task on drop.
    pub struct VirtualTimer {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for VirtualTimer {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl VirtualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        /// Number of tasks still waiting to run.
        pub fn pending(&self) -> usize {
            self.clock
                .borrow()
                .queue
                .iter()
                .filter(|p| !p.cancelled.get())
                .count()
        }

        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            while let Some(next) = self.pop_due(target) {
                if !next.cancelled.get() {
                    (next.task)();
                }
            }
            self.clock.borrow_mut().now = target;
        }

        fn pop_due(&self, target: u64) -> Option<PendingTask> {
            let mut clock = self.clock.borrow_mut();
            let index = clock
                .queue
                .iter()
                .enumerate()
                .filter(|(_, p)| p.due <= target)
                .min_by_key(|(_, p)| (p.due, p.seq))
                .map(|(i, _)| i)?;
            let next = clock.queue.swap_remove(index);
            clock.now = next.due;
            Some(next)
        }

        fn push(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Rc<Cell<bool>> {
            let mut clock = self.clock.borrow_mut();
            let cancelled = Rc::new(Cell::new(false));
            let seq = clock.next_seq;
            clock.next_seq += 1;
            let due = clock.now + u64::from(delay_ms);
            clock.queue.push(PendingTask {
                due,
                seq,
                cancelled: cancelled.clone(),
                task,
            });
            cancelled
        }
    }

    impl Scheduler for VirtualScheduler {
        type Handle = VirtualTimer;

        fn schedule<F>(&self, delay_ms: u32, task: F) -> VirtualTimer
        where
            F: FnOnce() + 'static,
        {
            VirtualTimer {
                cancelled: self.push(delay_ms, Box::new(task)),
            }
        }

        fn defer<F>(&self, delay_ms: u32, task: F)
        where
            F: FnOnce() + 'static,
        {
            self.push(delay_ms, Box::new(task));
        }
    }
}

#[cfg(test)]
pub(crate) use virtual_clock::VirtualScheduler;

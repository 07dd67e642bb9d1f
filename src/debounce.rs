use std::cell::RefCell;
use std::rc::Rc;

use crate::timer::Scheduler;

/// Wraps `callback` so a burst of calls closer than `wait_ms` apart collapses
/// into a single call, made `wait_ms` after the last one with its arguments.
pub fn debounce<S, A, F>(scheduler: S, wait_ms: u32, callback: F) -> impl Fn(A)
where
    S: Scheduler,
    A: 'static,
    F: Fn(A) + 'static,
{
    let timer: Rc<RefCell<Option<S::Handle>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    move |args: A| {
        if let Some(previous) = timer.borrow_mut().take() {
            drop(previous);
        }
        let callback = callback.clone();
        let handle = scheduler.schedule(wait_ms, move || callback(args));
        *timer.borrow_mut() = Some(handle);
    }
}

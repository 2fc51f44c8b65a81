use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use yew::Callback;

/// Schedules one-shot tasks. Dropping a handle cancels its task if it has
/// not run yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers. `Timeout` clears itself on drop.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Emits only the last value of a burst, once `delay_ms` has passed
/// without a new one.
pub struct Debouncer<S: Scheduler, T> {
    scheduler: S,
    delay_ms: u32,
    on_settle: Callback<T>,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler, T: 'static> Debouncer<S, T> {
    pub fn new(scheduler: S, delay_ms: u32, on_settle: Callback<T>) -> Self {
        Self {
            scheduler,
            delay_ms,
            on_settle,
            pending: RefCell::new(None),
        }
    }

    pub fn input(&self, value: T) {
        let on_settle = self.on_settle.clone();
        let handle = self
            .scheduler
            .schedule(self.delay_ms, Box::new(move || on_settle.emit(value)));
        // Replacing the previous handle drops it, which cancels it.
        self.pending.replace(Some(handle));
    }

    pub fn cancel(&self) {
        self.pending.replace(None);
    }
}

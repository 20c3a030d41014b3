use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Delay applied to search inputs before a reload fires.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Trailing-edge debouncer. Each `schedule` cancels the previously
/// pending call, so only the last one within the window runs.
#[derive(Clone, Copy)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Signal<Option<Task>>,
}

impl Debouncer {
    pub fn schedule(&self, work: impl FnOnce() + 'static) {
        let mut pending = self.pending;
        if let Some(task) = pending.write().take() {
            task.cancel();
        }

        let delay = self.delay_ms;
        let task = spawn(async move {
            TimeoutFuture::new(delay).await;
            work();
        });
        pending.set(Some(task));
    }

    /// Drop the pending call without running it.
    pub fn cancel(&self) {
        let mut pending = self.pending;
        if let Some(task) = pending.write().take() {
            task.cancel();
        };
    }
}

/// Hook that owns the pending-task slot for a [`Debouncer`].
pub fn use_debouncer(delay_ms: u32) -> Debouncer {
    let pending = use_signal(|| None);
    Debouncer { delay_ms, pending }
}

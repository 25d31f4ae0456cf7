//! Dioxus task scheduler
//!
//! Each scheduled [`TimerEvent`] becomes a spawned task that sleeps and then
//! hands the event to the page's dispatch callback. The task itself is the
//! cancel handle.

use std::time::Duration;

use dioxus::prelude::*;
use exhibit_common::{Scheduler, TimerEvent};

/// [`Scheduler`] backed by tasks on the current Dioxus scope.
#[derive(Clone, Copy, PartialEq)]
pub struct TaskScheduler {
    dispatch: Callback<TimerEvent>,
}

impl TaskScheduler {
    pub fn new(dispatch: Callback<TimerEvent>) -> Self {
        Self { dispatch }
    }
}

impl Scheduler for TaskScheduler {
    type Handle = Task;

    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> Task {
        let dispatch = self.dispatch;
        spawn(async move {
            sleep_ms(delay.as_millis() as u64).await;
            dispatch.call(event);
        })
    }

    fn cancel(&mut self, handle: Task) {
        handle.cancel();
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

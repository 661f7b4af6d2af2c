//! Debounced handler invocation
//!
//! Coalesces bursts of calls (one per keystroke) into a single handler call
//! once input has been quiet for the configured delay. The last value wins;
//! earlier pending values are dropped.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Handle to a debounced handler running on the tokio runtime
pub struct Debouncer<T> {
    sender: mpsc::UnboundedSender<T>,
    worker: JoinHandle<()>,
}

/// Wrap `handler` so that it only runs after `delay` without further calls.
///
/// Must be called from within a tokio runtime.
pub fn debounce<T, F>(delay: Duration, mut handler: F) -> Debouncer<T>
where
    T: Send + 'static,
    F: FnMut(T) + Send + 'static,
{
    let (sender, mut receiver) = mpsc::unbounded_channel::<T>();

    let worker = tokio::spawn(async move {
        let mut pending: Option<T> = None;

        loop {
            match pending.take() {
                None => match receiver.recv().await {
                    Some(value) => pending = Some(value),
                    None => break,
                },
                Some(value) => {
                    tokio::select! {
                        next = receiver.recv() => match next {
                            Some(newer) => {
                                debug!("Debounced call superseded");
                                pending = Some(newer);
                            }
                            // Input closed: flush the last value right away
                            None => {
                                handler(value);
                                break;
                            }
                        },
                        _ = tokio::time::sleep(delay) => handler(value),
                    }
                }
            }
        }
    });

    Debouncer { sender, worker }
}

impl<T> Debouncer<T> {
    /// Schedule a call, superseding any call still waiting for quiet
    pub fn call(&self, value: T) {
        // The worker only stops after `finish`, so a send error cannot be observed here
        let _ = self.sender.send(value);
    }

    /// Stop accepting calls, flush any pending call and wait for the worker
    pub async fn finish(self) {
        let Debouncer { sender, worker } = self;
        drop(sender);
        if let Err(e) = worker.await {
            tracing::error!("Debounce worker failed: {}", e);
        }
    }
}

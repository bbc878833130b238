//! Notification sinks for surfacing failures to the user.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::CartFailure;

/// Receives user-facing failure notifications.
///
/// Fire-and-forget: the cart never consumes an acknowledgement and never
/// retries a notification. The call must not suspend.
pub trait NotificationSink: Send + Sync {
    /// Surfaces one failure to the user.
    fn notify(&self, failure: CartFailure);
}

/// Sink that logs the user-facing message through `tracing`.
///
/// The default wiring when no UI layer is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, failure: CartFailure) {
        tracing::warn!(kind = ?failure, "{}", failure.message());
    }
}

/// Sink that forwards failure kinds to a UI layer over a channel.
///
/// The receiving side renders the message however it likes (toast,
/// banner, status line). A dropped receiver silently discards
/// notifications; fire-and-forget cuts both ways.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<CartFailure>,
}

impl ChannelSink {
    /// Creates the sink and the receiver the UI layer listens on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<CartFailure>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl NotificationSink for ChannelSink {
    fn notify(&self, failure: CartFailure) {
        let _ = self.tx.send(failure);
    }
}

/// Sink that records every failure kind, for tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    seen: Arc<Mutex<Vec<CartFailure>>>,
}

impl RecordingSink {
    /// Creates a new empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all failures recorded so far.
    pub fn failures(&self) -> Vec<CartFailure> {
        self.seen.lock().unwrap().clone()
    }

    /// Returns and clears the recorded failures.
    pub fn take(&self) -> Vec<CartFailure> {
        std::mem::take(&mut *self.seen.lock().unwrap())
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, failure: CartFailure) {
        self.seen.lock().unwrap().push(failure);
    }
}

use async_trait::async_trait;

use crate::{CartSnapshot, Result, SlotKey};

/// Core trait for snapshot store implementations.
///
/// A snapshot store is a key-value slot holding the latest serialized
/// cart. All implementations must be thread-safe (Send + Sync).
///
/// Write failures propagate to the caller; the caller decides how to
/// surface them. Whether a failed *read* should be treated as an empty
/// cart is a policy of the cart layer, not of the store.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Loads the snapshot stored under `slot`.
    ///
    /// Returns `None` if the slot has never been written.
    async fn load(&self, slot: &SlotKey) -> Result<Option<CartSnapshot>>;

    /// Stores `snapshot` under `slot`, replacing any previous snapshot
    /// wholesale. The last writer wins; there is no versioning token.
    async fn save(&self, slot: &SlotKey, snapshot: CartSnapshot) -> Result<()>;
}

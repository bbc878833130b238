use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{CartSnapshot, Result, SlotKey, SnapshotStoreError, store::SnapshotStore};

/// In-memory snapshot store implementation for testing.
///
/// Provides the same interface as the PostgreSQL implementation, plus
/// write-failure injection so callers can exercise their error paths.
#[derive(Clone, Default)]
pub struct InMemorySnapshotStore {
    slots: Arc<RwLock<HashMap<SlotKey, CartSnapshot>>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemorySnapshotStore {
    /// Creates a new empty in-memory snapshot store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of populated slots.
    pub async fn slot_count(&self) -> usize {
        self.slots.read().await.len()
    }

    /// Clears all slots.
    pub async fn clear(&self) {
        self.slots.write().await.clear();
    }

    /// When set, every subsequent `save` fails with `Unavailable`.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self, slot: &SlotKey) -> Result<Option<CartSnapshot>> {
        Ok(self.slots.read().await.get(slot).cloned())
    }

    async fn save(&self, slot: &SlotKey, snapshot: CartSnapshot) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SnapshotStoreError::Unavailable);
        }

        self.slots.write().await.insert(slot.clone(), snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(items: serde_json::Value) -> CartSnapshot {
        CartSnapshot::new(items)
    }

    #[tokio::test]
    async fn load_empty_slot_returns_none() {
        let store = InMemorySnapshotStore::new();
        let result = store.load(&SlotKey::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn save_then_load_roundtrip() {
        let store = InMemorySnapshotStore::new();
        let slot = SlotKey::default();
        let state = serde_json::json!([{"id": 42, "amount": 3}]);

        store.save(&slot, snapshot(state.clone())).await.unwrap();

        let loaded = store.load(&slot).await.unwrap().unwrap();
        assert_eq!(loaded.state, state);
    }

    #[tokio::test]
    async fn save_overwrites_previous_snapshot() {
        let store = InMemorySnapshotStore::new();
        let slot = SlotKey::default();

        store
            .save(&slot, snapshot(serde_json::json!([{"id": 1, "amount": 1}])))
            .await
            .unwrap();
        store
            .save(&slot, snapshot(serde_json::json!([{"id": 1, "amount": 2}])))
            .await
            .unwrap();

        let loaded = store.load(&slot).await.unwrap().unwrap();
        assert_eq!(loaded.state, serde_json::json!([{"id": 1, "amount": 2}]));
        assert_eq!(store.slot_count().await, 1);
    }

    #[tokio::test]
    async fn slots_are_independent() {
        let store = InMemorySnapshotStore::new();

        store
            .save(&SlotKey::new("a"), snapshot(serde_json::json!([1])))
            .await
            .unwrap();
        store
            .save(&SlotKey::new("b"), snapshot(serde_json::json!([2])))
            .await
            .unwrap();

        let a = store.load(&SlotKey::new("a")).await.unwrap().unwrap();
        let b = store.load(&SlotKey::new("b")).await.unwrap().unwrap();
        assert_eq!(a.state, serde_json::json!([1]));
        assert_eq!(b.state, serde_json::json!([2]));
    }

    #[tokio::test]
    async fn injected_write_failure_leaves_slot_untouched() {
        let store = InMemorySnapshotStore::new();
        let slot = SlotKey::default();

        store
            .save(&slot, snapshot(serde_json::json!([{"id": 1, "amount": 1}])))
            .await
            .unwrap();

        store.fail_writes(true);
        let result = store
            .save(&slot, snapshot(serde_json::json!([{"id": 1, "amount": 9}])))
            .await;
        assert!(matches!(result, Err(SnapshotStoreError::Unavailable)));

        store.fail_writes(false);
        let loaded = store.load(&slot).await.unwrap().unwrap();
        assert_eq!(loaded.state, serde_json::json!([{"id": 1, "amount": 1}]));
    }
}

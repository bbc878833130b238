//! The cart store: in-memory state plus orchestration of the inventory
//! client, the snapshot store, and the notification sink.

use common::ItemId;
use inventory::InventoryClient;
use snapshot_store::{CartSnapshot, SlotKey, SnapshotStore};

use crate::{Cart, CartFailure, CartItem, NotificationSink};

/// Owns the authoritative in-memory cart for one session.
///
/// Mutations take `&mut self` and contain no internal locking: the store
/// relies on the caller not to issue a new mutation while a prior one is
/// suspended on an inventory or persistence call. Two overlapping
/// mutations can otherwise lose an update (both read the same
/// pre-mutation amount and the second write wins).
///
/// Every mutation re-validates against live stock instead of trusting a
/// cached level, because stock can change between operations. The extra
/// round trip per mutation is the accepted cost.
///
/// Failures never escape a mutation: each one is converted into exactly
/// one [`NotificationSink`] call and the cart keeps its pre-operation
/// state. New state is computed on a copy and committed to memory only
/// after the snapshot write succeeds, so no partial mutation is ever
/// persisted or exposed.
pub struct CartStore<I, P, N> {
    cart: Cart,
    slot: SlotKey,
    inventory: I,
    snapshots: P,
    sink: N,
}

impl<I, P, N> CartStore<I, P, N>
where
    I: InventoryClient,
    P: SnapshotStore,
    N: NotificationSink,
{
    /// Creates a store seeded from the persistent snapshot.
    ///
    /// A missing, unreadable, or undecodable snapshot yields an empty
    /// cart; a corrupted mirror must never block first use.
    #[tracing::instrument(skip(inventory, snapshots, sink), fields(slot = %slot))]
    pub async fn load(slot: SlotKey, inventory: I, snapshots: P, sink: N) -> Self {
        let cart = match snapshots.load(&slot).await {
            Ok(Some(snapshot)) => match snapshot.into_state::<Cart>() {
                Ok(cart) => {
                    tracing::info!(items = cart.len(), "cart restored from snapshot");
                    cart
                }
                Err(error) => {
                    tracing::warn!(%error, "discarding undecodable cart snapshot");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(error) => {
                tracing::warn!(%error, "snapshot load failed, starting with an empty cart");
                Cart::new()
            }
        };

        Self {
            cart,
            slot,
            inventory,
            snapshots,
            sink,
        }
    }

    /// Adds one unit of `item_id` to the cart.
    ///
    /// An item not yet in the cart enters at the end with amount 1,
    /// using metadata fetched from the inventory service. An existing
    /// entry has its amount bumped by one. Either way the proposed
    /// amount must not exceed live stock.
    #[tracing::instrument(skip(self))]
    pub async fn add_item(&mut self, item_id: ItemId) {
        metrics::counter!("cart_mutations_total").increment(1);
        if let Err(failure) = self.try_add_item(item_id).await {
            self.report(failure);
        }
    }

    /// Removes `item_id` from the cart, preserving the order of the
    /// remaining items. Success is silent.
    #[tracing::instrument(skip(self))]
    pub async fn remove_item(&mut self, item_id: ItemId) {
        metrics::counter!("cart_mutations_total").increment(1);
        if let Err(failure) = self.try_remove_item(item_id).await {
            self.report(failure);
        }
    }

    /// Sets the amount for `item_id` to exactly `amount`.
    ///
    /// A zero or negative amount is a silent no-op: quantity steppers
    /// occasionally emit those and they must not clear the entry.
    #[tracing::instrument(skip(self))]
    pub async fn set_amount(&mut self, item_id: ItemId, amount: i64) {
        if amount <= 0 {
            return;
        }

        metrics::counter!("cart_mutations_total").increment(1);
        if let Err(failure) = self.try_set_amount(item_id, amount).await {
            self.report(failure);
        }
    }

    async fn try_add_item(&mut self, item_id: ItemId) -> Result<(), CartFailure> {
        let stock = self
            .inventory
            .get_stock(item_id)
            .await
            .map_err(|e| service_failure(e, CartFailure::AddFailed))?;

        let current = self.cart.amount_of(item_id).unwrap_or(0);
        let proposed = current + 1;
        if !stock.permits(proposed) {
            return Err(CartFailure::OutOfStock);
        }

        let mut next = self.cart.clone();
        if next.contains(item_id) {
            next.set_amount(item_id, proposed);
        } else {
            let product = self
                .inventory
                .get_item(item_id)
                .await
                .map_err(|e| service_failure(e, CartFailure::AddFailed))?;
            next.push(CartItem::from_product(product));
        }

        self.commit(next, CartFailure::AddFailed).await
    }

    async fn try_remove_item(&mut self, item_id: ItemId) -> Result<(), CartFailure> {
        // Absence is an ordinary branch, not an exception to catch.
        if !self.cart.contains(item_id) {
            return Err(CartFailure::RemoveFailed);
        }

        let mut next = self.cart.clone();
        next.remove(item_id);

        self.commit(next, CartFailure::RemoveFailed).await
    }

    async fn try_set_amount(&mut self, item_id: ItemId, amount: i64) -> Result<(), CartFailure> {
        let stock = self
            .inventory
            .get_stock(item_id)
            .await
            .map_err(|e| service_failure(e, CartFailure::SetAmountFailed))?;

        if amount > i64::from(stock.get()) {
            return Err(CartFailure::OutOfStock);
        }
        // Fits in u32: 0 < amount <= stock.
        let amount = amount as u32;

        if !self.cart.contains(item_id) {
            return Err(CartFailure::SetAmountFailed);
        }

        let mut next = self.cart.clone();
        next.set_amount(item_id, amount);

        self.commit(next, CartFailure::SetAmountFailed).await
    }

    /// Write-through: persist `next`, then make it the in-memory cart.
    ///
    /// If the snapshot write fails the in-memory cart is untouched and
    /// the operation's failure kind is returned.
    async fn commit(&mut self, next: Cart, on_failure: CartFailure) -> Result<(), CartFailure> {
        let snapshot =
            CartSnapshot::from_state(&next).map_err(|e| service_failure(e, on_failure))?;

        self.snapshots
            .save(&self.slot, snapshot)
            .await
            .map_err(|e| service_failure(e, on_failure))?;

        self.cart = next;
        Ok(())
    }

    fn report(&self, failure: CartFailure) {
        metrics::counter!("cart_mutation_failures_total").increment(1);
        self.sink.notify(failure);
    }

    /// Returns the items in display order.
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Returns the current amount for an item, if present.
    pub fn amount_of(&self, item_id: ItemId) -> Option<u32> {
        self.cart.amount_of(item_id)
    }

    /// Returns the number of distinct items.
    pub fn len(&self) -> usize {
        self.cart.len()
    }

    /// Returns true if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Returns the snapshot slot this store writes through to.
    pub fn slot(&self) -> &SlotKey {
        &self.slot
    }
}

/// Logs a collaborator failure and maps it to the operation's kind.
fn service_failure(error: impl std::fmt::Display, kind: CartFailure) -> CartFailure {
    tracing::warn!(%error, "cart collaborator call failed");
    kind
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Money;
    use inventory::{InMemoryInventory, Product};
    use snapshot_store::InMemorySnapshotStore;

    use crate::RecordingSink;

    fn sneaker() -> Product {
        Product::new(1u64, "Sneaker", Money::from_cents(17990), "sneaker.jpg")
    }

    async fn store_with_stock(
        stock: u32,
    ) -> (
        CartStore<InMemoryInventory, InMemorySnapshotStore, RecordingSink>,
        InMemoryInventory,
        InMemorySnapshotStore,
        RecordingSink,
    ) {
        let inventory = InMemoryInventory::with_products([(sneaker(), stock)]).await;
        let snapshots = InMemorySnapshotStore::new();
        let sink = RecordingSink::new();
        let store = CartStore::load(
            SlotKey::default(),
            inventory.clone(),
            snapshots.clone(),
            sink.clone(),
        )
        .await;
        (store, inventory, snapshots, sink)
    }

    #[tokio::test]
    async fn load_with_corrupted_snapshot_starts_empty() {
        let snapshots = InMemorySnapshotStore::new();
        snapshots
            .save(
                &SlotKey::default(),
                CartSnapshot::new(serde_json::json!({"not": "a cart"})),
            )
            .await
            .unwrap();

        let store = CartStore::load(
            SlotKey::default(),
            InMemoryInventory::new(),
            snapshots,
            RecordingSink::new(),
        )
        .await;

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn inventory_outage_during_add_keeps_everything_unchanged() {
        let (mut store, inventory, snapshots, sink) = store_with_stock(3).await;
        store.add_item(ItemId::new(1)).await;
        assert_eq!(store.amount_of(ItemId::new(1)), Some(1));

        inventory.set_unavailable(true);
        store.add_item(ItemId::new(1)).await;

        assert_eq!(store.amount_of(ItemId::new(1)), Some(1));
        assert_eq!(sink.take(), vec![CartFailure::AddFailed]);

        // The persisted mirror still holds the pre-failure state.
        let snapshot = snapshots.load(&SlotKey::default()).await.unwrap().unwrap();
        let persisted: Cart = snapshot.into_state().unwrap();
        assert_eq!(persisted.amount_of(ItemId::new(1)), Some(1));
    }

    #[tokio::test]
    async fn persistence_outage_during_add_keeps_memory_unchanged() {
        let (mut store, _inventory, snapshots, sink) = store_with_stock(3).await;

        snapshots.fail_writes(true);
        store.add_item(ItemId::new(1)).await;

        assert!(store.is_empty());
        assert_eq!(sink.take(), vec![CartFailure::AddFailed]);
    }

    #[tokio::test]
    async fn unknown_item_reports_add_failed_not_out_of_stock() {
        let (mut store, _inventory, _snapshots, sink) = store_with_stock(3).await;

        store.add_item(ItemId::new(99)).await;

        assert!(store.is_empty());
        assert_eq!(sink.take(), vec![CartFailure::AddFailed]);
    }
}

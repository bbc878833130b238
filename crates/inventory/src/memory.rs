use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use common::ItemId;
use tokio::sync::RwLock;

use crate::{InventoryClient, InventoryError, Product, Result, StockLevel};

/// In-memory inventory implementation for testing.
///
/// Holds a product catalog with per-item stock and provides the same
/// interface as the HTTP client, plus outage injection so callers can
/// exercise their failure paths.
#[derive(Clone, Default)]
pub struct InMemoryInventory {
    items: Arc<RwLock<HashMap<ItemId, StockedProduct>>>,
    unavailable: Arc<AtomicBool>,
}

#[derive(Debug, Clone)]
struct StockedProduct {
    product: Product,
    stock: u32,
}

impl InMemoryInventory {
    /// Creates a new empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an inventory pre-populated with products and stock.
    pub async fn with_products(products: impl IntoIterator<Item = (Product, u32)>) -> Self {
        let inventory = Self::new();
        for (product, stock) in products {
            inventory.add_product(product, stock).await;
        }
        inventory
    }

    /// Adds a product with the given stock, replacing any previous entry.
    pub async fn add_product(&self, product: Product, stock: u32) {
        self.items
            .write()
            .await
            .insert(product.id, StockedProduct { product, stock });
    }

    /// Sets the stock for an existing product.
    pub async fn set_stock(&self, item_id: ItemId, stock: u32) {
        if let Some(entry) = self.items.write().await.get_mut(&item_id) {
            entry.stock = stock;
        }
    }

    /// Returns the number of products in the catalog.
    pub async fn product_count(&self) -> usize {
        self.items.read().await.len()
    }

    /// When set, every subsequent call fails with `Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(InventoryError::Unavailable);
        }
        Ok(())
    }
}

#[async_trait]
impl InventoryClient for InMemoryInventory {
    async fn get_stock(&self, item_id: ItemId) -> Result<StockLevel> {
        self.check_available()?;

        let items = self.items.read().await;
        match items.get(&item_id) {
            Some(entry) => Ok(StockLevel::new(entry.stock)),
            None => Err(InventoryError::NotFound(item_id)),
        }
    }

    async fn get_item(&self, item_id: ItemId) -> Result<Product> {
        self.check_available()?;

        let items = self.items.read().await;
        match items.get(&item_id) {
            Some(entry) => Ok(entry.product.clone()),
            None => Err(InventoryError::NotFound(item_id)),
        }
    }
}

use async_trait::async_trait;
use common::ItemId;

use crate::{Product, Result, StockLevel};

/// Core trait for inventory service clients.
///
/// Both calls suspend; the cart awaits them to completion or failure and
/// imposes no deadline of its own. All implementations must be
/// thread-safe (Send + Sync).
#[async_trait]
pub trait InventoryClient: Send + Sync {
    /// Returns the live available stock for an item.
    async fn get_stock(&self, item_id: ItemId) -> Result<StockLevel>;

    /// Returns full product metadata for an item.
    async fn get_item(&self, item_id: ItemId) -> Result<Product>;
}

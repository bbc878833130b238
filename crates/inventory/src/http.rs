use async_trait::async_trait;
use common::ItemId;
use reqwest::Client;
use serde::Deserialize;

use crate::{InventoryClient, InventoryError, Product, Result, StockLevel};

/// Stock endpoint response body: `{ "amount": n }`.
#[derive(Debug, Deserialize)]
struct StockResponse {
    amount: u32,
}

/// HTTP client for the inventory service.
///
/// Talks to two endpoints relative to the configured base URL:
/// `GET stock/{id}` for the live stock ceiling and `GET products/{id}`
/// for product metadata. No request deadline is imposed; calls are
/// awaited to completion or failure.
#[derive(Debug, Clone)]
pub struct HttpInventoryClient {
    client: Client,
    base_url: String,
}

impl HttpInventoryClient {
    /// Creates a new client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client reusing an existing `reqwest::Client`.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, resource: &str, item_id: ItemId) -> String {
        format!("{}/{}/{}", self.base_url, resource, item_id)
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: String,
        item_id: ItemId,
    ) -> Result<T> {
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            // 404 is the service saying "no such item", not an outage.
            tracing::debug!(%url, "inventory resource not found");
            return Err(InventoryError::NotFound(item_id));
        }
        if !status.is_success() {
            return Err(InventoryError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl InventoryClient for HttpInventoryClient {
    async fn get_stock(&self, item_id: ItemId) -> Result<StockLevel> {
        let url = self.endpoint("stock", item_id);
        let stock: StockResponse = self.get_json(url, item_id).await?;
        Ok(StockLevel::new(stock.amount))
    }

    async fn get_item(&self, item_id: ItemId) -> Result<Product> {
        let url = self.endpoint("products", item_id);
        self.get_json(url, item_id).await
    }
}

//! Inventory service client.
//!
//! The cart queries the inventory service for two things: the live stock
//! ceiling of an item (`GET stock/{id}`) and full product metadata for
//! items entering the cart (`GET products/{id}`). A service failure is
//! reported as an error, never as "stock = 0" or "item absent": callers
//! must be able to tell outage and legitimate absence apart.

pub mod client;
pub mod error;
pub mod http;
pub mod memory;
pub mod product;

pub use client::InventoryClient;
pub use error::{InventoryError, Result};
pub use http::HttpInventoryClient;
pub use memory::InMemoryInventory;
pub use product::{Product, StockLevel};

use common::ItemId;
use thiserror::Error;

/// Errors that can occur when querying the inventory service.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The HTTP request itself failed (connection, protocol, decode).
    #[error("Inventory request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with an unexpected status code.
    #[error("Inventory service returned status {status}")]
    UnexpectedStatus { status: u16 },

    /// The item is not known to the inventory service.
    #[error("Item not found in inventory: {0}")]
    NotFound(ItemId),

    /// The service could not be reached.
    #[error("Inventory service unavailable")]
    Unavailable,
}

/// Result type for inventory operations.
pub type Result<T> = std::result::Result<T, InventoryError>;

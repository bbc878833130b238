//! Application configuration loaded from environment variables.

use snapshot_store::SlotKey;

/// Wiring configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `INVENTORY_URL` — inventory service base URL (default: `"http://localhost:3333"`)
/// - `DATABASE_URL` — snapshot database (default: `"postgres://localhost:5432/cart"`)
/// - `CART_SLOT` — snapshot slot key (default: `"cart"`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub inventory_url: String,
    pub database_url: String,
    pub slot: String,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            inventory_url: std::env::var("INVENTORY_URL")
                .unwrap_or_else(|_| "http://localhost:3333".to_string()),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/cart".to_string()),
            slot: std::env::var("CART_SLOT").unwrap_or_else(|_| "cart".to_string()),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Returns the snapshot slot as a typed key.
    pub fn slot_key(&self) -> SlotKey {
        SlotKey::new(self.slot.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_url: "http://localhost:3333".to_string(),
            database_url: "postgres://localhost:5432/cart".to_string(),
            slot: "cart".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.inventory_url, "http://localhost:3333");
        assert_eq!(config.slot, "cart");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_slot_key_conversion() {
        let config = Config {
            slot: "checkout-cart".to_string(),
            ..Config::default()
        };
        assert_eq!(config.slot_key(), SlotKey::new("checkout-cart"));
    }
}

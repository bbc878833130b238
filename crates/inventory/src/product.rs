use common::{ItemId, Money};
use serde::{Deserialize, Serialize};

/// Product metadata as served by `GET products/{id}`.
///
/// Carries everything the catalog knows about an item except a cart
/// quantity; `amount` only exists once the item is in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// The catalog identifier.
    pub id: ItemId,

    /// Human-readable product name.
    pub name: String,

    /// Price in cents. Opaque to the cart.
    pub price: Money,

    /// Image URL.
    pub image: String,
}

impl Product {
    /// Creates a new product.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

/// The maximum quantity of one item currently available.
///
/// Queried per mutation and never cached across mutations: stock can
/// change between operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockLevel(u32);

impl StockLevel {
    /// Creates a stock level from a unit count.
    pub fn new(units: u32) -> Self {
        Self(units)
    }

    /// Returns the available unit count.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Returns true if `amount` units can be taken at this level.
    pub fn permits(&self, amount: u32) -> bool {
        amount <= self.0
    }
}

impl std::fmt::Display for StockLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StockLevel {
    fn from(units: u32) -> Self {
        Self(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_level_permits_up_to_available_units() {
        let stock = StockLevel::new(3);
        assert!(stock.permits(1));
        assert!(stock.permits(3));
        assert!(!stock.permits(4));
    }

    #[test]
    fn zero_stock_permits_nothing() {
        assert!(!StockLevel::new(0).permits(1));
        assert!(StockLevel::new(0).permits(0));
    }

    #[test]
    fn product_deserializes_from_catalog_json() {
        let json = r#"{"id": 2, "name": "Trail Runner", "price": 13990, "image": "trail.jpg"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, ItemId::new(2));
        assert_eq!(product.name, "Trail Runner");
        assert_eq!(product.price, Money::from_cents(13990));
    }

    #[test]
    fn product_serialization_roundtrip() {
        let product = Product::new(1u64, "Sneaker", Money::from_cents(17990), "shoe.jpg");
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}

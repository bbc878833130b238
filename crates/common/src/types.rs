use serde::{Deserialize, Serialize};

/// Unique identifier for a catalog item.
///
/// Wraps the numeric id used by the catalog and inventory services to
/// provide type safety and prevent mixing up item ids with other
/// numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Creates an item ID from a raw numeric id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying numeric id.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ItemId> for u64 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

/// Price amount represented in cents to avoid floating point issues.
///
/// The cart treats prices as opaque descriptive data; no arithmetic is
/// performed on them beyond display formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a new price from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollar portion (whole number).
    pub fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (remainder after dollars).
    pub fn cents_part(&self) -> i64 {
        self.0.abs() % 100
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 < 0 {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_roundtrips_raw_value() {
        let id = ItemId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(u64::from(id), 42);
    }

    #[test]
    fn item_id_serializes_as_bare_number() {
        let id = ItemId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");

        let back: ItemId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn money_display() {
        assert_eq!(Money::from_cents(17990).to_string(), "$179.90");
        assert_eq!(Money::from_cents(100).to_string(), "$1.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-1234).to_string(), "-$12.34");
    }

    #[test]
    fn money_serializes_as_bare_cents() {
        let price = Money::from_cents(17990);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "17990");

        let back: Money = serde_json::from_str("17990").unwrap();
        assert_eq!(back, price);
    }
}

//! Cart value objects.

use common::{ItemId, Money};
use inventory::Product;
use serde::{Deserialize, Serialize};

/// An item held in the cart: product metadata plus the requested amount.
///
/// `amount` is at least 1 for as long as the item is in the cart; an
/// item whose quantity drops to zero is removed instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// The catalog identifier.
    pub id: ItemId,

    /// Human-readable product name.
    pub name: String,

    /// Price in cents. Opaque to the cart.
    pub price: Money,

    /// Image URL.
    pub image: String,

    /// Requested quantity.
    pub amount: u32,
}

impl CartItem {
    /// Creates a cart entry for a freshly added product, with amount 1.
    pub fn from_product(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            amount: 1,
        }
    }
}

/// The ordered, identifier-unique collection of items in a session.
///
/// Insertion order is the display order; the cart is never re-sorted.
/// Serializes as the bare item array, which is also the persisted wire
/// format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the items in display order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns the entry for an item, if present.
    pub fn get(&self, item_id: ItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Returns true if the cart holds an entry for `item_id`.
    pub fn contains(&self, item_id: ItemId) -> bool {
        self.get(item_id).is_some()
    }

    /// Returns the current amount for an item, if present.
    pub fn amount_of(&self, item_id: ItemId) -> Option<u32> {
        self.get(item_id).map(|item| item.amount)
    }

    /// Appends a new entry at the end of the cart.
    ///
    /// The caller must have checked that no entry with the same id
    /// exists; appending a duplicate would break the uniqueness
    /// invariant.
    pub fn push(&mut self, item: CartItem) {
        debug_assert!(!self.contains(item.id));
        self.items.push(item);
    }

    /// Sets the amount for an existing entry.
    ///
    /// Returns false (and changes nothing) if the item is not in the
    /// cart.
    pub fn set_amount(&mut self, item_id: ItemId, amount: u32) -> bool {
        match self.items.iter_mut().find(|item| item.id == item_id) {
            Some(item) => {
                item.amount = amount;
                true
            }
            None => false,
        }
    }

    /// Removes the entry for an item, preserving the order of the rest.
    ///
    /// Returns the removed entry, or None if the item was not in the
    /// cart.
    pub fn remove(&mut self, item_id: ItemId) -> Option<CartItem> {
        let position = self.items.iter().position(|item| item.id == item_id)?;
        Some(self.items.remove(position))
    }

    /// Returns the number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

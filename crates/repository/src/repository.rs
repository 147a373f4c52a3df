use std::collections::HashMap;

use stockroom_core::{InventoryError, InventoryItem, InventoryResult, ItemId};

/// Generic keyed store for one item variant.
///
/// Owns every item it holds; each key equals the id of its mapped item and
/// is unique within this instance. Exactly one logical owner mutates a
/// repository (hard single-writer assumption), so the mutation surface takes
/// `&mut self` and there is no interior locking.
///
/// Every operation either fully applies its effect or leaves storage
/// unchanged.
#[derive(Debug)]
pub struct InventoryRepository<T: InventoryItem> {
    items: HashMap<ItemId, T>,
}

impl<T: InventoryItem> InventoryRepository<T> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Store `item` under its id.
    ///
    /// The duplicate check runs before any mutation: a failed insert leaves
    /// the existing entry untouched, never overwritten.
    pub fn insert(&mut self, item: T) -> InventoryResult<()> {
        let id = item.id();
        if self.items.contains_key(&id) {
            return Err(InventoryError::duplicate(id));
        }
        self.items.insert(id, item);
        Ok(())
    }

    /// Look up the item stored under `id`. Read-only.
    pub fn get(&self, id: ItemId) -> InventoryResult<&T> {
        self.items.get(&id).ok_or(InventoryError::NotFound(id))
    }

    /// Remove and return the item stored under `id`.
    ///
    /// Once removed, further `get`/`remove`/`set_quantity` calls on the id
    /// report `NotFound`.
    pub fn remove(&mut self, id: ItemId) -> InventoryResult<T> {
        self.items.remove(&id).ok_or(InventoryError::NotFound(id))
    }

    /// Replace the quantity of the item stored under `id`, leaving every
    /// other field unchanged.
    ///
    /// Validation precedes the existence check: a negative quantity reports
    /// `InvalidQuantity` even when `id` is absent.
    pub fn set_quantity(&mut self, id: ItemId, quantity: i64) -> InventoryResult<()> {
        if quantity < 0 {
            return Err(InventoryError::invalid_quantity(format!(
                "quantity cannot be negative (got {quantity})"
            )));
        }
        let item = self.items.get_mut(&id).ok_or(InventoryError::NotFound(id))?;
        item.set_quantity(quantity);
        Ok(())
    }

    /// Snapshot of all stored items, in unspecified order.
    ///
    /// The returned vector is a copy; mutating it does not touch the store.
    pub fn list(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: InventoryItem> Default for InventoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

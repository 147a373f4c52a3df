use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryItem, ItemId};

/// Grocery stock item with a fixed expiry date.
///
/// The expiry is a calendar date, not an instant; it never changes after
/// construction. The quantity is the only mutable field and is overwritten
/// through the storing repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    id: ItemId,
    name: String,
    quantity: i64,
    expires_on: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: i64, expires_on: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            expires_on,
        }
    }

    pub fn expires_on(&self) -> NaiveDate {
        self.expires_on
    }
}

impl InventoryItem for GroceryItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl core::fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[G] {}: {} (qty {}) expires {}",
            self.id, self.name, self.quantity, self.expires_on
        )
    }
}

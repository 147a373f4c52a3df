use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryItem, ItemId};

/// Electronic stock item: branded, sold with a warranty.
///
/// Brand and warranty length are fixed at construction. The quantity is the
/// only mutable field and is overwritten through the storing repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    id: ItemId,
    name: String,
    quantity: i64,
    brand: String,
    warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        quantity: i64,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl InventoryItem for ElectronicItem {
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

impl core::fmt::Display for ElectronicItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[E] {}: {} (qty {}) brand {}, warranty {}m",
            self.id, self.name, self.quantity, self.brand, self.warranty_months
        )
    }
}

use chrono::{Days, Months, Utc};

use stockroom_catalog::{ElectronicItem, GroceryItem};
use stockroom_core::{InventoryError, InventoryItem, InventoryResult, ItemId};
use stockroom_repository::InventoryRepository;

/// Binds an item variant to the manager field that stocks it.
///
/// Implemented exactly once per variant, so manager operations stay generic
/// and select the right repository through `T` instead of carrying a
/// per-variant method set.
pub trait Stocked: InventoryItem {
    fn repository(manager: &WarehouseManager) -> &InventoryRepository<Self>;
    fn repository_mut(manager: &mut WarehouseManager) -> &mut InventoryRepository<Self>;
}

/// Orchestration layer over one repository per stocked variant.
///
/// The manager is the error boundary: every repository failure is caught
/// here, logged, and reported as an operation outcome. Nothing is retried
/// (no transient failure modes exist in an in-memory store) and nothing
/// propagates further.
#[derive(Debug)]
pub struct WarehouseManager {
    electronics: InventoryRepository<ElectronicItem>,
    groceries: InventoryRepository<GroceryItem>,
}

impl Stocked for ElectronicItem {
    fn repository(manager: &WarehouseManager) -> &InventoryRepository<Self> {
        &manager.electronics
    }

    fn repository_mut(manager: &mut WarehouseManager) -> &mut InventoryRepository<Self> {
        &mut manager.electronics
    }
}

impl Stocked for GroceryItem {
    fn repository(manager: &WarehouseManager) -> &InventoryRepository<Self> {
        &manager.groceries
    }

    fn repository_mut(manager: &mut WarehouseManager) -> &mut InventoryRepository<Self> {
        &mut manager.groceries
    }
}

impl WarehouseManager {
    /// Create a manager with both repositories empty.
    pub fn new() -> Self {
        Self {
            electronics: InventoryRepository::new(),
            groceries: InventoryRepository::new(),
        }
    }

    /// Populate both repositories with the starter inventory.
    ///
    /// A failed insert is logged and skipped; the remaining items are still
    /// seeded.
    pub fn seed(&mut self) {
        let today = Utc::now().date_naive();

        let electronics = [
            ElectronicItem::new(ItemId::new(1), "Laptop", 5, "Dell", 24),
            ElectronicItem::new(ItemId::new(2), "Headphones", 15, "Sony", 12),
        ];
        for item in electronics {
            if let Err(err) = self.electronics.insert(item) {
                tracing::warn!("seed skipped an electronic item: {err}");
            }
        }

        let groceries = [
            GroceryItem::new(ItemId::new(101), "Rice", 50, today + Months::new(12)),
            GroceryItem::new(ItemId::new(102), "Milk", 20, today + Days::new(7)),
        ];
        for item in groceries {
            if let Err(err) = self.groceries.insert(item) {
                tracing::warn!("seed skipped a grocery item: {err}");
            }
        }

        tracing::info!(
            "warehouse seeded: {} electronics, {} groceries",
            self.electronics.len(),
            self.groceries.len()
        );
    }

    /// Snapshot of every item in `T`'s repository, in unspecified order.
    pub fn list_all<T: Stocked>(&self) -> Vec<T> {
        T::repository(self).list()
    }

    /// Add `delta` units to the stock of `id`. Returns whether the increase
    /// was applied.
    ///
    /// A negative delta is rejected before the repository is touched; every
    /// failure along the path is logged here and reported as the outcome.
    pub fn increase_stock<T: Stocked>(&mut self, id: ItemId, delta: i64) -> bool {
        match self.try_increase_stock::<T>(id, delta) {
            Ok(quantity) => {
                tracing::info!("increased stock of item {id} by {delta}, now {quantity}");
                true
            }
            Err(err) => {
                tracing::warn!("increase stock of item {id} rejected: {err}");
                false
            }
        }
    }

    fn try_increase_stock<T: Stocked>(&mut self, id: ItemId, delta: i64) -> InventoryResult<i64> {
        if delta < 0 {
            return Err(InventoryError::invalid_quantity(format!(
                "increase delta cannot be negative (got {delta})"
            )));
        }

        let repo = T::repository_mut(self);
        let current = repo.get(id)?.quantity();
        let next = current
            .checked_add(delta)
            .ok_or_else(|| InventoryError::invalid_quantity("stock overflow"))?;
        repo.set_quantity(id, next)?;
        Ok(next)
    }

    /// Remove the item stored under `id`. Returns whether an item was
    /// removed; a missing id is logged and reported, not propagated.
    pub fn remove_by_id<T: Stocked>(&mut self, id: ItemId) -> bool {
        match T::repository_mut(self).remove(id) {
            Ok(item) => {
                tracing::info!("removed item {id} ({})", item.name());
                true
            }
            Err(err) => {
                tracing::warn!("remove of item {id} rejected: {err}");
                false
            }
        }
    }

    pub fn electronics(&self) -> &InventoryRepository<ElectronicItem> {
        &self.electronics
    }

    pub fn electronics_mut(&mut self) -> &mut InventoryRepository<ElectronicItem> {
        &mut self.electronics
    }

    pub fn groceries(&self) -> &InventoryRepository<GroceryItem> {
        &self.groceries
    }

    pub fn groceries_mut(&mut self) -> &mut InventoryRepository<GroceryItem> {
        &mut self.groceries
    }
}

impl Default for WarehouseManager {
    fn default() -> Self {
        Self::new()
    }
}

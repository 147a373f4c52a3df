//! Item capability trait: the surface a type must expose to be stored
//! generically.

use crate::id::ItemId;

/// Minimal interface over anything a warehouse repository can hold.
///
/// Identity is fixed at construction and the display name is read-only; the
/// on-hand quantity is the one mutable field. Quantity mutation flows
/// through the storing repository so the non-negative guard lives in one
/// place instead of being a caller convention.
pub trait InventoryItem: Clone + core::fmt::Debug + core::fmt::Display {
    /// Unique key of this item within its repository.
    fn id(&self) -> ItemId;

    /// Human-readable display name.
    fn name(&self) -> &str;

    /// Units currently on hand.
    fn quantity(&self) -> i64;

    /// Overwrite the on-hand quantity.
    ///
    /// Raw hook with no validation of its own; repositories validate before
    /// calling it.
    fn set_quantity(&mut self, quantity: i64);
}

//! Failure taxonomy for warehouse storage operations.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the warehouse domain.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Closed set of failures a repository operation can raise.
///
/// All three kinds are deterministic given the same state and inputs. Each
/// variant carries what a caller needs for a readable message and nothing
/// more (no nested cause, no backtrace). Raising is the storage layer's job;
/// logging is the caller's.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// An item with this id is already stored; the existing entry is kept.
    #[error("item already exists: {0}")]
    DuplicateItem(ItemId),

    /// No item is stored under this id.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// A supplied quantity failed validation (negative or out of range).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),
}

impl InventoryError {
    pub fn duplicate(id: ItemId) -> Self {
        Self::DuplicateItem(id)
    }

    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound(id)
    }

    pub fn invalid_quantity(reason: impl Into<String>) -> Self {
        Self::InvalidQuantity(reason.into())
    }
}

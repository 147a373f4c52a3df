//! `stockroom-core` — warehouse domain building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, no IO).

pub mod error;
pub mod id;
pub mod item;

pub use error::{InventoryError, InventoryResult};
pub use id::ItemId;
pub use item::InventoryItem;
